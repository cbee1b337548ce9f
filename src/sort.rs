//! Partition-exchange sort over map entries.
//!
//! The pivot is always the last entry of the range, so already ordered input
//! (ascending or descending) costs O(n^2) comparisons. Stack depth stays O(log n)
//! because only the smaller side is recursed into.

use crate::Entry;

/// Sort `entries` ascending by key, in place. Not stable.
pub(crate) fn quick_sort<K: Ord, V>(entries: &mut [Entry<K, V>]) {
    let mut rest = entries;

    while rest.len() > 1 {
        let pivot = partition(rest);
        let (left, right) = std::mem::take(&mut rest).split_at_mut(pivot);
        // skip the pivot, it is in its final slot
        let right = &mut right[1..];

        if left.len() < right.len() {
            quick_sort(left);
            rest = right;
        } else {
            quick_sort(right);
            rest = left;
        }
    }
}

/// Lomuto partition around the last entry's key.
/// Returns the pivot's final index.
fn partition<K: Ord, V>(entries: &mut [Entry<K, V>]) -> usize {
    let high = entries.len() - 1;
    // entries[..boundary] all have keys <= pivot
    let mut boundary = 0;

    for j in 0..high {
        if entries[j].key() <= entries[high].key() {
            entries.swap(boundary, j);
            boundary += 1;
        }
    }

    entries.swap(boundary, high);
    boundary
}
