use std::{borrow::Borrow, cmp::Ordering};

use crate::Entry;

pub trait KeySearcher {
    /// search `k` in `entries`, returns the slot holding it
    fn search<K, V, Q>(entries: &[Entry<K, V>], k: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord;
}

/// Halving search. Only correct when `entries` is sorted ascending by key, on
/// unsorted input it may miss a present key.
pub struct BinarySearch;

impl KeySearcher for BinarySearch {
    fn search<K, V, Q>(entries: &[Entry<K, V>], k: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        // `high` is one past the inclusive upper bound, so the probe is the lower
        // middle of [low, high - 1]
        let mut low = 0;
        let mut high = entries.len();

        while low < high {
            let mid = low + (high - 1 - low) / 2;
            match k.cmp(entries[mid].key().borrow()) {
                Ordering::Equal => return Some(mid),
                Ordering::Less => high = mid,
                Ordering::Greater => low = mid + 1,
            }
        }

        None
    }
}

/// Full scan comparing every slot, correct whatever the order.
pub struct LinearSearch;

impl KeySearcher for LinearSearch {
    fn search<K, V, Q>(entries: &[Entry<K, V>], k: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        entries
            .iter()
            .position(|entry| entry.key().borrow().cmp(k) == Ordering::Equal)
    }
}
