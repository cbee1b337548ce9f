use std::borrow::Borrow;

use crate::{
    consts::DEFAULT_CAPACITY,
    key_search::{BinarySearch, KeySearcher, LinearSearch},
    sort::quick_sort,
    storage::EntryBuffer,
    Entry, MapError,
};

/// Map backed by one contiguous array of unique key-value entries.
///
/// Entries are kept in insertion order until [`OrderedArrayMap::sort`] is called.
/// [`OrderedArrayMap::get`] is a binary search, so it is only reliable while the map
/// is sorted: any insert after a sort may leave `get` unable to find a present key.
/// Use [`OrderedArrayMap::is_sorted`] to check, or [`OrderedArrayMap::contains_key`]
/// for an order independent test.
///
/// # Example
/// ```rust
/// use ordered_array_map::{MapError, OrderedArrayMap};
///
/// let mut map = OrderedArrayMap::new();
/// map.insert("banana", 10).unwrap();
/// map.insert("apple", 5).unwrap();
/// map.insert("cherry", 20).unwrap();
///
/// map.sort();
/// assert_eq!(map.get(&"apple"), Ok(&5));
/// assert_eq!(map.get(&"cherry"), Ok(&20));
///
/// assert_eq!(map.insert("apple", 99), Err(MapError::DuplicateKey));
/// assert_eq!(map.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct OrderedArrayMap<K, V> {
    buffer: EntryBuffer<K, V>,
    sorted: bool,
    st: Statistic,
}

impl<K: Ord, V> Default for OrderedArrayMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> OrderedArrayMap<K, V> {
    /// Create an empty map with room for `DEFAULT_CAPACITY` entries
    ///
    /// # Examples
    /// ```rust
    /// use ordered_array_map::{OrderedArrayMap, DEFAULT_CAPACITY};
    ///
    /// let map = OrderedArrayMap::<i32, i32>::new();
    /// assert!(map.is_empty());
    /// assert_eq!(map.capacity(), DEFAULT_CAPACITY);
    /// ```
    pub fn new() -> Self {
        Self::from_buffer(EntryBuffer::new(DEFAULT_CAPACITY))
    }

    /// Create an empty map with room for `capacity` entries before the first growth.
    ///
    /// Fails with [`MapError::ZeroCapacity`] for `0` and with
    /// [`MapError::CapacityOverflow`] if the entries cannot be allocated.
    ///
    /// # Examples
    /// ```rust
    /// use ordered_array_map::{MapError, OrderedArrayMap};
    ///
    /// let map = OrderedArrayMap::<i32, i32>::with_capacity(4).unwrap();
    /// assert_eq!(map.capacity(), 4);
    ///
    /// assert_eq!(
    ///     OrderedArrayMap::<i32, i32>::with_capacity(0).unwrap_err(),
    ///     MapError::ZeroCapacity
    /// );
    /// ```
    pub fn with_capacity(capacity: usize) -> Result<Self, MapError> {
        if capacity == 0 {
            return Err(MapError::ZeroCapacity);
        }

        Ok(Self::from_buffer(EntryBuffer::with_capacity(capacity)?))
    }

    fn from_buffer(buffer: EntryBuffer<K, V>) -> Self {
        Self {
            buffer,
            sorted: true,
            st: Statistic::default(),
        }
    }

    /// Returns item count in the map
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if the map contains no item
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of entries the map holds before it has to grow
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Returns true if `get` is currently reliable: the map was sorted and nothing was
    /// inserted since, or it holds at most one entry.
    #[inline]
    pub fn is_sorted(&self) -> bool {
        self.sorted || self.len() <= 1
    }

    /// The occupied slots, in storage order
    pub fn entries(&self) -> &[Entry<K, V>] {
        self.buffer.as_slice()
    }

    pub fn statistic(&self) -> &Statistic {
        &self.st
    }

    /// Insert a key-value pair, appending it after the existing entries.
    ///
    /// Fails with [`MapError::DuplicateKey`] without touching the map if the key is
    /// already present. The check is a full scan since storage may be unsorted.
    /// Fails with [`MapError::CapacityOverflow`] if the buffer cannot grow.
    ///
    /// # Examples
    /// ```rust
    /// use ordered_array_map::{MapError, OrderedArrayMap};
    ///
    /// let mut map = OrderedArrayMap::with_capacity(1).unwrap();
    /// map.insert(1, "one").unwrap();
    /// map.insert(2, "two").unwrap();
    /// assert_eq!(map.capacity(), 2);
    ///
    /// assert_eq!(map.insert(1, "uno"), Err(MapError::DuplicateKey));
    /// assert_eq!(map.len(), 2);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Result<(), MapError> {
        if self.contains_key(&key) {
            self.st.rejected_inserts += 1;
            log::debug!("rejected duplicate key, len {}", self.len());
            return Err(MapError::DuplicateKey);
        }

        if self.buffer.is_full() {
            let old_capacity = self.buffer.capacity();
            let new_capacity = self.buffer.grow()?;
            self.st.grow_count += 1;
            log::trace!("grow entry buffer {old_capacity} -> {new_capacity}");
        } else {
            self.buffer.reserve()?;
        }

        self.buffer.push(Entry::new(key, value));
        self.sorted = false;

        Ok(())
    }

    /// Returns the value stored for `key`, by binary search over the occupied slots.
    ///
    /// The result is only guaranteed while [`OrderedArrayMap::is_sorted`] holds. On an
    /// unsorted map a present key may be reported as [`MapError::KeyNotFound`].
    ///
    /// # Examples
    /// ```rust
    /// use ordered_array_map::{MapError, OrderedArrayMap};
    ///
    /// let mut map = OrderedArrayMap::new();
    /// map.insert("b".to_string(), 2).unwrap();
    /// map.insert("a".to_string(), 1).unwrap();
    /// map.sort();
    ///
    /// assert_eq!(map.get("a"), Ok(&1));
    /// assert_eq!(map.get("z"), Err(MapError::KeyNotFound));
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Result<&V, MapError>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let entries = self.buffer.as_slice();
        match BinarySearch::search(entries, key) {
            Some(idx) => Ok(entries[idx].value()),
            None => {
                log::trace!("key not found, len {} sorted {}", self.len(), self.sorted);
                Err(MapError::KeyNotFound)
            }
        }
    }

    /// Returns true if `key` is stored. Scans every slot, so it does not depend on the
    /// map being sorted.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        LinearSearch::search(self.buffer.as_slice(), key).is_some()
    }

    /// Sort the occupied slots ascending by key, in place.
    ///
    /// Pivots on the last entry of each range, so input that is already in descending
    /// (or ascending) order is the O(n^2) worst case.
    ///
    /// # Examples
    /// ```rust
    /// use ordered_array_map::OrderedArrayMap;
    ///
    /// let mut map = OrderedArrayMap::new();
    /// map.insert(3, 'c').unwrap();
    /// map.insert(1, 'a').unwrap();
    /// map.insert(2, 'b').unwrap();
    /// assert!(!map.is_sorted());
    ///
    /// map.sort();
    /// assert!(map.is_sorted());
    /// let keys = map.entries().iter().map(|e| *e.key()).collect::<Vec<_>>();
    /// assert_eq!(keys, vec![1, 2, 3]);
    /// ```
    pub fn sort(&mut self) {
        log::debug!("sort {} entries", self.len());
        quick_sort(self.buffer.as_mut_slice());
        self.sorted = true;
        self.st.sort_count += 1;
    }
}

/// Counters for perf tuning
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Statistic {
    /// times the buffer doubled
    pub grow_count: u64,
    /// times `sort` ran
    pub sort_count: u64,
    /// inserts refused for an existing key
    pub rejected_inserts: u64,
}
