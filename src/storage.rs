use crate::{consts::GROWTH_FACTOR, Entry, MapError};

/// Contiguous, exclusively owned entry storage.
///
/// The buffer tracks its own logical capacity instead of trusting `Vec`'s, so the
/// growth policy is exactly "double when full" and never shrinks.
#[derive(Debug, Clone)]
pub(crate) struct EntryBuffer<K, V> {
    slots: Vec<Entry<K, V>>,
    capacity: usize,
}

impl<K, V> EntryBuffer<K, V> {
    /// Create a buffer with a logical capacity of `capacity`, allocating nothing yet.
    /// `capacity` must be non zero.
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0);

        Self {
            slots: Vec::new(),
            capacity,
        }
    }

    /// Create a buffer and allocate room for `capacity` entries up front.
    pub fn with_capacity(capacity: usize) -> Result<Self, MapError> {
        let mut buffer = Self::new(capacity);
        buffer.reserve()?;
        Ok(buffer)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.slots.len() == self.capacity
    }

    /// Make sure the allocation covers the logical capacity. No-op once it does.
    pub fn reserve(&mut self) -> Result<(), MapError> {
        let additional = self.capacity - self.slots.len();
        self.slots
            .try_reserve_exact(additional)
            .map_err(|_| MapError::CapacityOverflow)
    }

    /// Double the capacity, keeping every entry at its index.
    /// Returns the new capacity. On failure the buffer is unchanged.
    pub fn grow(&mut self) -> Result<usize, MapError> {
        let new_capacity = self
            .capacity
            .checked_mul(GROWTH_FACTOR)
            .ok_or(MapError::CapacityOverflow)?;
        self.slots
            .try_reserve_exact(new_capacity - self.slots.len())
            .map_err(|_| MapError::CapacityOverflow)?;
        self.capacity = new_capacity;
        Ok(new_capacity)
    }

    /// Append at slot `len`. The caller makes room first.
    pub fn push(&mut self, entry: Entry<K, V>) {
        debug_assert!(!self.is_full());
        self.slots.push(entry);
    }

    #[inline]
    pub fn as_slice(&self) -> &[Entry<K, V>] {
        &self.slots
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Entry<K, V>] {
        &mut self.slots
    }
}
