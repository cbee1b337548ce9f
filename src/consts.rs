/// Capacity used by `OrderedArrayMap::new` and `Default`
pub const DEFAULT_CAPACITY: usize = 10;

/// Growth factor applied when an insert finds the buffer full
pub(crate) const GROWTH_FACTOR: usize = 2;
