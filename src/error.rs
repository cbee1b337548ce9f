/// Errors returned by `OrderedArrayMap` operations.
///
/// Every variant is a routine, recoverable outcome. The map is left untouched when
/// one of them is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    /// `insert` was called with a key that is already stored
    #[error("key already exists")]
    DuplicateKey,

    /// `get` exhausted its search without an exact match
    #[error("key not found")]
    KeyNotFound,

    /// A map was requested with no room for a single entry
    #[error("capacity must be at least 1")]
    ZeroCapacity,

    /// The requested or doubled capacity does not fit in memory
    #[error("capacity overflow")]
    CapacityOverflow,
}
