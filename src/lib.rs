//! Array backed map with unique keys.
//!
//! Entries are appended in insertion order. Call `sort` to order them by key, after
//! which `get` finds entries by binary search until the next insert.

mod consts;
pub use consts::DEFAULT_CAPACITY;

mod error;
pub use error::MapError;

mod entry;
pub use entry::Entry;

mod map;
pub use map::*;

pub mod key_search;

mod sort;
mod storage;

#[cfg(test)]
mod proptests;
