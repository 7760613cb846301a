//! Persistence for the dismissal set.
//!
//! The suggestion engine is the only reader and writer of the key format;
//! stores only need to round-trip an unordered set of strings.

use std::collections::HashSet;

use crate::error::Result;

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Key-value storage for one string set.
pub trait DismissalStore {
    /// Load the persisted set, or `None` when nothing was ever saved.
    fn load(&self) -> Result<Option<HashSet<String>>>;
    /// Replace the persisted set.
    fn save(&mut self, keys: &HashSet<String>) -> Result<()>;
    /// Remove the persisted record entirely.
    fn clear(&mut self) -> Result<()>;
}
