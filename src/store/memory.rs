use std::collections::HashSet;

use crate::error::Result;

use super::DismissalStore;

/// In-process store, used for dry runs and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    saved: Option<HashSet<String>>,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that starts out holding `keys`.
    pub fn with_keys<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self {
            saved: Some(keys.into_iter().map(Into::into).collect()),
            saves: 0,
        }
    }

    pub fn saved(&self) -> Option<&HashSet<String>> {
        self.saved.as_ref()
    }

    /// Number of `save` calls so far.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DismissalStore for MemoryStore {
    fn load(&self) -> Result<Option<HashSet<String>>> {
        Ok(self.saved.clone())
    }

    fn save(&mut self, keys: &HashSet<String>) -> Result<()> {
        self.saved = Some(keys.clone());
        self.saves += 1;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.saved = None;
        Ok(())
    }
}
