use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::Result;

use super::DismissalStore;

/// Dismissal set kept as a JSON array of strings in a single file.
///
/// Keys are written sorted so the file diffs cleanly between saves.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DismissalStore for FileStore {
    fn load(&self) -> Result<Option<HashSet<String>>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let keys: Vec<String> = serde_json::from_str(&content)?;
        Ok(Some(keys.into_iter().collect()))
    }

    fn save(&mut self, keys: &HashSet<String>) -> Result<()> {
        let mut sorted: Vec<&String> = keys.iter().collect();
        sorted.sort();

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(&sorted)?)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
