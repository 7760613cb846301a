use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Result;

use super::model::Track;

/// Source of the full track catalog.
///
/// An unavailable library is reported as an empty catalog, not an error;
/// errors are reserved for a catalog that exists but cannot be read.
pub trait CatalogProvider {
    fn load_tracks(&self) -> Result<Vec<Track>>;
}

#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    tracks: Vec<Track>,
}

/// Catalog exported to a file on disk.
///
/// `.toml` files are parsed as TOML; anything else is parsed as JSON.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn is_toml(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("toml"))
        .unwrap_or(false)
}

impl CatalogProvider for FileCatalog {
    fn load_tracks(&self) -> Result<Vec<Track>> {
        if !self.path.exists() {
            tracing::debug!("catalog {} not found, treating as empty", self.path.display());
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let file: CatalogFile = if is_toml(&self.path) {
            toml::from_str(&content)?
        } else {
            serde_json::from_str(&content)?
        };

        tracing::debug!(
            "loaded {} tracks from {}",
            file.tracks.len(),
            self.path.display()
        );
        Ok(file.tracks)
    }
}
