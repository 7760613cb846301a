use std::path::PathBuf;

use serde::Deserialize;

use crate::library::SortKey;
use crate::queue::{QueueBehavior, QueueMode};

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/recount/config.toml` or `~/.config/recount/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `RECOUNT__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub store: StoreSettings,
    pub queue: QueueSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Catalog export to read (`.json` or `.toml`).
    ///
    /// Defaults to `$XDG_DATA_HOME/recount/catalog.json`.
    pub catalog_path: Option<PathBuf>,
    /// Initial ordering of the track list.
    pub sort: SortKey,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StoreSettings {
    /// Where dismissed suggestions are remembered.
    ///
    /// Defaults to `$XDG_DATA_HOME/recount/dismissed.json`.
    pub dismissals_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct QueueSettings {
    /// `prepend` (play next) or `replace` (wipe the queue).
    pub behavior: QueueBehavior,
    /// `match` (catch up to the other version) or `add` (one copy per play of the other).
    pub mode: QueueMode,
    /// Queue file written by the `queue` command.
    ///
    /// Defaults to `$XDG_DATA_HOME/recount/queue.txt`.
    pub queue_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    ///
    /// Example: "warn", "recount=debug"
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}
