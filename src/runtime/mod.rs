use std::error::Error;
use std::io::Write;

use clap::Parser;

use crate::config::Settings;
use crate::library::{CatalogProvider, FileCatalog, Track};
use crate::store::{DismissalStore, FileStore, MemoryStore};
use crate::suggestions::SuggestionEngine;

mod cli;
mod commands;
mod settings;

pub use cli::{Cli, Command};

pub fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let mut settings = settings::load_settings();
    settings::init_logging(&settings);

    apply_overrides(&mut settings, &cli);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with(cli, &settings, &mut out)
}

/// Command-line paths take precedence over configured ones.
fn apply_overrides(settings: &mut Settings, cli: &Cli) {
    if let Some(p) = &cli.catalog {
        settings.library.catalog_path = Some(p.clone());
    }
    if let Some(p) = &cli.store {
        settings.store.dismissals_path = Some(p.clone());
    }
}

fn load_catalog(settings: &Settings) -> Vec<Track> {
    let catalog = FileCatalog::new(settings.catalog_path());
    match catalog.load_tracks() {
        Ok(tracks) => tracks,
        Err(e) => {
            // An unreadable catalog behaves like an empty library.
            tracing::warn!("failed to read catalog {}: {e}", catalog.path().display());
            Vec::new()
        }
    }
}

/// Load the catalog, build the engine and run `cli.command`, writing to `out`.
pub fn run_with(cli: Cli, settings: &Settings, out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    let tracks = load_catalog(settings);
    let file_store = FileStore::new(settings.dismissals_path());

    if cli.dry_run {
        let seeded = match file_store.load() {
            Ok(Some(keys)) => MemoryStore::with_keys(keys),
            Ok(None) => MemoryStore::new(),
            Err(e) => {
                tracing::warn!("failed to load dismissals, starting with none: {e}");
                MemoryStore::new()
            }
        };
        dispatch(cli.command, &tracks, seeded, settings, out)
    } else {
        dispatch(cli.command, &tracks, file_store, settings, out)
    }
}

fn dispatch<S: DismissalStore>(
    command: Command,
    tracks: &[Track],
    store: S,
    settings: &Settings,
    out: &mut impl Write,
) -> Result<(), Box<dyn Error>> {
    let engine = SuggestionEngine::new(store).into_shared();
    engine
        .lock()
        .unwrap_or_else(|e| e.into_inner())
        .analyze(tracks);

    commands::execute(command, tracks, &engine, settings, out)
}
