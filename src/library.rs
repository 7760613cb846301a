//! Track catalog: the `Track` model, catalog providers, ordering and stats.
//!
//! The catalog itself is owned by the host; this module only reads it and
//! derives views (sorted lists, summary statistics, display strings).

mod catalog;
mod display;
mod model;
mod sort;
mod stats;

pub use catalog::{CatalogProvider, FileCatalog};
pub use display::{accessible_duration, formatted_duration};
pub use model::{Track, TrackId};
pub use sort::{SortDirection, SortField, SortKey, sort_by};
pub use stats::LibraryStats;

#[cfg(test)]
mod tests;
