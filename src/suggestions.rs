//! Duplicate detection and the dismissal model.
//!
//! `SuggestionEngine` buckets the catalog by normalized (title, artist) and
//! keeps the resulting raw groups. The groups the user actually sees are
//! re-derived on every read by filtering the raw groups against a persisted
//! set of dismissal keys, so dismissing never mutates the raw groups and a
//! reset restores them exactly.

mod engine;
mod group;
mod key;

pub use engine::{SharedEngine, SuggestionEngine};
pub use group::{DuplicateGroup, GroupId};
pub use key::normalize;
