//! Spot duplicate library tracks whose play counts drifted apart.
//!
//! Tracks sharing a title and artist (compared case- and
//! whitespace-insensitively) are grouped into suggestions. Suggestions can be
//! dismissed per group or per track; dismissals are persisted and re-applied
//! every time the suggestions are read.

pub mod config;
pub mod error;
pub mod library;
pub mod queue;
pub mod runtime;
pub mod store;
pub mod suggestions;
pub mod ui;
