//! Configuration loader and schema types.
//!
//! This module exposes the configuration schema (catalog and store
//! locations, queue preferences, log filter) and helpers to load it from
//! disk and the environment.

mod load;
mod schema;

pub use schema::*;
