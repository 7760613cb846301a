//! Crate-wide error type.

use thiserror::Error;

use crate::queue::QueueError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Filesystem access failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON catalog or dismissal file could not be (de)serialized.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// A TOML catalog could not be parsed.
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Queue(#[from] QueueError),

    /// A track id was referenced that the catalog does not contain.
    #[error("no track with id {0} in the catalog")]
    UnknownTrack(crate::library::TrackId),

    /// Neither version of a pair has fewer plays, so none can be picked.
    #[error("tracks {0} and {1} have the same play count; choose one with TRACK_ID --against")]
    NoDefaultSelection(crate::library::TrackId, crate::library::TrackId),

    #[error("a command-line argument was rejected: {0}")]
    Usage(String),
}
