use serde::{Deserialize, Serialize};

/// Opaque catalog identifier, stable for the lifetime of the catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(pub u64);

impl std::fmt::Display for TrackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TrackId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(TrackId)
    }
}

/// One catalog entry as supplied by the host library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: TrackId,
    #[serde(default = "unknown_title")]
    pub title: String,
    #[serde(default = "unknown_artist")]
    pub artist: String,
    #[serde(default = "unknown_album")]
    pub album: String,
    #[serde(default)]
    pub play_count: u64,
    #[serde(default)]
    pub duration_seconds: f64,
    /// Whether a playable local file backs this entry.
    #[serde(default)]
    pub has_local_asset: bool,
}

fn unknown_title() -> String {
    "Unknown Title".to_string()
}

fn unknown_artist() -> String {
    "Unknown Artist".to_string()
}

fn unknown_album() -> String {
    "Unknown Album".to_string()
}
