//! Bucket and dismissal keys.
//!
//! Dismissal keys are opaque strings stored in a flat set. Fields are joined
//! with an ASCII unit separator so that titles or artists containing the
//! usual punctuation cannot collide with another key.

use crate::library::TrackId;

const SEP: char = '\u{1f}';
const GROUP_TAG: &str = "group";
const SONG_TAG: &str = "song";

/// Lowercase and trim surrounding whitespace.
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Normalized (title, artist) pair identifying a bucket.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct GroupKey {
    title: String,
    artist: String,
}

impl GroupKey {
    pub(crate) fn new(title: &str, artist: &str) -> Self {
        Self {
            title: normalize(title),
            artist: normalize(artist),
        }
    }

    /// Key suppressing the entire group.
    pub(crate) fn group_dismissal(&self) -> String {
        format!("{GROUP_TAG}{SEP}{}{SEP}{}", self.title, self.artist)
    }

    /// Key suppressing one member of the group.
    pub(crate) fn song_dismissal(&self, track_id: TrackId) -> String {
        format!("{SONG_TAG}{SEP}{}{SEP}{}{SEP}{track_id}", self.title, self.artist)
    }
}
