//! Deterministic ordering of the track list.
//!
//! Every key is a (field, direction) pair. Text fields are compared with a
//! root-locale ICU collator at primary strength, so case and diacritics do
//! not affect order ("café" sorts with "cafe") and digit runs compare
//! numerically ("Track 2" before "Track 10").

use std::cmp::Ordering;
use std::sync::OnceLock;

use icu_collator::CollatorBorrowed;
use serde::Deserialize;

use super::model::Track;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SortField {
    PlayCount,
    Title,
    Artist,
    Album,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Apply this direction to an ascending comparison result.
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// How the track list is ordered.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    #[serde(alias = "plays-desc")]
    PlayCountDescending,
    #[serde(alias = "plays-asc")]
    PlayCountAscending,
    TitleAscending,
    TitleDescending,
    ArtistAscending,
    ArtistDescending,
    AlbumAscending,
    AlbumDescending,
}

impl SortKey {
    pub const ALL: [SortKey; 8] = [
        SortKey::PlayCountDescending,
        SortKey::PlayCountAscending,
        SortKey::TitleAscending,
        SortKey::TitleDescending,
        SortKey::ArtistAscending,
        SortKey::ArtistDescending,
        SortKey::AlbumAscending,
        SortKey::AlbumDescending,
    ];

    pub fn field(self) -> SortField {
        match self {
            SortKey::PlayCountDescending | SortKey::PlayCountAscending => SortField::PlayCount,
            SortKey::TitleAscending | SortKey::TitleDescending => SortField::Title,
            SortKey::ArtistAscending | SortKey::ArtistDescending => SortField::Artist,
            SortKey::AlbumAscending | SortKey::AlbumDescending => SortField::Album,
        }
    }

    pub fn direction(self) -> SortDirection {
        match self {
            SortKey::PlayCountAscending
            | SortKey::TitleAscending
            | SortKey::ArtistAscending
            | SortKey::AlbumAscending => SortDirection::Ascending,
            SortKey::PlayCountDescending
            | SortKey::TitleDescending
            | SortKey::ArtistDescending
            | SortKey::AlbumDescending => SortDirection::Descending,
        }
    }

    /// Short label for the toolbar / column header.
    pub fn label(self) -> &'static str {
        match self.field() {
            SortField::PlayCount => "Play Count",
            SortField::Title => "Title",
            SortField::Artist => "Artist",
            SortField::Album => "Album",
        }
    }

    /// Direction glyph; filled when this key is the active one.
    pub fn icon(self, selected: bool) -> &'static str {
        match (self.direction(), selected) {
            (SortDirection::Ascending, true) => "▲",
            (SortDirection::Ascending, false) => "△",
            (SortDirection::Descending, true) => "▼",
            (SortDirection::Descending, false) => "▽",
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.label(), self.icon(true))
    }
}

/// Shared collator, built on first use.
fn text_collator() -> Option<&'static CollatorBorrowed<'static>> {
    static COLLATOR: OnceLock<Option<CollatorBorrowed<'static>>> = OnceLock::new();
    COLLATOR.get_or_init(build_collator).as_ref()
}

fn build_collator() -> Option<CollatorBorrowed<'static>> {
    let mut preferences = icu_collator::CollatorPreferences::default();
    preferences.numeric_ordering = Some(icu_collator::preferences::CollationNumericOrdering::True);

    let mut options = icu_collator::options::CollatorOptions::default();
    options.strength = Some(icu_collator::options::Strength::Primary);
    options.case_level = Some(icu_collator::options::CaseLevel::Off);

    match icu_collator::Collator::try_new(preferences, options) {
        Ok(collator) => Some(collator),
        Err(e) => {
            tracing::warn!("failed to build collator, falling back to lowercase ordering: {e}");
            None
        }
    }
}

fn compare_text(collator: Option<&CollatorBorrowed<'static>>, a: &str, b: &str) -> Ordering {
    match collator {
        Some(c) => c.compare(a, b),
        None => a.to_lowercase().cmp(&b.to_lowercase()),
    }
}

fn text_field(field: SortField, track: &Track) -> &str {
    match field {
        SortField::Title => &track.title,
        SortField::Artist => &track.artist,
        SortField::Album => &track.album,
        SortField::PlayCount => "",
    }
}

/// Return `tracks` ordered by `key`. The input is left untouched.
///
/// The sort is stable for every key: tracks that compare equal keep their
/// relative input order, in both directions.
pub fn sort_by(key: SortKey, tracks: &[Track]) -> Vec<Track> {
    let mut sorted = tracks.to_vec();
    let direction = key.direction();

    match key.field() {
        SortField::PlayCount => {
            sorted.sort_by(|a, b| direction.apply(a.play_count.cmp(&b.play_count)));
        }
        field => {
            let collator = text_collator();
            sorted.sort_by(|a, b| {
                direction.apply(compare_text(
                    collator,
                    text_field(field, a),
                    text_field(field, b),
                ))
            });
        }
    }

    sorted
}
