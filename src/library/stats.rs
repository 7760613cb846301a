use super::model::Track;

/// Summary numbers shown above the track list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LibraryStats {
    pub total_tracks: usize,
    pub tracks_with_play_counts: usize,
    pub tracks_with_local_assets: usize,
    pub average_play_count: f64,
    /// Number of active duplicate suggestions; filled in by the caller.
    pub duplicate_groups: usize,
}

impl LibraryStats {
    pub fn new(tracks: &[Track]) -> Self {
        let total_tracks = tracks.len();
        let total_plays: u64 = tracks.iter().map(|t| t.play_count).sum();

        Self {
            total_tracks,
            tracks_with_play_counts: tracks.iter().filter(|t| t.play_count > 0).count(),
            tracks_with_local_assets: tracks.iter().filter(|t| t.has_local_asset).count(),
            average_play_count: if total_tracks == 0 {
                0.0
            } else {
                total_plays as f64 / total_tracks as f64
            },
            duplicate_groups: 0,
        }
    }

    pub fn with_duplicate_groups(mut self, count: usize) -> Self {
        self.duplicate_groups = count;
        self
    }
}
