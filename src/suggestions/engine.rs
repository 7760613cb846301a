use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use crate::library::{Track, TrackId};
use crate::store::DismissalStore;

use super::group::DuplicateGroup;
use super::key::GroupKey;

/// Engine shared between threads behind a single lock, covering both the
/// raw-group cache and the dismissal set.
pub type SharedEngine<S> = Arc<Mutex<SuggestionEngine<S>>>;

/// Groups duplicate tracks and tracks which suggestions the user dismissed.
pub struct SuggestionEngine<S: DismissalStore> {
    store: S,
    dismissed: HashSet<String>,
    raw_groups: Vec<DuplicateGroup>,
}

impl<S: DismissalStore> SuggestionEngine<S> {
    /// Create an engine, loading the persisted dismissal set from `store`.
    ///
    /// A missing or unreadable record starts the engine with no dismissals.
    pub fn new(store: S) -> Self {
        let dismissed = match store.load() {
            Ok(Some(keys)) => {
                tracing::debug!("loaded {} dismissal keys", keys.len());
                keys
            }
            Ok(None) => HashSet::new(),
            Err(e) => {
                tracing::warn!("failed to load dismissals, starting with none: {e}");
                HashSet::new()
            }
        };

        Self {
            store,
            dismissed,
            raw_groups: Vec::new(),
        }
    }

    pub fn into_shared(self) -> SharedEngine<S> {
        Arc::new(Mutex::new(self))
    }

    /// Rebuild the raw groups from `tracks`, discarding the previous ones.
    pub fn analyze(&mut self, tracks: &[Track]) {
        // Buckets keep first-encounter order so the output is deterministic.
        let mut index: HashMap<GroupKey, usize> = HashMap::new();
        let mut buckets: Vec<Vec<&Track>> = Vec::new();

        for track in tracks {
            let key = GroupKey::new(&track.title, &track.artist);
            let slot = *index.entry(key).or_insert_with(|| {
                buckets.push(Vec::new());
                buckets.len() - 1
            });
            buckets[slot].push(track);
        }

        self.raw_groups = buckets
            .into_iter()
            .filter(|bucket| bucket.len() >= 2)
            .map(|bucket| {
                let first = bucket[0];
                let mut members: Vec<Track> = bucket.iter().map(|t| (*t).clone()).collect();
                members.sort_by_key(|t| t.play_count);
                DuplicateGroup::new(first.title.clone(), first.artist.clone(), members)
            })
            .collect();

        tracing::debug!(
            "analyzed {} tracks into {} duplicate groups",
            tracks.len(),
            self.raw_groups.len()
        );
    }

    /// Groups produced by the last `analyze`, before dismissals are applied.
    pub fn raw_groups(&self) -> &[DuplicateGroup] {
        &self.raw_groups
    }

    /// Groups still visible after applying dismissals, largest play-count gap first.
    pub fn active_suggestions(&self) -> Vec<DuplicateGroup> {
        let mut active: Vec<DuplicateGroup> = self
            .raw_groups
            .iter()
            .filter_map(|group| {
                let key = GroupKey::new(group.shared_title(), group.shared_artist());
                if self.dismissed.contains(&key.group_dismissal()) {
                    return None;
                }

                let remaining: Vec<Track> = group
                    .members()
                    .iter()
                    .filter(|t| !self.dismissed.contains(&key.song_dismissal(t.id)))
                    .cloned()
                    .collect();

                if remaining.len() < 2 {
                    return None;
                }
                Some(group.with_members(remaining))
            })
            .collect();

        active.sort_by(|a, b| b.play_count_gap().cmp(&a.play_count_gap()));
        active
    }

    /// Hide one track from the group keyed by `title` / `artist`.
    pub fn dismiss_song(&mut self, title: &str, artist: &str, track_id: TrackId) {
        let key = GroupKey::new(title, artist).song_dismissal(track_id);
        self.dismissed.insert(key);
        tracing::info!("dismissed track {track_id} from '{title}' by '{artist}'");
        self.persist();
    }

    /// Hide the whole group keyed by `title` / `artist`.
    pub fn dismiss_group(&mut self, title: &str, artist: &str) {
        let key = GroupKey::new(title, artist).group_dismissal();
        self.dismissed.insert(key);
        tracing::info!("dismissed group '{title}' by '{artist}'");
        self.persist();
    }

    /// Forget every dismissal and remove the persisted record.
    pub fn reset_dismissals(&mut self) {
        self.dismissed.clear();
        if let Err(e) = self.store.clear() {
            tracing::warn!("failed to clear persisted dismissals: {e}");
        }
        tracing::info!("reset all dismissals");
    }

    /// Number of dismissal keys held, including redundant ones.
    pub fn dismissal_count(&self) -> usize {
        self.dismissed.len()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn persist(&mut self) {
        if let Err(e) = self.store.save(&self.dismissed) {
            tracing::warn!("failed to persist dismissals: {e}");
        }
    }
}
