use uuid::Uuid;

use crate::library::Track;

/// Identifier assigned when a group is built; stable for its in-memory lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupId(Uuid);

impl GroupId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for GroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tracks sharing a normalized title and artist.
///
/// A group always has at least two members.
#[derive(Debug, Clone, PartialEq)]
pub struct DuplicateGroup {
    id: GroupId,
    shared_title: String,
    shared_artist: String,
    members: Vec<Track>,
}

fn assert_enough_members(members: &[Track]) {
    assert!(
        members.len() >= 2,
        "duplicate group must contain at least 2 tracks, got {}",
        members.len()
    );
}

impl DuplicateGroup {
    /// Build a group with a fresh id.
    ///
    /// # Panics
    ///
    /// Panics if `members` has fewer than two tracks.
    pub fn new(shared_title: impl Into<String>, shared_artist: impl Into<String>, members: Vec<Track>) -> Self {
        assert_enough_members(&members);
        Self {
            id: GroupId::new(),
            shared_title: shared_title.into(),
            shared_artist: shared_artist.into(),
            members,
        }
    }

    /// Same group (same id) with `members` replaced.
    ///
    /// # Panics
    ///
    /// Panics if `members` has fewer than two tracks.
    pub fn with_members(&self, members: Vec<Track>) -> Self {
        assert_enough_members(&members);
        Self {
            id: self.id,
            shared_title: self.shared_title.clone(),
            shared_artist: self.shared_artist.clone(),
            members,
        }
    }

    pub fn id(&self) -> GroupId {
        self.id
    }

    /// Display title, taken verbatim from one member.
    pub fn shared_title(&self) -> &str {
        &self.shared_title
    }

    /// Display artist, taken verbatim from one member.
    pub fn shared_artist(&self) -> &str {
        &self.shared_artist
    }

    pub fn members(&self) -> &[Track] {
        &self.members
    }

    /// Member with the fewest plays; the first one on ties.
    pub fn lowest(&self) -> &Track {
        let mut lowest = &self.members[0];
        for track in &self.members[1..] {
            if track.play_count < lowest.play_count {
                lowest = track;
            }
        }
        lowest
    }

    /// Member with the most plays; the first one on ties.
    pub fn highest(&self) -> &Track {
        let mut highest = &self.members[0];
        for track in &self.members[1..] {
            if track.play_count > highest.play_count {
                highest = track;
            }
        }
        highest
    }

    pub fn play_count_gap(&self) -> u64 {
        self.highest().play_count - self.lowest().play_count
    }

    /// Single members can only be dismissed while at least two would remain.
    pub fn can_dismiss_individually(&self) -> bool {
        self.members.len() > 2
    }

    pub fn version_count_label(&self) -> String {
        format!("{} versions", self.members.len())
    }
}
