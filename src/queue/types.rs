//! Queue enums and the request handed to a sink.

use serde::Deserialize;

use crate::library::TrackId;

/// Where queued copies go relative to whatever is already queued.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
pub enum QueueBehavior {
    /// Play right after the current item.
    #[default]
    #[serde(rename = "prepend", alias = "insert-next")]
    #[value(name = "prepend", alias = "insert-next")]
    InsertNext,
    /// Throw away the current queue.
    #[serde(rename = "replace", alias = "replace-queue")]
    #[value(name = "replace", alias = "replace-queue")]
    ReplaceQueue,
}

impl QueueBehavior {
    pub const ALL: [QueueBehavior; 2] = [QueueBehavior::InsertNext, QueueBehavior::ReplaceQueue];

    /// Stable identifier used in config files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            QueueBehavior::InsertNext => "prepend",
            QueueBehavior::ReplaceQueue => "replace",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            QueueBehavior::InsertNext => "Insert Next",
            QueueBehavior::ReplaceQueue => "Replace Queue",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            QueueBehavior::InsertNext => "Adds the copies to play next, keeping the rest of the queue.",
            QueueBehavior::ReplaceQueue => "Wipes the current queue and starts over with the copies.",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            QueueBehavior::InsertNext => "⏭",
            QueueBehavior::ReplaceQueue => "⟲",
        }
    }
}

impl std::fmt::Display for QueueBehavior {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// How the repeat count is derived.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum QueueMode {
    /// Queue just enough copies to bring the selected version level with the other.
    #[default]
    Match,
    /// Queue one copy per play the other version has.
    Add,
}

/// What to enqueue: `count` copies of `track_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueRequest {
    pub track_id: TrackId,
    pub count: u64,
    pub behavior: QueueBehavior,
    /// Play count the selected version ends up with once every copy has played.
    pub resulting_plays: u64,
}
