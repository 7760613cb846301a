use std::path::PathBuf;

use clap::{ArgGroup, Parser, Subcommand};

use crate::library::{SortKey, TrackId};
use crate::queue::{QueueBehavior, QueueMode};

/// Find tracks that were played under separate catalog entries.
#[derive(Debug, Parser)]
#[command(name = "recount", version, about)]
pub struct Cli {
    /// Catalog export to read instead of the configured one.
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Dismissal file to use instead of the configured one.
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Apply dismissals in memory only; nothing is written back.
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print every track in the chosen order.
    List {
        #[arg(long, value_enum)]
        sort: Option<SortKey>,
    },
    /// Print the duplicate groups that have not been dismissed.
    Suggest,
    /// Stop suggesting a song altogether.
    DismissGroup { title: String, artist: String },
    /// Stop suggesting one version of a song.
    DismissSong {
        title: String,
        artist: String,
        track_id: TrackId,
    },
    /// Bring back every dismissed suggestion.
    Reset,
    /// Print library statistics.
    Stats,
    /// Queue a version enough times to catch up with another.
    ///
    /// Either name the version with TRACK_ID and its target with --against,
    /// or pass both versions with --pair and let the one with fewer plays
    /// be queued.
    #[command(group(ArgGroup::new("target").required(true).args(["track_id", "pair"])))]
    Queue {
        /// Version to queue.
        #[arg(requires = "against")]
        track_id: Option<TrackId>,
        /// Version whose play count is the target.
        #[arg(long, requires = "track_id")]
        against: Option<TrackId>,
        /// Two versions of the same song; the lower play count is queued.
        #[arg(long, num_args = 2, value_names = ["A", "B"], conflicts_with = "track_id")]
        pair: Option<Vec<TrackId>>,
        #[arg(long, value_enum)]
        mode: Option<QueueMode>,
        #[arg(long, value_enum)]
        behavior: Option<QueueBehavior>,
    },
    /// List the available queue behaviors.
    Behaviors,
}
