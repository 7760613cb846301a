use std::error::Error;
use std::io::Write;

use crate::config::Settings;
use crate::error;
use crate::library::{LibraryStats, Track, TrackId, sort_by};
use crate::queue::{self, QueueFileSink, QueueMode, QueueSink};
use crate::store::DismissalStore;
use crate::suggestions::SharedEngine;
use crate::ui;

use super::cli::Command;

fn find_track(tracks: &[Track], id: TrackId) -> error::Result<&Track> {
    tracks
        .iter()
        .find(|t| t.id == id)
        .ok_or(error::Error::UnknownTrack(id))
}

/// Resolve the (selected, other) versions of a `queue` invocation.
fn queue_targets<'a>(
    tracks: &'a [Track],
    track_id: Option<TrackId>,
    against: Option<TrackId>,
    pair: Option<&[TrackId]>,
) -> error::Result<(&'a Track, &'a Track)> {
    match (track_id, against, pair) {
        (_, _, Some(&[a, b])) => {
            let a = find_track(tracks, a)?;
            let b = find_track(tracks, b)?;
            let selected = queue::default_selection(a, b)
                .ok_or(error::Error::NoDefaultSelection(a.id, b.id))?;
            let other = if selected.id == a.id { b } else { a };
            Ok((selected, other))
        }
        (Some(selected), Some(other), None) => {
            Ok((find_track(tracks, selected)?, find_track(tracks, other)?))
        }
        _ => Err(error::Error::Usage(
            "queue needs TRACK_ID --against OTHER_ID or --pair A B".to_string(),
        )),
    }
}

/// Run one command against an already analyzed engine.
pub fn execute<S: DismissalStore>(
    command: Command,
    tracks: &[Track],
    engine: &SharedEngine<S>,
    settings: &Settings,
    out: &mut impl Write,
) -> Result<(), Box<dyn Error>> {
    let mut engine = engine.lock().unwrap_or_else(|e| e.into_inner());

    match command {
        Command::List { sort } => {
            let key = sort.unwrap_or(settings.library.sort);
            ui::draw_tracks(out, &sort_by(key, tracks), key)?;
        }
        Command::Suggest => {
            ui::draw_suggestions(out, &engine.active_suggestions())?;
        }
        Command::DismissGroup { title, artist } => {
            engine.dismiss_group(&title, &artist);
            writeln!(out, "Dismissed all versions of {title} by {artist}.")?;
        }
        Command::DismissSong {
            title,
            artist,
            track_id,
        } => {
            engine.dismiss_song(&title, &artist, track_id);
            writeln!(out, "Dismissed track {track_id} from {title} by {artist}.")?;
        }
        Command::Reset => {
            engine.reset_dismissals();
            writeln!(out, "All dismissed suggestions restored.")?;
        }
        Command::Stats => {
            let stats = LibraryStats::new(tracks)
                .with_duplicate_groups(engine.active_suggestions().len());
            ui::draw_stats(out, &stats)?;
        }
        Command::Queue {
            track_id,
            against,
            pair,
            mode,
            behavior,
        } => {
            let (selected, other) = queue_targets(tracks, track_id, against, pair.as_deref())?;
            let mode = mode.unwrap_or(settings.queue.mode);
            let behavior = behavior.unwrap_or(settings.queue.behavior);

            let Some(request) = queue::plan(selected, other, mode, behavior) else {
                match mode {
                    QueueMode::Match => writeln!(
                        out,
                        "Nothing to queue: track {} already has {} plays against {}.",
                        selected.id, selected.play_count, other.play_count
                    )?,
                    QueueMode::Add => writeln!(
                        out,
                        "Nothing to queue: track {} has never been played.",
                        other.id
                    )?,
                }
                return Ok(());
            };

            let mut sink = QueueFileSink::new(settings.queue_path(), tracks.to_vec());
            sink.enqueue(&request).map_err(error::Error::from)?;
            ui::draw_queued(out, selected, &request)?;
        }
        Command::Behaviors => {
            ui::draw_behaviors(out, settings.queue.behavior)?;
        }
    }

    Ok(())
}
