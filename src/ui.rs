//! Plain-text rendering for the command line.
//!
//! Each function writes one view (track table, suggestion list, stats) to
//! any `io::Write`, so output can be captured in tests.

use std::io::{self, Write};

use crate::library::{LibraryStats, SortKey, Track, accessible_duration, formatted_duration};
use crate::queue::{QueueBehavior, QueueRequest};
use crate::suggestions::DuplicateGroup;

/// Width of the title column before truncation.
const TITLE_WIDTH: usize = 32;

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let mut out: String = s.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn sort_bar(active: SortKey) -> String {
    SortKey::ALL
        .iter()
        .map(|k| {
            let text = format!("{} {}", k.label(), k.icon(*k == active));
            if *k == active { format!("[{text}]") } else { text }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Render the full track table in the given order.
pub fn draw_tracks(out: &mut impl Write, tracks: &[Track], sort: SortKey) -> io::Result<()> {
    writeln!(out, "{}", sort_bar(sort))?;
    writeln!(
        out,
        "{:>10}  {:>6}  {:>8}  {:<width$}  {}",
        "ID",
        "PLAYS",
        "LENGTH",
        "TITLE",
        "ARTIST / ALBUM",
        width = TITLE_WIDTH
    )?;
    for t in tracks {
        let marker = if t.has_local_asset { "" } else { " (cloud)" };
        writeln!(
            out,
            "{:>10}  {:>6}  {:>8}  {:<width$}  {} / {}{marker}",
            t.id,
            t.play_count,
            formatted_duration(t.duration_seconds),
            truncate(&t.title, TITLE_WIDTH),
            t.artist,
            t.album,
            width = TITLE_WIDTH
        )?;
    }
    Ok(())
}

/// Render the active suggestions, largest gap first.
pub fn draw_suggestions(out: &mut impl Write, groups: &[DuplicateGroup]) -> io::Result<()> {
    if groups.is_empty() {
        writeln!(out, "No duplicate tracks with differing play counts.")?;
        return Ok(());
    }

    for group in groups {
        writeln!(
            out,
            "{} by {}  ({}, gap {})",
            group.shared_title(),
            group.shared_artist(),
            group.version_count_label(),
            group.play_count_gap()
        )?;
        let lowest = group.lowest().id;
        let highest = group.highest().id;
        for t in group.members() {
            let tag = if t.id == lowest {
                "  lowest"
            } else if t.id == highest {
                "  highest"
            } else {
                ""
            };
            writeln!(
                out,
                "    [{}] {:>6} plays  {}  {}{tag}",
                t.id,
                t.play_count,
                formatted_duration(t.duration_seconds),
                t.album
            )?;
        }
        if group.can_dismiss_individually() {
            writeln!(out, "    (single versions can be dismissed with `dismiss-song`)")?;
        }
    }
    Ok(())
}

pub fn draw_stats(out: &mut impl Write, stats: &LibraryStats) -> io::Result<()> {
    writeln!(out, "Tracks:              {}", stats.total_tracks)?;
    writeln!(out, "With play counts:    {}", stats.tracks_with_play_counts)?;
    writeln!(out, "With local files:    {}", stats.tracks_with_local_assets)?;
    writeln!(out, "Average play count:  {:.1}", stats.average_play_count)?;
    writeln!(out, "Duplicate groups:    {}", stats.duplicate_groups)?;
    Ok(())
}

/// Confirmation printed after a successful enqueue.
pub fn draw_queued(out: &mut impl Write, track: &Track, request: &QueueRequest) -> io::Result<()> {
    writeln!(
        out,
        "{} copies of {} ({}) added to the queue; it will reach {} plays.",
        request.count,
        track.title,
        accessible_duration(track.duration_seconds),
        request.resulting_plays
    )?;
    writeln!(
        out,
        "  {} {}: {}",
        request.behavior.icon(),
        request.behavior.display_name(),
        request.behavior.description()
    )
}

/// Every queue behavior, the configured one marked with `*`.
pub fn draw_behaviors(out: &mut impl Write, configured: QueueBehavior) -> io::Result<()> {
    for behavior in QueueBehavior::ALL {
        let marker = if behavior == configured { '*' } else { ' ' };
        writeln!(
            out,
            "{marker} {} {:<14} {:<8} {}",
            behavior.icon(),
            behavior.display_name(),
            behavior.as_str(),
            behavior.description()
        )?;
    }
    Ok(())
}
