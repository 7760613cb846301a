use crate::library::Track;

use super::types::{QueueBehavior, QueueMode, QueueRequest};

/// The version to queue by default: the one with fewer plays.
///
/// Returns `None` when both have the same count and the user has to pick.
pub fn default_selection<'a>(a: &'a Track, b: &'a Track) -> Option<&'a Track> {
    if a.play_count == b.play_count {
        None
    } else if a.play_count <= b.play_count {
        Some(a)
    } else {
        Some(b)
    }
}

/// Work out how many copies of `selected` to queue against `other`.
///
/// Returns `None` when the mode has nothing to do: in `Match` mode when
/// `selected` already has at least as many plays, in `Add` mode when
/// `other` was never played. `resulting_plays` saturates at `u64::MAX`.
pub fn plan(
    selected: &Track,
    other: &Track,
    mode: QueueMode,
    behavior: QueueBehavior,
) -> Option<QueueRequest> {
    let (count, resulting_plays) = match mode {
        QueueMode::Match => {
            let needed = other.play_count.checked_sub(selected.play_count)?;
            (needed, other.play_count)
        }
        QueueMode::Add => (
            other.play_count,
            selected.play_count.saturating_add(other.play_count),
        ),
    };

    if count == 0 {
        return None;
    }

    Some(QueueRequest {
        track_id: selected.id,
        count,
        behavior,
        resulting_plays,
    })
}
