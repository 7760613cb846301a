use super::*;
use crate::library::{Track, TrackId};
use tempfile::tempdir;

fn t(id: u64, plays: u64) -> Track {
    Track {
        id: TrackId(id),
        title: "Song".into(),
        artist: "Artist".into(),
        album: "Album".into(),
        play_count: plays,
        duration_seconds: 180.0,
        has_local_asset: true,
    }
}

fn read_lines(path: &std::path::Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn default_selection_prefers_lower_play_count() {
    let low = t(1, 5);
    let high = t(2, 50);
    assert_eq!(default_selection(&low, &high).unwrap().id, TrackId(1));
    assert_eq!(default_selection(&high, &low).unwrap().id, TrackId(1));
    assert!(default_selection(&t(3, 7), &t(4, 7)).is_none());
}

#[test]
fn match_mode_queues_the_difference() {
    let req = plan(&t(1, 20), &t(2, 50), QueueMode::Match, QueueBehavior::InsertNext).unwrap();
    assert_eq!(req.track_id, TrackId(1));
    assert_eq!(req.count, 30);
    assert_eq!(req.resulting_plays, 50);
    assert_eq!(req.behavior, QueueBehavior::InsertNext);
}

#[test]
fn match_mode_has_nothing_to_do_when_already_ahead_or_level() {
    assert!(plan(&t(1, 50), &t(2, 20), QueueMode::Match, QueueBehavior::InsertNext).is_none());
    assert!(plan(&t(1, 20), &t(2, 20), QueueMode::Match, QueueBehavior::InsertNext).is_none());
}

#[test]
fn add_mode_queues_one_per_play_of_the_other() {
    let req = plan(&t(1, 20), &t(2, 50), QueueMode::Add, QueueBehavior::ReplaceQueue).unwrap();
    assert_eq!(req.count, 50);
    assert_eq!(req.resulting_plays, 70);
    assert_eq!(req.behavior, QueueBehavior::ReplaceQueue);

    assert!(plan(&t(1, 20), &t(2, 0), QueueMode::Add, QueueBehavior::InsertNext).is_none());
}

#[test]
fn add_mode_saturates_resulting_plays() {
    let req = plan(&t(1, u64::MAX), &t(2, 5), QueueMode::Add, QueueBehavior::InsertNext).unwrap();
    assert_eq!(req.count, 5);
    assert_eq!(req.resulting_plays, u64::MAX);
}

#[test]
fn match_mode_handles_extreme_counts() {
    let req = plan(&t(1, 0), &t(2, u64::MAX), QueueMode::Match, QueueBehavior::InsertNext).unwrap();
    assert_eq!(req.count, u64::MAX);
    assert_eq!(req.resulting_plays, u64::MAX);
}

#[test]
fn behavior_metadata() {
    assert_eq!(QueueBehavior::InsertNext.display_name(), "Insert Next");
    assert_eq!(QueueBehavior::ReplaceQueue.display_name(), "Replace Queue");
    assert!(QueueBehavior::InsertNext.description().contains("next"));
    assert!(QueueBehavior::ReplaceQueue.description().contains("Wipes"));
    assert_eq!(QueueBehavior::InsertNext.as_str(), "prepend");
    assert_eq!(QueueBehavior::ReplaceQueue.as_str(), "replace");
    for behavior in QueueBehavior::ALL {
        assert!(!behavior.icon().is_empty());
    }
    assert_eq!(QueueBehavior::default(), QueueBehavior::InsertNext);
}

#[test]
fn replace_queue_overwrites_the_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("queue.txt");
    std::fs::write(&path, "99\n99\n").unwrap();

    let mut sink = QueueFileSink::new(&path, vec![t(1, 0), t(2, 3)]);
    let req = plan(&t(1, 0), &t(2, 3), QueueMode::Match, QueueBehavior::ReplaceQueue).unwrap();
    sink.enqueue(&req).unwrap();

    assert_eq!(read_lines(&path), vec!["1", "1", "1"]);
}

#[test]
fn insert_next_goes_before_existing_entries() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("queue.txt");
    std::fs::write(&path, "99\n").unwrap();

    let mut sink = QueueFileSink::new(&path, vec![t(1, 0), t(2, 2)]);
    let req = plan(&t(1, 0), &t(2, 2), QueueMode::Match, QueueBehavior::InsertNext).unwrap();
    sink.enqueue(&req).unwrap();

    assert_eq!(read_lines(&path), vec!["1", "1", "99"]);
}

#[test]
fn insert_next_stacks_successive_requests() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("queue.txt");

    let mut sink = QueueFileSink::new(&path, vec![t(1, 0), t(2, 1)]);
    let first = plan(&t(2, 1), &t(1, 3), QueueMode::Match, QueueBehavior::InsertNext).unwrap();
    let second = plan(&t(1, 0), &t(2, 1), QueueMode::Match, QueueBehavior::InsertNext).unwrap();
    sink.enqueue(&first).unwrap();
    sink.enqueue(&second).unwrap();

    assert_eq!(read_lines(&path), vec!["1", "2", "2"]);
}

#[test]
fn insert_next_creates_missing_queue_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sub").join("queue.txt");

    let mut sink = QueueFileSink::new(&path, vec![t(1, 0)]);
    sink.enqueue(&QueueRequest {
        track_id: TrackId(1),
        count: 2,
        behavior: QueueBehavior::InsertNext,
        resulting_plays: 2,
    })
    .unwrap();

    assert_eq!(read_lines(&path), vec!["1", "1"]);
}

#[test]
fn unknown_track_is_not_found() {
    let dir = tempdir().unwrap();
    let mut sink = QueueFileSink::new(dir.path().join("queue.txt"), vec![t(1, 0)]);
    let err = sink
        .enqueue(&QueueRequest {
            track_id: TrackId(42),
            count: 1,
            behavior: QueueBehavior::InsertNext,
            resulting_plays: 1,
        })
        .unwrap_err();
    assert!(matches!(err, QueueError::TrackNotFound(TrackId(42))));
}

#[test]
fn track_without_local_asset_is_not_playable() {
    let dir = tempdir().unwrap();
    let mut cloud_only = t(1, 0);
    cloud_only.has_local_asset = false;

    let mut sink = QueueFileSink::new(dir.path().join("queue.txt"), vec![cloud_only]);
    let err = sink
        .enqueue(&QueueRequest {
            track_id: TrackId(1),
            count: 1,
            behavior: QueueBehavior::InsertNext,
            resulting_plays: 1,
        })
        .unwrap_err();
    assert!(matches!(err, QueueError::NotPlayable(TrackId(1))));
    assert!(err.to_string().contains("no playable file"));
}

#[test]
fn zero_count_falls_through_to_other() {
    let dir = tempdir().unwrap();
    let mut sink = QueueFileSink::new(dir.path().join("queue.txt"), vec![t(1, 0)]);
    let err = sink
        .enqueue(&QueueRequest {
            track_id: TrackId(1),
            count: 0,
            behavior: QueueBehavior::InsertNext,
            resulting_plays: 0,
        })
        .unwrap_err();
    assert!(matches!(err, QueueError::Other(_)));
}
