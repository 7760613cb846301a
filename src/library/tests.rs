use super::*;

fn t(id: u64, title: &str, artist: &str, album: &str, plays: u64) -> Track {
    Track {
        id: TrackId(id),
        title: title.into(),
        artist: artist.into(),
        album: album.into(),
        play_count: plays,
        duration_seconds: 200.0,
        has_local_asset: true,
    }
}

fn sample() -> Vec<Track> {
    vec![
        t(1, "Zebra", "Charlie", "Album C", 50),
        t(2, "Apple", "Alice", "Album A", 100),
        t(3, "Mango", "Bob", "Album B", 25),
    ]
}

fn ids(tracks: &[Track]) -> Vec<u64> {
    tracks.iter().map(|t| t.id.0).collect()
}

#[test]
fn sort_by_play_count_both_directions() {
    let tracks = sample();
    assert_eq!(ids(&sort_by(SortKey::PlayCountDescending, &tracks)), vec![2, 1, 3]);
    assert_eq!(ids(&sort_by(SortKey::PlayCountAscending, &tracks)), vec![3, 1, 2]);
}

#[test]
fn sort_by_text_fields_both_directions() {
    let tracks = sample();
    assert_eq!(ids(&sort_by(SortKey::TitleAscending, &tracks)), vec![2, 3, 1]);
    assert_eq!(ids(&sort_by(SortKey::TitleDescending, &tracks)), vec![1, 3, 2]);
    assert_eq!(ids(&sort_by(SortKey::ArtistAscending, &tracks)), vec![2, 3, 1]);
    assert_eq!(ids(&sort_by(SortKey::ArtistDescending, &tracks)), vec![1, 3, 2]);
    assert_eq!(ids(&sort_by(SortKey::AlbumAscending, &tracks)), vec![2, 3, 1]);
    assert_eq!(ids(&sort_by(SortKey::AlbumDescending, &tracks)), vec![1, 3, 2]);
}

#[test]
fn sort_by_does_not_mutate_input() {
    let tracks = sample();
    let before = tracks.clone();
    let _ = sort_by(SortKey::TitleAscending, &tracks);
    assert_eq!(tracks, before);
}

#[test]
fn sort_by_handles_empty_and_single() {
    assert!(sort_by(SortKey::PlayCountDescending, &[]).is_empty());

    let single = vec![t(1, "Zebra", "X", "X", 1)];
    let sorted = sort_by(SortKey::TitleAscending, &single);
    assert_eq!(sorted.len(), 1);
    assert_eq!(sorted[0].title, "Zebra");
}

#[test]
fn sort_by_is_stable_for_equal_play_counts() {
    let same = vec![
        t(1, "A", "X", "X", 10),
        t(2, "B", "X", "X", 10),
        t(3, "C", "X", "X", 10),
    ];
    assert_eq!(ids(&sort_by(SortKey::PlayCountDescending, &same)), vec![1, 2, 3]);
    assert_eq!(ids(&sort_by(SortKey::PlayCountAscending, &same)), vec![1, 2, 3]);
}

#[test]
fn sort_by_is_stable_for_equal_text_in_both_directions() {
    let same = vec![
        t(1, "One", "Same", "X", 1),
        t(2, "Two", "Same", "X", 2),
        t(3, "Three", "Same", "X", 3),
    ];
    assert_eq!(ids(&sort_by(SortKey::ArtistAscending, &same)), vec![1, 2, 3]);
    assert_eq!(ids(&sort_by(SortKey::ArtistDescending, &same)), vec![1, 2, 3]);
}

#[test]
fn text_sort_ignores_case_and_diacritics() {
    let tracks = vec![
        t(1, "cafe", "X", "X", 0),
        t(2, "Café", "X", "X", 0),
        t(3, "CAFE", "X", "X", 0),
        t(4, "apple", "X", "X", 0),
    ];
    // The three spellings compare equal, so they keep input order after "apple".
    assert_eq!(ids(&sort_by(SortKey::TitleAscending, &tracks)), vec![4, 1, 2, 3]);
}

#[test]
fn text_sort_orders_digit_runs_numerically() {
    let tracks = vec![t(1, "Track 10", "X", "X", 0), t(2, "Track 2", "X", "X", 0)];
    assert_eq!(ids(&sort_by(SortKey::TitleAscending, &tracks)), vec![2, 1]);
}

#[test]
fn sort_keys_have_labels_and_icons() {
    for key in SortKey::ALL {
        assert!(!key.label().is_empty());
        assert_ne!(key.icon(true), key.icon(false));
    }
    assert_eq!(SortKey::AlbumDescending.label(), "Album");
    assert_eq!(SortKey::TitleAscending.icon(true), "▲");
    assert_eq!(SortKey::PlayCountDescending.icon(false), "▽");
    assert_eq!(SortKey::default(), SortKey::PlayCountDescending);
}

#[test]
fn sort_key_field_and_direction_cover_all_pairs() {
    let pairs: Vec<(SortField, SortDirection)> =
        SortKey::ALL.iter().map(|k| (k.field(), k.direction())).collect();
    for field in [SortField::PlayCount, SortField::Title, SortField::Artist, SortField::Album] {
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            assert_eq!(
                pairs.iter().filter(|p| **p == (field, direction)).count(),
                1,
                "{field:?} {direction:?}"
            );
        }
    }
}

#[test]
fn stats_counts_and_average() {
    let mut tracks = vec![
        t(1, "A", "X", "X", 0),
        t(2, "B", "X", "X", 10),
        t(3, "C", "X", "X", 0),
        t(4, "D", "X", "X", 5),
    ];
    tracks[1].has_local_asset = false;

    let stats = LibraryStats::new(&tracks);
    assert_eq!(stats.total_tracks, 4);
    assert_eq!(stats.tracks_with_play_counts, 2);
    assert_eq!(stats.tracks_with_local_assets, 3);
    assert_eq!(stats.average_play_count, 3.75);
    assert_eq!(stats.duplicate_groups, 0);
    assert_eq!(stats.with_duplicate_groups(2).duplicate_groups, 2);
}

#[test]
fn stats_for_empty_library_are_zero() {
    let stats = LibraryStats::new(&[]);
    assert_eq!(stats.total_tracks, 0);
    assert_eq!(stats.average_play_count, 0.0);
}

#[test]
fn formatted_duration_uses_clock_style() {
    assert_eq!(formatted_duration(0.0), "0:00");
    assert_eq!(formatted_duration(45.0), "0:45");
    assert_eq!(formatted_duration(60.0), "1:00");
    assert_eq!(formatted_duration(123.0), "2:03");
    assert_eq!(formatted_duration(225.9), "3:45");
    assert_eq!(formatted_duration(3725.0), "1:02:05");
}

#[test]
fn accessible_duration_spells_out_units() {
    assert_eq!(accessible_duration(0.0), "0 seconds");
    assert_eq!(accessible_duration(1.0), "1 second");
    assert_eq!(accessible_duration(45.0), "45 seconds");
    assert_eq!(accessible_duration(60.0), "1 minute");
    assert_eq!(accessible_duration(225.0), "3 minutes 45 seconds");
    assert_eq!(accessible_duration(3661.0), "1 hour 1 minute 1 second");
    assert_eq!(accessible_duration(3725.0), "1 hour 2 minutes 5 seconds");
}

#[test]
fn track_id_parses_and_displays() {
    assert_eq!(" 42 ".parse::<TrackId>().unwrap(), TrackId(42));
    assert!("abc".parse::<TrackId>().is_err());
    assert_eq!(TrackId(7).to_string(), "7");
}

#[test]
fn tracks_compare_structurally_including_id() {
    let a = t(1, "Song", "Artist", "Album", 10);
    let b = t(1, "Song", "Artist", "Album", 10);
    let c = t(2, "Song", "Artist", "Album", 10);
    assert_eq!(a, b);
    assert_ne!(a, c);
}
