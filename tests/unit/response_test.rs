//! End-to-end parsing tests over realistic model responses

use vibelist::parse_response;

/// The format the generation prompt asks for, followed faithfully.
const WELL_FORMED: &str = "\
This playlist captures the golden-hour warmth and slow pace of the scene. \
Each track leans on soft textures and patient builds.

SONGS:
1. \"Harvest Moon\" - Neil Young
2. \"Golden Hour\" - Kacey Musgraves
3. \"Slow Show\" - The National
4. \"Bloom\" - The Paper Kites
5. \"Vienna\" - Billy Joel

TOP SONG: #4
";

#[test]
fn recovers_every_song_in_source_order() {
    let playlist = parse_response(WELL_FORMED);
    assert_eq!(playlist.songs.len(), 5);
    // #4 promoted, the rest keep their relative order.
    let titles: Vec<&str> = playlist.songs.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(
        titles,
        ["Bloom", "Harvest Moon", "Golden Hour", "Slow Show", "Vienna"]
    );
}

#[test]
fn explanation_is_the_text_before_the_marker() {
    let playlist = parse_response(WELL_FORMED);
    assert!(playlist
        .explanation
        .starts_with("This playlist captures the golden-hour warmth"));
    assert!(!playlist.explanation.contains("SONGS:"));
}

#[test]
fn links_are_attached_to_every_song() {
    let playlist = parse_response(WELL_FORMED);
    for song in &playlist.songs {
        assert!(song.youtube_link.starts_with("https://www.youtube.com/results?search_query="));
        assert!(song.spotify_link.starts_with("https://open.spotify.com/search/"));
    }
    assert!(playlist.songs[4].youtube_link.ends_with("Vienna%20Billy%20Joel"));
}

#[test]
fn drifted_response_without_numbering_still_parses() {
    let raw = "\
Moody and nocturnal.

SONGS:
\"Nightswimming\" - R.E.M.
\"Pink Moon\" - Nick Drake

TOP SONG: #2
";
    let playlist = parse_response(raw);
    assert_eq!(playlist.songs.len(), 2);
    assert_eq!(playlist.songs[0].title, "Pink Moon");
    assert_eq!(playlist.songs[1].title, "Nightswimming");
}

#[test]
fn by_form_response_parses() {
    let raw = "Warm and nostalgic.\n\nSONGS:\n\"Blue\" by Joni Mitchell\n\"Holocene\" by Bon Iver\n";
    let playlist = parse_response(raw);
    assert_eq!(playlist.songs.len(), 2);
    assert_eq!(playlist.songs[0].artist, "Joni Mitchell");
}

#[test]
fn curly_quoted_response_parses() {
    let raw = "Soft focus.\n\nSONGS:\n1. “Vienna” — Billy Joel\n\nTOP SONG: #1\n";
    let playlist = parse_response(raw);
    assert_eq!(playlist.songs.len(), 1);
    assert_eq!(playlist.songs[0].title, "Vienna");
    assert_eq!(playlist.songs[0].artist, "Billy Joel");
}

#[test]
fn response_without_any_markers_degrades_gracefully() {
    let raw = "I couldn't pick songs for this image.\n\nSorry about that.";
    let playlist = parse_response(raw);
    assert_eq!(playlist.explanation, "I couldn't pick songs for this image.");
    assert!(playlist.songs.is_empty());
}

#[test]
fn empty_input_produces_a_valid_playlist() {
    let playlist = parse_response("");
    assert_eq!(playlist.explanation, "");
    assert!(playlist.songs.is_empty());
    // Still serializes to the full wire shape.
    let json = serde_json::to_string(&playlist).unwrap();
    assert_eq!(json, r#"{"explanation":"","songs":[]}"#);
}

#[test]
fn out_of_range_top_pick_is_ignored() {
    let raw = "Mix.\n\nSONGS:\n1. \"A\" - X\n2. \"B\" - Y\n\nTOP SONG: #7\n";
    let playlist = parse_response(raw);
    assert_eq!(playlist.songs[0].title, "A");
    assert_eq!(playlist.songs[1].title, "B");
}

#[test]
fn repeated_parses_are_identical() {
    let first = parse_response(WELL_FORMED);
    let second = parse_response(WELL_FORMED);
    assert_eq!(first, second);
}
