//! Search link synthesis.
//!
//! Links are derived from the song alone, with no external state, so equal
//! songs always produce byte-identical URLs.

use crate::playlist::{LinkedSong, Song};

const YOUTUBE_SEARCH: &str = "https://www.youtube.com/results?search_query=";
const SPOTIFY_SEARCH: &str = "https://open.spotify.com/search/";

/// Attach YouTube and Spotify search links to a recovered song.
///
/// The query is the title and artist joined by a space, percent-encoded
/// into each platform's search URL template.
pub fn synthesize(song: Song) -> LinkedSong {
    let query = format!("{} {}", song.title(), song.artist());
    let encoded = urlencoding::encode(&query);
    let youtube_link = format!("{YOUTUBE_SEARCH}{encoded}");
    let spotify_link = format!("{SPOTIFY_SEARCH}{encoded}");

    let (title, artist) = song.into_parts();
    LinkedSong {
        title,
        artist,
        youtube_link,
        spotify_link,
    }
}
