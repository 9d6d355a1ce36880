//! Playlist data model.
//!
//! A [`Song`] is a recovered title/artist pair, a [`LinkedSong`] adds the
//! synthesized search links, and a [`Playlist`] is the final serialized
//! shape handed back to the caller.

use serde::{Deserialize, Serialize};

/// A recovered title/artist pair.
///
/// Both fields are non-empty and trimmed; [`Song::new`] is the only way to
/// construct one, so an invalid song cannot exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    title: String,
    artist: String,
}

impl Song {
    /// Create a song from raw captured text.
    ///
    /// Trims both fields and returns `None` when either is empty after
    /// trimming.
    pub fn new(title: &str, artist: &str) -> Option<Self> {
        let title = title.trim();
        let artist = artist.trim();
        if title.is_empty() || artist.is_empty() {
            return None;
        }
        Some(Self {
            title: title.to_string(),
            artist: artist.to_string(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    /// Consume the song, yielding `(title, artist)`.
    pub fn into_parts(self) -> (String, String) {
        (self.title, self.artist)
    }
}

impl std::fmt::Display for Song {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\" - {}", self.title, self.artist)
    }
}

/// A song with its synthesized search links.
///
/// Serialized in camelCase so the wire shape is
/// `{ "title", "artist", "youtubeLink", "spotifyLink" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedSong {
    pub title: String,
    pub artist: String,
    pub youtube_link: String,
    pub spotify_link: String,
}

/// Final structured result of parsing a model response.
///
/// `songs` is always present. An empty list means no songs were recovered;
/// when non-empty, `songs[0]` is the resolved top pick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    pub explanation: String,
    pub songs: Vec<LinkedSong>,
}
