//! Vibelist library
//!
//! Parses free-form AI playlist responses into structured playlists with
//! synthesized search links.

pub mod cli;
pub mod links;
pub mod playlist;
pub mod prompt;
pub mod response;

pub use playlist::{LinkedSong, Playlist, Song};
pub use response::parse_response;
