//! Section segmentation for raw model responses.
//!
//! The generation prompt asks for two literal markers: `SONGS:` opening the
//! song list and `TOP SONG:` opening the top-pick directive. Models mostly
//! comply, but not always, so segmentation degrades instead of failing.

use tracing::debug;

/// Marker that opens the song list section.
pub const SONGS_MARKER: &str = "SONGS:";

/// Marker that opens the top-pick directive.
pub const TOP_MARKER: &str = "TOP SONG:";

/// The three sections of a response, borrowed from the raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sections<'a> {
    pub explanation: &'a str,
    pub songs_block: &'a str,
    pub top_block: &'a str,
}

/// Split a raw response into explanation, song block, and top-pick block.
///
/// Primary strategy keys off the literal markers. When `SONGS:` is missing
/// the explanation falls back to the first blank-line-delimited paragraph
/// (or the whole input) and both blocks come back empty, which downstream
/// stages treat as "no songs recovered". Never fails.
pub fn segment(raw: &str) -> Sections<'_> {
    let Some(start) = raw.find(SONGS_MARKER) else {
        debug!("songs marker not found, falling back to paragraph split");
        let explanation = raw.split("\n\n").next().unwrap_or(raw).trim();
        return Sections {
            explanation,
            songs_block: "",
            top_block: "",
        };
    };

    let explanation = raw[..start].trim();
    let rest = &raw[start + SONGS_MARKER.len()..];

    match rest.find(TOP_MARKER) {
        Some(top) => Sections {
            explanation,
            songs_block: &rest[..top],
            top_block: &rest[top..],
        },
        None => Sections {
            explanation,
            songs_block: rest,
            top_block: "",
        },
    }
}
