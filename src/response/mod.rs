//! Response parsing pipeline.
//!
//! [`parse_response`] is the single transform from raw model text to a
//! structured [`Playlist`]: segment the text, run the extraction cascade,
//! resolve the top pick, synthesize links. Every stage recovers locally
//! from malformed input, so the pipeline is total: the worst case is a
//! playlist with an empty song list. There is no shared state between
//! invocations, so concurrent calls need no coordination.

pub mod segment;
pub mod songs;
pub mod top_pick;

pub use segment::{Sections, SONGS_MARKER, TOP_MARKER};

use crate::links;
use crate::playlist::Playlist;

/// Parse a raw model response into a structured playlist.
pub fn parse_response(raw: &str) -> Playlist {
    let sections = segment::segment(raw);
    let recovered = songs::extract(sections.songs_block);
    let ordered = top_pick::promote_top(recovered, sections.top_block);

    Playlist {
        explanation: sections.explanation.to_string(),
        songs: ordered.into_iter().map(links::synthesize).collect(),
    }
}
