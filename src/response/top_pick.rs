//! Top-pick directive resolution.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::playlist::Song;

/// `#N` anywhere in the directive block.
static DIRECTIVE: Lazy<Regex> = Lazy::new(|| Regex::new(r"#\s*(\d+)").unwrap());

/// Move the designated song to the front of the list.
///
/// The directive is a 1-based ordinal into `songs`. A missing, unparseable,
/// or out-of-range ordinal leaves the order untouched; a valid one is a
/// stable single-element promotion, not a sort, so all other songs keep
/// their relative order.
pub fn promote_top(mut songs: Vec<Song>, top_block: &str) -> Vec<Song> {
    let Some(ordinal) = parse_directive(top_block) else {
        return songs;
    };

    let index = match ordinal.checked_sub(1) {
        Some(index) if index < songs.len() => index,
        _ => {
            debug!(
                ordinal,
                count = songs.len(),
                "top-pick ordinal out of range, keeping order"
            );
            return songs;
        }
    };

    let top = songs.remove(index);
    songs.insert(0, top);
    songs
}

fn parse_directive(top_block: &str) -> Option<usize> {
    let cap = DIRECTIVE.captures(top_block)?;
    cap[1].parse().ok()
}
