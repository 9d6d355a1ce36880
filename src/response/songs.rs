//! Song extraction strategies.
//!
//! Recovery is a fixed-priority cascade: each strategy is a pure function
//! over the song block, and the first one to yield any songs wins out.
//! Later strategies are deliberately looser, trading precision for recall
//! as the response drifts further from the requested format.
//!
//! All quote classes accept the straight `"` and both curly variants
//! interchangeably on either side of a title, so a title may open with one
//! variant and close with another. Patterns live in `Lazy` statics; the
//! `regex` crate keeps no cursor state between calls, so every invocation
//! matches from the start of the text.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::playlist::Song;

/// Lines like `1. "Title" - Artist` (also `1)`, en/em dashes, curly quotes).
static NUMBERED_QUOTED_DASH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\d+[.)]\s*["“”]([^"“”]+)["“”]\s*[-—–]+\s*([^,\n]+)"#).unwrap()
});

/// `"Title" - Artist` with the leading ordinal lost.
static QUOTED_DASH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"["“”]([^"“”]+)["“”]\s*[-—–]+\s*([^,\n]+)"#).unwrap());

/// `"Title" by Artist`.
static QUOTED_BY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"["“”]([^"“”]+)["“”] by ([^\n]+)"#).unwrap());

/// First quoted span on a line, for the line heuristic.
static QUOTED_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r#"["“”]([^"“”]+)["“”]"#).unwrap());

/// Quote characters recognized anywhere a title may be delimited.
const QUOTE_CHARS: &[char] = &['"', '“', '”'];

/// Extraction strategies in priority order, first match wins.
const STRATEGIES: &[(&str, fn(&str) -> Vec<Song>)] = &[
    ("numbered-quoted-dash", numbered_quoted_dash),
    ("quoted-dash", quoted_dash),
    ("quoted-by", quoted_by),
    ("line-heuristic", line_heuristic),
];

/// Recover songs from the song block.
///
/// Tries each strategy in priority order and short-circuits on the first
/// non-empty result; strategies are never merged. An empty vec means no
/// strategy recognized anything.
pub fn extract(songs_block: &str) -> Vec<Song> {
    for (name, strategy) in STRATEGIES.iter().copied() {
        let songs = strategy(songs_block);
        if !songs.is_empty() {
            debug!(strategy = name, count = songs.len(), "songs recovered");
            return songs;
        }
    }
    debug!("no extraction strategy recovered any songs");
    Vec::new()
}

fn captures_to_songs(re: &Regex, block: &str) -> Vec<Song> {
    re.captures_iter(block)
        .filter_map(|cap| Song::new(&cap[1], &cap[2]))
        .collect()
}

fn numbered_quoted_dash(block: &str) -> Vec<Song> {
    captures_to_songs(&NUMBERED_QUOTED_DASH, block)
}

fn quoted_dash(block: &str) -> Vec<Song> {
    captures_to_songs(&QUOTED_DASH, block)
}

fn quoted_by(block: &str) -> Vec<Song> {
    captures_to_songs(&QUOTED_BY, block)
}

/// Last-resort per-line heuristic: any line holding a quote character and a
/// ` - ` separator or the word ` by ` is treated as a song listing. Title is
/// the first quoted span, artist the text after the last separator.
fn line_heuristic(block: &str) -> Vec<Song> {
    let mut songs = Vec::new();
    for line in block.lines() {
        let has_quote = line.contains(QUOTE_CHARS);
        if !has_quote || !(line.contains(" - ") || line.contains(" by ")) {
            continue;
        }

        let Some(title) = QUOTED_SPAN.captures(line).map(|cap| cap[1].to_string()) else {
            continue;
        };
        let artist = if line.contains(" - ") {
            line.rsplit(" - ").next().unwrap_or("")
        } else {
            line.rsplit(" by ").next().unwrap_or("")
        };

        if let Some(song) = Song::new(&title, artist) {
            songs.push(song);
        }
    }
    songs
}
