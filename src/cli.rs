//! CLI definitions for vibelist
//!
//! Separated from main.rs so the argument surface stays testable on its
//! own.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "vibelist")]
#[command(about = "Turn free-form AI playlist responses into structured playlists")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a model response into playlist JSON
    #[command(long_about = "Parse a free-form playlist response into JSON.

Reads the raw response text from FILE, or from stdin when no file is
given, and writes the structured playlist to stdout:

    { \"explanation\": \"...\", \"songs\": [{ \"title\", \"artist\", \"youtubeLink\", \"spotifyLink\" }, ...] }

Malformed input never fails: a response with no recognizable songs
produces an empty song list, and songs[0] is always the model's top
pick when any song was recovered.

EXAMPLES:
    vibelist parse response.txt
    vibelist parse --pretty < response.txt")]
    Parse {
        /// Path to the response text (stdin when omitted)
        file: Option<PathBuf>,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Print the playlist generation prompt
    #[command(long_about = "Print the prompt that elicits the expected response format.

Useful for piping into an agent CLI and parsing the result back:

    claude -p \"$(vibelist prompt)\" image.jpg | vibelist parse")]
    Prompt,
}
