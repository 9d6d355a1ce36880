//! vibelist - CLI entry point

use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;

use vibelist::cli::{Cli, Commands};
use vibelist::{parse_response, prompt};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vibelist=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { file, pretty } => {
            let raw = match file {
                Some(path) => std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read {}", path.display()))?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buf)
                        .context("failed to read stdin")?;
                    buf
                }
            };

            let playlist = parse_response(&raw);
            let json = if pretty {
                serde_json::to_string_pretty(&playlist)?
            } else {
                serde_json::to_string(&playlist)?
            };
            println!("{json}");
        }
        Commands::Prompt => {
            println!("{}", prompt::PLAYLIST_PROMPT);
        }
    }

    Ok(())
}
