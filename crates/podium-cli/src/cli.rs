//! CLI entry and dispatch.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use podium_core::Deck;
use podium_tui::PresenterOptions;

#[derive(Parser)]
#[command(name = "podium")]
#[command(version)]
#[command(about = "Terminal slide-deck presenter")]
struct Cli {
    /// Deck file (TOML). Uses the built-in sample deck when omitted.
    deck: Option<PathBuf>,

    /// Slide index to start on (clamped into range)
    #[arg(long, default_value_t = 0, value_name = "INDEX")]
    start: usize,

    /// Start with the chrome hidden
    #[arg(long)]
    fullscreen: bool,

    /// Write tracing output to this file (level via RUST_LOG, default info).
    /// Never logs to the terminal; the alternate screen owns it.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_tracing(path)?;
    }

    let deck = match &cli.deck {
        Some(path) => Deck::load(path)?,
        None => Deck::sample(),
    };
    tracing::info!(
        slides = deck.len(),
        content_slides = deck.content_slide_count(),
        "deck loaded"
    );

    podium_tui::present(
        deck,
        &PresenterOptions {
            start: cli.start,
            fullscreen: cli.fullscreen,
        },
    )
}

fn init_tracing(path: &Path) -> Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_args_are_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_deck_path_and_flags() {
        let cli = Cli::parse_from(["podium", "deck.toml", "--start", "3", "--fullscreen"]);
        assert_eq!(cli.deck.as_deref(), Some(Path::new("deck.toml")));
        assert_eq!(cli.start, 3);
        assert!(cli.fullscreen);
    }
}
