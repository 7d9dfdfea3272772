//! Daily Rack - CLI
//!
//! Deals the day's deterministic rack, scores submissions against a
//! dictionary, and keeps a local same-day leaderboard.

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::{Parser, Subcommand};
use daily_rack::{
    commands::{SubmitConfig, deal_rack, share, show_board, shuffle_rack, submit_word},
    core::{PuzzleDate, TileSet},
    dictionary::{Dictionary, loader::load_from_file},
    output::{print_board, print_deal, print_share, print_shuffle, print_submit},
    persist::Store,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "daily_rack",
    about = "Daily word puzzle: deterministic seven-tile racks, scoring, and a local leaderboard",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Puzzle date as YYYY-MM-DD (default: today, local time)
    #[arg(short, long, global = true)]
    date: Option<String>,

    /// Path to a word list file (default: small embedded demo list)
    #[arg(long, global = true)]
    dict: Option<PathBuf>,

    /// Directory for saved plays and the scoreboard
    #[arg(long, global = true, default_value = "daily-rack-data")]
    data_dir: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Deal and show the rack for the day (default)
    Deal,

    /// Submit a word: validate, score, and record it
    Submit {
        /// The candidate word
        word: String,

        /// Player name for the leaderboard
        #[arg(short, long, default_value = "Guest")]
        name: String,

        /// Avatar shown on the leaderboard
        #[arg(short, long)]
        avatar: Option<String>,
    },

    /// Show today's leaderboard
    Board,

    /// Print the shareable result text for the saved play
    Share,

    /// Show a shuffled display order of the rack
    Shuffle,
}

/// Resolve the puzzle date from the flag or the local clock
fn resolve_date(flag: Option<&str>) -> Result<PuzzleDate> {
    match flag {
        Some(s) => {
            let date = chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .with_context(|| format!("Invalid date '{s}', expected YYYY-MM-DD"))?;
            Ok(PuzzleDate::new(date.year(), date.month(), date.day()))
        }
        None => {
            let today = chrono::Local::now().date_naive();
            Ok(PuzzleDate::new(today.year(), today.month(), today.day()))
        }
    }
}

/// Load the dictionary from the flag, or fall back to the demo list
fn resolve_dictionary(flag: Option<&PathBuf>) -> Result<Dictionary> {
    match flag {
        Some(path) => load_from_file(path)
            .with_context(|| format!("Failed to load dictionary from {}", path.display())),
        None => Ok(Dictionary::demo()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let tiles = TileSet::icelandic();
    let date = resolve_date(cli.date.as_deref())?;
    let dictionary = resolve_dictionary(cli.dict.as_ref())?;
    let store = Store::new(&cli.data_dir);

    // Default to dealing the rack if no command given
    let command = cli.command.unwrap_or(Commands::Deal);

    match command {
        Commands::Deal => {
            let result = deal_rack(&tiles, &date, &dictionary);
            print_deal(&result);
        }
        Commands::Submit { word, name, avatar } => {
            let config = SubmitConfig {
                word,
                name,
                avatar,
            };
            let result = submit_word(&tiles, &date, &dictionary, &store, config)?;
            print_submit(&result);
        }
        Commands::Board => {
            let result = show_board(&store, &date)?;
            print_board(&result);
        }
        Commands::Share => match share(&store, &date, dictionary.is_limited())? {
            Some(text) => print_share(&text),
            None => println!("Play first, then share."),
        },
        Commands::Shuffle => {
            let result = shuffle_rack(&tiles, &date);
            print_shuffle(&result);
        }
    }

    Ok(())
}
