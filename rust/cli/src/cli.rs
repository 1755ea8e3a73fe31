//! Command-line definitions for the `dailyset` binary.

use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

fn board_size_parser() -> RangedU64ValueParser<usize> {
    RangedU64ValueParser::<usize>::new().range(3..=81)
}

#[derive(Parser, Debug)]
#[command(
    name = "dailyset",
    version,
    about = "Daily Set puzzle: boards, set finding and play from the terminal"
)]
pub struct DailySetCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the daily puzzle for today (US Eastern) or a given date
    Daily {
        /// Puzzle date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<String>,
        /// Number of sets on the board
        #[arg(long)]
        sets: Option<usize>,
        /// Number of cards on the board
        #[arg(long, value_parser = board_size_parser())]
        size: Option<usize>,
        /// Print the puzzle as JSON
        #[arg(long)]
        json: bool,
    },
    /// Deal a practice board
    Deal {
        /// Number of sets on the board
        #[arg(long)]
        sets: Option<usize>,
        /// Number of cards on the board
        #[arg(long, value_parser = board_size_parser())]
        size: Option<usize>,
        /// Seed for a reproducible board; random when omitted
        #[arg(long)]
        seed: Option<u64>,
        /// Print the board as JSON
        #[arg(long)]
        json: bool,
    },
    /// List every set among the given card codes (e.g. 1DRF 2OGT 3SPE)
    Find {
        #[arg(required = true)]
        cards: Vec<String>,
    },
    /// Check whether three cards form a set
    Check { a: String, b: String, c: String },
    /// Play the daily puzzle interactively
    Play {
        /// Puzzle date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<String>,
        /// Number of sets on the board
        #[arg(long)]
        sets: Option<usize>,
        /// Append the result to this JSONL file
        #[arg(long)]
        log: Option<PathBuf>,
        /// Resume from and save unfinished progress to this JSON file
        #[arg(long)]
        save: Option<PathBuf>,
    },
    /// Print values from the daily seeded generator
    Rng {
        #[arg(long, conflicts_with = "date")]
        seed: Option<u64>,
        /// Derive the seed from a date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
        /// How many values to print
        #[arg(long, default_value_t = 5)]
        count: usize,
    },
    /// Summarize a completion log written by `play --log`
    Stats {
        #[arg(long)]
        input: PathBuf,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
