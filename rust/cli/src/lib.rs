//! # Daily Set CLI Library
//!
//! Command-line front end for the Daily Set puzzle engine: the daily board,
//! practice boards, Set finding, triple checking and interactive play.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["dailyset", "daily", "--date", "2025-01-01"];
//! let code = dailyset_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `daily`: Show the daily puzzle and its sets
//! - `deal`: Deal a practice board
//! - `find`: List every set among some cards
//! - `check`: Explain whether three cards form a set
//! - `play`: Play the daily puzzle interactively
//! - `rng`: Print values from the date-seeded generator
//! - `stats`: Summarize a completion log
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;
#[macro_use]
mod macros;
pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, DailySetCli};

use commands::{
    handle_cfg_command, handle_check_command, handle_daily_command, handle_deal_command,
    handle_find_command, handle_play_command, handle_rng_command, handle_stats_command,
};

pub use error::{BatchValidationError, CliError};

const COMMANDS: &[&str] = &["daily", "deal", "find", "check", "play", "rng", "stats", "cfg"];

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors, `130` when `play` input closes
/// before the puzzle is finished
///
/// # Example
///
/// ```
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let code = dailyset_cli::run(["dailyset", "check", "1DRF", "2OGT", "3SPE"], &mut out, &mut err);
/// assert_eq!(code, 0);
/// assert!(String::from_utf8(out).unwrap().contains("SET"));
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match DailySetCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return usage_error(e, out, err),
    };

    let result = match cli.cmd {
        Commands::Daily {
            date,
            sets,
            size,
            json,
        } => handle_daily_command(date.as_deref(), sets, size, json, out, err),
        Commands::Deal {
            sets,
            size,
            seed,
            json,
        } => handle_deal_command(sets, size, seed, json, out, err),
        Commands::Find { cards } => handle_find_command(&cards, out, err),
        Commands::Check { a, b, c } => handle_check_command(&[a, b, c], out, err),
        Commands::Play {
            date,
            sets,
            log,
            save,
        } => {
            // Use stdin for real input (supports both TTY and piped stdin)
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            handle_play_command(
                date.as_deref(),
                sets,
                log.as_deref(),
                save.as_deref(),
                out,
                err,
                &mut stdin_lock,
            )
        }
        Commands::Rng { seed, date, count } => {
            handle_rng_command(seed, date.as_deref(), count, out)
        }
        Commands::Stats { input, json } => handle_stats_command(&input, json, out, err),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(msg)) => {
            let _ = ui::display_warning(err, &msg);
            exit_code::INTERRUPTED
        }
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

fn usage_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version should print to stdout and exit 0
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        if write!(out, "{}", e).is_err() {
            return exit_code::ERROR;
        }
        return exit_code::SUCCESS;
    }

    write_or_exit!(err, "{}", e);
    write_or_exit!(err, "Daily Set CLI");
    write_or_exit!(err, "Usage: dailyset <command> [options]\n");
    write_or_exit!(err, "Commands:");
    for c in COMMANDS {
        write_or_exit!(err, "  {}", c);
    }
    write_or_exit!(err, "\nFor full help, run: dailyset --help");
    exit_code::ERROR
}
