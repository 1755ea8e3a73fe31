//! `daily` command: the board every player gets for a date.

use super::resolve_date;
use crate::config;
use crate::error::CliError;
use crate::formatters::{format_board, format_sets};
use crate::ui;
use dailyset_engine::daily::generate_daily_puzzle;
use std::io::Write;

/// Prints the daily board and every Set on it.
///
/// With `json`, the whole [`dailyset_engine::daily::DailyPuzzle`] is printed
/// instead. A fallback board is still printed, with a warning on `err`.
pub fn handle_daily_command(
    date: Option<&str>,
    sets: Option<usize>,
    size: Option<usize>,
    json: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load()?;
    let date = resolve_date(date)?;
    let generator = cfg.generator(sets, size);
    let puzzle = generate_daily_puzzle(date, &generator);

    if puzzle.fallback {
        ui::warn_fallback(err, generator.target_sets, puzzle.set_count())?;
    }

    if json {
        let s = serde_json::to_string_pretty(&puzzle).map_err(std::io::Error::other)?;
        writeln!(out, "{}", s)?;
        return Ok(());
    }

    writeln!(out, "Daily Set {} (seed {})", date, date.seed())?;
    writeln!(
        out,
        "{} cards, {} sets after {} attempt(s)\n",
        puzzle.board.len(),
        puzzle.set_count(),
        puzzle.attempts
    )?;
    writeln!(out, "{}\n", format_board(&puzzle.board))?;
    writeln!(out, "{}", format_sets(&puzzle.board, &puzzle.sets))?;
    Ok(())
}
