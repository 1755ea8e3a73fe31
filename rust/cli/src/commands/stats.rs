//! Statistics over a `play --log` completion file.
//!
//! Corrupted lines and a truncated final line are skipped with a warning.

use crate::error::CliError;
use crate::ui;
use dailyset_engine::logger::read_completions;
use dailyset_engine::session::format_elapsed;
use dailyset_engine::stats::player_stats;
use std::io::Write;
use std::path::Path;

pub fn handle_stats_command(
    input: &Path,
    json: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let log = read_completions(input).map_err(|e| {
        CliError::InvalidInput(format!("cannot read {}: {}", input.display(), e))
    })?;
    if log.corrupted > 0 {
        ui::display_warning(err, &format!("Skipped {} corrupted record(s)", log.corrupted))?;
    }
    if log.truncated {
        ui::display_warning(err, "Skipped incomplete final record")?;
    }

    let stats = player_stats(&log.records);
    if json {
        let s = serde_json::to_string_pretty(&stats).map_err(std::io::Error::other)?;
        writeln!(out, "{}", s)?;
        return Ok(());
    }

    let time = |secs: Option<u64>| secs.map(format_elapsed).unwrap_or_else(|| "-".to_string());
    writeln!(out, "Days played: {}", stats.days_played)?;
    writeln!(out, "Completed: {}", stats.completions)?;
    writeln!(out, "Did not complete: {}", stats.did_not_complete)?;
    writeln!(out, "Best time: {}", time(stats.best_secs))?;
    writeln!(
        out,
        "Average time: {}",
        time(stats.average_secs.map(|a| a.round() as u64))
    )?;
    for (month, n) in &stats.completions_by_month {
        writeln!(out, "  {}: {}", month, n)?;
    }
    Ok(())
}
