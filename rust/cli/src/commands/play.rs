//! # Play Command
//!
//! Interactive play of the daily puzzle over stdin.
//!
//! The player types board positions (one at a time, or three at once) until
//! every Set on the board has been found. Other inputs:
//!
//! - `show`: reveal every Set; the result is logged but not ranked
//! - `board`: reprint the board and the Sets found so far
//! - `pause` / `resume`: stop and restart the clock
//! - `q`: quit, saving progress when `--save` is given
//!
//! With `--log`, one [`CompletionRecord`] is appended per session: on
//! completion, after a reveal, on quit and when input closes early. A day the
//! log shows as finished or revealed cannot be played again, and a reveal
//! discards the `--save` progress.

use super::resolve_date;
use crate::config;
use crate::error::CliError;
use crate::formatters::{format_board, format_card, format_sets, format_triple};
use crate::io_utils::{ensure_parent_dir, read_stdin_line};
use crate::ui;
use crate::validation::{PlayInput, parse_play_input};
use chrono::Utc;
use dailyset_engine::daily::generate_daily_puzzle;
use dailyset_engine::date::PuzzleDate;
use dailyset_engine::logger::{CompletionLogger, CompletionRecord, read_completions};
use dailyset_engine::session::{PuzzleProgress, PuzzleSession, SelectionOutcome, format_elapsed};
use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;
use std::time::Instant;
use tracing::info;

const HELP: &str = "Enter a position (1 at a time) or three positions, e.g. `1 5 9`.\n\
Other commands: show, board, pause, resume, help, q";

/// Handle the play command.
///
/// # Returns
///
/// * `Ok(())` when the puzzle is completed, revealed or quit
/// * `Err(CliError::Interrupted)` when input closes mid-puzzle
pub fn handle_play_command(
    date: Option<&str>,
    sets: Option<usize>,
    log: Option<&Path>,
    save: Option<&Path>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = config::load()?;
    let date = resolve_date(date)?;
    let generator = cfg.generator(sets, None);
    let puzzle = generate_daily_puzzle(date, &generator);
    if puzzle.fallback {
        ui::warn_fallback(err, generator.target_sets, puzzle.set_count())?;
    }

    if let Some(path) = log.filter(|p| p.exists()) {
        let history = read_completions(path)?;
        if history.is_closed(date) {
            writeln!(
                out,
                "The {} puzzle was already finished or revealed. See you tomorrow.",
                date
            )?;
            return Ok(());
        }
    }

    let saved = match save {
        Some(path) => load_progress(path, err)?,
        None => None,
    };
    let mut session = match &saved {
        Some(p) if !p.is_stale(date) => {
            let session = PuzzleSession::restore(puzzle.board.clone(), p);
            if session.is_complete() {
                writeln!(out, "You already finished the {} puzzle.", date)?;
                return Ok(());
            }
            writeln!(
                out,
                "Resuming {}: {} set(s) found, {} on the clock",
                date,
                session.found_sets().len(),
                format_elapsed(p.elapsed_seconds)
            )?;
            session
        }
        _ => PuzzleSession::new(puzzle.board.clone()),
    };

    if session.goal() == 0 {
        writeln!(out, "{}\n", format_board(session.board()))?;
        writeln!(out, "This board has no sets; nothing to find.")?;
        return Ok(());
    }

    let mut logger = match log {
        Some(path) => CompletionLogger::create(path)?,
        None => CompletionLogger::disabled(),
    };

    writeln!(out, "Daily Set {}: find all {} sets\n", date, session.goal())?;
    writeln!(out, "{}\n", format_board(session.board()))?;
    writeln!(out, "{}", HELP)?;
    session.start(Instant::now());

    loop {
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = read_stdin_line(stdin) else {
            let now = Instant::now();
            save_progress(save, &session, date, now)?;
            write_record(&mut logger, date, &session, now)?;
            return Err(CliError::Interrupted(
                "input closed before the puzzle was finished".to_string(),
            ));
        };
        let now = Instant::now();

        let outcome = match parse_play_input(&line, session.board().len()) {
            PlayInput::Quit => {
                save_progress(save, &session, date, now)?;
                write_record(&mut logger, date, &session, now)?;
                writeln!(
                    out,
                    "Found {}/{} sets in {}. See you tomorrow.",
                    session.found_sets().len(),
                    session.goal(),
                    format_elapsed(session.elapsed(now).as_secs())
                )?;
                return Ok(());
            }
            PlayInput::Show => {
                let labelled = session.reveal_all();
                let all: Vec<_> = labelled.iter().map(|(_, t)| *t).collect();
                writeln!(out, "{}", format_sets(session.board(), &all))?;
                writeln!(out, "All sets shown; this result will not be ranked.")?;
                clear_progress(save)?;
                write_record(&mut logger, date, &session, now)?;
                return Ok(());
            }
            PlayInput::Help => {
                writeln!(out, "{}", HELP)?;
                continue;
            }
            PlayInput::Board => {
                writeln!(out, "{}\n", format_board(session.board()))?;
                writeln!(out, "{}", found_summary(&session))?;
                continue;
            }
            PlayInput::Pause => {
                session.pause(now);
                writeln!(
                    out,
                    "Paused at {}. Type resume to continue.",
                    format_elapsed(session.elapsed(now).as_secs())
                )?;
                continue;
            }
            PlayInput::Resume => {
                session.resume(now);
                writeln!(out, "Resumed.")?;
                continue;
            }
            PlayInput::Invalid(msg) => {
                ui::write_error(err, &msg)?;
                continue;
            }
            _ if !session.is_running() => {
                writeln!(out, "Paused. Type resume to continue.")?;
                continue;
            }
            PlayInput::Pick(i) => {
                writeln!(out, "{}. {}", i + 1, format_card(&session.board()[i]))?;
                session.select(i, now)?
            }
            PlayInput::Triple(t) => session.submit(t, now)?,
        };

        if report(out, &session, outcome)? {
            save_progress(save, &session, date, now)?;
            write_record(&mut logger, date, &session, now)?;
            return Ok(());
        }
    }
}

/// Prints the outcome of a selection; `true` once the board is solved.
fn report(
    out: &mut dyn Write,
    session: &PuzzleSession,
    outcome: SelectionOutcome,
) -> Result<bool, CliError> {
    match outcome {
        SelectionOutcome::Selected { selected } => writeln!(out, "Selected {}/3", selected)?,
        SelectionOutcome::Deselected { selected } => {
            writeln!(out, "Deselected ({}/3 selected)", selected)?
        }
        SelectionOutcome::Found {
            triple,
            label,
            found,
            remaining,
        } => writeln!(
            out,
            "Set {}: {}! {} found, {} to go",
            label,
            format_triple(&triple),
            found,
            remaining
        )?,
        SelectionOutcome::Completed {
            triple,
            label,
            elapsed,
        } => {
            writeln!(out, "Set {}: {}!", label, format_triple(&triple))?;
            writeln!(
                out,
                "You found all {} sets in {}.",
                session.goal(),
                format_elapsed(elapsed.as_secs())
            )?;
            return Ok(true);
        }
        SelectionOutcome::AlreadyFound { triple } => {
            writeln!(out, "Already found {}", format_triple(&triple))?
        }
        SelectionOutcome::NotASet { triple } => {
            writeln!(out, "{} is not a set", format_triple(&triple))?
        }
    }
    Ok(false)
}

fn found_summary(session: &PuzzleSession) -> String {
    let found = session.found_sets();
    let mut s = format!("Found {}/{}", found.len(), session.goal());
    for t in found {
        s.push_str(&format!("\n  {}", format_triple(t)));
    }
    s
}

fn write_record(
    logger: &mut CompletionLogger,
    date: PuzzleDate,
    session: &PuzzleSession,
    now: Instant,
) -> Result<(), CliError> {
    let secs = session.elapsed(now).as_secs();
    let record = CompletionRecord::from_session(date, session, secs);
    info!(
        date = %date,
        secs,
        found = record.found,
        ranked = record.is_ranked(),
        "daily session ended"
    );
    logger.write(&record)?;
    Ok(())
}

fn load_progress(path: &Path, err: &mut dyn Write) -> Result<Option<PuzzleProgress>, CliError> {
    if !path.exists() {
        return Ok(None);
    }
    let s = fs::read_to_string(path)?;
    match serde_json::from_str(&s) {
        Ok(p) => Ok(Some(p)),
        Err(e) => {
            ui::display_warning(
                err,
                &format!("ignoring unreadable progress file {}: {}", path.display(), e),
            )?;
            Ok(None)
        }
    }
}

fn save_progress(
    path: Option<&Path>,
    session: &PuzzleSession,
    date: PuzzleDate,
    now: Instant,
) -> Result<(), CliError> {
    let Some(path) = path else {
        return Ok(());
    };
    ensure_parent_dir(path).map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    let progress = session.progress(date, now, Utc::now());
    let json = serde_json::to_string_pretty(&progress).map_err(std::io::Error::other)?;
    fs::write(path, json)?;
    Ok(())
}

fn clear_progress(path: Option<&Path>) -> Result<(), CliError> {
    if let Some(path) = path.filter(|p| p.exists()) {
        fs::remove_file(path)?;
    }
    Ok(())
}
