//! `find` command: every Set among cards given on the command line.

use crate::error::{BatchValidationError, CliError};
use crate::formatters::format_sets;
use crate::ui;
use crate::validation::parse_cards;
use dailyset_engine::cards::Card;
use dailyset_engine::finder::find_all_sets;
use std::io::Write;

/// Parses card codes, reporting every bad one on `err`.
pub(crate) fn cards_or_report(codes: &[String], err: &mut dyn Write) -> Result<Vec<Card>, CliError> {
    let errors: Vec<BatchValidationError<usize>> = match parse_cards(codes) {
        Ok(cards) => return Ok(cards),
        Err(errors) => errors,
    };
    for e in &errors {
        ui::write_error(err, &format!("card {}", e))?;
    }
    Err(CliError::InvalidInput(format!(
        "{} of {} card code(s) rejected",
        errors.len(),
        codes.len()
    )))
}

pub fn handle_find_command(
    codes: &[String],
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let board = cards_or_report(codes, err)?;
    let sets = find_all_sets(&board);
    writeln!(out, "{} cards, {} sets", board.len(), sets.len())?;
    writeln!(out, "{}", format_sets(&board, &sets))?;
    Ok(())
}
