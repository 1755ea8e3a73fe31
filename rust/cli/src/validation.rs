//! Input parsing and validation for CLI commands.
//!
//! This module handles:
//! - Parsing lines typed during `play` (positions, show, pause, quit)
//! - Parsing lists of card codes for `find` and `check`
//!
//! ## Error Handling
//!
//! Parsers return structured enums or `Result`s with messages that can be
//! shown to the user as-is.

use dailyset_engine::cards::Card;
use dailyset_engine::finder::Triple;
use std::collections::HashSet;

use crate::error::BatchValidationError;

/// One line of input during interactive play.
#[derive(Debug, PartialEq)]
pub enum PlayInput {
    /// Three distinct 0-based positions
    Triple(Triple),
    /// A single 0-based position to toggle
    Pick(usize),
    /// Reveal every Set (gives up ranking)
    Show,
    /// Reprint the board
    Board,
    Pause,
    Resume,
    Help,
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse a line typed during play.
///
/// Positions are 1-based on input (as printed on the board) and converted to
/// 0-based. Accepts one or three positions separated by spaces or commas;
/// words are case-insensitive.
///
/// ```rust
/// # use dailyset_cli::validation::{parse_play_input, PlayInput};
/// assert_eq!(parse_play_input("1 5 9", 12), PlayInput::Triple([0, 4, 8]));
/// assert_eq!(parse_play_input("4", 12), PlayInput::Pick(3));
/// assert_eq!(parse_play_input("Q", 12), PlayInput::Quit);
/// ```
pub fn parse_play_input(input: &str, board_size: usize) -> PlayInput {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|p| !p.is_empty())
        .collect();

    if parts.is_empty() {
        return PlayInput::Invalid("Empty input".to_string());
    }

    match parts[0] {
        "q" | "quit" | "exit" => return PlayInput::Quit,
        "show" | "s" => return PlayInput::Show,
        "board" | "b" => return PlayInput::Board,
        "pause" | "p" => return PlayInput::Pause,
        "resume" | "r" => return PlayInput::Resume,
        "help" | "h" | "?" => return PlayInput::Help,
        _ => {}
    }

    let mut positions = Vec::with_capacity(parts.len());
    for part in &parts {
        match part.parse::<usize>() {
            Ok(n) if n >= 1 && n <= board_size => positions.push(n - 1),
            Ok(n) => {
                return PlayInput::Invalid(format!(
                    "Position {} is off the board (1-{})",
                    n, board_size
                ));
            }
            Err(_) => {
                return PlayInput::Invalid(format!(
                    "Unrecognized input '{}'. Enter 1 or 3 positions, show, board, pause, resume, help or q",
                    part
                ));
            }
        }
    }

    match positions.as_slice() {
        [one] => PlayInput::Pick(*one),
        [a, b, c] => {
            if a == b || b == c || a == c {
                PlayInput::Invalid("Pick three different cards".to_string())
            } else {
                PlayInput::Triple([*a, *b, *c])
            }
        }
        _ => PlayInput::Invalid("Enter one position or three positions".to_string()),
    }
}

/// Parse card codes, reporting every bad code with its 1-based argument position.
///
/// Duplicate cards are rejected: a board never holds the same card twice.
pub fn parse_cards(codes: &[String]) -> Result<Vec<Card>, Vec<BatchValidationError<usize>>> {
    let mut cards = Vec::with_capacity(codes.len());
    let mut errors = Vec::new();
    let mut seen = HashSet::new();
    for (i, code) in codes.iter().enumerate() {
        match code.parse::<Card>() {
            Ok(card) => {
                if !seen.insert(card) {
                    errors.push(BatchValidationError {
                        item_context: i + 1,
                        message: format!("Duplicate card {}", card),
                    });
                }
                cards.push(card);
            }
            Err(e) => errors.push(BatchValidationError {
                item_context: i + 1,
                message: e.to_string(),
            }),
        }
    }
    if errors.is_empty() {
        Ok(cards)
    } else {
        Err(errors)
    }
}
