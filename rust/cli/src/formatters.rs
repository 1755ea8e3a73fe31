//! Card, board, and Set formatters for terminal display.
//!
//! This module provides pure functions for formatting puzzle elements for
//! terminal output. Shapes use Unicode symbols with an ASCII fallback for
//! terminal environments that don't support Unicode rendering.
//!
//! - **Unicode mode**: ◆ ● ∿
//! - **ASCII mode**: D O S
//!
//! Board positions are shown 1-based, matching what players type in `play`.
//!
//! ## Example
//!
//! ```rust
//! use dailyset_engine::cards::{Card, Color, Number, Shading, Shape};
//! use dailyset_cli::formatters::format_card;
//!
//! let card = Card::new(Number::Two, Shape::Oval, Color::Green, Shading::Striped);
//! let s = format_card(&card);
//! assert!(s == "●● green striped" || s == "OO green striped");
//! ```

use dailyset_engine::cards::{Card, Shape};
use dailyset_engine::finder::{Triple, set_label};

/// Cards per row when printing a board.
pub const BOARD_COLUMNS: usize = 3;

/// Check if the terminal supports Unicode symbols by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_shape(shape: Shape) -> &'static str {
    if supports_unicode() {
        match shape {
            Shape::Diamond => "◆",
            Shape::Oval => "●",
            Shape::Squiggle => "∿",
        }
    } else {
        match shape {
            Shape::Diamond => "D",
            Shape::Oval => "O",
            Shape::Squiggle => "S",
        }
    }
}

/// Format a card as its shape symbol repeated `number` times, then color and shading.
pub fn format_card(card: &Card) -> String {
    format!(
        "{} {} {}",
        format_shape(card.shape).repeat(card.number.value() as usize),
        card.color.name(),
        card.shading.name()
    )
}

/// Format a board as a numbered grid, `BOARD_COLUMNS` cards per row.
///
/// Each cell shows the 1-based position, the card code and the pretty form.
pub fn format_board(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(empty board)".to_string();
    }
    let cells: Vec<String> = cards
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{:>2}. {} {:<22}", i + 1, c, format_card(c)))
        .collect();
    cells
        .chunks(BOARD_COLUMNS)
        .map(|row| row.join("  ").trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a triple of 0-based positions as 1-based numbers.
///
/// ```rust
/// # use dailyset_cli::formatters::format_triple;
/// assert_eq!(format_triple(&[0, 4, 11]), "1 5 12");
/// ```
pub fn format_triple(triple: &Triple) -> String {
    format!("{} {} {}", triple[0] + 1, triple[1] + 1, triple[2] + 1)
}

/// One line per Set: label, positions and card codes.
pub fn format_sets(board: &[Card], sets: &[Triple]) -> String {
    if sets.is_empty() {
        return "No sets".to_string();
    }
    sets.iter()
        .enumerate()
        .map(|(i, t)| {
            format!(
                "{}: {}  ({} {} {})",
                set_label(i),
                format_triple(t),
                board[t[0]],
                board[t[1]],
                board[t[2]]
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
