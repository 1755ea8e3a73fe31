use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::date::PuzzleDate;
use crate::errors::PuzzleError;
use crate::finder::{find_all_sets, Triple};
use crate::generator::{generate_with, Generation, GeneratorConfig};
use crate::rng::SeededRandom;

/// The board shared by every player on a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPuzzle {
    pub date: PuzzleDate,
    pub board: Vec<Card>,
    /// Every Set on the board, in finder order
    pub sets: Vec<Triple>,
    /// True when the generator could not hit the requested Set count
    pub fallback: bool,
    /// Boards dealt before this one was accepted
    #[serde(default)]
    pub attempts: u32,
}

impl DailyPuzzle {
    pub fn set_count(&self) -> usize {
        self.sets.len()
    }
}

/// Builds the puzzle for `date`, seeding the LCG from the date.
pub fn generate_daily_puzzle(date: PuzzleDate, config: &GeneratorConfig) -> DailyPuzzle {
    let generation = daily_generation(date, config);
    let fallback = generation.is_fallback();
    let attempts = generation.attempts();
    let board = generation.into_board();
    let sets = find_all_sets(&board);
    DailyPuzzle {
        date,
        board,
        sets,
        fallback,
        attempts,
    }
}

/// Same as [`generate_daily_puzzle`] for a `YYYY-MM-DD` string.
///
/// ```
/// use dailyset_engine::daily::daily_puzzle_for;
///
/// let puzzle = daily_puzzle_for("2025-01-01", 4, 12).unwrap();
/// assert_eq!(puzzle.set_count(), 4);
/// assert!(daily_puzzle_for("not-a-date", 4, 12).is_err());
/// ```
pub fn daily_puzzle_for(
    date: &str,
    target_sets: usize,
    board_size: usize,
) -> Result<DailyPuzzle, PuzzleError> {
    let date: PuzzleDate = date.parse()?;
    Ok(generate_daily_puzzle(
        date,
        &GeneratorConfig::new(target_sets, board_size),
    ))
}

/// The raw generation result for a date, for callers that need the attempt count.
pub fn daily_generation(date: PuzzleDate, config: &GeneratorConfig) -> Generation {
    generate_with(config, &mut SeededRandom::new(date.seed()))
}
