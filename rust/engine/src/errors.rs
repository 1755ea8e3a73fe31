use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("Invalid puzzle date: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),
    #[error("Invalid card code: {0}")]
    InvalidCard(String),
    #[error("Position {position} is out of range for a board of {board_size} cards")]
    PositionOutOfRange { position: usize, board_size: usize },
    #[error("Puzzle already finished")]
    SessionFinished,
}
