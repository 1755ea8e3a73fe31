use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::cards::{generate_all_cards, Card, DECK_SIZE};
use crate::finder::count_sets;
use crate::rng::{shuffle, RandomSource, RngSource, SeededRandom};

/// Upper bound on shuffles tried before giving up on an exact Set count.
pub const MAX_ATTEMPTS: u32 = 10_000;
pub const DEFAULT_BOARD_SIZE: usize = 12;
pub const DEFAULT_TARGET_SETS: usize = 6;

/// Parameters for board generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Exact number of Sets the board should contain
    pub target_sets: usize,
    /// Number of cards dealt to the board (clamped to the deck size)
    pub board_size: usize,
    /// Shuffles tried before falling back
    pub max_attempts: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            target_sets: DEFAULT_TARGET_SETS,
            board_size: DEFAULT_BOARD_SIZE,
            max_attempts: MAX_ATTEMPTS,
        }
    }
}

impl GeneratorConfig {
    pub fn new(target_sets: usize, board_size: usize) -> Self {
        Self {
            target_sets,
            board_size,
            ..Self::default()
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }
}

/// Result of a generation run.
///
/// Both variants carry a playable board; `FallbackUsed` means no shuffle within
/// the attempt bound hit the target count, and the board holds whatever the
/// last shuffle produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generation {
    Generated { board: Vec<Card>, attempts: u32 },
    FallbackUsed { board: Vec<Card>, attempts: u32 },
}

impl Generation {
    pub fn board(&self) -> &[Card] {
        match self {
            Generation::Generated { board, .. } | Generation::FallbackUsed { board, .. } => board,
        }
    }

    pub fn into_board(self) -> Vec<Card> {
        match self {
            Generation::Generated { board, .. } | Generation::FallbackUsed { board, .. } => board,
        }
    }

    /// Number of shuffles performed, including the successful one.
    pub fn attempts(&self) -> u32 {
        match self {
            Generation::Generated { attempts, .. } | Generation::FallbackUsed { attempts, .. } => {
                *attempts
            }
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Generation::FallbackUsed { .. })
    }
}

/// Shuffles the full deck with `rng` until the first `board_size` cards contain
/// exactly `target_sets` Sets.
///
/// Every attempt starts from the canonical deck order, and `rng` keeps
/// advancing across attempts, so a seeded source always walks the same sequence
/// of candidate boards. Never fails: after `max_attempts` misses the last
/// candidate is returned as [`Generation::FallbackUsed`].
pub fn generate_with<R: RandomSource + ?Sized>(config: &GeneratorConfig, rng: &mut R) -> Generation {
    let deck = generate_all_cards();
    let board_size = config.board_size.min(DECK_SIZE);
    let mut last: Vec<Card> = Vec::new();

    for attempt in 1..=config.max_attempts.max(1) {
        let mut shuffled = deck.clone();
        shuffle(&mut shuffled, rng);
        shuffled.truncate(board_size);

        let found = count_sets(&shuffled);
        if found == config.target_sets {
            debug!(attempt, target_sets = config.target_sets, "board generated");
            return Generation::Generated {
                board: shuffled,
                attempts: attempt,
            };
        }
        last = shuffled;
    }

    let attempts = config.max_attempts.max(1);
    warn!(
        target_sets = config.target_sets,
        board_size,
        attempts,
        actual_sets = count_sets(&last),
        "could not generate board with exact set count, using fallback"
    );
    Generation::FallbackUsed {
        board: last,
        attempts,
    }
}

/// Generates a board with `target_sets` Sets out of `board_size` cards.
///
/// With a seed the board is reproducible (the daily LCG); without one it is
/// drawn from the thread RNG for practice play.
///
/// ```
/// use dailyset_engine::finder::count_sets;
/// use dailyset_engine::generator::generate_board;
///
/// let g = generate_board(4, 12, Some(20250101));
/// assert!(!g.is_fallback());
/// assert_eq!(count_sets(g.board()), 4);
/// assert_eq!(g, generate_board(4, 12, Some(20250101)));
/// ```
pub fn generate_board(target_sets: usize, board_size: usize, seed: Option<u64>) -> Generation {
    let config = GeneratorConfig::new(target_sets, board_size);
    match seed {
        Some(seed) => generate_with(&config, &mut SeededRandom::new(seed)),
        None => generate_with(&config, &mut RngSource::thread()),
    }
}
