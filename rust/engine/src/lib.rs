//! # dailyset-engine: Daily Set Puzzle Core
//!
//! Card model, Set rule, Set finder and the board generator behind a daily
//! "Set" puzzle. Daily boards are derived from the calendar date through a
//! fixed linear congruential generator, so every player (and every conforming
//! implementation) sees the same cards on the same day.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card attributes and the 81-card deck
//! - [`rules`] - The Set rule and third-card completion
//! - [`finder`] - Exhaustive Set search over a board
//! - [`rng`] - Seeded LCG, the `RandomSource` seam and Fisher–Yates shuffle
//! - [`date`] - Puzzle dates, date seeds and US Eastern "today"
//! - [`generator`] - Board generation with an exact Set count
//! - [`daily`] - The daily puzzle for a date
//! - [`session`] - Player selections, found Sets, timer and saved progress
//! - [`logger`] - JSONL completion records
//! - [`stats`] - Personal statistics from a completion log
//! - [`errors`] - Error types
//!
//! ## Quick Start
//!
//! ```rust
//! use dailyset_engine::daily::daily_puzzle_for;
//! use dailyset_engine::finder::find_all_sets;
//!
//! let puzzle = daily_puzzle_for("2025-06-15", 6, 12).unwrap();
//! assert_eq!(puzzle.board.len(), 12);
//! assert_eq!(find_all_sets(&puzzle.board).len(), 6);
//! ```
//!
//! ## Practice Boards
//!
//! Without a seed the generator draws from the thread RNG. Any
//! [`rng::RandomSource`] can be injected instead:
//!
//! ```rust
//! use dailyset_engine::generator::{generate_with, GeneratorConfig};
//! use dailyset_engine::rng::RngSource;
//!
//! let mut rng = RngSource::from_seed(7);
//! let g = generate_with(&GeneratorConfig::new(3, 12), &mut rng);
//! assert_eq!(g.board().len(), 12);
//! ```

pub mod cards;
pub mod daily;
pub mod date;
pub mod errors;
pub mod finder;
pub mod generator;
pub mod logger;
pub mod rng;
pub mod rules;
pub mod session;
pub mod stats;
