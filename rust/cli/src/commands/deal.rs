//! Deal command handler for practice boards.
//!
//! Practice boards use a ChaCha20 stream instead of the date-seeded LCG. The
//! seed is always printed so an interesting board can be dealt again.

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_board, format_sets};
use crate::ui;
use dailyset_engine::finder::find_all_sets;
use dailyset_engine::generator::generate_with;
use dailyset_engine::rng::RngSource;
use std::io::Write;

/// Handle the deal command.
///
/// The seed is taken from `--seed`, then the configured seed, then drawn at
/// random.
pub fn handle_deal_command(
    sets: Option<usize>,
    size: Option<usize>,
    seed: Option<u64>,
    json: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load()?;
    let generator = cfg.generator(sets, size);
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);

    let mut rng = RngSource::from_seed(seed);
    let generation = generate_with(&generator, &mut rng);
    let attempts = generation.attempts();
    let fallback = generation.is_fallback();
    let board = generation.into_board();
    let found = find_all_sets(&board);

    if fallback {
        ui::warn_fallback(err, generator.target_sets, found.len())?;
    }

    if json {
        let display = serde_json::json!({
            "seed": seed,
            "attempts": attempts,
            "fallback": fallback,
            "board": board,
            "sets": found,
        });
        let s = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
        writeln!(out, "{}", s)?;
        return Ok(());
    }

    writeln!(out, "Practice board (seed {})", seed)?;
    writeln!(
        out,
        "{} cards, {} sets after {} attempt(s)\n",
        board.len(),
        found.len(),
        attempts
    )?;
    writeln!(out, "{}\n", format_board(&board))?;
    writeln!(out, "{}", format_sets(&board, &found))?;
    Ok(())
}
