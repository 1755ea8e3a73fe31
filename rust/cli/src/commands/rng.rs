//! Seeded generator inspection command.
//!
//! Prints the first values of the LCG that drives daily boards, so another
//! client can confirm it reproduces the same stream for a date.

use super::resolve_date;
use crate::error::CliError;
use dailyset_engine::rng::SeededRandom;
use std::io::Write;

/// `--seed` wins; otherwise the seed comes from `--date` (default today).
pub fn handle_rng_command(
    seed: Option<u64>,
    date: Option<&str>,
    count: usize,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let seed = match seed {
        Some(s) => s,
        None => resolve_date(date)?.seed(),
    };
    let mut rng = SeededRandom::new(seed);
    writeln!(out, "LCG seed {} (state {})", seed, rng.state())?;
    for i in 0..count {
        let v = rng.next();
        writeln!(out, "{:>3}: {:.6} (state {})", i + 1, v, rng.state())?;
    }
    Ok(())
}
