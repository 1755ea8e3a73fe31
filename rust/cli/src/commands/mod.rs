//! Command handler modules for the `dailyset` CLI.
//!
//! Each command lives in its own module with the same shape:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) passed in, so handlers are testable
//! - Errors propagated via `CliError`; [`crate::run`] maps them to exit codes

pub mod cfg;
pub mod check;
pub mod daily;
pub mod deal;
pub mod find;
pub mod play;
pub mod rng;
pub mod stats;

pub use cfg::handle_cfg_command;
pub use check::handle_check_command;
pub use daily::handle_daily_command;
pub use deal::handle_deal_command;
pub use find::handle_find_command;
pub use play::handle_play_command;
pub use rng::handle_rng_command;
pub use stats::handle_stats_command;

use crate::error::CliError;
use dailyset_engine::date::PuzzleDate;

/// `--date` when given, otherwise today's US Eastern date.
pub(crate) fn resolve_date(date: Option<&str>) -> Result<PuzzleDate, CliError> {
    match date {
        Some(d) => Ok(d.parse()?),
        None => Ok(PuzzleDate::today()),
    }
}
