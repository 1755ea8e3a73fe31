//! Configuration command handler.
//!
//! Prints the resolved configuration as JSON, each value paired with where it
//! came from (`default`, `file` or `env`).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "target_sets": {
//!     "value": 6,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = config::load_with_sources()?;
    let display = serde_json::json!({
        "target_sets": {
            "value": config.target_sets,
            "source": sources.target_sets,
        },
        "board_size": {
            "value": config.board_size,
            "source": sources.board_size,
        },
        "max_attempts": {
            "value": config.max_attempts,
            "source": sources.max_attempts,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
