//! # Test helpers
//!
//! - `cli_runner`: `CliRunner` runs the built `dailyset` binary (or the library
//!   in-process) and captures stdout, stderr, the exit code and duration.
//!
//! ```rust,ignore
//! use crate::helpers::cli_runner::CliRunner;
//!
//! let cli = CliRunner::new().expect("cli runner");
//! let res = cli.run(&["daily", "--date", "2025-01-01"]);
//! assert_eq!(res.exit_code, 0);
//! ```
pub mod cli_runner;
