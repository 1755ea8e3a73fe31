//! UI helper functions for terminal output formatting.
//!
//! This module provides utility functions for consistent user interface output
//! across CLI commands, including error messages and warnings.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Warn that the generator could not reach the requested Set count
pub fn warn_fallback(err: &mut dyn Write, target: usize, actual: usize) -> std::io::Result<()> {
    display_warning(
        err,
        &format!(
            "could not build a board with exactly {} sets; showing a board with {}",
            target, actual
        ),
    )
}
