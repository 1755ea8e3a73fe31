//! `check` command: is this triple a Set, and if not, which attribute breaks it.

use super::find::cards_or_report;
use crate::error::CliError;
use dailyset_engine::rules::{Verdict, attribute_verdicts, is_valid_set, third_card};
use std::io::Write;

fn describe(v: Verdict) -> &'static str {
    match v {
        Verdict::AllSame => "all the same",
        Verdict::AllDifferent => "all different",
        Verdict::TwoMatch => "two match, one differs",
    }
}

pub fn handle_check_command(
    codes: &[String],
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cards = cards_or_report(codes, err)?;
    let [a, b, c] = cards.as_slice() else {
        return Err(CliError::InvalidInput(format!(
            "expected 3 cards, got {}",
            cards.len()
        )));
    };

    let verdict = if is_valid_set(a, b, c) { "SET" } else { "NOT A SET" };
    writeln!(out, "{} {} {}: {}", a, b, c, verdict)?;
    for (attr, v) in attribute_verdicts(a, b, c) {
        let mark = if v.is_ok() { "ok" } else { "x " };
        writeln!(out, "  [{}] {:<8} {}", mark, attr.name(), describe(v))?;
    }
    if !is_valid_set(a, b, c) {
        writeln!(out, "{} {} would complete the set with {}", a, b, third_card(a, b))?;
    }
    Ok(())
}
