// A-series: basic CLI surface

use crate::helpers::cli_runner::CliRunner;

#[test]
fn a1_help_lists_all_commands() {
    let cli = CliRunner::new().expect("CliRunner should initialize with binary path");
    let res = cli.run(&["--help"]);

    assert_eq!(res.exit_code, 0, "--help should exit with code 0");
    for cmd in ["daily", "deal", "find", "check", "play", "rng", "stats", "cfg"] {
        assert!(res.stdout.contains(cmd), "help should list `{}`", cmd);
    }
}

#[test]
fn a2_version_prints_version_and_exits_zero() {
    let cli = CliRunner::new().expect("CliRunner should initialize");
    let res = cli.run(&["--version"]);
    assert_eq!(res.exit_code, 0, "--version should exit 0");
    assert!(res.stdout.contains("dailyset"));
}

#[test]
fn a3_unknown_subcommand_shows_commands_on_stderr() {
    let cli = CliRunner::new().expect("CliRunner should initialize");
    let res = cli.run(&["unknown"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stdout.is_empty());
    assert!(
        res.stderr.contains("Commands:"),
        "stderr should contain the command list\n---stderr---\n{}\n-----------",
        res.stderr
    );
    assert!(res.stderr.contains("  play"));
}

#[test]
fn a4_find_lists_sets_among_codes() {
    let cli = CliRunner::new().expect("CliRunner should initialize");
    let res = cli.run(&["find", "1drt", "3DRE", "2DRF", "1ORT", "3DPF"]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert!(res.stdout.starts_with("5 cards, 1 sets"));
    assert!(res.stdout.contains("A: 1 2 3  (1DRT 3DRE 2DRF)"));
}

#[test]
fn a5_bad_card_codes_exit_two() {
    let cli = CliRunner::new().expect("CliRunner should initialize");
    let res = cli.run(&["find", "1DRT", "9XYZ"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Error: card 2:"));
    assert!(res.stderr.contains("Error: Invalid input"));
    assert!(res.stdout.is_empty());
}

#[test]
fn a6_check_needs_exactly_three_cards() {
    let cli = CliRunner::new().expect("CliRunner should initialize");
    assert_eq!(cli.run(&["check", "1DRF", "2OGT"]).exit_code, 2);

    let res = cli.run(&["check", "1DRF", "2OGT", "3SPE"]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains(": SET"));
}

#[test]
fn a7_rng_prints_daily_stream() {
    let cli = CliRunner::new().expect("CliRunner should initialize");
    let res = cli.run(&["rng", "--date", "2025-01-01", "--count", "1"]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("LCG seed 20250101 (state 188021)"));
    assert!(res.stdout.contains("  1: 0.710468 (state 165738)"));
}
