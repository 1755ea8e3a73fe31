// P-series: `play` driven through piped stdin

use crate::helpers::cli_runner::CliRunner;
use dailyset_engine::logger::read_completions;

const ARGS: &[&str] = &["play", "--date", "2025-01-01", "--sets", "4"];

#[test]
fn p1_solving_the_board_exits_zero() {
    let cli = CliRunner::new().expect("init");
    let res = cli.run_with_input(ARGS, "1 3 8\n5 7 12\n7 9 10\n8 11 12\n");
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert!(res.stdout.contains("You found all 4 sets"));
}

#[test]
fn p2_closed_input_exits_130() {
    let cli = CliRunner::new().expect("init");
    let res = cli.run_with_input(ARGS, "1 3 8\n");
    assert_eq!(res.exit_code, 130);
    assert!(res.stderr.contains("WARNING: input closed"));
}

#[test]
fn p3_log_records_each_session() {
    let cli = CliRunner::new().expect("init");
    let mut args = ARGS.to_vec();
    args.extend(["--log", "logs/completions.jsonl"]);

    assert_eq!(cli.run_with_input(&args, "q\n").exit_code, 0);
    assert_eq!(
        cli.run_with_input(&args, "1 3 8\n5 7 12\n7 9 10\n8 11 12\n")
            .exit_code,
        0
    );

    let records = read_completions(cli.dir().join("logs/completions.jsonl"))
        .unwrap()
        .records;
    assert_eq!(records.len(), 2);
    assert!(records[0].incomplete);
    assert!(!records[0].is_ranked());
    assert!(records[1].is_ranked());
    assert_eq!(records[1].date.to_string(), "2025-01-01");
}

#[test]
fn p4_invalid_input_does_not_end_the_game() {
    let cli = CliRunner::new().expect("init");
    let res = cli.run_with_input(ARGS, "99\nhello\nboard\nq\n");
    assert_eq!(res.exit_code, 0);
    assert!(res.stderr.contains("off the board"));
    assert!(res.stdout.contains("Found 0/4"));
}

#[test]
fn p5_stats_reads_the_play_log() {
    let cli = CliRunner::new().expect("init");
    let mut args = ARGS.to_vec();
    args.extend(["--log", "c.jsonl"]);
    assert_eq!(cli.run_with_input(&args, "show\n").exit_code, 0);

    let res = cli.run(&["stats", "--input", "c.jsonl", "--json"]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    let json: serde_json::Value = serde_json::from_str(&res.stdout).unwrap();
    assert_eq!(json["days_played"], 1);
    assert_eq!(json["completions"], 0);
    assert_eq!(json["did_not_complete"], 1);
    assert!(json["best_secs"].is_null());
}

#[test]
fn p6_revealed_day_stays_unranked_after_resume() {
    let cli = CliRunner::new().expect("init");
    let mut args = ARGS.to_vec();
    args.extend(["--log", "c.jsonl", "--save", "progress.json"]);

    assert_eq!(cli.run_with_input(&args, "1 3 8\nq\n").exit_code, 0);
    assert_eq!(cli.run_with_input(&args, "show\n").exit_code, 0);
    assert!(!cli.dir().join("progress.json").exists());

    let res = cli.run_with_input(&args, "5 7 12\n7 9 10\n8 11 12\n");
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("already finished or revealed"));

    let res = cli.run(&["stats", "--input", "c.jsonl", "--json"]);
    let json: serde_json::Value = serde_json::from_str(&res.stdout).unwrap();
    assert_eq!(json["completions"], 0);
    assert_eq!(json["did_not_complete"], 1);
}
