// D-series: daily boards are identical for everyone on the same date

use crate::helpers::cli_runner::CliRunner;
use serde_json::Value;

fn codes(board: &Value) -> Vec<String> {
    let lines = board.as_array().expect("board array");
    lines
        .iter()
        .map(|c| {
            let n = c["number"].as_u64().unwrap();
            let s = match c["shape"].as_str().unwrap() {
                "diamond" => "D",
                "oval" => "O",
                _ => "S",
            };
            let col = match c["color"].as_str().unwrap() {
                "red" => "R",
                "green" => "G",
                _ => "P",
            };
            let sh = match c["shading"].as_str().unwrap() {
                "solid" => "F",
                "striped" => "T",
                _ => "E",
            };
            format!("{}{}{}{}", n, s, col, sh)
        })
        .collect()
}

#[test]
fn d1_new_year_board_is_fixed() {
    let cli = CliRunner::new().expect("init");
    let res = cli.run(&["daily", "--date", "2025-01-01", "--sets", "4", "--json"]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    let json: Value = serde_json::from_str(&res.stdout).unwrap();
    assert_eq!(json["date"], "2025-01-01");
    assert_eq!(json["fallback"], false);
    assert_eq!(
        codes(&json["board"]).join(" "),
        "1DRT 1ORT 3DRE 1DGT 2OPT 3ORF 3DRT 2DRF 3DPF 3DGE 3OPE 1SGT"
    );
    let sets: Vec<Vec<u64>> = serde_json::from_value(json["sets"].clone()).unwrap();
    assert_eq!(
        sets,
        vec![vec![0, 2, 7], vec![4, 6, 11], vec![6, 8, 9], vec![7, 10, 11]]
    );
}

#[test]
fn d2_default_target_is_six_sets() {
    let cli = CliRunner::new().expect("init");
    let res = cli.run(&["daily", "--date", "2025-06-15", "--json"]);
    assert_eq!(res.exit_code, 0);
    let json: Value = serde_json::from_str(&res.stdout).unwrap();
    assert_eq!(
        codes(&json["board"]).join(" "),
        "2OPE 2ORE 1DGT 2SGT 2SRF 1DPE 1SRE 2SGE 3SPF 2DGE 2DPE 2SPE"
    );
    assert_eq!(json["sets"].as_array().unwrap().len(), 6);
}

#[test]
fn d3_text_output_is_stable_across_runs() {
    let cli = CliRunner::new().expect("init");
    let a = cli.run(&["daily", "--date", "2024-02-29"]);
    let b = cli.run(&["daily", "--date", "2024-02-29"]);
    assert_eq!(a.exit_code, 0);
    assert_eq!(a.stdout, b.stdout);
    assert!(a.stdout.starts_with("Daily Set 2024-02-29 (seed 20240229)"));
}

#[test]
fn d4_unreachable_target_warns_and_still_prints_board() {
    let cli = CliRunner::new().expect("init");
    let res = cli.run_with_env(
        &["daily", "--date", "2025-01-01", "--sets", "100"],
        &[("DAILYSET_MAX_ATTEMPTS", "200")],
    );
    assert_eq!(res.exit_code, 0);
    assert!(res.stderr.contains("WARNING: could not build a board with exactly 100 sets"));
    assert!(res.stdout.contains("12 cards"));
}

#[test]
fn d5_invalid_date_is_rejected() {
    let cli = CliRunner::new().expect("init");
    for bad in ["2025-02-30", "20250101", "tomorrow"] {
        let res = cli.run(&["daily", "--date", bad]);
        assert_eq!(res.exit_code, 2, "{} should be rejected", bad);
        assert!(res.stderr.contains("Error: Invalid input"));
    }
}

#[test]
fn d6_today_resolves_without_date() {
    let cli = CliRunner::new().expect("init");
    let res = cli.run(&["daily"]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.starts_with("Daily Set "));
}
