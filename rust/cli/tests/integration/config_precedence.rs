// I-series: configuration sources and precedence (default < file < env < flag)

use crate::helpers::cli_runner::CliRunner;
use serde_json::Value;
use std::fs;

#[test]
fn i1_cfg_shows_defaults() {
    let cli = CliRunner::new().expect("init");
    let res = cli.run(&["cfg"]);
    assert_eq!(res.exit_code, 0);
    let json: Value = serde_json::from_str(&res.stdout).unwrap();

    assert_eq!(json["target_sets"]["value"].as_u64(), Some(6));
    assert_eq!(json["board_size"]["value"].as_u64(), Some(12));
    assert_eq!(json["max_attempts"]["value"].as_u64(), Some(10_000));
    assert!(json["seed"]["value"].is_null());
    for key in ["target_sets", "board_size", "max_attempts", "seed"] {
        assert_eq!(json[key]["source"].as_str(), Some("default"), "{}", key);
    }
}

#[test]
fn i2_env_overrides_file() {
    let cli = CliRunner::new().expect("init");
    let cfg_path = cli.dir().join("dailyset.toml");
    fs::write(&cfg_path, "target_sets = 4\nseed = 456\nboard_size = 15\n").unwrap();
    let cfg_str = cfg_path.to_string_lossy().into_owned();

    let res = cli.run_with_env(&["cfg"], &[("DAILYSET_CONFIG", cfg_str.as_str())]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    let json: Value = serde_json::from_str(&res.stdout).unwrap();
    assert_eq!(json["seed"]["value"].as_u64(), Some(456));
    assert_eq!(json["seed"]["source"].as_str(), Some("file"));
    assert_eq!(json["board_size"]["value"].as_u64(), Some(15));

    let res = cli.run_with_env(
        &["cfg"],
        &[
            ("DAILYSET_CONFIG", cfg_str.as_str()),
            ("DAILYSET_SEED", "789"),
        ],
    );
    let json: Value = serde_json::from_str(&res.stdout).unwrap();
    assert_eq!(json["seed"]["value"].as_u64(), Some(789));
    assert_eq!(json["seed"]["source"].as_str(), Some("env"));
    assert_eq!(json["target_sets"]["source"].as_str(), Some("file"));
}

#[test]
fn i3_flag_overrides_env() {
    let cli = CliRunner::new().expect("init");
    let res = cli.run_with_env(
        &["daily", "--date", "2025-01-01", "--sets", "4"],
        &[("DAILYSET_SETS", "6")],
    );
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("12 cards, 4 sets"));

    let res = cli.run_with_env(
        &["daily", "--date", "2025-06-15"],
        &[("DAILYSET_SETS", "6")],
    );
    assert!(res.stdout.contains("12 cards, 6 sets"));
}

#[test]
fn i4_invalid_values_are_reported() {
    let cli = CliRunner::new().expect("init");
    let res = cli.run_with_env(&["cfg"], &[("DAILYSET_BOARD_SIZE", "2")]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("board_size must be >=3"));

    let res = cli.run_with_env(&["daily"], &[("DAILYSET_SEED", "abc")]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Invalid seed"));

    let missing = cli.dir().join("missing.toml");
    let res = cli.run_with_env(
        &["deal"],
        &[("DAILYSET_CONFIG", missing.to_string_lossy().as_ref())],
    );
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("cannot read config file"));
}

#[test]
fn i5_configured_seed_makes_deal_reproducible() {
    let cli = CliRunner::new().expect("init");
    let env = [("DAILYSET_SEED", "99"), ("DAILYSET_SETS", "3")];
    let a = cli.run_in_process(&["deal"], &env);
    let b = cli.run_in_process(&["deal"], &env);
    assert_eq!(a.exit_code, 0, "stderr={}", a.stderr);
    assert_eq!(a.stdout, b.stdout);
    assert!(a.stdout.starts_with("Practice board (seed 99)"));
    assert!(a.stdout.contains("12 cards, 3 sets"));

    let flagged = cli.run_in_process(&["deal", "--seed", "5"], &env);
    assert!(flagged.stdout.starts_with("Practice board (seed 5)"));
}
