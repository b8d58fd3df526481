use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{setup_home, unreachable_config, write_config, xsc};

#[test]
fn test_help_lists_year_flag() {
    xsc()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("--year").and(contains("YEAR")));
}

#[test]
fn test_version_flag() {
    xsc()
        .arg("--version")
        .assert()
        .success()
        .stdout(contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_non_numeric_year_is_rejected() {
    xsc()
        .args(["--year", "last"])
        .assert()
        .failure()
        .stderr(contains("--year"));
}

#[test]
fn test_zero_year_is_rejected() {
    xsc().args(["--year", "0"]).assert().failure();
}

#[test]
fn test_unknown_flag_is_rejected() {
    xsc()
        .args(["--db", "stats.sqlite"])
        .assert()
        .failure();
}

#[test]
fn test_connection_failure_aborts_before_any_chart() {
    let home = setup_home("connection_failure");
    unreachable_config(&home);

    xsc()
        .current_dir(&home)
        .env("HOME", &home)
        .env("PGUSER", "xonstat")
        .env_remove("PGPASS")
        .args(["--year", "2016"])
        .assert()
        .code(1)
        .stdout(contains("XonStat charts for 2016"))
        .stderr(contains("Database error"));

    assert!(!home.join("2016_games_per_month.png").exists());
}

#[test]
fn test_missing_user_is_a_config_error() {
    let home = setup_home("missing_user");
    unreachable_config(&home);

    xsc()
        .current_dir(&home)
        .env("HOME", &home)
        .env_remove("PGUSER")
        .env_remove("USER")
        .args(["--year", "2016"])
        .assert()
        .code(1)
        .stderr(contains("Configuration error").and(contains("PGUSER")));
}

#[test]
fn test_broken_config_file_is_reported() {
    let home = setup_home("broken_config");
    write_config(&home, "port: [not, a, port]\n");

    xsc()
        .current_dir(&home)
        .env("HOME", &home)
        .env("PGUSER", "xonstat")
        .assert()
        .code(1)
        .stderr(contains("Configuration error"));
}
