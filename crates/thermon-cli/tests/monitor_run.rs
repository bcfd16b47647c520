use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::{TempDir, tempdir};

fn zone_with(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("temp1_input");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

/// The binary with a clean environment and default colors.
fn thermon_colored() -> Command {
    let mut cmd = cargo_bin_cmd!("thermon");
    for var in [
        "THERMON_WARNING",
        "THERMON_CRITICAL",
        "THERMON_INTERVAL",
        "THERMON_ZONE",
        "THERMON_CONFIG",
        "THERMON_COUNT",
        "THERMON_NO_COLOR",
        "THERMON_LOG",
        "NO_COLOR",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

fn thermon() -> Command {
    let mut cmd = thermon_colored();
    cmd.arg("--no-color");
    cmd
}

fn once(zone: &Path) -> Command {
    let mut cmd = thermon();
    cmd.arg("--count").arg("1").arg("-z").arg(zone);
    cmd
}

#[test]
fn test_default_thresholds_classify_samples() {
    for (millidegrees, label, value) in [
        ("40000", "OK", "40.00"),
        ("80000", "WARNING", "80.00"),
        ("90000\n", "CRITICAL", "90.00"),
    ] {
        let (_dir, zone) = zone_with(millidegrees);
        let expected = format!("] {label}: Current temperature: {value}°C");
        once(&zone)
            .assert()
            .success()
            .stdout(predicate::str::contains(expected))
            .stderr(predicate::str::is_empty());
    }
}

#[test]
fn test_banner_shows_settings() {
    let (_dir, zone) = zone_with("42000");
    once(&zone)
        .args(["-w", "60", "-c", "70", "-i", "1m30s"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Starting Thermal Monitor at "))
        .stdout(predicate::str::contains(
            "Thresholds: Warning >= 60.0°C, Critical >= 70.0°C",
        ))
        .stdout(predicate::str::contains("Checking every 1m30s"))
        .stdout(predicate::str::contains(format!(
            "Thermal zone: {}",
            zone.display()
        )));
}

#[test]
fn test_boundary_values_are_inclusive() {
    let (_dir, zone) = zone_with("75000");
    once(&zone)
        .assert()
        .success()
        .stdout(predicate::str::contains("WARNING: Current temperature: 75.00°C"));

    fs::write(&zone, "85000").unwrap();
    once(&zone)
        .assert()
        .success()
        .stdout(predicate::str::contains("CRITICAL: Current temperature: 85.00°C"));
}

#[test]
fn test_missing_zone_reports_error_and_keeps_going() {
    let dir = tempdir().unwrap();
    let zone = dir.path().join("missing");

    thermon()
        .args(["--count", "2", "-i", "10ms", "-z"])
        .arg(&zone)
        .assert()
        .success()
        .stderr(predicate::str::contains("Error reading temperature").count(2))
        .stdout(predicate::str::contains("Current temperature").not());
}

#[test]
fn test_sample_errors_are_not_logged_twice_by_default() {
    let dir = tempdir().unwrap();
    let zone = dir.path().join("missing");

    thermon()
        .args(["--count", "2", "-i", "10ms", "-z"])
        .arg(&zone)
        .assert()
        .success()
        .stderr(predicate::str::contains("failed to read thermal file").count(2))
        .stderr(predicate::str::contains("sample failed").not());
}

#[test]
fn test_garbage_zone_is_parse_error() {
    let (_dir, zone) = zone_with("hot");
    once(&zone)
        .assert()
        .success()
        .stderr(predicate::str::contains("invalid temperature format"));
}

#[test]
fn test_inverted_thresholds_exit_with_usage() {
    let (_dir, zone) = zone_with("42000");
    once(&zone)
        .args(["-w", "90", "-c", "85"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "warning threshold (90) must be less than critical threshold (85)",
        ))
        .stderr(predicate::str::contains("Usage: thermon"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_equal_thresholds_exit_with_usage() {
    let (_dir, zone) = zone_with("42000");
    once(&zone).args(["-w", "80", "-c", "80"]).assert().code(2);
}

#[test]
fn test_non_positive_interval_exits_with_usage() {
    let (_dir, zone) = zone_with("42000");
    for interval in ["0s", "-5s", "soon"] {
        once(&zone)
            .arg(format!("--interval={interval}"))
            .assert()
            .code(2)
            .stderr(predicate::str::contains("--interval"));
    }
}

#[test]
fn test_config_file_supplies_settings() {
    let (dir, zone) = zone_with("71000");
    let config = dir.path().join("thermon.toml");
    fs::write(
        &config,
        format!(
            "warning = 70.0\ncritical = 72.0\ninterval = \"5s\"\nzone = {:?}\n",
            zone.display().to_string()
        ),
    )
    .unwrap();

    thermon()
        .args(["--count", "1", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Checking every 5s"))
        .stdout(predicate::str::contains("WARNING: Current temperature: 71.00°C"));

    thermon()
        .args(["--count", "1", "-c", "71", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("CRITICAL: Current temperature: 71.00°C"));
}

#[test]
fn test_env_vars_supply_settings() {
    let (_dir, zone) = zone_with("50000");
    thermon()
        .env("THERMON_ZONE", &zone)
        .env("THERMON_WARNING", "45")
        .env("THERMON_CRITICAL", "55")
        .args(["--count", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("WARNING: Current temperature: 50.00°C"));
}

#[test]
fn test_unreadable_config_file_fails() {
    let dir = tempdir().unwrap();
    thermon()
        .args(["--count", "1", "--config"])
        .arg(dir.path().join("missing.toml"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("read config file"));
}

#[test]
fn test_invalid_config_file_fails() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("thermon.toml");
    fs::write(&config, "warning = \"hot\"\n").unwrap();

    thermon()
        .args(["--count", "1", "--config"])
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("parse config file"));
}

#[test]
fn test_colored_output_by_default() {
    let (_dir, zone) = zone_with("80000");
    thermon_colored()
        .args(["--count", "1", "-z"])
        .arg(&zone)
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[38;5;11m["))
        .stdout(predicate::str::contains("WARNING: Current temperature: 80.00°C\x1b[39m"));
}

#[test]
fn test_no_color_env_gives_plain_output() {
    let (_dir, zone) = zone_with("90000");
    thermon_colored()
        .env("NO_COLOR", "1")
        .args(["--count", "1", "-z"])
        .arg(&zone)
        .assert()
        .success()
        .stdout(predicate::str::contains("CRITICAL: Current temperature: 90.00°C"))
        .stdout(predicate::str::contains("\x1b").not());
}

#[test]
fn test_thermon_no_color_env_gives_plain_output() {
    let (_dir, zone) = zone_with("40000");
    thermon_colored()
        .env("THERMON_NO_COLOR", "1")
        .args(["--count", "1", "-z"])
        .arg(&zone)
        .assert()
        .success()
        .stdout(predicate::str::contains("OK: Current temperature: 40.00°C"))
        .stdout(predicate::str::contains("\x1b").not());
}

#[test]
fn test_thermon_count_env_limits_ticks() {
    let (_dir, zone) = zone_with("40000");
    thermon()
        .env("THERMON_COUNT", "2")
        .args(["-i", "10ms", "-z"])
        .arg(&zone)
        .assert()
        .success()
        .stdout(predicate::str::contains("Current temperature").count(2));
}
