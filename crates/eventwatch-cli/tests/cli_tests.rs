//! CLI integration tests
//!
//! Drive the built `eventwatch` binary against listing files in a scratch
//! directory.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const RUN_1: &str = "\
Upcoming Events
[Sat, Apr 4] NV - Chimera Golf Club 4.4.26 - Las Vegas
[Sun, Apr 5] AZ - Desert Scramble Series
CA - Palm Valley Invitational - Palm Desert
";

const RUN_2: &str = "\
Upcoming Events
NV - Chimera Golf Club 4.5.26 - Las Vegas
CA - Palm Valley Invitational - Palm Desert
NV - Silver State Open - Reno
";

fn eventwatch(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_eventwatch"))
        .current_dir(dir)
        .env("RUST_LOG", "off")
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "CLI command should succeed. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn test_extract_from_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("listing.txt"), RUN_1).unwrap();

    let output = eventwatch(temp_dir.path(), &["extract", "--file", "listing.txt"]);

    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("[NV] Chimera Golf Club 4.4.26 - Las Vegas (Sat, Apr 4)"));
    assert!(out.contains("[AZ] Desert Scramble Series (Sun, Apr 5)"));
    assert!(out.contains("3 events from listing.txt"));
}

#[test]
fn test_extract_json_with_state_filter() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("listing.txt"), RUN_1).unwrap();

    let output = eventwatch(
        temp_dir.path(),
        &["extract", "--file", "listing.txt", "--state", "ca", "--json"],
    );

    assert_success(&output);
    let events: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let events = events.as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["title"], "Palm Valley Invitational");
    assert_eq!(events[0]["city"], "Palm Desert");
}

#[test]
fn test_check_twice_then_log_and_removed() {
    let temp_dir = TempDir::new().unwrap();
    let listing = temp_dir.path().join("listing.txt");

    fs::write(&listing, RUN_1).unwrap();
    let first = eventwatch(temp_dir.path(), &["check", "--file", "listing.txt"]);
    assert_success(&first);
    assert!(stdout(&first).contains("First run for scope all: 3 events recorded"));
    assert!(temp_dir.path().join(".eventwatch/snapshot-all.json").exists());

    fs::write(&listing, RUN_2).unwrap();
    let second = eventwatch(temp_dir.path(), &["check", "--file", "listing.txt"]);
    assert_success(&second);
    let out = stdout(&second);
    assert!(out.contains("3 events, 1 new, 1 removed, 1 changed"), "{}", out);
    assert!(out.contains("+ [NV] Silver State Open - Reno"));
    assert!(out.contains("- [AZ] Desert Scramble Series"));
    assert!(out.contains("date-changed"));

    let log = eventwatch(temp_dir.path(), &["log"]);
    assert_success(&log);
    assert!(stdout(&log).contains("\"4.5.26\""));

    let removed = eventwatch(temp_dir.path(), &["removed"]);
    assert_success(&removed);
    assert!(stdout(&removed).contains("Desert Scramble Series"));
}

#[test]
fn test_check_json_and_custom_data_dir() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("listing.txt"), RUN_1).unwrap();

    let output = eventwatch(
        temp_dir.path(),
        &["check", "--file", "listing.txt", "--data-dir", "state", "--state", "NV", "--json"],
    );

    assert_success(&output);
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["first_run"], true);
    assert_eq!(report["scope"], "NV");
    assert_eq!(report["event_count"], 1);
    assert!(temp_dir.path().join("state/snapshot-nv.json").exists());
}

#[test]
fn test_dry_run_does_not_write_snapshot() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("listing.txt"), RUN_1).unwrap();

    let output = eventwatch(temp_dir.path(), &["check", "--file", "listing.txt", "--dry-run"]);

    assert_success(&output);
    assert!(stdout(&output).contains("Dry run: snapshot not saved"));
    assert!(!temp_dir.path().join(".eventwatch/snapshot-all.json").exists());
}

#[test]
fn test_config_file_supplies_data_dir_and_retention() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("listing.txt"), RUN_1).unwrap();
    fs::write(
        temp_dir.path().join("watch.toml"),
        "[store]\ndata_dir = \"snapshots\"\n\n[retention]\nchange_log_cap = 5\n",
    )
    .unwrap();

    let output = eventwatch(
        temp_dir.path(),
        &["check", "--config", "watch.toml", "--file", "listing.txt"],
    );

    assert_success(&output);
    assert!(temp_dir.path().join("snapshots/snapshot-all.json").exists());
}

#[test]
fn test_log_before_any_check() {
    let temp_dir = TempDir::new().unwrap();
    let output = eventwatch(temp_dir.path(), &["log", "--state", "tx"]);
    assert_success(&output);
    assert!(stdout(&output).contains("No snapshot for scope TX yet"));
}

#[test]
fn test_invalid_state_exits_with_error() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("listing.txt"), RUN_1).unwrap();

    let output = eventwatch(
        temp_dir.path(),
        &["check", "--file", "listing.txt", "--state", "ZZ"],
    );

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Invalid scope 'ZZ'"), "{}", stderr);
}

#[test]
fn test_missing_source_exits_with_error() {
    let temp_dir = TempDir::new().unwrap();
    let output = eventwatch(temp_dir.path(), &["check"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("No listing source"));
}

#[test]
fn test_missing_file_exits_with_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let output = eventwatch(temp_dir.path(), &["check", "--file", "absent.txt"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("ERR_NOT_FOUND"));
}
