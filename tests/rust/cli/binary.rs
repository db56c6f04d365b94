//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Wakalog.
//! The Wakalog project belongs to the Dunimd project team.

use std::process::{Command, Stdio};

use serde_json::Value;

fn wakalog() -> Command {
    Command::new(env!("CARGO_BIN_EXE_wakalog"))
}

fn read_lines(path: &std::path::Path) -> Vec<Value> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).expect("each line is json"))
        .collect()
}

#[test]
fn test_cli_writes_exactly_one_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wakatime.log");

    let status = wakalog()
        .args(["--logfile", path.to_str().unwrap()])
        .args(["--verbose", "--level", "warning", "--write"])
        .args(["--timestamp", "1700000000", "--file", "src/lib.rs"])
        .args(["--plugin", "vim-wakatime/4.0.0", "hello"])
        .status()
        .unwrap();
    assert!(status.success());

    let lines = read_lines(&path);
    assert_eq!(lines.len(), 1, "{lines:?}");
    let line = &lines[0];
    assert_eq!(line["level"], "WARNING");
    assert_eq!(line["message"], "hello");
    assert_eq!(line["plugin"], "vim-wakatime/4.0.0");
    assert_eq!(line["isWrite"], true);
    assert_eq!(line["file"], "src/lib.rs");
    assert_eq!(line["time"].as_f64(), Some(1_700_000_000.0));
}

#[test]
fn test_cli_below_threshold_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wakatime.log");

    let status = wakalog()
        .args(["--logfile", path.to_str().unwrap(), "--level", "debug", "quiet"])
        .status()
        .unwrap();
    assert!(status.success());
    assert!(read_lines(&path).is_empty());
}

#[test]
fn test_cli_missing_log_directory_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("wakatime.log");

    let output = wakalog()
        .args(["--logfile", path.to_str().unwrap(), "--level", "error", "x"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert!(!path.exists());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot open"), "{stderr}");
    assert!(stderr.contains(r#""message":"x""#), "{stderr}");
}

#[test]
fn test_cli_survives_closed_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("wakatime.log");

    let mut child = wakalog()
        .args(["--logfile", path.to_str().unwrap(), "--level", "error", "x"])
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    // Close the read end so every stderr write from the child fails.
    drop(child.stderr.take());

    let status = child.wait().unwrap();
    assert_eq!(status.code(), Some(0));
}
