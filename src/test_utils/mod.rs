//! Test utilities for config-collector
//!
//! Shared helpers for unit tests that need a real run log on disk.

#![cfg(test)]

use std::fs;

use tempfile::TempDir;

use crate::runlog::RunLog;

/// A run log writing into a fresh temp dir. Keep the returned `TempDir`
/// alive for the duration of the test.
pub fn temp_runlog() -> (TempDir, RunLog) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("collection.log");
    let log = RunLog::open(&path, true).unwrap();
    (dir, log)
}

/// All logged lines with their timestamps stripped, e.g.
/// `Info: Program: Example; Version: 1.0`.
pub fn logged_messages(log: &RunLog) -> Vec<String> {
    let content = fs::read_to_string(log.path()).unwrap_or_default();
    content
        .lines()
        .map(|line| line.splitn(2, "  ").nth(1).unwrap_or(line).to_string())
        .collect()
}
