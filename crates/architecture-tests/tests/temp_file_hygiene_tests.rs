//! Enforce RAII temp file handling in tests.
//!
//! Invariants:
//! - Tests create temp files through the tempfile crate, never `std::env::temp_dir()`
//! - No hardcoded /tmp paths in tests
//! - Tempfile handles are bound to a named variable so they live until the test ends

mod common;

use std::fs;
use std::path::PathBuf;

fn test_sources() -> Vec<(PathBuf, String)> {
    common::rust_files()
        .into_iter()
        .filter_map(|path| {
            let content = fs::read_to_string(&path).ok()?;
            let has_tests = content.contains("#[test]") || content.contains("#[tokio::test]");
            has_tests.then_some((path, content))
        })
        .collect()
}

#[test]
fn test_no_manual_temp_dir_usage() {
    let mut violations = Vec::new();

    for (path, content) in test_sources() {
        let relative = common::relative(&path);
        if content.contains("std::env::temp_dir()") {
            violations.push(format!(
                "{relative}: uses std::env::temp_dir() - prefer tempfile::tempdir()"
            ));
        }
        if content.contains("\"/tmp") {
            violations.push(format!("{relative}: contains hardcoded /tmp path"));
        }
    }

    assert!(
        violations.is_empty(),
        "Found manual temp file patterns:\n{}",
        violations.join("\n")
    );
}

#[test]
fn test_tempfile_bindings_retained() {
    let mut violations = Vec::new();

    for (path, content) in test_sources() {
        let relative = common::relative(&path);
        for (i, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.starts_with("//") {
                continue;
            }
            if trimmed.starts_with("let _ = tempfile::")
                || trimmed.starts_with("let _ = NamedTempFile")
            {
                violations.push(format!(
                    "{relative}:{}: tempfile bound to `_` is dropped immediately",
                    i + 1
                ));
            }
            if trimmed.contains("tempfile::tempdir()") && !trimmed.starts_with("let ") {
                violations.push(format!(
                    "{relative}:{}: tempdir result not retained",
                    i + 1
                ));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "Found tempfile instances not properly retained:\n{}",
        violations.join("\n")
    );
}
