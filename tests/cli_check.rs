//! CLI tests for `mend check`.
//!
//! Spawns the mend binary and verifies exit codes distinguish clean targets
//! from targets still carrying a pattern, and that check never writes.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use mend::exit_codes;

const CORRUPTED: &[u8] = b"render(items))}\\r\r\n";
const CLEAN: &[u8] = b"render(items))}\r\n";

fn run_mend(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mend"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("run mend")
}

#[test]
fn check_clean_target_exits_ok() {
    let temp = tempfile::tempdir().expect("tempdir");
    let target = temp.path().join("clean.tsx");
    fs::write(&target, CLEAN).expect("write target");

    let output = run_mend(temp.path(), &["check", target.to_str().expect("utf8 path")]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert!(String::from_utf8_lossy(&output.stdout).contains("occurrences=0"));
    assert_eq!(fs::read(&target).expect("read target"), CLEAN);
}

#[test]
fn check_corrupted_target_exits_found() {
    let temp = tempfile::tempdir().expect("tempdir");
    let target = temp.path().join("dirty.tsx");
    fs::write(&target, CORRUPTED).expect("write target");

    let output = run_mend(temp.path(), &["check", target.to_str().expect("utf8 path")]);

    assert_eq!(output.status.code(), Some(exit_codes::FOUND));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("occurrences=1"));
    assert!(stdout.contains("check: rule=))}\\\\r\\r\\n occurrences=1"));
    assert_eq!(fs::read(&target).expect("read target"), CORRUPTED);
}

#[test]
fn check_missing_target_fails() {
    let temp = tempfile::tempdir().expect("tempdir");

    let output = run_mend(temp.path(), &["check", "gone.tsx"]);

    assert_eq!(output.status.code(), Some(exit_codes::FAILED));
    assert!(String::from_utf8_lossy(&output.stderr).contains("not found"));
}

#[test]
fn check_counts_inline_rule_without_overlap() {
    let temp = tempfile::tempdir().expect("tempdir");
    let target = temp.path().join("data.txt");
    fs::write(&target, b"aaa").expect("write target");

    let output = run_mend(
        temp.path(),
        &[
            "check",
            target.to_str().expect("utf8 path"),
            "--pattern",
            "aa",
            "--replacement",
            "b",
        ],
    );

    assert_eq!(output.status.code(), Some(exit_codes::FOUND));
    assert!(String::from_utf8_lossy(&output.stdout).contains("occurrences=1"));
    assert_eq!(fs::read(&target).expect("read target"), b"aaa");
}
