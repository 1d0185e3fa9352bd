//! End-to-end runs of the `dsa` binary.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::process::{Command, Output};

fn dsa(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dsa"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn dsa")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn fib_prints_result_on_stdout() {
    let out = dsa(&["fib", "6"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "8\n");
    assert!(stderr(&out).is_empty());
}

#[test]
fn palindrome_prints_bool() {
    let out = dsa(&["palindrome", "1221"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "true\n");
}

#[test]
fn reverse_prints_items_backwards() {
    let out = dsa(&["reverse", "a", "b", "c"]);
    assert_eq!(stdout(&out), "c b a\n");
}

#[test]
fn negative_fib_index_fails() {
    let out = dsa(&["fib", "-1"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).is_empty());
    assert!(stderr(&out).contains("index must be non-negative"));
}

#[test]
fn unknown_command_prints_usage() {
    let out = dsa(&["frobnicate"]);
    assert_eq!(out.status.code(), Some(1));
    let err = stderr(&out);
    assert!(err.contains("unknown command: frobnicate"));
    assert!(err.contains("Usage: dsa <command>"));
}

#[test]
fn verbose_logs_to_stderr_only() {
    let out = dsa(&["--verbose", "reverse", "1", "2"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "2 1\n");
    assert!(stderr(&out).contains("reverse_sequence"));
}
