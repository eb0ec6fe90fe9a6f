//! Error reporting: message chain on stderr, hints, exit code 1.

mod common;

use common::ttr_cmd;
use predicates::prelude::*;

#[test]
fn missing_input_reports_path_and_hint() {
    ttr_cmd()
        .args(["analyze", "no-such-book.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Error: Failed to read no-such-book.txt"))
        .stderr(predicate::str::contains("Hints:"));
}

#[test]
fn zero_chunk_size_flag_is_rejected() {
    ttr_cmd()
        .args(["analyze", "short.txt", "--chunk-size", "0"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("`sttr_chunk_size` must be positive"))
        .stderr(predicate::str::contains("--chunk-size"));
}

#[test]
fn unknown_subcommand_is_a_usage_error() {
    ttr_cmd().arg("frobnicate").assert().failure();
}

#[test]
fn failed_runs_write_nothing_to_stdout() {
    ttr_cmd()
        .args(["analyze", "no-such-book.txt", "--format", "json"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}
