//! End-to-end tests for `ttr aggregate`.

mod common;

use std::fs;

use common::{stdout_of, ttr_cmd};
use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;

#[test]
fn aggregate_reads_jsonl_written_by_analyze() {
    let dir = tempdir().unwrap();
    let results = stdout_of(ttr_cmd().args(["analyze", "short.txt", "dates.txt", "--format", "jsonl"]));
    let path = dir.path().join("results.jsonl");
    fs::write(&path, results).unwrap();

    let out = stdout_of(ttr_cmd().arg("aggregate").arg(&path).args([
        "--group",
        "samples",
        "--format",
        "json",
    ]));
    let agg: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(agg["group_id"], "samples");
    assert_eq!(agg["text_count"], 2);
    assert_eq!(agg["total_words"], 23);
    let (min, mean, max) = (
        agg["ttr_min"].as_f64().unwrap(),
        agg["ttr_mean"].as_f64().unwrap(),
        agg["ttr_max"].as_f64().unwrap(),
    );
    assert!(min <= mean && mean <= max);
    assert_eq!(max, 0.7);
}

#[test]
fn aggregate_combines_several_files_and_stdin() {
    let dir = tempdir().unwrap();
    let array = stdout_of(ttr_cmd().args(["analyze", "short.txt", "--format", "json"]));
    let path = dir.path().join("one.json");
    fs::write(&path, array).unwrap();
    let single = stdout_of(ttr_cmd().args(["analyze", "dates.txt", "--format", "jsonl"]));

    let out = stdout_of(
        ttr_cmd()
            .arg("aggregate")
            .arg(&path)
            .arg("-")
            .args(["--format", "csv"])
            .write_stdin(single),
    );
    let row = out.lines().nth(1).unwrap();
    assert!(row.starts_with("all,2,23,"));
}

#[test]
fn aggregate_of_empty_input_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.jsonl");
    fs::write(&path, "").unwrap();

    ttr_cmd()
        .arg("aggregate")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no results given"));
}

#[test]
fn aggregate_rejects_non_result_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, r#"{"group_id": "x"}"#).unwrap();

    ttr_cmd()
        .arg("aggregate")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse results"))
        .stderr(predicate::str::contains("Hints:"));
}
