use std::fs;

use samplestats::{
    error::StatsError,
    pipeline::run,
    util::{math_utils::Deviation, test_util::setup_test_tracing},
};
use tempfile::tempdir;

use common::write_input;

mod common;

fn run_lines(lines: &[&str]) -> (Result<String, StatsError>, tempfile::TempDir) {
    let dir = tempdir().unwrap();
    let input = write_input(dir.path(), "input.txt", lines);
    let output = dir.path().join("output.txt");
    let result = run(&input, &output).map(|_| fs::read_to_string(&output).unwrap());
    (result, dir)
}

#[test]
fn test_five_values() {
    let _guard = setup_test_tracing("five_values");
    let (result, _dir) = run_lines(&["1.0", "2.0", "3.0", "4.0", "5.0"]);
    assert_eq!(result.unwrap(), "3.0, 1.5811388300841898\n");
}

#[test]
fn test_single_value_has_zero_deviation() {
    let _guard = setup_test_tracing("single_value");
    let (result, _dir) = run_lines(&["7.0"]);
    assert_eq!(result.unwrap(), "7.0, 0\n");
}

#[test]
fn test_constant_values() {
    let _guard = setup_test_tracing("constant_values");
    let (result, _dir) = run_lines(&["2.0", "2.0", "2.0"]);
    assert_eq!(result.unwrap(), "2.0, 0.0\n");
}

#[test]
fn test_empty_input_fails_without_output() {
    let _guard = setup_test_tracing("empty_input");
    let dir = tempdir().unwrap();
    let input = write_input(dir.path(), "input.txt", &[]);
    let output = dir.path().join("output.txt");
    let err = run(&input, &output).unwrap_err();
    assert!(matches!(err, StatsError::EmptyInput { .. }));
    assert!(!output.exists());
}

#[test]
fn test_non_numeric_line_fails() {
    let _guard = setup_test_tracing("non_numeric");
    let (result, _dir) = run_lines(&["abc"]);
    assert!(matches!(
        result,
        Err(StatsError::Parse { line: 1, ref value, .. }) if value == "abc"
    ));
}

#[test]
fn test_parse_failure_keeps_existing_output() {
    let _guard = setup_test_tracing("keeps_output");
    let dir = tempdir().unwrap();
    let input = write_input(dir.path(), "input.txt", &["1.0", "oops"]);
    let output = dir.path().join("output.txt");
    fs::write(&output, "previous\n").unwrap();
    assert!(run(&input, &output).is_err());
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous\n");
}

#[test]
fn test_trailing_blank_line_is_ignored() {
    let _guard = setup_test_tracing("trailing_blank");
    let (result, _dir) = run_lines(&["1.0", "3.0", ""]);
    assert_eq!(result.unwrap(), "2.0, 1.4142135623730951\n");
}

#[test]
fn test_output_is_truncated() {
    let _guard = setup_test_tracing("truncated");
    let dir = tempdir().unwrap();
    let input = write_input(dir.path(), "input.txt", &["4.0", "4.0"]);
    let output = dir.path().join("output.txt");
    fs::write(&output, "a much longer line that must disappear entirely\n").unwrap();
    run(&input, &output).unwrap();
    assert_eq!(fs::read_to_string(&output).unwrap(), "4.0, 0.0\n");
}

#[test]
fn test_rerun_is_idempotent() {
    let _guard = setup_test_tracing("idempotent");
    let dir = tempdir().unwrap();
    let input = write_input(dir.path(), "input.txt", &["0.1", "0.2", "0.3", "1e-7", "-12.5"]);
    let output = dir.path().join("output.txt");
    let first = run(&input, &output).unwrap();
    let first_contents = fs::read(&output).unwrap();
    let second = run(&input, &output).unwrap();
    assert_eq!(first, second);
    assert_eq!(first_contents, fs::read(&output).unwrap());
}

#[test]
fn test_missing_input_is_file_access_error() {
    let _guard = setup_test_tracing("missing_input");
    let dir = tempdir().unwrap();
    let output = dir.path().join("output.txt");
    let err = run(dir.path().join("nope.txt"), &output).unwrap_err();
    assert!(matches!(err, StatsError::FileAccess { .. }));
    assert!(!output.exists());
}

#[test]
fn test_unwritable_output_is_file_access_error() {
    let _guard = setup_test_tracing("unwritable_output");
    let dir = tempdir().unwrap();
    let input = write_input(dir.path(), "input.txt", &["1.0", "2.0"]);
    let output = dir.path().join("missing_dir").join("output.txt");
    let err = run(&input, &output).unwrap_err();
    match err {
        StatsError::FileAccess { path, .. } => assert_eq!(path, output),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_summary_is_returned() {
    let _guard = setup_test_tracing("summary_returned");
    let dir = tempdir().unwrap();
    let input = write_input(dir.path(), "input.txt", &["10", "20"]);
    let summary = run(&input, dir.path().join("output.txt")).unwrap();
    assert_eq!(summary.count, 2);
    assert_eq!(summary.mean, 15.0);
    assert_eq!(summary.deviation, Deviation::Sample(50f64.sqrt()));
}

#[test]
fn test_opposite_extremes_stay_finite() {
    let _guard = setup_test_tracing("opposite_extremes");
    let (result, _dir) = run_lines(&["1.2e308", "-1.2e308"]);
    let contents = result.unwrap();
    assert!(contents.starts_with("0.0, 1.69"), "{contents}");
    assert!(!contents.contains("nan") && !contents.contains("inf"), "{contents}");
}
