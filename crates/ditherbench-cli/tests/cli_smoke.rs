//! CLI binary smoke tests using assert_cmd.
//!
//! These tests exercise the compiled `ditherbench` binary to verify that
//! argument parsing, report writing, and error handling work end-to-end.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("ditherbench").unwrap()
}

fn write_results_csv(dir: &tempfile::TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("dithering_performance.csv");
    std::fs::write(&path, content).unwrap();
    path
}

const VALID_CSV: &str = "Threads,Average_Time_sec,Speedup\n\
                         1,10.0,1.0\n\
                         2,5.2,1.92\n\
                         4,2.9,3.45\n\
                         8,1.8,5.56\n";

// ---------------------------------------------------------------------------
// Top-level
// ---------------------------------------------------------------------------

#[test]
fn help_flag() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("annotated bar chart"));
}

#[test]
fn version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ditherbench"));
}

// ---------------------------------------------------------------------------
// Load failures
// ---------------------------------------------------------------------------

#[test]
fn nonexistent_input_reports_missing_file() {
    cmd()
        .arg("/nonexistent/dithering_performance.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"))
        .stderr(predicate::str::contains("benchmark harness"));
}

#[test]
fn no_args_in_empty_directory_reports_missing_default_file() {
    let dir = tempfile::tempdir().unwrap();
    cmd()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("dithering_performance.csv"));
}

#[test]
fn missing_speedup_column_reports_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_results_csv(&dir, "Threads,Average_Time_sec\n1,10.0\n");

    cmd()
        .arg(path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Speedup"));
}

#[test]
fn unparseable_row_reports_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_results_csv(&dir, "Threads,Average_Time_sec,Speedup\nfour,2.9,3.45\n");

    cmd()
        .arg(path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("row 1"));
}

// ---------------------------------------------------------------------------
// Report writing
// ---------------------------------------------------------------------------

#[test]
fn writes_report_next_to_explicit_output_path() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_results_csv(&dir, VALID_CSV);
    let output = dir.path().join("report.html");

    cmd()
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let html = std::fs::read_to_string(&output).unwrap();
    assert!(html.contains("plotly"));
    assert!(html.contains("(+5.56x)"));
}

#[test]
fn defaults_to_the_working_directory_file_names() {
    let dir = tempfile::tempdir().unwrap();
    write_results_csv(&dir, VALID_CSV);

    cmd().current_dir(dir.path()).assert().success();

    assert!(dir.path().join("dithering_performance.html").exists());
}

#[test]
fn header_only_input_still_renders_a_report() {
    let dir = tempfile::tempdir().unwrap();
    write_results_csv(&dir, "Threads,Average_Time_sec,Speedup\n");

    cmd().current_dir(dir.path()).assert().success();

    let html = std::fs::read_to_string(dir.path().join("dithering_performance.html")).unwrap();
    assert!(html.contains("plotly"));
}
