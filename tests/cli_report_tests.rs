// Integration tests for the timing-report binary

mod utils;

use predicates::prelude::*;
use utils::{sample_timings, write_timing_file, RUN_ONE};

#[test]
fn test_text_report_merges_files() {
    let dir = sample_timings();

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("timing-report");
    cmd.arg("--timings").arg(dir.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("=== Timing Report ==="))
        .stdout(predicate::str::contains("Summary"))
        .stdout(predicate::str::contains("File Breakdown"))
        .stdout(predicate::str::contains("Average (sec)"))
        // Thread.A over both runs: 2300 ms over 3 measurements
        .stdout(predicate::str::contains("0.77"))
        .stdout(predicate::str::contains("2.30"))
        .stdout(predicate::str::contains("run-1.xml"))
        .stdout(predicate::str::contains("run-2.xml"))
        .stdout(predicate::str::contains("run-3.xml").not());
}

#[test]
fn test_summary_rows_ignore_case() {
    let dir = sample_timings();

    let output = assert_cmd::cargo::cargo_bin_cmd!("timing-report")
        .arg("-t")
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let summary = stdout.split("File Breakdown").next().unwrap();
    let alpha = summary.find("alpha").unwrap();
    let thread_a = summary.find("Thread.A").unwrap();
    let thread_b = summary.find("Thread.B").unwrap();
    assert!(alpha < thread_a, "alpha sorts before Thread.A ignoring case");
    assert!(thread_a < thread_b);
}

#[test]
fn test_millis_unit_rounds_half_up() {
    let dir = sample_timings();

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("timing-report");
    cmd.arg("-t").arg(dir.path()).arg("--time-unit").arg("millis");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Average (ms)"))
        .stdout(predicate::str::contains("766.67"))
        .stdout(predicate::str::contains("2300.00"))
        .stdout(predicate::str::contains("1.13"));
}

#[test]
fn test_unknown_time_unit_fails() {
    let dir = sample_timings();

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("timing-report");
    cmd.arg("-t").arg(dir.path()).arg("-u").arg("fortnights");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unrecognized time unit: fortnights"));
}

#[test]
fn test_no_timings_message() {
    let dir = tempfile::tempdir().unwrap();

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("timing-report");
    cmd.arg("-t").arg(dir.path().join("does-not-exist"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "There are no timings available for reporting.",
        ))
        .stdout(predicate::str::contains("Summary").not());
}

#[test]
fn test_default_timings_directory() {
    let dir = tempfile::tempdir().unwrap();
    write_timing_file(dir.path(), "target/jetm/nested/run.xml", RUN_ONE);

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("timing-report");
    cmd.current_dir(dir.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Thread.A"))
        .stdout(predicate::str::contains("run.xml"));
}

#[test]
fn test_html_format() {
    let dir = sample_timings();

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("timing-report");
    cmd.arg("-t").arg(dir.path()).arg("--format").arg("html");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("<!DOCTYPE html>"))
        .stdout(predicate::str::contains("<title>Timing Report</title>"))
        .stdout(predicate::str::contains("<h2>Summary</h2>"))
        .stdout(predicate::str::contains("<h3>run-2.xml</h3>"))
        .stdout(predicate::str::contains("</html>"));
}

#[test]
fn test_json_format() {
    let dir = sample_timings();

    let output = assert_cmd::cargo::cargo_bin_cmd!("timing-report")
        .arg("-t")
        .arg(dir.path())
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["format"], "timing-report-json-v1");
    assert_eq!(json["unit"], "sec");
    assert_eq!(json["has_data"], true);

    let summary = json["summary"].as_array().unwrap();
    let names: Vec<&str> = summary
        .iter()
        .map(|row| row["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["alpha", "Thread.A", "Thread.B"]);

    let thread_a = &summary[1];
    assert_eq!(thread_a["measurements"], 3);
    assert_eq!(thread_a["min"], "0.10");
    assert_eq!(thread_a["max"], "2.00");
    assert_eq!(thread_a["total"], "2.30");

    // The empty file contributes no section
    assert_eq!(json["sources"].as_array().unwrap().len(), 2);
}

#[test]
fn test_csv_format() {
    let dir = sample_timings();

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("timing-report");
    cmd.arg("-t")
        .arg(dir.path())
        .arg("--format")
        .arg("csv")
        .arg("-u")
        .arg("ms");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with(
            "section,name,average_ms,measurements,min_ms,max_ms,total_ms",
        ))
        .stdout(predicate::str::contains(
            "summary,Thread.A,766.67,3,100.00,2000.00,2300.00",
        ))
        .stdout(predicate::str::contains(
            "run-1.xml,Thread.A,100.00,1,100.00,100.00,100.00",
        ));
}

#[test]
fn test_output_file() {
    let dir = sample_timings();
    let out_dir = tempfile::tempdir().unwrap();
    let report = out_dir.path().join("timing-report.html");

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("timing-report");
    cmd.arg("-t")
        .arg(dir.path())
        .arg("--format")
        .arg("html")
        .arg("-o")
        .arg(&report);

    cmd.assert().success().stdout(predicate::str::is_empty());

    let content = std::fs::read_to_string(&report).unwrap();
    assert!(content.contains("Thread.B"));
}

#[test]
fn test_malformed_file_fails() {
    let dir = sample_timings();
    write_timing_file(
        dir.path(),
        "broken.xml",
        r#"<aggregates><aggregate name="x" min="oops" max="1" total="1" measurements="1"/></aggregates>"#,
    );

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("timing-report");
    cmd.arg("-t").arg(dir.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("broken.xml"));
}

#[test]
fn test_output_directory_rejected() {
    let dir = sample_timings();

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("timing-report");
    cmd.arg("-t").arg(dir.path()).arg("-o").arg(dir.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("is a directory"));
}

#[test]
fn test_csv_without_timings_prints_message() {
    let dir = tempfile::tempdir().unwrap();

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("timing-report");
    cmd.arg("-t").arg(dir.path()).arg("--format").arg("csv");

    cmd.assert()
        .success()
        .stdout(predicate::eq(
            "There are no timings available for reporting.\n",
        ));
}

#[test]
fn test_json_without_timings_carries_message() {
    let dir = tempfile::tempdir().unwrap();

    let output = assert_cmd::cargo::cargo_bin_cmd!("timing-report")
        .arg("-t")
        .arg(dir.path())
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["has_data"], false);
    assert_eq!(
        json["message"],
        "There are no timings available for reporting."
    );
}

fn latin1_timings() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let mut bytes = br#"<?xml version="1.0" encoding="ISO-8859-1"?>
<aggregates><aggregate name="caf"#
        .to_vec();
    bytes.push(0xE9);
    bytes.extend_from_slice(br#"" min="10" max="30" total="40" measurements="2"/></aggregates>"#);
    std::fs::write(dir.path().join("latin1.xml"), bytes).unwrap();
    dir
}

#[test]
fn test_latin1_input_encoding() {
    let dir = latin1_timings();

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("timing-report");
    cmd.arg("-t")
        .arg(dir.path())
        .arg("--input-encoding")
        .arg("ISO-8859-1")
        .arg("-u")
        .arg("ms")
        .arg("--format")
        .arg("csv");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "summary,caf\u{e9},20.00,2,10.00,30.00,40.00",
        ));
}

#[test]
fn test_latin1_file_read_as_utf8_fails() {
    let dir = latin1_timings();

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("timing-report");
    cmd.arg("-t").arg(dir.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("latin1.xml"))
        .stderr(predicate::str::contains("not valid UTF-8"));
}

#[test]
fn test_unknown_input_encoding_fails() {
    let dir = sample_timings();

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("timing-report");
    cmd.arg("-t")
        .arg(dir.path())
        .arg("--input-encoding")
        .arg("klingon");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unrecognized input encoding: klingon"));
}

#[test]
fn test_min_above_max_fails() {
    let dir = tempfile::tempdir().unwrap();
    write_timing_file(
        dir.path(),
        "inverted.xml",
        r#"<aggregates><aggregate name="x" min="5" max="1" total="9" measurements="3"/></aggregates>"#,
    );

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("timing-report");
    cmd.arg("-t").arg(dir.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("inverted.xml"))
        .stderr(predicate::str::contains("above max"));
}
