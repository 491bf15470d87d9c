//! Integration tests for the depcycle CLI.

use rstest::{fixture, rstest};
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Run the depcycle binary in `dir`, optionally feeding `stdin`.
fn run_depcycle(dir: &Path, args: &[&str], stdin: Option<&str>) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_depcycle"))
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn depcycle");

    {
        let mut handle = child.stdin.take().expect("stdin is piped");
        if let Some(input) = stdin {
            handle
                .write_all(input.as_bytes())
                .expect("Failed to write stdin");
        }
    }

    child.wait_with_output().expect("Failed to wait for depcycle")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Provides a fresh temporary directory for each test
#[fixture]
fn temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

#[rstest]
fn test_acyclic_file_exits_zero(temp_dir: TempDir) {
    fs::write(
        temp_dir.path().join("deps.txt"),
        "# diamond\na -> b\na -> c\nc -> d\nd -> b\n",
    )
    .unwrap();

    let output = run_depcycle(temp_dir.path(), &["check", "deps.txt"], None);

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("OK: no dependency cycle"), "stdout: {out}");
    assert!(out.contains("4 edges checked, 4 nodes"));
}

#[rstest]
fn test_cycle_reports_line_and_exits_one(temp_dir: TempDir) {
    fs::write(
        temp_dir.path().join("deps.txt"),
        "a -> b\nb -> c\n\nc -> a\nc -> d\n",
    )
    .unwrap();

    let output = run_depcycle(temp_dir.path(), &["check", "deps.txt"], None);

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("CYCLE: edge c -> a on line 4"), "stdout: {out}");
    assert!(out.contains("3 edges checked"));
}

#[rstest]
fn test_reads_stdin(temp_dir: TempDir) {
    let output = run_depcycle(temp_dir.path(), &["check", "-"], Some("x x\n"));

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("edge x -> x on line 1"));
}

#[rstest]
fn test_json_output_with_keep_going(temp_dir: TempDir) {
    fs::write(
        temp_dir.path().join("deps.jsonl"),
        concat!(
            "{\"source\":\"a\",\"target\":\"b\"}\n",
            "{\"source\":\"b\",\"target\":\"a\"}\n",
            "{\"source\":\"b\",\"target\":\"c\"}\n",
        ),
    )
    .unwrap();

    let output = run_depcycle(
        temp_dir.path(),
        &["--json", "check", "--format", "jsonl", "--keep-going", "deps.jsonl"],
        None,
    );

    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["edges_processed"], 3);
    assert_eq!(value["node_count"], 3);
    assert_eq!(value["first_cycle"]["line"], 2);
    assert_eq!(value["first_cycle"]["edge"]["source"], "b");
}

#[rstest]
fn test_config_file_sets_format(temp_dir: TempDir) {
    fs::write(temp_dir.path().join(".depcycle.yaml"), "format: jsonl\n").unwrap();
    fs::write(
        temp_dir.path().join("deps.jsonl"),
        "{\"source\":\"a\",\"target\":\"b\"}\n",
    )
    .unwrap();

    let output = run_depcycle(temp_dir.path(), &["check", "deps.jsonl"], None);

    assert_eq!(output.status.code(), Some(0), "stderr: {:?}", output.stderr);
}

#[rstest]
fn test_parse_error_exits_two(temp_dir: TempDir) {
    fs::write(temp_dir.path().join("deps.txt"), "a -> b\nnot-an-edge\n").unwrap();

    let output = run_depcycle(temp_dir.path(), &["check", "deps.txt"], None);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("line 2"), "stderr: {stderr}");
}

#[rstest]
fn test_missing_explicit_config_exits_two(temp_dir: TempDir) {
    let output = run_depcycle(
        temp_dir.path(),
        &["--config", "missing.yaml", "check", "-"],
        None,
    );

    assert_eq!(output.status.code(), Some(2));
}

#[rstest]
fn test_chained_arrows_rejected(temp_dir: TempDir) {
    fs::write(temp_dir.path().join("deps.txt"), "a -> b\nb->c->d\n").unwrap();

    let output = run_depcycle(temp_dir.path(), &["check", "deps.txt"], None);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("line 2"), "stderr: {stderr}");
    assert!(stdout(&output).is_empty());
}

#[rstest]
fn test_missing_input_file_exits_two(temp_dir: TempDir) {
    let output = run_depcycle(temp_dir.path(), &["check", "absent.txt"], None);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("absent.txt"), "stderr: {stderr}");
}
