//! Integration tests: run the disperse binary end to end.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

const ADDR_A: &str = "0x2CB99F193549681e06C6770dDD5543812B4FaFE8";
const ADDR_B: &str = "0x8B3392483BA26D65E331dB86D4F430E9B3814E5e";

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Config file that keeps test logs out of the user's state directory.
fn test_config(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("disperse_cli_{name}"));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    let config = dir.join("config.toml");
    let log = dir.join("disperse.log");
    std::fs::write(
        &config,
        format!("log_file_path = {:?}\n", log.to_string_lossy()),
    )
    .expect("write config");
    config
}

fn disperse(name: &str, args: &[&str]) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_disperse"));
    cmd.arg("--config").arg(test_config(name)).args(args);
    cmd.env_remove("DISPERSE_FORMAT");
    cmd
}

fn run_with_stdin(mut cmd: Command, input: &str) -> Output {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute binary");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait for binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn binary_prints_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_disperse"))
        .arg("--version")
        .output()
        .expect("Failed to execute binary");

    assert!(
        stdout(&output).contains("0.1.0"),
        "Expected output to contain version '0.1.0', but got: {}",
        stdout(&output)
    );
}

#[test]
fn example_flag_prints_example_list() {
    let output = Command::new(env!("CARGO_BIN_EXE_disperse"))
        .arg("--example")
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    assert_eq!(stdout(&output).lines().count(), 3);
}

#[test]
fn valid_file_exits_zero_with_no_output() {
    let output = disperse("valid_file", &[])
        .arg(fixture("valid_list.txt"))
        .output()
        .expect("Failed to execute binary");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "");
}

#[test]
fn invalid_file_exits_one_and_lists_findings() {
    let output = disperse("invalid_file", &[])
        .arg(fixture("mixed_errors.txt"))
        .output()
        .expect("Failed to execute binary");

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("Line 2: invalid Ethereum address."));
    assert!(out.contains("Line 3: wrong amount."));
    assert!(out.contains(&format!("{ADDR_A} duplicate in line: 1, 7.")));
}

#[test]
fn missing_file_exits_two() {
    let output = disperse("missing_file", &["/nonexistent/recipients.txt"])
        .output()
        .expect("Failed to execute binary");

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("File not found"));
}

#[test]
fn stdin_input_is_validated() {
    let input = format!("{ADDR_A}=1\n{ADDR_A}=2\n");
    let output = run_with_stdin(disperse("stdin_validate", &[]), &input);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output).trim_end(),
        format!("{ADDR_A} duplicate in line: 1, 2.")
    );
}

#[test]
fn json_format_reports_structured_findings() {
    let output = run_with_stdin(disperse("json", &["--format", "json"]), "junk\n");

    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(json["valid"], false);
    assert_eq!(json["diagnostics"][0]["kind"], "format");
}

#[test]
fn resolve_keep_first_prints_rewritten_list() {
    let input = format!("{ADDR_A}=1\n{ADDR_B} 2\n{ADDR_A}=3\n");
    let output = run_with_stdin(disperse("keep_first", &["--resolve", "keep-first"]), &input);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), format!("{ADDR_A}=1\n{ADDR_B} 2\n"));
}

#[test]
fn resolve_merge_prints_summed_list() {
    let input = format!("{ADDR_A}=1\n{ADDR_B} 2\n{ADDR_A}=3\n");
    let output = run_with_stdin(disperse("merge", &["-r", "merge"]), &input);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), format!("{ADDR_A}=4\n{ADDR_B}=2\n"));
}

#[test]
fn resolve_reports_remaining_findings_on_stderr() {
    let input = format!("{ADDR_A}=x\n{ADDR_A}=3\n");
    let output = run_with_stdin(disperse("resolve_leftover", &["-r", "keep-first"]), &input);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), format!("{ADDR_A}=x\n"));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Line 1: wrong amount."));
}

#[test]
fn resolve_reports_remaining_findings_in_configured_format() {
    let input = format!("{ADDR_A}=x\n{ADDR_A}=3\n");
    let output = run_with_stdin(
        disperse("resolve_leftover_json", &["-r", "keep-first", "--format", "json"]),
        &input,
    );

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), format!("{ADDR_A}=x\n"));
    let json: serde_json::Value = serde_json::from_slice(&output.stderr).expect("valid JSON");
    assert_eq!(json["valid"], false);
    assert_eq!(json["diagnostics"][0]["kind"], "amount");
    assert_eq!(json["diagnostics"][0]["message"], "Line 1: wrong amount.");
}
