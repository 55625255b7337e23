use std::process::{Command, Stdio};

use crate::common::{binary_path, make_temp_dir, run_with_input, run_without_input};

#[test]
fn main_exits_successfully_on_quit() {
    let dir = make_temp_dir("core");
    let output = run_with_input(&dir, "quit\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Goodbye!"),
        "stdout did not say goodbye: {}",
        stdout
    );
}

#[test]
fn main_runs_without_config_file() {
    let dir = make_temp_dir("core");
    let output = run_with_input(&dir, "exit\n");
    assert!(
        output.status.success(),
        "expected defaults to apply when config is missing"
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Welcome to the Todo Console App!"),
        "stdout did not show the welcome text: {}",
        stdout
    );
}

#[test]
fn main_fails_when_config_is_malformed() {
    let dir = make_temp_dir("core");
    let cfg = r#"{
      "file_logging_enabled": { "value": "False", }
    }"#;
    std::fs::write(dir.join("config.json"), cfg).unwrap();

    let output = run_without_input(&dir);
    assert!(
        !output.status.success(),
        "expected failure on malformed config"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid JSON in"),
        "stderr did not mention parse error: {}",
        stderr
    );
}

#[test]
fn main_fails_on_unknown_cli_arg() {
    let dir = make_temp_dir("core");
    let output = Command::new(binary_path())
        .current_dir(&dir)
        .arg("--nope")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .output()
        .expect("failed to run binary");

    assert!(
        !output.status.success(),
        "expected failure on unknown cli arg"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unknown argument"),
        "stderr did not mention unknown argument: {}",
        stderr
    );
}

#[test]
fn main_fails_on_missing_cli_arg_value() {
    let dir = make_temp_dir("core");
    let output = Command::new(binary_path())
        .current_dir(&dir)
        .arg("--config")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .output()
        .expect("failed to run binary");

    assert!(
        !output.status.success(),
        "expected failure on missing cli arg value"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Missing value for --config"),
        "stderr did not mention missing value: {}",
        stderr
    );
}

#[test]
fn eof_ends_session_with_farewell() {
    let dir = make_temp_dir("core");
    let output = run_with_input(&dir, "");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Goodbye!"),
        "stdout did not say goodbye on end of input: {}",
        stdout
    );
}

#[test]
fn welcome_banner_prints_once() {
    let dir = make_temp_dir("core");
    let output = run_with_input(&dir, "help\nlist\nquit\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.matches("Welcome to the Todo Console App!").count(),
        1,
        "welcome text should print exactly once: {}",
        stdout
    );
}
