use std::io::Write;
use std::process::{Command, Stdio};

use crate::common::{
    binary_path, make_temp_dir, read_log_contents, run_with_input, run_without_input, write_config,
};

#[test]
fn file_logging_is_on_by_default() {
    let dir = make_temp_dir("config");
    let output = run_with_input(&dir, "add \"Tracked\"\nquit\n");
    assert!(output.status.success(), "session should complete");

    assert!(
        dir.join("logs").exists(),
        "logs directory should be created when file logging defaults on"
    );
    let log_text = read_log_contents(&dir).expect("a session log file should exist");
    assert!(
        log_text.contains("Task added successfully! ID: 1, Title: Tracked"),
        "log file should capture the session:\n{log_text}"
    );
}

#[test]
fn file_logging_off_keeps_disk_clean() {
    let dir = make_temp_dir("config");
    write_config(&dir, "False");
    let output = run_with_input(&dir, "add \"Quiet\"\nlist\nquit\n");
    assert!(output.status.success(), "session should complete");

    assert!(
        !dir.join("logs").exists(),
        "no log directory should appear when file logging is off"
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Task added successfully! ID: 1, Title: Quiet"),
        "console output should be unaffected by the logging setting:\n{stdout}"
    );
}

#[test]
fn config_rejects_unknown_boolean_value() {
    let dir = make_temp_dir("config");
    write_config(&dir, "maybe");
    let output = run_without_input(&dir);
    assert!(
        !output.status.success(),
        "expected failure on a bad boolean value"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid string value for boolean"),
        "stderr did not explain the bad value: {}",
        stderr
    );
}

#[test]
fn logs_flag_redirects_the_log_directory() {
    let dir = make_temp_dir("config");
    let mut child = Command::new(binary_path())
        .current_dir(&dir)
        .args(["--logs", "other-logs"])
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to spawn binary");
    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(b"add \"Routed\"\nquit\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success(), "session should complete");

    assert!(
        dir.join("other-logs").exists(),
        "log output should land in the redirected directory"
    );
    assert!(
        !dir.join("logs").exists(),
        "the default log directory should stay untouched"
    );
}

#[test]
fn config_flag_selects_an_alternate_file() {
    let dir = make_temp_dir("config");
    write_config(&dir, "True");
    let alt = r#"{
      "file_logging_enabled": { "value": "False", "description": "file logging" }
    }"#;
    std::fs::write(dir.join("alt.json"), alt).unwrap();

    let mut child = Command::new(binary_path())
        .current_dir(&dir)
        .args(["--config", "alt.json"])
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to spawn binary");
    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(b"add \"Alt\"\nquit\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success(), "session should complete");

    assert!(
        !dir.join("logs").exists(),
        "the alternate config should turn file logging off"
    );
}
