//! Basic CLI E2E tests.
//!
//! Each test runs the binary against its own temp data directory so runs
//! never share state with each other or with a real install.

use std::path::Path;
use std::process::Command;

/// Run a CLI command against the given data dir and return output.
fn run_cli(data_dir: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_reviso-cli"))
        .env("REVISO_DATA_DIR", data_dir)
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn add_topic(data_dir: &Path, lesson: &str, name: &str) -> String {
    let (stdout, stderr, code) = run_cli(data_dir, &["topic", "add", lesson, name]);
    assert_eq!(code, 0, "topic add failed: {stderr}");
    let line = stdout.lines().next().unwrap();
    line.trim_start_matches("Topic created: ").to_string()
}

#[test]
fn add_then_list_shows_seven_pending_checkpoints() {
    let dir = tempfile::tempdir().unwrap();
    add_topic(dir.path(), "Math", "Exponential function");

    let (stdout, _, code) = run_cli(dir.path(), &["topic", "list"]);
    assert_eq!(code, 0);
    let views: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let topics = views.as_array().unwrap();
    assert_eq!(topics.len(), 1);
    assert_eq!(topics[0]["lesson"], "Math");
    assert_eq!(topics[0]["mastery"], 0);
    let checkpoints = topics[0]["checkpoints"].as_array().unwrap();
    assert_eq!(checkpoints.len(), 7);
}

#[test]
fn toggle_marks_done_and_updates_mastery() {
    let dir = tempfile::tempdir().unwrap();
    let id = add_topic(dir.path(), "Math", "Limits");

    let (stdout, stderr, code) = run_cli(dir.path(), &["review", "toggle", &id, "1"]);
    assert_eq!(code, 0, "toggle failed: {stderr}");
    let view: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(view["mastery"], 14);
    assert_eq!(view["checkpoints"][0]["effective_status"], "done");
}

#[test]
fn toggle_unknown_offset_fails_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let id = add_topic(dir.path(), "Math", "Limits");

    let (_, stderr, code) = run_cli(dir.path(), &["review", "toggle", &id, "4"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("error:"), "expected error output, got: {stderr}");
}

#[test]
fn remove_then_get_fails() {
    let dir = tempfile::tempdir().unwrap();
    let id = add_topic(dir.path(), "History", "Reformation");

    let (_, _, code) = run_cli(dir.path(), &["topic", "remove", &id]);
    assert_eq!(code, 0);

    let (_, stderr, code) = run_cli(dir.path(), &["topic", "get", &id]);
    assert_ne!(code, 0);
    assert!(stderr.contains("no topic"), "got: {stderr}");
}

#[test]
fn add_rejects_empty_lesson() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["topic", "add", "", "Limits"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("must not be empty"), "got: {stderr}");
}

#[test]
fn agenda_is_empty_json_array_on_a_fresh_day() {
    let dir = tempfile::tempdir().unwrap();
    // First review is due tomorrow, so a just-added topic has no agenda rows.
    add_topic(dir.path(), "Math", "Limits");

    let (stdout, _, code) = run_cli(dir.path(), &["review", "agenda"]);
    assert_eq!(code, 0);
    let entries: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(entries.as_array().unwrap().len(), 0);
}

#[test]
fn state_persists_across_invocations() {
    let dir = tempfile::tempdir().unwrap();
    let id = add_topic(dir.path(), "Math", "Limits");
    run_cli(dir.path(), &["review", "toggle", &id, "3"]);

    let (stdout, _, code) = run_cli(dir.path(), &["topic", "get", &id]);
    assert_eq!(code, 0);
    let view: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(view["checkpoints"][1]["effective_status"], "done");
    assert_eq!(view["mastery"], 14);
}

#[test]
fn config_path_points_into_data_dir() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["config", "path"]);
    assert_eq!(code, 0);
    assert!(stdout.trim().ends_with("config.toml"));
    assert!(stdout.contains(dir.path().to_str().unwrap()));
}
