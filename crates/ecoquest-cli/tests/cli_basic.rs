//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs. They
//! only exercise read paths so the user's config file is never touched.

use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "ecoquest-cli", "--"])
        .args(args)
        .env("ECOQUEST_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_home_screen() {
    let (stdout, _, code) = run_cli(&["home"]);
    assert_eq!(code, 0, "home failed");
    assert!(stdout.contains("EcoQuest"));
    assert!(stdout.contains("Total Impact Points: 0"));
    assert!(stdout.contains("Daily Eco Tasks"));
}

#[test]
fn test_home_screen_json() {
    let (stdout, _, code) = run_cli(&["home", "--json"]);
    assert_eq!(code, 0, "home --json failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["points"], 0);
    assert_eq!(parsed["tasks"].as_array().unwrap().len(), 8);
}

#[test]
fn test_community_screen_scopes() {
    for scope in ["friends", "school", "city"] {
        let (stdout, _, code) = run_cli(&["community", "--scope", scope]);
        assert_eq!(code, 0, "community --scope {scope} failed");
        assert!(stdout.contains("Leaderboard"));
        assert!(stdout.contains("Sarah J."));
    }
}

#[test]
fn test_community_rejects_unknown_scope() {
    let (_, stderr, code) = run_cli(&["community", "--scope", "galaxy"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown leaderboard scope"));
}

#[test]
fn test_profile_screen() {
    let (stdout, _, code) = run_cli(&["profile"]);
    assert_eq!(code, 0, "profile failed");
    assert!(stdout.contains("Badges"));
    assert!(stdout.contains("Water Saver"));
}

#[test]
fn test_task_list() {
    let (stdout, _, code) = run_cli(&["task", "list"]);
    assert_eq!(code, 0, "task list failed");
    assert!(stdout.contains("Recycle 3+ items"));
}

#[test]
fn test_task_complete_accumulates_points() {
    let (stdout, _, code) = run_cli(&["task", "complete", "1", "5", "--json"]);
    assert_eq!(code, 0, "task complete failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["points"], 30);
}

#[test]
fn test_task_complete_is_idempotent_per_invocation() {
    let (stdout, _, code) = run_cli(&["task", "complete", "1", "1", "1", "--json"]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["points"], 10);
}

#[test]
fn test_badge_list() {
    let (stdout, _, code) = run_cli(&["badge", "list"]);
    assert_eq!(code, 0, "badge list failed");
    assert!(stdout.contains("Zero-Waste Hero"));
    assert!(stdout.contains("locked"));
}

#[test]
fn test_user_show() {
    let (stdout, _, code) = run_cli(&["user", "show"]);
    assert_eq!(code, 0, "user show failed");
    assert!(stdout.contains("Points: 0"));
}

#[test]
fn test_completions_generate() {
    let (stdout, _, code) = run_cli(&["completions", "bash"]);
    assert_eq!(code, 0, "completions failed");
    assert!(stdout.contains("ecoquest-cli"));
}
