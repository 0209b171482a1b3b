//! Tests for the `tsconform` binary that need no JavaScript toolchain

use std::process::Command;

fn tsconform() -> Command {
    Command::new(env!("CARGO_BIN_EXE_tsconform"))
}

#[test]
fn list_json_covers_both_targets() {
    let output = tsconform().args(["list", "--json"]).output().unwrap();
    assert!(output.status.success());

    let listed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let listed = listed.as_array().unwrap();
    let expected = tsconform_core::NODE_SCENARIOS.len() + tsconform_core::WEB_SCENARIOS.len();
    assert_eq!(listed.len(), expected);
    assert!(listed.iter().any(|s| s["target"] == "node" && s["fixture"] == "basic-cli"));
    assert!(listed.iter().any(|s| s["target"] == "web" && s["fixture"] == "preact-h"));
}

#[test]
fn list_text_filters_by_keyword() {
    let output = tsconform().args(["list", "--target", "web", "-k", "preact-h"]).output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("web::preact-h [Accepts: h()]"), "{stdout}");
    assert!(stdout.trim_end().ends_with("1 scenario(s)"), "{stdout}");
}

#[test]
fn run_with_unknown_keyword_collects_nothing() {
    let output = tsconform().args(["run", "-k", "no-such-fixture"]).output().unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No scenarios collected"));
}

#[test]
fn run_reports_progress_on_stderr() {
    let root = tempfile::tempdir().unwrap();
    let output = tsconform()
        .args(["run", "--target", "node", "-k", "basic-cli", "--root"])
        .arg(root.path())
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("collected 1 scenario(s)"), "{stderr}");
    assert!(stderr.contains("====== 1 skipped in "), "{stderr}");
    // per-scenario outcomes are debug-level log events
    assert!(!stderr.contains("fixture directory not found"), "{stderr}");
}

#[test]
fn reset_unknown_fixture_fails() {
    let root = tempfile::tempdir().unwrap();
    let output = tsconform()
        .args(["reset", "node", "nope", "--root"])
        .arg(root.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("fixture directory not found"));
}

#[cfg(unix)]
#[test]
fn exec_prints_command_result_json() {
    let output = tsconform().args(["exec", "echo '  [CLI] Hello World  '"]).output().unwrap();
    assert!(output.status.success());

    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result, serde_json::json!({"output": ["[CLI] Hello World"], "errors": []}));
}

#[cfg(unix)]
#[test]
fn exec_passes_the_command_line_through_unchanged() {
    let output = tsconform().args(["exec", "printf '%s|' a\\ b 'c  d'"]).output().unwrap();
    assert!(output.status.success());

    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["output"], serde_json::json!(["a b|c  d|"]));
}

#[cfg(unix)]
#[test]
fn exec_reports_failure_through_exit_code() {
    let output = tsconform().args(["exec", "exit 2"]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));

    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["output"], serde_json::json!([]));
    assert!(result["errors"][0].as_str().unwrap().starts_with("Command failed: exit 2"));
}
