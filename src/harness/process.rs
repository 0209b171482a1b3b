//! Process runner
//!
//! Runs one shell command to completion and folds everything that can go wrong into the error
//! lines of a [`CommandResult`]. Callers never see an `Err`; they assert on whether error lines
//! are present.

use std::path::Path;
use std::process::Stdio;

use serde::Serialize;
use tokio::process::Command;

/// Normalized standard streams of a finished command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommandResult {
    /// Trimmed, non-empty stdout lines in order
    pub output: Vec<String>,
    /// Trimmed, non-empty stderr lines in order, plus one line for a spawn failure or bad exit
    pub errors: Vec<String>,
}

impl CommandResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Split a stream into trimmed, non-empty lines.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Run `command` through the platform shell in the current directory.
pub async fn cmd(command: &str) -> CommandResult {
    cmd_in(command, None).await
}

/// Run `command` through the platform shell, optionally in `cwd`.
pub async fn cmd_in(command: &str, cwd: Option<&Path>) -> CommandResult {
    let mut child = shell(command);
    child.stdin(Stdio::null()).kill_on_drop(true);
    if let Some(dir) = cwd {
        child.current_dir(dir);
    }

    tracing::debug!(command, cwd = ?cwd, "running command");

    match child.output().await {
        Ok(output) => {
            let mut result = CommandResult {
                output: split_lines(&String::from_utf8_lossy(&output.stdout)),
                errors: split_lines(&String::from_utf8_lossy(&output.stderr)),
            };
            if !output.status.success() {
                result.errors.push(format!("Command failed: {} ({})", command, output.status));
            }
            tracing::debug!(
                command,
                output_lines = result.output.len(),
                error_lines = result.errors.len(),
                "command finished"
            );
            result
        }
        Err(e) => {
            tracing::debug!(command, error = %e, "command did not start");
            CommandResult {
                output: Vec::new(),
                errors: vec![format!("Command failed to start: {}: {}", command, e)],
            }
        }
    }
}

#[cfg(windows)]
fn shell(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(command);
    cmd
}

#[cfg(not(windows))]
fn shell(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);
    cmd
}
