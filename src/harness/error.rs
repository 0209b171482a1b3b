//! Harness error types
//!
//! Two families:
//! - [`HarnessError`]: infrastructure went wrong (fixture IO, server bind, browser driver).
//! - [`AssertionFailure`]: an observed outcome did not match the declared expectation. Carries
//!   miette diagnostic codes so the console reporter can render it.
//!
//! Tool-reported errors are not errors here at all: they arrive as error lines on a
//! [`CommandResult`](super::process::CommandResult).

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use super::process::CommandResult;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("failed to {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("fixture directory not found: {}", .0.display())]
    FixtureMissing(PathBuf),

    #[error("cannot serve bundle on port {port}: {source}")]
    Bind {
        port: u16,
        #[source]
        source: std::io::Error,
    },

    #[error("browser driver failed: {0}")]
    Browser(String),

    #[error("unreadable browser driver reply: {0}")]
    BrowserProtocol(String),
}

impl HarnessError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| HarnessError::Io { action, path, source }
    }
}

/// A scenario step whose outcome did not match its expectation.
#[derive(Debug, Error, Diagnostic)]
pub enum AssertionFailure {
    #[error("No typecheck error expected for `{fixture}`, got:\n{}", .errors.join("\n"))]
    #[diagnostic(code(tsconform::typecheck), help("run `npx tsc --build` on the fixture's tsconfig.json"))]
    TypecheckErrors { fixture: String, errors: Vec<String> },

    #[error("Expected a typecheck error for `{fixture}`")]
    #[diagnostic(code(tsconform::typecheck))]
    TypecheckPassed { fixture: String },

    #[error("No build error expected for `{fixture}`, got:\n{}", .errors.join("\n"))]
    #[diagnostic(code(tsconform::build), help("run `npx webpack --config` on the fixture's webpack.config.js"))]
    BuildErrors { fixture: String, errors: Vec<String> },

    #[error("Expected a build error for `{fixture}`")]
    #[diagnostic(code(tsconform::build))]
    BuildPassed { fixture: String },

    #[error(
        "No runtime error expected for `{fixture}`\n  expected output: {:?}\n  actual output:   {:?}\n  errors:          {:?}",
        .expected, .actual.output, .actual.errors
    )]
    #[diagnostic(code(tsconform::runtime))]
    RuntimeMismatch {
        fixture: String,
        expected: Vec<String>,
        actual: CommandResult,
    },

    #[error("Expected a runtime error for `{fixture}`, got output {:?}", .output)]
    #[diagnostic(code(tsconform::runtime))]
    RuntimePassed { fixture: String, output: Vec<String> },

    #[error("Rendered `#hello` of `{fixture}` differs\n  expected: {expected:?}\n  actual:   {actual:?}")]
    #[diagnostic(code(tsconform::render), help("the page is read after network idle; check dist/index.html"))]
    RenderMismatch {
        fixture: String,
        expected: String,
        actual: String,
    },

    #[error(transparent)]
    #[diagnostic(code(tsconform::harness))]
    Harness(#[from] HarnessError),
}

impl AssertionFailure {
    /// Whether the failure came from the harness itself rather than a mismatch.
    pub fn is_infrastructure(&self) -> bool {
        matches!(self, AssertionFailure::Harness(_))
    }
}
