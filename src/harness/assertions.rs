//! Step assertions
//!
//! Each function checks exactly one outcome category of one fixture and returns
//! `Err(AssertionFailure)` on mismatch. Commands run with the project root as working directory so
//! `npx` and `require("playwright")` resolve against its `node_modules`.

use tokio::sync::Mutex;

use crate::config::HarnessConfig;

use super::browser::BrowserProbe;
use super::error::AssertionFailure;
use super::fixture::Fixture;
use super::process::{CommandResult, cmd_in};
use super::serve::StaticServer;

/// Held for the whole serve + render of one browser scenario; they all share one port.
static BROWSER_LOCK: Mutex<()> = Mutex::const_new(());

async fn run(config: &HarnessConfig, command: String) -> CommandResult {
    cmd_in(&command, Some(&config.root)).await
}

async fn typecheck(config: &HarnessConfig, fixture: &Fixture) -> CommandResult {
    let tsconfig = fixture.tsconfig();
    run(config, config.typecheck_command(config.relative_to_root(&tsconfig))).await
}

async fn build(config: &HarnessConfig, fixture: &Fixture) -> CommandResult {
    let webpack_config = fixture.webpack_config();
    run(config, config.build_command(config.relative_to_root(&webpack_config))).await
}

async fn execute(config: &HarnessConfig, fixture: &Fixture, entry: &str) -> CommandResult {
    let entry = fixture.path(entry);
    run(config, config.runtime_command(config.relative_to_root(&entry))).await
}

pub async fn passes_typecheck(config: &HarnessConfig, fixture: &Fixture) -> Result<(), AssertionFailure> {
    let result = typecheck(config, fixture).await;
    if result.has_errors() {
        return Err(AssertionFailure::TypecheckErrors {
            fixture: fixture.id().to_string(),
            errors: result.errors,
        });
    }
    Ok(())
}

pub async fn fails_typecheck(config: &HarnessConfig, fixture: &Fixture) -> Result<(), AssertionFailure> {
    if !typecheck(config, fixture).await.has_errors() {
        return Err(AssertionFailure::TypecheckPassed {
            fixture: fixture.id().to_string(),
        });
    }
    Ok(())
}

pub async fn passes_build(config: &HarnessConfig, fixture: &Fixture) -> Result<(), AssertionFailure> {
    let result = build(config, fixture).await;
    if result.has_errors() {
        return Err(AssertionFailure::BuildErrors {
            fixture: fixture.id().to_string(),
            errors: result.errors,
        });
    }
    Ok(())
}

pub async fn fails_build(config: &HarnessConfig, fixture: &Fixture) -> Result<(), AssertionFailure> {
    if !build(config, fixture).await.has_errors() {
        return Err(AssertionFailure::BuildPassed {
            fixture: fixture.id().to_string(),
        });
    }
    Ok(())
}

/// `node <entry>` printed exactly `expected` and nothing on stderr.
pub async fn passes_runtime(
    config: &HarnessConfig,
    fixture: &Fixture,
    entry: &str,
    expected: &[&str],
) -> Result<(), AssertionFailure> {
    let result = execute(config, fixture, entry).await;
    if result.has_errors() || result.output != expected {
        return Err(AssertionFailure::RuntimeMismatch {
            fixture: fixture.id().to_string(),
            expected: expected.iter().map(|line| line.to_string()).collect(),
            actual: result,
        });
    }
    Ok(())
}

pub async fn fails_runtime(config: &HarnessConfig, fixture: &Fixture, entry: &str) -> Result<(), AssertionFailure> {
    let result = execute(config, fixture, entry).await;
    if !result.has_errors() {
        return Err(AssertionFailure::RuntimePassed {
            fixture: fixture.id().to_string(),
            output: result.output,
        });
    }
    Ok(())
}

/// Serve the fixture's bundle, render it headless and compare `#hello` with `expected`.
///
/// The server is closed before comparing, whatever the render produced.
pub async fn passes_browser_runtime(
    config: &HarnessConfig,
    fixture: &Fixture,
    expected: &str,
) -> Result<(), AssertionFailure> {
    let _serialized = BROWSER_LOCK.lock().await;

    let server = StaticServer::bind(fixture.bundle_dir(), config.port).await?;
    let probe = BrowserProbe::new(&config.node, &config.probe_element);
    let rendered = probe.render(&server.url(), &config.root).await;
    server.close().await;

    let actual = rendered?;
    if actual != expected {
        return Err(AssertionFailure::RenderMismatch {
            fixture: fixture.id().to_string(),
            expected: expected.to_string(),
            actual,
        });
    }
    Ok(())
}
