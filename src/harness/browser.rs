//! Headless browser probe
//!
//! Drives Playwright's Node API through a short driver script: launch Chromium, open the served
//! page, wait for network idle, read `innerHTML` of the probe element (or the not-found sentinel),
//! close the browser in a `finally` block. The script answers with a single JSON line on stdout.

use std::path::Path;
use std::process::Stdio;

use serde::Deserialize;
use tokio::process::Command;
use tsconform_core::ELEMENT_NOT_FOUND;

use super::error::HarnessError;
use super::process::split_lines;

const DRIVER: &str = r#"
const { chromium } = require("playwright");
const [url, elementId, sentinel] = process.argv.slice(1);
(async () => {
	const browser = await chromium.launch();
	try {
		const ctx = await browser.newContext();
		const page = await ctx.newPage();
		await page.goto(url, { waitUntil: "networkidle" });
		const content = await page.evaluate(([id, missing]) => {
			const el = document.getElementById(id);
			return el === null ? missing : el.innerHTML;
		}, [elementId, sentinel]);
		process.stdout.write(JSON.stringify({ content }) + "\n");
	} finally {
		await browser.close();
	}
})().catch((err) => {
	process.stdout.write(JSON.stringify({ error: String((err && err.stack) || err) }) + "\n");
	process.exitCode = 1;
});
"#;

#[derive(Debug, Deserialize)]
struct DriverReply {
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Reads one element's markup from a page.
#[derive(Debug, Clone)]
pub struct BrowserProbe {
    node: String,
    element_id: String,
}

impl BrowserProbe {
    pub fn new(node: impl Into<String>, element_id: impl Into<String>) -> Self {
        Self {
            node: node.into(),
            element_id: element_id.into(),
        }
    }

    /// Render `url` and return the probe element's `innerHTML`, or [`ELEMENT_NOT_FOUND`].
    ///
    /// `cwd` must be a directory whose `node_modules` provides `playwright`.
    pub async fn render(&self, url: &str, cwd: &Path) -> Result<String, HarnessError> {
        tracing::debug!(url, element = %self.element_id, "rendering page");
        let output = Command::new(&self.node)
            .arg("-e")
            .arg(DRIVER)
            .arg(url)
            .arg(&self.element_id)
            .arg(ELEMENT_NOT_FOUND)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| HarnessError::Browser(format!("cannot start {}: {}", self.node, e)))?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        match parse_reply(&stdout) {
            Ok(content) => Ok(content),
            Err(HarnessError::BrowserProtocol(reason)) if !output.status.success() => {
                let stderr = split_lines(&String::from_utf8_lossy(&output.stderr));
                Err(HarnessError::Browser(format!(
                    "{} ({}): {}",
                    reason,
                    output.status,
                    stderr.join(" | ")
                )))
            }
            Err(e) => Err(e),
        }
    }
}

/// Extract the rendered content from the driver's stdout. The reply is the last line.
fn parse_reply(stdout: &str) -> Result<String, HarnessError> {
    let lines = split_lines(stdout);
    let Some(last) = lines.last() else {
        return Err(HarnessError::BrowserProtocol("driver printed nothing".to_string()));
    };
    let reply: DriverReply =
        serde_json::from_str(last).map_err(|e| HarnessError::BrowserProtocol(format!("{}: {}", e, last)))?;
    match reply {
        DriverReply {
            error: Some(error), ..
        } => Err(HarnessError::Browser(error)),
        DriverReply {
            content: Some(content),
            ..
        } => Ok(content),
        _ => Err(HarnessError::BrowserProtocol(format!("reply has neither content nor error: {}", last))),
    }
}
