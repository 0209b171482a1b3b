//! Harness configuration
//!
//! Defaults match the layout of this repository: fixtures under `fixtures/<target>/<id>`, tools
//! resolved through `npx`, bundles served on port 3000. Environment variables and CLI flags
//! override individual fields.

use std::env;
use std::path::{Path, PathBuf};

use tsconform_core::{PROBE_ELEMENT_ID, Target};

/// Port the browser fixtures are served on. Several asset expectations embed it literally.
pub const DEFAULT_PORT: u16 = 3000;

pub const ENV_ROOT: &str = "TSCONFORM_ROOT";
pub const ENV_PORT: &str = "TSCONFORM_PORT";
pub const ENV_NPX: &str = "TSCONFORM_NPX";
pub const ENV_NODE: &str = "TSCONFORM_NODE";

/// Harness configuration
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Directory commands run in; holds `package.json` and `node_modules`
    pub root: PathBuf,
    /// Fixtures directory, relative to `root` unless absolute
    pub fixtures_dir: PathBuf,
    /// Launcher for `tsc` and `webpack`
    pub npx: String,
    /// JavaScript engine for Node fixtures and the browser driver
    pub node: String,
    /// Static server port for browser fixtures
    pub port: u16,
    /// DOM id read by the browser probe
    pub probe_element: String,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            fixtures_dir: PathBuf::from("fixtures"),
            npx: "npx".to_string(),
            node: "node".to_string(),
            port: DEFAULT_PORT,
            probe_element: PROBE_ELEMENT_ID.to_string(),
        }
    }
}

impl HarnessConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `TSCONFORM_*` environment variables.
    ///
    /// An unparsable `TSCONFORM_PORT` is ignored with a warning.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(root) = env::var(ENV_ROOT) {
            config.root = PathBuf::from(root);
        }
        if let Ok(port) = env::var(ENV_PORT) {
            match port.parse() {
                Ok(port) => config.port = port,
                Err(e) => tracing::warn!("ignoring {}={:?}: {}", ENV_PORT, port, e),
            }
        }
        if let Ok(npx) = env::var(ENV_NPX) {
            config.npx = npx;
        }
        if let Ok(node) = env::var(ENV_NODE) {
            config.node = node;
        }
        config
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    pub fn with_fixtures_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.fixtures_dir = dir.into();
        self
    }

    pub fn with_npx(mut self, npx: impl Into<String>) -> Self {
        self.npx = npx.into();
        self
    }

    pub fn with_node(mut self, node: impl Into<String>) -> Self {
        self.node = node.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Absolute-or-root-relative directory holding `<target>/<id>` fixtures.
    pub fn fixtures_root(&self) -> PathBuf {
        self.root.join(&self.fixtures_dir)
    }

    pub fn target_dir(&self, target: Target) -> PathBuf {
        self.fixtures_root().join(target.as_str())
    }

    /// Path as handed to tools, which run with `root` as working directory.
    pub fn relative_to_root<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }

    /// `npx tsc --build <tsconfig>`
    pub fn typecheck_command(&self, tsconfig: &Path) -> String {
        format!("{} tsc --build {}", self.npx, quote(tsconfig))
    }

    /// `npx webpack --config <webpack.config.js>`
    pub fn build_command(&self, webpack_config: &Path) -> String {
        format!("{} webpack --config {}", self.npx, quote(webpack_config))
    }

    /// `node <entry>`
    pub fn runtime_command(&self, entry: &Path) -> String {
        format!("{} {}", self.node, quote(entry))
    }
}

/// Double-quote a path for the platform shell.
pub fn quote(path: &Path) -> String {
    format!("\"{}\"", path.display())
}
