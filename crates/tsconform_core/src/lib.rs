//! Scenario vocabulary and the declarative catalog for the tsconform conformance suite.
//!
//! Every scenario pairs a fixture directory with an ordered list of steps. Each step asserts exactly
//! one outcome category (typecheck, build, runtime) against a literal expectation.
//!
//! ## Notes
//!
//! - This is a data-only crate: **no IO**, no global state. The `tsconform` crate owns process
//!   spawning, fixture resets, the static server and the browser driver.
//! - The tables live in `const` items so the catalog can be inspected (and guarded by tests) without
//!   touching the filesystem.

pub mod catalog;

pub use catalog::{NODE_SCENARIOS, WEB_SCENARIOS};

/// Sentinel returned by the browser probe when the `#hello` element is absent.
pub const ELEMENT_NOT_FOUND: &str = "Error: #hello not found";

/// DOM id the browser probe reads `innerHTML` from.
pub const PROBE_ELEMENT_ID: &str = "hello";

/// Runtime environment a fixture targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// Compiled with `tsc`, executed with `node`.
    Node,
    /// Bundled with webpack, rendered in a headless browser.
    Web,
}

impl Target {
    pub const ALL: [Target; 2] = [Target::Node, Target::Web];

    /// Directory name under the fixtures root.
    pub const fn as_str(self) -> &'static str {
        match self {
            Target::Node => "node",
            Target::Web => "web",
        }
    }

    pub fn from_str(name: &str) -> Option<Target> {
        Target::ALL.into_iter().find(|t| t.as_str() == name)
    }

    /// Output directories emptied before each scenario.
    pub const fn output_dirs(self) -> &'static [&'static str] {
        match self {
            Target::Node => &["out"],
            Target::Web => &["out", "dist"],
        }
    }

    /// Every scenario declared for this target, in suite order.
    pub const fn scenarios(self) -> &'static [Scenario] {
        match self {
            Target::Node => NODE_SCENARIOS,
            Target::Web => WEB_SCENARIOS,
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a step is expected to succeed or to report errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expect {
    Pass,
    Fail,
}

/// One assertion (or preparation) step of a scenario.
///
/// Paths are relative to the fixture directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// `tsc --build <fixture>/tsconfig.json`
    Typecheck(Expect),
    /// `webpack --config <fixture>/webpack.config.js`
    Build(Expect),
    /// Copy a side-car file the compiler does not emit (JSON data, hand-written CommonJS).
    Copy { from: &'static str, to: &'static str },
    /// `node <entry>` must print exactly `expected` and nothing on stderr.
    NodeRuntime {
        entry: &'static str,
        expected: &'static [&'static str],
    },
    /// `node <entry>` must report at least one error line.
    NodeRuntimeFails { entry: &'static str },
    /// The served bundle must render `expected` inside `#hello`.
    BrowserRuntime { expected: &'static str },
}

impl Step {
    /// Short label used in progress output and logs.
    pub const fn label(&self) -> &'static str {
        match self {
            Step::Typecheck(_) => "typecheck",
            Step::Build(_) => "build",
            Step::Copy { .. } => "copy",
            Step::NodeRuntime { .. } | Step::NodeRuntimeFails { .. } => "node-runtime",
            Step::BrowserRuntime { .. } => "browser-runtime",
        }
    }

    /// Whether this step may appear in a scenario for `target`.
    pub const fn allowed_for(&self, target: Target) -> bool {
        match (self, target) {
            (Step::Build(_) | Step::BrowserRuntime { .. }, Target::Node) => false,
            (Step::NodeRuntime { .. } | Step::NodeRuntimeFails { .. }, Target::Web) => false,
            _ => true,
        }
    }
}

/// A declared conformance scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scenario {
    pub target: Target,
    /// Suite heading, e.g. `"Node: JSON"`.
    pub group: &'static str,
    pub title: &'static str,
    /// Fixture directory name under `<fixtures>/<target>/`.
    pub fixture: &'static str,
    pub steps: &'static [Step],
}

impl Scenario {
    /// `target::fixture` followed by the title, used for filtering and reporting.
    pub fn display_name(&self) -> String {
        format!("{}::{} [{}]", self.target, self.fixture, self.title)
    }

    /// Keyword match against fixture id, group and title (case-sensitive substring).
    pub fn matches(&self, keyword: &str) -> bool {
        self.fixture.contains(keyword) || self.group.contains(keyword) || self.title.contains(keyword)
    }

    /// Whether any step exercises a runtime.
    pub fn has_runtime_step(&self) -> bool {
        self.steps.iter().any(|s| {
            matches!(
                s,
                Step::NodeRuntime { .. } | Step::NodeRuntimeFails { .. } | Step::BrowserRuntime { .. }
            )
        })
    }
}

/// Look up the scenarios declared for a fixture id.
pub fn scenarios_for(target: Target, fixture: &str) -> impl Iterator<Item = &'static Scenario> + '_ {
    target.scenarios().iter().filter(move |s| s.fixture == fixture)
}
