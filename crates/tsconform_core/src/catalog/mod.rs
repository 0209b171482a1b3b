//! Scenario tables for both targets.
//!
//! Each table mirrors one conformance suite. Order matters only for reporting; scenarios do not
//! share state apart from their fixture's output directories, which are reset before every run.

mod node;
mod web;

pub use node::NODE_SCENARIOS;
pub use web::WEB_SCENARIOS;

use crate::{Expect, Scenario, Step, Target};

pub(crate) const TYPECHECK_PASSES: Step = Step::Typecheck(Expect::Pass);
pub(crate) const TYPECHECK_FAILS: Step = Step::Typecheck(Expect::Fail);
pub(crate) const BUILD_PASSES: Step = Step::Build(Expect::Pass);
pub(crate) const BUILD_FAILS: Step = Step::Build(Expect::Fail);

/// Default compiled entry point for Node fixtures.
pub(crate) const MAIN_JS: &str = "out/main.js";

/// Entry point when `rootDir` covers the whole fixture (node_modules includes).
pub(crate) const SRC_MAIN_JS: &str = "out/src/main.js";

pub(crate) const fn node(
    group: &'static str,
    title: &'static str,
    fixture: &'static str,
    steps: &'static [Step],
) -> Scenario {
    Scenario {
        target: Target::Node,
        group,
        title,
        fixture,
        steps,
    }
}

pub(crate) const fn web(
    group: &'static str,
    title: &'static str,
    fixture: &'static str,
    steps: &'static [Step],
) -> Scenario {
    Scenario {
        target: Target::Web,
        group,
        title,
        fixture,
        steps,
    }
}

pub(crate) const fn copy(from: &'static str, to: &'static str) -> Step {
    Step::Copy { from, to }
}

pub(crate) const fn runs(entry: &'static str, expected: &'static [&'static str]) -> Step {
    Step::NodeRuntime { entry, expected }
}

pub(crate) const fn crashes(entry: &'static str) -> Step {
    Step::NodeRuntimeFails { entry }
}

pub(crate) const fn renders(expected: &'static str) -> Step {
    Step::BrowserRuntime { expected }
}
