//! Scenario runner
//!
//! Runs one scenario: reset the fixture's output directories, then every step in declaration
//! order, stopping at the first failing step.

use std::time::{Duration, Instant};

use tsconform_core::{Expect, Scenario, Step};

use crate::config::HarnessConfig;

use super::assertions;
use super::error::{AssertionFailure, HarnessError};
use super::fixture::Fixture;

/// Result of running one scenario.
#[derive(Debug)]
pub enum ScenarioOutcome {
    Passed(Duration),
    Failed(Duration, AssertionFailure),
    Skipped(String),
}

impl ScenarioOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, ScenarioOutcome::Failed(..))
    }
}

pub struct ScenarioRunner {
    config: HarnessConfig,
}

impl ScenarioRunner {
    pub fn new(config: HarnessConfig) -> Self {
        Self { config }
    }

    pub fn fixture(&self, scenario: &Scenario) -> Fixture {
        Fixture::new(&self.config.fixtures_root(), scenario.target, scenario.fixture)
    }

    /// Run `scenario`. A fixture that is not checked out is skipped rather than failed.
    pub async fn run(&self, scenario: &Scenario) -> ScenarioOutcome {
        let fixture = self.fixture(scenario);
        if !fixture.exists() {
            let reason = HarnessError::FixtureMissing(fixture.dir().to_path_buf()).to_string();
            tracing::debug!(scenario = %scenario.display_name(), "skipped: {}", reason);
            return ScenarioOutcome::Skipped(reason);
        }

        let start = Instant::now();
        let result = self.run_steps(scenario, &fixture).await;
        let elapsed = start.elapsed();

        match result {
            Ok(()) => {
                tracing::debug!(scenario = %scenario.display_name(), ?elapsed, "passed");
                ScenarioOutcome::Passed(elapsed)
            }
            Err(failure) => {
                tracing::debug!(scenario = %scenario.display_name(), ?elapsed, "failed: {}", failure);
                ScenarioOutcome::Failed(elapsed, failure)
            }
        }
    }

    async fn run_steps(&self, scenario: &Scenario, fixture: &Fixture) -> Result<(), AssertionFailure> {
        fixture.reset().await?;
        for step in scenario.steps {
            tracing::debug!(fixture = %fixture.id(), step = step.label(), "step");
            self.run_step(fixture, step).await?;
        }
        Ok(())
    }

    pub async fn run_step(&self, fixture: &Fixture, step: &Step) -> Result<(), AssertionFailure> {
        let config = &self.config;
        match *step {
            Step::Typecheck(Expect::Pass) => assertions::passes_typecheck(config, fixture).await,
            Step::Typecheck(Expect::Fail) => assertions::fails_typecheck(config, fixture).await,
            Step::Build(Expect::Pass) => assertions::passes_build(config, fixture).await,
            Step::Build(Expect::Fail) => assertions::fails_build(config, fixture).await,
            Step::Copy { from, to } => Ok(fixture.copy(from, to).await?),
            Step::NodeRuntime { entry, expected } => assertions::passes_runtime(config, fixture, entry, expected).await,
            Step::NodeRuntimeFails { entry } => assertions::fails_runtime(config, fixture, entry).await,
            Step::BrowserRuntime { expected } => assertions::passes_browser_runtime(config, fixture, expected).await,
        }
    }
}

#[cfg(all(test, unix))]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::path::Path;
    use tsconform_core::Target;

    const JSON_STEPS: &[Step] = &[
        Step::Typecheck(Expect::Pass),
        Step::NodeRuntimeFails { entry: "out/main.js" },
        Step::Copy {
            from: "src/data.json",
            to: "out/data.json",
        },
        Step::NodeRuntime {
            entry: "out/main.js",
            expected: &["[\"hello\",\"world\"]"],
        },
    ];

    fn scenario(fixture: &'static str, steps: &'static [Step]) -> Scenario {
        Scenario {
            target: Target::Node,
            group: "Node: Test",
            title: "test",
            fixture,
            steps,
        }
    }

    fn write(root: &Path, relative: &str, contents: &str) {
        let path = root.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, contents).unwrap();
    }

    #[tokio::test]
    async fn test_missing_fixture_is_skipped() {
        let root = tempfile::tempdir().unwrap();
        let runner = ScenarioRunner::new(HarnessConfig::new().with_root(root.path()));

        let outcome = runner.run(&scenario("absent", &[Step::Typecheck(Expect::Pass)])).await;
        match outcome {
            ScenarioOutcome::Skipped(reason) => assert!(reason.starts_with("fixture directory not found")),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_reset_then_copy_then_run() {
        let root = tempfile::tempdir().unwrap();
        write(root.path(), "fixtures/node/json/src/data.json", "[\"hello\",\"world\"]\n");
        write(root.path(), "fixtures/node/json/out/data.json", "stale");

        // `cat` stands in for node: it fails until data.json has been copied into out/
        let config = HarnessConfig::new()
            .with_root(root.path())
            .with_npx("true")
            .with_node("cat fixtures/node/json/out/data.json; :");
        let runner = ScenarioRunner::new(config.clone());

        // the stale copy is removed by the reset, so the first runtime step fails as declared
        let outcome = runner.run(&scenario("json", JSON_STEPS)).await;
        assert!(matches!(outcome, ScenarioOutcome::Passed(_)), "{outcome:?}");

        let copied = std::fs::read_to_string(root.path().join("fixtures/node/json/out/data.json")).unwrap();
        assert_eq!(copied, "[\"hello\",\"world\"]\n");
    }

    #[tokio::test]
    async fn test_stops_at_first_failing_step() {
        let root = tempfile::tempdir().unwrap();
        write(root.path(), "fixtures/node/app/src/main.ts", "");
        let config = HarnessConfig::new()
            .with_root(root.path())
            .with_npx("true")
            .with_node("touch ran.txt; :");
        let runner = ScenarioRunner::new(config);

        const STEPS: &[Step] = &[
            Step::Typecheck(Expect::Fail),
            Step::NodeRuntime {
                entry: "out/main.js",
                expected: &[],
            },
        ];
        let outcome = runner.run(&scenario("app", STEPS)).await;
        match outcome {
            ScenarioOutcome::Failed(_, AssertionFailure::TypecheckPassed { fixture }) => assert_eq!(fixture, "app"),
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert!(!root.path().join("ran.txt").exists());
    }

    #[tokio::test]
    async fn test_copy_failure_is_infrastructure() {
        let root = tempfile::tempdir().unwrap();
        write(root.path(), "fixtures/node/app/src/main.ts", "");
        let runner = ScenarioRunner::new(HarnessConfig::new().with_root(root.path()).with_npx("true"));

        const STEPS: &[Step] = &[Step::Copy {
            from: "src/data.json",
            to: "out/data.json",
        }];
        let outcome = runner.run(&scenario("app", STEPS)).await;
        assert!(outcome.is_failure());
        match outcome {
            ScenarioOutcome::Failed(_, failure) => assert!(failure.is_infrastructure()),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }
}
