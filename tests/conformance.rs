//! End-to-end conformance runs against the fixtures in this repository
//!
//! These need `npm install` at the repository root (typescript, webpack, ts-loader, preact,
//! playwright with Chromium). Run with: `cargo test --test conformance -- --ignored`

use std::path::Path;

use tsconform::config::HarnessConfig;
use tsconform::harness::{Fixture, ScenarioOutcome, ScenarioRunner, assertions};
use tsconform_core::{Scenario, Target};

fn config() -> HarnessConfig {
    HarnessConfig::from_env().with_root(env!("CARGO_MANIFEST_DIR"))
}

fn fixture(config: &HarnessConfig, target: Target, id: &str) -> Fixture {
    let fixture = Fixture::new(&config.fixtures_root(), target, id);
    assert!(fixture.exists(), "missing fixture {}", fixture.dir().display());
    fixture
}

/// Scenarios per suite whose fixture is checked in; everything else reports as skipped.
const NODE_RUNNABLE: usize = 16;
const WEB_RUNNABLE: usize = 21;

async fn run_suite(target: Target, runnable: usize) {
    let config = config();
    let runner = ScenarioRunner::new(config.clone());
    let mut ran = 0;
    let mut failures = Vec::new();
    for scenario in target.scenarios() {
        match runner.run(scenario).await {
            ScenarioOutcome::Passed(_) => ran += 1,
            ScenarioOutcome::Failed(_, failure) => {
                ran += 1;
                failures.push(format!("{}: {}", scenario.display_name(), failure));
            }
            ScenarioOutcome::Skipped(reason) => {
                let fixture = Fixture::new(&config.fixtures_root(), target, scenario.fixture);
                assert!(!fixture.exists(), "{} skipped with its fixture present: {reason}", scenario.display_name());
            }
        }
    }
    assert!(failures.is_empty(), "{} failing scenario(s):\n{}", failures.len(), failures.join("\n"));
    assert_eq!(ran, runnable, "scenarios run for {target}");
}

async fn run_declared(target: Target, id: &str) -> Vec<(&'static Scenario, ScenarioOutcome)> {
    let runner = ScenarioRunner::new(config());
    let mut outcomes = Vec::new();
    for scenario in tsconform_core::scenarios_for(target, id) {
        outcomes.push((scenario, runner.run(scenario).await));
    }
    outcomes
}

#[tokio::test]
#[ignore = "needs node, npx tsc"]
async fn basic_cli_prints_hello_world() {
    let config = config();
    let fixture = fixture(&config, Target::Node, "basic-cli");

    fixture.reset().await.unwrap();
    assertions::passes_typecheck(&config, &fixture).await.unwrap();
    assertions::passes_runtime(&config, &fixture, "out/main.js", &["[CLI] Hello World"])
        .await
        .unwrap();
}

#[tokio::test]
#[ignore = "needs node, npx tsc"]
async fn json_array_require_needs_the_copied_data_file() {
    let config = config();
    let fixture = fixture(&config, Target::Node, "json-array-require");

    fixture.reset().await.unwrap();
    assertions::passes_typecheck(&config, &fixture).await.unwrap();
    assertions::fails_runtime(&config, &fixture, "out/main.js").await.unwrap();

    fixture.copy("src/data.json", "out/data.json").await.unwrap();
    assertions::passes_runtime(
        &config,
        &fixture,
        "out/main.js",
        &[r#"[JSON ARRAY REQUIRE] is ["hello","world"]"#],
    )
    .await
    .unwrap();

    // a second reset removes the copy again
    fixture.reset().await.unwrap();
    assert!(!fixture.path("out/data.json").exists());
    assert!(Path::new(&fixture.path("out")).is_dir());
}

#[tokio::test]
#[ignore = "needs node, npx tsc"]
async fn json_array_require_declared_scenarios_pass() {
    let outcomes = run_declared(Target::Node, "json-array-require").await;
    assert_eq!(outcomes.len(), 2);
    for (scenario, outcome) in outcomes {
        assert!(matches!(outcome, ScenarioOutcome::Passed(_)), "{}: {outcome:?}", scenario.display_name());
    }
}

#[tokio::test]
#[ignore = "needs npx webpack and playwright with chromium"]
async fn preact_h_renders_article() {
    let config = config();
    let fixture = fixture(&config, Target::Web, "preact-h");

    fixture.reset().await.unwrap();
    assertions::passes_typecheck(&config, &fixture).await.unwrap();
    assertions::passes_build(&config, &fixture).await.unwrap();
    assertions::passes_browser_runtime(
        &config,
        &fixture,
        r#"<article class="example">[PREACT H] Hello World</article>"#,
    )
    .await
    .unwrap();
}

#[tokio::test]
#[ignore = "needs node, npx tsc"]
async fn node_suite() {
    run_suite(Target::Node, NODE_RUNNABLE).await;
}

#[tokio::test]
#[ignore = "needs npx webpack and playwright with chromium"]
async fn web_suite() {
    run_suite(Target::Web, WEB_RUNNABLE).await;
}
