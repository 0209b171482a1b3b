//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::time::Instant;

use serde::Serialize;
use tokio::runtime::Runtime;
use tsconform_core::{Expect, Scenario, Step, Target};

use crate::config::HarnessConfig;
use crate::harness::{Fixture, HarnessError, ScenarioRunner, cmd_in};

use super::reporter::{ConsoleReporter, RunSummary, ScenarioReporter};
use super::{CliError, CliResult, ExitCode};

fn runtime() -> CliResult<Runtime> {
    Runtime::new().map_err(|e| CliError::failure(format!("Error: failed to start async runtime: {}", e)))
}

/// Catalog scenarios for `targets`, narrowed by an optional keyword.
pub fn select_scenarios(targets: &[Target], filter: Option<&str>) -> Vec<&'static Scenario> {
    targets
        .iter()
        .flat_map(|target| target.scenarios())
        .filter(|scenario| filter.is_none_or(|keyword| scenario.matches(keyword)))
        .collect()
}

/// Run every scenario in order, reporting as we go.
pub async fn run_scenarios(
    runner: &ScenarioRunner,
    scenarios: &[&Scenario],
    reporter: &mut dyn ScenarioReporter,
    stop_on_fail: bool,
) -> RunSummary {
    let start = Instant::now();
    reporter.on_collection_complete(scenarios.len());

    let mut summary = RunSummary::default();
    for scenario in scenarios {
        reporter.on_scenario_start(scenario);
        let outcome = runner.run(scenario).await;
        summary.record(&outcome);
        reporter.on_scenario_complete(scenario, &outcome);

        if stop_on_fail && outcome.is_failure() {
            break;
        }
    }

    summary.duration = start.elapsed();
    reporter.on_run_complete(&summary);
    summary
}

/// `tsconform run`
pub fn run_suite(
    config: HarnessConfig,
    targets: &[Target],
    filter: Option<&str>,
    stop_on_fail: bool,
    verbose: bool,
) -> CliResult<ExitCode> {
    let scenarios = select_scenarios(targets, filter);
    if scenarios.is_empty() {
        eprintln!("No scenarios collected");
        return Ok(ExitCode::SUCCESS);
    }

    tracing::debug!(
        root = %config.root.display(),
        port = config.port,
        scenarios = scenarios.len(),
        "starting conformance run"
    );

    let runner = ScenarioRunner::new(config);
    let mut reporter = ConsoleReporter::new(verbose);
    let summary = runtime()?.block_on(run_scenarios(&runner, &scenarios, &mut reporter, stop_on_fail));

    if summary.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        // Summary already printed
        Err(CliError::new("", ExitCode::FAILURE))
    }
}

/// One catalog entry as printed by `tsconform list --json`.
#[derive(Debug, Serialize)]
pub struct ListedScenario {
    pub target: &'static str,
    pub group: &'static str,
    pub title: &'static str,
    pub fixture: &'static str,
    pub steps: Vec<String>,
}

impl From<&Scenario> for ListedScenario {
    fn from(scenario: &Scenario) -> Self {
        Self {
            target: scenario.target.as_str(),
            group: scenario.group,
            title: scenario.title,
            fixture: scenario.fixture,
            steps: scenario.steps.iter().map(describe_step).collect(),
        }
    }
}

fn expectation(expect: Expect) -> &'static str {
    match expect {
        Expect::Pass => "passes",
        Expect::Fail => "fails",
    }
}

/// Human-readable one-liner for a step.
pub fn describe_step(step: &Step) -> String {
    match step {
        Step::Typecheck(expect) => format!("typecheck {}", expectation(*expect)),
        Step::Build(expect) => format!("build {}", expectation(*expect)),
        Step::Copy { from, to } => format!("copy {} -> {}", from, to),
        Step::NodeRuntime { entry, expected } => format!("node {} prints {:?}", entry, expected),
        Step::NodeRuntimeFails { entry } => format!("node {} fails", entry),
        Step::BrowserRuntime { expected } => format!("#hello renders {:?}", expected),
    }
}

/// Plain-text catalog listing, one scenario per block.
pub fn format_listing(scenarios: &[&Scenario]) -> String {
    let mut out = String::new();
    let mut group = "";
    for scenario in scenarios {
        if scenario.group != group {
            group = scenario.group;
            out.push_str(&format!("{}\n", group));
        }
        out.push_str(&format!("  {}\n", scenario.display_name()));
        for step in scenario.steps {
            out.push_str(&format!("    - {}\n", describe_step(step)));
        }
    }
    out
}

/// `tsconform list`
pub fn list_scenarios(targets: &[Target], filter: Option<&str>, json: bool) -> CliResult<ExitCode> {
    let scenarios = select_scenarios(targets, filter);
    if json {
        let listed: Vec<ListedScenario> = scenarios.iter().map(|s| ListedScenario::from(*s)).collect();
        let text = serde_json::to_string_pretty(&listed)
            .map_err(|e| CliError::failure(format!("Error: cannot serialize catalog: {}", e)))?;
        println!("{}", text);
    } else {
        print!("{}", format_listing(&scenarios));
        println!("{} scenario(s)", scenarios.len());
    }
    Ok(ExitCode::SUCCESS)
}

/// `tsconform reset <target> <id>`
pub fn reset_fixture(config: &HarnessConfig, target: Target, id: &str) -> CliResult<ExitCode> {
    let fixture = Fixture::new(&config.fixtures_root(), target, id);
    if !fixture.exists() {
        let missing = HarnessError::FixtureMissing(fixture.dir().to_path_buf());
        return Err(CliError::failure(format!("Error: {}", missing)));
    }

    runtime()?
        .block_on(fixture.reset())
        .map_err(|e| CliError::failure(format!("Error: {}", e)))?;

    println!("reset {}", fixture.dir().display());
    Ok(ExitCode::SUCCESS)
}

/// `tsconform exec <command>`: print the `{output, errors}` JSON; exit 1 if there are errors.
pub fn exec_command(config: &HarnessConfig, command: &str) -> CliResult<ExitCode> {
    let result = runtime()?.block_on(cmd_in(command, Some(&config.root)));
    let text = serde_json::to_string_pretty(&result)
        .map_err(|e| CliError::failure(format!("Error: cannot serialize result: {}", e)))?;
    println!("{}", text);

    if result.has_errors() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
