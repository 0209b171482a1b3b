//! Scenario reporting (pytest-style)
//!
//! The suite loop talks to a [`ScenarioReporter`] so progress output stays separate from
//! execution. [`ConsoleReporter`] prints dots (or one line per scenario with `-v`), collects
//! failures, and prints them with a summary line at the end of the run. Everything goes to
//! stderr, next to the log output.

use std::io::IsTerminal;
use std::time::Duration;

use miette::{GraphicalReportHandler, GraphicalTheme};
use tsconform_core::Scenario;

use crate::harness::{AssertionFailure, ScenarioOutcome};

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Hooks called by the suite loop.
pub trait ScenarioReporter {
    /// Called once the scenario selection is known
    fn on_collection_complete(&mut self, count: usize);

    /// Called before a scenario runs
    fn on_scenario_start(&mut self, _scenario: &Scenario) {}

    /// Called when a scenario has an outcome
    fn on_scenario_complete(&mut self, scenario: &Scenario, outcome: &ScenarioOutcome);

    /// Called after the last scenario
    fn on_run_complete(&mut self, summary: &RunSummary);
}

/// Counts for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub duration: Duration,
}

impl RunSummary {
    pub fn record(&mut self, outcome: &ScenarioOutcome) {
        self.total += 1;
        match outcome {
            ScenarioOutcome::Passed(_) => self.passed += 1,
            ScenarioOutcome::Failed(..) => self.failed += 1,
            ScenarioOutcome::Skipped(_) => self.skipped += 1,
        }
    }

    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// `====== 3 passed, 1 failed in 0.42s ======`
pub fn format_summary(summary: &RunSummary, color: bool) -> String {
    let mut parts = Vec::new();
    if summary.passed > 0 {
        parts.push(format!("{} passed", summary.passed));
    }
    if summary.failed > 0 {
        parts.push(format!("{} failed", summary.failed));
    }
    if summary.skipped > 0 {
        parts.push(format!("{} skipped", summary.skipped));
    }
    if parts.is_empty() {
        parts.push("no scenarios ran".to_string());
    }

    let line = format!(
        "====== {} in {:.2}s ======",
        parts.join(", "),
        summary.duration.as_secs_f64()
    );
    if !color {
        return line;
    }
    let tint = if summary.is_success() { GREEN } else { RED };
    format!("{BOLD}{tint}{line}{RESET}")
}

/// Status word for one outcome, e.g. `PASSED (12ms)`.
pub fn format_status(outcome: &ScenarioOutcome, color: bool) -> String {
    let (tint, text) = match outcome {
        ScenarioOutcome::Passed(d) => (GREEN, format!("PASSED ({}ms)", d.as_millis())),
        ScenarioOutcome::Failed(d, _) => (RED, format!("FAILED ({}ms)", d.as_millis())),
        ScenarioOutcome::Skipped(reason) => (YELLOW, format!("SKIPPED ({})", reason)),
    };
    if color { format!("{tint}{text}{RESET}") } else { text }
}

fn progress_char(outcome: &ScenarioOutcome) -> (&'static str, char) {
    match outcome {
        ScenarioOutcome::Passed(_) => (GREEN, '.'),
        ScenarioOutcome::Failed(..) => (RED, 'F'),
        ScenarioOutcome::Skipped(_) => (YELLOW, 's'),
    }
}

/// Render an assertion failure as a miette report.
pub fn render_failure(failure: &AssertionFailure, color: bool) -> String {
    let theme = if color {
        GraphicalTheme::unicode()
    } else {
        GraphicalTheme::unicode_nocolor()
    };
    let mut out = String::new();
    match GraphicalReportHandler::new_themed(theme).render_report(&mut out, failure) {
        Ok(()) => out,
        Err(_) => failure.to_string(),
    }
}

/// Default console reporter (pytest-style)
pub struct ConsoleReporter {
    pub verbose: bool,
    color: bool,
    failures: Vec<(String, String)>,
}

impl ConsoleReporter {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            color: std::io::stderr().is_terminal(),
            failures: Vec::new(),
        }
    }

    fn paint(&self, style: &str, text: &str) -> String {
        if self.color {
            format!("{style}{text}{RESET}")
        } else {
            text.to_string()
        }
    }
}

impl ScenarioReporter for ConsoleReporter {
    fn on_collection_complete(&mut self, count: usize) {
        eprintln!(
            "{}",
            self.paint(BOLD, "=================== conformance session starts ===================")
        );
        eprintln!("collected {} scenario(s)", count);
        eprintln!();
    }

    fn on_scenario_start(&mut self, scenario: &Scenario) {
        if self.verbose {
            eprint!("{} ... ", scenario.display_name());
        }
    }

    fn on_scenario_complete(&mut self, scenario: &Scenario, outcome: &ScenarioOutcome) {
        if self.verbose {
            eprintln!("{}", format_status(outcome, self.color));
        } else {
            let (tint, ch) = progress_char(outcome);
            eprint!("{}", self.paint(tint, &ch.to_string()));
        }

        if let ScenarioOutcome::Failed(_, failure) = outcome {
            self.failures
                .push((scenario.display_name(), render_failure(failure, self.color)));
        }
    }

    fn on_run_complete(&mut self, summary: &RunSummary) {
        if !self.verbose {
            eprintln!();
        }

        if !self.failures.is_empty() {
            eprintln!();
            eprintln!(
                "{}",
                self.paint("\x1b[1;31m", "=================== FAILURES ===================")
            );
            for (name, report) in &self.failures {
                eprintln!();
                eprintln!("{}", self.paint(BOLD, &format!("___________ {} ___________", name)));
                eprintln!();
                eprintln!("{}", report.trim_end());
            }
        }

        eprintln!();
        eprintln!("{}", format_summary(summary, self.color));
    }
}
