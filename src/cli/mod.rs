//! CLI module for the conformance harness
//!
//! ## Commands
//!
//! - `run` - Run conformance scenarios (pytest-style output)
//! - `list` - Print the scenario catalog
//! - `reset <target> <id>` - Empty one fixture's output directories
//! - `exec <command>` - Run a command through the process runner and print its result
//!
//! ## Modules
//!
//! - `commands` - Command implementations
//! - `reporter` - Progress and failure reporting
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;
pub mod reporter;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tsconform_core::Target;

use crate::config::HarnessConfig;
use crate::version::TSCONFORM_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// TypeScript build conformance harness
#[derive(Parser, Debug)]
#[command(name = "tsconform")]
#[command(version = TSCONFORM_VERSION)]
#[command(about = "Type-check, bundle and run TypeScript fixtures against literal expectations", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Project root holding package.json, node_modules and fixtures/ (default: $TSCONFORM_ROOT or .)
    #[arg(long, value_name = "DIR", global = true)]
    pub root: Option<PathBuf>,
}

/// Target selection for `run` and `list`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetArg {
    Node,
    Web,
    All,
}

impl TargetArg {
    pub fn targets(self) -> Vec<Target> {
        match self {
            TargetArg::Node => vec![Target::Node],
            TargetArg::Web => vec![Target::Web],
            TargetArg::All => Target::ALL.to_vec(),
        }
    }
}

/// A single fixture target, for commands addressing one fixture.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureTarget {
    Node,
    Web,
}

impl From<FixtureTarget> for Target {
    fn from(target: FixtureTarget) -> Self {
        match target {
            FixtureTarget::Node => Target::Node,
            FixtureTarget::Web => Target::Web,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run conformance scenarios
    Run {
        /// Which suite to run
        #[arg(long, value_enum, default_value = "all")]
        target: TargetArg,
        /// Only run scenarios whose fixture, group or title contains EXPR
        #[arg(short = 'k', value_name = "EXPR")]
        filter: Option<String>,
        /// Stop on first failure
        #[arg(short = 'x', long = "exitfirst")]
        stop_on_fail: bool,
        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
        /// Port browser fixtures are served on (default: $TSCONFORM_PORT or 3000)
        #[arg(long, value_name = "N")]
        port: Option<u16>,
    },

    /// Print the scenario catalog
    List {
        #[arg(long, value_enum, default_value = "all")]
        target: TargetArg,
        /// Only list scenarios whose fixture, group or title contains EXPR
        #[arg(short = 'k', value_name = "EXPR")]
        filter: Option<String>,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Empty a fixture's output directories
    Reset {
        #[arg(value_enum)]
        target: FixtureTarget,
        /// Fixture directory name
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Run a shell command through the process runner and print `{output, errors}`
    Exec {
        /// Command line handed to the platform shell as-is (quote it as one argument)
        #[arg(value_name = "COMMAND", allow_hyphen_values = true)]
        command: String,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Environment defaults with command-line overrides applied.
fn config_for(root: Option<PathBuf>) -> HarnessConfig {
    let config = HarnessConfig::from_env();
    match root {
        Some(root) => config.with_root(root),
        None => config,
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let config = config_for(cli.root);

    match cli.command {
        Command::Run {
            target,
            filter,
            stop_on_fail,
            verbose,
            port,
        } => {
            let config = match port {
                Some(port) => config.with_port(port),
                None => config,
            };
            commands::run_suite(config, &target.targets(), filter.as_deref(), stop_on_fail, verbose)
        }
        Command::List { target, filter, json } => commands::list_scenarios(&target.targets(), filter.as_deref(), json),
        Command::Reset { target, id } => commands::reset_fixture(&config, target.into(), &id),
        Command::Exec { command } => commands::exec_command(&config, &command),
    }
}

// ============================================================================
// Tests
// ============================================================================
