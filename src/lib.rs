#![forbid(unsafe_code)]
//! TypeScript build conformance harness
//!
//! Drives an external type-checker (`tsc`), bundler (`webpack`) and runtime (`node`, or a headless
//! browser against a locally served bundle) over small fixture projects, and asserts every
//! observed outcome against a literal expectation from the [`tsconform_core`] catalog.
//!
//! ## Layers
//!
//! - [`harness::process`]: run a shell command, never fail, return trimmed output/error lines.
//! - [`harness::fixture`]: reset output directories, copy side-car files.
//! - [`harness::assertions`]: one function per outcome category.
//! - [`harness::serve`] + [`harness::browser`]: the browser runtime path.
//! - [`harness::runner`]: a scenario's steps in order.
//! - [`cli`]: `run`, `list`, `reset`, `exec`.
//!
//! ## Panic Policy
//!
//! - **Production code**: `Result` with `?` / `map_err`. The `cli` and `harness` modules enforce
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` is acceptable in tests.

pub mod cli;
pub mod config;
pub mod harness;
pub mod version;

pub use config::HarnessConfig;
pub use harness::{AssertionFailure, CommandResult, HarnessError, ScenarioOutcome, ScenarioRunner, cmd};
