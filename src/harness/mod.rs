//! Conformance harness: process runner, fixture resets, step assertions and the browser path.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod assertions;
pub mod browser;
pub mod error;
pub mod fixture;
pub mod process;
pub mod runner;
pub mod serve;

pub use error::{AssertionFailure, HarnessError};
pub use fixture::Fixture;
pub use process::{CommandResult, cmd, cmd_in};
pub use runner::{ScenarioOutcome, ScenarioRunner};
