//! Harness version information.
//!
//! Taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time; prefer this constant over
//! repeating `env!("CARGO_PKG_VERSION")`.

/// The tsconform version string (for example, `0.1.0`).
pub const TSCONFORM_VERSION: &str = env!("CARGO_PKG_VERSION");
