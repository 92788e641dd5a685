//! Core functionality shared by the command-line front end and the tests

pub mod calories;
pub mod config;
pub mod console;
pub mod error;
pub mod grades;
pub mod persist;

/// Returns the current version of the `tally` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
