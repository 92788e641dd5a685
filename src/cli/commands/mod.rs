//! CLI command handlers for `tally`.
//!
//! Each subcommand is implemented in its own submodule.

pub mod calories;
pub mod config;
pub mod grades;
