//! Shared library for `tally`
//! Contains the calorie tracker and gradebook pipelines used by the CLI

pub mod core;
pub mod logger;

pub use core::{config, get_version};
