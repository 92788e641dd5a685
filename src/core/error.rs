//! Error types shared by the calorie and gradebook pipelines

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that end a pipeline stage.
///
/// Bad answers at a prompt never show up here: they are reported and the
/// prompt repeats. These variants cover the environment and the filesystem.
#[derive(Debug, Error)]
pub enum TallyError {
    /// Console or filesystem I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Standard input ended while a value was still required
    #[error("input closed before a value was entered")]
    InputClosed,

    /// An import path does not exist
    #[error("File '{}' not found.", .0.display())]
    SourceNotFound(PathBuf),

    /// An import file exists but could not be read as delimited text
    #[error("{reason}")]
    MalformedSource {
        /// File that was being read
        path: PathBuf,
        /// What went wrong
        reason: String,
    },

    /// Writing a report or export failed; the previous file is left alone
    #[error("Could not save file. {source}")]
    Export {
        /// Target that was being written
        path: PathBuf,
        /// Underlying write failure
        #[source]
        source: io::Error,
    },
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, TallyError>;

/// Why a single import row was skipped
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    /// Fewer than two fields on the row
    #[error("row has no mark column")]
    MissingField,

    /// The mark column is not an integer
    #[error("mark '{0}' is not a whole number")]
    InvalidMark(String),

    /// The mark is a whole number outside 0..=100
    #[error("mark {mark} for {name} is outside 0-100")]
    MarkOutOfRange {
        /// Student on the row
        name: String,
        /// The mark in canonical decimal form, however large
        mark: String,
    },
}
