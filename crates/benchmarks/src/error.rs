// Copyright 2025 benchviz Contributors
// SPDX-License-Identifier: Apache-2.0

//! Error types for benchmark log processing.
//!
//! Two tiers exist. [`BenchError`] is fatal and aborts a run. [`ParseFailure`]
//! describes why a single filtered line was rejected; it is recovered locally
//! by dropping the line and never aborts a run.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors raised while loading, parsing or writing benchmark data.
#[derive(Debug, Error)]
pub enum BenchError {
    /// Input log does not exist or cannot be read.
    #[error("Cannot read input file {}: {source}", path.display())]
    MissingInputFile {
        /// Input path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Name grammar failed to compile or has the wrong number of groups.
    #[error("Invalid name grammar `{pattern}`: {reason}")]
    InvalidGrammar {
        /// Rejected pattern.
        pattern: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Unknown preset name.
    #[error("Unknown preset `{0}` (expected one of: gol, filter)")]
    UnknownPreset(String),

    /// Unknown time unit.
    #[error("Unknown time unit `{0}` (expected one of: ns, us, ms, s)")]
    UnknownTimeUnit(String),

    /// Filtering or parsing left nothing to report.
    #[error("No benchmark records parsed from {source_name} ({filtered} lines matched marker `{marker}`)")]
    EmptyDataset {
        /// Log the dataset came from.
        source_name: String,
        /// Marker used for filtering.
        marker: String,
        /// Lines that matched the marker.
        filtered: usize,
    },

    /// Output could not be written.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Output path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Dataset (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for benchmark operations.
pub type Result<T> = std::result::Result<T, BenchError>;

/// Reason a filtered log line did not produce a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFailure {
    /// The line has no `time` field after the name.
    #[error("missing {0} field")]
    MissingField(&'static str),

    /// The name does not match the grammar.
    #[error("name `{0}` does not match grammar")]
    GrammarMismatch(String),

    /// A captured parameter is not an unsigned integer.
    #[error("parameter `{0}` is not an unsigned integer")]
    NonNumericParameter(String),

    /// The time field is not a finite number.
    #[error("time `{0}` is not a finite number")]
    NonNumericTime(String),
}
