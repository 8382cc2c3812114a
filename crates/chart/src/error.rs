// Copyright 2025 benchviz Contributors
// SPDX-License-Identifier: Apache-2.0

//! Chart error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while rendering a chart.
#[derive(Debug, Error)]
pub enum ChartError {
    /// Output extension is not a supported image format.
    #[error("Unsupported chart format for {}: expected .png or .svg", path.display())]
    UnsupportedFormat {
        /// Requested output path.
        path: PathBuf,
    },

    /// Nothing to plot.
    #[error("No data to plot: {0}")]
    NoData(String),

    /// Unknown chart kind name.
    #[error("Unknown chart kind `{0}` (expected bar or line)")]
    UnknownKind(String),

    /// Output directory could not be created.
    #[error("Cannot create output directory {}: {source}", path.display())]
    OutputDir {
        /// Directory path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Backend drawing failure.
    #[error("Drawing error: {0}")]
    Drawing(String),
}

/// Result type for chart operations.
pub type Result<T> = std::result::Result<T, ChartError>;

pub(crate) fn drawing<E: std::fmt::Display>(err: E) -> ChartError {
    ChartError::Drawing(err.to_string())
}
