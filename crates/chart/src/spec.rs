// Copyright 2025 benchviz Contributors
// SPDX-License-Identifier: Apache-2.0

//! Chart description types.

use crate::error::{ChartError, Result};
use benchviz_benchmarks::{group_by_workers, ParsedDataset, WorkerGroup};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Chart style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// Mean time per worker count, with min/max error bars.
    #[default]
    Bar,
    /// Mean time per worker count joined by lines.
    Line,
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bar => f.write_str("bar"),
            Self::Line => f.write_str("line"),
        }
    }
}

impl FromStr for ChartKind {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "bar" => Ok(Self::Bar),
            "line" => Ok(Self::Line),
            other => Err(ChartError::UnknownKind(other.to_string())),
        }
    }
}

/// Image format, chosen from the output file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// Bitmap output.
    Png,
    /// Vector output.
    Svg,
}

impl ImageFormat {
    /// Detect the format of `path` from its extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("png") => Ok(Self::Png),
            Some("svg") => Ok(Self::Svg),
            _ => Err(ChartError::UnsupportedFormat {
                path: PathBuf::from(path),
            }),
        }
    }
}

/// Title, axis labels and size of a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    /// Chart caption.
    pub title: String,
    /// X axis description.
    pub x_label: String,
    /// Y axis description.
    pub y_label: String,
    /// Image size in pixels.
    pub size: (u32, u32),
    /// Fixed upper bound of the Y axis.
    pub y_max: Option<f64>,
}

impl Default for ChartSpec {
    fn default() -> Self {
        Self {
            title: "Benchmark Performance by Worker Threads".to_string(),
            x_label: "Worker Threads Used".to_string(),
            y_label: "Time Taken (s)".to_string(),
            size: (1000, 600),
            y_max: None,
        }
    }
}

/// One labelled set of per-worker aggregates.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Legend label.
    pub label: String,
    /// Aggregates, ascending by worker count.
    pub groups: Vec<WorkerGroup>,
}

impl Series {
    /// Build a series by grouping a dataset by worker count.
    pub fn from_dataset(label: impl Into<String>, dataset: &ParsedDataset) -> Self {
        Self {
            label: label.into(),
            groups: group_by_workers(dataset),
        }
    }

    /// Whether the series has no points.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
