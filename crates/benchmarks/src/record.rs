// Copyright 2025 benchviz Contributors
// SPDX-License-Identifier: Apache-2.0

//! Benchmark record and dataset types.
//!
//! A [`BenchmarkRecord`] is one successfully parsed result row. A
//! [`ParsedDataset`] is the ordered sequence of records recovered from a
//! single log, plus a count of the filtered lines that were rejected.

use crate::error::{BenchError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One parsed benchmark result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    /// Raw benchmark identifier, e.g. `Gol/512x512x16-8-1000`.
    pub name: String,
    /// Elapsed time in seconds.
    pub time: f64,
    /// Worker count captured from the name.
    pub worker_count: u32,
    /// CPU cores captured from the name, when the grammar has a second group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu_cores: Option<u32>,
}

/// Unit of the raw `time` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeUnit {
    /// Nanoseconds, as emitted by the Go benchmark harness.
    #[default]
    #[serde(rename = "ns")]
    Nanoseconds,
    /// Microseconds.
    #[serde(rename = "us")]
    Microseconds,
    /// Milliseconds.
    #[serde(rename = "ms")]
    Milliseconds,
    /// Seconds.
    #[serde(rename = "s")]
    Seconds,
}

impl TimeUnit {
    /// Number of raw units per second.
    pub fn per_second(&self) -> f64 {
        match self {
            Self::Nanoseconds => 1e9,
            Self::Microseconds => 1e6,
            Self::Milliseconds => 1e3,
            Self::Seconds => 1.0,
        }
    }

    /// Convert a raw value in this unit to seconds.
    pub fn to_seconds(&self, raw: f64) -> f64 {
        raw / self.per_second()
    }

    /// Short unit suffix.
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Nanoseconds => "ns",
            Self::Microseconds => "us",
            Self::Milliseconds => "ms",
            Self::Seconds => "s",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

impl FromStr for TimeUnit {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ns" => Ok(Self::Nanoseconds),
            "us" | "µs" => Ok(Self::Microseconds),
            "ms" => Ok(Self::Milliseconds),
            "s" => Ok(Self::Seconds),
            other => Err(BenchError::UnknownTimeUnit(other.to_string())),
        }
    }
}

/// Ordered, immutable set of records parsed from one log.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedDataset {
    records: Vec<BenchmarkRecord>,
    rejected: usize,
}

impl ParsedDataset {
    /// Create a dataset from records in log order.
    pub fn new(records: Vec<BenchmarkRecord>, rejected: usize) -> Self {
        Self { records, rejected }
    }

    /// Records in filtered-line order.
    pub fn records(&self) -> &[BenchmarkRecord] {
        &self.records
    }

    /// Number of filtered lines that failed to parse.
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    /// Number of records kept.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no record survived parsing.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records.
    pub fn iter(&self) -> std::slice::Iter<'_, BenchmarkRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a ParsedDataset {
    type Item = &'a BenchmarkRecord;
    type IntoIter = std::slice::Iter<'a, BenchmarkRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
