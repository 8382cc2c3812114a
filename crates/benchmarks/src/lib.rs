// Copyright 2025 benchviz Contributors
// SPDX-License-Identifier: Apache-2.0

//! Benchmark log parsing for benchviz.
//!
//! This crate turns the raw CSV log of a benchmarking harness into a clean
//! [`ParsedDataset`]: it keeps only the lines carrying a marker, recovers the
//! worker count (and optionally the CPU-core count) from each benchmark name
//! with a [`NameGrammar`], and normalizes times to seconds.
//!
//! # Quick Start
//!
//! ```
//! use benchviz_benchmarks::{parse_log, Preset, TimeUnit};
//!
//! let log = "INFO: starting benchmark suite\n\
//!            Gol/512x512x16-8-1000,4500000000,1200000\n";
//! let preset = Preset::Gol;
//! let dataset = parse_log(log, preset.marker(), preset.grammar(), TimeUnit::Nanoseconds);
//!
//! assert_eq!(dataset.len(), 1);
//! assert_eq!(dataset.records()[0].worker_count, 8);
//! assert_eq!(dataset.records()[0].time, 4.5);
//! ```
//!
//! # Modules
//!
//! - [`parser`] - Line filtering and record parsing
//! - [`grammar`] - Benchmark name grammars and presets
//! - [`record`] - `BenchmarkRecord`, `ParsedDataset` and `TimeUnit`
//! - [`summary`] - Grouping by worker count
//! - [`io`] - Reading logs and writing derived files
//! - [`markdown`] - Markdown report generation

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod error;
pub mod grammar;
pub mod io;
pub mod markdown;
pub mod parser;
pub mod record;
pub mod summary;

pub use error::{BenchError, ParseFailure, Result};
pub use grammar::{NameGrammar, NameParams, Preset};
pub use parser::{build_dataset, filter_lines, parse_record};
pub use record::{BenchmarkRecord, ParsedDataset, TimeUnit};
pub use summary::{group_by_workers, WorkerGroup};

/// Filter `raw_text` by `marker` and parse the surviving lines.
///
/// This is a pure function of its inputs: calling it twice on the same text
/// yields equal datasets.
pub fn parse_log(
    raw_text: &str,
    marker: &str,
    grammar: &NameGrammar,
    unit: TimeUnit,
) -> ParsedDataset {
    build_dataset(filter_lines(raw_text, marker), grammar, unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOL_LOG: &str = "\
goos: linux
INFO: starting benchmark suite
Gol/512x512x16-1-1000,8000000000,1200000
Gol/512x512x16-2-1000,4000000000,900000
Gol/512x512x16-8-1000,4500000000,1200000
Gol/512x512x16-16-1000,not-a-number,0
ok  uk.ac.bris.cs/gameoflife 120.5s
";

    #[test]
    fn test_parse_log_gol_scenario() {
        let preset = Preset::Gol;
        let dataset = parse_log(GOL_LOG, preset.marker(), preset.grammar(), TimeUnit::Nanoseconds);

        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.rejected(), 1);
        let eight = &dataset.records()[2];
        assert_eq!(eight.worker_count, 8);
        assert_eq!(eight.time, 4.5);
    }

    #[test]
    fn test_parse_log_filter_scenario() {
        let preset = Preset::Filter;
        let dataset = parse_log(
            "Filter/16_workers-4,2300000000,500000",
            preset.marker(),
            preset.grammar(),
            TimeUnit::Nanoseconds,
        );

        let record = &dataset.records()[0];
        assert_eq!(record.worker_count, 16);
        assert_eq!(record.cpu_cores, Some(4));
        assert!((record.time - 2.3).abs() < 1e-12);
    }

    #[test]
    fn test_parse_log_is_idempotent() {
        let preset = Preset::Gol;
        let first = parse_log(GOL_LOG, preset.marker(), preset.grammar(), TimeUnit::Nanoseconds);
        let second = parse_log(GOL_LOG, preset.marker(), preset.grammar(), TimeUnit::Nanoseconds);
        assert_eq!(first, second);
    }

    #[test]
    fn test_wrong_marker_yields_empty_dataset() {
        let preset = Preset::Filter;
        let dataset = parse_log(GOL_LOG, preset.marker(), preset.grammar(), TimeUnit::Nanoseconds);
        assert!(dataset.is_empty());
        assert_eq!(dataset.rejected(), 0);
    }
}
