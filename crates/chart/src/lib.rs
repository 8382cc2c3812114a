// Copyright 2025 benchviz Contributors
// SPDX-License-Identifier: Apache-2.0

//! Chart rendering for benchviz.
//!
//! Datasets are grouped by worker count into [`Series`] and drawn as a bar
//! chart (mean with min/max error bars) or a line chart, one colour per
//! series, to a PNG or SVG file.
//!
//! ```no_run
//! use benchviz_benchmarks::{parse_log, Preset, TimeUnit};
//! use benchviz_chart::{render, ChartKind, ChartSpec, Series};
//!
//! let log = std::fs::read_to_string("resultsNew.csv")?;
//! let preset = Preset::Gol;
//! let dataset = parse_log(&log, preset.marker(), preset.grammar(), TimeUnit::Nanoseconds);
//!
//! let series = [Series::from_dataset("gol", &dataset)];
//! render("benchmark_plot.png", ChartKind::Bar, &ChartSpec::default(), &series)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod error;
pub mod layout;
pub mod render;
pub mod spec;

pub use error::{ChartError, Result};
pub use render::render;
pub use spec::{ChartKind, ChartSpec, ImageFormat, Series};
