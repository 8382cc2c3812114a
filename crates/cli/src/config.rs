// Copyright 2025 benchviz Contributors
// SPDX-License-Identifier: Apache-2.0

//! Layered configuration.
//!
//! Sources, lowest precedence first:
//!
//! 1. built-in defaults (`resultsNew.csv` in, `benchmark_plot.png` out)
//! 2. `benchviz.toml` in the working directory, or the file given by `--config`
//! 3. `BENCHVIZ_*` environment variables, e.g. `BENCHVIZ_INPUT=results.csv`
//! 4. command-line flags

use benchviz_benchmarks::io::{DEFAULT_FILTERED_OUTPUT, DEFAULT_INPUT};
use benchviz_benchmarks::{BenchError, NameGrammar, Preset, TimeUnit};
use benchviz_chart::{ChartKind, ChartSpec};
use config::{Config, ConfigError, Environment, File, Map};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "benchviz";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "BENCHVIZ";

/// Default chart path.
pub const DEFAULT_OUTPUT: &str = "benchmark_plot.png";

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Harness log to read.
    pub input: PathBuf,
    /// Where to write the filtered lines; `None` or an empty path disables
    /// the audit file.
    pub filtered_output: Option<PathBuf>,
    /// Chart image path.
    pub output: PathBuf,
    /// Optional JSON dump of the dataset.
    pub json: Option<PathBuf>,
    /// Optional Markdown summary.
    pub summary: Option<PathBuf>,
    /// Built-in marker and grammar.
    pub preset: Preset,
    /// Marker overriding the preset's.
    pub marker: Option<String>,
    /// Grammar overriding the preset's.
    pub grammar: Option<String>,
    /// Unit of the raw time column.
    pub unit: TimeUnit,
    /// Chart style.
    pub kind: ChartKind,
    /// Chart caption.
    pub title: String,
    /// X axis description.
    pub x_label: String,
    /// Y axis description.
    pub y_label: String,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Fixed Y axis upper bound.
    pub y_max: Option<f64>,
}

impl Default for Settings {
    fn default() -> Self {
        let chart = ChartSpec::default();
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            filtered_output: Some(PathBuf::from(DEFAULT_FILTERED_OUTPUT)),
            output: PathBuf::from(DEFAULT_OUTPUT),
            json: None,
            summary: None,
            preset: Preset::Gol,
            marker: None,
            grammar: None,
            unit: TimeUnit::default(),
            kind: ChartKind::default(),
            title: chart.title,
            x_label: chart.x_label,
            y_label: chart.y_label,
            width: chart.size.0,
            height: chart.size.1,
            y_max: chart.y_max,
        }
    }
}

/// Marker, grammar and unit used to parse a log.
#[derive(Debug, Clone)]
pub struct ParserSettings {
    /// Line marker.
    pub marker: String,
    /// Compiled name grammar.
    pub grammar: NameGrammar,
    /// Raw time unit.
    pub unit: TimeUnit,
}

impl Settings {
    /// Load settings from the process environment.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(config_file, None)
    }

    /// Load settings, taking environment variables from `env` when given.
    pub fn load_with_env(
        config_file: Option<&Path>,
        env: Option<Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let file = match config_file {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .source(env),
            )
            .build()?
            .try_deserialize()
    }

    /// Resolve the marker and grammar, compiling a custom grammar if set.
    pub fn parser(&self) -> Result<ParserSettings, BenchError> {
        let marker = self
            .marker
            .clone()
            .unwrap_or_else(|| self.preset.marker().to_string());
        let grammar = match &self.grammar {
            Some(pattern) => NameGrammar::new(pattern)?,
            None => self.preset.grammar().clone(),
        };

        Ok(ParserSettings {
            marker,
            grammar,
            unit: self.unit,
        })
    }

    /// Audit file path, if one should be written.
    pub fn audit_path(&self) -> Option<&Path> {
        self.filtered_output
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
    }

    /// Chart title, labels and size.
    pub fn chart_spec(&self) -> ChartSpec {
        ChartSpec {
            title: self.title.clone(),
            x_label: self.x_label.clone(),
            y_label: self.y_label.clone(),
            size: (self.width, self.height),
            y_max: self.y_max,
        }
    }
}
