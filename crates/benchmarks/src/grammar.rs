// Copyright 2025 benchviz Contributors
// SPDX-License-Identifier: Apache-2.0

//! Benchmark name grammars.
//!
//! A grammar is a regular expression over the benchmark name with one or two
//! capture groups. Group 1 is the worker count, group 2 (optional) the number
//! of CPU cores.
//!
//! | Preset   | Marker    | Grammar                       |
//! |----------|-----------|-------------------------------|
//! | `gol`    | `Gol/`    | `Gol/\d+x\d+x\d+-(\d+)-\d+`   |
//! | `filter` | `Filter`  | `Filter/(\d+)_workers-(\d+)`  |

use crate::error::{BenchError, ParseFailure, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Grammar for Game of Life runs, e.g. `Gol/512x512x16-8-1000`.
pub const GOL_PATTERN: &str = r"Gol/\d+x\d+x\d+-(\d+)-\d+";

/// Grammar for image filter runs, e.g. `Filter/16_workers-4`.
pub const FILTER_PATTERN: &str = r"Filter/(\d+)_workers-(\d+)";

static GOL_GRAMMAR: Lazy<NameGrammar> =
    Lazy::new(|| NameGrammar::new(GOL_PATTERN).expect("built-in Gol grammar compiles"));
static FILTER_GRAMMAR: Lazy<NameGrammar> =
    Lazy::new(|| NameGrammar::new(FILTER_PATTERN).expect("built-in Filter grammar compiles"));

/// Numeric parameters recovered from a benchmark name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameParams {
    /// Worker count (capture group 1).
    pub worker_count: u32,
    /// CPU cores (capture group 2), when the grammar defines it.
    pub cpu_cores: Option<u32>,
}

/// A compiled benchmark name grammar.
#[derive(Debug, Clone)]
pub struct NameGrammar {
    regex: Regex,
}

impl NameGrammar {
    /// Compile a grammar, checking it has one or two capture groups.
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|e| BenchError::InvalidGrammar {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;

        // captures_len() counts the implicit whole-match group.
        let groups = regex.captures_len() - 1;
        if !(1..=2).contains(&groups) {
            return Err(BenchError::InvalidGrammar {
                pattern: pattern.to_string(),
                reason: format!("expected 1 or 2 capture groups, found {groups}"),
            });
        }

        Ok(Self { regex })
    }

    /// The source pattern.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Whether the grammar defines a CPU-core group.
    pub fn has_cpu_cores(&self) -> bool {
        self.regex.captures_len() > 2
    }

    /// Match a benchmark name and extract its numeric parameters.
    ///
    /// Every group the grammar defines must participate in the match and
    /// parse as `u32`.
    pub fn parse_name(&self, name: &str) -> std::result::Result<NameParams, ParseFailure> {
        let caps = self
            .regex
            .captures(name)
            .ok_or_else(|| ParseFailure::GrammarMismatch(name.to_string()))?;

        let group = |idx: usize| -> std::result::Result<u32, ParseFailure> {
            let text = caps
                .get(idx)
                .map(|m| m.as_str())
                .ok_or_else(|| ParseFailure::GrammarMismatch(name.to_string()))?;
            text.parse::<u32>()
                .map_err(|_| ParseFailure::NonNumericParameter(text.to_string()))
        };

        let worker_count = group(1)?;
        let cpu_cores = if self.has_cpu_cores() {
            Some(group(2)?)
        } else {
            None
        };

        Ok(NameParams {
            worker_count,
            cpu_cores,
        })
    }
}

impl fmt::Display for NameGrammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Built-in marker and grammar pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Game of Life benchmarks.
    Gol,
    /// Image filter benchmarks.
    Filter,
}

impl Preset {
    /// All presets, in display order.
    pub const ALL: [Preset; 2] = [Preset::Gol, Preset::Filter];

    /// Preset name as accepted on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Gol => "gol",
            Self::Filter => "filter",
        }
    }

    /// Line marker selecting relevant rows.
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Gol => "Gol/",
            Self::Filter => "Filter",
        }
    }

    /// Name grammar for this preset.
    pub fn grammar(&self) -> &'static NameGrammar {
        match self {
            Self::Gol => Lazy::force(&GOL_GRAMMAR),
            Self::Filter => Lazy::force(&FILTER_GRAMMAR),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "gol" => Ok(Self::Gol),
            "filter" => Ok(Self::Filter),
            other => Err(BenchError::UnknownPreset(other.to_string())),
        }
    }
}
