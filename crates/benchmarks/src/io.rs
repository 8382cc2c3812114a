// Copyright 2025 benchviz Contributors
// SPDX-License-Identifier: Apache-2.0

//! I/O operations for benchmark logs and parsed datasets.
//!
//! This module reads raw harness logs and writes the derived files: the
//! filtered-line audit file, a JSON dump of the dataset and the Markdown
//! summary.

use crate::error::{BenchError, Result};
use crate::markdown;
use crate::record::ParsedDataset;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Default harness log path.
pub const DEFAULT_INPUT: &str = "resultsNew.csv";

/// Default filtered-line audit file path.
pub const DEFAULT_FILTERED_OUTPUT: &str = "parsed_resultsNew.csv";

fn io_error(path: &Path, source: std::io::Error) -> BenchError {
    BenchError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|e| io_error(parent, e))
        }
        _ => Ok(()),
    }
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    ensure_parent_dir(path)?;
    fs::write(path, contents).map_err(|e| io_error(path, e))?;
    debug!(path = %path.display(), bytes = contents.len(), "Wrote file");
    Ok(())
}

/// Read a whole harness log into memory.
pub fn read_log(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| BenchError::MissingInputFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Write filtered lines verbatim, one per line.
pub fn write_filtered_lines(lines: &[&str], path: impl AsRef<Path>) -> Result<()> {
    write_file(path.as_ref(), &lines.join("\n"))
}

/// Write a dataset to a pretty-printed JSON file.
pub fn write_dataset_json(dataset: &ParsedDataset, path: impl AsRef<Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(dataset)?;
    write_file(path.as_ref(), &json)
}

/// Read a dataset from a JSON file.
pub fn read_dataset_json(path: impl AsRef<Path>) -> Result<ParsedDataset> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| io_error(path, e))?;
    Ok(serde_json::from_str(&content)?)
}

/// Write the Markdown summary for a dataset.
pub fn write_summary(dataset: &ParsedDataset, title: &str, path: impl AsRef<Path>) -> Result<()> {
    write_file(path.as_ref(), &markdown::generate_summary(dataset, title))
}
