// Copyright 2025 benchviz Contributors
// SPDX-License-Identifier: Apache-2.0

//! Markdown output generation for parsed benchmark datasets.

use crate::record::ParsedDataset;
use crate::summary::group_by_workers;
use std::fmt::Write;

/// Generate a Markdown summary grouped by worker count.
pub fn generate_summary(dataset: &ParsedDataset, title: &str) -> String {
    let mut output = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(output, "# {title}");
    let _ = writeln!(output);
    let _ = writeln!(output, "Generated: {}", chrono::Utc::now().to_rfc3339());
    let _ = writeln!(output);
    let _ = writeln!(output, "## Time by worker count");
    let _ = writeln!(output);
    let _ = writeln!(output, "| Workers | Runs | Mean (s) | Min (s) | Max (s) |");
    let _ = writeln!(output, "|---------|------|----------|---------|---------|");

    for group in group_by_workers(dataset) {
        let _ = writeln!(
            output,
            "| {} | {} | {:.4} | {:.4} | {:.4} |",
            group.worker_count, group.runs, group.mean, group.min, group.max
        );
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "---");
    let _ = writeln!(output, "Records: {}", dataset.len());
    let _ = writeln!(output, "Rejected lines: {}", dataset.rejected());

    output
}

/// Generate a table with one row per record, in dataset order.
pub fn generate_record_table(dataset: &ParsedDataset) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "| # | Name | Time (s) | Workers | CPU cores |");
    let _ = writeln!(output, "|---|------|----------|---------|-----------|");

    for (idx, record) in dataset.iter().enumerate() {
        let cores = record
            .cpu_cores
            .map(|c| c.to_string())
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            output,
            "| {} | {} | {:.6} | {} | {} |",
            idx, record.name, record.time, record.worker_count, cores
        );
    }

    output
}
