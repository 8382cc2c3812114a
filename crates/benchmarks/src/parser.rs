// Copyright 2025 benchviz Contributors
// SPDX-License-Identifier: Apache-2.0

//! Log filtering and record parsing.
//!
//! Input lines look like `name,time,range`, where `time` is in the harness
//! unit (nanoseconds by default) and `range` is ignored. Lines that fail to
//! parse are dropped and counted; they never produce placeholder records.

use crate::error::ParseFailure;
use crate::grammar::NameGrammar;
use crate::record::{BenchmarkRecord, ParsedDataset, TimeUnit};
use tracing::debug;

/// Field delimiter of the harness CSV output.
pub const FIELD_DELIMITER: char = ',';

/// Keep the lines of `raw_text` that contain `marker`, in input order.
pub fn filter_lines<'a>(raw_text: &'a str, marker: &str) -> Vec<&'a str> {
    raw_text.lines().filter(|line| line.contains(marker)).collect()
}

/// Parse one filtered line into a record.
pub fn parse_record(
    line: &str,
    grammar: &NameGrammar,
    unit: TimeUnit,
) -> Result<BenchmarkRecord, ParseFailure> {
    let mut fields = line.split(FIELD_DELIMITER).map(str::trim);

    let name = fields
        .next()
        .filter(|name| !name.is_empty())
        .ok_or(ParseFailure::MissingField("name"))?;
    let raw_time = fields.next().ok_or(ParseFailure::MissingField("time"))?;

    let params = grammar.parse_name(name)?;

    let time = raw_time
        .parse::<f64>()
        .ok()
        .filter(|t| t.is_finite())
        .ok_or_else(|| ParseFailure::NonNumericTime(raw_time.to_string()))?;

    Ok(BenchmarkRecord {
        name: name.to_string(),
        time: unit.to_seconds(time),
        worker_count: params.worker_count,
        cpu_cores: params.cpu_cores,
    })
}

/// Parse every filtered line, keeping successes in order.
pub fn build_dataset<'a, I>(lines: I, grammar: &NameGrammar, unit: TimeUnit) -> ParsedDataset
where
    I: IntoIterator<Item = &'a str>,
{
    let mut records = Vec::new();
    let mut rejected = 0;

    for (idx, line) in lines.into_iter().enumerate() {
        match parse_record(line, grammar, unit) {
            Ok(record) => records.push(record),
            Err(reason) => {
                rejected += 1;
                debug!(line = idx + 1, %reason, "Skipping unparsable benchmark line");
            }
        }
    }

    ParsedDataset::new(records, rejected)
}
