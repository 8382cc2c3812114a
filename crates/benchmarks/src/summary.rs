// Copyright 2025 benchviz Contributors
// SPDX-License-Identifier: Apache-2.0

//! Per-worker-count aggregation.

use crate::record::ParsedDataset;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregated timings for one worker count, in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerGroup {
    /// Worker count shared by every run in the group.
    pub worker_count: u32,
    /// Number of runs.
    pub runs: usize,
    /// Mean time.
    pub mean: f64,
    /// Fastest run.
    pub min: f64,
    /// Slowest run.
    pub max: f64,
}

impl WorkerGroup {
    fn from_times(worker_count: u32, times: &[f64]) -> Self {
        let runs = times.len();
        let sum: f64 = times.iter().sum();
        let min = times.iter().copied().fold(f64::INFINITY, f64::min);
        let max = times.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Self {
            worker_count,
            runs,
            mean: sum / runs as f64,
            min,
            max,
        }
    }
}

/// Group records by worker count, ascending.
///
/// Runs inside a group are taken in dataset order, so the result only
/// depends on the dataset contents.
pub fn group_by_workers(dataset: &ParsedDataset) -> Vec<WorkerGroup> {
    let mut groups: BTreeMap<u32, Vec<f64>> = BTreeMap::new();
    for record in dataset {
        groups.entry(record.worker_count).or_default().push(record.time);
    }

    groups
        .into_iter()
        .map(|(workers, times)| WorkerGroup::from_times(workers, &times))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::BenchmarkRecord;

    fn record(worker_count: u32, time: f64) -> BenchmarkRecord {
        BenchmarkRecord {
            name: format!("Gol/16x16x16-{worker_count}-10"),
            time,
            worker_count,
            cpu_cores: None,
        }
    }

    #[test]
    fn test_groups_are_sorted_by_worker_count() {
        let dataset = ParsedDataset::new(
            vec![record(8, 1.0), record(1, 4.0), record(8, 3.0), record(2, 2.0)],
            0,
        );
        let groups = group_by_workers(&dataset);

        let workers: Vec<u32> = groups.iter().map(|g| g.worker_count).collect();
        assert_eq!(workers, vec![1, 2, 8]);

        let eight = &groups[2];
        assert_eq!(eight.runs, 2);
        assert_eq!(eight.mean, 2.0);
        assert_eq!(eight.min, 1.0);
        assert_eq!(eight.max, 3.0);
    }

    #[test]
    fn test_empty_dataset_has_no_groups() {
        assert!(group_by_workers(&ParsedDataset::default()).is_empty());
    }
}
