// Copyright 2025 benchviz Contributors
// SPDX-License-Identifier: Apache-2.0

//! Coordinate layout shared by the bar and line renderers.

use crate::spec::{ChartKind, ChartSpec, Series};

/// Fraction of a worker-count slot covered by its bars.
pub const BAR_GROUP_WIDTH: f64 = 0.8;

/// Headroom above the tallest plotted value.
pub const Y_HEADROOM: f64 = 1.1;

/// Sorted, deduplicated worker counts across all series.
pub fn worker_axis(series: &[Series]) -> Vec<u32> {
    let mut workers: Vec<u32> = series
        .iter()
        .flat_map(|s| s.groups.iter().map(|g| g.worker_count))
        .collect();
    workers.sort_unstable();
    workers.dedup();
    workers
}

/// Upper bound of the Y axis.
///
/// A fixed bound in `spec` wins. Otherwise bar charts scale to the largest
/// error-bar maximum and line charts to the largest mean.
pub fn y_upper(kind: ChartKind, spec: &ChartSpec, series: &[Series]) -> f64 {
    if let Some(fixed) = spec.y_max.filter(|v| v.is_finite() && *v > 0.0) {
        return fixed;
    }

    let tallest = series
        .iter()
        .flat_map(|s| s.groups.iter())
        .map(|g| match kind {
            ChartKind::Bar => g.max,
            ChartKind::Line => g.mean,
        })
        .fold(0.0_f64, f64::max);

    if tallest > 0.0 {
        tallest * Y_HEADROOM
    } else {
        1.0
    }
}

/// Horizontal extent of bar `index` out of `count` bars in `slot`.
///
/// Slots are centred on integer X coordinates.
pub fn bar_span(slot: usize, index: usize, count: usize) -> (f64, f64) {
    let width = BAR_GROUP_WIDTH / count.max(1) as f64;
    let left = slot as f64 - BAR_GROUP_WIDTH / 2.0 + index as f64 * width;
    (left, left + width)
}

/// Label for an X tick when ticks are slot indices.
pub fn slot_label(workers: &[u32], x: f64) -> String {
    let slot = x.round();
    if (x - slot).abs() > 1e-6 || slot < 0.0 {
        return String::new();
    }
    workers
        .get(slot as usize)
        .map(|w| w.to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchviz_benchmarks::WorkerGroup;

    fn group(worker_count: u32, mean: f64, max: f64) -> WorkerGroup {
        WorkerGroup {
            worker_count,
            runs: 1,
            mean,
            min: mean,
            max,
        }
    }

    fn series() -> Vec<Series> {
        vec![
            Series {
                label: "shared".into(),
                groups: vec![group(1, 4.0, 5.0), group(4, 1.0, 1.5)],
            },
            Series {
                label: "channels".into(),
                groups: vec![group(2, 3.0, 3.5), group(4, 2.0, 2.2)],
            },
        ]
    }

    #[test]
    fn test_worker_axis_is_sorted_union() {
        assert_eq!(worker_axis(&series()), vec![1, 2, 4]);
        assert!(worker_axis(&[]).is_empty());
    }

    #[test]
    fn test_y_upper_uses_kind_specific_maximum() {
        let spec = ChartSpec::default();
        assert!((y_upper(ChartKind::Bar, &spec, &series()) - 5.5).abs() < 1e-12);
        assert!((y_upper(ChartKind::Line, &spec, &series()) - 4.4).abs() < 1e-12);
    }

    #[test]
    fn test_fixed_y_max_wins() {
        let spec = ChartSpec {
            y_max: Some(220.0),
            ..ChartSpec::default()
        };
        assert_eq!(y_upper(ChartKind::Line, &spec, &series()), 220.0);
    }

    #[test]
    fn test_y_upper_of_zero_times() {
        let flat = vec![Series {
            label: "zero".into(),
            groups: vec![group(1, 0.0, 0.0)],
        }];
        assert_eq!(y_upper(ChartKind::Bar, &ChartSpec::default(), &flat), 1.0);
    }

    #[test]
    fn test_bars_tile_the_slot() {
        let (l0, r0) = bar_span(3, 0, 2);
        let (l1, r1) = bar_span(3, 1, 2);
        assert!((l0 - 2.6).abs() < 1e-12);
        assert!((r0 - l1).abs() < 1e-12);
        assert!((r1 - 3.4).abs() < 1e-12);

        let (single_l, single_r) = bar_span(0, 0, 1);
        assert!((single_l + 0.4).abs() < 1e-12);
        assert!((single_r - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_slot_labels() {
        let workers = [1, 2, 8];
        assert_eq!(slot_label(&workers, 2.0), "8");
        assert_eq!(slot_label(&workers, 0.5), "");
        assert_eq!(slot_label(&workers, 3.0), "");
        assert_eq!(slot_label(&workers, -1.0), "");
    }
}
