// Copyright 2025 benchviz Contributors
// SPDX-License-Identifier: Apache-2.0

//! plotters-backed rendering.

use crate::error::{drawing, ChartError, Result};
use crate::layout::{bar_span, slot_label, worker_axis, y_upper};
use crate::spec::{ChartKind, ChartSpec, ImageFormat, Series};
use benchviz_benchmarks::WorkerGroup;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;
use tracing::info;

const CAPTION_FONT_SIZE: u32 = 24;
const MARGIN: u32 = 15;
const X_LABEL_AREA_SIZE: u32 = 45;
const Y_LABEL_AREA_SIZE: u32 = 60;
const MARKER_RADIUS: u32 = 4;
const ERROR_BAR_WIDTH: u32 = 8;

/// Render `series` to `path` as a `kind` chart.
///
/// The image format follows the file extension. Fails with
/// [`ChartError::NoData`] instead of producing an empty chart.
pub fn render(
    path: impl AsRef<Path>,
    kind: ChartKind,
    spec: &ChartSpec,
    series: &[Series],
) -> Result<()> {
    let path = path.as_ref();
    let format = ImageFormat::from_path(path)?;
    validate(series)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| ChartError::OutputDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    match format {
        ImageFormat::Png => {
            let root = BitMapBackend::new(path, spec.size).into_drawing_area();
            draw(&root, kind, spec, series)?;
        }
        ImageFormat::Svg => {
            let root = SVGBackend::new(path, spec.size).into_drawing_area();
            draw(&root, kind, spec, series)?;
        }
    }

    info!(
        path = %path.display(),
        %kind,
        series = series.len(),
        "Chart written"
    );
    Ok(())
}

/// Reject inputs that would produce an empty chart.
pub fn validate(series: &[Series]) -> Result<()> {
    if series.is_empty() {
        return Err(ChartError::NoData("no series supplied".to_string()));
    }
    if let Some(empty) = series.iter().find(|s| s.is_empty()) {
        return Err(ChartError::NoData(format!(
            "series `{}` has no points",
            empty.label
        )));
    }
    Ok(())
}

fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    kind: ChartKind,
    spec: &ChartSpec,
    series: &[Series],
) -> Result<()> {
    root.fill(&WHITE).map_err(drawing)?;

    match kind {
        ChartKind::Bar => draw_bars(root, spec, series)?,
        ChartKind::Line => draw_lines(root, spec, series)?,
    }

    root.present().map_err(drawing)
}

fn draw_bars<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    spec: &ChartSpec,
    series: &[Series],
) -> Result<()> {
    let workers = worker_axis(series);
    let y_top = y_upper(ChartKind::Bar, spec, series);

    let mut chart = ChartBuilder::on(root)
        .caption(&spec.title, ("sans-serif", CAPTION_FONT_SIZE))
        .margin(MARGIN)
        .x_label_area_size(X_LABEL_AREA_SIZE)
        .y_label_area_size(Y_LABEL_AREA_SIZE)
        .build_cartesian_2d(-0.5f64..workers.len() as f64 - 0.5, 0f64..y_top)
        .map_err(drawing)?;

    let x_formatter = |x: &f64| slot_label(&workers, *x);
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(workers.len())
        .x_desc(spec.x_label.as_str())
        .y_desc(spec.y_label.as_str())
        .x_label_formatter(&x_formatter)
        .draw()
        .map_err(drawing)?;

    for (idx, s) in series.iter().enumerate() {
        let color = Palette99::pick(idx).mix(0.9);
        let spans: Vec<((f64, f64), &WorkerGroup)> = s
            .groups
            .iter()
            .filter_map(|g| {
                let slot = workers.binary_search(&g.worker_count).ok()?;
                Some((bar_span(slot, idx, series.len()), g))
            })
            .collect();

        chart
            .draw_series(spans.iter().map(|((left, right), g)| {
                Rectangle::new([(*left, 0.0), (*right, g.mean)], color.filled())
            }))
            .map_err(drawing)?
            .label(s.label.as_str())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], color.filled()));

        chart
            .draw_series(spans.iter().map(|((left, right), g)| {
                ErrorBar::new_vertical(
                    (left + right) / 2.0,
                    g.min,
                    g.mean,
                    g.max,
                    BLACK.stroke_width(1),
                    ERROR_BAR_WIDTH,
                )
            }))
            .map_err(drawing)?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(drawing)
}

fn draw_lines<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    spec: &ChartSpec,
    series: &[Series],
) -> Result<()> {
    let workers = worker_axis(series);
    let y_top = y_upper(ChartKind::Line, spec, series);
    let x_max = workers.last().copied().unwrap_or(0) as f64 + 1.0;

    let mut chart = ChartBuilder::on(root)
        .caption(&spec.title, ("sans-serif", CAPTION_FONT_SIZE))
        .margin(MARGIN)
        .x_label_area_size(X_LABEL_AREA_SIZE)
        .y_label_area_size(Y_LABEL_AREA_SIZE)
        .build_cartesian_2d(0f64..x_max, 0f64..y_top)
        .map_err(drawing)?;

    chart
        .configure_mesh()
        .x_desc(spec.x_label.as_str())
        .y_desc(spec.y_label.as_str())
        .x_label_formatter(&whole_label)
        .draw()
        .map_err(drawing)?;

    for (idx, s) in series.iter().enumerate() {
        let color = Palette99::pick(idx).mix(1.0);
        let points: Vec<(f64, f64)> = s
            .groups
            .iter()
            .map(|g| (g.worker_count as f64, g.mean))
            .collect();

        chart
            .draw_series(LineSeries::new(points.clone(), color.stroke_width(2)))
            .map_err(drawing)?
            .label(s.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));

        chart
            .draw_series(
                points
                    .into_iter()
                    .map(|p| Circle::new(p, MARKER_RADIUS, color.filled())),
            )
            .map_err(drawing)?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(drawing)
}

// Worker counts are integers, so fractional ticks stay blank.
fn whole_label(x: &f64) -> String {
    if x.fract().abs() < 1e-9 {
        format!("{x:.0}")
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(label: &str, groups: Vec<WorkerGroup>) -> Series {
        Series {
            label: label.to_string(),
            groups,
        }
    }

    fn group(worker_count: u32, mean: f64) -> WorkerGroup {
        WorkerGroup {
            worker_count,
            runs: 3,
            mean,
            min: mean * 0.9,
            max: mean * 1.1,
        }
    }

    fn two_series() -> Vec<Series> {
        vec![
            series("shared", vec![group(1, 8.0), group(2, 4.2), group(16, 2.3)]),
            series("channels", vec![group(1, 9.1), group(4, 3.0), group(16, 2.8)]),
        ]
    }

    #[test]
    fn test_render_every_kind_and_format() {
        let dir = tempfile::tempdir().unwrap();
        let spec = ChartSpec {
            size: (640, 400),
            ..ChartSpec::default()
        };

        for kind in [ChartKind::Bar, ChartKind::Line] {
            for ext in ["png", "svg"] {
                let path = dir.path().join(format!("{kind}.{ext}"));
                render(&path, kind, &spec, &two_series()).unwrap();
                let size = std::fs::metadata(&path).unwrap().len();
                assert!(size > 0, "{} is empty", path.display());
            }
        }
    }

    #[test]
    fn test_render_single_point_into_new_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/nested/plot.svg");
        let single = [series("gol", vec![group(8, 1.5)])];

        render(&path, ChartKind::Bar, &ChartSpec::default(), &single).unwrap();
        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
    }

    #[test]
    fn test_whole_labels_only() {
        assert_eq!(whole_label(&4.0), "4");
        assert_eq!(whole_label(&2.5), "");
    }

    #[test]
    fn test_render_rejects_empty_input() {
        let dir = std::env::temp_dir();
        let err = render(dir.join("empty.png"), ChartKind::Bar, &ChartSpec::default(), &[]).unwrap_err();
        assert!(matches!(err, ChartError::NoData(_)));
    }

    #[test]
    fn test_render_rejects_series_without_points() {
        let err = validate(&[series("channels", Vec::new())]).unwrap_err();
        assert!(err.to_string().contains("channels"));
    }

    #[test]
    fn test_render_checks_format_before_drawing() {
        let groups = vec![WorkerGroup {
            worker_count: 1,
            runs: 1,
            mean: 1.0,
            min: 1.0,
            max: 1.0,
        }];
        let err = render(
            "plot.jpg",
            ChartKind::Line,
            &ChartSpec::default(),
            &[series("s", groups)],
        )
        .unwrap_err();
        assert!(matches!(err, ChartError::UnsupportedFormat { .. }));
    }
}
