// Copyright 2025 benchviz Contributors
// SPDX-License-Identifier: Apache-2.0

//! The `plot` and `compare` workflows.

use crate::config::{ParserSettings, Settings};
use anyhow::Context;
use benchviz_benchmarks::{build_dataset, filter_lines, io, markdown, BenchError, ParsedDataset};
use benchviz_chart::{render, ChartKind, ImageFormat, Series};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{info, warn};

/// Outcome of a `plot` run.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotReport {
    /// Records kept.
    pub records: usize,
    /// Filtered lines dropped as unparsable.
    pub rejected: usize,
    /// Chart path.
    pub output: PathBuf,
}

/// Read, filter and parse one log.
///
/// The filtered lines are written to `filtered_output` before parsing. An
/// empty result is reported as [`BenchError::EmptyDataset`] so that it is
/// never plotted.
pub fn load_dataset(
    input: &Path,
    parser: &ParserSettings,
    filtered_output: Option<&Path>,
) -> Result<ParsedDataset, BenchError> {
    let raw = io::read_log(input)?;
    let lines = filter_lines(&raw, &parser.marker);
    info!(
        input = %input.display(),
        marker = %parser.marker,
        matched = lines.len(),
        "Filtered benchmark log"
    );

    if let Some(path) = filtered_output {
        io::write_filtered_lines(&lines, path)?;
    }

    let matched = lines.len();
    let dataset = build_dataset(lines, &parser.grammar, parser.unit);
    if dataset.rejected() > 0 {
        warn!(
            input = %input.display(),
            rejected = dataset.rejected(),
            "Dropped benchmark lines that did not match grammar `{}`",
            parser.grammar
        );
    }

    if dataset.is_empty() {
        let err = BenchError::EmptyDataset {
            source_name: input.display().to_string(),
            marker: parser.marker.clone(),
            filtered: matched,
        };
        warn!("{err}; check the marker and grammar");
        return Err(err);
    }

    Ok(dataset)
}

/// Parse the configured log and render its chart.
pub fn plot(settings: &Settings, verbose: bool) -> anyhow::Result<PlotReport> {
    ImageFormat::from_path(&settings.output)?;
    let parser = settings.parser()?;

    let dataset = load_dataset(
        &settings.input,
        &parser,
        settings.audit_path(),
    )?;

    if verbose {
        print!("{}", markdown::generate_record_table(&dataset));
    }

    if let Some(path) = &settings.json {
        io::write_dataset_json(&dataset, path)
            .with_context(|| format!("writing dataset to {}", path.display()))?;
    }
    if let Some(path) = &settings.summary {
        io::write_summary(&dataset, &settings.title, path)
            .with_context(|| format!("writing summary to {}", path.display()))?;
    }

    let series = [Series::from_dataset(series_label(&settings.input), &dataset)];
    render(&settings.output, settings.kind, &settings.chart_spec(), &series)
        .with_context(|| format!("rendering {}", settings.output.display()))?;

    Ok(PlotReport {
        records: dataset.len(),
        rejected: dataset.rejected(),
        output: settings.output.clone(),
    })
}

/// A `LABEL=PATH` compare input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelledInput {
    /// Legend label.
    pub label: String,
    /// Harness log.
    pub path: PathBuf,
}

impl FromStr for LabelledInput {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (label, path) = match s.split_once('=') {
            Some((label, path)) => (label.trim().to_string(), PathBuf::from(path.trim())),
            None => {
                let path = PathBuf::from(s.trim());
                (series_label(&path), path)
            }
        };

        if label.is_empty() || path.as_os_str().is_empty() {
            return Err(format!("expected LABEL=PATH or PATH, got `{s}`"));
        }
        Ok(Self { label, path })
    }
}

/// Parse several logs with the same settings and draw one series each.
pub fn compare(
    settings: &Settings,
    inputs: &[LabelledInput],
    kind: ChartKind,
) -> anyhow::Result<Vec<(String, usize)>> {
    ImageFormat::from_path(&settings.output)?;
    let parser = settings.parser()?;

    let mut series = Vec::with_capacity(inputs.len());
    let mut counts = Vec::with_capacity(inputs.len());
    for input in inputs {
        let dataset = load_dataset(&input.path, &parser, None)
            .with_context(|| format!("loading series `{}`", input.label))?;
        counts.push((input.label.clone(), dataset.len()));
        series.push(Series::from_dataset(input.label.clone(), &dataset));
    }

    render(&settings.output, kind, &settings.chart_spec(), &series)
        .with_context(|| format!("rendering {}", settings.output.display()))?;

    Ok(counts)
}

fn series_label(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchviz_benchmarks::Preset;
    use std::fs;

    const LOG: &str = "\
INFO: starting benchmark suite
Filter/1_workers-4,8000000000,1
Filter/16_workers-4,2300000000,500000
Filter/x_workers-4,1,1
";

    fn filter_parser() -> ParserSettings {
        Settings {
            preset: Preset::Filter,
            ..Settings::default()
        }
        .parser()
        .unwrap()
    }

    #[test]
    fn test_load_dataset_writes_audit_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("resultsNew.csv");
        let audit = dir.path().join("parsed_resultsNew.csv");
        fs::write(&input, LOG).unwrap();

        let dataset = load_dataset(&input, &filter_parser(), Some(&audit)).unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.rejected(), 1);
        let audit_text = fs::read_to_string(&audit).unwrap();
        assert_eq!(audit_text.lines().count(), 3);
        assert!(audit_text.lines().all(|l| l.contains("Filter")));
    }

    #[test]
    fn test_load_dataset_rejects_empty_result() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("gol.csv");
        fs::write(&input, "Gol/512x512x16-8-1000,4500000000,1\n").unwrap();

        let err = load_dataset(&input, &filter_parser(), None).unwrap_err();
        assert!(matches!(err, BenchError::EmptyDataset { filtered: 0, .. }));
    }

    #[test]
    fn test_load_dataset_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_dataset(&dir.path().join("absent.csv"), &filter_parser(), None).unwrap_err();
        assert!(matches!(err, BenchError::MissingInputFile { .. }));
    }

    #[test]
    fn test_plot_checks_output_format_first() {
        let dir = tempfile::tempdir().unwrap();
        let audit = dir.path().join("audit.csv");
        let settings = Settings {
            input: dir.path().join("absent.csv"),
            filtered_output: Some(audit.clone()),
            output: dir.path().join("plot.gif"),
            ..Settings::default()
        };

        let err = plot(&settings, false).unwrap_err();
        assert!(err.to_string().contains("Unsupported chart format"));
        assert!(!audit.exists());
    }

    #[test]
    fn test_plot_writes_every_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("resultsNew.csv");
        fs::write(&input, LOG).unwrap();
        let settings = Settings {
            input,
            preset: Preset::Filter,
            filtered_output: Some(dir.path().join("parsed_resultsNew.csv")),
            output: dir.path().join("benchmark_plot.png"),
            json: Some(dir.path().join("dataset.json")),
            summary: Some(dir.path().join("summary.md")),
            width: 640,
            height: 400,
            ..Settings::default()
        };

        let report = plot(&settings, false).unwrap();

        assert_eq!(report.records, 2);
        assert_eq!(report.rejected, 1);
        assert_eq!(report.output, settings.output);
        for path in [
            dir.path().join("parsed_resultsNew.csv"),
            dir.path().join("benchmark_plot.png"),
            dir.path().join("dataset.json"),
            dir.path().join("summary.md"),
        ] {
            assert!(fs::metadata(&path).unwrap().len() > 0, "{}", path.display());
        }

        let restored = io::read_dataset_json(dir.path().join("dataset.json")).unwrap();
        assert_eq!(restored.len(), 2);
    }

    #[test]
    fn test_compare_draws_one_series_per_input() {
        let dir = tempfile::tempdir().unwrap();
        let shared = dir.path().join("shared.csv");
        let channels = dir.path().join("channels.csv");
        fs::write(&shared, LOG).unwrap();
        fs::write(&channels, "Filter/2_workers-4,5000000000,1\n").unwrap();
        let settings = Settings {
            preset: Preset::Filter,
            output: dir.path().join("comparison.svg"),
            ..Settings::default()
        };
        let inputs = [
            LabelledInput {
                label: "Shared Memory".into(),
                path: shared,
            },
            LabelledInput {
                label: "Pure Channels".into(),
                path: channels,
            },
        ];

        let counts = compare(&settings, &inputs, ChartKind::Line).unwrap();

        assert_eq!(
            counts,
            vec![
                ("Shared Memory".to_string(), 2),
                ("Pure Channels".to_string(), 1)
            ]
        );
        let svg = fs::read_to_string(&settings.output).unwrap();
        assert!(svg.contains("Shared Memory"));
        assert!(svg.contains("Pure Channels"));
    }

    #[test]
    fn test_labelled_input_parsing() {
        let input: LabelledInput = "Shared Memory=out/shared.csv".parse().unwrap();
        assert_eq!(input.label, "Shared Memory");
        assert_eq!(input.path, PathBuf::from("out/shared.csv"));

        let bare: LabelledInput = "results/channels.csv".parse().unwrap();
        assert_eq!(bare.label, "channels");

        assert!("=out.csv".parse::<LabelledInput>().is_err());
        assert!("label=".parse::<LabelledInput>().is_err());
    }
}
