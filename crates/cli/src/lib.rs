// Copyright 2025 benchviz Contributors
// SPDX-License-Identifier: Apache-2.0

//! CLI for benchviz.
//!
//! This crate provides the `benchviz` command: it filters a benchmark
//! harness log, parses worker counts out of benchmark names and renders
//! the timings as a chart.

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod config;
pub mod logging;
pub mod pipeline;

use crate::config::Settings;
use crate::logging::LogFormat;
use crate::pipeline::LabelledInput;
use anyhow::Context;
use benchviz_benchmarks::{Preset, TimeUnit};
use benchviz_chart::ChartKind;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

/// benchviz CLI.
#[derive(Parser, Debug)]
#[command(name = "benchviz")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to ./benchviz.toml when present).
    #[arg(short, long, global = true, env = "BENCHVIZ_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log output format.
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Subcommand to run (defaults to `plot`).
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a benchmark log and render it as a chart.
    ///
    /// Writes the filtered lines to the audit file, then the chart, and
    /// optionally a JSON dump and a Markdown summary of the dataset.
    Plot(PlotArgs),

    /// Render several benchmark logs as one series each.
    Compare(CompareArgs),

    /// List built-in presets.
    Presets,

    /// Print the resolved configuration as TOML.
    Config(PlotArgs),
}

/// Marker, grammar and unit options.
#[derive(Args, Debug, Default, Clone)]
pub struct ParseArgs {
    /// Built-in marker and grammar: gol or filter.
    #[arg(short, long)]
    pub preset: Option<Preset>,

    /// Line marker overriding the preset's.
    #[arg(short, long)]
    pub marker: Option<String>,

    /// Name grammar (regex with 1 or 2 capture groups) overriding the preset's.
    #[arg(short, long)]
    pub grammar: Option<String>,

    /// Unit of the raw time column: ns, us, ms or s.
    #[arg(short, long)]
    pub unit: Option<TimeUnit>,
}

/// Chart options.
#[derive(Args, Debug, Default, Clone)]
pub struct ChartArgs {
    /// Chart image path (.png or .svg).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Chart kind: bar or line.
    #[arg(short, long)]
    pub kind: Option<ChartKind>,

    /// Chart title.
    #[arg(long)]
    pub title: Option<String>,

    /// X axis label.
    #[arg(long)]
    pub x_label: Option<String>,

    /// Y axis label.
    #[arg(long)]
    pub y_label: Option<String>,

    /// Image width in pixels.
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels.
    #[arg(long)]
    pub height: Option<u32>,

    /// Fixed Y axis upper bound in seconds.
    #[arg(long)]
    pub y_max: Option<f64>,
}

/// Options of `plot`.
#[derive(Args, Debug, Default, Clone)]
pub struct PlotArgs {
    /// Benchmark log to read.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Where to write the filtered lines.
    #[arg(long)]
    pub filtered_output: Option<PathBuf>,

    /// Do not write the filtered lines.
    #[arg(long, conflicts_with = "filtered_output")]
    pub no_filtered_output: bool,

    /// Write the parsed dataset as JSON.
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Write a Markdown summary.
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Print the parsed records.
    #[arg(short, long)]
    pub verbose: bool,

    #[command(flatten)]
    #[allow(missing_docs)]
    pub parse: ParseArgs,

    #[command(flatten)]
    #[allow(missing_docs)]
    pub chart: ChartArgs,
}

/// Options of `compare`.
#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    /// Inputs as LABEL=PATH (or PATH, labelled by file stem).
    #[arg(required = true)]
    pub inputs: Vec<LabelledInput>,

    #[command(flatten)]
    #[allow(missing_docs)]
    pub parse: ParseArgs,

    #[command(flatten)]
    #[allow(missing_docs)]
    pub chart: ChartArgs,
}

impl Settings {
    /// Apply marker, grammar and unit flags.
    pub fn apply_parse_args(&mut self, args: &ParseArgs) {
        if let Some(preset) = args.preset {
            self.preset = preset;
        }
        if let Some(marker) = &args.marker {
            self.marker = Some(marker.clone());
        }
        if let Some(grammar) = &args.grammar {
            self.grammar = Some(grammar.clone());
        }
        if let Some(unit) = args.unit {
            self.unit = unit;
        }
    }

    /// Apply chart flags.
    pub fn apply_chart_args(&mut self, args: &ChartArgs) {
        if let Some(output) = &args.output {
            self.output = output.clone();
        }
        if let Some(kind) = args.kind {
            self.kind = kind;
        }
        if let Some(title) = &args.title {
            self.title = title.clone();
        }
        if let Some(x_label) = &args.x_label {
            self.x_label = x_label.clone();
        }
        if let Some(y_label) = &args.y_label {
            self.y_label = y_label.clone();
        }
        if let Some(width) = args.width {
            self.width = width;
        }
        if let Some(height) = args.height {
            self.height = height;
        }
        if args.y_max.is_some() {
            self.y_max = args.y_max;
        }
    }

    /// Apply every `plot` flag.
    pub fn apply_plot_args(&mut self, args: &PlotArgs) {
        if let Some(input) = &args.input {
            self.input = input.clone();
        }
        if let Some(path) = &args.filtered_output {
            self.filtered_output = Some(path.clone());
        }
        if args.no_filtered_output {
            self.filtered_output = None;
        }
        if let Some(path) = &args.json {
            self.json = Some(path.clone());
        }
        if let Some(path) = &args.summary {
            self.summary = Some(path.clone());
        }
        self.apply_parse_args(&args.parse);
        self.apply_chart_args(&args.chart);
    }
}

/// Run the CLI with the process arguments.
pub fn run() -> anyhow::Result<()> {
    // .env may carry BENCHVIZ_CONFIG and RUST_LOG, so load it before both
    // argument parsing and the subscriber.
    load_dotenv(dotenvy::dotenv().map(drop))?;
    let cli = Cli::parse();
    logging::init(cli.log_format);

    execute(cli)
}

fn load_dotenv(loaded: dotenvy::Result<()>) -> anyhow::Result<()> {
    match loaded {
        Err(err) if !err.not_found() => Err(err).context("loading .env"),
        _ => Ok(()),
    }
}

/// Execute a parsed command line.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    let command = cli.command.unwrap_or(Commands::Plot(PlotArgs::default()));
    if let Commands::Presets = command {
        print_presets();
        return Ok(());
    }

    let mut settings = Settings::load(cli.config.as_deref()).context("loading configuration")?;

    match command {
        Commands::Plot(args) => {
            settings.apply_plot_args(&args);
            debug!(?settings, "Resolved settings");

            let report = pipeline::plot(&settings, args.verbose)?;

            println!(
                "Parsed {} benchmark records ({} lines rejected)",
                report.records, report.rejected
            );
            if let Some(path) = settings.audit_path() {
                println!("Filtered lines written to {}", path.display());
            }
            println!("Plot saved as {}", report.output.display());
            Ok(())
        }
        Commands::Compare(args) => {
            settings.apply_parse_args(&args.parse);
            settings.apply_chart_args(&args.chart);
            let kind = args.chart.kind.unwrap_or(ChartKind::Line);

            let counts = pipeline::compare(&settings, &args.inputs, kind)?;

            for (label, records) in &counts {
                println!("  - {label}: {records} records");
            }
            println!("Plot saved as {}", settings.output.display());
            Ok(())
        }
        Commands::Config(args) => {
            settings.apply_plot_args(&args);
            print!("{}", toml::to_string_pretty(&settings)?);
            Ok(())
        }
        Commands::Presets => Ok(()),
    }
}

fn print_presets() {
    println!("{:<8} {:<8} GRAMMAR", "PRESET", "MARKER");
    for preset in Preset::ALL {
        println!(
            "{:<8} {:<8} {}",
            preset.name(),
            preset.marker(),
            preset.grammar()
        );
    }
}
