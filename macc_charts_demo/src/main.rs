// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders a marginal abatement cost chart to SVG.
//!
//! Rows are read from a JSON array shaped like the host data (`category`,
//! `marginal_Abatement_Cost`, `abatement_Capacity`, `abatement_Alternative`). Without
//! `--input`, a built-in sample is used.

mod svg;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use macc_charts::{ChartConfig, ChartError, ChartProps, MaccChart, RawRecord, records_from_raw};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "macc_charts_demo",
    version,
    about = "Render a marginal abatement cost chart to SVG",
    after_help = "Examples:
  macc_charts_demo                                 Render the built-in sample
  macc_charts_demo --input rows.json -o out.svg    Render rows from a JSON file
  macc_charts_demo --width 900 --height 500        Larger drawing surface
  RUST_LOG=debug macc_charts_demo                  Show layout diagnostics"
)]
struct Args {
    /// JSON array of rows to chart
    #[arg(short, long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// JSON chart configuration; missing fields keep their defaults
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Where to write the SVG
    #[arg(short, long, default_value = "macc_chart.svg", value_name = "PATH")]
    output: PathBuf,

    /// Drawing surface width in pixels
    #[arg(long, default_value_t = 600.0)]
    width: f64,

    /// Drawing surface height in pixels
    #[arg(long, default_value_t = 400.0)]
    height: f64,

    /// Render all text bold
    #[arg(long)]
    bold_text: bool,

    /// Font size for the axis titles
    #[arg(long, value_name = "PX")]
    header_font_size: Option<f64>,
}

#[derive(Debug, thiserror::Error)]
enum DemoError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error(transparent)]
    Chart(#[from] ChartError),
}

const SAMPLE_ROWS: &str = r#"[
  { "category": "Energy", "marginal_Abatement_Cost": -42.0, "abatement_Capacity": 18.0, "abatement_Alternative": "LED lighting" },
  { "category": "Buildings", "marginal_Abatement_Cost": -25.5, "abatement_Capacity": 30.0, "abatement_Alternative": "Insulation retrofits" },
  { "category": "Energy", "marginal_Abatement_Cost": -10.0, "abatement_Capacity": 100.0, "abatement_Alternative": "Solar PV" },
  { "category": "Transport", "marginal_Abatement_Cost": 4.0, "abatement_Capacity": 45.0, "abatement_Alternative": "Electric buses" },
  { "category": "Energy", "marginal_Abatement_Cost": 5.0, "abatement_Capacity": 50.0, "abatement_Alternative": "Onshore wind" },
  { "category": "Industry", "marginal_Abatement_Cost": 38.0, "abatement_Capacity": 25.0, "abatement_Alternative": "Process heat pumps" },
  { "category": "Industry", "marginal_Abatement_Cost": 72.0, "abatement_Capacity": 12.0, "abatement_Alternative": "Carbon capture" }
]"#;

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, DemoError> {
    let text = std::fs::read_to_string(path).map_err(|source| DemoError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| DemoError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn load_rows(input: Option<&Path>) -> Result<Vec<RawRecord>, DemoError> {
    match input {
        Some(path) => read_json(path),
        None => serde_json::from_str(SAMPLE_ROWS).map_err(|source| DemoError::Json {
            path: PathBuf::from("<built-in sample>"),
            source,
        }),
    }
}

fn run(args: &Args) -> Result<(), DemoError> {
    let rows = load_rows(args.input.as_deref())?;
    let records = records_from_raw(rows)?;
    tracing::info!(rows = records.len(), "loaded records");

    let config: ChartConfig = match &args.config {
        Some(path) => read_json(path)?,
        None => ChartConfig::default(),
    };

    let props = ChartProps {
        bold_text: args.bold_text,
        header_font_size: args.header_font_size,
        ..ChartProps::new(&records, args.width, args.height)
    };
    let scene = MaccChart::new(config).scene(props)?;

    let mut surface = svg::SvgSurface::default();
    scene.render_to(&mut surface);
    std::fs::write(&args.output, surface.to_svg_string()).map_err(|source| DemoError::Write {
        path: args.output.clone(),
        source,
    })?;
    tracing::info!(path = %args.output.display(), items = scene.items.len(), "wrote chart");
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
