//! Hotel Bookings CLI Application
//!
//! This is the command-line interface for the hotel-bookings analysis.
//! It uses the hotel-bookings library and adds:
//! - Configuration files (TOML) with command-line overrides
//! - Text and JSON report output
//! - Chart rendering into an output directory

use anyhow::{Context, Result};
use clap::Parser;
use hotel_bookings::{AnalysisOutcome, Analyzer, ChartRenderer};
use std::path::{Path, PathBuf};

mod config;
mod report;

use config::{AppConfig, OutputFormat};

/// Hotel Bookings - Analyze a hotel-bookings CSV export
#[derive(Parser, Debug)]
#[command(name = "hotel-bookings")]
#[command(about = "Clean and analyze hotel booking data, render charts", long_about = None)]
#[command(version)]
struct Args {
    /// Path to the bookings CSV (default: dataset/hotel_bookings.csv)
    #[arg(short, long, value_name = "FILE")]
    data: Option<PathBuf>,

    /// Directory charts are written to (default: charts)
    #[arg(long, value_name = "DIR")]
    charts_dir: Option<PathBuf>,

    /// Skip chart rendering
    #[arg(long)]
    no_charts: bool,

    /// Report format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Output file for the report (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Path to configuration file (config.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::info!("Hotel Bookings CLI v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using analysis library v{}", hotel_bookings::VERSION);

    let config = resolve_config(&args)?;
    log::debug!("Effective configuration: {:?}", config);

    let analyzer = Analyzer::new().with_config(config.analysis.clone());
    let outcome = analyzer
        .run(&config.input.dataset)
        .with_context(|| format!("Failed to analyze dataset: {:?}", config.input.dataset))?;

    write_report(&outcome, &config)?;

    if config.output.render_charts {
        let renderer =
            ChartRenderer::new(&config.output.charts_dir).with_config(config.output.chart);
        let written = renderer
            .render_all(&outcome.report)
            .with_context(|| format!("Failed to render charts into {:?}", renderer.output_dir()))?;
        log::info!("{} charts written to {:?}", written.len(), renderer.output_dir());
    } else {
        log::info!("Chart rendering disabled");
    }

    Ok(())
}

/// Load the config file (if any) and apply command-line overrides
fn resolve_config(args: &Args) -> Result<AppConfig> {
    let mut config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from: {:?}", path);
            config::load_config(path)?
        }
        None => AppConfig::default(),
    };

    if let Some(data) = &args.data {
        config.input.dataset = data.clone();
    }
    if let Some(dir) = &args.charts_dir {
        config.output.charts_dir = dir.clone();
    }
    if args.no_charts {
        config.output.render_charts = false;
    }
    if let Some(format) = args.format {
        config.output.format = format;
    }
    if let Some(output) = &args.output {
        config.output.file = Some(output.clone());
    }

    Ok(config)
}

/// Render the report in the configured format and write it out
fn write_report(outcome: &AnalysisOutcome, config: &AppConfig) -> Result<()> {
    let rendered = match config.output.format {
        OutputFormat::Txt => report::render_text(outcome).context("Failed to format report")?,
        OutputFormat::Json => {
            serde_json::to_string_pretty(outcome).context("Failed to serialize report")?
        }
    };

    match &config.output.file {
        Some(path) => write_file(path, &rendered),
        None => {
            println!("{}", rendered);
            Ok(())
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {:?}", parent))?;
    }
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write report: {:?}", path))?;
    log::info!("Report written to {:?}", path);
    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
