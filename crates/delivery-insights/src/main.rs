mod bootstrap;
mod report;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use delivery_core::calendar;
use delivery_core::error::PipelineError;
use delivery_data::filter::ReportFilter;
use delivery_data::pipeline;
use tracing::{info, warn};

use report::{CompanyReport, DeliverersReport, RestaurantsReport};

// ── CLI ───────────────────────────────────────────────────────────────────────

/// Which dashboard page to compute artifacts for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ReportView {
    Company,
    Deliverers,
    Restaurants,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Pretty-printed JSON artifacts for the presentation layer.
    Json,
    /// A short human-readable summary.
    Text,
}

/// Compute dashboard artifacts from the raw delivery order export.
#[derive(Parser, Debug)]
#[command(name = "delivery-insights", version, about)]
struct Cli {
    /// Path to the raw order export (read-only).
    #[arg(long, default_value = "dataset/train-delivery.csv")]
    data: PathBuf,

    /// Report page to compute.
    #[arg(long, value_enum, default_value_t = ReportView::Company)]
    view: ReportView,

    /// Keep orders strictly before this date (DD-MM-YYYY).
    #[arg(long)]
    before: Option<String>,

    /// Accepted road-traffic densities, comma-separated. Default: all.
    #[arg(long, value_delimiter = ',')]
    traffic: Vec<String>,

    /// Accepted weather conditions, comma-separated. Default: all.
    /// Only the deliverers and restaurants views filter on weather.
    #[arg(long, value_delimiter = ',')]
    weather: Vec<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Log level filter (error, warn, info, debug, trace).
    #[arg(long, default_value = "info")]
    log_level: String,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    bootstrap::setup_logging(&cli.log_level)?;

    info!("delivery-insights v{} starting", env!("CARGO_PKG_VERSION"));

    let filter = build_filter(&cli)?;
    let result = pipeline::run_pipeline(&cli.data)?;
    let records = filter.apply(&result.records);
    info!(
        "{} of {} clean records selected by the report filters",
        records.len(),
        result.records.len()
    );

    let rendered = match (cli.view, cli.format) {
        (ReportView::Company, OutputFormat::Json) => {
            serde_json::to_string_pretty(&CompanyReport::build(&records))?
        }
        (ReportView::Company, OutputFormat::Text) => CompanyReport::build(&records).text_summary(),
        (ReportView::Deliverers, OutputFormat::Json) => {
            serde_json::to_string_pretty(&DeliverersReport::build(&records))?
        }
        (ReportView::Deliverers, OutputFormat::Text) => {
            DeliverersReport::build(&records).text_summary()
        }
        (ReportView::Restaurants, OutputFormat::Json) => {
            serde_json::to_string_pretty(&RestaurantsReport::build(&records))?
        }
        (ReportView::Restaurants, OutputFormat::Text) => {
            RestaurantsReport::build(&records).text_summary()
        }
    };
    println!("{rendered}");

    Ok(())
}

/// Translate CLI filter options into a [`ReportFilter`].
fn build_filter(cli: &Cli) -> Result<ReportFilter> {
    let order_date_before = match &cli.before {
        Some(raw) => Some(calendar::parse_order_date(raw).map_err(|_| {
            PipelineError::Config(format!("--before expects DD-MM-YYYY, got \"{raw}\""))
        })?),
        None => None,
    };

    let traffic_densities = if cli.traffic.is_empty() {
        None
    } else {
        Some(cli.traffic.clone())
    };

    // The company view does not take a weather filter.
    let weather_conditions = if cli.weather.is_empty() {
        None
    } else if cli.view == ReportView::Company {
        warn!("--weather is ignored by the company view");
        None
    } else {
        Some(cli.weather.clone())
    };

    Ok(ReportFilter {
        order_date_before,
        traffic_densities,
        weather_conditions,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
