//! CLI tool to resolve a runway condition code for dispatch.
//!
//! Takes up to two contaminant descriptions with coverage, prints the
//! resulting RCC, the advisories dispatch must act on and, when a runway
//! and wind are given, the crosswind check.

use anyhow::Context;
use clap::Parser;
use rcc_cli::{logging, Config, DispatchReport, OutputFormat};
use rcc_core::{Coverage, RccQuery, SurfaceKind, Wind};

/// Resolve a runway condition code (RCC) from reported contaminants
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Runway surface: gravel or paved (default from RCC_DEFAULT_SURFACE)
    #[arg(long)]
    surface: Option<SurfaceKind>,

    /// First contaminant description, exactly as listed by rcc_catalog
    #[arg(long, default_value = "")]
    contaminant1: String,

    /// First contaminant coverage in percent (non-numeric counts as 0)
    #[arg(long, default_value = "0")]
    coverage1: String,

    /// Second contaminant description
    #[arg(long, default_value = "")]
    contaminant2: String,

    /// Second contaminant coverage in percent
    #[arg(long, default_value = "0")]
    coverage2: String,

    /// Runway designator for the crosswind check, e.g. 24 or 06L
    #[arg(long, requires = "wind_dir")]
    runway: Option<String>,

    /// Wind direction in degrees
    #[arg(long, requires_all = ["runway", "wind_speed"])]
    wind_dir: Option<f64>,

    /// Wind speed in knots
    #[arg(long, requires = "wind_dir")]
    wind_speed: Option<f64>,

    /// Gust speed in knots
    #[arg(long, requires = "wind_speed")]
    gust: Option<f64>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = Config::from_env();
    logging::init(&config)?;

    let surface = args.surface.unwrap_or(config.default_surface);
    let query = RccQuery::from_descriptions(
        surface,
        &args.contaminant1,
        Coverage::parse(&args.coverage1),
        &args.contaminant2,
        Coverage::parse(&args.coverage2),
    );

    for (description, segment) in [
        (&args.contaminant1, &query.segment1),
        (&args.contaminant2, &query.segment2),
    ] {
        if !description.is_empty() && segment.contaminant.is_none() {
            tracing::warn!(%surface, description = %description, "contaminant not in catalog");
        }
    }

    let wind = match (&args.runway, args.wind_dir, args.wind_speed) {
        (Some(runway), Some(direction), Some(speed)) => {
            let mut wind = Wind::new(direction, speed);
            wind.gust_kt = args.gust;
            Some((runway.as_str(), wind))
        }
        _ => None,
    };

    let report = DispatchReport::build(
        &query,
        [args.contaminant1.as_str(), args.contaminant2.as_str()],
        wind,
    )
    .context("invalid wind input")?;
    tracing::info!(%surface, code = %report.result.code, "runway condition code resolved");

    match config.output_for(args.json) {
        OutputFormat::Json => println!("{}", report.to_json()?),
        OutputFormat::Text => print!("{}", report.render_text()),
    }
    Ok(())
}
