//! CLI tool to compute headwind and crosswind for a runway.

use anyhow::Context;
use clap::Parser;
use rcc_cli::{logging, Config, OutputFormat};
use rcc_core::{components, runway_heading, Wind};

/// Headwind/crosswind components for a runway designator and reported wind
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Runway designator, e.g. 24 or 33R
    #[arg(long)]
    runway: String,

    /// Wind direction in degrees
    #[arg(long)]
    wind_dir: f64,

    /// Wind speed in knots
    #[arg(long)]
    wind_speed: f64,

    /// Gust speed in knots
    #[arg(long)]
    gust: Option<f64>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = Config::from_env();
    logging::init(&config)?;

    let heading = runway_heading(&args.runway)
        .with_context(|| format!("bad runway '{}'", args.runway))?;
    let mut wind = Wind::new(args.wind_dir, args.wind_speed);
    wind.gust_kt = args.gust;

    let steady = components(f64::from(heading), &wind)?;
    let gust = wind
        .gust_kt
        .map(|gust_kt| components(f64::from(heading), &Wind::new(wind.direction_deg, gust_kt)))
        .transpose()?;

    match config.output_for(args.json) {
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "runway": args.runway.trim().to_uppercase(),
                "runway_heading_deg": heading,
                "wind": wind,
                "steady": steady,
                "gust": gust,
            }))?
        ),
        OutputFormat::Text => {
            println!("Runway {} ({:03}°)", args.runway.trim().to_uppercase(), heading);
            println!(
                "  Steady: headwind {:.1} kt, crosswind {:.1} kt",
                steady.headwind_kt, steady.crosswind_kt
            );
            if let Some(gust) = gust {
                println!(
                    "  Gust:   headwind {:.1} kt, crosswind {:.1} kt",
                    gust.headwind_kt, gust.crosswind_kt
                );
            }
        }
    }
    Ok(())
}
