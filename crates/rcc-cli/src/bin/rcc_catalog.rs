//! CLI tool to list the runway contaminant catalog.

use clap::Parser;
use rcc_cli::{logging, Config, OutputFormat};
use rcc_core::catalog::{self, CatalogEntry};
use rcc_core::SurfaceKind;

/// List contaminant descriptions with their runway condition codes
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Only list rows for this surface (gravel or paved)
    #[arg(long)]
    surface: Option<SurfaceKind>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = Config::from_env();
    logging::init(&config)?;

    let rows: Vec<&CatalogEntry> = match args.surface {
        Some(surface) => catalog::entries_for(surface).collect(),
        None => catalog::entries().iter().collect(),
    };
    tracing::debug!(count = rows.len(), "listing catalog rows");

    match config.output_for(args.json) {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        OutputFormat::Text => {
            println!("{:<7} {:>3} {:>6} {:>4}  DESCRIPTION", "SURFACE", "RCC", "XW KT", "DXP");
            for row in rows {
                println!(
                    "{:<7} {:>3} {:>6} {:>4}  {}",
                    row.surface.to_string(),
                    row.code,
                    row.max_crosswind_kt,
                    if row.call_dxp { "yes" } else { "" },
                    row.description()
                );
            }
        }
    }
    Ok(())
}
