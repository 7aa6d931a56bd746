//! # Biome Probe
//!
//! Command-line tool to inspect the terrain of a tile or a region.
//!
//! ```text
//! biome_probe <col> <row> [width height] [--config terrain.toml]
//! ```
//!
//! Set `RUST_LOG=strata_terrain=debug` to see classifier and region logs.

use std::process::ExitCode;

use strata_fixed::{Fixed, FixedResult, Vec3};
use strata_terrain::{noise, Biome, BiomeClassifier, BiomeRegion, TerrainConfig};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Parsed command line.
struct Args {
    col: i64,
    row: i64,
    size: Option<(u32, u32)>,
    config: Option<String>,
}

fn print_usage() {
    println!("Usage: biome_probe <col> <row> [width height] [--config <terrain.toml>]");
    println!();
    println!("  <col> <row>       Tile to probe (or region origin)");
    println!("  width height      Print a biome map of the region instead");
    println!("  --config <path>   Terrain config (defaults to the ledger's values)");
}

fn parse_args(raw: &[String]) -> Result<Args, String> {
    let mut positional = Vec::new();
    let mut config = None;

    let mut iter = raw.iter();
    while let Some(arg) = iter.next() {
        if arg == "--config" {
            let path = iter.next().ok_or("--config needs a path")?;
            config = Some(path.clone());
        } else {
            positional.push(arg.as_str());
        }
    }

    let number = |text: &str| -> Result<i64, String> {
        text.parse().map_err(|e| format!("invalid number '{text}': {e}"))
    };
    let extent = |text: &str| -> Result<u32, String> {
        text.parse().map_err(|e| format!("invalid size '{text}': {e}"))
    };

    match *positional.as_slice() {
        [col, row] => Ok(Args {
            col: number(col)?,
            row: number(row)?,
            size: None,
            config,
        }),
        [col, row, width, height] => Ok(Args {
            col: number(col)?,
            row: number(row)?,
            size: Some((extent(width)?, extent(height)?)),
            config,
        }),
        _ => Err("expected <col> <row> or <col> <row> <width> <height>".to_string()),
    }
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("strata_terrain=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .init();
}

fn probe_tile(classifier: &BiomeClassifier, col: i64, row: i64) -> FixedResult<()> {
    let amplitude = classifier.amplitude();
    let point = Vec3::new(
        Fixed::from_int(col).safe_div(amplitude)?,
        Fixed::ZERO,
        Fixed::from_int(row).safe_div(amplitude)?,
    );
    let sample = noise(point)?;
    let elevation = classifier.elevation(col, row)?;
    let moisture = classifier.moisture(col, row)?;
    let biome = classifier.classify(elevation, moisture);

    println!("Tile ({col}, {row})");
    println!("  noise:      {sample:?}");
    println!("  detail:     {:?}", classifier.detail(col, row)?);
    println!("  elevation:  {elevation:?}");
    println!("  moisture:   {moisture:?}");
    println!("  biome:      {biome} (id {})", biome.id());
    Ok(())
}

fn print_region(region: &BiomeRegion) {
    println!(
        "Region ({}, {}) {}x{}",
        region.origin_col(),
        region.origin_row(),
        region.width(),
        region.height()
    );
    for row in region.rows() {
        let line: String = row
            .iter()
            .map(|tile| tile.map_or('?', Biome::symbol))
            .collect();
        println!("  {line}");
    }

    println!();
    for (biome, count) in region.histogram() {
        println!("  {} {:<28} {count}", biome.symbol(), biome.name());
    }
    if !region.is_complete() {
        println!("  ? {:<28} {}", "(failed)", region.failures().len());
    }
}

fn main() -> ExitCode {
    init_logging();

    let raw: Vec<String> = std::env::args().skip(1).collect();
    let args = match parse_args(&raw) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("Error: {message}");
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    let classifier = match &args.config {
        Some(path) => TerrainConfig::load(path).and_then(|config| BiomeClassifier::new(&config)),
        None => Ok(BiomeClassifier::ledger()),
    };
    let classifier = match classifier {
        Ok(classifier) => classifier,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match args.size {
        Some((width, height)) => {
            let region = classifier.sample_region(args.col, args.row, width, height);
            print_region(&region);
            if region.is_complete() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        None => match probe_tile(&classifier, args.col, args.row) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: tile ({}, {}) failed: {e}", args.col, args.row);
                ExitCode::FAILURE
            }
        },
    }
}
