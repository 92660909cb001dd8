#![warn(missing_docs)]
//! `hex-map` command line tool.
//!
//! Generates noise-painted sample maps, inspects map files, and normalizes
//! them by importing and re-exporting.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hex_map::generate::{TerrainSettings, paint_terrain};
use hex_map::grid::{GridLayout, GridSettings, HexGrid, Orientation};
use hex_map::map::{
    ImportOptions, MapDocument, MapStats, export_map, export_map_pretty, import_map_into,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Hex grid map tool.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a grid, paint noise-derived terrain onto it, and export it.
    Generate {
        #[arg(long, default_value_t = 16)]
        width: u32,
        #[arg(long, default_value_t = 12)]
        height: u32,
        #[arg(long, default_value_t = GridLayout::Rectangular)]
        layout: GridLayout,
        #[arg(long, default_value_t = Orientation::PointyTop)]
        orientation: Orientation,
        /// Visual hex radius in pixels.
        #[arg(long, default_value_t = 40.0)]
        radius: f64,
        /// Seed for the elevation noise.
        #[arg(long, default_value_t = 42)]
        seed: u32,
        #[arg(long, default_value = "generated")]
        name: String,
        #[arg(long, default_value = "")]
        tileset_url: String,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Import a map and print a summary of its cells.
    Inspect {
        file: PathBuf,
        /// Fail on any format version other than the current one.
        #[arg(long)]
        strict_version: bool,
    },
    /// Import a map and export it again.
    Normalize {
        file: PathBuf,
        #[arg(long)]
        strict_version: bool,
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(clap::Args, Debug)]
struct OutputArgs {
    /// Write to this file instead of stdout.
    #[arg(long, short)]
    output: Option<PathBuf>,
    /// Indent the JSON output.
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hex_map=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match Cli::parse().command {
        Command::Generate {
            width,
            height,
            layout,
            orientation,
            radius,
            seed,
            name,
            tileset_url,
            output,
        } => {
            let mut grid = GridSettings::new(width, height)
                .with_layout(layout)
                .with_orientation(orientation)
                .with_radius(radius)
                .build()?;
            let terrain = TerrainSettings {
                seed,
                ..TerrainSettings::default()
            };
            paint_terrain(&mut grid, &terrain);
            tracing::info!(cells = grid.len(), %layout, %orientation, "generated grid");
            write_map(&grid, &name, &tileset_url, &output)
        }
        Command::Inspect {
            file,
            strict_version,
        } => inspect(&file, strict_version),
        Command::Normalize {
            file,
            strict_version,
            output,
        } => {
            let json = read_file(&file)?;
            let doc = MapDocument::from_json(&json)
                .with_context(|| format!("parsing {}", file.display()))?;
            let (name, tileset_url) = (doc.name.clone(), doc.tileset_url.clone());
            let grid: HexGrid = doc
                .into_grid(ImportOptions { strict_version })
                .with_context(|| format!("importing {}", file.display()))?;
            write_map(&grid, &name, &tileset_url, &output)
        }
    }
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn write_map(grid: &HexGrid, name: &str, tileset_url: &str, output: &OutputArgs) -> Result<()> {
    let json = if output.pretty {
        export_map_pretty(grid, name, tileset_url)?
    } else {
        export_map(grid, name, tileset_url)?
    };
    match &output.output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(path = %path.display(), "map written");
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn inspect(path: &Path, strict_version: bool) -> Result<()> {
    let json = read_file(path)?;
    let grid: HexGrid = import_map_into(&json, ImportOptions { strict_version })
        .with_context(|| format!("importing {}", path.display()))?;
    let settings = grid.settings();
    let stats = MapStats::from_grid(&grid);

    println!(
        "{}: {}x{} {} {}, radius {}",
        path.display(),
        settings.width,
        settings.height,
        settings.layout,
        settings.orientation,
        settings.radius
    );
    println!("cells: {} ({} with satellite data)", stats.cells, stats.painted);
    if let (Some(ratio), Some(mean_cost)) = (stats.passable_ratio(), stats.mean_cost()) {
        println!("passable: {} ({:.1}%)", stats.passable, 100.0 * ratio);
        println!("mean movement cost: {mean_cost:.2}");
        for (tileset, count) in &stats.tilesets {
            println!("  tileset {tileset:?}: {count}");
        }
    }
    Ok(())
}
