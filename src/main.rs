#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

use std::fs;
use std::path::PathBuf;

use anyhow::Context as _;
use serde::Serialize;

use dungeon::{generate_seeded, DungeonConfig, GenerationStats, Room, Tile};

/// Generate a room-and-maze dungeon and print it.
#[derive(Debug, clap::Parser)]
#[command(version)]
struct Args {
    /// JSON file with generation settings. Missing fields take their defaults.
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Seed for the random source. A random seed is chosen (and logged) if omitted.
    #[arg(long, short = 's')]
    seed: Option<u64>,

    /// Overrides the grid width from the config.
    #[arg(long)]
    width: Option<i32>,

    /// Overrides the grid height from the config.
    #[arg(long)]
    height: Option<i32>,

    #[arg(long, value_enum, default_value = "text")]
    format: Format,

    /// Additional logging to stderr. Repeat for more.
    #[arg(long = "verbose", short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum Format {
    /// Bordered character map followed by a summary line.
    Text,
    /// Seed, settings, stats and every surviving tile.
    Json,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    seed: u64,
    config: &'a DungeonConfig,
    stats: &'a GenerationStats,
    rooms: &'a [Room],
    tiles: Vec<Tile>,
}

fn main() -> Result<(), anyhow::Error> {
    use simplelog::LevelFilter::{Debug, Info, Off, Trace};

    let args = <Args as clap::Parser>::parse();

    simplelog::TermLogger::init(
        match args.verbose {
            0 => Info,
            1 => Debug,
            _ => Trace,
        },
        simplelog::ConfigBuilder::new()
            .set_location_level(Off)
            .build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read config file {}", path.display()))?;
            DungeonConfig::from_json(&text)
                .with_context(|| format!("invalid config file {}", path.display()))?
        }
        None => DungeonConfig::default(),
    };
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("seed {seed}");

    let dungeon = generate_seeded(&config, seed).context("cannot generate dungeon")?;

    match args.format {
        Format::Text => {
            let stats = dungeon.stats();
            println!("{dungeon}");
            println!(
                "{} rooms, {} corridors ({} discarded), {} of {} connectors opened, {} tiles trimmed, {} tiles",
                stats.rooms,
                stats.corridor_regions,
                stats.discarded_walks,
                stats.doors,
                stats.connectors,
                stats.trimmed,
                stats.tiles,
            );
        }
        Format::Json => {
            let output = JsonOutput {
                seed,
                config: &config,
                stats: dungeon.stats(),
                rooms: dungeon.rooms(),
                tiles: dungeon.tiles().collect(),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}
