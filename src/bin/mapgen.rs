use clap::Parser;
use townmap::config::{load_config, save_config};
use townmap::map_generation::presets::{MapPreset, cross_layout, get_map_preset};
use townmap::{TownmapError, TownmapResult, WorldMap, generate_map_seeded};
use tracing_subscriber::EnvFilter;

mod mapgen {
    pub mod cli_utils;
    pub mod params_builder;
}

use mapgen::cli_utils::*;
use mapgen::params_builder::ParamsBuilder;

#[derive(Parser, Clone)]
#[command(name = "mapgen")]
#[command(about = "Generate a town map: connected regions of numbered places")]
struct Args {
    /// Number of regions (towns); defaults to the config file value
    #[arg(long)]
    regions: Option<u32>,

    /// Places per region (format: MIN,MAX)
    #[arg(long)]
    places: Option<String>,

    /// Docking attempts allowed per region
    #[arg(long)]
    max_attempts: Option<u32>,

    /// Random seed for reproducible generation
    #[arg(long)]
    seed: Option<u64>,

    /// Layout preset (random, cross)
    #[arg(long, default_value = "random")]
    preset: String,

    /// Output file path relative to maps/ directory (e.g., "town.bin" or "campaign/town.bin")
    #[arg(long)]
    output: Option<String>,

    /// Save the map to the configured default file when no --output is given
    #[arg(long)]
    save: bool,

    /// Skip printing the grid
    #[arg(short, long)]
    quiet: bool,

    /// Store the effective generation settings as the new defaults
    #[arg(long)]
    save_config: bool,
}

fn init_logging(quiet: bool) {
    let default_level = if quiet { "warn" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> TownmapResult<()> {
    let args = Args::parse();
    init_logging(args.quiet);

    let mut config = load_config();

    // Parse and validate all CLI arguments
    let places = args.places.as_deref().map(parse_place_range).transpose()?;
    let output = match args.output.clone() {
        Some(output) => Some(output),
        None if args.save => Some(config.output.map_file_path.clone()),
        None => None,
    };
    if let Some(output) = &output {
        validate_output_path(output)?;
    }
    let preset = get_map_preset(&args.preset).ok_or_else(|| TownmapError::InvalidMapData {
        reason: format!(
            "Unknown preset: '{}'. Available presets: random, cross",
            args.preset
        ),
    })?;

    let (map, seed) = match preset {
        MapPreset::Cross => (cross_layout()?, None),
        MapPreset::Random => {
            let (params, seed) = ParamsBuilder::new(&config.generation)
                .regions(args.regions)
                .places(places)
                .max_attempts(args.max_attempts)
                .seed(args.seed)
                .build()?;

            if args.save_config {
                config.generation.region_count = params.region_count;
                config.generation.min_places = params.min_places;
                config.generation.max_places = params.max_places;
                config.generation.max_attempts = params.max_attempts.into();
                save_config(&config)?;
            }

            (generate_map_seeded(params, seed)?, Some(seed))
        }
    };

    print_map_summary(&map, seed, config.output.print_grid && !args.quiet);

    if let Some(output) = output {
        save_map(&map, &output)?;
    }

    Ok(())
}

fn save_map(map: &WorldMap, output: &str) -> TownmapResult<()> {
    let full_path = map.save_to_file(output)?;
    println!("Map saved successfully to: {}", full_path.display());
    Ok(())
}
