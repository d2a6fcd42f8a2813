//! Map Information Utility
//!
//! Loads a saved map, validates it and prints statistics about its regions.
//!
//! # Example Usage
//! ```bash
//! cargo run --bin map_info -- --input town.bin
//!
//! # Include per-region adjacency and place positions
//! cargo run --bin map_info -- --input town.bin --verbose
//! ```

use clap::Parser;
use townmap::map::analysis::{all_places_reachable, region_adjacency, regions_connected};
use townmap::{TownmapResult, WorldMap, available_moves};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "map_info")]
#[command(about = "Display map information and statistics")]
struct Args {
    /// Input map file (in maps/ directory)
    #[arg(long)]
    input: String,

    /// Verbose output with per-region breakdowns
    #[arg(short, long, default_value = "false")]
    verbose: bool,
}

#[derive(Debug)]
struct RegionStats {
    regions: u32,
    places: u32,
    smallest: u32,
    largest: u32,
    mean: f32,
    fill_ratio: f32,
}

impl RegionStats {
    fn analyze(map: &WorldMap) -> Self {
        let counts: Vec<u32> = map.region_place_counts.values().copied().collect();
        let places: u32 = counts.iter().sum();
        let area = (map.width() * map.height()).max(1) as f32;

        Self {
            regions: counts.len() as u32,
            places,
            smallest: counts.iter().copied().min().unwrap_or(0),
            largest: counts.iter().copied().max().unwrap_or(0),
            mean: places as f32 / counts.len().max(1) as f32,
            fill_ratio: places as f32 / area,
        }
    }
}

fn main() -> TownmapResult<()> {
    let args = Args::parse();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let map = WorldMap::load_from_file(&args.input)?;
    let stats = RegionStats::analyze(&map);

    println!("Map: {}", args.input);
    println!("  Grid: {}x{} (width x height)", map.width(), map.height());
    println!("  Regions: {}", stats.regions);
    println!(
        "  Places: {} (smallest region {}, largest {}, mean {:.1})",
        stats.places, stats.smallest, stats.largest, stats.mean
    );
    println!("  Fill ratio: {:.1}%", stats.fill_ratio * 100.0);
    println!("  Start location (x, y): {}", map.start_location);
    let exits: Vec<String> = available_moves(&map, map.start_location)
        .iter()
        .map(|direction| direction.to_string())
        .collect();
    println!("  Exits from start: {}", exits.join(", "));
    println!("  Regions connected: {}", regions_connected(&map));
    println!("  All places reachable: {}", all_places_reachable(&map));

    if args.verbose {
        println!("\nRegion adjacency:");
        for (region, neighbours) in region_adjacency(&map) {
            let neighbours: Vec<String> = neighbours.iter().map(u32::to_string).collect();
            println!("  Region {region}: {}", neighbours.join(", "));
        }

        println!("\nPlaces:");
        for &region in map.region_place_counts.keys() {
            let places: Vec<String> = map
                .places_of(region)
                .iter()
                .map(|(label, point)| format!("{label}@{point}"))
                .collect();
            println!("  {}", places.join(" "));
        }
    }

    Ok(())
}
