use townmap::map::analysis::regions_connected;
use townmap::{TownmapError, TownmapResult, WorldMap};

/// Generic parser for delimited strings that return fixed-size arrays
pub fn parse_delimited<T, E, const N: usize>(
    input: &str,
    delimiter: char,
    type_name: &str,
    parser: impl Fn(&str) -> Result<T, E>,
) -> TownmapResult<[T; N]>
where
    T: Copy + Default,
{
    let parts: Vec<&str> = input.split(delimiter).collect();
    if parts.len() != N {
        return Err(TownmapError::InvalidMapData {
            reason: format!(
                "Invalid {type_name} format '{input}'. Expected {N} {delimiter}-separated values"
            ),
        });
    }

    let mut result = [T::default(); N];
    for (i, part) in parts.iter().enumerate() {
        result[i] = parser(part.trim()).map_err(|_| TownmapError::InvalidMapData {
            reason: format!("Invalid {type_name} value: '{part}'"),
        })?;
    }

    Ok(result)
}

/// Parse place range string "MIN,MAX" with validation
pub fn parse_place_range(range_str: &str) -> TownmapResult<(u32, u32)> {
    let [min, max] = parse_delimited::<u32, _, 2>(range_str, ',', "place range", |s| s.parse())?;

    if min == 0 {
        return Err(TownmapError::InvalidMapData {
            reason: "Regions need at least one place".to_string(),
        });
    }

    if min > max {
        return Err(TownmapError::InvalidMapData {
            reason: "Minimum places must be less than or equal to maximum places".to_string(),
        });
    }

    Ok((min, max))
}

pub fn validate_output_path(filename: &str) -> TownmapResult<()> {
    use std::path::Path;

    // Check for absolute paths which would be problematic
    let path = Path::new(filename);
    if path.is_absolute() {
        return Err(TownmapError::InvalidMapData {
            reason: format!(
                "Output path must be relative to maps/ directory, got absolute path: {filename}"
            ),
        });
    }

    // Check for parent directory traversal attempts
    if filename.contains("..") {
        return Err(TownmapError::InvalidMapData {
            reason: "Output path cannot contain '..' for security reasons".to_string(),
        });
    }

    Ok(())
}

pub fn print_map_summary(map: &WorldMap, seed: Option<u64>, print_grid: bool) {
    if print_grid {
        println!("Generated map ({}x{}):", map.width(), map.height());
        println!("{}", map.grid.render());
        println!();
    }

    println!("Map summary:");
    if let Some(seed) = seed {
        println!("  Seed: {seed}");
    }
    println!("  Regions: {}", map.region_count());
    println!("  Places: {}", map.total_places());
    for (region, places) in &map.region_place_counts {
        println!("    Region {region}: {places} places");
    }
    println!("  Start location (x, y): {}", map.start_location);
    println!(
        "  Connected: {}",
        if regions_connected(map) { "yes" } else { "no" }
    );
}
