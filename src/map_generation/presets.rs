use crate::game_logic::errors::TownmapResult;
use crate::layout::constants::CROSS_REGION_SIDE;
use crate::layout::{Cell, GlobalMap, Shape, assemble};
use crate::map::WorldMap;
use std::collections::BTreeMap;

/// Named map layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapPreset {
    /// Procedural layout from the generation parameters
    Random,
    /// Fixed plus-shaped layout of five square regions
    Cross,
}

/// Get a predefined map preset
pub fn get_map_preset(name: &str) -> Option<MapPreset> {
    match name {
        "random" => Some(MapPreset::Random),
        "cross" => Some(MapPreset::Cross),
        _ => None,
    }
}

/// Five square regions arranged as a plus: 1 in the centre, 2 north, 3 west,
/// 4 east and 5 south.
pub fn cross_layout() -> TownmapResult<WorldMap> {
    let side = CROSS_REGION_SIDE;
    let square = Shape::rectangle(side, side)?;
    let offsets = [
        (1, Cell::new(side, side)),
        (2, Cell::new(0, side)),
        (3, Cell::new(side, 0)),
        (4, Cell::new(side, 2 * side)),
        (5, Cell::new(2 * side, side)),
    ];

    let mut occupied = GlobalMap::new();
    let mut place_counts = BTreeMap::new();
    for (region, offset) in offsets {
        occupied.insert_region(region, &square, offset)?;
        place_counts.insert(region, square.len() as u32);
    }

    let (grid, start_location) = assemble(&occupied)?;
    WorldMap::new(grid, place_counts, start_location)
}
