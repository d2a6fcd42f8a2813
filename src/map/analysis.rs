//! Structural checks over a finished map: which regions touch, and whether
//! everything can be reached from the start.

use crate::layout::coordinates::{Cell, Point};
use crate::map::WorldMap;
use pathfinding::prelude::bfs_reach;
use std::collections::{BTreeMap, BTreeSet};

/// Region id to the ids of regions sharing at least one edge with it.
/// Every region of the map has an entry, possibly empty.
pub fn region_adjacency(map: &WorldMap) -> BTreeMap<u32, BTreeSet<u32>> {
    let mut adjacency: BTreeMap<u32, BTreeSet<u32>> = map
        .region_place_counts
        .keys()
        .map(|&region| (region, BTreeSet::new()))
        .collect();

    for (point, _) in map.grid.occupied() {
        let Some(label) = map.label_at(point) else {
            continue;
        };
        // Right and down neighbours cover every edge once
        for next in [Point::new(point.x + 1, point.y), Point::new(point.x, point.y + 1)] {
            if let Some(other) = map.label_at(next).filter(|other| other.region != label.region) {
                adjacency.entry(label.region).or_default().insert(other.region);
                adjacency.entry(other.region).or_default().insert(label.region);
            }
        }
    }
    adjacency
}

/// True when every region can be reached from region 1 through shared edges
pub fn regions_connected(map: &WorldMap) -> bool {
    let adjacency = region_adjacency(map);
    if adjacency.is_empty() {
        return false;
    }
    let reached = bfs_reach(1u32, |region| {
        adjacency
            .get(region)
            .map(|neighbours| neighbours.iter().copied().collect::<Vec<_>>())
            .unwrap_or_default()
    })
    .count();
    reached == adjacency.len()
}

/// True when every occupied cell can be walked to from the start location
pub fn all_places_reachable(map: &WorldMap) -> bool {
    if !map.can_move(map.start_location) {
        return false;
    }
    let reached = bfs_reach(map.start_location, |&point| {
        let cell = Cell::new(point.y, point.x);
        cell.neighbours()
            .into_iter()
            .map(|next| Point::new(next.col, next.row))
            .filter(|&next| map.can_move(next))
            .collect::<Vec<_>>()
    })
    .count();
    reached == map.grid.occupied().count()
}
