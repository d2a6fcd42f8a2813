use crate::game_logic::errors::{TownmapError, TownmapResult};
use crate::layout::coordinates::Cell;
use crate::layout::global_map::GlobalMap;
use crate::layout::shape::Shape;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{trace, warn};

/// Find an offset that places `shape` next to one of `parent_cells` without
/// overlapping anything in `occupied`.
///
/// Parent cells are visited in random order and each one examined spends one
/// unit of `max_attempts`, shared across the whole search. For a parent cell,
/// its free neighbours are tried in random order, and for each neighbour every
/// shape cell is tried as the one landing on it. The first offset that fits
/// wins.
pub fn dock_shape<R: Rng + ?Sized>(
    region: u32,
    shape: &Shape,
    parent_cells: &[Cell],
    occupied: &GlobalMap,
    rng: &mut R,
    max_attempts: u32,
) -> TownmapResult<Cell> {
    let mut candidates = parent_cells.to_vec();
    candidates.shuffle(rng);

    let mut attempts = 0;
    for parent_cell in candidates {
        if attempts >= max_attempts {
            break;
        }
        attempts += 1;

        let mut neighbours = parent_cell.neighbours();
        neighbours.shuffle(rng);

        for neighbour in neighbours {
            if occupied.contains(&neighbour) {
                continue;
            }
            let fitting = shape
                .cells()
                .iter()
                .map(|&local| neighbour - local)
                .find(|&offset| occupied.fits(shape, offset));

            if let Some(offset) = fitting {
                trace!(region, attempts, %offset, "docked region");
                return Ok(offset);
            }
        }
    }

    // Revisiting a parent cell cannot turn up a new offset, so running out of
    // candidates ends the search early.
    warn!(region, attempts, "no free docking position next to parent");
    Err(TownmapError::PlacementFailed { region, attempts })
}
