use crate::game_logic::errors::{TownmapError, TownmapResult};
use crate::layout::coordinates::{Label, Point};
use crate::layout::global_map::GlobalMap;
use crate::map::grid::Grid;

/// Densify the sparse layout into a grid covering exactly its bounding box,
/// and return the 1-based point holding `"1:1"`.
pub fn assemble(occupied: &GlobalMap) -> TownmapResult<(Grid, Point)> {
    let bounds = occupied.bounds().ok_or_else(|| TownmapError::LayoutInvariant {
        reason: "cannot assemble a map without regions".to_string(),
    })?;

    let mut grid = Grid::empty(bounds.rows(), bounds.cols());
    for (cell, label) in occupied.iter() {
        let local = cell - bounds.min;
        grid.set(local.row as usize, local.col as usize, label);
    }

    let start = occupied
        .find(Label::START)
        .ok_or_else(|| TownmapError::LayoutInvariant {
            reason: format!("label {} was never placed", Label::START),
        })?;

    Ok((grid, Point::from_grid_cell(start - bounds.min)))
}
