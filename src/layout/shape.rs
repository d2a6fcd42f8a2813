use crate::game_logic::errors::{TownmapError, TownmapResult};
use crate::layout::coordinates::Cell;
use rand::Rng;
use std::collections::BTreeSet;

/// Normalized region footprint: minimum row and column are 0 and cells are
/// sorted row-major, so the index of a cell (plus one) is its place number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    cells: Vec<Cell>,
}

impl Shape {
    /// Normalize an arbitrary set of cells
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> TownmapResult<Self> {
        let cells: BTreeSet<Cell> = cells.into_iter().collect();
        let (Some(min_row), Some(min_col)) = (
            cells.iter().map(|c| c.row).min(),
            cells.iter().map(|c| c.col).min(),
        ) else {
            return Err(TownmapError::LayoutInvariant {
                reason: "a shape needs at least one cell".to_string(),
            });
        };

        let origin = Cell::new(min_row, min_col);
        let mut cells: Vec<Cell> = cells.into_iter().map(|c| c - origin).collect();
        cells.sort();
        Ok(Self { cells })
    }

    /// Filled `rows` x `cols` rectangle
    pub fn rectangle(rows: i32, cols: i32) -> TownmapResult<Self> {
        Self::from_cells((0..rows).flat_map(|row| (0..cols).map(move |col| Cell::new(row, col))))
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Every cell translated by `offset`, in place order
    pub fn translated(&self, offset: Cell) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().map(move |&cell| cell + offset)
    }
}

/// Unclaimed 4-neighbours of `shape`, once per adjacent shape cell.
///
/// A cell touching several shape cells is listed several times, which makes
/// it proportionally more likely to be picked and keeps shapes compact.
fn frontier(shape: &BTreeSet<Cell>) -> Vec<Cell> {
    shape
        .iter()
        .flat_map(|cell| cell.neighbours())
        .filter(|cell| !shape.contains(cell))
        .collect()
}

/// Grow a contiguous shape of exactly `size` cells.
///
/// Starts from a single cell and repeatedly adds an entry of the frontier
/// chosen uniformly at random.
pub fn grow_shape<R: Rng + ?Sized>(size: u32, rng: &mut R) -> TownmapResult<Shape> {
    if size == 0 {
        return Err(TownmapError::InvalidParameters {
            reason: "a region needs at least one place".to_string(),
        });
    }

    let mut shape = BTreeSet::from([Cell::ORIGIN]);
    while shape.len() < size as usize {
        let frontier = frontier(&shape);

        if frontier.is_empty() {
            return Err(TownmapError::LayoutInvariant {
                reason: format!("empty frontier at {} of {size} cells", shape.len()),
            });
        }

        shape.insert(frontier[rng.gen_range(0..frontier.len())]);
    }

    Shape::from_cells(shape)
}
