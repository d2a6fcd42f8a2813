use crate::game_logic::errors::{TownmapError, TownmapResult};
use crate::layout::coordinates::{Cell, Label};
use crate::layout::shape::Shape;
use std::collections::HashMap;

/// Inclusive bounding box of a set of cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: Cell,
    pub max: Cell,
}

impl Bounds {
    pub fn rows(&self) -> usize {
        (self.max.row - self.min.row + 1) as usize
    }

    pub fn cols(&self) -> usize {
        (self.max.col - self.min.col + 1) as usize
    }
}

/// Sparse table of every occupied cell and the place it belongs to.
/// A cell is claimed by at most one region.
#[derive(Debug, Clone, Default)]
pub struct GlobalMap {
    cells: HashMap<Cell, Label>,
}

impl GlobalMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, cell: &Cell) -> bool {
        self.cells.contains_key(cell)
    }

    pub fn get(&self, cell: &Cell) -> Option<Label> {
        self.cells.get(cell).copied()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Cell, Label)> + '_ {
        self.cells.iter().map(|(&cell, &label)| (cell, label))
    }

    /// True when `shape` placed at `offset` lands only on free cells
    pub fn fits(&self, shape: &Shape, offset: Cell) -> bool {
        shape.translated(offset).all(|cell| !self.contains(&cell))
    }

    /// Claim the cells of `shape` at `offset` for `region`, numbering places
    /// in shape order. Returns the claimed cells in that order.
    pub fn insert_region(&mut self, region: u32, shape: &Shape, offset: Cell) -> TownmapResult<Vec<Cell>> {
        if let Some(taken) = shape.translated(offset).find(|cell| self.contains(cell)) {
            return Err(TownmapError::LayoutInvariant {
                reason: format!("region {region} overlaps an occupied cell at {taken}"),
            });
        }

        let placed: Vec<Cell> = shape.translated(offset).collect();
        for (index, &cell) in placed.iter().enumerate() {
            self.cells.insert(cell, Label::new(region, index as u32 + 1));
        }
        Ok(placed)
    }

    pub fn bounds(&self) -> Option<Bounds> {
        let mut cells = self.cells.keys();
        let first = *cells.next()?;
        let (min, max) = cells.fold((first, first), |(min, max), cell| {
            (
                Cell::new(min.row.min(cell.row), min.col.min(cell.col)),
                Cell::new(max.row.max(cell.row), max.col.max(cell.col)),
            )
        });
        Some(Bounds { min, max })
    }

    /// Cell holding the given label, if any
    pub fn find(&self, label: Label) -> Option<Cell> {
        self.iter().find(|&(_, l)| l == label).map(|(cell, _)| cell)
    }
}
