use crate::game_logic::errors::{TownmapError, TownmapResult};
use derive_more::{Add, Display, Sub};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Unbounded layout coordinate. Ordering is row-major.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Add, Sub, Display, Serialize, Deserialize,
)]
#[display("[{row}, {col}]")]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub const ORIGIN: Cell = Cell { row: 0, col: 0 };

    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Up, down, left, right
    pub fn neighbours(self) -> [Cell; 4] {
        [
            Cell::new(self.row - 1, self.col),
            Cell::new(self.row + 1, self.col),
            Cell::new(self.row, self.col - 1),
            Cell::new(self.row, self.col + 1),
        ]
    }

    pub fn is_adjacent(self, other: Cell) -> bool {
        (self.row - other.row).abs() + (self.col - other.col).abs() == 1
    }
}

/// 1-indexed grid position as handed to callers: `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display("({x}, {y})")]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Point for a zero-based grid cell
    pub fn from_grid_cell(cell: Cell) -> Self {
        Self::new(cell.col + 1, cell.row + 1)
    }

    /// Zero-based (row, column) indices into a grid, if the point is not left of or above it
    pub fn to_indices(self) -> Option<(usize, usize)> {
        let row = usize::try_from(self.y.checked_sub(1)?).ok()?;
        let col = usize::try_from(self.x.checked_sub(1)?).ok()?;
        Some((row, col))
    }
}

/// A place within a region, serialized as `"region:place"`
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize,
)]
#[display("{region}:{place}")]
pub struct Label {
    pub region: u32,
    pub place: u32,
}

impl Label {
    pub const START: Label = Label {
        region: 1,
        place: 1,
    };

    pub fn new(region: u32, place: u32) -> Self {
        Self { region, place }
    }
}

impl FromStr for Label {
    type Err = TownmapError;

    fn from_str(input: &str) -> TownmapResult<Self> {
        let invalid = || TownmapError::InvalidLabel {
            input: input.to_string(),
        };

        let (region, place) = input.split_once(':').ok_or_else(invalid)?;
        let region: u32 = region.trim().parse().map_err(|_| invalid())?;
        let place: u32 = place.trim().parse().map_err(|_| invalid())?;
        if region == 0 || place == 0 {
            return Err(invalid());
        }

        Ok(Label::new(region, place))
    }
}
