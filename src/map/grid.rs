use crate::layout::constants::EMPTY_LABEL;
use crate::layout::coordinates::{Label, Point};
use serde::{Deserialize, Serialize};

/// Dense row-major grid of place labels, `""` where no region sits.
/// Indexed with 1-based points: `x` picks the column, `y` the row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    rows: Vec<Vec<String>>,
}

impl Grid {
    /// Grid of `rows` x `cols` empty cells
    pub fn empty(rows: usize, cols: usize) -> Self {
        Self {
            rows: vec![vec![EMPTY_LABEL.to_string(); cols]; rows],
        }
    }

    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn is_rectangular(&self) -> bool {
        let width = self.width();
        width > 0 && self.rows.iter().all(|row| row.len() == width)
    }

    /// Raw cell text at a 1-based point
    pub fn get(&self, point: Point) -> Option<&str> {
        let (row, col) = point.to_indices()?;
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, label: Label) {
        if let Some(cell) = self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = label.to_string();
        }
    }

    /// Every non-empty cell with its point, row by row
    pub fn occupied(&self) -> impl Iterator<Item = (Point, &str)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, text)| text.as_str() != EMPTY_LABEL)
                .map(move |(col, text)| (Point::new(col as i32 + 1, row as i32 + 1), text.as_str()))
        })
    }

    /// Plain-text rendering, one row per line, empty cells shown as `.`
    pub fn render(&self) -> String {
        let width = self
            .rows
            .iter()
            .flatten()
            .map(String::len)
            .max()
            .unwrap_or(0)
            .max(1);

        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|text| {
                        let text = if text.is_empty() { "." } else { text.as_str() };
                        format!("{text:>width$}")
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
