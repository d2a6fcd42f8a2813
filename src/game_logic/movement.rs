use crate::game_logic::errors::{TownmapError, TownmapResult};
use crate::layout::coordinates::Point;
use crate::map::WorldMap;
use derive_more::Display;
use std::str::FromStr;

/// Compass step on the place grid. North decreases `y`, east increases `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub fn apply(self, point: Point) -> Point {
        match self {
            Direction::North => Point::new(point.x, point.y - 1),
            Direction::South => Point::new(point.x, point.y + 1),
            Direction::East => Point::new(point.x + 1, point.y),
            Direction::West => Point::new(point.x - 1, point.y),
        }
    }
}

impl FromStr for Direction {
    type Err = TownmapError;

    fn from_str(input: &str) -> TownmapResult<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "n" | "north" => Ok(Direction::North),
            "s" | "south" => Ok(Direction::South),
            "e" | "east" => Ok(Direction::East),
            "w" | "west" => Ok(Direction::West),
            _ => Err(TownmapError::InvalidDirection {
                input: input.to_string(),
            }),
        }
    }
}

/// Move one place in `direction`, refusing empty cells and the grid edge
pub fn step(map: &WorldMap, from: Point, direction: Direction) -> TownmapResult<Point> {
    let to = direction.apply(from);
    if map.can_move(to) {
        Ok(to)
    } else {
        Err(TownmapError::MoveBlocked { from, to })
    }
}

/// Directions that lead somewhere walkable from `from`
pub fn available_moves(map: &WorldMap, from: Point) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|direction| map.can_move(direction.apply(from)))
        .collect()
}
