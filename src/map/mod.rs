pub mod analysis;
pub mod grid;

use crate::game_logic::errors::{TownmapError, TownmapResult};
use crate::layout::coordinates::{Label, Point};
use grid::Grid;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use validator::{Validate, ValidationError, ValidationErrors};

/// A generated world: the place grid, how many places each region got and
/// where the player starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_world_map"))]
pub struct WorldMap {
    pub grid: Grid,
    pub region_place_counts: BTreeMap<u32, u32>,
    pub start_location: Point,
}

fn invalid(code: &'static str, message: String) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::from(message));
    error
}

fn validate_world_map(map: &WorldMap) -> Result<(), ValidationError> {
    if !map.grid.is_rectangular() {
        return Err(invalid("grid_shape", "grid must be a non-empty rectangle".to_string()));
    }

    let mut labels = BTreeSet::new();
    for (point, text) in map.grid.occupied() {
        let label: Label = text
            .parse()
            .map_err(|_| invalid("label", format!("unreadable label '{text}' at {point}")))?;
        if !labels.insert(label) {
            return Err(invalid("label", format!("label {label} appears more than once")));
        }
    }

    if map.grid.get(map.start_location) != Some("1:1") {
        return Err(invalid(
            "start_location",
            format!("start location {} does not hold 1:1", map.start_location),
        ));
    }

    let expected_regions: Vec<u32> = (1..=map.region_place_counts.len() as u32).collect();
    if !map.region_place_counts.keys().copied().eq(expected_regions) {
        return Err(invalid(
            "region_place_counts",
            "regions must be numbered 1..N without gaps".to_string(),
        ));
    }

    let expected_labels: BTreeSet<Label> = map
        .region_place_counts
        .iter()
        .flat_map(|(&region, &count)| (1..=count).map(move |place| Label::new(region, place)))
        .collect();
    if labels != expected_labels {
        return Err(invalid(
            "region_place_counts",
            "grid labels do not match the region place counts".to_string(),
        ));
    }

    Ok(())
}

fn describe_validation_errors(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .map(|(field, errors)| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            format!("{field}: {}", error_msgs.join(", "))
        })
        .collect::<Vec<String>>()
        .join("; ")
}

impl WorldMap {
    /// Create a new world map with validation
    pub fn new(
        grid: Grid,
        region_place_counts: BTreeMap<u32, u32>,
        start_location: Point,
    ) -> TownmapResult<Self> {
        let map = Self {
            grid,
            region_place_counts,
            start_location,
        };
        map.check()?;
        Ok(map)
    }

    /// Run validation, reporting every problem found
    pub fn check(&self) -> TownmapResult<()> {
        self.validate().map_err(|errors| TownmapError::MapValidationFailed {
            reason: format!("Map validation failed: {}", describe_validation_errors(&errors)),
        })
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn region_count(&self) -> u32 {
        self.region_place_counts.len() as u32
    }

    pub fn total_places(&self) -> u32 {
        self.region_place_counts.values().sum()
    }

    /// Label at a point, `None` outside the grid or on an empty cell
    pub fn label_at(&self, point: Point) -> Option<Label> {
        self.grid.get(point)?.parse().ok()
    }

    /// Whether the point is inside the grid and belongs to some region
    pub fn can_move(&self, point: Point) -> bool {
        self.label_at(point).is_some()
    }

    pub fn locate(&self, label: Label) -> Option<Point> {
        let wanted = label.to_string();
        self.grid
            .occupied()
            .find(|(_, text)| *text == wanted)
            .map(|(point, _)| point)
    }

    /// Every place of a region with its point, in place order
    pub fn places_of(&self, region: u32) -> Vec<(Label, Point)> {
        let mut places: Vec<(Label, Point)> = self
            .grid
            .occupied()
            .filter_map(|(point, text)| text.parse::<Label>().ok().map(|label| (label, point)))
            .filter(|(label, _)| label.region == region)
            .collect();
        places.sort_by_key(|(label, _)| label.place);
        places
    }

    /// Get the maps directory path
    pub fn get_maps_dir() -> TownmapResult<PathBuf> {
        Ok(std::env::current_dir()?.join("maps"))
    }

    /// Load a map from the maps directory
    pub fn load_from_file<P: AsRef<Path>>(filename: P) -> TownmapResult<Self> {
        Self::load_from_path(Self::get_maps_dir()?.join(filename))
    }

    /// Save the map to the maps directory
    pub fn save_to_file<P: AsRef<Path>>(&self, filename: P) -> TownmapResult<PathBuf> {
        let file_path = Self::get_maps_dir()?.join(filename);
        self.save_to_path(&file_path)?;
        Ok(file_path)
    }

    pub fn load_from_path<P: AsRef<Path>>(file_path: P) -> TownmapResult<Self> {
        let file_path = file_path.as_ref();
        if !file_path.exists() {
            return Err(TownmapError::MapFileNotFound {
                path: file_path.to_path_buf(),
            });
        }

        let data = std::fs::read(file_path)?;
        let (map, _): (WorldMap, usize) =
            bincode::serde::decode_from_slice(&data, bincode::config::standard()).map_err(|e| {
                TownmapError::CorruptedMapFile {
                    reason: format!("Failed to deserialize map data: {e}"),
                }
            })?;

        map.check()?;
        Ok(map)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, file_path: P) -> TownmapResult<()> {
        self.check()?;

        let file_path = file_path.as_ref();
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = bincode::serde::encode_to_vec(self, bincode::config::standard()).map_err(|e| {
            TownmapError::InvalidMapData {
                reason: format!("Failed to serialize map: {e}"),
            }
        })?;
        std::fs::write(file_path, data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(cells: &[&[&str]]) -> Grid {
        Grid::from_rows(
            cells
                .iter()
                .map(|row| row.iter().map(|s| s.to_string()).collect())
                .collect(),
        )
    }

    fn sample_map() -> WorldMap {
        // 1:1 1:2 .
        //  .  2:1 2:2
        WorldMap::new(
            rows(&[&["1:1", "1:2", ""], &["", "2:1", "2:2"]]),
            BTreeMap::from([(1, 2), (2, 2)]),
            Point::new(1, 1),
        )
        .unwrap()
    }

    #[test]
    fn test_queries() {
        let map = sample_map();
        assert_eq!(map.width(), 3);
        assert_eq!(map.height(), 2);
        assert_eq!(map.region_count(), 2);
        assert_eq!(map.total_places(), 4);

        assert_eq!(map.label_at(Point::new(2, 2)), Some(Label::new(2, 1)));
        assert_eq!(map.label_at(Point::new(3, 1)), None);
        assert_eq!(map.label_at(Point::new(4, 1)), None);
        assert!(map.can_move(Point::new(3, 2)));
        assert!(!map.can_move(Point::new(1, 2)));
        assert!(!map.can_move(Point::new(0, 1)));

        assert_eq!(map.locate(Label::new(2, 2)), Some(Point::new(3, 2)));
        assert_eq!(map.locate(Label::new(3, 1)), None);
        assert_eq!(
            map.places_of(2),
            vec![(Label::new(2, 1), Point::new(2, 2)), (Label::new(2, 2), Point::new(3, 2))]
        );
    }

    #[test]
    fn test_start_must_hold_first_place() {
        let result = WorldMap::new(
            rows(&[&["1:1", "1:2"]]),
            BTreeMap::from([(1, 2)]),
            Point::new(2, 1),
        );
        assert!(matches!(result, Err(TownmapError::MapValidationFailed { .. })));
    }

    #[test]
    fn test_counts_must_match_labels() {
        let result = WorldMap::new(
            rows(&[&["1:1", "1:2"]]),
            BTreeMap::from([(1, 3)]),
            Point::new(1, 1),
        );
        assert!(result.is_err());

        let result = WorldMap::new(
            rows(&[&["1:1", "3:1"]]),
            BTreeMap::from([(1, 1), (3, 1)]),
            Point::new(1, 1),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_bad_grids_rejected() {
        let duplicate = WorldMap::new(
            rows(&[&["1:1", "1:1"]]),
            BTreeMap::from([(1, 1)]),
            Point::new(1, 1),
        );
        assert!(duplicate.is_err());

        let garbage = WorldMap::new(
            rows(&[&["1:1", "town"]]),
            BTreeMap::from([(1, 1)]),
            Point::new(1, 1),
        );
        assert!(garbage.is_err());

        let ragged = WorldMap::new(
            rows(&[&["1:1", "1:2"], &["1:3"]]),
            BTreeMap::from([(1, 3)]),
            Point::new(1, 1),
        );
        assert!(ragged.is_err());
    }

    #[test]
    fn test_file_round_trip() {
        let map = sample_map();
        let path = std::env::temp_dir()
            .join(format!("townmap_maps_{}", std::process::id()))
            .join("sample.bin");

        map.save_to_path(&path).unwrap();
        let loaded = WorldMap::load_from_path(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, map);
    }

    #[test]
    fn test_missing_and_corrupted_files() {
        let dir = std::env::temp_dir().join(format!("townmap_bad_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let missing = WorldMap::load_from_path(dir.join("nope.bin"));
        assert!(matches!(missing, Err(TownmapError::MapFileNotFound { .. })));

        let corrupted_path = dir.join("corrupted.bin");
        std::fs::write(&corrupted_path, [0xff, 0xff, 0xff]).unwrap();
        let corrupted = WorldMap::load_from_path(&corrupted_path);
        std::fs::remove_file(&corrupted_path).ok();
        assert!(matches!(corrupted, Err(TownmapError::CorruptedMapFile { .. })));
    }
}
