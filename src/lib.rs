//! Procedural town map generation.
//!
//! A map is a set of regions ("towns"), each a contiguous cluster of places,
//! docked onto one another so that every region can be reached from region 1.
//! The result is a dense grid of `"region:place"` labels plus the start
//! location of the player.
//!
//! ```
//! use townmap::{GenerationParams, TownmapError, generate_map_seeded};
//!
//! match generate_map_seeded(GenerationParams::new(5, 3, 6), 42) {
//!     Ok(map) => assert_eq!(map.grid.get(map.start_location), Some("1:1")),
//!     // A region can run out of room next to its parent
//!     Err(TownmapError::PlacementFailed { region, .. }) => assert!(region > 1),
//!     Err(other) => panic!("{other}"),
//! }
//! ```

pub mod config;
pub mod game_logic;
pub mod layout;
pub mod map;
pub mod map_generation;
pub mod resources;

// Selective re-exports for external consumers

// Errors
pub use game_logic::errors::{TownmapError, TownmapResult};

// Movement over a finished map
pub use game_logic::movement::{Direction, available_moves, step};

// Core map types
pub use layout::coordinates::{Cell, Label, Point};
pub use map::WorldMap;
pub use map::grid::Grid;

// Generation entry points
pub use map_generation::{
    Generation, GenerationParams, MapBuilder, PlacedRegion, generate_map, generate_map_seeded,
};
