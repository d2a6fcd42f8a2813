use crate::layout::coordinates::Point;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TownmapError {
    // Generation errors
    #[error("Invalid generation parameters: {reason}")]
    InvalidParameters { reason: String },

    #[error("Could not place region {region} after {attempts} attempts")]
    PlacementFailed { region: u32, attempts: u32 },

    #[error("Layout invariant violated: {reason}")]
    LayoutInvariant { reason: String },

    // Map query errors
    #[error("Invalid place label '{input}', expected REGION:PLACE")]
    InvalidLabel { input: String },

    #[error("Unknown direction '{input}', expected n, s, e or w")]
    InvalidDirection { input: String },

    #[error("Cannot move from {from} to {to}")]
    MoveBlocked { from: Point, to: Point },

    // Config-related errors
    #[error("Failed to get config directory")]
    ConfigDirNotFound,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize config: {0}")]
    SerializationFailed(#[from] toml::ser::Error),

    #[error("Failed to deserialize config: {0}")]
    DeserializationFailed(#[from] toml::de::Error),

    // Map file errors
    #[error("Map file not found at path: {path}")]
    MapFileNotFound { path: PathBuf },

    #[error("Corrupted map file: {reason}")]
    CorruptedMapFile { reason: String },

    #[error("{reason}")]
    MapValidationFailed { reason: String },

    #[error("Invalid map data: {reason}")]
    InvalidMapData { reason: String },
}

/// Result type alias for all operations
pub type TownmapResult<T> = Result<T, TownmapError>;
