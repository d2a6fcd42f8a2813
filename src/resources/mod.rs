use crate::config::range_types::*;
use crate::layout::constants::{DEFAULT_MAX_PLACES, DEFAULT_MIN_PLACES, DEFAULT_REGION_COUNT};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct MapgenConfig {
    pub generation: GenerationSettings,
    pub output: OutputSettings,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
// NOTE: When adding new fields, update the default config.toml example in the project root
pub struct GenerationSettings {
    pub region_count: u32,
    pub min_places: u32,
    pub max_places: u32,
    pub max_attempts: AttemptBudget,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            region_count: DEFAULT_REGION_COUNT,
            min_places: DEFAULT_MIN_PLACES,
            max_places: DEFAULT_MAX_PLACES,
            max_attempts: AttemptBudget::default(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct OutputSettings {
    pub print_grid: bool,
    pub map_file_path: String, // Path to map file relative to maps directory
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            print_grid: true,
            map_file_path: "generated_map.bin".to_string(),
        }
    }
}
