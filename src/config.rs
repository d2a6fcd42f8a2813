pub mod range_types;

use crate::game_logic::errors::{TownmapError, TownmapResult};
use crate::resources::MapgenConfig;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().and_then(|mut path| {
        path.push("townmap");
        fs::create_dir_all(&path).ok()?;
        path.push("config.toml");
        Some(path)
    })
}

/// Load the user config, falling back to defaults when it is missing or unreadable
pub fn load_config() -> MapgenConfig {
    get_config_path()
        .filter(|path| path.exists())
        .and_then(|path| match load_config_from(&path) {
            Ok(config) => Some(config),
            Err(err) => {
                warn!(path = %path.display(), %err, "ignoring unreadable config");
                None
            }
        })
        .unwrap_or_default()
}

pub fn load_config_from(path: &Path) -> TownmapResult<MapgenConfig> {
    let contents = fs::read_to_string(path)?;
    Ok(toml::from_str::<MapgenConfig>(&contents)?)
}

pub fn save_config(config: &MapgenConfig) -> TownmapResult<()> {
    let config_path = get_config_path().ok_or(TownmapError::ConfigDirNotFound)?;
    save_config_to(config, &config_path)
}

pub fn save_config_to(config: &MapgenConfig, path: &Path) -> TownmapResult<()> {
    let contents = toml::to_string_pretty(config)?;
    fs::write(path, contents)?;
    Ok(())
}
