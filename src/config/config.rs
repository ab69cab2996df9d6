use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{CONFIG_FILE, ENV_CONFIG, ENV_FILE};
use crate::error::GomematicResult;
use crate::gomematic_error;

/// Settings read from the optional JSON config file. Flags and environment
/// variables take precedence over anything in here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    if let Ok(path) = env::var(ENV_CONFIG) {
        if !path.is_empty() {
            return Some(PathBuf::from(path));
        }
    }

    dirs::home_dir().map(|home| home.join(CONFIG_FILE))
}

pub fn load_config() -> GomematicResult<Config> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => Ok(Config::default()),
    }
}

pub fn load_config_from(path: &Path) -> GomematicResult<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path).map_err(|e| {
        gomematic_error!(Config, "failed to read config file {}: {}", path.display(), e)
    })?;

    serde_json::from_str(&content).map_err(|e| {
        gomematic_error!(Config, "failed to parse config file {}: {}", path.display(), e)
    })
}

/// Loads `KEY=value` pairs from the file named by `GOMEMATIC_ENV_FILE` into
/// the process environment. Variables that are already set are kept.
pub fn load_env_file() -> GomematicResult<Option<PathBuf>> {
    let path = match env::var(ENV_FILE) {
        Ok(path) if !path.is_empty() => PathBuf::from(path),
        _ => return Ok(None),
    };

    dotenv::from_path(&path).map_err(|e| {
        gomematic_error!(Config, "failed to load env file {}: {}", path.display(), e)
    })?;

    Ok(Some(path))
}
