use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

use crate::constants::{API_KEY_ENV, BASE_URL_ENV, CONFIG_FILE, PLANE_API_URL};
use crate::error::{LabelError, LabelResult};
use crate::permissions::UserRole;

#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub workspace_slug: Option<String>,
    pub default_project_id: Option<String>,
    /// The actor's role in the configured project.
    #[serde(default)]
    pub role: UserRole,
}

pub fn config_path() -> LabelResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| LabelError::ConfigError("Could not find home directory".to_string()))?;
    Ok(home_dir.join(CONFIG_FILE))
}

pub fn load_config() -> Config {
    match config_path() {
        Ok(path) => load_config_from(&path),
        Err(_) => Config::default(),
    }
}

/// Missing or unreadable files yield the default config.
pub fn load_config_from(path: &Path) -> Config {
    fs::read_to_string(path)
        .ok()
        .and_then(|config_str| serde_json::from_str(&config_str).ok())
        .unwrap_or_default()
}

pub fn save_config(config: &Config) -> LabelResult<()> {
    save_config_to(&config_path()?, config)
}

pub fn save_config_to(path: &Path, config: &Config) -> LabelResult<()> {
    let config_str = serde_json::to_string_pretty(config)?;
    fs::write(path, config_str)?;
    Ok(())
}

pub fn get_api_key() -> LabelResult<String> {
    // First check environment variable
    if let Ok(key) = env::var(API_KEY_ENV) {
        return Ok(key);
    }

    // Then check config file
    load_config().api_key.ok_or(LabelError::ApiKeyNotFound)
}

pub fn get_base_url() -> String {
    if let Ok(url) = env::var(BASE_URL_ENV) {
        return url;
    }

    load_config()
        .base_url
        .unwrap_or_else(|| PLANE_API_URL.to_string())
}
