// Configuration module for styled-toast
// This module handles loading and parsing configuration from ~/.config/styled-toast/config.toml

mod types;

pub use types::{Config, HapticsConfig, ThemeConfig, parse_color};

use std::fs;
use std::path::{Path, PathBuf};

/// Result of loading configuration
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

impl ConfigResult {
    fn defaults(warning: Option<String>) -> Self {
        ConfigResult {
            config: Config::default(),
            warning,
        }
    }
}

/// Loads configuration from ~/.config/styled-toast/config.toml
/// Returns default configuration if file doesn't exist or on parse errors
pub fn load_config() -> ConfigResult {
    load_config_from(&get_config_path())
}

/// Loads configuration from an explicit path
pub fn load_config_from(config_path: &Path) -> ConfigResult {
    #[cfg(debug_assertions)]
    log::debug!("Loading config from {:?}", config_path);

    // If file doesn't exist, return defaults silently
    if !config_path.exists() {
        #[cfg(debug_assertions)]
        log::debug!("Config file does not exist, using defaults");
        return ConfigResult::defaults(None);
    }

    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            #[cfg(debug_assertions)]
            log::error!("Failed to read config file {:?}: {}", config_path, e);
            return ConfigResult::defaults(Some(format!("Failed to read config: {}", e)));
        }
    };

    let mut config = match toml::from_str::<Config>(&contents) {
        Ok(config) => config,
        Err(e) => {
            #[cfg(debug_assertions)]
            log::error!("Failed to parse config file {:?}: {}", config_path, e);
            return ConfigResult::defaults(Some(format!("Invalid config: {}", e)));
        }
    };

    // A bad color drops the whole theme rather than half-applying it
    if let Some(Err(e)) = config.theme.as_ref().map(ThemeConfig::to_theme) {
        #[cfg(debug_assertions)]
        log::error!("Invalid theme in config file {:?}: {}", config_path, e);
        config.theme = None;
        return ConfigResult {
            config,
            warning: Some(format!("Invalid theme: {}", e)),
        };
    }

    ConfigResult {
        config,
        warning: None,
    }
}

/// Returns the path to the configuration file
///
/// Always uses ~/.config/styled-toast/config.toml on all platforms for consistency.
pub fn get_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("styled-toast")
        .join("config.toml")
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
