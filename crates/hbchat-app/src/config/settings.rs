//! Settings loader for config.toml

use std::path::{Path, PathBuf};

use super::types::Settings;
use hbchat_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const HBCHAT_DIR: &str = "hbchat";

/// Default config file location: `<config_dir>/hbchat/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(HBCHAT_DIR).join(CONFIG_FILENAME))
}

/// Load settings from a config file
///
/// A missing, unreadable, or unparsable file yields the defaults.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Load settings from `--config` when given, else from the default location
pub fn load_settings_or_default(explicit: Option<&Path>) -> Settings {
    match explicit {
        Some(path) => load_settings(path),
        None => match default_config_path() {
            Some(path) => load_settings(&path),
            None => Settings::default(),
        },
    }
}
