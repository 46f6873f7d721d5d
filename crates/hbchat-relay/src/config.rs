//! Relay configuration (relay.toml)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use hbchat_core::prelude::*;

const RELAY_CONFIG_FILENAME: &str = "relay.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RelaySettings {
    /// Address to listen on
    #[serde(default = "default_bind")]
    pub bind: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Each connection starts with `IP\0PORT\0` from a fronting proxy
    #[serde(default)]
    pub expect_proxy_header: bool,

    /// Client addresses that are turned away
    #[serde(default)]
    pub banned: Vec<String>,

    /// Words masked with `*` in relayed messages (case-insensitive)
    #[serde(default)]
    pub censored_words: Vec<String>,

    /// Largest chunk read from a client at once
    #[serde(default = "default_read_chunk_bytes")]
    pub read_chunk_bytes: usize,
}

impl Default for RelaySettings {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
            expect_proxy_header: false,
            banned: Vec::new(),
            censored_words: Vec::new(),
            read_chunk_bytes: default_read_chunk_bytes(),
        }
    }
}

impl RelaySettings {
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }

    pub fn is_banned(&self, ip: &str) -> bool {
        self.banned.iter().any(|banned| banned == ip)
    }

    pub fn validate(&self) -> Result<()> {
        if self.read_chunk_bytes == 0 {
            return Err(Error::config_invalid(
                "read_chunk_bytes must be greater than 0",
            ));
        }
        if self.bind.trim().is_empty() {
            return Err(Error::config_invalid("bind must not be empty"));
        }
        Ok(())
    }
}

fn default_bind() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3071
}

fn default_read_chunk_bytes() -> usize {
    1024
}

/// Default location: `<config_dir>/hbchat/relay.toml`
pub fn default_relay_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("hbchat").join(RELAY_CONFIG_FILENAME))
}

/// Load relay settings; a missing or broken file yields the defaults
pub fn load_relay_settings(path: &Path) -> RelaySettings {
    if !path.exists() {
        debug!("No relay config at {:?}, using defaults", path);
        return RelaySettings::default();
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                RelaySettings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            RelaySettings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let settings = RelaySettings::default();
        assert_eq!(settings.listen_addr(), "0.0.0.0:3071");
        assert!(!settings.expect_proxy_header);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_load_relay_settings() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("relay.toml");
        std::fs::write(
            &path,
            r#"
port = 4000
expect_proxy_header = true
banned = ["10.0.0.7"]
censored_words = ["darn"]
"#,
        )
        .unwrap();

        let settings = load_relay_settings(&path);
        assert_eq!(settings.port, 4000);
        assert_eq!(settings.bind, "0.0.0.0");
        assert!(settings.expect_proxy_header);
        assert!(settings.is_banned("10.0.0.7"));
        assert!(!settings.is_banned("10.0.0.8"));
        assert_eq!(settings.censored_words, vec!["darn"]);
    }

    #[test]
    fn test_load_relay_settings_invalid_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("relay.toml");
        std::fs::write(&path, "port = \"not a number\"").unwrap();

        assert_eq!(load_relay_settings(&path).port, 3071);
    }
}
