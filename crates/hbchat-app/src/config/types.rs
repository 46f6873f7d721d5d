//! Configuration types for hbchat
//!
//! Defines `Settings` and its sections. Every default reproduces the fixed
//! behavior of the client, so an absent config file changes nothing.

use std::time::Duration;

use hbchat_core::prelude::*;
use hbchat_core::{CapacityTiers, OverflowPolicy};
use hbchat_net::{DEFAULT_HOST, DEFAULT_PORT, READ_CHUNK_BYTES};
use serde::{Deserialize, Serialize};

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub network: NetworkSettings,

    #[serde(default)]
    pub transcript: TranscriptSettings,

    #[serde(default)]
    pub scroll: ScrollSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,
}

impl Settings {
    /// Reject values the client cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(Error::config_invalid("server.host must not be empty"));
        }
        if self.server.port == 0 {
            return Err(Error::config_invalid("server.port must not be 0"));
        }
        if self.network.read_chunk_bytes == 0 {
            return Err(Error::config_invalid(
                "network.read_chunk_bytes must be greater than 0",
            ));
        }
        if self.transcript.initial_capacity == 0 {
            return Err(Error::config_invalid(
                "transcript.initial_capacity must be greater than 0",
            ));
        }
        if self.transcript.grown_capacity < self.transcript.initial_capacity {
            return Err(Error::config_invalid(format!(
                "transcript.grown_capacity ({}) is smaller than initial_capacity ({})",
                self.transcript.grown_capacity, self.transcript.initial_capacity
            )));
        }
        if self.transcript.seed.len() > self.transcript.grown_capacity {
            return Err(Error::config_invalid(
                "transcript.seed does not fit in transcript.grown_capacity",
            ));
        }
        for (name, value) in [
            ("scroll.append_step", self.scroll.append_step),
            ("scroll.scroll_step", self.scroll.scroll_step),
            ("scroll.units_per_row", self.scroll.units_per_row),
        ] {
            if value <= 0 {
                return Err(Error::config_invalid(format!(
                    "{} must be greater than 0 (got {})",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// Chat server location
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Bound on the TCP handshake in milliseconds
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            connect_timeout_ms: default_connect_timeout_ms(),
        }
    }
}

impl ServerSettings {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    /// `host:port` for display
    pub fn label(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_connect_timeout_ms() -> u64 {
    5000
}

/// Receive polling
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NetworkSettings {
    /// Longest wait for inbound data per frame, in milliseconds
    #[serde(default = "default_poll_timeout_ms")]
    pub poll_timeout_ms: u64,

    /// Largest chunk read per poll
    #[serde(default = "default_read_chunk_bytes")]
    pub read_chunk_bytes: usize,
}

impl Default for NetworkSettings {
    fn default() -> Self {
        Self {
            poll_timeout_ms: default_poll_timeout_ms(),
            read_chunk_bytes: default_read_chunk_bytes(),
        }
    }
}

impl NetworkSettings {
    pub fn poll_timeout(&self) -> Duration {
        Duration::from_millis(self.poll_timeout_ms)
    }
}

fn default_poll_timeout_ms() -> u64 {
    10
}

fn default_read_chunk_bytes() -> usize {
    READ_CHUNK_BYTES
}

/// Overflow handling once the grown capacity is full
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowMode {
    #[default]
    DropOldest,
    Reject,
}

impl From<OverflowMode> for OverflowPolicy {
    fn from(mode: OverflowMode) -> Self {
        match mode {
            OverflowMode::DropOldest => OverflowPolicy::DropOldest,
            OverflowMode::Reject => OverflowPolicy::Reject,
        }
    }
}

impl std::fmt::Display for OverflowMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OverflowMode::DropOldest => write!(f, "drop_oldest"),
            OverflowMode::Reject => write!(f, "reject"),
        }
    }
}

/// Transcript storage
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TranscriptSettings {
    /// Header the transcript starts with
    #[serde(default = "default_seed")]
    pub seed: String,

    #[serde(default = "default_initial_capacity")]
    pub initial_capacity: usize,

    #[serde(default = "default_grown_capacity")]
    pub grown_capacity: usize,

    #[serde(default)]
    pub overflow: OverflowMode,
}

impl Default for TranscriptSettings {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            initial_capacity: default_initial_capacity(),
            grown_capacity: default_grown_capacity(),
            overflow: OverflowMode::default(),
        }
    }
}

impl TranscriptSettings {
    pub fn tiers(&self) -> CapacityTiers {
        CapacityTiers {
            initial: self.initial_capacity,
            grown: self.grown_capacity,
        }
    }
}

fn default_seed() -> String {
    hbchat_core::DEFAULT_SEED.to_string()
}

fn default_initial_capacity() -> usize {
    hbchat_core::INITIAL_CAPACITY_BYTES
}

fn default_grown_capacity() -> usize {
    hbchat_core::GROWN_CAPACITY_BYTES
}

/// Scroll behavior, in scroll units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScrollSettings {
    /// Offset decrement applied whenever server data is appended
    #[serde(default = "default_append_step")]
    pub append_step: i32,

    /// Offset change per scroll key press
    #[serde(default = "default_scroll_step")]
    pub scroll_step: i32,

    /// Scroll units that make up one terminal row.
    ///
    /// Larger than `append_step`, so an append scrolls by part of a row and
    /// earlier messages stay on screen.
    #[serde(default = "default_units_per_row")]
    pub units_per_row: i32,

    /// Keep the offset within the content instead of scrolling freely
    #[serde(default)]
    pub clamp: bool,
}

impl Default for ScrollSettings {
    fn default() -> Self {
        Self {
            append_step: default_append_step(),
            scroll_step: default_scroll_step(),
            units_per_row: default_units_per_row(),
            clamp: false,
        }
    }
}

fn default_append_step() -> i32 {
    10
}

fn default_scroll_step() -> i32 {
    5
}

fn default_units_per_row() -> i32 {
    15
}

/// Behavior settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// End the session when the server closes the connection
    #[serde(default)]
    pub quit_on_disconnect: bool,

    /// Ask for a username before the first message can be sent
    #[serde(default = "default_true")]
    pub require_username: bool,

    /// Frame pacing in milliseconds
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: u64,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            quit_on_disconnect: false,
            require_username: true,
            frame_interval_ms: default_frame_interval_ms(),
        }
    }
}

impl BehaviorSettings {
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms.max(1))
    }
}

fn default_true() -> bool {
    true
}

fn default_frame_interval_ms() -> u64 {
    16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_fixed_client() {
        let settings = Settings::default();
        assert_eq!(settings.server.host, "104.236.25.60");
        assert_eq!(settings.server.port, 3071);
        assert_eq!(settings.network.poll_timeout(), Duration::from_millis(10));
        assert_eq!(settings.network.read_chunk_bytes, 512);
        assert_eq!(settings.transcript.seed, "-chat-");
        assert_eq!(settings.transcript.initial_capacity, 6000);
        assert_eq!(settings.transcript.grown_capacity, 8192);
        assert_eq!(settings.scroll.append_step, 10);
        assert!(!settings.scroll.clamp);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_overflow_mode_maps_to_policy() {
        assert_eq!(
            OverflowPolicy::from(OverflowMode::Reject),
            OverflowPolicy::Reject
        );
        assert_eq!(
            OverflowPolicy::from(OverflowMode::DropOldest),
            OverflowPolicy::DropOldest
        );
        assert_eq!(OverflowMode::DropOldest.to_string(), "drop_oldest");
    }

    #[test]
    fn test_validate_rejects_shrinking_tiers() {
        let mut settings = Settings::default();
        settings.transcript.grown_capacity = 100;
        let err = settings.validate().unwrap_err();
        assert!(matches!(err, Error::ConfigInvalid { .. }));
    }

    #[test]
    fn test_validate_rejects_zero_port() {
        let mut settings = Settings::default();
        settings.server.port = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_units_per_row() {
        let mut settings = Settings::default();
        settings.scroll.units_per_row = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_positive_steps() {
        let mut settings = Settings::default();
        settings.scroll.scroll_step = i32::MIN;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.scroll.append_step = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.scroll.append_step = -10;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_append_step_is_part_of_a_row() {
        let scroll = ScrollSettings::default();
        assert_eq!(scroll.append_step, 10);
        assert_eq!(scroll.units_per_row, 15);
        assert!(scroll.append_step < scroll.units_per_row);
    }
}
