//! Configuration file parsing for hbchat
//!
//! Supports `<config_dir>/hbchat/config.toml` or an explicit `--config` path.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, load_settings, load_settings_or_default};
pub use types::*;
