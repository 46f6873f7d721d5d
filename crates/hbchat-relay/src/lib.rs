//! # hbchat-relay - Broadcast Relay Server
//!
//! The server hbchat clients connect to. Each chunk a client sends is
//! censored, prefixed with the client's address, and written to every other
//! connected client.
//!
//! ## Public API
//!
//! - [`Relay`] - Bind and run the relay
//! - [`RelaySettings`] - `relay.toml` settings (bind address, bans, censor list)
//! - [`Censor`] - Case-insensitive word masking
//! - [`parse_preamble()`] - `IP\0PORT\0` proxy preamble parser

pub mod censor;
pub mod config;
pub mod preamble;
pub mod server;

pub use censor::Censor;
pub use config::{default_relay_config_path, load_relay_settings, RelaySettings};
pub use preamble::{parse_preamble, ProxyPreamble, MAX_PREAMBLE_BYTES};
pub use server::{Relay, RelayStats, BANNED_MESSAGE};
