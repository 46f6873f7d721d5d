//! # hbchat-app - Application State and Orchestration
//!
//! The TEA (The Elm Architecture) layer of hbchat. Holds the model
//! ([`AppState`]), the [`Message`] type, the [`update()`](handler::update)
//! function, the modal text entry, and configuration loading.
//!
//! Depends on [`hbchat_core`] for the transcript and projection and on
//! [`hbchat_net`] for the connection the [`OutboundSink`] wraps.
//!
//! ## Public API
//!
//! - [`AppState`] - Session model: transcript, view, username, entry, status
//! - [`Message`] - Everything that can happen to the model
//! - [`process_message()`] - Run `update()` and execute resulting actions
//! - [`OutboundSink`] - Seam between the update loop and the transport
//! - [`config`] - `config.toml` loading and validation

pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod state;
pub mod text_entry;
pub mod view_state;

pub use config::Settings;
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use process::{process_message, OutboundSink};
pub use state::{AppPhase, AppState, ConnectionStatus, NoticeLevel, StatusNotice, UiMode};
pub use text_entry::{EntryPurpose, TextEntryState};
pub use view_state::{TranscriptViewState, VisibleWindow};
