//! # hbchat-net - Chat Server Connection
//!
//! The transport between the client and the chat server: one persistent TCP
//! stream carrying raw text in both directions, with no handshake and no
//! framing.
//!
//! Depends on [`hbchat_core`] for error handling.
//!
//! ## Public API
//!
//! - [`Connection`] - Connect, best-effort send, bounded-wait receive
//! - [`Received`] - Outcome of one receive poll (data, idle, or closed)

pub mod channel;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use channel::{
    Connection, Received, DEFAULT_CONNECT_TIMEOUT, DEFAULT_HOST, DEFAULT_POLL_TIMEOUT,
    DEFAULT_PORT, READ_CHUNK_BYTES,
};
