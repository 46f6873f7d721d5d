//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    Quit,

    // ─────────────────────────────────────────────────────────
    // Input Session
    // ─────────────────────────────────────────────────────────
    /// Enter-username trigger
    OpenUsernameEntry,
    /// Compose-message trigger
    OpenCompose,
    EntryInput(char),
    EntryBackspace,
    EntryClear,
    EntryConfirm,
    EntryCancel,

    // ─────────────────────────────────────────────────────────
    // Scrolling
    // ─────────────────────────────────────────────────────────
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollToTop,
    ScrollToLatest,

    // ─────────────────────────────────────────────────────────
    // Network
    // ─────────────────────────────────────────────────────────
    /// One chunk of server data
    Inbound(Vec<u8>),
    /// The server closed the connection
    PeerClosed,
    /// A receive poll failed
    ReceiveFailed { reason: String },
    /// An outbound message went out
    Sent { bytes: usize },
    /// An outbound message could not be sent
    SendFailed { reason: String },
}
