//! Outbound chat message formatting

/// Longest username or message body accepted by the text entry
pub const MAX_ENTRY_CHARS: usize = 63;

/// Upper bound on the bytes of one outbound message
pub const MAX_OUTGOING_BYTES: usize = 128;

/// Limits applied by the modal text entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryConstraints {
    /// Longest accepted input, in characters
    pub max_chars: usize,
    /// Confirming an empty entry is refused
    pub non_empty: bool,
    /// The entry surface may offer word prediction
    pub predictive: bool,
}

impl Default for EntryConstraints {
    fn default() -> Self {
        Self {
            max_chars: MAX_ENTRY_CHARS,
            non_empty: true,
            predictive: true,
        }
    }
}

/// A formatted message ready for the wire
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    pub text: String,
    /// The body was cut to respect [`MAX_OUTGOING_BYTES`]
    pub truncated: bool,
}

impl OutgoingMessage {
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }
}

/// Format `"<username>: message"`, cut to [`MAX_OUTGOING_BYTES`] on a char boundary
pub fn format_outgoing(username: &str, message: &str) -> OutgoingMessage {
    let mut text = format!("<{}>: {}", username, message);
    let truncated = truncate_on_char_boundary(&mut text, MAX_OUTGOING_BYTES);
    OutgoingMessage { text, truncated }
}

/// Truncate `text` to at most `max_bytes`, never splitting a character.
///
/// Returns `true` if anything was removed.
pub fn truncate_on_char_boundary(text: &mut String, max_bytes: usize) -> bool {
    if text.len() <= max_bytes {
        return false;
    }
    let mut cut = max_bytes;
    while !text.is_char_boundary(cut) {
        cut -= 1;
    }
    text.truncate(cut);
    true
}
