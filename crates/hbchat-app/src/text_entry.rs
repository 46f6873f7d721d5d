//! Modal text entry
//!
//! While a `TextEntryState` is open the main loop is in its modal sub-state:
//! keys edit the buffer and network polling is suspended until the user
//! confirms or cancels.

use hbchat_core::prelude::*;
use hbchat_core::EntryConstraints;

/// What the entry is collecting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPurpose {
    Username,
    Message,
}

impl EntryPurpose {
    pub fn title(&self) -> &'static str {
        match self {
            EntryPurpose::Username => "Enter username",
            EntryPurpose::Message => "Compose message",
        }
    }
}

/// State of an open text entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEntryState {
    pub purpose: EntryPurpose,
    pub constraints: EntryConstraints,
    buffer: String,
    /// Why the last confirm was refused
    pub error: Option<String>,
}

impl TextEntryState {
    pub fn new(purpose: EntryPurpose) -> Self {
        Self::with_constraints(purpose, EntryConstraints::default())
    }

    pub fn with_constraints(purpose: EntryPurpose, constraints: EntryConstraints) -> Self {
        Self {
            purpose,
            constraints,
            buffer: String::new(),
            error: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn char_count(&self) -> usize {
        self.buffer.chars().count()
    }

    pub fn is_full(&self) -> bool {
        self.char_count() >= self.constraints.max_chars
    }

    /// Append a character. Returns `false` when it was ignored.
    pub fn insert(&mut self, ch: char) -> bool {
        if ch.is_control() || self.is_full() {
            return false;
        }
        self.buffer.push(ch);
        self.error = None;
        true
    }

    pub fn backspace(&mut self) {
        self.buffer.pop();
        self.error = None;
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.error = None;
    }

    /// Validate and take the entered text.
    ///
    /// On rejection the entry keeps its text and records the reason.
    pub fn confirm(&mut self) -> Result<String> {
        if self.constraints.non_empty && self.buffer.is_empty() {
            let err = Error::entry_rejected("input must not be empty");
            self.error = Some(err.to_string());
            return Err(err);
        }
        Ok(std::mem::take(&mut self.buffer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_stops_at_max_chars() {
        let mut entry = TextEntryState::new(EntryPurpose::Message);
        for _ in 0..70 {
            entry.insert('a');
        }
        assert_eq!(entry.char_count(), 63);
        assert!(entry.is_full());
        assert!(!entry.insert('b'));
    }

    #[test]
    fn test_max_chars_counts_characters_not_bytes() {
        let mut entry = TextEntryState::new(EntryPurpose::Username);
        for _ in 0..63 {
            assert!(entry.insert('é'));
        }
        assert_eq!(entry.text().len(), 126);
        assert!(!entry.insert('é'));
    }

    #[test]
    fn test_control_chars_are_ignored() {
        let mut entry = TextEntryState::new(EntryPurpose::Message);
        assert!(!entry.insert('\n'));
        assert!(!entry.insert('\u{7f}'));
        assert_eq!(entry.text(), "");
    }

    #[test]
    fn test_backspace_and_clear() {
        let mut entry = TextEntryState::new(EntryPurpose::Message);
        "hey".chars().for_each(|c| {
            entry.insert(c);
        });
        entry.backspace();
        assert_eq!(entry.text(), "he");
        entry.clear();
        assert_eq!(entry.text(), "");
        entry.backspace();
        assert_eq!(entry.text(), "");
    }

    #[test]
    fn test_confirm_empty_is_rejected_and_entry_stays() {
        let mut entry = TextEntryState::new(EntryPurpose::Username);
        let err = entry.confirm().unwrap_err();
        assert!(matches!(err, Error::EntryRejected { .. }));
        assert!(entry.error.is_some());

        entry.insert('x');
        assert!(entry.error.is_none());
        assert_eq!(entry.confirm().unwrap(), "x");
    }

    #[test]
    fn test_confirm_empty_allowed_without_non_empty() {
        let constraints = EntryConstraints {
            non_empty: false,
            ..Default::default()
        };
        let mut entry = TextEntryState::with_constraints(EntryPurpose::Message, constraints);
        assert_eq!(entry.confirm().unwrap(), "");
    }
}
