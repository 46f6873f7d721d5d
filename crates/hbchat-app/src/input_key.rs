//! Abstract input key event, independent of terminal library.
//!
//! The TUI converts crossterm key events into `InputKey` at its boundary so
//! the handlers here never see terminal types.

/// A key press delivered to the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key
    Char(char),
    /// Character with Ctrl held (Ctrl+c, Ctrl+u)
    CharCtrl(char),

    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,

    Enter,
    Esc,
    Backspace,
}

impl InputKey {
    /// Keys that mean "stop" in every mode
    pub fn is_force_quit(&self) -> bool {
        matches!(self, InputKey::CharCtrl('c'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_and_plain_chars_differ() {
        assert_ne!(InputKey::CharCtrl('c'), InputKey::Char('c'));
        assert!(InputKey::CharCtrl('c').is_force_quit());
        assert!(!InputKey::Char('c').is_force_quit());
    }
}
