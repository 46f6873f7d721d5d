//! Screen layout for the chat view

use ratatui::layout::{Constraint, Layout, Rect};

/// Header height: border, title row, username row, border
pub const HEADER_HEIGHT: u16 = 4;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title and "Username: X" line
    pub header: Rect,
    /// Word-wrapped transcript (bordered)
    pub transcript: Rect,
    /// One-line status bar
    pub status: Rect,
}

pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        transcript: chunks[1],
        status: chunks[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let layout = create(Rect::new(0, 0, 80, 24));

        assert_eq!(layout.header.height, 4);
        assert_eq!(layout.transcript.y, 4);
        assert_eq!(layout.transcript.height, 19);
        assert_eq!(layout.status.y, 23);
        assert_eq!(layout.status.height, 1);
    }

    #[test]
    fn test_small_terminal_keeps_status_line() {
        let layout = create(Rect::new(0, 0, 40, 8));
        assert_eq!(layout.status.height, 1);
        assert!(layout.transcript.height >= 3);
    }
}
