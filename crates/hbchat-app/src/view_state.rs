//! Transcript view state: cached projection plus the scroll offset
//!
//! The projection is rebuilt wholesale whenever the transcript generation or
//! the display width changes. The offset is in scroll units; see
//! [`hbchat_core::projection`].
//!
//! Appends move the offset by a fixed step. If the last row was on screen
//! before an append and the step alone would leave the new last row below
//! the view, the offset jumps to the latest position instead.

use hbchat_core::{clamp_offset, offset_rows, project, scroll, TranscriptBuffer};

use crate::config::ScrollSettings;

/// Rows to draw for the current offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleWindow<'a> {
    /// Blank rows above the content (offset scrolled past the start)
    pub leading_blank: usize,
    pub rows: &'a [String],
}

#[derive(Debug, Clone)]
pub struct TranscriptViewState {
    pub offset: i32,
    pub settings: ScrollSettings,
    /// Height of the transcript area, updated by the renderer
    pub visible_rows: usize,
    rows: Vec<String>,
    width: usize,
    generation: Option<u64>,
    /// The last row was on screen just before the latest reprojection
    was_following: bool,
}

impl TranscriptViewState {
    pub fn new(settings: ScrollSettings) -> Self {
        Self {
            offset: 0,
            settings,
            visible_rows: 0,
            rows: Vec::new(),
            width: 0,
            generation: None,
            was_following: false,
        }
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Re-project if the transcript or the width changed since the last call.
    ///
    /// Returns `true` when the projection was rebuilt.
    pub fn ensure_projected(&mut self, transcript: &TranscriptBuffer, width: usize) -> bool {
        if self.width == width && self.generation == Some(transcript.generation()) {
            return false;
        }
        self.width = width;
        self.reproject(transcript);
        true
    }

    /// Rebuild the projection at the last known width
    pub fn reproject(&mut self, transcript: &TranscriptBuffer) {
        self.was_following = self.shows_last_row();
        self.rows = project(transcript.content(), self.width);
        self.generation = Some(transcript.generation());
        if self.settings.clamp {
            self.offset = self.clamped(self.offset);
        }
    }

    /// Automatic decrement after new content is appended
    pub fn follow_append(&mut self) {
        self.apply(self.settings.append_step.saturating_neg());
        if self.was_following && !self.shows_last_row() {
            self.scroll_to_latest();
        }
    }

    /// Reveal earlier content
    pub fn scroll_up(&mut self) {
        self.apply(self.settings.scroll_step);
    }

    /// Reveal later content
    pub fn scroll_down(&mut self) {
        self.apply(self.settings.scroll_step.saturating_neg());
    }

    pub fn page_up(&mut self) {
        self.apply(self.page_units());
    }

    pub fn page_down(&mut self) {
        self.apply(self.page_units().saturating_neg());
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    /// Put the last row at the bottom of the view
    pub fn scroll_to_latest(&mut self) {
        self.offset = self.clamped(i32::MIN);
    }

    /// Rows scrolled by the offset; positive when scrolled past the start
    pub fn row_shift(&self) -> i32 {
        offset_rows(self.offset, self.settings.units_per_row)
    }

    pub fn visible(&self) -> VisibleWindow<'_> {
        let shift = self.row_shift();
        if shift >= 0 {
            let leading_blank = (shift as usize).min(self.visible_rows);
            let take = (self.visible_rows - leading_blank).min(self.rows.len());
            VisibleWindow {
                leading_blank,
                rows: &self.rows[..take],
            }
        } else {
            let start = (shift.unsigned_abs() as usize).min(self.rows.len());
            let end = start.saturating_add(self.visible_rows).min(self.rows.len());
            VisibleWindow {
                leading_blank: 0,
                rows: &self.rows[start..end],
            }
        }
    }

    /// True when the final projected row is inside the view
    pub fn shows_last_row(&self) -> bool {
        let total = self.rows.len();
        if self.visible_rows == 0 || total == 0 {
            return false;
        }
        let shift = self.row_shift();
        if shift >= 0 {
            (shift as usize).saturating_add(total) <= self.visible_rows
        } else {
            let hidden = shift.unsigned_abs() as usize;
            hidden < total && total - hidden <= self.visible_rows
        }
    }

    fn apply(&mut self, delta: i32) {
        self.offset = scroll(self.offset, delta);
        if self.settings.clamp {
            self.offset = self.clamped(self.offset);
        }
    }

    fn clamped(&self, offset: i32) -> i32 {
        clamp_offset(
            offset,
            self.rows.len(),
            self.visible_rows,
            self.settings.units_per_row,
        )
    }

    fn page_units(&self) -> i32 {
        let rows = i32::try_from(self.visible_rows.max(1)).unwrap_or(i32::MAX);
        rows.saturating_mul(self.settings.units_per_row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcript_with(lines: &[&str]) -> TranscriptBuffer {
        let mut transcript = TranscriptBuffer::new("-chat-");
        for line in lines {
            transcript.append(line).unwrap();
        }
        transcript
    }

    #[test]
    fn test_ensure_projected_only_when_changed() {
        let mut transcript = transcript_with(&["hello"]);
        let mut view = TranscriptViewState::new(ScrollSettings::default());

        assert!(view.ensure_projected(&transcript, 40));
        assert!(!view.ensure_projected(&transcript, 40));
        assert_eq!(view.rows(), ["-chat-", "hello"]);

        assert!(view.ensure_projected(&transcript, 3));
        transcript.append("more").unwrap();
        assert!(view.ensure_projected(&transcript, 3));
    }

    #[test]
    fn test_append_and_scroll_steps() {
        let mut view = TranscriptViewState::new(ScrollSettings::default());
        view.follow_append();
        assert_eq!(view.offset, -10);
        view.scroll_up();
        assert_eq!(view.offset, -5);
        view.scroll_down();
        view.scroll_down();
        assert_eq!(view.offset, -15);
    }

    #[test]
    fn test_unclamped_offset_scrolls_past_content() {
        let mut view = TranscriptViewState::new(ScrollSettings::default());
        for _ in 0..10 {
            view.scroll_up();
        }
        assert_eq!(view.offset, 50);
        assert_eq!(view.row_shift(), 3);
    }

    #[test]
    fn test_clamped_offset_stays_in_content() {
        let settings = ScrollSettings {
            clamp: true,
            ..Default::default()
        };
        let transcript = transcript_with(&["a", "b", "c", "d"]);
        let mut view = TranscriptViewState::new(settings);
        view.visible_rows = 2;
        view.ensure_projected(&transcript, 10);

        view.scroll_up();
        assert_eq!(view.offset, 0);

        for _ in 0..20 {
            view.scroll_down();
        }
        // 5 rows, 2 visible: at most 3 rows hidden above
        assert_eq!(view.offset, -45);
    }

    #[test]
    fn test_visible_window_negative_offset() {
        let transcript = transcript_with(&["a", "b", "c"]);
        let mut view = TranscriptViewState::new(ScrollSettings::default());
        view.visible_rows = 2;
        view.ensure_projected(&transcript, 10);
        view.offset = -10;
        // Part of a row: the seed is still drawn
        assert_eq!(view.visible().rows, ["-chat-", "a"]);

        view.offset = -15;
        let window = view.visible();
        assert_eq!(window.leading_blank, 0);
        assert_eq!(window.rows, ["a", "b"]);
    }

    #[test]
    fn test_visible_window_positive_offset_pads_top() {
        let transcript = transcript_with(&["a"]);
        let mut view = TranscriptViewState::new(ScrollSettings::default());
        view.visible_rows = 3;
        view.ensure_projected(&transcript, 10);
        view.offset = 15;

        let window = view.visible();
        assert_eq!(window.leading_blank, 1);
        assert_eq!(window.rows, ["-chat-", "a"]);
    }

    #[test]
    fn test_visible_window_far_past_end_is_empty() {
        let transcript = transcript_with(&["a"]);
        let mut view = TranscriptViewState::new(ScrollSettings::default());
        view.visible_rows = 3;
        view.ensure_projected(&transcript, 10);
        view.offset = -1000;

        assert!(view.visible().rows.is_empty());
    }

    #[test]
    fn test_scroll_to_latest_and_top() {
        let transcript = transcript_with(&["a", "b", "c", "d"]);
        let mut view = TranscriptViewState::new(ScrollSettings::default());
        view.visible_rows = 2;
        view.ensure_projected(&transcript, 10);

        view.scroll_to_latest();
        assert_eq!(view.visible().rows, ["c", "d"]);
        view.scroll_to_top();
        assert_eq!(view.offset, 0);
    }

    #[test]
    fn test_page_scroll_moves_by_visible_rows() {
        let mut view = TranscriptViewState::new(ScrollSettings::default());
        view.visible_rows = 4;
        view.page_down();
        assert_eq!(view.offset, -60);
        view.page_up();
        assert_eq!(view.offset, 0);
    }

    fn append_and_follow(view: &mut TranscriptViewState, transcript: &mut TranscriptBuffer, text: &str) {
        transcript.append(text).unwrap();
        view.reproject(transcript);
        view.follow_append();
    }

    #[test]
    fn test_appends_keep_earlier_rows_on_screen() {
        let mut transcript = TranscriptBuffer::new("-chat-");
        let mut view = TranscriptViewState::new(ScrollSettings::default());
        view.visible_rows = 10;
        view.ensure_projected(&transcript, 40);

        for text in ["one", "two", "three", "four", "five"] {
            append_and_follow(&mut view, &mut transcript, text);
        }

        assert_eq!(view.offset, -50);
        assert_eq!(view.visible().rows, ["three", "four", "five"]);
    }

    #[test]
    fn test_full_view_keeps_following_the_last_row() {
        let mut transcript = TranscriptBuffer::new("-chat-");
        let mut view = TranscriptViewState::new(ScrollSettings::default());
        view.visible_rows = 3;
        view.ensure_projected(&transcript, 40);

        for i in 0..20 {
            append_and_follow(&mut view, &mut transcript, &format!("line {}", i));
            assert!(view.shows_last_row(), "lost the tail after line {}", i);
        }
        assert_eq!(view.visible().rows, ["line 17", "line 18", "line 19"]);
    }

    #[test]
    fn test_append_does_not_pull_back_a_reader_scrolled_up() {
        let mut transcript = TranscriptBuffer::new("-chat-");
        for i in 0..10 {
            transcript.append(&format!("line {}", i)).unwrap();
        }
        let mut view = TranscriptViewState::new(ScrollSettings::default());
        view.visible_rows = 3;
        view.ensure_projected(&transcript, 40);
        assert!(!view.shows_last_row());

        append_and_follow(&mut view, &mut transcript, "new");
        assert_eq!(view.offset, -10);
        assert_eq!(view.visible().rows[0], "-chat-");
    }

    #[test]
    fn test_extreme_steps_saturate() {
        let settings = ScrollSettings {
            scroll_step: i32::MAX,
            ..Default::default()
        };
        let mut view = TranscriptViewState::new(settings);
        view.scroll_down();
        view.scroll_down();
        assert_eq!(view.offset, i32::MIN);
    }
}
