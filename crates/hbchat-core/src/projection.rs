//! Render projection - word wrapping and scroll arithmetic
//!
//! The projection is a pure function of the transcript content and the
//! display width. It is recomputed wholesale whenever either changes.
//!
//! Scroll offsets are signed integers in "scroll units". An offset of zero
//! puts the first transcript row at the top of the view; negative offsets
//! move content up. The offset is not clamped unless the caller asks for it.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Word-wrap `content` into rows no wider than `width` columns.
///
/// Records are split on `\n` (a trailing `\r` is dropped). Words are split
/// on single spaces; a word longer than the width is broken across rows.
/// Returns no rows for a zero width.
pub fn project(content: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut rows = Vec::new();
    for record in content.split('\n') {
        let record = record.strip_suffix('\r').unwrap_or(record);
        wrap_record(record, width, &mut rows);
    }
    rows
}

fn wrap_record(record: &str, width: usize, rows: &mut Vec<String>) {
    let mut row = String::new();
    let mut row_width = 0usize;
    let mut started = false;

    for word in record.split(' ') {
        let word_width = word.width();
        let needed = if started {
            row_width + 1 + word_width
        } else {
            word_width
        };

        if needed <= width {
            if started {
                row.push(' ');
                row_width += 1;
            }
            row.push_str(word);
            row_width += word_width;
            started = true;
            continue;
        }

        if started {
            rows.push(std::mem::take(&mut row));
            row_width = 0;
        }

        if word_width <= width {
            row.push_str(word);
            row_width = word_width;
            started = true;
            continue;
        }

        for ch in word.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if row_width + ch_width > width && row_width > 0 {
                rows.push(std::mem::take(&mut row));
                row_width = 0;
            }
            row.push(ch);
            row_width += ch_width;
        }
        started = true;
    }

    rows.push(row);
}

/// Add `delta` to `offset`. No clamping.
pub fn scroll(offset: i32, delta: i32) -> i32 {
    offset.saturating_add(delta)
}

/// Convert a scroll offset into whole rows.
///
/// Rounds toward zero: a row scrolled partly out of view is still drawn.
pub fn offset_rows(offset: i32, units_per_row: i32) -> i32 {
    offset / units_per_row.max(1)
}

/// Clamp an offset so the view never leaves the content.
///
/// The valid range is from the top of the content (offset 0) down to the
/// offset that shows the last row at the bottom of the view.
pub fn clamp_offset(offset: i32, total_rows: usize, visible_rows: usize, units_per_row: i32) -> i32 {
    let hidden = total_rows.saturating_sub(visible_rows) as i64;
    let lowest = -(hidden * i64::from(units_per_row.max(1)));
    let lowest = lowest.max(i64::from(i32::MIN)) as i32;
    offset.clamp(lowest, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_records_are_one_row_each() {
        assert_eq!(project("-chat-\nhello", 40), vec!["-chat-", "hello"]);
    }

    #[test]
    fn test_wraps_on_word_boundaries() {
        let rows = project("the quick brown fox", 10);
        assert_eq!(rows, vec!["the quick", "brown fox"]);
        assert!(rows.iter().all(|r| r.width() <= 10));
    }

    #[test]
    fn test_breaks_words_longer_than_width() {
        assert_eq!(project("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_long_word_after_short_word_starts_new_row() {
        assert_eq!(project("hi abcdefgh", 5), vec!["hi", "abcde", "fgh"]);
    }

    #[test]
    fn test_blank_records_are_kept() {
        assert_eq!(project("a\n\nb", 10), vec!["a", "", "b"]);
    }

    #[test]
    fn test_carriage_returns_are_dropped() {
        assert_eq!(project("a\r\nb\r", 10), vec!["a", "b"]);
    }

    #[test]
    fn test_wide_chars_count_two_columns() {
        let rows = project("日本語テキスト", 6);
        assert_eq!(rows, vec!["日本語", "テキス", "ト"]);
    }

    #[test]
    fn test_zero_width_projects_nothing() {
        assert!(project("hello", 0).is_empty());
    }

    #[test]
    fn test_project_is_idempotent() {
        let content = "-chat-\n[1.2.3.4]: <alice>: hello there everyone\nshort";
        assert_eq!(project(content, 12), project(content, 12));
    }

    #[test]
    fn test_scroll_is_additive() {
        for (x, d1, d2) in [(0, -10, 5), (-30, -10, -10), (7, 3, -20)] {
            assert_eq!(scroll(scroll(x, d1), d2), scroll(x, d1 + d2));
        }
    }

    #[test]
    fn test_scroll_is_unclamped() {
        assert_eq!(scroll(0, 50), 50);
        assert_eq!(scroll(-1000, -1000), -2000);
    }

    #[test]
    fn test_offset_rows_rounds_toward_zero() {
        assert_eq!(offset_rows(-10, 10), -1);
        assert_eq!(offset_rows(-5, 10), 0);
        assert_eq!(offset_rows(5, 10), 0);
        assert_eq!(offset_rows(20, 10), 2);
        assert_eq!(offset_rows(-10, 15), 0);
        assert_eq!(offset_rows(-50, 15), -3);
        assert_eq!(offset_rows(i32::MIN, 15), i32::MIN / 15);
    }

    #[test]
    fn test_clamp_offset_bounds() {
        // 30 rows of content, 10 visible: may scroll 20 rows down
        assert_eq!(clamp_offset(50, 30, 10, 10), 0);
        assert_eq!(clamp_offset(-500, 30, 10, 10), -200);
        assert_eq!(clamp_offset(-50, 30, 10, 10), -50);
        // Content shorter than the view cannot scroll at all
        assert_eq!(clamp_offset(-50, 5, 10, 10), 0);
    }
}
