//! In-memory text buffer with cursor tracking.
//!
//! `InputBuffer` stands in for the host text field: it holds the document
//! text and a cursor, and implements [`TextDocument`] so the deletion driver
//! can run against it in tests and tools exactly as it would against a real
//! platform text surface. Like a platform text field, backspace removes one
//! user-perceived character (grapheme cluster).

use crate::document::TextDocument;
use unicode_segmentation::UnicodeSegmentation;

/// Text buffer tracking content and cursor position.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputBuffer {
    text: String,
    cursor: usize, // Byte offset, always on a char boundary
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer holding `text` with the cursor at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        Self { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position as a byte offset.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn before_cursor(&self) -> &str {
        &self.text[..self.cursor]
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Type `s` at the cursor, leaving the cursor after it.
    pub fn insert_str(&mut self, s: &str) {
        self.text.insert_str(self.cursor, s);
        self.cursor += s.len();
    }

    /// Move the cursor to byte offset `pos`; rejected off a char boundary.
    pub fn set_cursor(&mut self, pos: usize) -> bool {
        if !self.text.is_char_boundary(pos) {
            return false;
        }
        self.cursor = pos;
        true
    }

    /// Backspace: remove the grapheme cluster before the cursor.
    /// Returns false when the cursor is at the start.
    pub fn delete_before(&mut self) -> bool {
        let Some((prev, _)) = self.before_cursor().grapheme_indices(true).next_back() else {
            return false;
        };
        self.text.replace_range(prev..self.cursor, "");
        self.cursor = prev;
        true
    }
}

impl TextDocument for InputBuffer {
    /// An empty buffer reports no context; otherwise the (possibly empty)
    /// text before the cursor.
    fn text_before_cursor(&self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self.before_cursor().to_string())
        }
    }

    fn delete_backward(&mut self) {
        self.delete_before();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::delete_by_granularity;
    use crate::resolver::{DeletionGranularity, Resolver};

    #[test]
    fn test_insert_and_delete() {
        let mut buf = InputBuffer::new();
        buf.insert_str("hi");
        buf.insert_str("!");
        assert_eq!(buf.text(), "hi!");
        assert_eq!(buf.cursor(), 3);

        assert!(buf.delete_before());
        assert_eq!(buf.text(), "hi");
        assert!(buf.delete_before());
        assert!(buf.delete_before());
        assert!(!buf.delete_before());
        assert!(buf.is_empty());
    }

    #[test]
    fn test_multibyte_cursor() {
        let mut buf = InputBuffer::with_text("你好");
        assert_eq!(buf.cursor(), 6);
        assert!(!buf.set_cursor(1));
        assert!(!buf.set_cursor(7));
        assert!(buf.set_cursor(3));
        assert!(buf.delete_before());
        assert_eq!(buf.text(), "好");
        assert_eq!(buf.cursor(), 0);
        assert!(!buf.delete_before());
    }

    #[test]
    fn test_backspace_removes_whole_cluster() {
        for (text, left) in [
            ("cafe\u{301}", "caf"),
            ("ok 👍🏽", "ok "),
            ("go 🇺🇸", "go "),
            ("fam 👨\u{200D}👩\u{200D}👧", "fam "),
        ] {
            let mut buf = InputBuffer::with_text(text);
            assert!(buf.delete_before());
            assert_eq!(buf.text(), left, "backspace on {:?}", text);
            assert_eq!(buf.cursor(), left.len());
        }
    }

    #[test]
    fn test_backspace_mid_text_keeps_tail() {
        let mut buf = InputBuffer::with_text("ab👍🏽cd");
        buf.set_cursor("ab👍🏽".len());
        assert!(buf.delete_before());
        assert_eq!(buf.text(), "abcd");
        assert_eq!(buf.cursor(), 2);
    }

    #[test]
    fn test_context_reporting() {
        let mut buf = InputBuffer::new();
        assert_eq!(buf.text_before_cursor(), None);

        buf.insert_str("abc");
        buf.set_cursor(0);
        assert_eq!(buf.text_before_cursor(), Some(String::new()));

        buf.set_cursor(3);
        assert_eq!(buf.text_before_cursor(), Some("abc".to_string()));
    }

    #[test]
    fn test_word_delete_mid_text() {
        let mut buf = InputBuffer::with_text("one two three");
        buf.set_cursor(7);
        let n = delete_by_granularity(&mut buf, &Resolver::default(), DeletionGranularity::Word);
        assert_eq!(n, 3);
        assert_eq!(buf.text(), "one  three");
        assert_eq!(buf.cursor(), 4);
    }

    #[test]
    fn test_delete_backward_on_empty_is_noop() {
        let mut buf = InputBuffer::new();
        buf.delete_backward();
        assert!(buf.is_empty());
    }
}
