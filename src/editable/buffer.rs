//! Text buffer traits and the rope-backed implementation.
//!
//! Provides `TextBuffer` (read-only) and `TextBufferMut` (read-write) traits.
//! Every position is a character offset in `[0, len_chars()]`; line/column
//! addressing is derived from newline searches rather than stored.

use ropey::Rope;
use std::ops::Range;

/// Read-only view into a text buffer for selectors, operators and rendering.
pub trait TextBuffer {
    /// Total length in characters
    fn len_chars(&self) -> usize;

    /// Check if buffer is empty
    fn is_empty(&self) -> bool {
        self.len_chars() == 0
    }

    /// Get character at offset, None if out of bounds
    fn char_at(&self, offset: usize) -> Option<char>;

    /// Get slice of text as String (by character offsets, clamped to the buffer)
    fn slice(&self, range: Range<usize>) -> String;

    /// Get full content as String (may be expensive for large buffers)
    fn content(&self) -> String;

    /// Offset of the last `needle` strictly before `end`
    fn rfind(&self, needle: char, end: usize) -> Option<usize>;

    /// Offset of the first `needle` at or after `start`
    fn find(&self, needle: char, start: usize) -> Option<usize>;

    /// Offset of the first character of the line containing `offset`
    fn line_start(&self, offset: usize) -> usize {
        self.rfind('\n', offset).map_or(0, |nl| nl + 1)
    }

    /// Offset of the newline ending the line containing `offset` (or the buffer end)
    fn line_end(&self, offset: usize) -> usize {
        self.find('\n', offset).unwrap_or_else(|| self.len_chars())
    }
}

/// Mutable buffer operations. Extends TextBuffer.
pub trait TextBufferMut: TextBuffer {
    /// Insert text at character offset
    fn insert(&mut self, offset: usize, text: &str);

    /// Remove text in character range
    fn remove(&mut self, range: Range<usize>);

    /// Replace `range` with `text` and return the change in length
    fn splice(&mut self, range: Range<usize>, text: &str) -> isize {
        let before = self.len_chars();
        self.remove(range.clone());
        self.insert(range.start, text);
        self.len_chars() as isize - before as isize
    }
}

// =============================================================================
// RopeBuffer
// =============================================================================

/// TextBuffer implementation wrapping ropey::Rope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RopeBuffer {
    rope: Rope,
}

impl RopeBuffer {
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Create a RopeBuffer from a string slice
    pub fn from_text(s: &str) -> Self {
        Self {
            rope: Rope::from_str(s),
        }
    }

    /// Access the underlying Rope for rope-specific operations
    pub fn rope(&self) -> &Rope {
        &self.rope
    }
}

impl TextBuffer for RopeBuffer {
    fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    fn char_at(&self, offset: usize) -> Option<char> {
        self.rope.get_char(offset)
    }

    fn slice(&self, range: Range<usize>) -> String {
        let start = range.start.min(self.len_chars());
        let end = range.end.min(self.len_chars());
        if start >= end {
            return String::new();
        }
        self.rope.slice(start..end).to_string()
    }

    fn content(&self) -> String {
        self.rope.to_string()
    }

    fn rfind(&self, needle: char, end: usize) -> Option<usize> {
        let end = end.min(self.len_chars());
        // Walk backwards from `end` without materializing the prefix
        let mut chars = self.rope.chars_at(end);
        let mut offset = end;
        while let Some(ch) = chars.prev() {
            offset -= 1;
            if ch == needle {
                return Some(offset);
            }
        }
        None
    }

    fn find(&self, needle: char, start: usize) -> Option<usize> {
        if start >= self.len_chars() {
            return None;
        }
        self.rope
            .chars_at(start)
            .position(|ch| ch == needle)
            .map(|i| start + i)
    }
}

impl TextBufferMut for RopeBuffer {
    fn insert(&mut self, offset: usize, text: &str) {
        let clamped = offset.min(self.len_chars());
        self.rope.insert(clamped, text);
    }

    fn remove(&mut self, range: Range<usize>) {
        let start = range.start.min(self.len_chars());
        let end = range.end.min(self.len_chars());
        if start < end {
            self.rope.remove(start..end);
        }
    }
}

impl std::fmt::Display for RopeBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for chunk in self.rope.chunks() {
            f.write_str(chunk)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rope_buffer_basic() {
        let buf = RopeBuffer::from_text("héllo");
        assert_eq!(buf.len_chars(), 5);
        assert_eq!(buf.char_at(1), Some('é'));
        assert_eq!(buf.char_at(5), None);
    }

    #[test]
    fn test_rfind_is_strictly_before_end() {
        let buf = RopeBuffer::from_text("ab\ncd\nef");
        assert_eq!(buf.rfind('\n', 8), Some(5));
        assert_eq!(buf.rfind('\n', 5), Some(2));
        assert_eq!(buf.rfind('\n', 2), None);
        assert_eq!(buf.rfind('\n', 0), None);
        // Past-the-end is clamped
        assert_eq!(buf.rfind('\n', 100), Some(5));
    }

    #[test]
    fn test_find_from_start() {
        let buf = RopeBuffer::from_text("ab\ncd\nef");
        assert_eq!(buf.find('\n', 0), Some(2));
        assert_eq!(buf.find('\n', 2), Some(2));
        assert_eq!(buf.find('\n', 3), Some(5));
        assert_eq!(buf.find('\n', 6), None);
        assert_eq!(buf.find('\n', 42), None);
    }

    #[test]
    fn test_line_bounds() {
        let buf = RopeBuffer::from_text("ab\ncd\nef");
        assert_eq!(buf.line_start(4), 3);
        assert_eq!(buf.line_end(4), 5);
        assert_eq!(buf.line_start(1), 0);
        assert_eq!(buf.line_end(7), 8);
    }

    #[test]
    fn test_splice_returns_delta() {
        let mut buf = RopeBuffer::from_text("hello world");
        assert_eq!(buf.splice(0..5, "bye"), -2);
        assert_eq!(buf.content(), "bye world");
        assert_eq!(buf.splice(3..3, ", cruel"), 7);
        assert_eq!(buf.content(), "bye, cruel world");
    }

    #[test]
    fn test_slice_clamps() {
        let buf = RopeBuffer::from_text("hello");
        assert_eq!(buf.slice(1..3), "el");
        assert_eq!(buf.slice(3..99), "lo");
        assert_eq!(buf.slice(4..2), "");
    }

    #[test]
    fn test_display_matches_content() {
        let buf = RopeBuffer::from_text("line1\nline2");
        assert_eq!(buf.to_string(), buf.content());
    }
}
