//! Pending edits over a whole selection.
//!
//! An [`Operation`] holds one [`IntervalEdit`] per selected interval, computed
//! against a specific buffer state. It can be previewed any number of times
//! and committed once. Ranges always refer to the buffer the operation was
//! computed from; commit applies them back to front so that no edit shifts
//! the offsets of one still waiting to be applied.

use std::cell::OnceCell;
use std::ops::Range;

use super::buffer::TextBufferMut;
use super::error::EditError;
use super::interval::Interval;
use super::selection::Selection;

/// Replacement of one range of the source buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalEdit {
    /// Range of the source buffer being replaced
    pub range: Interval,
    /// Text that takes its place
    pub content: String,
    /// Character range within `content` that becomes the selected interval
    pub selected: Range<usize>,
}

impl IntervalEdit {
    pub fn new(range: Interval, content: String, selected: Range<usize>) -> Self {
        Self {
            range,
            content,
            selected,
        }
    }

    fn content_len(&self) -> usize {
        self.content.chars().count()
    }

    fn delta(&self) -> isize {
        self.content_len() as isize - self.range.len() as isize
    }
}

#[derive(Debug, Clone)]
pub struct Operation {
    edits: Vec<IntervalEdit>,
    /// Buffer length the ranges were computed against
    source_len: usize,
    new_selection: OnceCell<Selection>,
}

impl Operation {
    /// Build an operation from per-interval edits.
    ///
    /// Edits must be non-empty, ordered, non-overlapping, and lie within a
    /// buffer of `source_len` characters.
    pub fn from_edits(edits: Vec<IntervalEdit>, source_len: usize) -> Result<Self, EditError> {
        let Some(last) = edits.last() else {
            return Err(EditError::EmptySelection);
        };
        if last.range.end > source_len {
            return Err(EditError::OutOfBounds {
                interval: last.range,
                len: source_len,
            });
        }
        for pair in edits.windows(2) {
            let (a, b) = (pair[0].range, pair[1].range);
            if a > b {
                return Err(EditError::Unsorted(a, b));
            }
            if a.end > b.begin {
                return Err(EditError::Overlapping(a, b));
            }
        }
        for edit in &edits {
            let len = edit.content_len();
            if edit.selected.start > edit.selected.end || edit.selected.end > len {
                return Err(EditError::InvalidInterval(Interval {
                    begin: edit.selected.start,
                    end: edit.selected.end,
                }));
            }
        }
        Ok(Self {
            edits,
            source_len,
            new_selection: OnceCell::new(),
        })
    }

    /// An operation that leaves both the buffer and `selection` as they are
    pub fn unchanged(selection: &Selection, source_len: usize) -> Self {
        let edits = selection
            .intervals()
            .iter()
            .map(|interval| IntervalEdit::new(Interval::cursor(interval.begin), String::new(), 0..0))
            .collect();
        Self {
            edits,
            source_len,
            new_selection: OnceCell::from(selection.clone()),
        }
    }

    pub fn edits(&self) -> &[IntervalEdit] {
        &self.edits
    }

    /// Content that would replace the `index`-th edited range
    pub fn preview(&self, index: usize) -> &str {
        &self.edits[index].content
    }

    /// True if committing would leave the buffer unchanged
    pub fn is_noop(&self) -> bool {
        self.edits
            .iter()
            .all(|edit| edit.range.is_empty() && edit.content.is_empty())
    }

    /// Selection after commit, computed on first use.
    ///
    /// Each edit's new start is its original start shifted by the length
    /// deltas of every edit before it. Edits that collapse onto the same
    /// position (e.g. two adjacent intervals both deleted) are merged.
    pub fn new_selection(&self) -> &Selection {
        self.new_selection.get_or_init(|| {
            let mut delta: isize = 0;
            let mut intervals = Vec::with_capacity(self.edits.len());
            for edit in &self.edits {
                let start = (edit.range.begin as isize + delta) as usize;
                intervals.push(Interval::new(
                    start + edit.selected.start,
                    start + edit.selected.end,
                ));
                delta += edit.delta();
            }
            match Selection::normalized(intervals) {
                Ok(selection) => selection,
                Err(e) => unreachable!("operation has no edits: {}", e),
            }
        })
    }

    /// Length of the buffer after commit
    pub fn new_len(&self) -> usize {
        let delta: isize = self.edits.iter().map(IntervalEdit::delta).sum();
        (self.source_len as isize + delta) as usize
    }

    /// Apply every edit to `buffer` and return the resulting selection.
    ///
    /// Panics if `buffer` is not the state this operation was computed from.
    pub fn commit<B: TextBufferMut>(&self, buffer: &mut B) -> Selection {
        assert_eq!(
            buffer.len_chars(),
            self.source_len,
            "operation committed against a different buffer"
        );
        for edit in self.edits.iter().rev() {
            buffer.splice(edit.range.range(), &edit.content);
        }
        let selection = self.new_selection().clone();
        selection.assert_within(buffer.len_chars());
        tracing::debug!(
            edits = self.edits.len(),
            len = buffer.len_chars(),
            selection = %selection,
            "committed operation"
        );
        selection
    }
}

impl PartialEq for Operation {
    fn eq(&self, other: &Self) -> bool {
        self.edits == other.edits && self.source_len == other.source_len
    }
}

impl Eq for Operation {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editable::{RopeBuffer, TextBuffer};

    fn edit(begin: usize, end: usize, content: &str, selected: Range<usize>) -> IntervalEdit {
        IntervalEdit::new(Interval::new(begin, end), content.to_string(), selected)
    }

    #[test]
    fn test_from_edits_rejects_empty() {
        assert_eq!(
            Operation::from_edits(vec![], 0).unwrap_err(),
            EditError::EmptySelection
        );
    }

    #[test]
    fn test_from_edits_rejects_overlap() {
        let result = Operation::from_edits(vec![edit(0, 3, "", 0..0), edit(2, 4, "", 0..0)], 5);
        assert!(matches!(result, Err(EditError::Overlapping(..))));
    }

    #[test]
    fn test_from_edits_rejects_selected_past_content() {
        let result = Operation::from_edits(vec![edit(0, 1, "ab", 1..3)], 5);
        assert!(matches!(result, Err(EditError::InvalidInterval(_))));
    }

    #[test]
    fn test_commit_applies_back_to_front() {
        let mut buffer = RopeBuffer::from_text("one two three");
        let op = Operation::from_edits(
            vec![edit(0, 3, "1", 0..1), edit(8, 13, "3!", 0..2)],
            buffer.len_chars(),
        )
        .unwrap();
        let selection = op.commit(&mut buffer);
        assert_eq!(buffer.content(), "1 two 3!");
        assert_eq!(
            selection,
            Selection::new(vec![Interval::new(0, 1), Interval::new(6, 8)])
        );
        assert_eq!(op.new_len(), 8);
    }

    #[test]
    fn test_collapsed_edits_merge() {
        let mut buffer = RopeBuffer::from_text("abcd");
        let op = Operation::from_edits(
            vec![edit(0, 2, "", 0..0), edit(2, 4, "", 0..0)],
            buffer.len_chars(),
        )
        .unwrap();
        assert_eq!(op.commit(&mut buffer), Selection::cursor(0));
        assert_eq!(buffer.content(), "");
    }

    #[test]
    fn test_noop() {
        let op = Operation::from_edits(vec![edit(1, 1, "", 0..0)], 3).unwrap();
        assert!(op.is_noop());
    }

    #[test]
    #[should_panic(expected = "different buffer")]
    fn test_commit_against_wrong_buffer_panics() {
        let op = Operation::from_edits(vec![edit(0, 0, "x", 1..1)], 10).unwrap();
        let mut buffer = RopeBuffer::from_text("short");
        op.commit(&mut buffer);
    }
}
