//! Operators: build a pending [`Operation`] from the selection and the input
//! typed so far.
//!
//! Operators never look at a previous operation. The insert loop calls them
//! again on every keystroke with the original buffer and selection plus the
//! full accumulated [`Input`], so a backspace is just a shorter input.

use super::buffer::TextBuffer;
use super::interval::Interval;
use super::operation::{IntervalEdit, Operation};
use super::selection::Selection;

/// Input accumulated while inserting
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Input {
    /// Characters typed
    pub insertions: String,
    /// Backspaces pressed once there was nothing left to un-type
    pub deletions: usize,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(insertions: &str) -> Self {
        Self {
            insertions: insertions.to_string(),
            deletions: 0,
        }
    }

    pub fn push(&mut self, ch: char) {
        self.insertions.push(ch);
    }

    /// Un-type the last character, or delete one more before the interval
    pub fn backspace(&mut self) {
        if self.insertions.pop().is_none() {
            self.deletions += 1;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.insertions.is_empty() && self.deletions == 0
    }
}

/// The available operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    /// Insert in front of each interval, keeping its content
    InsertBefore,
    /// Insert behind each interval, keeping its content
    InsertAfter,
    /// Replace the content of each interval
    Replace,
}

impl OperatorKind {
    pub const ALL: [OperatorKind; 3] = [
        OperatorKind::InsertBefore,
        OperatorKind::InsertAfter,
        OperatorKind::Replace,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            OperatorKind::InsertBefore => "insert_before",
            OperatorKind::InsertAfter => "insert_after",
            OperatorKind::Replace => "insert_in_place",
        }
    }

    pub fn by_name(name: &str) -> Option<OperatorKind> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    pub fn operate<B: TextBuffer>(
        &self,
        buffer: &B,
        selection: &Selection,
        input: &Input,
    ) -> Operation {
        match self {
            OperatorKind::InsertBefore => insert_before(buffer, selection, input),
            OperatorKind::InsertAfter => insert_after(buffer, selection, input),
            OperatorKind::Replace => insert_in_place(buffer, selection, input),
        }
    }
}

/// Insert text immediately before every interval.
///
/// `deletions` characters in front of each interval are removed as well.
/// The selected text itself is left alone; each resulting interval is a
/// cursor right after the inserted text.
pub fn insert_before<B: TextBuffer>(buffer: &B, selection: &Selection, input: &Input) -> Operation {
    build(buffer, selection, input, |interval, floor| {
        let start = interval.begin.saturating_sub(input.deletions).max(floor);
        let len = input.insertions.chars().count();
        IntervalEdit::new(
            Interval::new(start, interval.begin),
            input.insertions.clone(),
            len..len,
        )
    })
}

/// Insert text immediately after every interval.
///
/// Deletions eat into the tail of the interval's own content, never past its
/// beginning. Each resulting interval is a cursor right after the inserted text.
pub fn insert_after<B: TextBuffer>(buffer: &B, selection: &Selection, input: &Input) -> Operation {
    build(buffer, selection, input, |interval, _floor| {
        let start = interval.end.saturating_sub(input.deletions).max(interval.begin);
        let len = input.insertions.chars().count();
        IntervalEdit::new(
            Interval::new(start, interval.end),
            input.insertions.clone(),
            len..len,
        )
    })
}

/// Replace the content of every interval with the inserted text.
///
/// `deletions` characters in front of each interval are removed too. Each
/// resulting interval covers the inserted text.
pub fn insert_in_place<B: TextBuffer>(
    buffer: &B,
    selection: &Selection,
    input: &Input,
) -> Operation {
    build(buffer, selection, input, |interval, floor| {
        let start = interval.begin.saturating_sub(input.deletions).max(floor);
        let len = input.insertions.chars().count();
        IntervalEdit::new(
            Interval::new(start, interval.end),
            input.insertions.clone(),
            0..len,
        )
    })
}

/// Build one edit per interval. `floor` is the end of the previous interval
/// (0 for the first), below which an edit may not reach.
///
/// Nothing typed and nothing deleted is a no-op that keeps the selection.
fn build<B: TextBuffer>(
    buffer: &B,
    selection: &Selection,
    input: &Input,
    edit_for: impl Fn(Interval, usize) -> IntervalEdit,
) -> Operation {
    if input.is_empty() {
        return Operation::unchanged(selection, buffer.len_chars());
    }
    let mut floor = 0;
    let mut edits = Vec::with_capacity(selection.len());
    for interval in selection {
        edits.push(edit_for(*interval, floor));
        floor = interval.end;
    }
    match Operation::from_edits(edits, buffer.len_chars()) {
        Ok(operation) => operation,
        // Edits derived from a valid selection are always ordered and in bounds
        Err(e) => panic!("operator produced an invalid operation: {}", e),
    }
}
