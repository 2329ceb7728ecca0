//! Selectors: pure transformations of a selection.
//!
//! Every function here takes a selection (and, where positions depend on
//! content, a buffer) and returns a new value. Nothing mutates its input.

use super::buffer::TextBuffer;
use super::error::EditError;
use super::interval::Interval;
use super::selection::Selection;

/// Clip every interval to `[lo, hi)`.
///
/// Non-empty intervals entirely outside the range are dropped, straddling ones
/// are truncated at the bound. A zero-width interval survives iff
/// `lo <= pos <= hi`, so a cursor sitting at `hi` (e.g. at end of file) is kept.
/// An inverted range (`lo > hi`) keeps nothing.
pub fn bound(intervals: &[Interval], lo: usize, hi: usize) -> Vec<Interval> {
    if lo > hi {
        return Vec::new();
    }
    intervals
        .iter()
        .filter_map(|interval| {
            if interval.is_empty() {
                (lo <= interval.begin && interval.begin <= hi).then_some(*interval)
            } else if interval.end <= lo || interval.begin >= hi {
                None
            } else {
                Some(Interval::new(interval.begin.max(lo), interval.end.min(hi)))
            }
        })
        .collect()
}

/// Complement of `intervals` over `[0, len)`.
///
/// Always yields `intervals.len() + 1` gaps; a gap of zero length (selection
/// touching the buffer start/end or two adjacent intervals) is emitted as a
/// zero-width interval so that gaps and selected intervals strictly alternate.
pub fn partition<B: TextBuffer>(intervals: &[Interval], buffer: &B) -> Vec<Interval> {
    let mut gaps = Vec::with_capacity(intervals.len() + 1);
    let mut position = 0;
    for interval in intervals {
        gaps.push(Interval::new(position, interval.begin.max(position)));
        position = interval.end;
    }
    gaps.push(Interval::new(position, buffer.len_chars().max(position)));
    gaps
}

/// Shift every interval one character forward
pub fn move_to_next_char<B: TextBuffer>(selection: &Selection, buffer: &B) -> Selection {
    let len = buffer.len_chars();
    map_intervals(selection, |interval| {
        if interval.end < len {
            interval.moved_to(interval.begin + 1)
        } else {
            interval
        }
    })
}

/// Shift every interval one character backward
pub fn move_to_previous_char<B: TextBuffer>(selection: &Selection, _buffer: &B) -> Selection {
    map_intervals(selection, |interval| {
        if interval.begin > 0 {
            interval.moved_to(interval.begin - 1)
        } else {
            interval
        }
    })
}

/// Move every interval to the same column on the next hard line
pub fn move_to_next_line<B: TextBuffer>(selection: &Selection, buffer: &B) -> Selection {
    let len = buffer.len_chars();
    map_intervals(selection, |interval| {
        let Some(newline) = buffer.find('\n', interval.begin) else {
            return interval;
        };
        let column = interval.begin - buffer.line_start(interval.begin);
        let next_start = newline + 1;
        let next_len = buffer.line_end(next_start) - next_start;
        fit(interval, next_start + column.min(next_len), len)
    })
}

/// Move every interval to the same column on the previous hard line
pub fn move_to_previous_line<B: TextBuffer>(selection: &Selection, buffer: &B) -> Selection {
    let len = buffer.len_chars();
    map_intervals(selection, |interval| {
        let Some(newline) = buffer.rfind('\n', interval.begin) else {
            return interval;
        };
        let column = interval.begin - (newline + 1);
        let previous_start = buffer.line_start(newline);
        let previous_len = newline - previous_start;
        fit(interval, previous_start + column.min(previous_len), len)
    })
}

/// Move `interval` to `begin`, keeping its width unless that would pass `len`
fn fit(interval: Interval, begin: usize, len: usize) -> Interval {
    Interval::new(begin, (begin + interval.len()).min(len))
}

fn map_intervals(selection: &Selection, f: impl Fn(Interval) -> Interval) -> Selection {
    let moved: Vec<Interval> = selection.iter().map(|interval| f(*interval)).collect();
    tracing::trace!(before = %selection, count = moved.len(), "mapped intervals");
    match Selection::normalized(moved) {
        Ok(selection) => selection,
        // A non-empty input always maps to a non-empty output
        Err(e) => unreachable!("mapping a selection emptied it: {}", e),
    }
}

/// A named selection transformation, bindable to keys and callable from
/// command mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selector {
    NextChar,
    PreviousChar,
    NextLine,
    PreviousLine,
    /// Clip to `[lo, hi)`
    Bound { lo: usize, hi: usize },
    /// Select everything that is currently not selected
    Complement,
    /// Select the whole buffer
    Everything,
}

impl Selector {
    /// Selectors that take no arguments, with their names
    pub const SIMPLE: [(&'static str, Selector); 6] = [
        ("move_to_next_char", Selector::NextChar),
        ("move_to_previous_char", Selector::PreviousChar),
        ("move_to_next_line", Selector::NextLine),
        ("move_to_previous_line", Selector::PreviousLine),
        ("complement", Selector::Complement),
        ("everything", Selector::Everything),
    ];

    /// Look up an argument-less selector by name
    pub fn by_name(name: &str) -> Option<Selector> {
        Self::SIMPLE
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, selector)| *selector)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Selector::NextChar => "move_to_next_char",
            Selector::PreviousChar => "move_to_previous_char",
            Selector::NextLine => "move_to_next_line",
            Selector::PreviousLine => "move_to_previous_line",
            Selector::Bound { .. } => "bound",
            Selector::Complement => "complement",
            Selector::Everything => "everything",
        }
    }

    /// Apply to `selection`; fails only if the result would be empty
    pub fn apply<B: TextBuffer>(
        &self,
        selection: &Selection,
        buffer: &B,
    ) -> Result<Selection, EditError> {
        let result = match *self {
            Selector::NextChar => move_to_next_char(selection, buffer),
            Selector::PreviousChar => move_to_previous_char(selection, buffer),
            Selector::NextLine => move_to_next_line(selection, buffer),
            Selector::PreviousLine => move_to_previous_line(selection, buffer),
            Selector::Bound { lo, hi } => Selection::try_new(bound(selection, lo, hi))?,
            Selector::Complement => Selection::normalized(partition(selection, buffer))?,
            Selector::Everything => Selection::single(Interval::new(0, buffer.len_chars())),
        };
        result.assert_within(buffer.len_chars());
        Ok(result)
    }
}
