//! Half-open character intervals.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use super::error::EditError;

/// A half-open range `[begin, end)` of character offsets.
///
/// `begin == end` is a zero-width interval: a bare cursor with nothing selected.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Interval {
    pub begin: usize,
    pub end: usize,
}

impl Interval {
    /// Panics if `begin > end`
    pub const fn new(begin: usize, end: usize) -> Self {
        assert!(begin <= end, "interval begin must not exceed end");
        Self { begin, end }
    }

    pub fn try_new(begin: usize, end: usize) -> Result<Self, EditError> {
        if begin > end {
            return Err(EditError::InvalidInterval(Self { begin, end }));
        }
        Ok(Self { begin, end })
    }

    /// Zero-width interval at `pos`
    pub const fn cursor(pos: usize) -> Self {
        Self {
            begin: pos,
            end: pos,
        }
    }

    pub const fn len(&self) -> usize {
        self.end - self.begin
    }

    pub const fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    /// Whether `pos` is covered; a zero-width interval covers its own position
    pub const fn contains(&self, pos: usize) -> bool {
        if self.is_empty() {
            pos == self.begin
        } else {
            self.begin <= pos && pos < self.end
        }
    }

    /// Same width, moved so it starts at `begin`
    pub const fn moved_to(&self, begin: usize) -> Self {
        Self {
            begin,
            end: begin + self.len(),
        }
    }

    pub fn range(&self) -> Range<usize> {
        self.begin..self.end
    }
}

impl From<Range<usize>> for Interval {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl From<Interval> for Range<usize> {
    fn from(interval: Interval) -> Self {
        interval.range()
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.begin, self.end)
    }
}
