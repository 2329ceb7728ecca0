//! Selection: the ordered, disjoint, non-empty set of intervals every
//! selector and operation works on.
//!
//! Selections are values. Transformations build a new `Selection` from a
//! fresh vector instead of mutating one in place, and every constructor checks
//! the invariant:
//!
//! - at least one interval
//! - sorted by `(begin, end)`
//! - consecutive intervals `i, j` satisfy `i.end <= j.begin`

use std::ops::Deref;

use serde::Serialize;

use super::error::EditError;
use super::interval::Interval;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Selection {
    intervals: Vec<Interval>,
}

impl Selection {
    /// Build a selection from intervals that already satisfy the invariant.
    ///
    /// Panics otherwise: callers inside the core must never produce an
    /// invalid selection.
    pub fn new(intervals: Vec<Interval>) -> Self {
        match Self::try_new(intervals) {
            Ok(selection) => selection,
            Err(e) => panic!("selection invariant violated: {}", e),
        }
    }

    /// Checked constructor for intervals coming from outside the core
    pub fn try_new(intervals: Vec<Interval>) -> Result<Self, EditError> {
        validate(&intervals)?;
        Ok(Self { intervals })
    }

    /// Selection with a single interval
    pub fn single(interval: Interval) -> Self {
        Self {
            intervals: vec![interval],
        }
    }

    /// Selection with a single zero-width interval at `pos`
    pub fn cursor(pos: usize) -> Self {
        Self::single(Interval::cursor(pos))
    }

    /// Sort arbitrary intervals and merge the ones that overlap or coincide.
    ///
    /// Adjacent intervals stay separate. Fails only when `intervals` is empty.
    pub fn normalized(mut intervals: Vec<Interval>) -> Result<Self, EditError> {
        intervals.sort();
        let mut merged: Vec<Interval> = Vec::with_capacity(intervals.len());
        for interval in intervals {
            match merged.last_mut() {
                Some(last) if interval.begin < last.end || interval == *last => {
                    last.end = last.end.max(interval.end);
                }
                _ => merged.push(interval),
            }
        }
        if merged.is_empty() {
            return Err(EditError::EmptySelection);
        }
        Ok(Self { intervals: merged })
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// First interval (the leading edge used to anchor the viewport)
    pub fn primary(&self) -> Interval {
        self.intervals[0]
    }

    /// Last interval
    pub fn last_interval(&self) -> Interval {
        self.intervals[self.intervals.len() - 1]
    }

    /// True iff some interval covers `pos`
    pub fn contains(&self, pos: usize) -> bool {
        // Intervals are sorted; skip everything that ends before `pos`
        let start = self.intervals.partition_point(|i| i.end < pos);
        self.intervals[start..]
            .iter()
            .take_while(|i| i.begin <= pos)
            .any(|i| i.contains(pos))
    }

    /// True iff a non-empty interval covers `pos`, i.e. the character at
    /// `pos` is selected
    pub fn covers(&self, pos: usize) -> bool {
        let start = self.intervals.partition_point(|i| i.end <= pos);
        self.intervals
            .get(start)
            .is_some_and(|i| i.begin <= pos && pos < i.end)
    }

    /// Check that every interval lies within `[0, len]`
    pub fn check_bounds(&self, len: usize) -> Result<(), EditError> {
        let last = self.last_interval();
        if last.end > len {
            return Err(EditError::OutOfBounds {
                interval: last,
                len,
            });
        }
        Ok(())
    }

    /// Panics if any interval reaches past `len`
    pub fn assert_within(&self, len: usize) {
        if let Err(e) = self.check_bounds(len) {
            panic!("selection invariant violated: {}", e);
        }
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::cursor(0)
    }
}

impl Deref for Selection {
    type Target = [Interval];

    fn deref(&self) -> &Self::Target {
        &self.intervals
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, interval) in self.intervals.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", interval)?;
        }
        Ok(())
    }
}

fn validate(intervals: &[Interval]) -> Result<(), EditError> {
    if intervals.is_empty() {
        return Err(EditError::EmptySelection);
    }
    for interval in intervals {
        if interval.begin > interval.end {
            return Err(EditError::InvalidInterval(*interval));
        }
    }
    for pair in intervals.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if a > b {
            return Err(EditError::Unsorted(a, b));
        }
        if a.end > b.begin || a == b {
            return Err(EditError::Overlapping(a, b));
        }
    }
    Ok(())
}
