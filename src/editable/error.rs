//! Errors raised by the selection algebra and operation protocol on invalid input.

use super::interval::Interval;

/// Caller misuse of the editing core.
///
/// Violations of the selection invariant by the core itself are bugs and
/// panic instead; this type covers data handed in from outside
/// (command-mode arguments, viewport dimensions, hand-built operations).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// Wrap width must be at least one column
    InvalidWrapWidth,
    /// A selection or operation needs at least one interval
    EmptySelection,
    /// `begin > end`
    InvalidInterval(Interval),
    /// Intervals not sorted by position
    Unsorted(Interval, Interval),
    /// Consecutive intervals overlap
    Overlapping(Interval, Interval),
    /// Interval reaches past the end of the buffer
    OutOfBounds { interval: Interval, len: usize },
}

impl std::fmt::Display for EditError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EditError::InvalidWrapWidth => write!(f, "wrap width must be greater than zero"),
            EditError::EmptySelection => write!(f, "selection would be empty"),
            EditError::InvalidInterval(i) => write!(f, "invalid interval {}", i),
            EditError::Unsorted(a, b) => write!(f, "intervals out of order: {} before {}", a, b),
            EditError::Overlapping(a, b) => write!(f, "intervals overlap: {} and {}", a, b),
            EditError::OutOfBounds { interval, len } => {
                write!(f, "interval {} exceeds buffer length {}", interval, len)
            }
        }
    }
}

impl std::error::Error for EditError {}
