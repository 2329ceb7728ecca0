//! Selection-driven editing core.
//!
//! Every navigation and mutation is a transformation over a [`Selection`]:
//! an ordered set of disjoint character intervals over a text buffer.
//!
//! # Architecture
//!
//! The core components are:
//!
//! - [`TextBuffer`] / [`TextBufferMut`]: Traits abstracting over buffer implementations
//! - [`RopeBuffer`]: Buffer for documents (backed by `ropey::Rope`)
//! - [`Interval`] / [`Selection`]: The interval algebra
//! - [`Selector`] and the free functions in [`selectors`]: Pure selection transforms
//! - [`OperatorKind`] / [`Operation`]: Pending edits, previewed per keystroke and committed once
//! - [`EditError`]: Invalid input handed to the core
//!
//! # Example
//!
//! ```
//! use fate::editable::{insert_before, Input, RopeBuffer, Selection, TextBuffer};
//!
//! let mut buffer = RopeBuffer::from_text("abcdef");
//! let selection = Selection::cursor(2);
//!
//! let operation = insert_before(&buffer, &selection, &Input::text("X"));
//! let selection = operation.commit(&mut buffer);
//!
//! assert_eq!(buffer.content(), "abXcdef");
//! assert_eq!(selection, Selection::cursor(3));
//! ```

mod buffer;
mod error;
mod interval;
mod operation;
mod operators;
mod selection;
pub mod selectors;

// Re-export main types
pub use buffer::{RopeBuffer, TextBuffer, TextBufferMut};
pub use error::EditError;
pub use interval::Interval;
pub use operation::{IntervalEdit, Operation};
pub use operators::{insert_after, insert_before, insert_in_place, Input, OperatorKind};
pub use selection::Selection;
pub use selectors::{bound, partition, Selector};
