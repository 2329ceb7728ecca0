//! View computation: what part of the buffer is visible and how it looks.
//!
//! Nothing in here draws to a terminal; see [`layout::Layout`] for the
//! frontend-neutral result.

pub mod layout;
pub mod viewport;

pub use layout::{layout, status_line, Layout, Span, Style};
pub use viewport::{move_n_wrapped_lines_up, viewport_anchor, wrapped_rows};
