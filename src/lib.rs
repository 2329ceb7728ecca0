//! fate - a selection-driven modal editing core
//!
//! Every navigation and edit is a transformation of a selection (a sorted set
//! of disjoint intervals) over a text buffer. Edits are previewed keystroke by
//! keystroke and committed as a single operation.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod editable;
pub mod editor;
pub mod input;
pub mod keymap;
pub mod model;
pub mod tracing;
pub mod view;

// Re-export commonly used types
pub use commands::{Command, CommandError};
pub use config::EditorConfig;
pub use editor::{Editor, Mode};
pub use model::Session;
