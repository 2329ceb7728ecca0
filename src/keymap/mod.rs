//! Configurable keyboard mapping for select mode
//!
//! This module provides a data-driven keybinding system that:
//! - Maps typed characters to selectors, operators, or command mode
//! - Ships defaults as an embedded YAML file
//! - Enables user customization via YAML config files
//!
//! # Architecture
//!
//! ```text
//! Key::Char → Keymap::lookup() → KeyAction → Selector | OperatorKind | command line
//! ```
//!
//! # Loading Keymaps
//!
//! ```ignore
//! // Load from embedded defaults
//! let keymap = Keymap::with_bindings(default_bindings());
//!
//! // Or defaults merged with the user's keymap.yaml
//! let keymap = Keymap::with_bindings(load_default_keymap());
//! ```

mod action;
mod binding;
mod config;
mod defaults;
#[allow(clippy::module_inception)]
mod keymap;

pub use action::KeyAction;
pub use binding::Keybinding;
pub use config::{load_keymap_file, parse_key, parse_keymap_yaml, KeymapError};
pub use defaults::{default_bindings, get_default_keymap_yaml, load_default_keymap, merge_bindings};
pub use keymap::Keymap;

#[cfg(test)]
mod tests;
