//! Keybinding struct representing a mapping from a key to an action

use super::action::KeyAction;

/// A single keybinding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keybinding {
    /// Character typed in select mode
    pub key: char,
    /// The action to perform
    pub action: KeyAction,
}

impl Keybinding {
    pub fn new(key: char, action: KeyAction) -> Self {
        Self { key, action }
    }
}
