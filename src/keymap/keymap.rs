//! Keymap struct for storing and looking up keybindings

use std::collections::HashMap;

use super::action::KeyAction;
use super::binding::Keybinding;

/// The keymap stores all keybindings and handles lookup
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    /// All registered bindings
    bindings: Vec<Keybinding>,
    /// Fast lookup (indices into bindings)
    lookup: HashMap<char, usize>,
}

impl Keymap {
    /// Create an empty keymap
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a keymap with the given bindings
    pub fn with_bindings(bindings: Vec<Keybinding>) -> Self {
        let mut keymap = Self::new();
        for binding in bindings {
            keymap.add_binding(binding);
        }
        keymap
    }

    /// Add a binding, replacing any existing binding for the same key
    pub fn add_binding(&mut self, binding: Keybinding) {
        if binding.action == KeyAction::Unbound {
            return;
        }
        match self.lookup.get(&binding.key) {
            Some(&idx) => self.bindings[idx] = binding,
            None => {
                self.lookup.insert(binding.key, self.bindings.len());
                self.bindings.push(binding);
            }
        }
    }

    /// Action bound to `key`, if any
    pub fn lookup(&self, key: char) -> Option<KeyAction> {
        self.lookup.get(&key).map(|&idx| self.bindings[idx].action)
    }

    /// Find the first key bound to an action (for help text)
    pub fn binding_for(&self, action: KeyAction) -> Option<&Keybinding> {
        self.bindings.iter().find(|b| b.action == action)
    }

    pub fn bindings(&self) -> &[Keybinding] {
        &self.bindings
    }
}
