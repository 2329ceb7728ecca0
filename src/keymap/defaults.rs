//! Default keybindings for the editor
//!
//! The defaults ship as keymap.yaml embedded in the binary, with a hardcoded
//! copy as fallback. Users override them in `<config dir>/keymap.yaml`.

use crate::editable::{OperatorKind, Selector};

use super::action::KeyAction;
use super::binding::Keybinding;
use super::config::{load_keymap_file, parse_keymap_yaml};

/// Default keymap YAML embedded at compile time
const DEFAULT_KEYMAP_YAML: &str = include_str!("../../keymap.yaml");

/// Get the embedded default keymap YAML
pub fn get_default_keymap_yaml() -> &'static str {
    DEFAULT_KEYMAP_YAML
}

/// Load and merge keymaps: defaults + user overrides
///
/// Loading order (each layer overrides the previous):
/// 1. Embedded default keymap (compiled into binary)
/// 2. User config at `<config dir>/keymap.yaml`
///
/// User bindings with `action: unbound` remove the default binding for that key.
pub fn load_default_keymap() -> Vec<Keybinding> {
    let mut bindings = match parse_keymap_yaml(DEFAULT_KEYMAP_YAML) {
        Ok(b) => {
            tracing::info!("Loaded embedded default keymap ({} bindings)", b.len());
            b
        }
        Err(e) => {
            tracing::warn!(
                "Failed to parse embedded keymap: {}, using hardcoded defaults",
                e
            );
            default_bindings()
        }
    };

    if let Some(user_path) = crate::config_paths::keymap_file() {
        if user_path.exists() {
            match load_keymap_file(&user_path) {
                Ok(user_bindings) => {
                    tracing::info!(
                        "Merging user keymap from {} ({} bindings)",
                        user_path.display(),
                        user_bindings.len()
                    );
                    bindings = merge_bindings(bindings, user_bindings);
                }
                Err(e) => {
                    tracing::warn!("Failed to load user keymap from {}: {}", user_path.display(), e);
                }
            }
        }
    }

    bindings
}

/// Merge user bindings into base bindings
///
/// - If the user binds a key that is already bound → replaces it
/// - If the user binding action is `Unbound` → removes the base binding
/// - Otherwise → user binding is added
pub fn merge_bindings(base: Vec<Keybinding>, user: Vec<Keybinding>) -> Vec<Keybinding> {
    let mut result = base;

    for user_binding in user {
        if user_binding.action == KeyAction::Unbound {
            result.retain(|b| b.key != user_binding.key);
            continue;
        }

        match result.iter().position(|b| b.key == user_binding.key) {
            Some(idx) => result[idx] = user_binding,
            None => result.push(user_binding),
        }
    }

    result
}

/// Hardcoded default keybindings (vi-style home row movement)
pub fn default_bindings() -> Vec<Keybinding> {
    vec![
        Keybinding::new('h', KeyAction::Select(Selector::PreviousChar)),
        Keybinding::new('j', KeyAction::Select(Selector::NextLine)),
        Keybinding::new('k', KeyAction::Select(Selector::PreviousLine)),
        Keybinding::new('l', KeyAction::Select(Selector::NextChar)),
        Keybinding::new('%', KeyAction::Select(Selector::Everything)),
        Keybinding::new('~', KeyAction::Select(Selector::Complement)),
        Keybinding::new('i', KeyAction::Operate(OperatorKind::InsertBefore)),
        Keybinding::new('a', KeyAction::Operate(OperatorKind::InsertAfter)),
        Keybinding::new('c', KeyAction::Operate(OperatorKind::Replace)),
        Keybinding::new(':', KeyAction::CommandMode),
    ]
}
