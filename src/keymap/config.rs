//! YAML configuration parsing for keymaps
//!
//! Parses keymap.yaml files into Keybinding structs.

use std::path::Path;

use serde::Deserialize;

use super::action::KeyAction;
use super::binding::Keybinding;

/// Root structure of a keymap YAML file
#[derive(Debug, Deserialize)]
pub struct KeymapConfig {
    pub bindings: Vec<BindingConfig>,
}

/// A single binding entry from YAML
#[derive(Debug, Deserialize)]
pub struct BindingConfig {
    pub key: String,
    pub action: String,
}

/// Load keybindings from a YAML file
pub fn load_keymap_file(path: &Path) -> Result<Vec<Keybinding>, KeymapError> {
    let content = std::fs::read_to_string(path).map_err(|e| KeymapError::IoError(e.to_string()))?;

    parse_keymap_yaml(&content)
}

/// Parse keybindings from YAML string
pub fn parse_keymap_yaml(yaml: &str) -> Result<Vec<Keybinding>, KeymapError> {
    let config: KeymapConfig =
        serde_yaml::from_str(yaml).map_err(|e| KeymapError::ParseError(e.to_string()))?;

    config
        .bindings
        .into_iter()
        .map(|entry| -> Result<Keybinding, KeymapError> {
            let key = parse_key(&entry.key)?;
            let action = entry
                .action
                .parse::<KeyAction>()
                .map_err(|_| KeymapError::InvalidAction(entry.action.clone()))?;
            Ok(Keybinding::new(key, action))
        })
        .collect()
}

/// Keys are single characters; `space` names ' '
pub fn parse_key(key_str: &str) -> Result<char, KeymapError> {
    if key_str.eq_ignore_ascii_case("space") {
        return Ok(' ');
    }
    let mut chars = key_str.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(KeymapError::InvalidKey(key_str.to_string())),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeymapError {
    IoError(String),
    ParseError(String),
    InvalidKey(String),
    InvalidAction(String),
}

impl std::fmt::Display for KeymapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeymapError::IoError(e) => write!(f, "IO error: {}", e),
            KeymapError::ParseError(e) => write!(f, "Parse error: {}", e),
            KeymapError::InvalidKey(k) => write!(f, "Invalid key: {}", k),
            KeymapError::InvalidAction(a) => write!(f, "Invalid action: {}", a),
        }
    }
}

impl std::error::Error for KeymapError {}
