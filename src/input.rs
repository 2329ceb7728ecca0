//! Keys as the editor state machine sees them, and the key script format
//! used to drive it without a terminal.
//!
//! A key script is plain text where every character is typed as-is, except
//! for bracketed names:
//!
//! | Token                 | Key               |
//! |-----------------------|-------------------|
//! | `<esc>`               | Escape            |
//! | `<bs>`                | Backspace         |
//! | `<del>`               | Delete            |
//! | `<cr>` / `<enter>`    | Enter             |
//! | `<cancel>` / `<c-c>`  | Cancel (Ctrl-C)   |
//! | `<lt>`                | a literal `<`     |
//!
//! A literal newline in the script is Enter as well.

/// A single keystroke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Escape,
    Backspace,
    Delete,
    Enter,
    /// Abort the current mode without applying anything
    Cancel,
}

impl Key {
    fn from_name(name: &str) -> Option<Key> {
        match name.to_ascii_lowercase().as_str() {
            "esc" | "escape" => Some(Key::Escape),
            "bs" | "backspace" => Some(Key::Backspace),
            "del" | "delete" => Some(Key::Delete),
            "cr" | "enter" | "return" => Some(Key::Enter),
            "cancel" | "c-c" => Some(Key::Cancel),
            "lt" => Some(Key::Char('<')),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyScriptError {
    /// `<name>` that is not a known key
    UnknownKey(String),
    /// `<` without a closing `>`
    Unterminated(String),
}

impl std::fmt::Display for KeyScriptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyScriptError::UnknownKey(k) => write!(f, "Unknown key: <{}>", k),
            KeyScriptError::Unterminated(k) => write!(f, "Unterminated key name: <{}", k),
        }
    }
}

impl std::error::Error for KeyScriptError {}

/// Parse a key script into keystrokes
pub fn parse_key_script(script: &str) -> Result<Vec<Key>, KeyScriptError> {
    let mut keys = Vec::new();
    let mut chars = script.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '<' => {
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some('>') => break,
                        Some(c) => name.push(c),
                        None => return Err(KeyScriptError::Unterminated(name)),
                    }
                }
                let key = Key::from_name(&name).ok_or(KeyScriptError::UnknownKey(name))?;
                keys.push(key);
            }
            '\n' => keys.push(Key::Enter),
            c => keys.push(Key::Char(c)),
        }
    }
    Ok(keys)
}
