//! Actions a key can be bound to in select mode

use std::str::FromStr;

use crate::editable::{OperatorKind, Selector};

/// What pressing a bound key does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Replace the selection immediately
    Select(Selector),
    /// Enter insert mode with this operator
    Operate(OperatorKind),
    /// Open the command line
    CommandMode,
    /// Removes a default binding when used in a user keymap
    Unbound,
}

impl KeyAction {
    /// Name used in keymap files
    pub fn name(&self) -> &'static str {
        match self {
            KeyAction::Select(selector) => selector.name(),
            KeyAction::Operate(kind) => kind.name(),
            KeyAction::CommandMode => "command_mode",
            KeyAction::Unbound => "unbound",
        }
    }
}

impl FromStr for KeyAction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "command_mode" => Ok(KeyAction::CommandMode),
            "unbound" => Ok(KeyAction::Unbound),
            _ => Selector::by_name(s)
                .map(KeyAction::Select)
                .or_else(|| OperatorKind::by_name(s).map(KeyAction::Operate))
                .ok_or(()),
        }
    }
}
