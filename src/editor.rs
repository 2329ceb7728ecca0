//! Modal key handling: select, insert, and command mode
//!
//! ```text
//!            operator key              Escape (commit)
//!   Select ───────────────▶ Insert ───────────────────▶ Select
//!     │  ▲                    │
//!     │  │                    └──── Cancel (discard) ──▶ Select
//!     │  │ Enter / Escape
//!   : ▼  │
//!   Command
//! ```
//!
//! While inserting, the buffer is never touched: every keystroke rebuilds the
//! pending [`Operation`] from the selection taken on entry and the complete
//! input so far. Only Escape commits it.

use crate::commands::parse_command;
use crate::config::EditorConfig;
use crate::editable::{EditError, Input, Operation, OperatorKind, Selection};
use crate::input::Key;
use crate::keymap::{KeyAction, Keymap};
use crate::model::Session;
use crate::tracing::SelectionSnapshot;
use crate::view::{self, Layout};

/// State kept while an operator is collecting input
#[derive(Debug, Clone)]
pub struct InsertState {
    pub operator: OperatorKind,
    pub input: Input,
    /// Selection when insert mode was entered
    pub origin: Selection,
    /// What committing now would do
    pub pending: Operation,
}

#[derive(Debug, Clone)]
pub enum Mode {
    Select,
    Insert(InsertState),
    /// Command line typed so far, without the leading `:`
    Command(String),
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Select => "SELECT",
            Mode::Insert(_) => "INSERT",
            Mode::Command(_) => "COMMAND",
        }
    }
}

/// A session plus the mode it is being edited in
#[derive(Debug, Clone)]
pub struct Editor {
    pub session: Session,
    pub keymap: Keymap,
    pub mode: Mode,
    /// Last command result or error, shown in the status line
    pub status: Option<String>,
    pub wrap_width: usize,
    pub visible_lines: usize,
}

impl Editor {
    pub fn new(session: Session, keymap: Keymap) -> Self {
        let config = EditorConfig::default();
        Self {
            session,
            keymap,
            mode: Mode::Select,
            status: None,
            wrap_width: config.wrap_width,
            visible_lines: config.visible_lines,
        }
    }

    pub fn with_view_size(mut self, wrap_width: usize, visible_lines: usize) -> Self {
        self.wrap_width = wrap_width;
        self.visible_lines = visible_lines;
        self
    }

    /// The operation being previewed, if inserting
    pub fn pending_operation(&self) -> Option<&Operation> {
        match &self.mode {
            Mode::Insert(state) => Some(&state.pending),
            _ => None,
        }
    }

    /// Feed keys one at a time
    pub fn play(&mut self, keys: &[Key]) {
        for &key in keys {
            self.handle_key(key);
        }
    }

    pub fn handle_key(&mut self, key: Key) {
        let before = SelectionSnapshot::from_session(&self.session);
        let mode = std::mem::replace(&mut self.mode, Mode::Select);
        let from = mode.name();

        self.mode = match mode {
            Mode::Select => self.select_key(key),
            Mode::Insert(state) => self.insert_key(state, key),
            Mode::Command(line) => self.command_key(line, key),
        };

        if from != self.mode.name() {
            tracing::debug!(from, to = self.mode.name(), "mode change");
        }
        let after = SelectionSnapshot::from_session(&self.session);
        if let Some(diff) = before.diff(&after) {
            tracing::debug!(?key, "{}", diff);
        }
        self.session.assert_invariants();
    }

    fn select_key(&mut self, key: Key) -> Mode {
        let ch = match key {
            Key::Char(ch) => ch,
            Key::Escape => {
                self.status = None;
                return Mode::Select;
            }
            _ => return Mode::Select,
        };

        match self.keymap.lookup(ch) {
            Some(KeyAction::Select(selector)) => {
                if let Err(e) = self.session.apply_selector(selector) {
                    self.report(e);
                }
                Mode::Select
            }
            Some(KeyAction::Operate(operator)) => {
                let origin = self.session.selection.clone();
                let input = Input::new();
                let pending = operator.operate(&self.session.buffer, &origin, &input);
                Mode::Insert(InsertState {
                    operator,
                    input,
                    origin,
                    pending,
                })
            }
            Some(KeyAction::CommandMode) => Mode::Command(String::new()),
            Some(KeyAction::Unbound) | None => {
                tracing::trace!(key = ?ch, "unbound key");
                Mode::Select
            }
        }
    }

    fn insert_key(&mut self, mut state: InsertState, key: Key) -> Mode {
        match key {
            Key::Escape => {
                self.session.apply_operation(&state.pending);
                tracing::debug!(
                    operator = state.operator.name(),
                    edits = state.pending.edits().len(),
                    "committed insert"
                );
                return Mode::Select;
            }
            Key::Cancel => {
                self.session.selection = state.origin;
                tracing::debug!(operator = state.operator.name(), "cancelled insert");
                return Mode::Select;
            }
            Key::Char(ch) => state.input.push(ch),
            Key::Enter => state.input.push('\n'),
            Key::Backspace => state.input.backspace(),
            Key::Delete => return Mode::Insert(state),
        }

        state.pending = state
            .operator
            .operate(&self.session.buffer, &state.origin, &state.input);
        Mode::Insert(state)
    }

    fn command_key(&mut self, mut line: String, key: Key) -> Mode {
        match key {
            Key::Char(ch) => line.push(ch),
            Key::Backspace => {
                if line.pop().is_none() {
                    return Mode::Select;
                }
            }
            Key::Enter => {
                self.run_command(&line);
                return Mode::Select;
            }
            Key::Escape | Key::Cancel => return Mode::Select,
            Key::Delete => {}
        }
        Mode::Command(line)
    }

    /// Parse and execute a command line, leaving the result in `status`
    pub fn run_command(&mut self, line: &str) {
        let result = parse_command(line).and_then(|command| command.execute(&mut self.session));
        match result {
            Ok(message) => self.status = message,
            Err(e) => {
                tracing::warn!(line, "command failed: {}", e);
                self.status = Some(e.to_string());
            }
        }
    }

    fn report(&mut self, e: EditError) {
        tracing::debug!("rejected: {}", e);
        self.status = Some(e.to_string());
    }

    /// Lay out the current view, previewing any pending operation
    pub fn layout(&self) -> Result<Layout, EditError> {
        view::layout(
            &self.session,
            self.pending_operation(),
            self.wrap_width,
            self.visible_lines,
        )
    }

    /// Status line: session summary, then the command line or last message
    pub fn status_line(&self) -> String {
        let mut line = view::status_line(&self.session, self.mode.name());
        match (&self.mode, &self.status) {
            (Mode::Command(typed), _) => {
                line.push_str(" | :");
                line.push_str(typed);
            }
            (_, Some(status)) => {
                line.push_str(" | ");
                line.push_str(status);
            }
            _ => {}
        }
        line
    }
}
