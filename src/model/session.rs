//! Session state: the buffer being edited and everything that points into it.

use std::path::PathBuf;

use serde::Serialize;

use crate::editable::{EditError, Interval, Operation, RopeBuffer, Selection, Selector, TextBuffer};

use super::labeling::Labeling;

/// All state of one editing session.
///
/// Passed by reference to whatever needs it; there is no global editor state.
/// `buffer` and `selection` are only ever replaced together through the
/// methods below, so they stay mutually consistent.
#[derive(Debug, Clone)]
pub struct Session {
    pub buffer: RopeBuffer,
    pub selection: Selection,
    /// Externally computed syntax labels (display only)
    pub labeling: Labeling,
    /// Name shown in the status line
    pub filename: Option<PathBuf>,
    /// False once the buffer has been modified
    pub saved: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::with_text("")
    }

    /// Session over `text`, with the first character selected (or a cursor
    /// at 0 when `text` is empty)
    pub fn with_text(text: &str) -> Self {
        let buffer = RopeBuffer::from_text(text);
        let selection = if buffer.is_empty() {
            Selection::cursor(0)
        } else {
            Selection::single(Interval::new(0, 1))
        };
        Self {
            buffer,
            selection,
            labeling: Labeling::new(),
            filename: None,
            saved: true,
        }
    }

    pub fn with_filename(mut self, filename: impl Into<PathBuf>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn with_labeling(mut self, labeling: Labeling) -> Self {
        self.labeling = labeling;
        self
    }

    pub fn text(&self) -> String {
        self.buffer.content()
    }

    /// Replace the selection with the result of `selector`
    pub fn apply_selector(&mut self, selector: Selector) -> Result<(), EditError> {
        let selection = selector.apply(&self.selection, &self.buffer)?;
        tracing::debug!(selector = selector.name(), selection = %selection, "applied selector");
        self.selection = selection;
        self.assert_invariants();
        Ok(())
    }

    /// Replace the selection with one supplied from outside the core
    pub fn set_selection(&mut self, selection: Selection) -> Result<(), EditError> {
        selection.check_bounds(self.buffer.len_chars())?;
        self.selection = selection;
        Ok(())
    }

    /// Commit `operation` to the buffer and take its resulting selection
    pub fn apply_operation(&mut self, operation: &Operation) {
        if operation.is_noop() {
            self.selection = operation.new_selection().clone();
            return;
        }
        self.selection = operation.commit(&mut self.buffer);
        self.saved = false;
        self.assert_invariants();
    }

    /// Display name for status lines
    pub fn display_name(&self) -> String {
        self.filename
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "[scratch]".to_string())
    }

    /// Assert buffer/selection invariants (debug builds only)
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self) {
        debug_assert!(
            Selection::try_new(self.selection.to_vec()).is_ok(),
            "Selection must be sorted and disjoint"
        );
        debug_assert!(
            self.selection
                .check_bounds(self.buffer.len_chars())
                .is_ok(),
            "Selection must stay within the buffer"
        );
    }

    /// No-op in release builds
    #[cfg(not(debug_assertions))]
    #[inline]
    pub fn assert_invariants(&self) {}
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable summary of a session, for `--output json`
#[derive(Debug, Clone, Serialize)]
pub struct SessionDump {
    pub filename: Option<PathBuf>,
    pub saved: bool,
    pub text: String,
    pub selection: Selection,
}

impl From<&Session> for SessionDump {
    fn from(session: &Session) -> Self {
        Self {
            filename: session.filename.clone(),
            saved: session.saved,
            text: session.text(),
            selection: session.selection.clone(),
        }
    }
}
