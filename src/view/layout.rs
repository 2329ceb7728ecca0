//! Frontend-neutral layout of the visible part of a session.
//!
//! Walks the buffer from the viewport anchor and produces styled spans: plain
//! text, selected text, labeled text, pending operation content, and the
//! placeholder glyph for zero-width intervals. A terminal (or any other)
//! front end only has to map [`Style`] to its own attributes.
//!
//! Running out of screen space is expected: layout stops and sets
//! [`Layout::truncated`] instead of failing.

use crate::editable::{EditError, Operation, TextBuffer};
use crate::model::{Label, Session};

use super::viewport::viewport_anchor;

/// Glyph drawn for a zero-width interval
pub const PLACEHOLDER: char = 'ε';
/// Glyph drawn in front of a selected or inserted newline
pub const NEWLINE_MARKER: char = '↵';
/// Marker drawn after the last character of the buffer
pub const EOF_MARKER: &str = "EOF";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    pub reverse: bool,
    pub bold: bool,
    pub label: Option<Label>,
}

impl Style {
    pub const NORMAL: Style = Style {
        reverse: false,
        bold: false,
        label: None,
    };
    pub const SELECTED: Style = Style {
        reverse: true,
        bold: false,
        label: None,
    };
    pub const PENDING: Style = Style {
        reverse: true,
        bold: true,
        label: None,
    };
    pub const EOF: Style = Style {
        reverse: false,
        bold: true,
        label: None,
    };

    fn with_label(self, label: Option<Label>) -> Self {
        Self { label, ..self }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layout {
    /// Buffer position drawn at the top left
    pub anchor: usize,
    pub spans: Vec<Span>,
    /// True if the screen filled up before the end of the buffer
    pub truncated: bool,
}

impl Layout {
    /// Concatenated text of every span
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Text with selected spans wrapped in `[...]` and pending ones in `{...}`
    pub fn marked_text(&self) -> String {
        let mut out = String::new();
        for span in &self.spans {
            match (span.style.reverse, span.style.bold) {
                (true, true) => {
                    out.push('{');
                    out.push_str(&span.text);
                    out.push('}');
                }
                (true, false) => {
                    out.push('[');
                    out.push_str(&span.text);
                    out.push(']');
                }
                _ => out.push_str(&span.text),
            }
        }
        out
    }
}

/// Fixed-size grid that accepts text until it is full
struct Canvas {
    width: usize,
    height: usize,
    row: usize,
    column: usize,
    spans: Vec<Span>,
    full: bool,
}

impl Canvas {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            row: 0,
            column: 0,
            spans: Vec::new(),
            full: height == 0,
        }
    }

    /// Draw `text`; returns false once the canvas is full
    fn draw(&mut self, text: &str, style: Style) -> bool {
        for ch in text.chars() {
            if self.full {
                return false;
            }
            if ch == '\n' {
                self.push(ch, style);
                self.next_row();
                continue;
            }
            if self.column == self.width {
                self.next_row();
                if self.full {
                    return false;
                }
            }
            self.push(ch, style);
            self.column += 1;
        }
        !self.full
    }

    fn next_row(&mut self) {
        self.row += 1;
        self.column = 0;
        if self.row >= self.height {
            self.full = true;
        }
    }

    fn push(&mut self, ch: char, style: Style) {
        match self.spans.last_mut() {
            Some(last) if last.style == style => last.text.push(ch),
            _ => self.spans.push(Span {
                text: ch.to_string(),
                style,
            }),
        }
    }
}

/// Lay out the visible part of `session` on a `width` x `height` screen.
///
/// With a `pending` operation, every edited range is drawn as the content
/// the operation would put there.
pub fn layout(
    session: &Session,
    pending: Option<&Operation>,
    width: usize,
    height: usize,
) -> Result<Layout, EditError> {
    let buffer = &session.buffer;
    let selection = &session.selection;
    let anchor = viewport_anchor(buffer, selection, width, height)?;
    let len = buffer.len_chars();

    let mut canvas = Canvas::new(width, height);
    let mut position = anchor;

    // Zero-width intervals at or after the anchor, in order
    let mut cursors = selection
        .iter()
        .filter(|i| i.is_empty() && i.begin >= anchor)
        .map(|i| i.begin)
        .peekable();
    let edits = pending.map(Operation::edits).unwrap_or_default();
    let mut edit_index = edits.partition_point(|e| e.range.end < anchor);

    loop {
        if pending.is_some() {
            if let Some(edit) = edits.get(edit_index) {
                if edit.range.begin <= position {
                    let content = if edit.content.is_empty() {
                        PLACEHOLDER.to_string()
                    } else {
                        show_newlines(&edit.content)
                    };
                    if !canvas.draw(&content, Style::PENDING) {
                        break;
                    }
                    position = position.max(edit.range.end);
                    edit_index += 1;
                    continue;
                }
            }
        } else if cursors.next_if_eq(&position).is_some() {
            if !canvas.draw(&PLACEHOLDER.to_string(), Style::SELECTED) {
                break;
            }
            continue;
        }

        if position >= len {
            canvas.draw(EOF_MARKER, Style::EOF);
            break;
        }

        let Some(ch) = buffer.char_at(position) else {
            break;
        };
        let label = session.labeling.get(position);
        let drawn = if selection.covers(position) {
            let text = if ch == '\n' {
                show_newlines("\n")
            } else {
                ch.to_string()
            };
            canvas.draw(&text, Style::SELECTED.with_label(label))
        } else {
            canvas.draw(&ch.to_string(), Style::NORMAL.with_label(label))
        };
        if !drawn {
            break;
        }
        position += 1;
    }

    let truncated = canvas.full && position < len;
    tracing::trace!(anchor, spans = canvas.spans.len(), truncated, "laid out view");
    Ok(Layout {
        anchor,
        spans: canvas.spans,
        truncated,
    })
}

fn show_newlines(text: &str) -> String {
    text.replace('\n', &format!("{}\n", NEWLINE_MARKER))
}

/// One-line status: file name, dirty marker, mode, and the selection
pub fn status_line(session: &Session, mode: &str) -> String {
    format!(
        "{}{} | {} | {}",
        session.display_name(),
        if session.saved { "" } else { "*" },
        mode,
        session.selection
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editable::{insert_in_place, Input, Interval, Selection};
    use crate::model::Labeling;

    #[test]
    fn test_selected_run_is_reversed() {
        let mut session = Session::with_text("hello");
        session.selection = Selection::single(Interval::new(1, 3));
        let layout = layout(&session, None, 80, 5).unwrap();
        assert_eq!(layout.marked_text(), "h[el]loEOF");
        assert!(!layout.truncated);
    }

    #[test]
    fn test_zero_width_placeholder() {
        let mut session = Session::with_text("ab");
        session.selection = Selection::new(vec![Interval::cursor(1), Interval::cursor(2)]);
        let layout = layout(&session, None, 80, 5).unwrap();
        assert_eq!(layout.marked_text(), "a[ε]b[ε]EOF");
    }

    #[test]
    fn test_selected_newline_is_visible() {
        let mut session = Session::with_text("a\nb");
        session.selection = Selection::single(Interval::new(1, 2));
        let layout = layout(&session, None, 80, 5).unwrap();
        assert_eq!(layout.plain_text(), "a↵\nbEOF");
    }

    #[test]
    fn test_pending_operation_preview() {
        let mut session = Session::with_text("let x = 1;");
        session.selection = Selection::single(Interval::new(4, 5));
        let op = insert_in_place(&session.buffer, &session.selection, &Input::text("val"));
        let layout = layout(&session, Some(&op), 80, 5).unwrap();
        assert_eq!(layout.marked_text(), "let {val} = 1;EOF");
        // Preview leaves the buffer alone
        assert_eq!(session.text(), "let x = 1;");
    }

    #[test]
    fn test_truncates_when_screen_is_full() {
        let session = Session::with_text("abcdefghij");
        let layout = layout(&session, None, 4, 2).unwrap();
        assert_eq!(layout.plain_text(), "abcdefgh");
        assert!(layout.truncated);
    }

    #[test]
    fn test_labels_are_attached() {
        let session =
            Session::with_text("fn x").with_labeling([(0, Label::Keyword)].into_iter().collect());
        let layout = layout(&session, None, 80, 5).unwrap();
        assert_eq!(layout.spans[0].style, Style::SELECTED.with_label(Some(Label::Keyword)));
        assert_eq!(layout.spans[1].style, Style::NORMAL);
        assert_eq!(Labeling::new().get(0), None);
    }

    #[test]
    fn test_status_line() {
        let mut session = Session::with_text("abc").with_filename("notes.txt");
        session.saved = false;
        assert_eq!(status_line(&session, "SELECT"), "notes.txt* | SELECT | [0, 1)");
    }
}
