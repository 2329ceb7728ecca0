//! View layout: selection highlighting, pending previews, labels, truncation

mod common;

use common::{session_with, test_editor, type_keys};
use fate::model::{Label, Labeling};
use fate::view::{layout, Style};

#[test]
fn test_multiple_intervals_are_marked() {
    let session = session_with("one two three", &[(0, 3), (8, 8), (8, 13)]);
    let view = layout(&session, None, 80, 4).unwrap();
    // The cursor glyph and the interval after it share a style run
    assert_eq!(view.marked_text(), "[one] two [εthree]EOF");
}

#[test]
fn test_wrapped_text_fills_rows() {
    let session = session_with("abcdefghij", &[(0, 1)]);
    let view = layout(&session, None, 5, 3).unwrap();
    assert_eq!(view.plain_text(), "abcdefghijEOF");
    assert!(!view.truncated);
}

#[test]
fn test_view_scrolls_to_selection() {
    let text: String = (0..40).map(|i| format!("{}\n", i)).collect();
    // line 30 starts at 10*2 + 20*3 = 80
    let session = session_with(&text, &[(80, 82)]);
    let view = layout(&session, None, 80, 6).unwrap();
    assert_eq!(view.anchor, 71);
    assert!(view.marked_text().starts_with("27\n28\n29\n[30]\n31\n"));
    assert!(view.truncated);
}

#[test]
fn test_pending_deletion_shows_placeholder() {
    let mut editor = test_editor("abc");
    type_keys(&mut editor, "lc");
    assert_eq!(editor.layout().unwrap().marked_text(), "a{ε}cEOF");
}

#[test]
fn test_pending_insert_before_keeps_selected_text_visible() {
    let mut editor = test_editor("abc");
    type_keys(&mut editor, "li>>");
    assert_eq!(editor.layout().unwrap().marked_text(), "a{>>}[b]cEOF");
}

#[test]
fn test_pending_newline_is_marked() {
    let mut editor = test_editor("ab");
    type_keys(&mut editor, "c<cr>");
    assert_eq!(editor.layout().unwrap().plain_text(), "↵\nbEOF");
}

#[test]
fn test_labels_follow_positions() {
    let labeling: Labeling = [(0, Label::Keyword), (1, Label::Keyword), (3, Label::Number)]
        .into_iter()
        .collect();
    let session = session_with("fn 1", &[(3, 4)]).with_labeling(labeling);
    let view = layout(&session, None, 80, 2).unwrap();
    let styles: Vec<Style> = view.spans.iter().map(|s| s.style).collect();
    assert_eq!(styles[0].label, Some(Label::Keyword));
    assert_eq!(view.spans[0].text, "fn");
    assert_eq!(styles[1], Style::NORMAL);
    assert_eq!(styles[2].label, Some(Label::Number));
    assert!(styles[2].reverse);
}

#[test]
fn test_view_output_status_line() {
    let mut editor = test_editor("abc");
    type_keys(&mut editor, "ix");
    assert_eq!(editor.status_line(), "[scratch] | INSERT | [0, 1)");
    type_keys(&mut editor, "<esc>");
    assert_eq!(editor.status_line(), "[scratch]* | SELECT | [1, 1)");
}
