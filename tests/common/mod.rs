//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use fate::editable::{Interval, RopeBuffer, Selection, TextBuffer};
use fate::editor::Editor;
use fate::input::parse_key_script;
use fate::keymap::{default_bindings, Keymap};
use fate::model::Session;

/// Shorthand for `Interval::new`
pub fn iv(begin: usize, end: usize) -> Interval {
    Interval::new(begin, end)
}

/// Session over `text` with the given intervals selected
pub fn session_with(text: &str, intervals: &[(usize, usize)]) -> Session {
    let mut session = Session::with_text(text);
    session.selection = selection(intervals);
    session
}

pub fn selection(intervals: &[(usize, usize)]) -> Selection {
    Selection::new(intervals.iter().map(|&(b, e)| Interval::new(b, e)).collect())
}

/// Editor with the default keymap
pub fn test_editor(text: &str) -> Editor {
    Editor::new(
        Session::with_text(text),
        Keymap::with_bindings(default_bindings()),
    )
}

/// Play a key script, panicking on a malformed script
pub fn type_keys(editor: &mut Editor, script: &str) {
    let keys = parse_key_script(script).expect("valid key script");
    editor.play(&keys);
}

/// Check sortedness, disjointness, and bounds
pub fn assert_valid(selection: &Selection, buffer: &RopeBuffer) {
    assert!(!selection.is_empty(), "selection must not be empty");
    for pair in selection.windows(2) {
        assert!(
            pair[0].end <= pair[1].begin && pair[0] != pair[1],
            "intervals {} and {} overlap or are unsorted",
            pair[0],
            pair[1]
        );
    }
    for interval in selection.iter() {
        assert!(interval.begin <= interval.end);
        assert!(
            interval.end <= buffer.len_chars(),
            "{} past end {}",
            interval,
            buffer.len_chars()
        );
    }
}

/// Deterministic pseudo-random numbers for stress tests
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub fn next(&mut self, bound: usize) -> usize {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((self.0 >> 33) as usize) % bound.max(1)
    }
}
