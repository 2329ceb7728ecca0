//! Selection algebra tests: bound, partition, and the selection invariant

mod common;

use common::{iv, selection};
use fate::editable::selectors::{bound, partition};
use fate::editable::{EditError, RopeBuffer, Selection, Selector};

// ========================================================================
// Bound
// ========================================================================

#[test]
fn test_bound_is_idempotent() {
    let intervals = [iv(0, 2), iv(3, 3), iv(4, 9), iv(12, 15)];
    for (lo, hi) in [(0, 20), (1, 5), (3, 3), (4, 13), (9, 12)] {
        let once = bound(&intervals, lo, hi);
        let twice = bound(&once, lo, hi);
        assert_eq!(once, twice, "bound({}, {}) not idempotent", lo, hi);
    }
}

#[test]
fn test_bound_result_lies_within_range() {
    let intervals = [iv(0, 2), iv(3, 3), iv(4, 9), iv(12, 15)];
    for interval in bound(&intervals, 1, 13) {
        assert!(interval.begin >= 1 && interval.end <= 13);
    }
}

#[test]
fn test_bound_empty_range_keeps_only_cursors_at_that_point() {
    let intervals = [iv(0, 5), iv(5, 5), iv(6, 8)];
    assert_eq!(bound(&intervals, 5, 5), vec![iv(5, 5)]);
}

#[test]
fn test_bound_selector_rejects_empty_result() {
    let buffer = RopeBuffer::from_text("abcdef");
    let sel = selection(&[(0, 1)]);
    assert_eq!(
        Selector::Bound { lo: 3, hi: 6 }.apply(&sel, &buffer),
        Err(EditError::EmptySelection)
    );
}

// ========================================================================
// Partition
// ========================================================================

#[test]
fn test_partition_interleaves_to_cover_buffer() {
    let buffer = RopeBuffer::from_text("0123456789abcdef");
    let sel = selection(&[(0, 2), (5, 5), (7, 10), (10, 16)]);
    let gaps = partition(&sel, &buffer);
    assert_eq!(gaps.len(), sel.len() + 1);

    // gap0 sel0 gap1 sel1 ... gapN must tile [0, len) exactly
    let mut position = 0;
    for (i, gap) in gaps.iter().enumerate() {
        assert_eq!(gap.begin, position);
        position = gap.end;
        if let Some(interval) = sel.get(i) {
            assert_eq!(interval.begin, position);
            position = interval.end;
        }
    }
    assert_eq!(position, 16);
}

#[test]
fn test_partition_of_whole_buffer() {
    let buffer = RopeBuffer::from_text("abc");
    assert_eq!(
        partition(&selection(&[(0, 3)]), &buffer),
        vec![iv(0, 0), iv(3, 3)]
    );
}

#[test]
fn test_complement_twice_restores_non_empty_intervals() {
    let buffer = RopeBuffer::from_text("abcdefghij");
    let sel = selection(&[(2, 4), (6, 8)]);
    let once = Selector::Complement.apply(&sel, &buffer).unwrap();
    assert_eq!(once.intervals(), &[iv(0, 2), iv(4, 6), iv(8, 10)]);
    let twice = Selector::Complement.apply(&once, &buffer).unwrap();
    assert_eq!(
        twice.intervals(),
        &[iv(0, 0), iv(2, 4), iv(6, 8), iv(10, 10)]
    );
}

// ========================================================================
// Invariant
// ========================================================================

#[test]
fn test_try_new_reports_first_violation() {
    assert_eq!(
        Selection::try_new(vec![iv(0, 1), iv(4, 6), iv(5, 7)]),
        Err(EditError::Overlapping(iv(4, 6), iv(5, 7)))
    );
}

#[test]
fn test_everything_selects_whole_buffer() {
    let buffer = RopeBuffer::from_text("hello\nworld");
    let sel = Selector::Everything
        .apply(&Selection::cursor(3), &buffer)
        .unwrap();
    assert_eq!(sel.intervals(), &[iv(0, 11)]);
}
