//! Benchmarks for the selection and operation hot paths
//!
//! Run with: cargo bench operations

use fate::editable::selectors::{bound, partition};
use fate::editable::{
    insert_before, insert_in_place, Input, Interval, RopeBuffer, Selection, Selector,
};
use fate::view::move_n_wrapped_lines_up;

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn sample_buffer(lines: usize) -> RopeBuffer {
    RopeBuffer::from_text(&"let value = compute(42);\n".repeat(lines))
}

/// One cursor at the start of every line
fn cursor_per_line(lines: usize) -> Selection {
    Selection::new((0..lines).map(|i| Interval::cursor(i * 25)).collect())
}

// ============================================================================
// Selectors
// ============================================================================

#[divan::bench(args = [10, 100, 1000])]
fn next_line_many_cursors(bencher: divan::Bencher, cursors: usize) {
    let buffer = sample_buffer(cursors + 1);
    let selection = cursor_per_line(cursors);
    bencher.bench(|| {
        Selector::NextLine
            .apply(divan::black_box(&selection), &buffer)
            .unwrap()
    });
}

#[divan::bench(args = [10, 100, 1000])]
fn complement_many_intervals(bencher: divan::Bencher, cursors: usize) {
    let buffer = sample_buffer(cursors);
    let selection = cursor_per_line(cursors);
    bencher.bench(|| partition(divan::black_box(selection.intervals()), &buffer));
}

#[divan::bench]
fn bound_1000_intervals(bencher: divan::Bencher) {
    let selection = cursor_per_line(1000);
    bencher.bench(|| bound(divan::black_box(selection.intervals()), 5000, 20000));
}

// ============================================================================
// Operations
// ============================================================================

#[divan::bench(args = [10, 100, 1000])]
fn preview_insert_per_keystroke(bencher: divan::Bencher, cursors: usize) {
    let buffer = sample_buffer(cursors);
    let selection = cursor_per_line(cursors);
    let input = Input::text("// ");
    bencher.bench(|| insert_before(&buffer, divan::black_box(&selection), &input));
}

#[divan::bench(args = [10, 100, 1000])]
fn commit_replace(bencher: divan::Bencher, cursors: usize) {
    let selection = Selection::new(
        (0..cursors)
            .map(|i| Interval::new(i * 25 + 4, i * 25 + 9))
            .collect(),
    );
    bencher
        .with_inputs(|| sample_buffer(cursors))
        .bench_local_values(|mut buffer| {
            let operation = insert_in_place(&buffer, &selection, &Input::text("result"));
            operation.commit(&mut buffer)
        });
}

// ============================================================================
// Viewport
// ============================================================================

#[divan::bench]
fn viewport_anchor_deep_in_file(bencher: divan::Bencher) {
    let buffer = sample_buffer(10_000);
    let start = 25 * 9_000;
    bencher.bench(|| move_n_wrapped_lines_up(&buffer, 20, divan::black_box(start), 40));
}
