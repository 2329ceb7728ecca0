//! Viewport anchoring with soft line wrap.
//!
//! The view never stores a scroll offset. Each render recomputes the buffer
//! position that goes at the top of the screen from the selection's leading
//! edge, so the anchor is a pure function of the current state.

use crate::editable::{EditError, Selection, TextBuffer};

/// Screen rows a hard line with `content_len` characters occupies when
/// wrapped at `wrap_width` columns. An empty line still takes one row, and a
/// line of exactly `wrap_width` characters takes one row, not two.
pub fn wrapped_rows(content_len: usize, wrap_width: usize) -> usize {
    content_len.div_ceil(wrap_width).max(1)
}

/// Return the position of the line start `lines` screen rows above the line
/// containing `start`.
///
/// Walks backwards one hard line at a time, charging each line for every row
/// it wraps to, so a single very long line counts as many rows. Returns 0 once
/// the buffer start is reached.
pub fn move_n_wrapped_lines_up<B: TextBuffer>(
    buffer: &B,
    wrap_width: usize,
    start: usize,
    lines: usize,
) -> Result<usize, EditError> {
    if wrap_width == 0 {
        return Err(EditError::InvalidWrapWidth);
    }
    if start == 0 {
        return Ok(0);
    }
    let Some(mut position) = buffer.rfind('\n', start) else {
        return Ok(0);
    };
    if lines == 0 {
        return Ok(position + 1);
    }

    let mut remaining = lines;
    loop {
        let previous = buffer.rfind('\n', position);
        let line_start = previous.map_or(0, |nl| nl + 1);
        let rows = wrapped_rows(position - line_start, wrap_width);
        if rows >= remaining {
            return Ok(line_start);
        }
        remaining -= rows;
        match previous {
            Some(nl) => position = nl,
            None => return Ok(0),
        }
    }
}

/// Top-of-view position keeping the selection's first interval about half a
/// screen down
pub fn viewport_anchor<B: TextBuffer>(
    buffer: &B,
    selection: &Selection,
    wrap_width: usize,
    visible_lines: usize,
) -> Result<usize, EditError> {
    move_n_wrapped_lines_up(
        buffer,
        wrap_width,
        selection.primary().begin,
        visible_lines / 2,
    )
}
