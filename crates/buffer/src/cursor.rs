// Chunk: docs/chunks/gap_buffer_core - Offset <-> (row, col) mapping and cursor motion

//! Cursor coordinate model.
//!
//! The cursor is a single logical offset in `[0, len]`. [`CursorModel`] is a
//! read-only view over a [`LineIndex`] that converts between that offset and
//! a (row, col) [`Position`], and computes the offset each motion command
//! lands on. It never touches the gap buffer.
//!
//! When the text ends in `\n`, offset `len` sits on a *virtual trailing row*:
//! one past the last indexed line, column 0. The line index does not contain
//! that row, but the cursor can move into and out of it.

use crate::line_index::{Line, LineIndex};
use crate::types::Position;

/// Cursor arithmetic over a line index.
#[derive(Debug, Clone, Copy)]
pub struct CursorModel<'a> {
    index: &'a LineIndex,
}

impl<'a> CursorModel<'a> {
    pub fn new(index: &'a LineIndex) -> Self {
        Self { index }
    }

    /// Number of rows the cursor can occupy, including a virtual trailing row.
    pub fn row_count(&self) -> usize {
        self.index.line_count() + usize::from(self.index.ends_with_newline())
    }

    /// Returns the span of `row`; the virtual trailing row is `[len, len]`.
    pub fn span(&self, row: usize) -> Option<Line> {
        self.index.line(row).or_else(|| {
            let len = self.index.text_len();
            (row == self.index.line_count() && self.index.ends_with_newline())
                .then_some(Line::new(len, len))
        })
    }

    fn check(&self, cursor: usize) {
        assert!(
            cursor <= self.index.text_len(),
            "cursor offset {} out of range for text of length {}",
            cursor,
            self.index.text_len()
        );
    }

    /// Row containing `cursor`: the `i` with `start <= cursor <= end`.
    ///
    /// # Panics
    ///
    /// Panics if `cursor` is past the end of the text.
    pub fn row_of(&self, cursor: usize) -> usize {
        self.check(cursor);
        self.index.line_at_offset(cursor)
    }

    /// Column of `cursor` within its row.
    pub fn col_of(&self, cursor: usize) -> usize {
        let row = self.row_of(cursor);
        self.span(row).map_or(0, |line| cursor - line.start)
    }

    pub fn position_of(&self, cursor: usize) -> Position {
        let row = self.row_of(cursor);
        let col = self.span(row).map_or(0, |line| cursor - line.start);
        Position::new(row, col)
    }

    /// Converts a position to an offset, clamping the row to the last row and
    /// the column to that row's length.
    pub fn offset_of(&self, pos: Position) -> usize {
        let row = pos.line.min(self.row_count() - 1);
        self.offset_in_row(row, pos.col)
    }

    fn offset_in_row(&self, row: usize, col: usize) -> usize {
        match self.span(row) {
            Some(line) => line.start + col.min(line.len()),
            None => self.index.text_len(),
        }
    }

    /// One byte left, stopping at 0.
    pub fn left(&self, cursor: usize) -> usize {
        self.check(cursor);
        cursor.saturating_sub(1)
    }

    /// One byte right, stopping at the end of the text.
    pub fn right(&self, cursor: usize) -> usize {
        self.check(cursor);
        (cursor + 1).min(self.index.text_len())
    }

    /// Same column on the previous row, clamped to its length.
    /// No-op on the first row.
    pub fn up(&self, cursor: usize) -> usize {
        let Position { line: row, col } = self.position_of(cursor);
        if row == 0 {
            return cursor;
        }
        self.offset_in_row(row - 1, col)
    }

    /// Same column on the next row, clamped to its length.
    /// No-op on the last row.
    pub fn down(&self, cursor: usize) -> usize {
        let Position { line: row, col } = self.position_of(cursor);
        if row + 1 >= self.row_count() {
            return cursor;
        }
        self.offset_in_row(row + 1, col)
    }

    /// Top-left pixel of the cursor cell for a monospace grid:
    /// `(col_width * col, row_height * row)`.
    pub fn pixel_hint(&self, cursor: usize, col_width: f32, row_height: f32) -> (f32, f32) {
        let pos = self.position_of(cursor);
        (col_width * pos.col as f32, row_height * pos.line as f32)
    }
}
