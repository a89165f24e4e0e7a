// Chunk: docs/chunks/gap_buffer_core - Buffer object owning storage, line index and cursor

//! TextBuffer is the public editing surface of this crate.
//!
//! It owns a [`GapBuffer`] (storage), a [`LineIndex`] (derived, rebuilt after
//! every mutation) and a single logical cursor offset. Every command returns
//! the [`DirtyLines`] it caused and also accumulates them for
//! [`BufferView::take_dirty`](crate::BufferView::take_dirty).

use crate::cursor::CursorModel;
use crate::file_codec;
use crate::gap_buffer::{GapBuffer, DEFAULT_GAP_SIZE};
use crate::line_index::{Line, LineIndex};
use crate::types::{DirtyLines, Position};

/// Backspace as it arrives in a character stream.
const BACKSPACE: u8 = 0x08;

/// An editable text buffer with a cursor.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    buffer: GapBuffer,
    line_index: LineIndex,
    /// Logical offset in `[0, len]`.
    cursor: usize,
    /// Damage accumulated since the last `take_dirty`.
    dirty: DirtyLines,
}

impl TextBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::with_gap(DEFAULT_GAP_SIZE)
    }

    /// Creates an empty buffer whose storage starts with `gap` free bytes.
    pub fn with_gap(gap: usize) -> Self {
        Self::from_bytes_with_gap(&[], gap)
    }

    /// Creates a buffer holding `bytes`, with line endings normalized to `\n`.
    /// The cursor starts at the end of the text, where the gap is, so the
    /// first edit moves nothing.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::from_bytes_with_gap(bytes, DEFAULT_GAP_SIZE)
    }

    pub fn from_bytes_with_gap(bytes: &[u8], gap: usize) -> Self {
        let text = file_codec::decode(bytes);
        let buffer = GapBuffer::from_bytes(&text, gap);
        let mut line_index = LineIndex::new();
        line_index.rebuild(buffer.bytes());
        let cursor = buffer.gap_position();

        Self {
            buffer,
            line_index,
            cursor,
            dirty: DirtyLines::FromLineToEnd(0),
        }
    }

    /// Creates a buffer from a string. See [`TextBuffer::from_bytes`].
    ///
    /// Note: We don't implement `FromStr` because it requires returning `Result`,
    /// but building a buffer from a string cannot fail.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Self {
        Self::from_bytes(content.as_bytes())
    }

    fn cursor_model(&self) -> CursorModel<'_> {
        CursorModel::new(&self.line_index)
    }

    // ==================== Accessors ====================

    /// Returns the cursor as a logical offset.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the cursor as (row, col).
    pub fn cursor_position(&self) -> Position {
        self.cursor_model().position_of(self.cursor)
    }

    pub fn cursor_row(&self) -> usize {
        self.cursor_model().row_of(self.cursor)
    }

    pub fn cursor_col(&self) -> usize {
        self.cursor_model().col_of(self.cursor)
    }

    /// Pixel position of the cursor cell: `(col_width * col, row_height * row)`.
    pub fn cursor_pixel_hint(&self, col_width: f32, row_height: f32) -> (f32, f32) {
        self.cursor_model().pixel_hint(self.cursor, col_width, row_height)
    }

    /// Returns the number of lines. Always at least 1; a trailing `\n` does
    /// not start a new line.
    pub fn line_count(&self) -> usize {
        self.line_index.line_count()
    }

    /// Returns the span of `line`, or `None` if out of bounds.
    pub fn line(&self, line: usize) -> Option<Line> {
        self.line_index.line(line)
    }

    /// Returns all line spans.
    pub fn lines(&self) -> &[Line] {
        self.line_index.lines()
    }

    /// Returns the bytes of `line` without its newline.
    /// Returns an empty vector if the line index is out of bounds.
    pub fn line_text(&self, line: usize) -> Vec<u8> {
        match self.line_index.line(line) {
            Some(span) => self.buffer.read_range(span.start, span.end),
            None => Vec::new(),
        }
    }

    /// Returns `line` as text for display, replacing invalid UTF-8.
    pub fn line_content(&self, line: usize) -> String {
        String::from_utf8_lossy(&self.line_text(line)).into_owned()
    }

    /// Returns the length of `line` in bytes (0 if out of bounds).
    pub fn line_len(&self, line: usize) -> usize {
        self.line_index.line_len(line).unwrap_or(0)
    }

    /// Returns the logical byte count.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Iterates over the logical text.
    pub fn bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.buffer.bytes()
    }

    /// Returns the whole logical text.
    pub fn contents(&self) -> Vec<u8> {
        self.buffer.to_vec()
    }

    /// Returns the text as it is written to disk (`\n` expanded to `\r\n`).
    pub fn encoded(&self) -> Vec<u8> {
        file_codec::encode(self.buffer.bytes())
    }

    /// Bytes moved across the gap so far. See [`GapBuffer::relocated_bytes`].
    pub fn relocated_bytes(&self) -> usize {
        self.buffer.relocated_bytes()
    }

    /// Storage reallocations so far.
    pub fn growth_count(&self) -> usize {
        self.buffer.growth_count()
    }

    /// Returns and clears the damage accumulated since the last call.
    pub fn take_dirty(&mut self) -> DirtyLines {
        std::mem::take(&mut self.dirty)
    }

    // ==================== Mutations ====================

    /// Inserts `byte` at the cursor and advances the cursor past it.
    ///
    /// `\r` is stored as `\n` and a tab as four spaces. A backspace byte
    /// (0x08) deletes instead, see [`TextBuffer::backspace`].
    pub fn insert(&mut self, byte: u8) -> DirtyLines {
        if byte == BACKSPACE {
            return self.backspace();
        }

        let row = self.cursor_row();
        self.cursor += self.buffer.insert(self.cursor, byte);
        self.rebuild_lines();

        let dirty = if matches!(byte, b'\n' | b'\r') {
            DirtyLines::FromLineToEnd(row)
        } else {
            DirtyLines::Single(row)
        };
        self.mark_dirty(dirty)
    }

    /// Inserts a run of bytes at the cursor (paste), with the same
    /// normalization as [`TextBuffer::insert`]. Backspace bytes delete the
    /// byte before the cursor at that point of the run.
    pub fn insert_bytes(&mut self, bytes: &[u8]) -> DirtyLines {
        let mut dirty = DirtyLines::None;
        for (i, run) in bytes.split(|&b| b == BACKSPACE).enumerate() {
            if i > 0 {
                dirty.merge(self.backspace());
            }
            dirty.merge(self.insert_run(run));
        }
        dirty
    }

    fn insert_run(&mut self, bytes: &[u8]) -> DirtyLines {
        if bytes.is_empty() {
            return DirtyLines::None;
        }

        let row = self.cursor_row();
        self.cursor += self.buffer.insert_bytes(self.cursor, bytes);
        self.rebuild_lines();

        let dirty = if bytes.iter().any(|b| matches!(b, b'\n' | b'\r')) {
            DirtyLines::FromLineToEnd(row)
        } else {
            DirtyLines::Single(row)
        };
        self.mark_dirty(dirty)
    }

    /// Inserts a string at the cursor. See [`TextBuffer::insert_bytes`].
    pub fn insert_str(&mut self, s: &str) -> DirtyLines {
        self.insert_bytes(s.as_bytes())
    }

    /// Deletes the byte before the cursor (Backspace).
    ///
    /// Deleting a `\n` joins two lines. Returns `DirtyLines::None` at offset 0.
    pub fn backspace(&mut self) -> DirtyLines {
        let Some(deleted) = self.buffer.delete_before(self.cursor) else {
            return DirtyLines::None;
        };
        self.cursor -= 1;
        self.rebuild_lines();

        let row = self.cursor_row();
        let dirty = if deleted == b'\n' {
            DirtyLines::FromLineToEnd(row)
        } else {
            DirtyLines::Single(row)
        };
        self.mark_dirty(dirty)
    }

    fn rebuild_lines(&mut self) {
        self.line_index.rebuild(self.buffer.bytes());
        debug_assert_eq!(self.line_index.text_len(), self.buffer.len());
        debug_assert!(self.cursor <= self.buffer.len());
    }

    fn mark_dirty(&mut self, dirty: DirtyLines) -> DirtyLines {
        self.dirty.merge(dirty);
        dirty
    }

    // ==================== Cursor Movement ====================

    /// Moves the cursor to `offset`, returning the rows that need repainting
    /// (the old and new cursor rows).
    fn move_cursor_to(&mut self, offset: usize) -> DirtyLines {
        if offset == self.cursor {
            return DirtyLines::None;
        }
        let mut dirty = DirtyLines::Single(self.cursor_row());
        self.cursor = offset;
        dirty.merge(DirtyLines::Single(self.cursor_row()));
        self.mark_dirty(dirty)
    }

    /// Moves the cursor one byte left, stopping at the start of the text.
    pub fn move_left(&mut self) -> DirtyLines {
        let target = self.cursor_model().left(self.cursor);
        self.move_cursor_to(target)
    }

    /// Moves the cursor one byte right, stopping at the end of the text.
    pub fn move_right(&mut self) -> DirtyLines {
        let target = self.cursor_model().right(self.cursor);
        self.move_cursor_to(target)
    }

    /// Moves the cursor up one row, clamping the column to the row's length.
    pub fn move_up(&mut self) -> DirtyLines {
        let target = self.cursor_model().up(self.cursor);
        self.move_cursor_to(target)
    }

    /// Moves the cursor down one row, clamping the column to the row's length.
    pub fn move_down(&mut self) -> DirtyLines {
        let target = self.cursor_model().down(self.cursor);
        self.move_cursor_to(target)
    }

    /// Places the cursor at `pos`, clamped to valid bounds.
    pub fn set_cursor(&mut self, pos: Position) -> DirtyLines {
        let target = self.cursor_model().offset_of(pos);
        self.move_cursor_to(target)
    }

    /// Places the cursor at a logical offset.
    ///
    /// # Panics
    ///
    /// Panics if `offset > len()`.
    pub fn set_cursor_offset(&mut self, offset: usize) -> DirtyLines {
        assert!(
            offset <= self.len(),
            "cursor offset {} out of range for buffer of length {}",
            offset,
            self.len()
        );
        self.move_cursor_to(offset)
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Construction ====================

    #[test]
    fn test_new_is_one_empty_line() {
        let buf = TextBuffer::new();
        assert!(buf.is_empty());
        assert_eq!(buf.line_count(), 1);
        assert_eq!(buf.lines(), &[Line::new(0, 0)]);
        assert_eq!(buf.cursor_position(), Position::new(0, 0));
    }

    #[test]
    fn test_from_bytes_normalizes_line_endings() {
        let buf = TextBuffer::from_bytes(b"one\r\ntwo\rthree");
        assert_eq!(buf.contents(), b"one\ntwo\nthree");
        assert_eq!(buf.line_count(), 3);
        assert_eq!(buf.cursor(), buf.len());
    }

    #[test]
    fn test_loaded_text_starts_with_cursor_at_gap() {
        let mut buf = TextBuffer::from_bytes(&vec![b'x'; 50_000]);
        assert_eq!(buf.cursor_position(), Position::new(0, 50_000));

        buf.insert(b'a');
        assert_eq!(buf.relocated_bytes(), 0);
        assert_eq!(buf.len(), 50_001);
    }

    #[test]
    fn test_line_text_and_content() {
        let buf = TextBuffer::from_str("hello\nworld");
        assert_eq!(buf.line_text(0), b"hello");
        assert_eq!(buf.line_content(1), "world");
        assert_eq!(buf.line_text(2), b"");
        assert_eq!(buf.line_len(1), 5);
    }

    // ==================== Insertion ====================

    #[test]
    fn test_insert_advances_cursor() {
        let mut buf = TextBuffer::new();
        assert_eq!(buf.insert(b'h'), DirtyLines::Single(0));
        buf.insert(b'i');
        assert_eq!(buf.contents(), b"hi");
        assert_eq!(buf.cursor(), 2);
    }

    #[test]
    fn test_insert_newline_splits_line() {
        let mut buf = TextBuffer::from_str("helloworld");
        buf.set_cursor(Position::new(0, 5));
        assert_eq!(buf.insert(b'\n'), DirtyLines::FromLineToEnd(0));
        assert_eq!(buf.line_count(), 2);
        assert_eq!(buf.line_content(0), "hello");
        assert_eq!(buf.line_content(1), "world");
        assert_eq!(buf.cursor_position(), Position::new(1, 0));
    }

    #[test]
    fn test_insert_carriage_return_is_newline() {
        let mut buf = TextBuffer::from_str("ab");
        buf.set_cursor_offset(1);
        assert_eq!(buf.insert(b'\r'), DirtyLines::FromLineToEnd(0));
        assert_eq!(buf.contents(), b"a\nb");
    }

    #[test]
    fn test_insert_tab_moves_cursor_four() {
        let mut buf = TextBuffer::new();
        buf.insert(b'\t');
        assert_eq!(buf.contents(), b"    ");
        assert_eq!(buf.cursor_col(), 4);
    }

    #[test]
    fn test_insert_str_mid_line() {
        let mut buf = TextBuffer::from_str("second line");
        buf.set_cursor(Position::new(0, 7));
        assert_eq!(buf.insert_str("awesome "), DirtyLines::Single(0));
        assert_eq!(buf.line_content(0), "second awesome line");
        assert_eq!(buf.insert_str(""), DirtyLines::None);
    }

    #[test]
    fn test_insert_on_virtual_trailing_row() {
        let mut buf = TextBuffer::from_str("ab\n");
        buf.set_cursor_offset(3);
        assert_eq!(buf.cursor_position(), Position::new(1, 0));

        assert_eq!(buf.insert(b'x'), DirtyLines::Single(1));
        assert_eq!(buf.line_count(), 2);
        assert_eq!(buf.line_content(1), "x");
    }

    // ==================== Backspace ====================

    #[test]
    fn test_backspace_byte_deletes() {
        let mut buf = TextBuffer::from_str("abc");
        assert_eq!(buf.insert(0x08), DirtyLines::Single(0));
        assert_eq!(buf.contents(), b"ab");
        assert_eq!(buf.cursor(), 2);
    }

    #[test]
    fn test_insert_bytes_applies_backspace_bytes_in_order() {
        let mut buf = TextBuffer::new();
        buf.insert_bytes(b"teh\x08\x08he");
        assert_eq!(buf.contents(), b"the");
        assert_eq!(buf.cursor(), 3);

        buf.insert_bytes(b"\x08\x08\x08\x08");
        assert!(buf.is_empty());
        assert_eq!(buf.insert_bytes(b"\x08"), DirtyLines::None);
    }

    #[test]
    fn test_backspace_removes_previous_byte() {
        let mut buf = TextBuffer::from_str("abc");
        buf.set_cursor_offset(2);
        assert_eq!(buf.backspace(), DirtyLines::Single(0));
        assert_eq!(buf.contents(), b"ac");
        assert_eq!(buf.cursor(), 1);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut buf = TextBuffer::from_str("abc");
        buf.set_cursor_offset(0);
        assert_eq!(buf.backspace(), DirtyLines::None);
        assert_eq!(buf.contents(), b"abc");
    }

    #[test]
    fn test_backspace_joins_lines() {
        let mut buf = TextBuffer::from_str("hello\nworld");
        buf.set_cursor(Position::new(1, 0));
        assert_eq!(buf.backspace(), DirtyLines::FromLineToEnd(0));
        assert_eq!(buf.line_count(), 1);
        assert_eq!(buf.line_content(0), "helloworld");
        assert_eq!(buf.cursor_position(), Position::new(0, 5));
    }

    // ==================== Cursor Movement ====================

    #[test]
    fn test_move_right_wraps_onto_next_line() {
        let mut buf = TextBuffer::from_str("ab\ncd");
        buf.set_cursor_offset(2);
        assert_eq!(buf.move_right(), DirtyLines::Range { from: 0, to: 2 });
        assert_eq!(buf.cursor_position(), Position::new(1, 0));
    }

    #[test]
    fn test_move_left_at_start_reports_nothing() {
        let mut buf = TextBuffer::from_str("ab");
        buf.set_cursor_offset(0);
        assert_eq!(buf.move_left(), DirtyLines::None);
    }

    #[test]
    fn test_move_down_clamps_column() {
        let mut buf = TextBuffer::from_str("abcdef\nxy");
        buf.set_cursor_offset(4);
        buf.move_down();
        assert_eq!(buf.cursor(), buf.lines()[1].start + 2);
        assert_eq!(buf.cursor_position(), Position::new(1, 2));
    }

    #[test]
    fn test_move_up_at_first_row_is_noop() {
        let mut buf = TextBuffer::from_str("abc\ndef");
        buf.set_cursor_offset(2);
        assert_eq!(buf.move_up(), DirtyLines::None);
        assert_eq!(buf.cursor(), 2);
    }

    #[test]
    fn test_set_cursor_clamps() {
        let mut buf = TextBuffer::from_str("hello\nhi");
        buf.set_cursor(Position::new(5, 50));
        assert_eq!(buf.cursor_position(), Position::new(1, 2));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_set_cursor_offset_past_end_panics() {
        let mut buf = TextBuffer::from_str("hi");
        buf.set_cursor_offset(3);
    }

    #[test]
    fn test_cursor_pixel_hint() {
        let mut buf = TextBuffer::from_str("abc\ndefg");
        buf.set_cursor(Position::new(1, 3));
        assert_eq!(buf.cursor_pixel_hint(8.0, 16.0), (24.0, 16.0));
    }

    // ==================== Dirty accumulation ====================

    #[test]
    fn test_take_dirty_accumulates_and_resets() {
        let mut buf = TextBuffer::from_str("a\nb\nc");
        assert_eq!(buf.take_dirty(), DirtyLines::FromLineToEnd(0));

        buf.set_cursor(Position::new(2, 1));
        buf.take_dirty();
        buf.insert(b'x');
        buf.move_up();
        assert_eq!(buf.take_dirty(), DirtyLines::Range { from: 1, to: 3 });
        assert_eq!(buf.take_dirty(), DirtyLines::None);
    }

    #[test]
    fn test_encoded_expands_newlines() {
        let buf = TextBuffer::from_str("a\nb\n");
        assert_eq!(buf.encoded(), b"a\r\nb\r\n");
    }
}
