// Chunk: docs/chunks/buffer_view_trait - Read-only surface for the render collaborator
//!
//! Buffer view abstraction for rendering.
//!
//! A renderer only needs rows of bytes, the cursor location and what changed
//! since its last frame. [`BufferView`] is that surface; it is object-safe so
//! renderers can hold `&dyn BufferView`.

use crate::text_buffer::TextBuffer;
use crate::types::{DirtyLines, Position};

/// Cursor location for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorInfo {
    /// Row and column of the cursor.
    pub position: Position,
    /// Logical offset of the cursor.
    pub offset: usize,
}

impl CursorInfo {
    pub fn new(position: Position, offset: usize) -> Self {
        Self { position, offset }
    }

    /// Top-left pixel of the cursor cell on a monospace grid.
    pub fn pixel_hint(&self, col_width: f32, row_height: f32) -> (f32, f32) {
        (
            col_width * self.position.col as f32,
            row_height * self.position.line as f32,
        )
    }
}

/// What a renderer reads from a buffer.
pub trait BufferView {
    /// Returns the number of lines available for display.
    fn line_count(&self) -> usize;

    /// Returns the bytes of `line` without its newline (empty if out of bounds).
    fn line_text(&self, line: usize) -> Vec<u8>;

    /// Returns the length of `line` in bytes (0 if out of bounds).
    fn line_len(&self, line: usize) -> usize;

    /// Drains accumulated dirty state since last call.
    fn take_dirty(&mut self) -> DirtyLines;

    /// Returns where the cursor is.
    fn cursor_info(&self) -> CursorInfo;
}

impl BufferView for TextBuffer {
    fn line_count(&self) -> usize {
        TextBuffer::line_count(self)
    }

    fn line_text(&self, line: usize) -> Vec<u8> {
        TextBuffer::line_text(self, line)
    }

    fn line_len(&self, line: usize) -> usize {
        TextBuffer::line_len(self, line)
    }

    fn take_dirty(&mut self) -> DirtyLines {
        TextBuffer::take_dirty(self)
    }

    fn cursor_info(&self) -> CursorInfo {
        CursorInfo::new(self.cursor_position(), self.cursor())
    }
}
