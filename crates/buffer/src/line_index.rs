// Chunk: docs/chunks/gap_buffer_core - Line span table rebuilt from logical text

//! Line index for the text buffer.
//!
//! The index is a derived cache: an ordered list of [`Line`] spans in logical
//! offsets, rebuilt from scratch after every mutation. A rebuild is a single
//! linear scan, which is fine for interactive editing.

/// One line of text as a span of logical offsets.
///
/// `start` is the offset of the first byte of the line. `end` is the offset of
/// the terminating `\n`, or the buffer length for a final unterminated line.
/// The line's visible bytes are `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Line {
    pub start: usize,
    pub end: usize,
}

impl Line {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of visible bytes (excluding the newline).
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Ordered, contiguous line spans covering the whole text.
///
/// Always holds at least one line. A text ending in `\n` has no trailing empty
/// span: `"ab\n"` is one line `[0, 2]`.
#[derive(Debug, Clone)]
pub struct LineIndex {
    lines: Vec<Line>,
    /// Logical length seen by the last rebuild.
    len: usize,
    /// Whether the last byte seen by the last rebuild was `\n`.
    trailing_newline: bool,
}

impl LineIndex {
    /// Creates the index of an empty text: one line `[0, 0]`.
    pub fn new() -> Self {
        Self {
            lines: vec![Line::new(0, 0)],
            len: 0,
            trailing_newline: false,
        }
    }

    /// Rebuilds the index from the logical bytes of the text.
    ///
    /// O(n) in the text length.
    pub fn rebuild<I>(&mut self, content: I)
    where
        I: IntoIterator<Item = u8>,
    {
        self.lines.clear();

        let mut start = 0;
        let mut offset = 0;
        for byte in content {
            if byte == b'\n' {
                self.lines.push(Line::new(start, offset));
                start = offset + 1;
            }
            offset += 1;
        }

        self.len = offset;
        self.trailing_newline = offset > 0 && start == offset;

        if start < offset || self.lines.is_empty() {
            self.lines.push(Line::new(start, offset));
        }
    }

    /// Returns the number of lines. Always at least 1.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the span of `line`, or `None` if out of bounds.
    pub fn line(&self, line: usize) -> Option<Line> {
        self.lines.get(line).copied()
    }

    /// Returns the visible length of `line`, or `None` if out of bounds.
    pub fn line_len(&self, line: usize) -> Option<usize> {
        self.line(line).map(|l| l.len())
    }

    /// Returns all spans in order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Logical length of the text this index was built from.
    pub fn text_len(&self) -> usize {
        self.len
    }

    /// Whether the indexed text ends in `\n`.
    pub fn ends_with_newline(&self) -> bool {
        self.trailing_newline
    }

    /// Returns the index of the first line whose `end` is at or after `offset`.
    ///
    /// Equals `line_count()` only when `offset` lies past the last span, which
    /// happens for `offset == text_len()` after a trailing newline.
    pub fn line_at_offset(&self, offset: usize) -> usize {
        self.lines.partition_point(|line| line.end < offset)
    }
}

impl Default for LineIndex {
    fn default() -> Self {
        Self::new()
    }
}
