// Chunk: docs/chunks/gap_buffer_core - Byte gap buffer with a logical-offset interface

//! Gap buffer storage.
//!
//! Bytes live in a single `Vec<u8>` split around one half-open gap
//! `[gap_start, gap_end)` of unused slots. Every public method speaks in
//! *logical* offsets (positions in the text the user sees). Physical indices
//! never leave this module except through [`GapBuffer::physical`] and
//! [`GapBuffer::logical`], which are the only translation points.
//!
//! Moving the gap costs O(distance moved). Inserting at the gap is O(1)
//! amortized: when the gap is exhausted the storage doubles.

use std::cmp::Ordering;

use tracing::debug;

/// Free bytes reserved by [`GapBuffer::new`].
pub const DEFAULT_GAP_SIZE: usize = 1024;

/// Number of spaces stored for a single tab byte.
pub const TAB_WIDTH: usize = 4;

const GAP_GROWTH_FACTOR: usize = 2;

/// A byte gap buffer.
///
/// Layout of `data`: `[pre-gap content | gap | post-gap content]`.
/// `len() == data.len() - (gap_end - gap_start)` at all times.
#[derive(Debug, Clone)]
pub struct GapBuffer {
    data: Vec<u8>,
    /// First unused slot.
    gap_start: usize,
    /// First used slot after the gap.
    gap_end: usize,
    /// Minimum number of slots a growth step adds.
    min_gap: usize,
    /// Total bytes shifted across the gap by `move_gap_to`.
    relocated: usize,
    growths: usize,
}

impl GapBuffer {
    /// Creates an empty buffer with [`DEFAULT_GAP_SIZE`] free bytes.
    pub fn new() -> Self {
        Self::with_gap(DEFAULT_GAP_SIZE)
    }

    /// Creates an empty buffer with `gap` free bytes (at least one).
    pub fn with_gap(gap: usize) -> Self {
        Self::from_bytes(&[], gap)
    }

    /// Creates a buffer holding `bytes` verbatim, followed by a gap of `gap`
    /// free bytes. The edit point starts at the end of the text.
    ///
    /// No newline normalization happens here; callers hand in text that
    /// already went through the file codec.
    pub fn from_bytes(bytes: &[u8], gap: usize) -> Self {
        let gap = gap.max(1);
        let len = bytes.len();
        let mut data = Vec::with_capacity(len + gap);
        data.extend_from_slice(bytes);
        data.resize(len + gap, 0);

        Self {
            data,
            gap_start: len,
            gap_end: len + gap,
            min_gap: gap,
            relocated: 0,
            growths: 0,
        }
    }

    /// Returns the logical length (bytes of text, excluding the gap).
    pub fn len(&self) -> usize {
        self.data.len() - self.gap_len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the size of the physical storage array.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Returns the number of free bytes in the gap.
    pub fn gap_len(&self) -> usize {
        self.gap_end - self.gap_start
    }

    /// Returns the logical offset the gap currently sits at.
    pub fn gap_position(&self) -> usize {
        self.gap_start
    }

    /// Total number of bytes moved across the gap since creation.
    ///
    /// Growth copies are not counted; see [`GapBuffer::growth_count`].
    pub fn relocated_bytes(&self) -> usize {
        self.relocated
    }

    /// Number of times the storage has been reallocated.
    pub fn growth_count(&self) -> usize {
        self.growths
    }

    // ==================== Translation ====================

    /// Translates a logical offset into the physical index holding that byte.
    ///
    /// `offset == len()` maps to one past the last stored slot.
    ///
    /// # Panics
    ///
    /// Panics if `offset > len()`.
    pub fn physical(&self, offset: usize) -> usize {
        self.check_offset(offset);
        if offset < self.gap_start {
            offset
        } else {
            offset + self.gap_len()
        }
    }

    /// Translates a physical index back to a logical offset.
    ///
    /// Returns `None` for slots inside the gap or past the end of storage.
    /// `capacity()` itself maps to `len()`.
    pub fn logical(&self, index: usize) -> Option<usize> {
        if index < self.gap_start {
            Some(index)
        } else if index >= self.gap_end && index <= self.data.len() {
            Some(index - self.gap_len())
        } else {
            None
        }
    }

    fn check_offset(&self, offset: usize) {
        assert!(
            offset <= self.len(),
            "logical offset {} out of range for buffer of length {}",
            offset,
            self.len()
        );
    }

    // ==================== Gap relocation ====================

    /// Moves the gap so that it starts at logical `offset`.
    ///
    /// Only the bytes between the old and the new gap position are moved,
    /// so this is O(|offset - gap_position()|). This is the only routine that
    /// shifts content across the gap.
    ///
    /// # Panics
    ///
    /// Panics if `offset > len()`.
    pub fn move_gap_to(&mut self, offset: usize) {
        let target = self.physical(offset);

        match offset.cmp(&self.gap_start) {
            Ordering::Less => {
                // Content [offset, gap_start) slides to the right end of the gap.
                let shift = self.gap_start - offset;
                self.data.copy_within(offset..self.gap_start, self.gap_end - shift);
                self.gap_start = offset;
                self.gap_end -= shift;
                self.relocated += shift;
            }
            Ordering::Greater => {
                // Content [gap_end, target) slides to the left end of the gap.
                let shift = target - self.gap_end;
                self.data.copy_within(self.gap_end..target, self.gap_start);
                self.gap_start += shift;
                self.gap_end = target;
                self.relocated += shift;
            }
            Ordering::Equal => {}
        }

        self.debug_check();
    }

    /// Reallocates storage with a full-size gap at the current gap position.
    fn grow(&mut self) {
        let old_capacity = self.data.len();
        let new_capacity = (old_capacity * GAP_GROWTH_FACTOR).max(old_capacity + self.min_gap);
        let tail_len = old_capacity - self.gap_end;

        let mut data = vec![0; new_capacity];
        data[..self.gap_start].copy_from_slice(&self.data[..self.gap_start]);
        data[new_capacity - tail_len..].copy_from_slice(&self.data[self.gap_end..]);

        self.data = data;
        self.gap_end = new_capacity - tail_len;
        self.growths += 1;

        debug!(old_capacity, new_capacity, len = self.len(), "gap buffer grew");
        self.debug_check();
    }

    // ==================== Mutation ====================

    /// Inserts `byte` at logical `offset` and returns how many bytes were stored.
    ///
    /// `\r` is stored as `\n`. A tab is stored as [`TAB_WIDTH`] spaces, written
    /// one at a time. Everything else, other control bytes included, is stored
    /// as-is; [`TextBuffer`](crate::TextBuffer) handles backspace bytes before
    /// they get here.
    ///
    /// # Panics
    ///
    /// Panics if `offset > len()`.
    pub fn insert(&mut self, offset: usize, byte: u8) -> usize {
        match byte {
            b'\t' => {
                for i in 0..TAB_WIDTH {
                    self.insert_raw(offset + i, b' ');
                }
                TAB_WIDTH
            }
            b'\r' => {
                self.insert_raw(offset, b'\n');
                1
            }
            _ => {
                self.insert_raw(offset, byte);
                1
            }
        }
    }

    /// Inserts every byte of `bytes` starting at `offset`, with the same
    /// normalization as [`GapBuffer::insert`]. Returns the bytes stored.
    pub fn insert_bytes(&mut self, offset: usize, bytes: &[u8]) -> usize {
        let mut stored = 0;
        for &byte in bytes {
            stored += self.insert(offset + stored, byte);
        }
        stored
    }

    fn insert_raw(&mut self, offset: usize, byte: u8) {
        self.move_gap_to(offset);
        if self.gap_start == self.gap_end {
            self.grow();
        }
        self.data[self.gap_start] = byte;
        self.gap_start += 1;
        self.debug_check();
    }

    /// Deletes the byte immediately before logical `offset` (backspace).
    ///
    /// Returns the deleted byte, or `None` at offset 0.
    ///
    /// # Panics
    ///
    /// Panics if `offset > len()`.
    pub fn delete_before(&mut self, offset: usize) -> Option<u8> {
        self.move_gap_to(offset);
        if self.gap_start == 0 {
            return None;
        }
        self.gap_start -= 1;
        self.debug_check();
        Some(self.data[self.gap_start])
    }

    // ==================== Reading ====================

    /// Returns the byte at logical `offset`, or `None` past the end.
    pub fn byte_at(&self, offset: usize) -> Option<u8> {
        if offset >= self.len() {
            return None;
        }
        Some(self.data[self.physical(offset)])
    }

    /// Returns the text as two slices: before the gap and after it.
    pub fn as_slices(&self) -> (&[u8], &[u8]) {
        (&self.data[..self.gap_start], &self.data[self.gap_end..])
    }

    /// Iterates over the logical bytes in order.
    pub fn bytes(&self) -> impl Iterator<Item = u8> + '_ {
        let (front, back) = self.as_slices();
        front.iter().chain(back.iter()).copied()
    }

    /// Returns logical bytes `[start, end)`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end` or `end > len()`.
    pub fn read_range(&self, start: usize, end: usize) -> Vec<u8> {
        self.check_offset(end);
        assert!(start <= end, "inverted range {}..{}", start, end);

        let (front, back) = self.as_slices();
        let mut out = Vec::with_capacity(end - start);
        if start < front.len() {
            out.extend_from_slice(&front[start..end.min(front.len())]);
        }
        if end > front.len() {
            let from = start.saturating_sub(front.len());
            out.extend_from_slice(&back[from..end - front.len()]);
        }
        out
    }

    /// Copies the whole logical text out.
    pub fn to_vec(&self) -> Vec<u8> {
        self.read_range(0, self.len())
    }

    fn debug_check(&self) {
        debug_assert!(
            self.gap_start <= self.gap_end && self.gap_end <= self.data.len(),
            "gap [{}, {}) inconsistent with capacity {}",
            self.gap_start,
            self.gap_end,
            self.data.len()
        );
        debug_assert_eq!(self.logical(self.gap_end), Some(self.gap_start));
    }
}

impl Default for GapBuffer {
    fn default() -> Self {
        Self::new()
    }
}
