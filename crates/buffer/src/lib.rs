// Chunk: docs/chunks/gap_buffer_core - Byte gap buffer, line index and cursor model
// Chunk: docs/chunks/file_codec - CRLF <-> LF conversion at the file boundary

//! gapedit-buffer: the text store behind the gapedit editor.
//!
//! This crate holds the full content of one file in a byte gap buffer,
//! derives a line index from it after every edit, and maps a single cursor
//! offset to rows and columns.
//!
//! # Overview
//!
//! The main type is [`TextBuffer`], which provides:
//! - Byte insertion and backspace at the cursor
//! - Line-based access for rendering
//! - Cursor movement (left/right/up/down)
//! - Dirty line reporting for each command
//!
//! Lower layers are public too: [`GapBuffer`] (storage), [`LineIndex`] (line
//! spans) and [`CursorModel`] (offset ↔ row/col). All of them speak logical
//! offsets; physical indices stay inside [`GapBuffer`].
//!
//! # Example
//!
//! ```
//! use gapedit_buffer::{DirtyLines, Position, TextBuffer};
//!
//! let mut buffer = TextBuffer::new();
//!
//! buffer.insert_str("Hello, world!");
//! assert_eq!(buffer.line_count(), 1);
//! assert_eq!(buffer.line_content(0), "Hello, world!");
//!
//! // Split into two lines
//! buffer.set_cursor(Position::new(0, 6));
//! let dirty = buffer.insert(b'\n');
//! assert_eq!(dirty, DirtyLines::FromLineToEnd(0));
//! assert_eq!(buffer.line_count(), 2);
//!
//! // Saved text uses CRLF line endings
//! assert_eq!(buffer.encoded(), b"Hello,\r\n world!");
//! ```
//!
//! # Files
//!
//! [`file_codec`] converts between on-disk bytes (`\r\n`) and buffer text
//! (`\n`). Load and save are the only blocking operations.

mod buffer_view;
mod cursor;
mod error;
pub mod file_codec;
mod gap_buffer;
mod line_index;
mod text_buffer;
mod types;

pub use buffer_view::{BufferView, CursorInfo};
pub use cursor::CursorModel;
pub use error::{BufferError, BufferResult};
pub use file_codec::LoadedFile;
pub use gap_buffer::{GapBuffer, DEFAULT_GAP_SIZE, TAB_WIDTH};
pub use line_index::{Line, LineIndex};
pub use text_buffer::TextBuffer;
pub use types::{DirtyLines, Position};
