// Chunk: docs/chunks/editor_instance - Editor instance, command API and file association
//!
//! The editor instance.
//!
//! An [`Editor`] is constructed by the host and owns one [`TextBuffer`], the
//! path it is associated with, and an optional [`RedrawListener`]. The host
//! feeds it commands one at a time; each command runs to completion (the
//! line index is rebuilt inside the buffer) and then the listener is told
//! which lines changed.

use std::fmt;
use std::path::{Path, PathBuf};

use gapedit_buffer::{file_codec, BufferView, DirtyLines, TextBuffer};
use gapedit_input::KeyEvent;
use tracing::{debug, info};

use crate::command::{resolve_command, Command};
use crate::config::EditorConfig;
use crate::error::{EditorError, EditorResult};

/// Receives a notification after every command.
///
/// `dirty` is the damage since the previous notification; cursor-only moves
/// report the rows the cursor left and entered.
pub trait RedrawListener {
    fn redraw(&mut self, view: &dyn BufferView, dirty: DirtyLines);
}

/// Whether a key event was consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    Yes,
    No,
}

/// One editable file.
pub struct Editor {
    buffer: TextBuffer,
    config: EditorConfig,
    associated_file: Option<PathBuf>,
    /// Content changed since the last load or save.
    modified: bool,
    listener: Option<Box<dyn RedrawListener>>,
}

impl fmt::Debug for Editor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Editor")
            .field("buffer", &self.buffer)
            .field("config", &self.config)
            .field("associated_file", &self.associated_file)
            .field("modified", &self.modified)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

impl Editor {
    /// Creates an editor with an empty, unassociated buffer.
    pub fn new(config: EditorConfig) -> Self {
        Self {
            buffer: TextBuffer::with_gap(config.initial_gap),
            config,
            associated_file: None,
            modified: false,
            listener: None,
        }
    }

    /// Creates an editor and loads `config.default_file` into it.
    ///
    /// # Errors
    ///
    /// Fails if the file exists but cannot be read.
    pub fn open_default(config: EditorConfig) -> EditorResult<Self> {
        let path = config.default_file.clone();
        let mut editor = Self::new(config);
        editor.load(&path)?;
        Ok(editor)
    }

    /// Installs the listener notified after each command.
    pub fn set_listener(&mut self, listener: Box<dyn RedrawListener>) {
        self.listener = Some(listener);
    }

    // ==================== Accessors ====================

    /// The buffer, for rendering.
    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn associated_file(&self) -> Option<&Path> {
        self.associated_file.as_deref()
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Cursor position in pixels using the configured cell size.
    pub fn cursor_pixel_hint(&self) -> (f32, f32) {
        self.buffer.cursor_pixel_hint(self.config.col_width, self.config.row_height)
    }

    /// Returns the file name, or "Untitled", with a `*` when modified.
    pub fn window_title(&self) -> String {
        let name = self
            .associated_file
            .as_deref()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .unwrap_or("Untitled");

        if self.modified {
            format!("{}*", name)
        } else {
            name.to_string()
        }
    }

    // ==================== Commands ====================

    /// Inserts one byte at the cursor; 0x08 deletes the byte before it.
    pub fn insert(&mut self, byte: u8) {
        if !self.buffer.insert(byte).is_none() {
            self.modified = true;
        }
        self.notify();
    }

    /// Inserts a character at the cursor as its UTF-8 bytes.
    pub fn insert_char(&mut self, ch: char) {
        let mut utf8 = [0; 4];
        self.buffer.insert_bytes(ch.encode_utf8(&mut utf8).as_bytes());
        self.modified = true;
        self.notify();
    }

    /// Inserts pasted bytes at the cursor.
    pub fn paste(&mut self, bytes: &[u8]) {
        if !self.buffer.insert_bytes(bytes).is_none() {
            self.modified = true;
        }
        self.notify();
    }

    /// Deletes the byte before the cursor.
    pub fn backspace(&mut self) {
        if !self.buffer.backspace().is_none() {
            self.modified = true;
        }
        self.notify();
    }

    pub fn move_left(&mut self) {
        self.buffer.move_left();
        self.notify();
    }

    pub fn move_right(&mut self) {
        self.buffer.move_right();
        self.notify();
    }

    pub fn move_up(&mut self) {
        self.buffer.move_up();
        self.notify();
    }

    pub fn move_down(&mut self) {
        self.buffer.move_down();
        self.notify();
    }

    /// Writes the buffer to its associated file with CRLF line endings and
    /// returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::NoAssociatedFile`] if nothing was loaded, or the
    /// write failure. The modified flag is only cleared on success.
    pub fn save(&mut self) -> EditorResult<usize> {
        let path = self
            .associated_file
            .as_deref()
            .ok_or(EditorError::NoAssociatedFile)?;

        let written = file_codec::save(path, self.buffer.bytes())?;
        self.modified = false;
        self.notify();
        Ok(written)
    }

    /// Replaces the buffer with the contents of `path` and associates it.
    ///
    /// A missing file starts an empty buffer that the next save creates.
    /// The cursor goes to the end of the text.
    ///
    /// # Errors
    ///
    /// Returns the read failure; the current buffer is kept in that case.
    pub fn load(&mut self, path: &Path) -> EditorResult<()> {
        let loaded = file_codec::load(path)?;
        info!(
            path = %path.display(),
            len = loaded.len(),
            is_new = loaded.is_new,
            "opened buffer"
        );

        self.buffer = TextBuffer::from_bytes_with_gap(&loaded.bytes, self.config.initial_gap);
        self.associated_file = Some(path.to_path_buf());
        self.modified = false;
        self.notify();
        Ok(())
    }

    /// Resolves and runs a key event.
    ///
    /// # Errors
    ///
    /// Only Ctrl+S can fail, with the error from [`Editor::save`].
    pub fn handle_key(&mut self, event: &KeyEvent) -> EditorResult<Handled> {
        let Some(command) = resolve_command(event) else {
            return Ok(Handled::No);
        };
        debug!(?command, "executing command");
        self.execute(command)?;
        Ok(Handled::Yes)
    }

    /// Runs a single command.
    pub fn execute(&mut self, command: Command) -> EditorResult<()> {
        match command {
            Command::InsertChar(ch) => self.insert_char(ch),
            Command::InsertNewline => self.insert(b'\n'),
            Command::InsertTab => self.insert(b'\t'),
            Command::Backspace => self.backspace(),
            Command::MoveLeft => self.move_left(),
            Command::MoveRight => self.move_right(),
            Command::MoveUp => self.move_up(),
            Command::MoveDown => self.move_down(),
            Command::Save => {
                self.save()?;
            }
        }
        Ok(())
    }

    fn notify(&mut self) {
        let dirty = self.buffer.take_dirty();
        if let Some(listener) = self.listener.as_mut() {
            listener.redraw(&self.buffer, dirty);
        }
    }
}
