// Chunk: docs/chunks/editor_instance - Editor instance, command API and file association
//!
//! gapedit: the editor core around a gap buffer.
//!
//! The host process owns the window, fonts and event loop. It creates an
//! [`Editor`], forwards key events to [`Editor::handle_key`] (or calls the
//! command methods directly), and repaints when its [`RedrawListener`] is
//! notified. There is no global state: everything lives in the `Editor`.
//!
//! ```no_run
//! use gapedit::{Editor, EditorConfig};
//! use gapedit_input::KeyEvent;
//!
//! let mut editor = Editor::open_default(EditorConfig::discover())?;
//! editor.handle_key(&KeyEvent::char('x'))?;
//! editor.handle_key(&KeyEvent::ctrl('s'))?;
//! # Ok::<(), gapedit::EditorError>(())
//! ```

mod command;
mod config;
mod editor;
mod error;

pub use command::{resolve_command, Command};
pub use config::{config_file_path, EditorConfig};
pub use editor::{Editor, Handled, RedrawListener};
pub use error::{EditorError, EditorResult};
