// Chunk: docs/chunks/key_dispatch - Key to command resolution
//!
//! Key events to editor commands.
//!
//! Resolution is a pure function of (modifiers, key): every binding is a
//! single keystroke, so no chord state is kept.

use gapedit_input::{Key, KeyEvent};

/// Commands the input layer can issue to the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Insert a character at the cursor
    InsertChar(char),
    /// Insert a newline at the cursor
    InsertNewline,
    /// Insert a tab (stored as spaces)
    InsertTab,
    /// Delete the byte before the cursor
    Backspace,
    /// Move cursor left by one byte
    MoveLeft,
    /// Move cursor right by one byte
    MoveRight,
    /// Move cursor up by one row
    MoveUp,
    /// Move cursor down by one row
    MoveDown,
    /// Write the buffer to its associated file
    Save,
}

/// Resolves a key event to a command.
///
/// Characters typed while Control is held are not inserted; Ctrl+S saves.
pub fn resolve_command(event: &KeyEvent) -> Option<Command> {
    let mods = &event.modifiers;

    match event.key {
        Key::Char('s') | Key::Char('S') if mods.control => Some(Command::Save),

        // Printable characters (no Control modifier)
        Key::Char(ch) if !mods.control => Some(Command::InsertChar(ch)),

        Key::Return if !mods.control => Some(Command::InsertNewline),
        Key::Tab if !mods.control => Some(Command::InsertTab),
        Key::Backspace => Some(Command::Backspace),

        // Arrow keys
        Key::Left => Some(Command::MoveLeft),
        Key::Right => Some(Command::MoveRight),
        Key::Up => Some(Command::MoveUp),
        Key::Down => Some(Command::MoveDown),

        // Unhandled
        _ => None,
    }
}
