// Chunk: docs/chunks/editor_instance - Editor instance, command API and file association

use std::io;
use std::path::PathBuf;

use gapedit_buffer::BufferError;
use thiserror::Error;

/// Editor error
#[derive(Debug, Error)]
pub enum EditorError {
    #[error(transparent)]
    Buffer(#[from] BufferError),

    #[error("no file is associated with this buffer")]
    NoAssociatedFile,

    #[error("failed to read config {}: {source}", .path.display())]
    ConfigRead { path: PathBuf, source: io::Error },

    #[error("invalid config {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Editor result
pub type EditorResult<T> = Result<T, EditorError>;
