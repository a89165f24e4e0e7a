// Chunk: docs/chunks/file_codec - Load/save error reporting

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures at the load/save boundary.
///
/// Storage exhaustion is handled internally by growing, and bad offsets are
/// programming errors that panic, so I/O is the only thing reported here.
#[derive(Debug, Error)]
pub enum BufferError {
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

pub type BufferResult<T> = Result<T, BufferError>;
