// Chunk: docs/chunks/file_codec - CRLF <-> LF conversion at the file boundary

//! File encoding for buffer text.
//!
//! In memory, every line ends in a bare `\n`. On disk, lines end in `\r\n`.
//! [`decode`] and [`encode`] are pure conversions; [`load`] and [`save`] wrap
//! them around the filesystem and are the only blocking calls in the crate.

use std::fs;
use std::io;
use std::path::Path;

use tracing::info;

use crate::error::{BufferError, BufferResult};

/// Normalizes line endings: every `\r\n` and every lone `\r` becomes `\n`.
pub fn decode(raw: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(raw.len());
    let mut bytes = raw.iter().copied().peekable();
    while let Some(byte) = bytes.next() {
        if byte == b'\r' {
            bytes.next_if_eq(&b'\n');
            out.push(b'\n');
        } else {
            out.push(byte);
        }
    }
    out
}

/// Expands every `\n` to `\r\n`; all other bytes pass through unchanged.
pub fn encode<I>(text: I) -> Vec<u8>
where
    I: IntoIterator<Item = u8>,
{
    let text = text.into_iter();
    let mut out = Vec::with_capacity(text.size_hint().0);
    for byte in text {
        if byte == b'\n' {
            out.extend_from_slice(b"\r\n");
        } else {
            out.push(byte);
        }
    }
    out
}

/// Text read from disk, already decoded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoadedFile {
    pub bytes: Vec<u8>,
    /// The file did not exist; the caller starts an empty buffer that will be
    /// created on first save.
    pub is_new: bool,
}

impl LoadedFile {
    /// Logical byte count of the decoded text.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Reads and decodes `path`.
///
/// A missing file is not an error: it yields empty text with `is_new` set.
///
/// # Errors
///
/// Returns [`BufferError::Read`] for any other read failure.
pub fn load(path: &Path) -> BufferResult<LoadedFile> {
    match fs::read(path) {
        Ok(raw) => {
            let bytes = decode(&raw);
            info!(path = %path.display(), raw_len = raw.len(), len = bytes.len(), "loaded file");
            Ok(LoadedFile {
                bytes,
                is_new: false,
            })
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            info!(path = %path.display(), "file not found, starting a new file");
            Ok(LoadedFile {
                bytes: Vec::new(),
                is_new: true,
            })
        }
        Err(source) => Err(BufferError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Encodes `text` and writes it to `path`, replacing any existing file.
/// Returns the number of bytes written.
///
/// # Errors
///
/// Returns [`BufferError::Write`] if the file cannot be written.
pub fn save<I>(path: &Path, text: I) -> BufferResult<usize>
where
    I: IntoIterator<Item = u8>,
{
    let bytes = encode(text);
    fs::write(path, &bytes).map_err(|source| BufferError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), len = bytes.len(), "saved file");
    Ok(bytes.len())
}
