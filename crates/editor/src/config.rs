// Chunk: docs/chunks/editor_config - JSON configuration
//!
//! Editor configuration.
//!
//! Settings are read from a JSON file. Every field has a default, so a
//! partial file (or no file at all) is valid.
//!
//! ## File Location
//!
//! `<platform config dir>/gapedit/config.json`, for example
//! `~/.config/gapedit/config.json` on Linux.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use gapedit_buffer::DEFAULT_GAP_SIZE;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{EditorError, EditorResult};

/// Application name used for the config directory.
const APP_NAME: &str = "gapedit";

/// Config file name.
const CONFIG_FILENAME: &str = "config.json";

/// File opened when the host does not name one.
const DEFAULT_FILE: &str = "test.txt";

/// Editor settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Free bytes reserved in a freshly created or loaded buffer.
    pub initial_gap: usize,
    /// Width of one monospace cell, in pixels.
    pub col_width: f32,
    /// Height of one row, in pixels.
    pub row_height: f32,
    /// File opened by [`Editor::open_default`](crate::Editor::open_default).
    pub default_file: PathBuf,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            initial_gap: DEFAULT_GAP_SIZE,
            col_width: 12.0,
            row_height: 24.0,
            default_file: PathBuf::from(DEFAULT_FILE),
        }
    }
}

impl EditorConfig {
    /// Reads the config at `path`. A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::ConfigRead`] if the file exists but cannot be
    /// read, and [`EditorError::ConfigParse`] if it is not valid JSON for
    /// this struct.
    pub fn load(path: &Path) -> EditorResult<Self> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(EditorError::ConfigRead {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        serde_json::from_str(&raw).map_err(|source| EditorError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Like [`EditorConfig::load`], but logs the problem and falls back to
    /// the defaults instead of failing.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|err| {
            warn!(error = %err, "using default editor config");
            Self::default()
        })
    }

    /// Loads the config from the platform location, or the defaults when the
    /// location cannot be determined.
    pub fn discover() -> Self {
        match config_file_path() {
            Some(path) => Self::load_or_default(&path),
            None => Self::default(),
        }
    }
}

/// Returns the path to the config file, or `None` if the platform config
/// directory cannot be determined.
pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME).join(CONFIG_FILENAME))
}
