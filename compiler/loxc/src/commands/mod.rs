//! Command implementations for the `loxc` binary.

mod tokenize;

use std::io;

use thiserror::Error;
use tracing::debug;

pub use tokenize::{tokenize_file, tokenize_source, TokenizeOptions};

/// No lexical errors.
pub const EXIT_OK: i32 = 0;
/// Usage error, or the source could not be loaded.
pub const EXIT_FAILURE: i32 = 1;
/// One or more lexical errors were reported.
pub const EXIT_LEXICAL_ERROR: i32 = 65;

/// The source could not be loaded. Nothing is scanned.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("cannot find file '{path}'")]
    NotFound { path: String },

    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },

    #[error("'{path}' is too large to scan ({len} bytes)")]
    TooLarge { path: String, len: u64 },

    #[error("error reading '{path}': {source}")]
    Io { path: String, source: io::Error },
}

impl SourceError {
    fn from_io(path: &str, error: io::Error) -> Self {
        let path = path.to_owned();
        match error.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Io {
                path,
                source: error,
            },
        }
    }
}

/// Read a source file as raw bytes.
///
/// Sources longer than `u32::MAX` bytes are rejected before reading, since
/// scanner positions are `u32`.
pub fn read_source(path: &str) -> Result<Vec<u8>, SourceError> {
    let len = std::fs::metadata(path)
        .map_err(|e| SourceError::from_io(path, e))?
        .len();
    if len > u64::from(u32::MAX) {
        return Err(SourceError::TooLarge {
            path: path.to_owned(),
            len,
        });
    }
    let bytes = std::fs::read(path).map_err(|e| SourceError::from_io(path, e))?;
    debug!(path, bytes = bytes.len(), "source loaded");
    Ok(bytes)
}
