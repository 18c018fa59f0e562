//! Owned source text for one scan.
//!
//! A [`SourceBuffer`] is loaded once and is read-only afterwards; every
//! [`Cursor`] handed out borrows from it.
//!
//! # Encoding
//!
//! Sources arriving as raw bytes are decoded as UTF-8. Invalid sequences are
//! replaced with U+FFFD rather than rejected, so a stray byte becomes one
//! unexpected-character diagnostic at its line instead of aborting the scan.

use std::borrow::Cow;

use crate::Cursor;

/// Source text owned for the duration of a scan.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    text: String,
    /// Whether any invalid UTF-8 was replaced during construction.
    lossy: bool,
}

impl SourceBuffer {
    /// Create a buffer from source text.
    pub fn new(source: &str) -> Self {
        Self {
            text: source.to_owned(),
            lossy: false,
        }
    }

    /// Create a buffer from raw bytes, replacing invalid UTF-8 with U+FFFD.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        match String::from_utf8_lossy(bytes) {
            Cow::Borrowed(text) => Self {
                text: text.to_owned(),
                lossy: false,
            },
            Cow::Owned(text) => Self { text, lossy: true },
        }
    }

    /// Returns the source text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the source bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.text)
    }

    /// Length of the source content in bytes, saturated at `u32::MAX`.
    pub fn len(&self) -> u32 {
        u32::try_from(self.text.len()).unwrap_or(u32::MAX)
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns `true` if invalid UTF-8 was replaced while decoding.
    pub fn is_lossy(&self) -> bool {
        self.lossy
    }
}

impl From<&str> for SourceBuffer {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

impl From<String> for SourceBuffer {
    fn from(text: String) -> Self {
        Self { text, lossy: false }
    }
}
