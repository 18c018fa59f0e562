//! Low-level tokenizer for Lox.
//!
//! Splits source text into `(RawTag, len)` pairs. This crate knows nothing
//! about keywords, literal values, or line numbers; `lox_lexer` cooks raw
//! tokens into parser-ready `Token`s.
//!
//! ```text
//! SourceBuffer → Cursor → RawScanner → RawToken { tag, len }
//! ```

mod cursor;
mod raw_scanner;
mod source_buffer;
mod tag;

pub use cursor::Cursor;
pub use raw_scanner::{tokenize, RawScanner};
pub use source_buffer::SourceBuffer;
pub use tag::{RawTag, RawToken};
