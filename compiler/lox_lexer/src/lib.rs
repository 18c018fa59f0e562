//! Scanner for Lox.
//!
//! Turns source text into an ordered list of [`Token`]s, each carrying its
//! kind, exact lexeme, decoded [`Literal`], and starting line. Lexical
//! problems are collected as [`ScanError`]s and never stop the scan; the
//! token list always ends with exactly one `EOF`.
//!
//! # Architecture
//!
//! ```text
//! SourceBuffer → RawScanner (lox_lexer_core) → TokenCooker → ScanOutput
//! ```
//!
//! The raw scanner finds lexeme boundaries; the cooker resolves keywords,
//! decodes literals, and owns the line counter.

mod cooker;
pub mod keywords;
mod literal;
mod scan_error;
mod token;

use lox_lexer_core::{RawScanner, RawTag, SourceBuffer};
use tracing::{debug, trace};

use cooker::TokenCooker;

pub use literal::{format_number, Literal};
pub use scan_error::ScanError;
pub use token::{Token, TokenKind};

/// Result of scanning one source.
#[derive(Clone, Debug, PartialEq)]
pub struct ScanOutput {
    /// Tokens in source order, always ending with one `EOF`.
    pub tokens: Vec<Token>,
    /// Lexical errors in detection order.
    pub errors: Vec<ScanError>,
    /// Final value of the line counter: 1 + newlines consumed.
    pub lines: u32,
}

impl ScanOutput {
    /// Returns `true` if any lexical error was recorded.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Single-use scanner over one source.
///
/// Constructed once per input and consumed by the scan.
pub struct Scanner {
    buffer: SourceBuffer,
}

impl Scanner {
    /// Scanner over source text.
    pub fn new(source: &str) -> Self {
        Self {
            buffer: SourceBuffer::new(source),
        }
    }

    /// Scanner over raw bytes. Invalid UTF-8 is replaced with U+FFFD, which
    /// then reports as an unexpected character.
    pub fn from_bytes(source: &[u8]) -> Self {
        Self {
            buffer: SourceBuffer::from_bytes(source),
        }
    }

    /// Scan the whole source.
    pub fn scan_tokens(self) -> ScanOutput {
        self.scan_tokens_with(|_| {})
    }

    /// Scan the whole source, handing each token to `on_token` as soon as it
    /// is produced. The final `EOF` is included.
    #[tracing::instrument(level = "debug", skip_all, fields(len = self.buffer.len()))]
    pub fn scan_tokens_with(self, mut on_token: impl FnMut(&Token)) -> ScanOutput {
        if self.buffer.is_lossy() {
            debug!("source contained invalid UTF-8; replaced with U+FFFD");
        }

        let mut raw = RawScanner::new(self.buffer.cursor());
        let mut cooker = TokenCooker::new(self.buffer.as_str());
        let mut tokens = Vec::new();

        loop {
            let offset = raw.pos();
            let tok = raw.next_token();
            if tok.tag == RawTag::Eof {
                break;
            }
            if tok.tag.is_trivia() {
                continue;
            }
            if let Some(token) = cooker.cook(tok.tag, offset, tok.len) {
                trace!(kind = %token.kind, line = token.line, "token");
                on_token(&token);
                tokens.push(token);
            }
        }

        let lines = cooker.line();
        let eof = Token::eof(lines);
        on_token(&eof);
        tokens.push(eof);

        let errors = cooker.into_errors();
        debug!(
            tokens = tokens.len(),
            errors = errors.len(),
            lines,
            "scan complete"
        );
        ScanOutput {
            tokens,
            errors,
            lines,
        }
    }
}

/// Scan source text.
pub fn scan(source: &str) -> ScanOutput {
    Scanner::new(source).scan_tokens()
}

/// Scan raw bytes, decoding them as UTF-8 with replacement.
pub fn scan_bytes(source: &[u8]) -> ScanOutput {
    Scanner::from_bytes(source).scan_tokens()
}
