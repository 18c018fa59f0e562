//! Token cooking layer.
//!
//! Transforms `(RawTag, len)` pairs from the raw scanner into [`Token`]s:
//!
//! ```text
//! source → RawScanner → (RawTag, len) → TokenCooker → Token
//! ```
//!
//! Each `RawTag` category has a dedicated cooking path:
//! - **Operators/delimiters**: direct 1:1 mapping, no literal
//! - **Identifiers**: keyword lookup
//! - **Numbers**: parse to `f64`
//! - **Strings**: strip quotes, count embedded newlines
//! - **Newlines**: bump the line counter, nothing is emitted
//! - **Errors**: push a [`ScanError`], nothing is emitted
//!
//! The cooker owns the line counter, so every line-sensitive decision
//! (token lines, error lines) is made here.

use lox_lexer_core::RawTag;
use tracing::debug;

use crate::{keywords, Literal, ScanError, Token, TokenKind};

/// Cooks raw tokens into [`Token`]s. Accumulates errors for the whole source.
pub(crate) struct TokenCooker<'src> {
    source: &'src str,
    /// 1-based line of the next unconsumed byte.
    line: u32,
    errors: Vec<ScanError>,
}

impl<'src> TokenCooker<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        Self {
            source,
            line: 1,
            errors: Vec::new(),
        }
    }

    /// Current line counter.
    pub(crate) fn line(&self) -> u32 {
        self.line
    }

    /// Get a reference to accumulated errors.
    #[cfg(test)]
    pub(crate) fn errors(&self) -> &[ScanError] {
        &self.errors
    }

    /// Consume the cooker, returning accumulated errors.
    pub(crate) fn into_errors(self) -> Vec<ScanError> {
        self.errors
    }

    /// Cook a single raw token.
    ///
    /// `offset` is the byte position of the token in source, `len` its byte
    /// length. Returns `None` for newlines and for errors. Whitespace and
    /// comments are skipped by the driver and never reach here.
    pub(crate) fn cook(&mut self, tag: RawTag, offset: u32, len: u32) -> Option<Token> {
        let kind = match tag {
            // Structural
            RawTag::LeftParen => TokenKind::LeftParen,
            RawTag::RightParen => TokenKind::RightParen,
            RawTag::LeftBrace => TokenKind::LeftBrace,
            RawTag::RightBrace => TokenKind::RightBrace,
            RawTag::Comma => TokenKind::Comma,
            RawTag::Dot => TokenKind::Dot,
            RawTag::Minus => TokenKind::Minus,
            RawTag::Plus => TokenKind::Plus,
            RawTag::Semicolon => TokenKind::Semicolon,
            RawTag::Star => TokenKind::Star,
            RawTag::Slash => TokenKind::Slash,

            // One or two character operators
            RawTag::Equal => TokenKind::Equal,
            RawTag::EqualEqual => TokenKind::EqualEqual,
            RawTag::Bang => TokenKind::Bang,
            RawTag::BangEqual => TokenKind::BangEqual,
            RawTag::Less => TokenKind::Less,
            RawTag::LessEqual => TokenKind::LessEqual,
            RawTag::Greater => TokenKind::Greater,
            RawTag::GreaterEqual => TokenKind::GreaterEqual,

            RawTag::Ident => return Some(self.cook_ident(offset, len)),
            RawTag::Number => return Some(self.cook_number(offset, len)),
            RawTag::String => return Some(self.cook_string(offset, len)),

            RawTag::Newline => {
                self.line = self.line.saturating_add(1);
                return None;
            }
            // Trivia (should not reach cook: the driver skips it)
            RawTag::Whitespace | RawTag::LineComment => {
                debug_assert!(false, "Trivia should be skipped by the driver loop, not cook()");
                return None;
            }

            RawTag::InvalidChar => {
                self.cook_invalid_char(offset, len);
                return None;
            }
            RawTag::UnterminatedString => {
                self.cook_unterminated_string(offset, len);
                return None;
            }

            // EOF (should not reach cook: the driver appends it)
            RawTag::Eof => {
                debug_assert!(false, "Eof should be handled by the driver loop, not cook()");
                return None;
            }
        };
        Some(Token::new(kind, self.slice(offset, len), Literal::None, self.line))
    }

    // ─── Literal paths ───────────────────────────────────────────

    fn cook_ident(&self, offset: u32, len: u32) -> Token {
        let text = self.slice(offset, len);
        let kind = keywords::lookup(text).unwrap_or(TokenKind::Identifier);
        Token::new(kind, text, Literal::None, self.line)
    }

    fn cook_number(&self, offset: u32, len: u32) -> Token {
        let text = self.slice(offset, len);
        // The raw scanner only accepts `digits` or `digits.digits`, both valid f64.
        // Runs too large for f64 decode to infinity; that is not a lexical error.
        let value = text.parse::<f64>().unwrap_or(f64::NAN);
        Token::new(TokenKind::Number, text, Literal::Number(value), self.line)
    }

    /// The token keeps the line its opening quote is on; the counter then
    /// moves past every newline inside the literal.
    fn cook_string(&mut self, offset: u32, len: u32) -> Token {
        let text = self.slice(offset, len);
        let contents = text
            .strip_prefix('"')
            .and_then(|t| t.strip_suffix('"'))
            .unwrap_or_default();
        let token = Token::new(
            TokenKind::String,
            text,
            Literal::Text(contents.to_owned()),
            self.line,
        );
        self.advance_lines(text);
        token
    }

    // ─── Error paths ─────────────────────────────────────────────

    fn cook_invalid_char(&mut self, offset: u32, len: u32) {
        let character = self
            .slice(offset, len)
            .chars()
            .next()
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        self.report(ScanError::UnexpectedCharacter {
            line: self.line,
            character,
        });
    }

    /// Reported at the line where input ran out, after the swallowed newlines.
    fn cook_unterminated_string(&mut self, offset: u32, len: u32) {
        let text = self.slice(offset, len);
        self.advance_lines(text);
        self.report(ScanError::UnterminatedString { line: self.line });
    }

    fn report(&mut self, error: ScanError) {
        debug!(line = error.line(), %error, "lexical error");
        self.errors.push(error);
    }

    // ─── Helpers ─────────────────────────────────────────────────

    #[allow(
        clippy::cast_possible_truncation,
        reason = "newline count is bounded by the source length, which fits in u32"
    )]
    fn advance_lines(&mut self, text: &str) {
        let newlines = memchr::memchr_iter(b'\n', text.as_bytes()).count();
        self.line = self.line.saturating_add(newlines as u32);
    }

    fn slice(&self, offset: u32, len: u32) -> &'src str {
        let start = offset as usize;
        let end = start + len as usize;
        self.source.get(start..end).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests;
