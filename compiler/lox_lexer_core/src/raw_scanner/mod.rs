//! Hand-written raw scanner producing `(RawTag, len)` pairs.
//!
//! The scanner operates on a [`Cursor`] and produces [`RawToken`] values with
//! no heap allocation. It does not resolve keywords, decode literals, or count
//! lines; those are deferred to the cooking layer in `lox_lexer`.
//!
//! # Design
//!
//! [`next_token`](RawScanner::next_token) looks at the next byte and dispatches
//! to a focused method that advances the cursor and returns the token. Every
//! method consumes at least one byte, so the cursor strictly advances until
//! `Eof`. Multi-byte constructs take the longest match the grammar allows.

use crate::cursor::Cursor;
use crate::tag::{RawTag, RawToken};

/// Allocation-free scanner over one source.
///
/// Produces one token at a time. Error conditions are encoded as `RawTag`
/// variants, not as `Result::Err`.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> RawScanner<'a> {
    /// Create a new scanner from a cursor.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    /// Byte offset where the next token will start.
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` when the source is exhausted.
    /// Subsequent calls after EOF continue to return `Eof`.
    #[inline]
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        let Some(b) = self.cursor.peek(0) else {
            return RawToken {
                tag: RawTag::Eof,
                len: 0,
            };
        };
        match b {
            b' ' | b'\t' | b'\r' => self.whitespace(start),
            b'\n' => self.single(start, RawTag::Newline),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(start),
            b'0'..=b'9' => self.number(start),
            b'"' => self.string(start),
            b'/' => self.slash_or_comment(start),
            b'(' => self.single(start, RawTag::LeftParen),
            b')' => self.single(start, RawTag::RightParen),
            b'{' => self.single(start, RawTag::LeftBrace),
            b'}' => self.single(start, RawTag::RightBrace),
            b',' => self.single(start, RawTag::Comma),
            b'.' => self.single(start, RawTag::Dot),
            b'-' => self.single(start, RawTag::Minus),
            b'+' => self.single(start, RawTag::Plus),
            b';' => self.single(start, RawTag::Semicolon),
            b'*' => self.single(start, RawTag::Star),
            b'=' => self.with_equal(start, RawTag::Equal, RawTag::EqualEqual),
            b'!' => self.with_equal(start, RawTag::Bang, RawTag::BangEqual),
            b'<' => self.with_equal(start, RawTag::Less, RawTag::LessEqual),
            b'>' => self.with_equal(start, RawTag::Greater, RawTag::GreaterEqual),
            _ => self.invalid_char(start),
        }
    }

    /// Close a token that started at `start` and ends at the cursor.
    #[inline]
    fn finish(&self, start: u32, tag: RawTag) -> RawToken {
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    // ─── Whitespace ──────────────────────────────────────────────

    fn whitespace(&mut self, start: u32) -> RawToken {
        self.cursor.eat_while(|b| matches!(b, b' ' | b'\t' | b'\r'));
        self.finish(start, RawTag::Whitespace)
    }

    // ─── Comments ────────────────────────────────────────────────

    fn slash_or_comment(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume first '/'
        if self.cursor.peek(0) == Some(b'/') {
            // The newline stays unconsumed; it becomes its own token.
            self.cursor.eat_until_newline_or_eof();
            self.finish(start, RawTag::LineComment)
        } else {
            self.finish(start, RawTag::Slash)
        }
    }

    // ─── Identifiers ─────────────────────────────────────────────

    #[inline]
    fn identifier(&mut self, start: u32) -> RawToken {
        self.cursor.eat_while(is_ident_continue);
        self.finish(start, RawTag::Ident)
    }

    // ─── Operators ───────────────────────────────────────────────

    /// Single-byte token: advance one byte and emit the given tag.
    fn single(&mut self, start: u32, tag: RawTag) -> RawToken {
        self.cursor.advance();
        self.finish(start, tag)
    }

    /// `=`, `!`, `<`, `>`: the two-byte form wins when `=` follows.
    fn with_equal(&mut self, start: u32, one: RawTag, two: RawTag) -> RawToken {
        self.cursor.advance();
        if self.cursor.peek(0) == Some(b'=') {
            self.cursor.advance();
            self.finish(start, two)
        } else {
            self.finish(start, one)
        }
    }

    // ─── Numeric Literals ────────────────────────────────────────

    fn number(&mut self, start: u32) -> RawToken {
        self.cursor.eat_while(|b| b.is_ascii_digit());

        // Fraction only when a digit follows the dot: `123.` is Number, Dot.
        if self.cursor.peek(0) == Some(b'.')
            && self.cursor.peek(1).is_some_and(|b| b.is_ascii_digit())
        {
            self.cursor.advance(); // consume '.'
            self.cursor.eat_while(|b| b.is_ascii_digit());
        }

        self.finish(start, RawTag::Number)
    }

    // ─── String Literals ─────────────────────────────────────────

    /// Strings have no escapes and may span lines; the first `"` closes.
    fn string(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume opening '"'
        self.cursor.eat_until(b'"');
        if self.cursor.advance() == Some(b'"') {
            self.finish(start, RawTag::String)
        } else {
            // Consumed the rest of the source.
            self.finish(start, RawTag::UnterminatedString)
        }
    }

    // ─── Error tokens ────────────────────────────────────────────

    /// Skip one whole character, however many bytes it takes.
    fn invalid_char(&mut self, start: u32) -> RawToken {
        self.cursor.advance_char();
        self.finish(start, RawTag::InvalidChar)
    }
}

impl Iterator for RawScanner<'_> {
    type Item = RawToken;

    fn next(&mut self) -> Option<RawToken> {
        let tok = self.next_token();
        if tok.tag == RawTag::Eof {
            None
        } else {
            Some(tok)
        }
    }
}

/// Returns `true` if `b` may continue an identifier.
#[inline]
fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Convenience function: tokenize a source string and collect all raw tokens.
///
/// Returns every token except the final `Eof`. For streaming access,
/// construct a `SourceBuffer` + `RawScanner` directly.
pub fn tokenize(source: &str) -> Vec<RawToken> {
    let buf = crate::SourceBuffer::new(source);
    RawScanner::new(buf.cursor()).collect()
}
