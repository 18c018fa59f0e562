//! Raw token tags produced by the [`RawScanner`](crate::RawScanner).
//!
//! A [`RawTag`] says what kind of lexeme was found; a [`RawToken`] pairs it
//! with the byte length consumed. Error conditions are tags too, never
//! `Result::Err`, so the scanner always makes progress.

/// Kind of a raw token.
///
/// Discriminants are grouped into semantic ranges:
/// - `0..=15`: identifiers and literals
/// - `32..=63`: operators and punctuation
/// - `80..=95`: delimiters
/// - `112..=127`: trivia
/// - `240..=254`: errors
/// - `255`: end of input
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RawTag {
    // === Identifiers & Literals ===
    /// Identifier or reserved word (`foo`, `_bar`, `class`).
    Ident = 0,
    /// Decimal number, with optional fractional part (`42`, `3.14`).
    Number = 1,
    /// Double-quoted string, both quotes included.
    String = 2,

    // === Operators & Punctuation ===
    /// `+`
    Plus = 32,
    /// `-`
    Minus = 33,
    /// `*`
    Star = 34,
    /// `/`
    Slash = 35,
    /// `=`
    Equal = 36,
    /// `==`
    EqualEqual = 37,
    /// `!`
    Bang = 38,
    /// `!=`
    BangEqual = 39,
    /// `<`
    Less = 40,
    /// `<=`
    LessEqual = 41,
    /// `>`
    Greater = 42,
    /// `>=`
    GreaterEqual = 43,
    /// `.`
    Dot = 44,
    /// `,`
    Comma = 45,
    /// `;`
    Semicolon = 46,

    // === Delimiters ===
    /// `(`
    LeftParen = 80,
    /// `)`
    RightParen = 81,
    /// `{`
    LeftBrace = 82,
    /// `}`
    RightBrace = 83,

    // === Trivia ===
    /// Run of spaces, tabs, and carriage returns.
    Whitespace = 112,
    /// `\n`
    Newline = 113,
    /// `// ...` up to (not including) the next newline.
    LineComment = 114,

    // === Errors ===
    /// A character no lexical rule accepts.
    InvalidChar = 240,
    /// A string whose closing `"` was never found.
    UnterminatedString = 241,

    // === Control ===
    /// End of input. Always has length 0.
    Eof = 255,
}

impl RawTag {
    /// The fixed source text of this tag, if it always has the same lexeme.
    ///
    /// Returns `None` for identifiers, literals, trivia, errors, and `Eof`.
    pub fn lexeme(self) -> Option<&'static str> {
        match self {
            Self::Plus => Some("+"),
            Self::Minus => Some("-"),
            Self::Star => Some("*"),
            Self::Slash => Some("/"),
            Self::Equal => Some("="),
            Self::EqualEqual => Some("=="),
            Self::Bang => Some("!"),
            Self::BangEqual => Some("!="),
            Self::Less => Some("<"),
            Self::LessEqual => Some("<="),
            Self::Greater => Some(">"),
            Self::GreaterEqual => Some(">="),
            Self::Dot => Some("."),
            Self::Comma => Some(","),
            Self::Semicolon => Some(";"),
            Self::LeftParen => Some("("),
            Self::RightParen => Some(")"),
            Self::LeftBrace => Some("{"),
            Self::RightBrace => Some("}"),
            Self::Ident
            | Self::Number
            | Self::String
            | Self::Whitespace
            | Self::Newline
            | Self::LineComment
            | Self::InvalidChar
            | Self::UnterminatedString
            | Self::Eof => None,
        }
    }

    /// Human-readable description, used in debug output.
    pub fn name(self) -> &'static str {
        match self {
            Self::Ident => "identifier",
            Self::Number => "number literal",
            Self::String => "string literal",
            Self::Plus => "`+`",
            Self::Minus => "`-`",
            Self::Star => "`*`",
            Self::Slash => "`/`",
            Self::Equal => "`=`",
            Self::EqualEqual => "`==`",
            Self::Bang => "`!`",
            Self::BangEqual => "`!=`",
            Self::Less => "`<`",
            Self::LessEqual => "`<=`",
            Self::Greater => "`>`",
            Self::GreaterEqual => "`>=`",
            Self::Dot => "`.`",
            Self::Comma => "`,`",
            Self::Semicolon => "`;`",
            Self::LeftParen => "`(`",
            Self::RightParen => "`)`",
            Self::LeftBrace => "`{`",
            Self::RightBrace => "`}`",
            Self::Whitespace => "whitespace",
            Self::Newline => "newline",
            Self::LineComment => "line comment",
            Self::InvalidChar => "invalid character",
            Self::UnterminatedString => "unterminated string",
            Self::Eof => "end of file",
        }
    }

    /// Returns `true` for tags that produce no token (whitespace, comments).
    ///
    /// Newlines are not trivia: they carry the line count.
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::Whitespace | Self::LineComment)
    }

    /// Returns `true` for tags that represent a lexical error.
    pub fn is_error(self) -> bool {
        matches!(self, Self::InvalidChar | Self::UnterminatedString)
    }
}

/// A raw token: what was found and how many bytes it spans.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RawToken {
    pub tag: RawTag,
    /// Length in bytes. Zero only for [`RawTag::Eof`].
    pub len: u32,
}
