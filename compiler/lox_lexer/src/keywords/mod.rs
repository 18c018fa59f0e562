//! Reserved-word resolution.
//!
//! Identifier text is bucketed by length first (reserved words are 2-6
//! bytes), then matched against the words of that length. The table is a
//! compile-time `match`; nothing is built at runtime.

use crate::TokenKind;

/// Look up a reserved word by text.
///
/// Returns `None` for ordinary identifiers. Case-sensitive: `Class` is an
/// identifier.
#[inline]
pub fn lookup(text: &str) -> Option<TokenKind> {
    let bytes = text.as_bytes();
    let len = bytes.len();

    // Guard: all reserved words are 2-6 chars of lowercase ASCII
    if !(2..=6).contains(&len) {
        return None;
    }
    if !bytes.first().is_some_and(u8::is_ascii_lowercase) {
        return None;
    }

    match len {
        2 => match text {
            "if" => Some(TokenKind::If),
            "or" => Some(TokenKind::Or),
            _ => None,
        },
        3 => match text {
            "and" => Some(TokenKind::And),
            "for" => Some(TokenKind::For),
            "fun" => Some(TokenKind::Fun),
            "nil" => Some(TokenKind::Nil),
            "var" => Some(TokenKind::Var),
            _ => None,
        },
        4 => match text {
            "else" => Some(TokenKind::Else),
            "this" => Some(TokenKind::This),
            "true" => Some(TokenKind::True),
            _ => None,
        },
        5 => match text {
            "class" => Some(TokenKind::Class),
            "false" => Some(TokenKind::False),
            "print" => Some(TokenKind::Print),
            "super" => Some(TokenKind::Super),
            "while" => Some(TokenKind::While),
            _ => None,
        },
        6 => match text {
            "return" => Some(TokenKind::Return),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests;
