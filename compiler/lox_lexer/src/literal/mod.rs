//! Decoded literal values and their display policy.

use std::fmt;

/// Value decoded from a literal token, resolved when the token is cooked.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Literal {
    /// Tokens without a literal value.
    #[default]
    None,
    /// String contents, without the surrounding quotes.
    Text(String),
    Number(f64),
}

impl Literal {
    /// Returns `true` for tokens without a literal value.
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// String contents, if this is a string literal.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::None | Self::Number(_) => None,
        }
    }

    /// Decoded value, if this is a number literal.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::None | Self::Text(_) => None,
        }
    }
}

/// `None` displays as `null`; numbers follow [`format_number`].
impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("null"),
            Self::Text(text) => f.write_str(text),
            Self::Number(value) => f.write_str(&format_number(*value)),
        }
    }
}

/// Display form of a number literal.
///
/// Integral values keep exactly one fractional digit (`1234` → `1234.0`).
/// Anything else uses the shortest decimal that round-trips to the same `f64`.
/// A literal too large for `f64` decodes to infinity and displays as `inf`.
/// This is presentation only; consumers should read the `f64` itself.
#[allow(
    clippy::float_cmp,
    reason = "exact integrality test: fract() is 0.0 only for integral values"
)]
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests;
