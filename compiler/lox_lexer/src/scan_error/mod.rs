//! Lexical errors collected during a scan.
//!
//! Both kinds are recoverable: the scanner records them and keeps going.
//! `Display` renders the diagnostic line exactly as the CLI prints it.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum ScanError {
    /// A character no lexical rule accepts.
    #[error("[line {line}] Error: Unexpected character: {character}")]
    UnexpectedCharacter { line: u32, character: char },

    /// End of input reached inside a string literal.
    ///
    /// `line` is where the scan ran out, which is past any newlines the
    /// string swallowed.
    #[error("[line {line}] Error: Unterminated string.")]
    UnterminatedString { line: u32 },
}

impl ScanError {
    /// The 1-based line active when the error was detected.
    pub fn line(&self) -> u32 {
        match self {
            Self::UnexpectedCharacter { line, .. } | Self::UnterminatedString { line } => *line,
        }
    }
}
