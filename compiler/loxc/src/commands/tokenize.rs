//! `tokenize`: print the token trace and lexical diagnostics for one file.

use std::io::{self, Write};

use lox_lexer::Scanner;

use super::{read_source, EXIT_FAILURE, EXIT_LEXICAL_ERROR, EXIT_OK};

/// Options for `loxc tokenize`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenizeOptions {
    /// Print one trace line per token to stdout. `--no-trace` clears it.
    pub trace: bool,
}

impl Default for TokenizeOptions {
    fn default() -> Self {
        Self { trace: true }
    }
}

/// Load `path` and tokenize it.
///
/// A source that cannot be loaded prints one `error: …` line to `err` and
/// returns [`EXIT_FAILURE`] without scanning.
pub fn tokenize_file(
    path: &str,
    options: TokenizeOptions,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<i32> {
    let source = match read_source(path) {
        Ok(source) => source,
        Err(e) => {
            writeln!(err, "error: {e}")?;
            return Ok(EXIT_FAILURE);
        }
    };
    tokenize_source(&source, options, out, err)
}

/// Scan `source`, streaming the token trace to `out` as tokens are produced
/// and writing diagnostics to `err` in detection order.
///
/// Returns [`EXIT_LEXICAL_ERROR`] if any lexical error was reported,
/// otherwise [`EXIT_OK`].
pub fn tokenize_source(
    source: &[u8],
    options: TokenizeOptions,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<i32> {
    let mut written = Ok(());
    let output = Scanner::from_bytes(source).scan_tokens_with(|token| {
        if options.trace && written.is_ok() {
            written = writeln!(out, "{token}");
        }
    });
    written?;
    out.flush()?;

    for error in &output.errors {
        writeln!(err, "{error}")?;
    }
    err.flush()?;

    Ok(if output.has_errors() {
        EXIT_LEXICAL_ERROR
    } else {
        EXIT_OK
    })
}
