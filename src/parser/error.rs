//! Parser-level errors

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a read.
///
/// Parse and I/O failures terminate the whole read immediately; no partial
/// tree is ever returned.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A closing brace at the top level had no matching opening brace.
    #[error("unmatched closing brace in {path}")]
    UnmatchedClosingBrace { path: PathBuf },

    /// A section was still open at end of input (strict mode only).
    #[error("unterminated section in {path}: brace opened at line {line} is never closed")]
    UnterminatedBranch { path: PathBuf, line: usize },
}

impl ParseError {
    /// Create an I/O error carrying the requested path.
    pub fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result type for parser operations.
pub type ParseResult<T> = Result<T, ParseError>;
