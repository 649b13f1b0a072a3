//! CLI-level errors (top of the error chain)

use thiserror::Error;

use crate::domain::TreeError;
use crate::parser::ParseError;
use crate::writer::WriteError;

/// CLI errors are the top-level error type; these are what get displayed to
/// the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Parse(#[from] ParseError),

    #[error("{0}")]
    Tree(#[from] TreeError),

    #[error("{0}")]
    Write(#[from] WriteError),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Parse(ParseError::Io { .. }) => crate::exitcode::NOINPUT,
            CliError::Parse(_) => crate::exitcode::DATAERR,
            CliError::Tree(_) => crate::exitcode::DATAERR,
            CliError::Write(_) => crate::exitcode::CANTCREAT,
        }
    }
}
