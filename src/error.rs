use std::io;
use thiserror::Error;

/// Crate-wide result type
pub type Result<T> = std::result::Result<T, Error>;

/// Generic error type
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed or incomplete request, fixable by the caller
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// No artifact exists for the addressed serial
    #[error("Not found: {0}")]
    NotFound(String),

    /// Key generation, signing, or storage failure not attributable to
    /// caller input
    #[error("Internal error: {0}")]
    Internal(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Error::Config(err.to_string())
    }
}
