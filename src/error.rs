// File: src/error.rs
//! Error types for numeral conversion and for the file-rewriting front end.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to convert a single numeral token.
///
/// Scoped to one token: callers decide whether to keep the token as written
/// or abort the whole batch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// A lexicon key that dispatch expected to exist was missing.
    #[error("invalid digit '{key}' for a {width}-digit group")]
    InvalidDigit { key: String, width: usize },

    #[error("numbers of more than {max} digits are not supported: {digits}")]
    Unsupported { digits: String, max: usize },
}

pub type ConversionResult<T> = std::result::Result<T, ConversionError>;

/// Errors raised while converting files and directories.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not locate the path that you provided: {0}")]
    NotFound(PathBuf),

    #[error("cannot create {0} since its parent directory does not exist")]
    MissingParent(PathBuf),

    #[error("no files ending in '{extension}' found in {dir}")]
    EmptyDirectory { dir: PathBuf, extension: String },

    #[error("output path {0} is not a directory while the input path is")]
    OutputNotDirectory(PathBuf),

    #[error("invalid config file {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{path}:{line}: {source}")]
    Conversion {
        path: PathBuf,
        line: usize,
        #[source]
        source: ConversionError,
    },

    #[error(transparent)]
    Token(#[from] ConversionError),

    #[error("aborted by user")]
    Aborted,
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
