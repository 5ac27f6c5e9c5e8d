//! Error types for point-set construction and input loading.

use std::fmt;

/// Result type for fallible `kdpoint` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a point set or loading its input.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A construction argument was absent or out of range.
    InvalidArgument {
        /// Name of the offending argument.
        arg: &'static str,
        /// Human readable explanation.
        reason: String,
    },

    /// An input line could not be parsed.
    Parse {
        /// 1-based line number in the input.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },

    /// Reading an input file failed.
    Io(String),
}

impl Error {
    pub(crate) fn invalid_points(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg: "points",
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { arg, reason } => {
                write!(f, "Invalid argument '{}': {}", arg, reason)
            }
            Self::Parse { line, message } => {
                write!(f, "Parse error on line {}: {}", line, message)
            }
            Self::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
