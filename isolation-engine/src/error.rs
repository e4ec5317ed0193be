//! Isolation Engine error type.

use std::error;
use std::fmt::{self, Display};
use std::result;

/// Isolation Engine generic result type.
pub type Result<T> = result::Result<T, Error>;

/// A list specifying general errors for the Isolation engine.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Remaining time dropped below the agent's threshold mid-search.
    /// This is a control signal, agents recover from it and return a fallback move.
    SearchTimeout,

    /// A search was started from a state where the active player has no legal move.
    NoLegalMoves,
    /// A search was configured or started with an unusable depth.
    InvalidDepth,
    /// The board engine refused to forecast a move it reported as legal.
    IllegalForecast,

    /// Heuristic parse string malformed.
    ParseHeuristicMalformed,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::SearchTimeout => "search timeout",

            ErrorKind::NoLegalMoves => "no legal moves",
            ErrorKind::InvalidDepth => "invalid depth",
            ErrorKind::IllegalForecast => "illegal forecast",

            ErrorKind::ParseHeuristicMalformed => "parse heuristic malformed",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The primary and general error type for the Isolation Engine.
#[derive(Debug)]
pub enum Error {
    Simple(ErrorKind),
    Message(ErrorKind, String),
    Custom(ErrorKind, Box<dyn error::Error + Send + Sync>),
}

impl Error {
    pub fn new<E>(error_kind: ErrorKind, inner_error: E) -> Self
    where
        E: Into<Box<dyn error::Error + Send + Sync>>,
    {
        Self::Custom(error_kind, inner_error.into())
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Simple(error_kind) => *error_kind,
            Error::Message(error_kind, _) => *error_kind,
            Error::Custom(error_kind, _) => *error_kind,
        }
    }

    /// Returns true if this error is the search timeout signal.
    pub fn is_timeout(&self) -> bool {
        self.kind() == ErrorKind::SearchTimeout
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Simple(error_kind) => {
                write!(f, "{error_kind}")
            }
            Error::Message(error_kind, string) => {
                write!(f, "{error_kind}: {string}")
            }
            Error::Custom(error_kind, ref box_error) => {
                write!(f, "{error_kind}, error: {}", *box_error)
            }
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Custom(_, box_error) => Some(box_error.as_ref()),
            _ => None,
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(error_kind: ErrorKind) -> Self {
        Self::Simple(error_kind)
    }
}

impl<S: ToString> From<(ErrorKind, S)> for Error {
    fn from((error_kind, stringable): (ErrorKind, S)) -> Self {
        Self::Message(error_kind, stringable.to_string())
    }
}
