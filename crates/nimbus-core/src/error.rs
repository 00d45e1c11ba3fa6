use crate::filter::FilterError;
use crate::size::SizeError;
use std::fmt;

/// Result type for nimbus-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the core layer
#[derive(Debug)]
pub enum Error {
    /// Size parsing or formatting failed
    Size(SizeError),

    /// A filter precondition was violated
    Filter(FilterError),

    /// IO operation failed
    Io(std::io::Error),

    /// Mime type guessing needs a file name
    EmptyFilename,

    /// Configuration error
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Size(err) => write!(f, "{}", err),
            Error::Filter(err) => write!(f, "{}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::EmptyFilename => write!(f, "Cannot guess mime type for an empty file name"),
            Error::Config(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Size(err) => Some(err),
            Error::Filter(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::EmptyFilename | Error::Config(_) => None,
        }
    }
}

impl From<SizeError> for Error {
    fn from(err: SizeError) -> Self {
        Error::Size(err)
    }
}

impl From<FilterError> for Error {
    fn from(err: FilterError) -> Self {
        Error::Filter(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
