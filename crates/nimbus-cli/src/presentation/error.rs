use std::fmt;

/// Errors raised while rendering results
#[derive(Debug)]
pub enum RenderError {
    /// A record-only printer got something else
    NotAMapping(String),

    /// A sequence-only printer got something else
    NotASequence(String),

    /// Writing to the output failed
    Io(std::io::Error),

    /// JSON serialization failed
    Json(serde_json::Error),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::NotAMapping(found) => {
                write!(f, "print_dict input must be a record, got: {}", found)
            }
            RenderError::NotASequence(found) => {
                write!(f, "print_list input must be a sequence, got: {}", found)
            }
            RenderError::Io(err) => write!(f, "Output error: {}", err),
            RenderError::Json(err) => write!(f, "JSON error: {}", err),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Io(err) => Some(err),
            RenderError::Json(err) => Some(err),
            RenderError::NotAMapping(_) | RenderError::NotASequence(_) => None,
        }
    }
}

impl From<std::io::Error> for RenderError {
    fn from(err: std::io::Error) -> Self {
        RenderError::Io(err)
    }
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        RenderError::Json(err)
    }
}
