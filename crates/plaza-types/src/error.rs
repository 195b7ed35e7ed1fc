use std::fmt;

/// Result type for plaza-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An empty comment draft was submitted
    EmptyDraft,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyDraft => write!(f, "comment draft is empty"),
        }
    }
}

impl std::error::Error for Error {}
