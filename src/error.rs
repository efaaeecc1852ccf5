//! Error types for careerdraft.

use std::fmt;

/// Result type alias for careerdraft operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for careerdraft operations.
///
/// The pure core (history, reconciliation) never fails; errors arise only
/// at the JSON boundary where external payloads enter the crate.
#[derive(Debug)]
pub enum Error {
    /// Malformed JSON from an external payload (profile or suggestion batch).
    Parse(serde_json::Error),
    /// Input rejected before parsing (e.g., an empty payload).
    InvalidInput(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "payload parse error: {e}"),
            Self::InvalidInput(s) => write!(f, "invalid input: {s}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::InvalidInput(_) => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidInput("empty id".to_string());
        assert!(err.to_string().contains("invalid input"));

        let parse_err = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
        let err: Error = parse_err.into();
        assert!(err.to_string().contains("payload parse error"));
    }

    #[test]
    fn test_parse_error_source() {
        use std::error::Error as _;

        let parse_err = serde_json::from_str::<Vec<u32>>("{").unwrap_err();
        let err = Error::Parse(parse_err);
        assert!(err.source().is_some());
        assert!(Error::InvalidInput("x".to_string()).source().is_none());
    }
}
