//! Validation error types

use std::fmt;

/// Request input that could not be accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// String doesn't match required format (e.g., numeric id)
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Request body is not valid JSON for the expected shape
    MalformedBody { reason: String },

    /// Two sources for the same field disagree
    Mismatch {
        field: &'static str,
        expected: String,
        found: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat { field, reason } => write!(f, "{}: {}", field, reason),
            Self::MalformedBody { reason } => write!(f, "malformed request body: {}", reason),
            Self::Mismatch {
                field,
                expected,
                found,
            } => write!(f, "{} mismatch: expected '{}', found '{}'", field, expected, found),
        }
    }
}

impl std::error::Error for ValidationError {}
