//! Validation error types

use std::fmt;

/// Validation error for request parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Value is not a valid integer
    NotAnInteger { field: &'static str, value: String },

    /// Integer falls outside its allowed range
    OutOfRange {
        field: &'static str,
        min: i64,
        max: Option<i64>,
    },

    /// Query string could not be decoded at all
    MalformedQuery { reason: String },
}

impl ValidationError {
    /// Name of the offending field, reported back to the client.
    pub fn field(&self) -> &'static str {
        match self {
            Self::NotAnInteger { field, .. } | Self::OutOfRange { field, .. } => field,
            Self::MalformedQuery { .. } => "query",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnInteger { field, value } => {
                write!(f, "{} must be an integer, got '{}'", field, value)
            }
            Self::OutOfRange {
                field,
                min,
                max: Some(max),
            } => write!(f, "{} must be between {} and {}", field, min, max),
            Self::OutOfRange {
                field,
                min,
                max: None,
            } => write!(f, "{} must be greater than or equal to {}", field, min),
            Self::MalformedQuery { reason } => write!(f, "malformed query string: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::OutOfRange {
            field: "limit",
            min: 1,
            max: Some(1000),
        };
        assert_eq!(err.to_string(), "limit must be between 1 and 1000");

        let err = ValidationError::OutOfRange {
            field: "skip",
            min: 0,
            max: None,
        };
        assert_eq!(err.to_string(), "skip must be greater than or equal to 0");
    }

    #[test]
    fn field_names() {
        let err = ValidationError::NotAnInteger {
            field: "skip",
            value: "ten".into(),
        };
        assert_eq!(err.field(), "skip");

        let err = ValidationError::MalformedQuery {
            reason: "duplicate field".into(),
        };
        assert_eq!(err.field(), "query");
    }
}
