//! Domain error model.

use thiserror::Error;

/// Result type used across the analytics layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// The presentation engines themselves never fail; this covers the few places
/// where text from the outside world is parsed into a closed domain type
/// (sort field names, category letters, identifiers).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A name did not match any member of a closed set.
    #[error("unknown {kind}: {value}")]
    Unknown { kind: &'static str, value: String },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn unknown(kind: &'static str, value: impl Into<String>) -> Self {
        Self::Unknown {
            kind,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_error_names_kind_and_value() {
        let err = DomainError::unknown("sort field", "colour");
        assert_eq!(err.to_string(), "unknown sort field: colour");
    }
}
