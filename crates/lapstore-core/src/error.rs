//! # Error Types
//!
//! Validation error types for lapstore-core.
//!
//! ## Error Flow
//! ```text
//! ValidationError (this crate)
//!      │  via From
//!      ▼
//! DbError::InvalidRecord (lapstore-db)
//!      │
//!      ▼
//! Caller boundary (presentation layer logs or displays it)
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impls)
//! 2. Include context in error messages (field name, limits)
//! 3. Errors are enum variants, never bare strings

use thiserror::Error;

/// Input validation errors.
///
/// These occur when a record doesn't meet requirements, before any
/// database statement runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },
}

/// Convenience type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::Required {
            field: "username".to_string(),
        };
        assert_eq!(err.to_string(), "username is required");

        let err = ValidationError::TooShort {
            field: "password".to_string(),
            min: 4,
        };
        assert_eq!(err.to_string(), "password must be at least 4 characters");
    }
}
