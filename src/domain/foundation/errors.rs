//! Error types for the domain layer.

use thiserror::Error;

/// Errors that occur during canvas construction.
///
/// Structural validity is enforced exactly once, when a canvas record is
/// built. The analysis functions downstream are total and never return
/// these.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i32,
        max: i32,
        actual: i32,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    #[error("Duplicate id '{id}' in '{field}'")]
    DuplicateId { field: String, id: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i32, max: i32, actual: i32) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a duplicate id validation error.
    pub fn duplicate_id(field: impl Into<String>, id: impl Into<String>) -> Self {
        ValidationError::DuplicateId {
            field: field.into(),
            id: id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("company");
        assert_eq!(format!("{}", err), "Field 'company' cannot be empty");
    }

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("severity", 1, 5, 9);
        assert_eq!(
            format!("{}", err),
            "Field 'severity' must be between 1 and 5, got 9"
        );
    }

    #[test]
    fn validation_error_invalid_format_displays_correctly() {
        let err = ValidationError::invalid_format("job_type", "unknown variant");
        assert_eq!(
            format!("{}", err),
            "Field 'job_type' has invalid format: unknown variant"
        );
    }

    #[test]
    fn validation_error_duplicate_id_displays_correctly() {
        let err = ValidationError::duplicate_id("pains", "pain-1");
        assert_eq!(format!("{}", err), "Duplicate id 'pain-1' in 'pains'");
    }
}
