//! Error types for the Kendra data model.

use derive_builder::UninitializedFieldError;
use validator::ValidationErrors;

/// Result type alias for model operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors produced while constructing, validating or converting shapes.
///
/// # Examples
///
/// ```
/// use kendra_model::Error;
/// use kendra_model::enums::FaqStatus;
///
/// let error = FaqStatus::from_value("ARCHIVED").unwrap_err();
/// assert!(matches!(error, Error::UnrecognizedValue { .. }));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A wire string is not a member of the enumeration it was parsed into.
    #[error("Unrecognized {type_name} value: '{value}'")]
    UnrecognizedValue {
        /// Name of the enumeration.
        type_name: &'static str,
        /// The rejected wire string.
        value: String,
    },

    /// One or more field constraints are violated.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// A builder was finalized without a field that has no default.
    #[error("Uninitialized field: {0}")]
    UninitializedField(&'static str),

    /// JSON serialization/deserialization errors.
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Creates an unrecognized value error.
    pub fn unrecognized_value(type_name: &'static str, value: impl Into<String>) -> Self {
        Self::UnrecognizedValue {
            type_name,
            value: value.into(),
        }
    }

    /// Returns the validation errors if this is a validation failure.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<UninitializedFieldError> for Error {
    fn from(error: UninitializedFieldError) -> Self {
        Self::UninitializedField(error.field_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrecognized_value_message() {
        let error = Error::unrecognized_value("IndexStatus", "BOGUS");
        assert_eq!(error.to_string(), "Unrecognized IndexStatus value: 'BOGUS'");
        assert!(error.validation_errors().is_none());
    }

    #[test]
    fn test_from_uninitialized_field() {
        let error: Error = UninitializedFieldError::new("index_id").into();
        assert!(matches!(error, Error::UninitializedField("index_id")));
    }
}
