//! Error types for the protocol layer.

use crate::exception::ServiceError;

/// Result type for protocol operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Unified error type for marshalling, decoding and paginating requests.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A request or response shape was rejected by the model.
    #[error(transparent)]
    Model(#[from] kendra_model::Error),

    /// The service answered with an error body.
    #[error("Service error: {0}")]
    Service(#[from] ServiceError),

    /// JSON serialization/deserialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid client configuration.
    #[error("Invalid configuration: {reason}")]
    Config { reason: String },

    /// The service broke the pagination contract.
    #[error("Pagination error: {reason}")]
    Pagination { reason: String },
}

impl Error {
    /// Creates a configuration error.
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Creates a pagination error.
    pub fn pagination(reason: impl Into<String>) -> Self {
        Self::Pagination {
            reason: reason.into(),
        }
    }

    /// Returns the decoded service error, if the service rejected the call.
    pub fn service_error(&self) -> Option<&ServiceError> {
        match self {
            Self::Service(error) => Some(error),
            _ => None,
        }
    }

    /// Returns whether repeating the same call may succeed.
    pub fn is_retryable(&self) -> bool {
        self.service_error().is_some_and(ServiceError::is_retryable)
    }
}

impl From<derive_builder::UninitializedFieldError> for Error {
    fn from(error: derive_builder::UninitializedFieldError) -> Self {
        Self::Model(error.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_error_is_transparent() {
        let error = Error::from(kendra_model::Error::unrecognized_value("IndexStatus", "GONE"));
        assert_eq!(error.to_string(), "Unrecognized IndexStatus value: 'GONE'");
        assert!(!error.is_retryable());
    }

    #[test]
    fn test_config_error_message() {
        let error = Error::config("region 'moon' is malformed");
        assert_eq!(error.to_string(), "Invalid configuration: region 'moon' is malformed");
    }
}
