//! Decoding of service error bodies.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// The error kinds the Kendra API declares.
///
/// Codes outside this set decode to [`ServiceErrorKind::Unknown`]; the raw
/// code is kept on the [`ServiceError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(Serialize, Deserialize)]
#[derive(AsRefStr, Display, EnumIter, EnumString, IntoStaticStr)]
pub enum ServiceErrorKind {
    /// The caller lacks permission for the action.
    #[serde(rename = "AccessDeniedException")]
    #[strum(serialize = "AccessDeniedException")]
    AccessDenied,

    /// A concurrent change conflicts with the request.
    #[serde(rename = "ConflictException")]
    #[strum(serialize = "ConflictException")]
    Conflict,

    #[serde(rename = "InternalServerException")]
    #[strum(serialize = "InternalServerException")]
    InternalServer,

    #[serde(rename = "ResourceAlreadyExistException")]
    #[strum(serialize = "ResourceAlreadyExistException")]
    ResourceAlreadyExist,

    /// The data source is already syncing.
    #[serde(rename = "ResourceInUseException")]
    #[strum(serialize = "ResourceInUseException")]
    ResourceInUse,

    #[serde(rename = "ResourceNotFoundException")]
    #[strum(serialize = "ResourceNotFoundException")]
    ResourceNotFound,

    #[serde(rename = "ResourceUnavailableException")]
    #[strum(serialize = "ResourceUnavailableException")]
    ResourceUnavailable,

    #[serde(rename = "ServiceQuotaExceededException")]
    #[strum(serialize = "ServiceQuotaExceededException")]
    ServiceQuotaExceeded,

    /// The request rate is above the account limit.
    #[serde(rename = "ThrottlingException")]
    #[strum(serialize = "ThrottlingException")]
    Throttling,

    /// The service rejected the input shape.
    #[serde(rename = "ValidationException")]
    #[strum(serialize = "ValidationException")]
    Validation,

    /// A code this crate does not know about.
    #[serde(rename = "Unknown")]
    #[strum(serialize = "Unknown")]
    Unknown,
}

impl ServiceErrorKind {
    /// Maps an error code, with any namespace stripped, to its kind.
    pub fn from_code(code: &str) -> Self {
        code.parse().unwrap_or(Self::Unknown)
    }

    /// Returns the wire code of this kind.
    #[inline]
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Returns whether the kind describes a transient condition.
    pub fn is_retryable(self) -> bool {
        matches!(self, Self::Throttling | Self::InternalServer)
    }
}

/// An error returned by the service in place of a response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{code} (HTTP {status}): {}", .message.as_deref().unwrap_or("no message"))]
pub struct ServiceError {
    /// Decoded kind of the error.
    pub kind: ServiceErrorKind,
    /// Error code as sent, without its namespace.
    pub code: String,
    /// Message from the service, if any.
    pub message: Option<String>,
    /// HTTP status of the response.
    pub status: u16,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(rename = "__type")]
    error_type: Option<String>,
    #[serde(alias = "Message")]
    message: Option<String>,
}

impl ServiceError {
    /// Decodes an error response body.
    ///
    /// The code is read from `__type`, whose value may carry a namespace
    /// (`com.amazonaws.kendra#ThrottlingException`) or a trailing URI
    /// (`ThrottlingException:http://...`). Bodies that are not JSON keep
    /// their text as the message.
    pub fn from_body(status: u16, body: &[u8]) -> Self {
        Self::from_response(status, None, body)
    }

    /// Decodes an error response, preferring the `x-amzn-ErrorType` header
    /// over the body when the transport provides it.
    pub fn from_response(status: u16, error_type_header: Option<&str>, body: &[u8]) -> Self {
        let parsed = serde_json::from_slice::<ErrorBody>(body);
        let (error_type, message) = match parsed {
            Ok(body) => (body.error_type, body.message),
            Err(_) => {
                let text = String::from_utf8_lossy(body).trim().to_string();
                (None, (!text.is_empty()).then_some(text))
            }
        };

        let code = error_type_header
            .map(str::to_owned)
            .or(error_type)
            .map(|raw| strip_namespace(&raw).to_string())
            .filter(|code| !code.is_empty());

        let kind = code
            .as_deref()
            .map_or(ServiceErrorKind::Unknown, ServiceErrorKind::from_code);

        Self {
            kind,
            code: code.unwrap_or_else(|| kind.to_string()),
            message,
            status,
        }
    }

    /// Returns whether repeating the same call may succeed.
    pub fn is_retryable(&self) -> bool {
        self.kind.is_retryable() || self.status >= 500
    }
}

fn strip_namespace(raw: &str) -> &str {
    let raw = raw.split(':').next().unwrap_or(raw);
    raw.rsplit('#').next().unwrap_or(raw).trim()
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_namespaced_code() {
        let body = br#"{"__type":"com.amazonaws.kendra#ResourceNotFoundException","message":"Index not found"}"#;
        let error = ServiceError::from_body(400, body);

        assert_eq!(error.kind, ServiceErrorKind::ResourceNotFound);
        assert_eq!(error.code, "ResourceNotFoundException");
        assert_eq!(error.message.as_deref(), Some("Index not found"));
        assert!(!error.is_retryable());
        assert_eq!(
            error.to_string(),
            "ResourceNotFoundException (HTTP 400): Index not found"
        );
    }

    #[test]
    fn test_capitalized_message_and_uri_suffix() {
        let body = br#"{"__type":"ThrottlingException:http://internal.amazon.com/","Message":"Rate exceeded"}"#;
        let error = ServiceError::from_body(400, body);

        assert_eq!(error.kind, ServiceErrorKind::Throttling);
        assert_eq!(error.message.as_deref(), Some("Rate exceeded"));
        assert!(error.is_retryable());
    }

    #[test]
    fn test_header_takes_precedence() {
        let body = br#"{"__type":"ValidationException"}"#;
        let error = ServiceError::from_response(400, Some("ConflictException"), body);
        assert_eq!(error.kind, ServiceErrorKind::Conflict);
    }

    #[test]
    fn test_unknown_code_is_kept() {
        let error = ServiceError::from_body(400, br#"{"__type":"com.amazonaws.kendra#BrandNewException"}"#);
        assert_eq!(error.kind, ServiceErrorKind::Unknown);
        assert_eq!(error.code, "BrandNewException");
        assert!(error.message.is_none());
    }

    #[test]
    fn test_non_json_body() {
        let error = ServiceError::from_body(503, b"Service Unavailable");
        assert_eq!(error.kind, ServiceErrorKind::Unknown);
        assert_eq!(error.code, "Unknown");
        assert_eq!(error.message.as_deref(), Some("Service Unavailable"));
        assert!(error.is_retryable());
    }

    #[test]
    fn test_kind_codes_round_trip() {
        for kind in ServiceErrorKind::iter() {
            assert_eq!(ServiceErrorKind::from_code(kind.as_str()), kind);
        }
    }
}
