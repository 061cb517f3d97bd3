//! JSON 1.1 request envelopes and response decoding.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::ServiceConfig;
use crate::exception::ServiceError;
use crate::operation::Operation;
use crate::request::KendraRequest;
use crate::{Error, Result, TRACING_TARGET_ENVELOPE};

/// Header naming the operation.
pub const HEADER_TARGET: &str = "X-Amz-Target";

/// Header carrying the media type.
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";

/// Media type of every request and response body.
pub const CONTENT_TYPE_JSON: &str = "application/x-amz-json-1.1";

/// A request ready to be signed and posted.
///
/// All operations are sent as `POST /` to the service endpoint; the operation
/// is named by the `X-Amz-Target` header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEnvelope {
    /// Operation being invoked.
    pub operation: Operation,
    /// URL the request is posted to.
    pub endpoint: String,
    /// Headers naming the target and content type.
    pub headers: BTreeMap<&'static str, String>,
    /// JSON text of the request shape.
    pub body: String,
}

impl RequestEnvelope {
    /// Validates a request, unless disabled, and serializes it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Model`] when the request violates its constraints.
    ///
    /// # Examples
    ///
    /// ```
    /// use kendra_model::request::DescribeIndexRequest;
    /// use kendra_protocol::{RequestEnvelope, ServiceConfig};
    ///
    /// let request = DescribeIndexRequest::builder()
    ///     .with_id("11111111-1111-1111-1111-111111111111")
    ///     .build()?;
    /// let envelope = RequestEnvelope::marshal(&ServiceConfig::default(), &request)?;
    ///
    /// assert_eq!(envelope.target(), Some("AWSKendraFrontendService.DescribeIndex"));
    /// assert_eq!(envelope.body, r#"{"Id":"11111111-1111-1111-1111-111111111111"}"#);
    /// # Ok::<(), kendra_protocol::Error>(())
    /// ```
    pub fn marshal<R: KendraRequest>(config: &ServiceConfig, request: &R) -> Result<Self> {
        if config.validate_requests() {
            kendra_model::validate(request)?;
        } else {
            tracing::trace!(
                target: TRACING_TARGET_ENVELOPE,
                operation = %R::OPERATION,
                "request validation skipped"
            );
        }

        let body = serde_json::to_string(request)?;
        let headers = BTreeMap::from([
            (HEADER_TARGET, R::OPERATION.target()),
            (HEADER_CONTENT_TYPE, CONTENT_TYPE_JSON.to_string()),
        ]);

        let envelope = Self {
            operation: R::OPERATION,
            endpoint: config.endpoint_url(),
            headers,
            body,
        };

        tracing::debug!(
            target: TRACING_TARGET_ENVELOPE,
            operation = %envelope.operation,
            endpoint = %envelope.endpoint,
            body_len = envelope.body.len(),
            "request marshalled"
        );

        Ok(envelope)
    }

    /// Decodes the answer to a request of type `R`.
    ///
    /// A 2xx status decodes the body as `R::Output`, treating an empty body
    /// as `{}`. Any other status decodes the body as a [`ServiceError`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Service`] for error statuses and
    /// [`Error::Serialization`] for malformed success bodies.
    pub fn unmarshal<R: KendraRequest>(status: u16, body: &[u8]) -> Result<R::Output> {
        if !(200..300).contains(&status) {
            let error = ServiceError::from_body(status, body);
            let declared = R::OPERATION.declares(error.kind);

            tracing::warn!(
                target: TRACING_TARGET_ENVELOPE,
                operation = %R::OPERATION,
                status,
                code = %error.code,
                declared,
                "service returned an error"
            );

            return Err(Error::Service(error));
        }

        let body = if body.iter().all(u8::is_ascii_whitespace) {
            b"{}".as_slice()
        } else {
            body
        };

        let output = serde_json::from_slice(body)?;
        tracing::debug!(
            target: TRACING_TARGET_ENVELOPE,
            operation = %R::OPERATION,
            status,
            "response decoded"
        );

        Ok(output)
    }

    /// Returns the value of a header.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Returns the `X-Amz-Target` header value.
    pub fn target(&self) -> Option<&str> {
        self.header(HEADER_TARGET)
    }
}
