#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for request marshalling and response decoding.
pub const TRACING_TARGET_ENVELOPE: &str = "kendra_protocol::envelope";

/// Tracing target for paginated listings.
pub const TRACING_TARGET_PAGINATION: &str = "kendra_protocol::pagination";

/// Tracing target for service configuration.
pub const TRACING_TARGET_CONFIG: &str = "kendra_protocol::config";

mod config;
mod envelope;
mod error;
mod exception;
mod operation;
mod paginate;
pub mod prelude;
mod request;

pub use config::{DEFAULT_REGION, ServiceConfig, ServiceConfigBuilder};
pub use envelope::{CONTENT_TYPE_JSON, HEADER_CONTENT_TYPE, HEADER_TARGET, RequestEnvelope};
pub use error::{Error, Result};
pub use exception::{ServiceError, ServiceErrorKind};
pub use operation::{Operation, TARGET_PREFIX};
pub use paginate::{PaginatedRequest, PaginatedResponse, paginate};
pub use request::{EmptyResponse, KendraRequest, RequestVisitor};
