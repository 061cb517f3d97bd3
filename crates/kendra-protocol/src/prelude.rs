//! Convenient re-exports for common use.

pub use crate::config::ServiceConfig;
pub use crate::envelope::RequestEnvelope;
pub use crate::error::{Error, Result};
pub use crate::exception::{ServiceError, ServiceErrorKind};
pub use crate::operation::Operation;
pub use crate::paginate::{PaginatedRequest, PaginatedResponse, paginate};
pub use crate::request::{EmptyResponse, KendraRequest, RequestVisitor};
