//! Field constraints shared by every shape.
//!
//! Length and range bounds are declared directly on the fields with
//! `#[validate(...)]`. This module holds what the attributes reference: the
//! compiled patterns, the element checks for list-typed fields, and the entry
//! point that turns [`ValidationErrors`] into a crate [`Error`].

mod lists;
mod patterns;

pub use lists::*;
pub use patterns::*;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::{Error, Result, TRACING_TARGET_VALIDATION};

/// Builds a [`ValidationError`] with a human readable message.
pub fn validation_error(code: &'static str, message: impl Into<String>) -> ValidationError {
    let message: String = message.into();
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

/// Validates a shape against its declared constraints.
///
/// # Errors
///
/// Returns [`Error::Validation`] listing every violated constraint.
///
/// # Examples
///
/// ```
/// use kendra_model::request::DescribeIndexRequest;
///
/// let request = DescribeIndexRequest::builder()
///     .with_id("too-short")
///     .build()
///     .unwrap();
///
/// assert!(kendra_model::validate(&request).is_err());
/// ```
pub fn validate<T>(shape: &T) -> Result<()>
where
    T: Validate,
{
    shape.validate().map_err(|errors| {
        tracing::debug!(
            target: TRACING_TARGET_VALIDATION,
            shape = std::any::type_name::<T>(),
            fields = ?failing_fields(&errors),
            "shape failed validation"
        );
        Error::Validation(errors)
    })
}

/// Returns the names of the top-level fields that failed.
pub fn failing_fields(errors: &ValidationErrors) -> Vec<&str> {
    let mut fields: Vec<&str> = errors.errors().keys().map(|field| &**field).collect();
    fields.sort_unstable();
    fields
}
