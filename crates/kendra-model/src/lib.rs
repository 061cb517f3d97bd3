#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for shape validation.
pub const TRACING_TARGET_VALIDATION: &str = "kendra_model::validation";

/// Tracing target for lenient response decoding.
pub const TRACING_TARGET_DECODING: &str = "kendra_model::decoding";

pub mod codec;
pub mod constraint;
pub mod enums;
mod error;
pub mod prelude;
pub mod request;
pub mod response;
pub mod types;

pub use constraint::validate;
pub use error::{Error, Result};
