//! Convenient re-exports for common use.

pub use validator::Validate;

pub use crate::codec::{Blob, EpochTime};
pub use crate::enums::*;
pub use crate::error::{Error, Result};
pub use crate::request::*;
pub use crate::response::*;
pub use crate::types::*;
pub use crate::validate;
