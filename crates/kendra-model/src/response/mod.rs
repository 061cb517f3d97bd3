//! Response shapes returned by operations that have a body.
//!
//! Responses are never validated before use; unknown fields in a service
//! response are ignored so that additions to the API do not break decoding.

mod data_source;
mod document;
mod faq;
mod index;
mod query;
mod tag;

pub use data_source::*;
pub use document::*;
pub use faq::*;
pub use index::*;
pub use query::*;
pub use tag::*;
