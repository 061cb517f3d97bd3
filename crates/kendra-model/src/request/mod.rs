//! Request shapes, one per operation.
//!
//! Requests own everything they embed. Identifiers, names and ARNs share the
//! same bounds across operations: index identifiers are 36 characters, data
//! source and FAQ identifiers 1 to 100, pagination tokens 1 to 800.

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
