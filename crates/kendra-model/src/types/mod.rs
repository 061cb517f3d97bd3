//! Configuration, summary and nested shapes shared by requests and results.

use std::fmt;

use serde::Serialize;

/// Adds a `builder()` constructor and a `Debug` rendering of the set fields
/// to each listed shape.
macro_rules! impl_shape {
    ($($shape:ident => $builder:ident),* $(,)?) => {
        $(
            impl $shape {
                /// Returns a builder with every field unset.
                #[inline]
                pub fn builder() -> $builder {
                    $builder::default()
                }
            }

            impl std::fmt::Debug for $shape {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    $crate::types::fmt_set_fields(self, stringify!($shape), f)
                }
            }
        )*
    };
}

pub(crate) use impl_shape;

/// Writes `Name { Field: value, .. }` for the fields present on the wire.
///
/// Unset fields are skipped; values render as compact JSON.
pub(crate) fn fmt_set_fields<T: Serialize>(
    shape: &T,
    name: &str,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    let mut debug = f.debug_struct(name);
    if let Ok(serde_json::Value::Object(fields)) = serde_json::to_value(shape) {
        for (field, value) in &fields {
            debug.field(field, &format_args!("{value}"));
        }
    }
    debug.finish()
}

mod data_source;
mod database;
mod document;
mod faq;
mod filter;
mod index;
mod one_drive;
mod query;
mod s3;
mod salesforce;
mod service_now;
mod share_point;
mod tag;

pub use data_source::*;
pub use database::*;
pub use document::*;
pub use faq::*;
pub use filter::*;
pub use index::*;
pub use one_drive::*;
pub use query::*;
pub use s3::*;
pub use salesforce::*;
pub use service_now::*;
pub use share_point::*;
pub use tag::*;
