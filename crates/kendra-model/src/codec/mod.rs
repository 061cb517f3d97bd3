//! Wire encodings that differ from serde's defaults.
//!
//! The Kendra JSON protocol sends timestamps as epoch seconds and binary
//! payloads as base64 strings.

mod blob;
mod epoch_time;
pub mod lenient;

pub use blob::Blob;
pub use epoch_time::EpochTime;
