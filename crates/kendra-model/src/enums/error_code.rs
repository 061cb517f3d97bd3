//! Per-document failure codes.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// Why a single document in a batch could not be processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize, AsRefStr, Display, EnumIter, EnumString, IntoStaticStr)]
#[serde(rename_all = "PascalCase")]
#[strum(serialize_all = "PascalCase")]
pub enum ErrorCode {
    /// The service failed while processing the document.
    InternalError,

    /// The document was rejected as invalid.
    InvalidRequest,
}

super::impl_wire_enum!(ErrorCode);
