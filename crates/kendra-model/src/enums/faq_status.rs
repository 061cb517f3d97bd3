//! FAQ lifecycle status.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// Lifecycle status of an FAQ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize, AsRefStr, Display, EnumIter, EnumString, IntoStaticStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum FaqStatus {
    /// The FAQ is being created.
    Creating,

    /// The FAQ is being updated.
    Updating,

    /// The FAQ answers queries.
    Active,

    /// The FAQ is being deleted.
    Deleting,

    /// Ingestion failed; see the error message.
    Failed,
}

super::impl_wire_enum!(FaqStatus);
