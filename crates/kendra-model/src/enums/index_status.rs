//! Index lifecycle status.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// Lifecycle status of an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize, AsRefStr, Display, EnumIter, EnumString, IntoStaticStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum IndexStatus {
    /// The index is being provisioned.
    Creating,

    /// The index is serving queries.
    Active,

    /// The index is being deleted.
    Deleting,

    /// Provisioning failed; see the error message.
    Failed,

    /// A customer initiated update is in progress.
    Updating,

    /// A service initiated update is in progress.
    SystemUpdating,
}

super::impl_wire_enum!(IndexStatus);

impl IndexStatus {
    /// Returns whether the index accepts queries and documents.
    #[inline]
    pub fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}
