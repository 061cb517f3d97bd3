//! Data source lifecycle status.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// Lifecycle status of a data source connector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize, AsRefStr, Display, EnumIter, EnumString, IntoStaticStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DataSourceStatus {
    /// The data source is being created.
    Creating,

    /// The data source is being deleted.
    Deleting,

    /// Creation or an update failed; see the error message.
    Failed,

    /// The configuration is being updated.
    Updating,

    /// The data source can be synchronized.
    Active,
}

super::impl_wire_enum!(DataSourceStatus);

impl DataSourceStatus {
    /// Returns whether the data source is ready for sync jobs.
    #[inline]
    pub fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    /// Returns whether a lifecycle transition is still in progress.
    #[inline]
    pub fn is_transitioning(self) -> bool {
        matches!(self, Self::Creating | Self::Deleting | Self::Updating)
    }
}
