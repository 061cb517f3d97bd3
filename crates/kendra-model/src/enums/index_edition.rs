//! Index editions.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// The capacity edition an index is provisioned with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize, AsRefStr, Display, EnumIter, EnumString, IntoStaticStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum IndexEdition {
    /// Development and test workloads.
    DeveloperEdition,

    /// Production workloads with adjustable capacity.
    EnterpriseEdition,
}

super::impl_wire_enum!(IndexEdition);

impl IndexEdition {
    /// Returns whether extra capacity units can be added to this edition.
    #[inline]
    pub fn supports_capacity_units(self) -> bool {
        matches!(self, Self::EnterpriseEdition)
    }
}
