//! ServiceNow releases.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// The ServiceNow release the connector talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize, AsRefStr, Display, EnumIter, EnumString, IntoStaticStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceNowBuildVersionType {
    /// The London release.
    London,

    /// Any release other than London.
    Others,
}

super::impl_wire_enum!(ServiceNowBuildVersionType);
