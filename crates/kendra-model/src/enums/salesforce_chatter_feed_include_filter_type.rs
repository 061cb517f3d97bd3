//! Chatter feed user filters.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// Which Chatter feed authors are crawled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize, AsRefStr, Display, EnumIter, EnumString, IntoStaticStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SalesforceChatterFeedIncludeFilterType {
    /// Only active users.
    ActiveUser,

    /// Only standard users.
    StandardUser,
}

super::impl_wire_enum!(SalesforceChatterFeedIncludeFilterType);
