//! Value type of an additional query result attribute.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// The data type of an [`AdditionalResultAttribute`](crate::types::AdditionalResultAttribute) value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize, AsRefStr, Display, EnumIter, EnumString, IntoStaticStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum AdditionalResultAttributeValueType {
    /// Text together with highlight offsets.
    TextWithHighlightsValue,
}

super::impl_wire_enum!(AdditionalResultAttributeValueType);
