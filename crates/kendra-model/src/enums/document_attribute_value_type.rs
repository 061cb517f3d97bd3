//! Declared types of index fields.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// The declared type of a custom index field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize, AsRefStr, Display, EnumIter, EnumString, IntoStaticStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentAttributeValueType {
    /// A single string.
    StringValue,

    /// A list of strings.
    StringListValue,

    /// A 64-bit integer.
    LongValue,

    /// A timestamp.
    DateValue,
}

super::impl_wire_enum!(DocumentAttributeValueType);
