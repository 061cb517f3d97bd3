//! Identifier quoting in generated SQL.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// Whether the database connector quotes identifiers in the SQL it generates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize, AsRefStr, Display, EnumIter, EnumString, IntoStaticStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum QueryIdentifiersEnclosingOption {
    /// Enclose identifiers in double quotes.
    DoubleQuotes,

    /// Leave identifiers unquoted.
    #[serde(rename = "NONE")]
    #[strum(serialize = "NONE")]
    Unquoted,
}

super::impl_wire_enum!(QueryIdentifiersEnclosingOption);
