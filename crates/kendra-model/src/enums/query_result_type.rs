//! Query result kinds.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// The kind of match a query result item represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize, AsRefStr, Display, EnumIter, EnumString, IntoStaticStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum QueryResultType {
    /// A relevant document.
    Document,

    /// A matching FAQ entry.
    QuestionAnswer,

    /// A suggested answer extracted from a document.
    Answer,
}

super::impl_wire_enum!(QueryResultType);
