//! Knowledge article publication states.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// Publication state of a Salesforce knowledge article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize, AsRefStr, Display, EnumIter, EnumString, IntoStaticStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SalesforceKnowledgeArticleState {
    /// Not yet published.
    Draft,

    /// Visible to readers.
    Published,

    /// Withdrawn from publication.
    Archived,
}

super::impl_wire_enum!(SalesforceKnowledgeArticleState);
