//! Crawlable Salesforce standard objects.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// Salesforce standard object types the connector can index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize, AsRefStr, Display, EnumIter, EnumString, IntoStaticStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SalesforceStandardObjectName {
    Account,
    Campaign,
    Case,
    Contact,
    Contract,
    Document,
    Group,
    Idea,
    Lead,
    Opportunity,
    Partner,
    Pricebook,
    Product,
    Profile,
    Solution,
    Task,
    User,
}

super::impl_wire_enum!(SalesforceStandardObjectName);
