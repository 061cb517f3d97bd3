//! Connector kinds.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// The kind of repository a data source connects to.
///
/// Must agree with the variant of the
/// [`DataSourceConfiguration`](crate::types::DataSourceConfiguration) it is sent with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize, AsRefStr, Display, EnumIter, EnumString, IntoStaticStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DataSourceType {
    /// An Amazon S3 bucket.
    S3,

    /// A Microsoft SharePoint site.
    #[serde(rename = "SHAREPOINT")]
    #[strum(serialize = "SHAREPOINT")]
    SharePoint,

    /// A relational database.
    Database,

    /// A Salesforce instance.
    Salesforce,

    /// Microsoft OneDrive for Business.
    #[serde(rename = "ONEDRIVE")]
    #[strum(serialize = "ONEDRIVE")]
    OneDrive,

    /// A ServiceNow instance.
    #[serde(rename = "SERVICENOW")]
    #[strum(serialize = "SERVICENOW")]
    ServiceNow,
}

super::impl_wire_enum!(DataSourceType);
