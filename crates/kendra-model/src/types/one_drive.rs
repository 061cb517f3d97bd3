use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{DataSourceToIndexFieldMapping, S3Path};
use crate::constraint::{ARN, TENANT_DOMAIN, crawl_patterns};

/// Crawls the OneDrive for Business files of selected users.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct OneDriveConfiguration {
    /// Azure Active Directory domain, for example `corp.onmicrosoft.com`.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = 256), regex(path = *TENANT_DOMAIN))]
    pub tenant_domain: Option<String>,

    /// Secret holding the application credentials.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = 1284), regex(path = *ARN))]
    pub secret_arn: Option<String>,

    /// Users whose drives are crawled.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, nested)]
    pub one_drive_users: Option<OneDriveUsers>,

    /// Only matching paths are indexed.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 100), custom(function = "crawl_patterns"))]
    pub inclusion_patterns: Option<Vec<String>>,

    /// Matching paths are skipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 100), custom(function = "crawl_patterns"))]
    pub exclusion_patterns: Option<Vec<String>>,

    /// Drive fields mapped to index fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 100), nested)]
    pub field_mappings: Option<Vec<DataSourceToIndexFieldMapping>>,
}

/// Users whose files are crawled, listed inline or in a file stored in S3.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct OneDriveUsers {
    /// User names listed inline, at most 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 100), custom(function = "crate::constraint::one_drive_users"))]
    pub one_drive_user_list: Option<Vec<String>>,

    /// Object listing the user names, one per line.
    #[serde(rename = "OneDriveUserS3Path", skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub one_drive_user_s3_path: Option<S3Path>,
}

super::impl_shape! {
    OneDriveConfiguration => OneDriveConfigurationBuilder,
    OneDriveUsers => OneDriveUsersBuilder,
}
