use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{DataSourceToIndexFieldMapping, DataSourceVpcConfiguration};
use crate::constraint::{ARN, DATA_SOURCE_FIELD_NAME, crawl_patterns};
use crate::enums::SharePointVersion;

/// Crawls SharePoint Online sites.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct SharePointConfiguration {
    /// Release of the SharePoint server.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required)]
    pub share_point_version: Option<SharePointVersion>,

    /// Site URLs to crawl.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = 100), custom(function = "crate::constraint::urls"))]
    pub urls: Option<Vec<String>>,

    /// Secrets Manager secret holding the site credentials.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = 1284), regex(path = *ARN))]
    pub secret_arn: Option<String>,

    /// Whether list attachments are indexed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crawl_attachments: Option<bool>,

    /// Use the SharePoint change log instead of a full crawl.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_change_log: Option<bool>,

    /// Only matching documents are indexed.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 100), custom(function = "crawl_patterns"))]
    pub inclusion_patterns: Option<Vec<String>>,

    /// Matching documents are skipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 100), custom(function = "crawl_patterns"))]
    pub exclusion_patterns: Option<Vec<String>>,

    /// Network placement of the connector.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub vpc_configuration: Option<DataSourceVpcConfiguration>,

    /// SharePoint fields mapped to index fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 100), nested)]
    pub field_mappings: Option<Vec<DataSourceToIndexFieldMapping>>,

    /// SharePoint field holding the title.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 100), regex(path = *DATA_SOURCE_FIELD_NAME))]
    pub document_title_field_name: Option<String>,
}

super::impl_shape! {
    SharePointConfiguration => SharePointConfigurationBuilder,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn configuration() -> SharePointConfiguration {
        SharePointConfiguration::builder()
            .with_share_point_version(SharePointVersion::SharepointOnline)
            .with_urls(vec!["https://corp.sharepoint.com/sites/hr".to_string()])
            .with_secret_arn("arn:aws:secretsmanager:us-east-1:123456789012:secret:sp")
            .with_use_change_log(true)
            .build()
            .unwrap()
    }

    #[test]
    fn test_valid_configuration() {
        assert!(configuration().validate().is_ok());

        let value = serde_json::to_value(configuration()).unwrap();
        assert_eq!(value["SharePointVersion"], json!("SHAREPOINT_ONLINE"));
        assert_eq!(value["UseChangeLog"], json!(true));
        assert!(value.get("CrawlAttachments").is_none());
    }

    #[test]
    fn test_rejects_non_url() {
        let configuration = SharePointConfiguration {
            urls: Some(vec!["corp.sharepoint.com".to_string()]),
            ..configuration()
        };

        let errors = configuration.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("urls"));
    }

    #[test]
    fn test_rejects_empty_url_list() {
        let configuration = SharePointConfiguration {
            urls: Some(Vec::new()),
            ..configuration()
        };
        assert!(configuration.validate().is_err());
    }
}
