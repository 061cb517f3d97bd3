//! ServiceNow connector.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::DataSourceToIndexFieldMapping;
use crate::constraint::{ARN, DATA_SOURCE_FIELD_NAME, SERVICE_NOW_HOST, crawl_patterns};
use crate::enums::ServiceNowBuildVersionType;

/// Crawls knowledge articles and catalog items of a ServiceNow instance.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct ServiceNowConfiguration {
    /// Instance host without scheme, for example `corp.service-now.com`.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = 2048), regex(path = *SERVICE_NOW_HOST))]
    pub host_url: Option<String>,

    /// Secret holding the instance credentials.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = 1284), regex(path = *ARN))]
    pub secret_arn: Option<String>,

    /// Release line of the instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required)]
    pub service_now_build_version: Option<ServiceNowBuildVersionType>,

    /// Knowledge articles to index.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub knowledge_article_configuration: Option<ServiceNowKnowledgeArticleConfiguration>,

    /// Catalog items to index.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub service_catalog_configuration: Option<ServiceNowServiceCatalogConfiguration>,
}

/// Indexing of knowledge articles.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct ServiceNowKnowledgeArticleConfiguration {
    /// Whether attachments are indexed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crawl_attachments: Option<bool>,

    /// Only matching attachments are indexed.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 100), custom(function = "crawl_patterns"))]
    pub include_attachment_file_patterns: Option<Vec<String>>,

    /// Matching attachments are skipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 100), custom(function = "crawl_patterns"))]
    pub exclude_attachment_file_patterns: Option<Vec<String>>,

    /// Article field holding the document body.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = 100), regex(path = *DATA_SOURCE_FIELD_NAME))]
    pub document_data_field_name: Option<String>,

    /// Article field holding the title.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 100), regex(path = *DATA_SOURCE_FIELD_NAME))]
    pub document_title_field_name: Option<String>,

    /// Article fields mapped to index fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 100), nested)]
    pub field_mappings: Option<Vec<DataSourceToIndexFieldMapping>>,
}

/// Indexing of service catalog items.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct ServiceNowServiceCatalogConfiguration {
    /// Whether attachments are indexed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crawl_attachments: Option<bool>,

    /// Only matching attachments are indexed.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 100), custom(function = "crawl_patterns"))]
    pub include_attachment_file_patterns: Option<Vec<String>>,

    /// Matching attachments are skipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 100), custom(function = "crawl_patterns"))]
    pub exclude_attachment_file_patterns: Option<Vec<String>>,

    /// Item field holding the document body.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = 100), regex(path = *DATA_SOURCE_FIELD_NAME))]
    pub document_data_field_name: Option<String>,

    /// Item field holding the title.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 100), regex(path = *DATA_SOURCE_FIELD_NAME))]
    pub document_title_field_name: Option<String>,

    /// Item fields mapped to index fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 100), nested)]
    pub field_mappings: Option<Vec<DataSourceToIndexFieldMapping>>,
}

super::impl_shape! {
    ServiceNowConfiguration => ServiceNowConfigurationBuilder,
    ServiceNowKnowledgeArticleConfiguration => ServiceNowKnowledgeArticleConfigurationBuilder,
    ServiceNowServiceCatalogConfiguration => ServiceNowServiceCatalogConfigurationBuilder,
}
