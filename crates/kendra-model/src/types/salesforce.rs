//! Salesforce connector.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::DataSourceToIndexFieldMapping;
use crate::constraint::{ARN, COLUMN_NAME, DATA_SOURCE_FIELD_NAME, URL, crawl_patterns};
use crate::enums::{
    SalesforceChatterFeedIncludeFilterType, SalesforceKnowledgeArticleState,
    SalesforceStandardObjectName,
};

/// Crawls standard objects, knowledge articles and Chatter feeds of a
/// Salesforce instance.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct SalesforceConfiguration {
    /// Instance URL of the organization.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = 2048), regex(path = *URL))]
    pub server_url: Option<String>,

    /// Secret holding the connection credentials.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = 1284), regex(path = *ARN))]
    pub secret_arn: Option<String>,

    /// Standard objects to index, at most 17.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 17), nested)]
    pub standard_object_configurations: Option<Vec<SalesforceStandardObjectConfiguration>>,

    /// Knowledge articles to index.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub knowledge_article_configuration: Option<SalesforceKnowledgeArticleConfiguration>,

    /// Chatter feed to index.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub chatter_feed_configuration: Option<SalesforceChatterFeedConfiguration>,

    /// Whether attachments are indexed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crawl_attachments: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub standard_object_attachment_configuration:
        Option<SalesforceStandardObjectAttachmentConfiguration>,

    /// Only matching attachments are indexed.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 100), custom(function = "crawl_patterns"))]
    pub include_attachment_file_patterns: Option<Vec<String>>,

    /// Matching attachments are skipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 100), custom(function = "crawl_patterns"))]
    pub exclude_attachment_file_patterns: Option<Vec<String>>,
}

/// Indexing settings for one standard object.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct SalesforceStandardObjectConfiguration {
    /// Standard object to index.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required)]
    pub name: Option<SalesforceStandardObjectName>,

    /// Object field holding the document body.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = 100), regex(path = *DATA_SOURCE_FIELD_NAME))]
    pub document_data_field_name: Option<String>,

    /// Object field holding the title.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 100), regex(path = *DATA_SOURCE_FIELD_NAME))]
    pub document_title_field_name: Option<String>,

    /// Object fields mapped to index fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 100), nested)]
    pub field_mappings: Option<Vec<DataSourceToIndexFieldMapping>>,
}

/// Which knowledge articles to index.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct SalesforceKnowledgeArticleConfiguration {
    /// Article states to index.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = 3))]
    pub included_states: Option<Vec<SalesforceKnowledgeArticleState>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub standard_knowledge_article_type_configuration:
        Option<SalesforceStandardKnowledgeArticleTypeConfiguration>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 10), nested)]
    pub custom_knowledge_article_type_configurations:
        Option<Vec<SalesforceCustomKnowledgeArticleTypeConfiguration>>,
}

/// Indexing of standard knowledge articles.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct SalesforceStandardKnowledgeArticleTypeConfiguration {
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

/// Indexing settings for a custom knowledge article type.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct SalesforceCustomKnowledgeArticleTypeConfiguration {
    /// API name of the article type.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = 100), regex(path = *COLUMN_NAME))]
    pub name: Option<String>,

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

/// Indexing settings for Chatter feed posts.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct SalesforceChatterFeedConfiguration {
    /// Feed field holding the document body.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = 100), regex(path = *DATA_SOURCE_FIELD_NAME))]
    pub document_data_field_name: Option<String>,

    /// Feed field holding the title.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 100), regex(path = *DATA_SOURCE_FIELD_NAME))]
    pub document_title_field_name: Option<String>,

    /// Feed fields mapped to index fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 100), nested)]
    pub field_mappings: Option<Vec<DataSourceToIndexFieldMapping>>,

    /// Limits crawled posts to those of active or standard users.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 2))]
    pub include_filter_types: Option<Vec<SalesforceChatterFeedIncludeFilterType>>,
}

/// Indexing of attachments on standard objects.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct SalesforceStandardObjectAttachmentConfiguration {
    /// Attachment field holding the title.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 100), regex(path = *DATA_SOURCE_FIELD_NAME))]
    pub document_title_field_name: Option<String>,

    /// Attachment fields mapped to index fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 100), nested)]
    pub field_mappings: Option<Vec<DataSourceToIndexFieldMapping>>,
}

super::impl_shape! {
    SalesforceConfiguration => SalesforceConfigurationBuilder,
    SalesforceStandardObjectConfiguration => SalesforceStandardObjectConfigurationBuilder,
    SalesforceKnowledgeArticleConfiguration => SalesforceKnowledgeArticleConfigurationBuilder,
    SalesforceStandardKnowledgeArticleTypeConfiguration => SalesforceStandardKnowledgeArticleTypeConfigurationBuilder,
    SalesforceCustomKnowledgeArticleTypeConfiguration => SalesforceCustomKnowledgeArticleTypeConfigurationBuilder,
    SalesforceChatterFeedConfiguration => SalesforceChatterFeedConfigurationBuilder,
    SalesforceStandardObjectAttachmentConfiguration => SalesforceStandardObjectAttachmentConfigurationBuilder,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn configuration() -> SalesforceConfiguration {
        SalesforceConfiguration::builder()
            .with_server_url("https://corp.my.salesforce.com")
            .with_secret_arn("arn:aws:secretsmanager:us-west-2:123456789012:secret:sf")
            .with_standard_object_configurations(vec![
                SalesforceStandardObjectConfiguration::builder()
                    .with_name(SalesforceStandardObjectName::Case)
                    .with_document_data_field_name("Description")
                    .with_document_title_field_name("Subject")
                    .build()
                    .unwrap(),
            ])
            .build()
            .unwrap()
    }

    #[test]
    fn test_valid_configuration() {
        let configuration = configuration();
        assert!(configuration.validate().is_ok());

        let value = serde_json::to_value(&configuration).unwrap();
        assert_eq!(
            value["StandardObjectConfigurations"][0],
            json!({
                "Name": "CASE",
                "DocumentDataFieldName": "Description",
                "DocumentTitleFieldName": "Subject"
            })
        );
    }

    #[test]
    fn test_knowledge_article_states_bounds() {
        let knowledge = SalesforceKnowledgeArticleConfiguration::builder()
            .with_included_states(Vec::<SalesforceKnowledgeArticleState>::new())
            .build()
            .unwrap();

        let configuration = SalesforceConfiguration {
            knowledge_article_configuration: Some(knowledge),
            ..configuration()
        };
        assert!(configuration.validate().is_err());
    }

    #[test]
    fn test_nested_object_error_is_reported() {
        let mut configuration = configuration();
        if let Some(objects) = configuration.standard_object_configurations.as_mut() {
            objects[0].document_data_field_name = None;
        }

        let errors = configuration.validate().unwrap_err();
        assert!(errors.errors().contains_key("standard_object_configurations"));
    }

    #[test]
    fn test_chatter_filter_types_wire_strings() {
        let chatter: SalesforceChatterFeedConfiguration = serde_json::from_value(json!({
            "DocumentDataFieldName": "Body",
            "IncludeFilterTypes": ["ACTIVE_USER", "STANDARD_USER"]
        }))
        .unwrap();

        assert_eq!(
            chatter.include_filter_types,
            Some(vec![
                SalesforceChatterFeedIncludeFilterType::ActiveUser,
                SalesforceChatterFeedIncludeFilterType::StandardUser,
            ])
        );
        assert!(chatter.validate().is_ok());
    }
}
