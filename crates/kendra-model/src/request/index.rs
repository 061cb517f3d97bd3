use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constraint::{ARN, INDEX_ID, PRINTABLE, RESOURCE_NAME};
use crate::enums::IndexEdition;
use crate::types::{
    CapacityUnitsConfiguration, DocumentMetadataConfiguration, ServerSideEncryptionConfiguration,
    Tag,
};

/// Creates a new index.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct CreateIndexRequest {
    /// Name of the index.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = 1000), regex(path = *RESOURCE_NAME))]
    pub name: Option<String>,

    /// Defaults to the enterprise edition when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edition: Option<IndexEdition>,

    /// Role used to write CloudWatch logs and metrics.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = 1284), regex(path = *ARN))]
    pub role_arn: Option<String>,

    /// KMS key used to encrypt index data.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub server_side_encryption_configuration: Option<ServerSideEncryptionConfiguration>,

    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 1000), regex(path = *PRINTABLE))]
    pub description: Option<String>,

    /// Idempotency token; repeating a request with the same token creates one index.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 100))]
    pub client_token: Option<String>,

    /// Tags attached to the new index.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 200), nested)]
    pub tags: Option<Vec<Tag>>,
}

/// Deletes an index with all of its documents, FAQs and data sources.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct DeleteIndexRequest {
    /// Index to delete.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(equal = 36), regex(path = *INDEX_ID))]
    pub id: Option<String>,
}

/// Reads the settings, statistics and state of an index.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct DescribeIndexRequest {
    /// Index to describe.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(equal = 36), regex(path = *INDEX_ID))]
    pub id: Option<String>,
}

/// Lists the indices of the account, one page at a time.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct ListIndicesRequest {
    /// Token returned by the previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 800))]
    pub next_token: Option<String>,

    /// Page size, 1 to 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, max = 100))]
    pub max_results: Option<i32>,
}

/// Changes the settings of an existing index.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct UpdateIndexRequest {
    /// Index to change.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(equal = 36), regex(path = *INDEX_ID))]
    pub id: Option<String>,

    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 1000), regex(path = *RESOURCE_NAME))]
    pub name: Option<String>,

    /// New IAM role for index metrics and logs.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 1284), regex(path = *ARN))]
    pub role_arn: Option<String>,

    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 1000), regex(path = *PRINTABLE))]
    pub description: Option<String>,

    /// Replaces the field declarations of the index.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 500), nested)]
    pub document_metadata_configuration_updates: Option<Vec<DocumentMetadataConfiguration>>,

    /// Extra storage and query capacity.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub capacity_units: Option<CapacityUnitsConfiguration>,
}

crate::types::impl_shape! {
    CreateIndexRequest => CreateIndexRequestBuilder,
    DeleteIndexRequest => DeleteIndexRequestBuilder,
    DescribeIndexRequest => DescribeIndexRequestBuilder,
    ListIndicesRequest => ListIndicesRequestBuilder,
    UpdateIndexRequest => UpdateIndexRequestBuilder,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::enums::DocumentAttributeValueType;
    use crate::types::{Relevance, Search};

    const INDEX: &str = "11111111-1111-1111-1111-111111111111";

    #[test]
    fn test_create_index_wire_format() {
        let request = CreateIndexRequest::builder()
            .with_name("corp-search")
            .with_edition(IndexEdition::DeveloperEdition)
            .with_role_arn("arn:aws:iam::123456789012:role/kendra-index")
            .with_server_side_encryption_configuration(
                ServerSideEncryptionConfiguration::builder()
                    .with_kms_key_id("alias/kendra")
                    .build()
                    .unwrap(),
            )
            .with_client_token("3f1c6a2e")
            .build()
            .unwrap();

        assert!(request.validate().is_ok());
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "Name": "corp-search",
                "Edition": "DEVELOPER_EDITION",
                "RoleArn": "arn:aws:iam::123456789012:role/kendra-index",
                "ServerSideEncryptionConfiguration": {"KmsKeyId": "alias/kendra"},
                "ClientToken": "3f1c6a2e"
            })
        );
    }

    #[test]
    fn test_role_arn_pattern() {
        let request = CreateIndexRequest::builder()
            .with_name("corp-search")
            .with_role_arn("role/kendra-index")
            .build()
            .unwrap();

        let errors = request.validate().unwrap_err();
        assert_eq!(crate::constraint::failing_fields(&errors), vec!["role_arn"]);
    }

    #[test]
    fn test_describe_index_id_length() {
        let request = DescribeIndexRequest::builder().with_id(INDEX).build().unwrap();
        assert!(request.validate().is_ok());

        let request = DescribeIndexRequest::builder().with_id("too-short").build().unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_update_index_nested_metadata() {
        let request = UpdateIndexRequest::builder()
            .with_id(INDEX)
            .with_document_metadata_configuration_updates(vec![
                DocumentMetadataConfiguration::builder()
                    .with_name("_view_count")
                    .with_type(DocumentAttributeValueType::LongValue)
                    .with_relevance(Relevance::builder().with_importance(0).build().unwrap())
                    .with_search(Search::builder().with_sortable(true).build().unwrap())
                    .build()
                    .unwrap(),
            ])
            .with_capacity_units(CapacityUnitsConfiguration::new(1, 1))
            .build()
            .unwrap();

        let errors = request.validate().unwrap_err();
        assert!(errors.errors().contains_key("document_metadata_configuration_updates"));
        assert!(!errors.errors().contains_key("capacity_units"));
    }
}
