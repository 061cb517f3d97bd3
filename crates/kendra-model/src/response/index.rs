use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::codec::EpochTime;
use crate::enums::{IndexEdition, IndexStatus, Reported};
use crate::types::{
    CapacityUnitsConfiguration, DocumentMetadataConfiguration, IndexConfigurationSummary,
    IndexStatistics, ServerSideEncryptionConfiguration,
};

/// Result of `CreateIndex`.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct CreateIndexResponse {
    /// Identifier of the new index.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Current settings, field declarations and statistics of an index.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct DescribeIndexResponse {
    /// Name of the index.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Identifier of the index.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Edition the index was created with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edition: Option<Reported<IndexEdition>>,

    /// IAM role used for metrics and logs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,

    /// KMS key encrypting index data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_side_encryption_configuration: Option<ServerSideEncryptionConfiguration>,

    /// Lifecycle status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Reported<IndexStatus>>,

    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// When the index was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<EpochTime>,

    /// When the index was last changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<EpochTime>,

    /// Field declarations; entries this client cannot decode are skipped.
    #[serde(
        default,
        deserialize_with = "crate::codec::lenient::list",
        skip_serializing_if = "Option::is_none"
    )]
    pub document_metadata_configurations: Option<Vec<DocumentMetadataConfiguration>>,

    /// Counts of indexed documents and FAQ entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_statistics: Option<IndexStatistics>,

    /// Reason the index is in the `FAILED` state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,

    /// Extra storage and query capacity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity_units: Option<CapacityUnitsConfiguration>,
}

impl DescribeIndexResponse {
    /// Returns the declaration of an index field by name.
    pub fn field(&self, name: &str) -> Option<&DocumentMetadataConfiguration> {
        self.document_metadata_configurations
            .as_deref()?
            .iter()
            .find(|field| field.name.as_deref() == Some(name))
    }
}

/// One page of `ListIndices`.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct ListIndicesResponse {
    /// Indices on this page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_configuration_summary_items: Option<Vec<IndexConfigurationSummary>>,

    /// Present when more indices remain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

crate::types::impl_shape! {
    CreateIndexResponse => CreateIndexResponseBuilder,
    DescribeIndexResponse => DescribeIndexResponseBuilder,
    ListIndicesResponse => ListIndicesResponseBuilder,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::enums::DocumentAttributeValueType;

    #[test]
    fn test_describe_index_from_wire() {
        let response: DescribeIndexResponse = serde_json::from_value(json!({
            "Name": "corp-search",
            "Id": "11111111-1111-1111-1111-111111111111",
            "Edition": "ENTERPRISE_EDITION",
            "Status": "ACTIVE",
            "DocumentMetadataConfigurations": [
                {"Name": "_category", "Type": "STRING_VALUE", "Search": {"Facetable": true}},
                {"Name": "_view_count", "Type": "LONG_VALUE"}
            ],
            "IndexStatistics": {
                "FaqStatistics": {"IndexedQuestionAnswersCount": 42},
                "TextDocumentStatistics": {"IndexedTextDocumentsCount": 1000, "IndexedTextBytes": 5_000_000_000_i64}
            },
            "CapacityUnits": {"StorageCapacityUnits": 1, "QueryCapacityUnits": 0}
        }))
        .unwrap();

        assert_eq!(response.status, Some(Reported::Known(IndexStatus::Active)));
        assert_eq!(
            response.field("_view_count").and_then(|field| field.r#type),
            Some(DocumentAttributeValueType::LongValue)
        );
        assert!(response.field("_missing").is_none());

        let bytes = response
            .index_statistics
            .as_ref()
            .and_then(|statistics| statistics.text_document_statistics.as_ref())
            .and_then(|statistics| statistics.indexed_text_bytes);
        assert_eq!(bytes, Some(5_000_000_000));
    }

    #[test]
    fn test_unknown_values_do_not_fail_the_response() {
        let response: DescribeIndexResponse = serde_json::from_value(json!({
            "Id": "11111111-1111-1111-1111-111111111111",
            "Name": "idx",
            "Edition": "GEN_AI_ENTERPRISE_EDITION",
            "Status": "MIGRATING",
            "DocumentMetadataConfigurations": [
                {"Name": "_category", "Type": "STRING_VALUE"},
                {"Name": "_embedding", "Type": "VECTOR_VALUE"}
            ]
        }))
        .unwrap();

        assert_eq!(response.status, Some(Reported::Unknown("MIGRATING".to_string())));
        assert_eq!(
            response.edition.as_ref().map(Reported::as_str),
            Some("GEN_AI_ENTERPRISE_EDITION")
        );
        assert!(response.field("_category").is_some());
        assert!(response.field("_embedding").is_none());

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["Status"], "MIGRATING");
    }

    #[test]
    fn test_list_indices_default_is_empty_object() {
        assert_eq!(
            serde_json::to_value(ListIndicesResponse::default()).unwrap(),
            json!({})
        );
    }
}
