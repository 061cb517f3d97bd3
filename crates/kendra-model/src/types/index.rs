//! Index settings, field metadata and statistics.

use std::collections::BTreeMap;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::codec::EpochTime;
use crate::constraint::DURATION;
use crate::enums::{DocumentAttributeValueType, IndexEdition, IndexStatus, Order, Reported};

/// KMS key used to encrypt index data at rest.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct ServerSideEncryptionConfiguration {
    /// Customer managed KMS key encrypting the index.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 2048))]
    pub kms_key_id: Option<String>,
}

/// Extra capacity provisioned for an enterprise edition index.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct CapacityUnitsConfiguration {
    /// Extra storage units beyond the edition baseline.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, range(min = 0))]
    pub storage_capacity_units: Option<i32>,

    /// Extra query units beyond the edition baseline.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, range(min = 0))]
    pub query_capacity_units: Option<i32>,
}

impl CapacityUnitsConfiguration {
    /// Creates a capacity configuration.
    pub fn new(storage_capacity_units: i32, query_capacity_units: i32) -> Self {
        Self {
            storage_capacity_units: Some(storage_capacity_units),
            query_capacity_units: Some(query_capacity_units),
        }
    }
}

/// Declares an index field and how it takes part in search.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct DocumentMetadataConfiguration {
    /// Name of the index field.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = 30))]
    pub name: Option<String>,

    /// Value type of the field.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required)]
    pub r#type: Option<DocumentAttributeValueType>,

    /// How the field affects ranking.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub relevance: Option<Relevance>,

    /// How the field is used in search.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub search: Option<Search>,
}

/// Tunes how much a field contributes to result ranking.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct Relevance {
    /// Boost newer documents using this date field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freshness: Option<bool>,

    /// Boost weight, 1 to 10.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, max = 10))]
    pub importance: Option<i32>,

    /// Time window, in seconds with an `s` suffix, over which freshness decays.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 10), regex(path = *DURATION))]
    pub duration: Option<String>,

    /// Whether larger or smaller values rank higher.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank_order: Option<Order>,

    /// Per-value boosts for string fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "crate::constraint::value_importance_map"))]
    pub value_importance_map: Option<BTreeMap<String, i32>>,
}

/// Search behavior of an index field.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct Search {
    /// Field can be used for facets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facetable: Option<bool>,

    /// Field content is searched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub searchable: Option<bool>,

    /// Field is returned in results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub displayable: Option<bool>,

    /// Field can be used for sorting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sortable: Option<bool>,
}

/// Counts of indexed content.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct IndexStatistics {
    /// Counters of indexed FAQ entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faq_statistics: Option<FaqStatistics>,

    /// Counters of indexed documents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_document_statistics: Option<TextDocumentStatistics>,
}

/// FAQ counters of an index.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct FaqStatistics {
    /// Question and answer pairs in the index.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indexed_question_answers_count: Option<i32>,
}

/// Document counters of an index.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct TextDocumentStatistics {
    /// Documents in the index.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indexed_text_documents_count: Option<i32>,

    /// Bytes of text in the index.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indexed_text_bytes: Option<i64>,
}

/// An index as listed by `ListIndices`.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct IndexConfigurationSummary {
    /// Name of the index.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Identifier of the index.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Edition of the index.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edition: Option<Reported<IndexEdition>>,

    /// When the index was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<EpochTime>,

    /// When the index was last changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<EpochTime>,

    /// Lifecycle status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Reported<IndexStatus>>,
}

super::impl_shape! {
    ServerSideEncryptionConfiguration => ServerSideEncryptionConfigurationBuilder,
    CapacityUnitsConfiguration => CapacityUnitsConfigurationBuilder,
    DocumentMetadataConfiguration => DocumentMetadataConfigurationBuilder,
    Relevance => RelevanceBuilder,
    Search => SearchBuilder,
    IndexStatistics => IndexStatisticsBuilder,
    FaqStatistics => FaqStatisticsBuilder,
    TextDocumentStatistics => TextDocumentStatisticsBuilder,
    IndexConfigurationSummary => IndexConfigurationSummaryBuilder,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_metadata_configuration_wire_format() {
        let configuration = DocumentMetadataConfiguration::builder()
            .with_name("department")
            .with_type(DocumentAttributeValueType::StringValue)
            .with_relevance(
                Relevance::builder()
                    .with_importance(4)
                    .with_value_importance_map(BTreeMap::from([
                        ("engineering".to_string(), 8),
                        ("finance".to_string(), 2),
                    ]))
                    .build()
                    .unwrap(),
            )
            .with_search(Search {
                facetable: Some(true),
                searchable: Some(true),
                displayable: Some(true),
                sortable: None,
            })
            .build()
            .unwrap();

        assert!(configuration.validate().is_ok());
        assert_eq!(
            serde_json::to_value(&configuration).unwrap(),
            json!({
                "Name": "department",
                "Type": "STRING_VALUE",
                "Relevance": {
                    "Importance": 4,
                    "ValueImportanceMap": {"engineering": 8, "finance": 2}
                },
                "Search": {"Facetable": true, "Searchable": true, "Displayable": true}
            })
        );
    }

    #[test]
    fn test_relevance_bounds() {
        let relevance = Relevance {
            importance: Some(11),
            ..Relevance::default()
        };
        assert!(relevance.validate().is_err());

        let relevance = Relevance {
            duration: Some("1 day".to_string()),
            ..Relevance::default()
        };
        assert!(relevance.validate().is_err());

        let relevance = Relevance {
            duration: Some("86400s".to_string()),
            rank_order: Some(Order::Descending),
            value_importance_map: Some(BTreeMap::from([("high".to_string(), 0)])),
            ..Relevance::default()
        };
        let errors = relevance.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("value_importance_map"));
        assert!(!errors.field_errors().contains_key("duration"));
    }

    #[test]
    fn test_capacity_units_required() {
        assert!(CapacityUnitsConfiguration::new(0, 2).validate().is_ok());
        assert!(CapacityUnitsConfiguration::new(-1, 0).validate().is_err());
        assert!(CapacityUnitsConfiguration::default().validate().is_err());
    }

    #[test]
    fn test_summary_from_wire() {
        let summary: IndexConfigurationSummary = serde_json::from_value(json!({
            "Name": "corp",
            "Id": "11111111-1111-1111-1111-111111111111",
            "Edition": "ENTERPRISE_EDITION",
            "CreatedAt": 1_600_000_000,
            "UpdatedAt": 1_600_000_100.25,
            "Status": "SYSTEM_UPDATING"
        }))
        .unwrap();

        assert_eq!(summary.edition, Some(Reported::Known(IndexEdition::EnterpriseEdition)));
        assert_eq!(summary.status, Some(Reported::Known(IndexStatus::SystemUpdating)));
        assert_eq!(
            summary.updated_at.map(|at| at.as_millisecond()),
            Some(1_600_000_100_250)
        );
    }
}
