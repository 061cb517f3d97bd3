use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::enums::{QueryResultType, Reported};
use crate::types::{FacetResult, QueryResultItem};

/// Results of a search.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct QueryResponse {
    /// Identifier to reference in `SubmitFeedback`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_id: Option<String>,

    /// Matches in ranking order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_items: Option<Vec<QueryResultItem>>,

    /// Value counts for the facetable fields requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facet_results: Option<Vec<FacetResult>>,

    /// Number of matches across all pages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_number_of_results: Option<i32>,
}

impl QueryResponse {
    /// Returns the result items of a given type, in ranking order.
    pub fn items_of_type(&self, result_type: QueryResultType) -> impl Iterator<Item = &QueryResultItem> {
        self.result_items
            .iter()
            .flatten()
            .filter(move |item| {
                item.r#type.as_ref().and_then(Reported::known) == Some(result_type)
            })
    }
}

crate::types::impl_shape! {
    QueryResponse => QueryResponseBuilder,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::types::DocumentAttributeValue;

    #[test]
    fn test_query_response_from_wire() {
        let response: QueryResponse = serde_json::from_value(json!({
            "QueryId": "b0c6a0f6-2f3b-4c36-9c1e-3b8d2f4a1e7c",
            "ResultItems": [
                {"Id": "r-1", "Type": "ANSWER", "DocumentId": "faq.csv"},
                {"Id": "r-2", "Type": "DOCUMENT", "DocumentId": "handbook.pdf"},
                {"Id": "r-3", "Type": "DOCUMENT", "DocumentId": "policy.pdf"}
            ],
            "FacetResults": [{
                "DocumentAttributeKey": "_category",
                "DocumentAttributeValueCountPairs": [
                    {"DocumentAttributeValue": {"StringValue": "hr"}, "Count": 2}
                ]
            }],
            "TotalNumberOfResults": 3
        }))
        .unwrap();

        let documents: Vec<_> = response
            .items_of_type(QueryResultType::Document)
            .filter_map(|item| item.document_id.as_deref())
            .collect();
        assert_eq!(documents, vec!["handbook.pdf", "policy.pdf"]);

        let pair = &response.facet_results.as_ref().unwrap()[0]
            .document_attribute_value_count_pairs
            .as_ref()
            .unwrap()[0];
        assert_eq!(
            pair.document_attribute_value,
            Some(DocumentAttributeValue::StringValue("hr".to_string()))
        );
        assert_eq!(pair.count, Some(2));
        assert_eq!(response.total_number_of_results, Some(3));
    }
}
