use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constraint::{INDEX_ID, attribute_keys};
use crate::enums::QueryResultType;
use crate::types::{
    AttributeFilter, ClickFeedback, Facet, RelevanceFeedback, SortingConfiguration,
};

/// Searches an index.
///
/// # Examples
///
/// ```
/// use kendra_model::enums::QueryResultType;
/// use kendra_model::request::QueryRequest;
/// use kendra_model::types::{AttributeFilter, DocumentAttribute};
///
/// let request = QueryRequest::builder()
///     .with_index_id("11111111-1111-1111-1111-111111111111")
///     .with_query_text("parental leave policy")
///     .with_attribute_filter(AttributeFilter::equals_to(DocumentAttribute::new(
///         "_language_code",
///         "en",
///     )))
///     .with_query_result_type_filter(QueryResultType::Document)
///     .with_page_size(20)
///     .build()?;
///
/// kendra_model::validate(&request)?;
/// # Ok::<(), kendra_model::Error>(())
/// ```
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct QueryRequest {
    /// Index to search.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(equal = 36), regex(path = *INDEX_ID))]
    pub index_id: Option<String>,

    /// Text to search for.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = 1000))]
    pub query_text: Option<String>,

    /// Restricts results to documents whose attributes match.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub attribute_filter: Option<AttributeFilter>,

    /// Attributes to count values of in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub facets: Option<Vec<Facet>>,

    /// Restricts the attributes returned with each result.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 100), custom(function = "attribute_keys"))]
    pub requested_document_attributes: Option<Vec<String>>,

    /// Only results of this type are returned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_result_type_filter: Option<QueryResultType>,

    /// Page of results to return, starting at 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<i32>,

    /// Results per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i32>,

    /// Orders results by a document attribute instead of relevance.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub sorting_configuration: Option<SortingConfiguration>,
}

/// Reports clicks and relevance judgements on the results of a query.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct SubmitFeedbackRequest {
    /// Index the query ran against.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(equal = 36), regex(path = *INDEX_ID))]
    pub index_id: Option<String>,

    /// Identifier returned by the query the feedback is about.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = 36), regex(path = *INDEX_ID))]
    pub query_id: Option<String>,

    /// Results the user clicked.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub click_feedback_items: Option<Vec<ClickFeedback>>,

    /// Results the user rated.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub relevance_feedback_items: Option<Vec<RelevanceFeedback>>,
}

crate::types::impl_shape! {
    QueryRequest => QueryRequestBuilder,
    SubmitFeedbackRequest => SubmitFeedbackRequestBuilder,
}
