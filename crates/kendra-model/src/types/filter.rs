//! Query filters, facets and sorting.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::{DocumentAttribute, DocumentAttributeValue};
use crate::constraint::{ATTRIBUTE_KEY, validation_error};
use crate::enums::SortOrder;

/// A filter on document attributes applied to a query.
///
/// Filters combine recursively through [`and_all_filters`](Self::and_all_filters),
/// [`or_all_filters`](Self::or_all_filters) and [`not_filter`](Self::not_filter).
/// The remaining fields compare a single attribute.
///
/// # Examples
///
/// ```
/// use kendra_model::types::{AttributeFilter, DocumentAttribute};
///
/// let filter = AttributeFilter::and_all(vec![
///     AttributeFilter::equals_to(DocumentAttribute::new("_category", "policy")),
///     AttributeFilter::not(AttributeFilter::greater_than(DocumentAttribute::new("_view_count", 100_i64))),
/// ]);
///
/// assert_eq!(filter.depth(), 3);
/// ```
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct AttributeFilter {
    /// Matches when every nested filter matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub and_all_filters: Option<Vec<AttributeFilter>>,

    /// Matches when any nested filter matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub or_all_filters: Option<Vec<AttributeFilter>>,

    /// Matches when the nested filter does not.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "self::not_filter"))]
    pub not_filter: Option<Box<AttributeFilter>>,

    /// Attribute equals the value.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub equals_to: Option<DocumentAttribute>,

    /// String list attribute holds every listed value.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub contains_all: Option<DocumentAttribute>,

    /// String list attribute holds at least one listed value.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub contains_any: Option<DocumentAttribute>,

    /// Attribute is greater than the value.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub greater_than: Option<DocumentAttribute>,

    /// Attribute is greater than or equal to the value.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub greater_than_or_equals: Option<DocumentAttribute>,

    /// Attribute is less than the value.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub less_than: Option<DocumentAttribute>,

    /// Attribute is less than or equal to the value.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub less_than_or_equals: Option<DocumentAttribute>,
}

fn not_filter(filter: &AttributeFilter) -> Result<(), ValidationError> {
    filter
        .validate()
        .map_err(|errors| validation_error("not_filter", errors.to_string()))
}

impl AttributeFilter {
    /// Matches documents that satisfy every filter.
    pub fn and_all(filters: Vec<AttributeFilter>) -> Self {
        Self {
            and_all_filters: Some(filters),
            ..Self::default()
        }
    }

    /// Matches documents that satisfy at least one filter.
    pub fn or_all(filters: Vec<AttributeFilter>) -> Self {
        Self {
            or_all_filters: Some(filters),
            ..Self::default()
        }
    }

    /// Matches documents that do not satisfy the filter.
    #[allow(clippy::should_implement_trait)]
    pub fn not(filter: AttributeFilter) -> Self {
        Self {
            not_filter: Some(Box::new(filter)),
            ..Self::default()
        }
    }

    pub fn equals_to(attribute: DocumentAttribute) -> Self {
        Self {
            equals_to: Some(attribute),
            ..Self::default()
        }
    }

    pub fn contains_all(attribute: DocumentAttribute) -> Self {
        Self {
            contains_all: Some(attribute),
            ..Self::default()
        }
    }

    pub fn contains_any(attribute: DocumentAttribute) -> Self {
        Self {
            contains_any: Some(attribute),
            ..Self::default()
        }
    }

    pub fn greater_than(attribute: DocumentAttribute) -> Self {
        Self {
            greater_than: Some(attribute),
            ..Self::default()
        }
    }

    pub fn less_than(attribute: DocumentAttribute) -> Self {
        Self {
            less_than: Some(attribute),
            ..Self::default()
        }
    }

    /// Returns the nesting depth, counting this filter as one.
    pub fn depth(&self) -> usize {
        let children = self
            .and_all_filters
            .iter()
            .chain(self.or_all_filters.iter())
            .flatten()
            .map(Self::depth)
            .chain(self.not_filter.as_deref().map(Self::depth))
            .max()
            .unwrap_or(0);

        children + 1
    }
}

/// A document attribute to count values of in the query response.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct Facet {
    /// Facetable field to count values of.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 200), regex(path = *ATTRIBUTE_KEY))]
    pub document_attribute_key: Option<String>,
}

/// Value counts for one facet of a query.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct FacetResult {
    /// Field the counts belong to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_attribute_key: Option<String>,

    /// Distinct values with their match counts.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub document_attribute_value_count_pairs: Option<Vec<DocumentAttributeValueCountPair>>,
}

/// The number of documents sharing one attribute value.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct DocumentAttributeValueCountPair {
    /// A distinct value of the field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_attribute_value: Option<DocumentAttributeValue>,

    /// Number of matching documents holding the value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i32>,
}

/// Sorts query results by a document attribute.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct SortingConfiguration {
    /// Sortable field to order by.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = 200), regex(path = *ATTRIBUTE_KEY))]
    pub document_attribute_key: Option<String>,

    /// Direction of the ordering.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required)]
    pub sort_order: Option<SortOrder>,
}

super::impl_shape! {
    AttributeFilter => AttributeFilterBuilder,
    Facet => FacetBuilder,
    FacetResult => FacetResultBuilder,
    DocumentAttributeValueCountPair => DocumentAttributeValueCountPairBuilder,
    SortingConfiguration => SortingConfigurationBuilder,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_nested_filter_wire_format() {
        let filter = AttributeFilter::or_all(vec![
            AttributeFilter::equals_to(DocumentAttribute::new("_category", "policy")),
            AttributeFilter::not(AttributeFilter::contains_any(DocumentAttribute::new(
                "tags",
                vec!["draft".to_string()],
            ))),
        ]);

        let value = serde_json::to_value(&filter).unwrap();
        assert_eq!(
            value,
            json!({
                "OrAllFilters": [
                    {"EqualsTo": {"Key": "_category", "Value": {"StringValue": "policy"}}},
                    {"NotFilter": {"ContainsAny": {"Key": "tags", "Value": {"StringListValue": ["draft"]}}}}
                ]
            })
        );

        let decoded: AttributeFilter = serde_json::from_value(value).unwrap();
        assert_eq!(decoded, filter);
        assert_eq!(decoded.depth(), 3);
    }

    #[test]
    fn test_invalid_leaf_is_found_through_not_filter() {
        let filter = AttributeFilter::not(AttributeFilter::equals_to(DocumentAttribute::new(
            "bad key",
            "value",
        )));

        let errors = filter.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("not_filter"));
    }

    #[test]
    fn test_invalid_leaf_is_found_through_and_all() {
        let filter = AttributeFilter::and_all(vec![
            AttributeFilter::less_than(DocumentAttribute::new("_view_count", 10_i64)),
            AttributeFilter::equals_to(DocumentAttribute::new("", "value")),
        ]);

        assert!(filter.validate().is_err());
    }

    #[test]
    fn test_sorting_requires_order() {
        let sorting = SortingConfiguration::builder()
            .with_document_attribute_key("_created_at")
            .build()
            .unwrap();
        assert!(sorting.validate().is_err());

        let sorting = SortingConfiguration {
            sort_order: Some(SortOrder::Desc),
            ..sorting
        };
        assert!(sorting.validate().is_ok());
    }
}
