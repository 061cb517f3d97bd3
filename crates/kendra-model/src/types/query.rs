//! Query results and relevance feedback.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::DocumentAttribute;
use crate::codec::EpochTime;
use crate::enums::{
    AdditionalResultAttributeValueType, QueryResultType, RelevanceType, Reported,
    ScoreConfidence,
};

/// A single match returned by `Query`.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct QueryResultItem {
    /// Identifier used to submit feedback about this result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Kind of the result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<Reported<QueryResultType>>,

    /// Answer text and highlights for `ANSWER` and `QUESTION_ANSWER` results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_attributes: Option<Vec<AdditionalResultAttribute>>,

    /// Identifier of the matching document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,

    /// Title with highlights.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_title: Option<TextWithHighlights>,

    /// Excerpt with highlights.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_excerpt: Option<TextWithHighlights>,

    /// Location of the source document.
    #[serde(rename = "DocumentURI", skip_serializing_if = "Option::is_none")]
    pub document_uri: Option<String>,

    /// Attributes returned with the document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_attributes: Option<Vec<DocumentAttribute>>,

    /// Confidence of the match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score_attributes: Option<ScoreAttributes>,
}

impl QueryResultItem {
    /// Returns the service's confidence in this result, if reported.
    pub fn confidence(&self) -> Option<ScoreConfidence> {
        self.score_attributes.as_ref()?.score_confidence.as_ref()?.known()
    }

    /// Returns the first additional attribute with the given key.
    pub fn additional_attribute(&self, key: &str) -> Option<&AdditionalResultAttribute> {
        self.additional_attributes
            .as_deref()?
            .iter()
            .find(|attribute| attribute.key.as_deref() == Some(key))
    }
}

/// Extra value attached to a result, such as an answer.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct AdditionalResultAttribute {
    /// Name of the attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Type of the value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_type: Option<Reported<AdditionalResultAttributeValueType>>,

    /// The value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<AdditionalResultAttributeValue>,
}

/// Value of an additional result attribute.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct AdditionalResultAttributeValue {
    /// Text value with highlights.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_with_highlights_value: Option<TextWithHighlights>,
}

/// Text with the ranges that matched the query.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct TextWithHighlights {
    /// The text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Highlighted ranges of the text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlights: Option<Vec<Highlight>>,
}

impl TextWithHighlights {
    /// Returns the highlighted substrings of the text, in order.
    ///
    /// Offsets count characters. Highlights that fall outside the text are
    /// skipped.
    pub fn highlighted(&self) -> Vec<String> {
        let Some(text) = self.text.as_deref() else {
            return Vec::new();
        };

        self.highlights
            .iter()
            .flatten()
            .filter_map(|highlight| {
                let begin = usize::try_from(highlight.begin_offset?).ok()?;
                let end = usize::try_from(highlight.end_offset?).ok()?;
                if begin > end {
                    return None;
                }

                let fragment: String = text.chars().skip(begin).take(end - begin).collect();
                (fragment.chars().count() == end - begin).then_some(fragment)
            })
            .collect()
    }
}

/// A range of characters that matched the query.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct Highlight {
    /// Start of the range, zero based.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin_offset: Option<i32>,

    /// End of the range, exclusive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_offset: Option<i32>,

    /// Whether the range is the best answer to the query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_answer: Option<bool>,
}

/// Confidence the service assigns to a result.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct ScoreAttributes {
    /// Confidence bucket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score_confidence: Option<Reported<ScoreConfidence>>,
}

/// Records that a user clicked a query result.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct ClickFeedback {
    /// Result that was clicked.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = 73))]
    pub result_id: Option<String>,

    /// When the click happened.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required)]
    pub click_time: Option<EpochTime>,
}

/// Records whether a query result was relevant.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct RelevanceFeedback {
    /// Result the feedback is about.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = 73))]
    pub result_id: Option<String>,

    /// Whether the result was relevant.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required)]
    pub relevance_value: Option<RelevanceType>,
}

super::impl_shape! {
    QueryResultItem => QueryResultItemBuilder,
    AdditionalResultAttribute => AdditionalResultAttributeBuilder,
    AdditionalResultAttributeValue => AdditionalResultAttributeValueBuilder,
    TextWithHighlights => TextWithHighlightsBuilder,
    Highlight => HighlightBuilder,
    ScoreAttributes => ScoreAttributesBuilder,
    ClickFeedback => ClickFeedbackBuilder,
    RelevanceFeedback => RelevanceFeedbackBuilder,
}
