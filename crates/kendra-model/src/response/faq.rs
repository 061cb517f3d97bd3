use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::codec::EpochTime;
use crate::enums::{FaqStatus, Reported};
use crate::types::{FaqSummary, S3Path};

/// Result of `CreateFaq`.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct CreateFaqResponse {
    /// Identifier of the new FAQ.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Current settings and state of an FAQ.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct DescribeFaqResponse {
    /// Identifier of the FAQ.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Index holding the FAQ.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_id: Option<String>,

    /// Name of the FAQ.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// When the FAQ was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<EpochTime>,

    /// When the FAQ was last changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<EpochTime>,

    /// Location of the question and answer file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_path: Option<S3Path>,

    /// Lifecycle status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Reported<FaqStatus>>,

    /// IAM role used to read the file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,

    /// Reason the FAQ is in the `FAILED` state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// One page of `ListFaqs`.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct ListFaqsResponse {
    /// Present when more FAQs remain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,

    /// FAQs on this page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faq_summary_items: Option<Vec<FaqSummary>>,
}

crate::types::impl_shape! {
    CreateFaqResponse => CreateFaqResponseBuilder,
    DescribeFaqResponse => DescribeFaqResponseBuilder,
    ListFaqsResponse => ListFaqsResponseBuilder,
}
