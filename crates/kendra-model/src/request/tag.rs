use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::Tag;

/// Reads the tags of an index, data source or FAQ.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct ListTagsForResourceRequest {
    /// ARN of the tagged resource.
    #[serde(rename = "ResourceARN", skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = 1011))]
    pub resource_arn: Option<String>,
}

/// Adds tags to an index, data source or FAQ.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct TagResourceRequest {
    /// ARN of the resource to tag.
    #[serde(rename = "ResourceARN", skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = 1011))]
    pub resource_arn: Option<String>,

    /// Tags to add or overwrite.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(max = 200), nested)]
    pub tags: Option<Vec<Tag>>,
}

/// Removes tags by key from an index, data source or FAQ.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct UntagResourceRequest {
    /// ARN of the resource to untag.
    #[serde(rename = "ResourceARN", skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = 1011))]
    pub resource_arn: Option<String>,

    /// Keys of the tags to remove.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(max = 200), custom(function = "crate::constraint::tag_keys"))]
    pub tag_keys: Option<Vec<String>>,
}

crate::types::impl_shape! {
    ListTagsForResourceRequest => ListTagsForResourceRequestBuilder,
    TagResourceRequest => TagResourceRequestBuilder,
    UntagResourceRequest => UntagResourceRequestBuilder,
}
