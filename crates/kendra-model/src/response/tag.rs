use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::Tag;

/// Result of `ListTagsForResource`.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct ListTagsForResourceResponse {
    /// Tags on the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

/// Acknowledges a `TagResource` call; the body is always `{}`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TagResourceResponse {}

/// Acknowledges an `UntagResource` call; the body is always `{}`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UntagResourceResponse {}

crate::types::impl_shape! {
    ListTagsForResourceResponse => ListTagsForResourceResponseBuilder,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_list_tags_from_wire() {
        let response: ListTagsForResourceResponse = serde_json::from_value(json!({
            "Tags": [{"Key": "team", "Value": "search"}, {"Key": "env", "Value": ""}]
        }))
        .unwrap();

        assert_eq!(
            response.tags,
            Some(vec![Tag::new("team", "search"), Tag::new("env", "")])
        );
    }

    #[test]
    fn test_empty_acknowledgements() {
        assert_eq!(serde_json::to_value(TagResourceResponse {}).unwrap(), json!({}));
        assert_eq!(
            serde_json::from_value::<UntagResourceResponse>(json!({})).unwrap(),
            UntagResourceResponse {}
        );
    }
}
