use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A key-value label attached to an index, data source or FAQ.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct Tag {
    /// Tag key, 1 to 128 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = 128))]
    pub key: Option<String>,

    /// Tag value, up to 256 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(max = 256))]
    pub value: Option<String>,
}

impl Tag {
    /// Creates a tag from a key and value.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
        }
    }
}

super::impl_shape! {
    Tag => TagBuilder,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_value_is_allowed() {
        assert!(Tag::new("team", "").validate().is_ok());
        assert!(Tag::new("", "search").validate().is_err());
        assert!(Tag::builder().with_key("team").build().unwrap().validate().is_err());
    }
}
