use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constraint::{ARN, INDEX_ID, PRINTABLE, RESOURCE_ID, RESOURCE_NAME};
use crate::types::{S3Path, Tag};

/// Loads question and answer pairs from a CSV file in S3 into an index.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct CreateFaqRequest {
    /// Index receiving the FAQ.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(equal = 36), regex(path = *INDEX_ID))]
    pub index_id: Option<String>,

    /// Name of the FAQ.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = 100), regex(path = *RESOURCE_NAME))]
    pub name: Option<String>,

    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 1000), regex(path = *PRINTABLE))]
    pub description: Option<String>,

    /// Location of the question and answer file.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, nested)]
    pub s3_path: Option<S3Path>,

    /// Role allowed to read the FAQ file.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = 1284), regex(path = *ARN))]
    pub role_arn: Option<String>,

    /// Tags attached to the new FAQ.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 200), nested)]
    pub tags: Option<Vec<Tag>>,
}

/// Removes an FAQ from an index.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct DeleteFaqRequest {
    /// FAQ to remove.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = 100), regex(path = *RESOURCE_ID))]
    pub id: Option<String>,

    /// Index holding the FAQ.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(equal = 36), regex(path = *INDEX_ID))]
    pub index_id: Option<String>,
}

/// Reads the settings and state of an FAQ.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct DescribeFaqRequest {
    /// FAQ to describe.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = 100), regex(path = *RESOURCE_ID))]
    pub id: Option<String>,

    /// Index holding the FAQ.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(equal = 36), regex(path = *INDEX_ID))]
    pub index_id: Option<String>,
}

/// Lists the FAQs of an index, one page at a time.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct ListFaqsRequest {
    /// Index whose FAQs are listed.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(equal = 36), regex(path = *INDEX_ID))]
    pub index_id: Option<String>,

    /// Token returned by the previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 800))]
    pub next_token: Option<String>,

    /// Page size, 1 to 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, max = 100))]
    pub max_results: Option<i32>,
}

crate::types::impl_shape! {
    CreateFaqRequest => CreateFaqRequestBuilder,
    DeleteFaqRequest => DeleteFaqRequestBuilder,
    DescribeFaqRequest => DescribeFaqRequestBuilder,
    ListFaqsRequest => ListFaqsRequestBuilder,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const INDEX: &str = "11111111-1111-1111-1111-111111111111";

    fn s3_path() -> S3Path {
        S3Path::new("corp-faqs", "faq.csv")
    }

    #[test]
    fn test_create_faq_round_trip_without_optional_fields() {
        let request = CreateFaqRequest::builder()
            .with_index_id(INDEX)
            .with_name("faq1")
            .with_s3_path(s3_path())
            .build()
            .unwrap();

        assert_eq!(request.description, None);
        assert_eq!(request.role_arn, None);
        assert_eq!(request.tags, None);

        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&json).unwrap(),
            json!({
                "IndexId": INDEX,
                "Name": "faq1",
                "S3Path": {"Bucket": "corp-faqs", "Key": "faq.csv"}
            })
        );

        let decoded: CreateFaqRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, request);
        assert!(decoded.description.is_none());
        assert!(decoded.role_arn.is_none());
        assert!(decoded.tags.is_none());
    }

    #[test]
    fn test_empty_tag_list_round_trips() {
        let request = CreateFaqRequest::builder()
            .with_index_id(INDEX)
            .with_name("faq1")
            .with_s3_path(s3_path())
            .with_tags(Vec::<Tag>::new())
            .build()
            .unwrap();

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["Tags"], json!([]));
        assert_eq!(serde_json::from_value::<CreateFaqRequest>(value).unwrap(), request);
    }

    #[test]
    fn test_create_faq_requires_role() {
        let request = CreateFaqRequest::builder()
            .with_index_id(INDEX)
            .with_name("faq1")
            .with_s3_path(s3_path())
            .build()
            .unwrap();

        let errors = request.validate().unwrap_err();
        assert_eq!(crate::constraint::failing_fields(&errors), vec!["role_arn"]);

        let request = CreateFaqRequest {
            role_arn: Some("arn:aws:iam::123456789012:role/kendra-faq".to_string()),
            ..request
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_description_rejects_control_characters() {
        let request = CreateFaqRequest {
            index_id: Some(INDEX.to_string()),
            name: Some("faq1".to_string()),
            description: Some("line one\u{0007}".to_string()),
            s3_path: Some(s3_path()),
            role_arn: Some("arn:aws:iam::123456789012:role/kendra-faq".to_string()),
            tags: None,
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("description"));
    }
}
