//! S3 bucket connector.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constraint::{BUCKET_NAME, crawl_patterns};

/// Crawls documents stored in an S3 bucket.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct S3DataSourceConfiguration {
    /// Bucket holding the documents.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 3, max = 63), regex(path = *BUCKET_NAME))]
    pub bucket_name: Option<String>,

    /// Only keys starting with one of these prefixes are indexed.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 100), custom(function = "crawl_patterns"))]
    pub inclusion_prefixes: Option<Vec<String>>,

    /// Glob patterns of keys to skip.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 100), custom(function = "crawl_patterns"))]
    pub exclusion_patterns: Option<Vec<String>>,

    /// Where per-document metadata files live.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub documents_metadata_configuration: Option<DocumentsMetadataConfiguration>,

    /// Where the access control list file lives.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub access_control_list_configuration: Option<AccessControlListConfiguration>,
}

/// Location of the metadata files that accompany documents in the bucket.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct DocumentsMetadataConfiguration {
    /// Key prefix of the metadata files.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 1024))]
    pub s3_prefix: Option<String>,
}

/// Path of the access control list file for documents in the bucket.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct AccessControlListConfiguration {
    /// Key of the access control list file.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 1024))]
    pub key_path: Option<String>,
}

super::impl_shape! {
    S3DataSourceConfiguration => S3DataSourceConfigurationBuilder,
    DocumentsMetadataConfiguration => DocumentsMetadataConfigurationBuilder,
    AccessControlListConfiguration => AccessControlListConfigurationBuilder,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_bucket_name_rules() {
        let valid = S3DataSourceConfiguration::builder()
            .with_bucket_name("corp.docs-2024")
            .build()
            .unwrap();
        assert!(valid.validate().is_ok());

        for bucket in ["ab", "Corp-Docs", "-leading", "trailing-"] {
            let configuration = S3DataSourceConfiguration {
                bucket_name: Some(bucket.to_string()),
                ..S3DataSourceConfiguration::default()
            };
            assert!(configuration.validate().is_err(), "{bucket} should be rejected");
        }
    }

    #[test]
    fn test_exclusion_pattern_element_length() {
        let configuration = S3DataSourceConfiguration::builder()
            .with_bucket_name("corp-docs")
            .with_exclusion_patterns(vec!["*.tmp".to_string(), "x".repeat(151)])
            .build()
            .unwrap();

        let errors = configuration.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("exclusion_patterns"));
    }

    #[test]
    fn test_nested_metadata_wire_names() {
        let configuration: S3DataSourceConfiguration = serde_json::from_value(json!({
            "BucketName": "corp-docs",
            "InclusionPrefixes": ["public/"],
            "DocumentsMetadataConfiguration": {"S3Prefix": "metadata/"},
            "AccessControlListConfiguration": {"KeyPath": "acl.json"}
        }))
        .unwrap();

        assert_eq!(
            configuration.documents_metadata_configuration.unwrap().s3_prefix.as_deref(),
            Some("metadata/")
        );
        assert_eq!(
            configuration.access_control_list_configuration.unwrap().key_path.as_deref(),
            Some("acl.json")
        );
    }
}
