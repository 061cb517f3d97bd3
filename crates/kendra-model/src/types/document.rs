//! Documents, their attributes and their access control lists.

use derive_builder::Builder;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::codec::{Blob, EpochTime};
use crate::constraint::{ATTRIBUTE_KEY, BUCKET_NAME, validation_error};
use crate::enums::{ContentType, DocumentAttributeValueType, ErrorCode, PrincipalType, ReadAccessType, Reported};

/// A document submitted to an index with `BatchPutDocument`.
///
/// The content is either carried inline in [`blob`](Self::blob) or
/// referenced through [`s3_path`](Self::s3_path), never both.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[validate(schema(function = "document_source"))]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct Document {
    /// Unique identifier of the document in the index.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = 2048))]
    pub id: Option<String>,

    /// Title of the document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Inline document content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blob: Option<Blob>,

    /// Location of the document content in S3.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub s3_path: Option<S3Path>,

    /// Custom attributes attached to the document.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub attributes: Option<Vec<DocumentAttribute>>,

    /// Principals allowed or denied access to the document.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub access_control_list: Option<Vec<Principal>>,

    /// File format of the content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<ContentType>,
}

fn document_source(document: &Document) -> Result<(), ValidationError> {
    if document.blob.is_some() && document.s3_path.is_some() {
        return Err(validation_error(
            "document_source",
            "A document carries either an inline blob or an S3 path, not both",
        ));
    }

    Ok(())
}

/// An object in an S3 bucket.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct S3Path {
    /// Bucket name.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 3, max = 63), regex(path = *BUCKET_NAME))]
    pub bucket: Option<String>,

    /// Object key.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = 1024))]
    pub key: Option<String>,
}

impl S3Path {
    /// Creates a path from a bucket and key.
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: Some(bucket.into()),
            key: Some(key.into()),
        }
    }
}

/// A user or group in a document's access control list.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct Principal {
    /// User or group name.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = 200))]
    pub name: Option<String>,

    /// Whether the name is a user or a group.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required)]
    pub r#type: Option<PrincipalType>,

    /// Whether the principal is allowed or denied.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required)]
    pub access: Option<ReadAccessType>,
}

/// A custom attribute of a document, also used as the operand of a filter.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct DocumentAttribute {
    /// Attribute name. Names starting with `_` are reserved by the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = 200), regex(path = *ATTRIBUTE_KEY))]
    pub key: Option<String>,

    /// Attribute value.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, custom(function = "attribute_value"))]
    pub value: Option<DocumentAttributeValue>,
}

impl DocumentAttribute {
    /// Creates an attribute from a key and value.
    pub fn new(key: impl Into<String>, value: impl Into<DocumentAttributeValue>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
        }
    }
}

/// The value of a custom attribute.
///
/// Exactly one representation is present on the wire, as a single-key object
/// such as `{"StringValue": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentAttributeValue {
    /// A string of 1 to 2048 characters.
    StringValue(String),
    /// A list of strings.
    StringListValue(Vec<String>),
    /// A 64-bit integer.
    LongValue(i64),
    /// A point in time, sent as epoch seconds.
    DateValue(EpochTime),
}

impl DocumentAttributeValue {
    /// Returns the declared type matching this value.
    pub fn value_type(&self) -> DocumentAttributeValueType {
        match self {
            Self::StringValue(_) => DocumentAttributeValueType::StringValue,
            Self::StringListValue(_) => DocumentAttributeValueType::StringListValue,
            Self::LongValue(_) => DocumentAttributeValueType::LongValue,
            Self::DateValue(_) => DocumentAttributeValueType::DateValue,
        }
    }

    /// Returns the string value, if this is one.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Self::StringValue(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the integer value, if this is one.
    pub fn as_long(&self) -> Option<i64> {
        match self {
            Self::LongValue(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the date value, if this is one.
    pub fn as_date(&self) -> Option<EpochTime> {
        match self {
            Self::DateValue(value) => Some(*value),
            _ => None,
        }
    }
}

impl Validate for DocumentAttributeValue {
    fn validate(&self) -> Result<(), ValidationErrors> {
        if let Self::StringValue(value) = self {
            let length = value.chars().count();
            if !(1..=2048).contains(&length) {
                let mut errors = ValidationErrors::new();
                errors.add(
                    "StringValue",
                    validation_error("length", "String values must be 1 to 2048 characters"),
                );
                return Err(errors);
            }
        }

        Ok(())
    }
}

fn attribute_value(value: &DocumentAttributeValue) -> Result<(), ValidationError> {
    value
        .validate()
        .map_err(|errors| validation_error("attribute_value", errors.to_string()))
}

impl From<String> for DocumentAttributeValue {
    fn from(value: String) -> Self {
        Self::StringValue(value)
    }
}

impl From<&str> for DocumentAttributeValue {
    fn from(value: &str) -> Self {
        Self::StringValue(value.to_string())
    }
}

impl From<Vec<String>> for DocumentAttributeValue {
    fn from(values: Vec<String>) -> Self {
        Self::StringListValue(values)
    }
}

impl From<i64> for DocumentAttributeValue {
    fn from(value: i64) -> Self {
        Self::LongValue(value)
    }
}

impl From<EpochTime> for DocumentAttributeValue {
    fn from(value: EpochTime) -> Self {
        Self::DateValue(value)
    }
}

impl From<Timestamp> for DocumentAttributeValue {
    fn from(value: Timestamp) -> Self {
        Self::DateValue(value.into())
    }
}

/// A document `BatchDeleteDocument` could not remove.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct BatchDeleteDocumentResponseFailedDocument {
    /// Identifier of the document.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 2048))]
    pub id: Option<String>,

    /// Category of the failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<Reported<ErrorCode>>,

    /// Reason the document was not removed.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 2048))]
    pub error_message: Option<String>,
}

/// A document `BatchPutDocument` could not add.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct BatchPutDocumentResponseFailedDocument {
    /// Identifier of the document.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 2048))]
    pub id: Option<String>,

    /// Category of the failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<Reported<ErrorCode>>,

    /// Reason the document was not added.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 2048))]
    pub error_message: Option<String>,
}

super::impl_shape! {
    Document => DocumentBuilder,
    S3Path => S3PathBuilder,
    Principal => PrincipalBuilder,
    DocumentAttribute => DocumentAttributeBuilder,
    BatchDeleteDocumentResponseFailedDocument => BatchDeleteDocumentResponseFailedDocumentBuilder,
    BatchPutDocumentResponseFailedDocument => BatchPutDocumentResponseFailedDocumentBuilder,
}
