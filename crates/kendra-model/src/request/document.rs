use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constraint::{ARN, INDEX_ID, document_ids};
use crate::types::Document;

/// Removes documents from an index.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct BatchDeleteDocumentRequest {
    /// Index holding the documents.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(equal = 36), regex(path = *INDEX_ID))]
    pub index_id: Option<String>,

    /// Identifiers of the documents to remove, at most 10.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = 10), custom(function = "document_ids"))]
    pub document_id_list: Option<Vec<String>>,
}

/// Adds or replaces documents in an index.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct BatchPutDocumentRequest {
    /// Index receiving the documents.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(equal = 36), regex(path = *INDEX_ID))]
    pub index_id: Option<String>,

    /// Role used to read documents given by S3 path.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 1284), regex(path = *ARN))]
    pub role_arn: Option<String>,

    /// Documents to add, at most 10.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = 10), nested)]
    pub documents: Option<Vec<Document>>,
}

crate::types::impl_shape! {
    BatchDeleteDocumentRequest => BatchDeleteDocumentRequestBuilder,
    BatchPutDocumentRequest => BatchPutDocumentRequestBuilder,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::types::S3Path;

    const INDEX: &str = "11111111-1111-1111-1111-111111111111";

    #[test]
    fn test_document_id_list_is_an_owned_copy() {
        let mut ids = vec!["doc-1".to_string(), "doc-2".to_string()];
        let request = BatchDeleteDocumentRequest::builder()
            .with_index_id(INDEX)
            .with_document_id_list(ids.clone())
            .build()
            .unwrap();

        ids.push("doc-3".to_string());
        ids[0].clear();

        assert_eq!(
            request.document_id_list,
            Some(vec!["doc-1".to_string(), "doc-2".to_string()])
        );
    }

    #[test]
    fn test_batch_delete_bounds() {
        let request = BatchDeleteDocumentRequest::builder()
            .with_index_id(INDEX)
            .with_document_id_list((0..11).map(|i| format!("doc-{i}")).collect::<Vec<_>>())
            .build()
            .unwrap();
        assert!(request.validate().is_err());

        let request = BatchDeleteDocumentRequest {
            document_id_list: Some(vec![String::new()]),
            ..request
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("document_id_list"));
    }

    #[test]
    fn test_batch_put_wire_format() {
        let request = BatchPutDocumentRequest::builder()
            .with_index_id(INDEX)
            .with_documents(vec![
                Document::builder()
                    .with_id("handbook")
                    .with_s3_path(S3Path::new("corp-docs", "handbook.pdf"))
                    .build()
                    .unwrap(),
            ])
            .build()
            .unwrap();

        assert!(request.validate().is_ok());
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "IndexId": INDEX,
                "Documents": [{
                    "Id": "handbook",
                    "S3Path": {"Bucket": "corp-docs", "Key": "handbook.pdf"}
                }]
            })
        );
    }

    #[test]
    fn test_batch_put_reports_nested_document() {
        let request = BatchPutDocumentRequest::builder()
            .with_index_id(INDEX)
            .with_documents(vec![Document::default()])
            .build()
            .unwrap();

        let errors = request.validate().unwrap_err();
        assert!(errors.errors().contains_key("documents"));
    }
}
