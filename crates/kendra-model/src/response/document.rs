use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{BatchDeleteDocumentResponseFailedDocument, BatchPutDocumentResponseFailedDocument};

/// Result of `BatchDeleteDocument`.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct BatchDeleteDocumentResponse {
    /// Documents that could not be removed; the rest were accepted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_documents: Option<Vec<BatchDeleteDocumentResponseFailedDocument>>,
}

/// Result of `BatchPutDocument`.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct BatchPutDocumentResponse {
    /// Documents that could not be added; the rest were accepted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_documents: Option<Vec<BatchPutDocumentResponseFailedDocument>>,
}

impl BatchPutDocumentResponse {
    /// Returns whether every submitted document was accepted.
    pub fn is_complete(&self) -> bool {
        self.failed_documents.as_ref().is_none_or(Vec::is_empty)
    }
}

crate::types::impl_shape! {
    BatchDeleteDocumentResponse => BatchDeleteDocumentResponseBuilder,
    BatchPutDocumentResponse => BatchPutDocumentResponseBuilder,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::enums::{ErrorCode, Reported};

    #[test]
    fn test_failed_documents_from_wire() {
        let response: BatchPutDocumentResponse = serde_json::from_value(json!({
            "FailedDocuments": [{
                "Id": "handbook",
                "ErrorCode": "InvalidRequest",
                "ErrorMessage": "Document size exceeds the limit"
            }]
        }))
        .unwrap();

        assert!(!response.is_complete());
        let failed = &response.failed_documents.as_ref().unwrap()[0];
        assert_eq!(failed.error_code, Some(Reported::Known(ErrorCode::InvalidRequest)));
    }

    #[test]
    fn test_empty_response() {
        let response: BatchPutDocumentResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.is_complete());
        assert_eq!(serde_json::to_value(&response).unwrap(), json!({}));

        let response: BatchDeleteDocumentResponse =
            serde_json::from_value(json!({"FailedDocuments": []})).unwrap();
        assert_eq!(response.failed_documents, Some(Vec::new()));
    }
}
