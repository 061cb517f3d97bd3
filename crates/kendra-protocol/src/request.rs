//! Binding of request shapes to their operation and response.

use std::fmt::Debug;

use kendra_model::request::*;
use kendra_model::response::*;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::operation::Operation;

/// A request shape that can be sent as one operation.
pub trait KendraRequest: Serialize + DeserializeOwned + Validate + Debug + Send + Sync + 'static {
    /// Operation this shape is the input of.
    const OPERATION: Operation;

    /// Shape of a successful response.
    type Output: Serialize + DeserializeOwned + Debug + Send + 'static;
}

/// Response of operations whose successful answer carries no fields.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmptyResponse {}

/// Code that is generic over the request type of an operation.
///
/// Used with [`Operation::visit`] to go from an operation chosen at runtime
/// to its typed request.
pub trait RequestVisitor {
    type Output;

    fn visit<R: KendraRequest>(self) -> Self::Output;
}

macro_rules! impl_kendra_request {
    ($($request:ty => $operation:ident, $output:ty;)*) => {
        $(
            impl KendraRequest for $request {
                const OPERATION: Operation = Operation::$operation;
                type Output = $output;
            }
        )*

        impl Operation {
            /// Calls the visitor with the request type of this operation.
            pub fn visit<V: RequestVisitor>(self, visitor: V) -> V::Output {
                match self {
                    $(Self::$operation => visitor.visit::<$request>(),)*
                }
            }
        }
    };
}

impl_kendra_request! {
    BatchDeleteDocumentRequest => BatchDeleteDocument, BatchDeleteDocumentResponse;
    BatchPutDocumentRequest => BatchPutDocument, BatchPutDocumentResponse;
    CreateDataSourceRequest => CreateDataSource, CreateDataSourceResponse;
    CreateFaqRequest => CreateFaq, CreateFaqResponse;
    CreateIndexRequest => CreateIndex, CreateIndexResponse;
    DeleteDataSourceRequest => DeleteDataSource, EmptyResponse;
    DeleteFaqRequest => DeleteFaq, EmptyResponse;
    DeleteIndexRequest => DeleteIndex, EmptyResponse;
    DescribeDataSourceRequest => DescribeDataSource, DescribeDataSourceResponse;
    DescribeFaqRequest => DescribeFaq, DescribeFaqResponse;
    DescribeIndexRequest => DescribeIndex, DescribeIndexResponse;
    ListDataSourceSyncJobsRequest => ListDataSourceSyncJobs, ListDataSourceSyncJobsResponse;
    ListDataSourcesRequest => ListDataSources, ListDataSourcesResponse;
    ListFaqsRequest => ListFaqs, ListFaqsResponse;
    ListIndicesRequest => ListIndices, ListIndicesResponse;
    ListTagsForResourceRequest => ListTagsForResource, ListTagsForResourceResponse;
    QueryRequest => Query, QueryResponse;
    StartDataSourceSyncJobRequest => StartDataSourceSyncJob, StartDataSourceSyncJobResponse;
    StopDataSourceSyncJobRequest => StopDataSourceSyncJob, EmptyResponse;
    SubmitFeedbackRequest => SubmitFeedback, EmptyResponse;
    TagResourceRequest => TagResource, TagResourceResponse;
    UntagResourceRequest => UntagResource, UntagResourceResponse;
    UpdateDataSourceRequest => UpdateDataSource, EmptyResponse;
    UpdateIndexRequest => UpdateIndex, EmptyResponse;
}

#[cfg(test)]
mod tests {
    use std::any::type_name;

    use strum::IntoEnumIterator;

    use super::*;

    struct OperationOf;

    impl RequestVisitor for OperationOf {
        type Output = Operation;

        fn visit<R: KendraRequest>(self) -> Operation {
            R::OPERATION
        }
    }

    struct RequestName;

    impl RequestVisitor for RequestName {
        type Output = &'static str;

        fn visit<R: KendraRequest>(self) -> &'static str {
            type_name::<R>()
        }
    }

    #[test]
    fn test_visit_is_consistent_with_binding() {
        for operation in Operation::iter() {
            assert_eq!(operation.visit(OperationOf), operation);
            let name = operation.visit(RequestName);
            assert!(
                name.ends_with(&format!("::{operation}Request")),
                "{operation} is bound to {name}"
            );
        }
    }

    #[test]
    fn test_empty_response_decodes_from_object() {
        let response: EmptyResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response, EmptyResponse {});

        let response: EmptyResponse = serde_json::from_str(r#"{"Extra": 1}"#).unwrap();
        assert_eq!(response, EmptyResponse::default());
    }
}
