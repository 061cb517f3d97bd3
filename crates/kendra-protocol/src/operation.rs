//! The catalog of Kendra operations.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

use crate::exception::ServiceErrorKind;
use crate::exception::ServiceErrorKind::{
    AccessDenied, Conflict, InternalServer, ResourceAlreadyExist, ResourceInUse, ResourceNotFound,
    ResourceUnavailable, ServiceQuotaExceeded, Throttling, Validation,
};

/// Prefix of the `X-Amz-Target` header value.
pub const TARGET_PREFIX: &str = "AWSKendraFrontendService";

/// Every operation of the Kendra API, named as on the wire.
///
/// # Examples
///
/// ```
/// use kendra_protocol::Operation;
///
/// let operation: Operation = "ListFaqs".parse().unwrap();
/// assert_eq!(operation.target(), "AWSKendraFrontendService.ListFaqs");
/// assert!(operation.is_paginated());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(Serialize, Deserialize)]
#[derive(AsRefStr, Display, EnumCount, EnumIter, EnumString, IntoStaticStr)]
pub enum Operation {
    BatchDeleteDocument,
    BatchPutDocument,
    CreateDataSource,
    CreateFaq,
    CreateIndex,
    DeleteDataSource,
    DeleteFaq,
    DeleteIndex,
    DescribeDataSource,
    DescribeFaq,
    DescribeIndex,
    ListDataSourceSyncJobs,
    ListDataSources,
    ListFaqs,
    ListIndices,
    ListTagsForResource,
    Query,
    StartDataSourceSyncJob,
    StopDataSourceSyncJob,
    SubmitFeedback,
    TagResource,
    UntagResource,
    UpdateDataSource,
    UpdateIndex,
}

impl Operation {
    /// Returns the wire name of the operation.
    #[inline]
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Returns the value of the `X-Amz-Target` header.
    pub fn target(self) -> String {
        format!("{TARGET_PREFIX}.{}", self.name())
    }

    /// Returns whether the operation is a listing driven by `NextToken`.
    pub fn is_paginated(self) -> bool {
        matches!(
            self,
            Self::ListDataSourceSyncJobs | Self::ListDataSources | Self::ListFaqs | Self::ListIndices
        )
    }

    /// Returns whether the operation changes service state.
    pub fn is_mutating(self) -> bool {
        !matches!(
            self,
            Self::DescribeDataSource
                | Self::DescribeFaq
                | Self::DescribeIndex
                | Self::ListDataSourceSyncJobs
                | Self::ListDataSources
                | Self::ListFaqs
                | Self::ListIndices
                | Self::ListTagsForResource
                | Self::Query
        )
    }

    /// Returns the error kinds the operation is declared to raise.
    pub fn error_kinds(self) -> &'static [ServiceErrorKind] {
        match self {
            Self::BatchDeleteDocument
            | Self::DeleteDataSource
            | Self::DeleteFaq
            | Self::DeleteIndex
            | Self::UpdateDataSource => &[
                Validation,
                Conflict,
                ResourceNotFound,
                Throttling,
                AccessDenied,
                InternalServer,
            ],
            Self::BatchPutDocument | Self::CreateFaq | Self::Query | Self::UpdateIndex => &[
                Validation,
                Conflict,
                ResourceNotFound,
                Throttling,
                AccessDenied,
                ServiceQuotaExceeded,
                InternalServer,
            ],
            Self::CreateDataSource => &[
                Validation,
                Conflict,
                ResourceNotFound,
                ResourceAlreadyExist,
                ServiceQuotaExceeded,
                Throttling,
                AccessDenied,
                InternalServer,
            ],
            Self::CreateIndex => &[
                Validation,
                ResourceAlreadyExist,
                ServiceQuotaExceeded,
                Throttling,
                AccessDenied,
                Conflict,
                InternalServer,
            ],
            Self::DescribeDataSource
            | Self::DescribeFaq
            | Self::DescribeIndex
            | Self::ListDataSources
            | Self::ListFaqs
            | Self::StopDataSourceSyncJob => &[
                Validation,
                ResourceNotFound,
                Throttling,
                AccessDenied,
                InternalServer,
            ],
            Self::ListDataSourceSyncJobs => &[
                Validation,
                ResourceNotFound,
                Throttling,
                AccessDenied,
                Conflict,
                InternalServer,
            ],
            Self::ListIndices => &[Validation, Throttling, AccessDenied, InternalServer],
            Self::ListTagsForResource | Self::TagResource | Self::UntagResource => &[
                Validation,
                ResourceUnavailable,
                Throttling,
                AccessDenied,
                InternalServer,
            ],
            Self::StartDataSourceSyncJob => &[
                Validation,
                ResourceNotFound,
                ResourceInUse,
                Throttling,
                AccessDenied,
                Conflict,
                InternalServer,
            ],
            Self::SubmitFeedback => &[
                Validation,
                ResourceUnavailable,
                ResourceNotFound,
                Throttling,
                AccessDenied,
                InternalServer,
            ],
        }
    }

    /// Returns whether the operation declares the given error kind.
    pub fn declares(self, kind: ServiceErrorKind) -> bool {
        self.error_kinds().contains(&kind)
    }
}
