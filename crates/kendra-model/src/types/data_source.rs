//! Data sources, their sync jobs and the connector union.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use super::{
    DatabaseConfiguration, OneDriveConfiguration, S3DataSourceConfiguration,
    SalesforceConfiguration, ServiceNowConfiguration, SharePointConfiguration,
};
use crate::codec::EpochTime;
use crate::constraint::{
    DATA_SOURCE_FIELD_NAME, DATE_FIELD_FORMAT, PRINTABLE, validation_error, vpc_identifiers,
};
use crate::enums::{DataSourceStatus, DataSourceSyncJobStatus, DataSourceType, ErrorCode, Reported};

/// Connector settings of a data source.
///
/// Exactly one connector is configured. On the wire the variant is the single
/// key of the `Configuration` object, for example `{"S3Configuration": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataSourceConfiguration {
    #[serde(rename = "S3Configuration")]
    S3(S3DataSourceConfiguration),
    #[serde(rename = "SharePointConfiguration")]
    SharePoint(SharePointConfiguration),
    #[serde(rename = "DatabaseConfiguration")]
    Database(DatabaseConfiguration),
    #[serde(rename = "SalesforceConfiguration")]
    Salesforce(SalesforceConfiguration),
    #[serde(rename = "OneDriveConfiguration")]
    OneDrive(OneDriveConfiguration),
    #[serde(rename = "ServiceNowConfiguration")]
    ServiceNow(ServiceNowConfiguration),
}

impl DataSourceConfiguration {
    /// Returns the data source type this connector belongs to.
    pub fn data_source_type(&self) -> DataSourceType {
        match self {
            Self::S3(_) => DataSourceType::S3,
            Self::SharePoint(_) => DataSourceType::SharePoint,
            Self::Database(_) => DataSourceType::Database,
            Self::Salesforce(_) => DataSourceType::Salesforce,
            Self::OneDrive(_) => DataSourceType::OneDrive,
            Self::ServiceNow(_) => DataSourceType::ServiceNow,
        }
    }
}

impl Validate for DataSourceConfiguration {
    fn validate(&self) -> Result<(), ValidationErrors> {
        match self {
            Self::S3(configuration) => configuration.validate(),
            Self::SharePoint(configuration) => configuration.validate(),
            Self::Database(configuration) => configuration.validate(),
            Self::Salesforce(configuration) => configuration.validate(),
            Self::OneDrive(configuration) => configuration.validate(),
            Self::ServiceNow(configuration) => configuration.validate(),
        }
    }
}

/// Validates the connector held by a `Configuration` field.
pub(crate) fn data_source_configuration(
    configuration: &DataSourceConfiguration,
) -> Result<(), ValidationError> {
    configuration.validate().map_err(|errors| {
        validation_error(
            "data_source_configuration",
            format!("{}: {errors}", configuration.data_source_type()),
        )
    })
}

macro_rules! impl_from_connector {
    ($($variant:ident($configuration:ty)),* $(,)?) => {
        $(
            impl From<$configuration> for DataSourceConfiguration {
                fn from(configuration: $configuration) -> Self {
                    Self::$variant(configuration)
                }
            }
        )*
    };
}

impl_from_connector! {
    S3(S3DataSourceConfiguration),
    SharePoint(SharePointConfiguration),
    Database(DatabaseConfiguration),
    Salesforce(SalesforceConfiguration),
    OneDrive(OneDriveConfiguration),
    ServiceNow(ServiceNowConfiguration),
}

/// Maps a field of the source repository to an index field.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct DataSourceToIndexFieldMapping {
    /// Field name in the source repository.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = 100), regex(path = *DATA_SOURCE_FIELD_NAME))]
    pub data_source_field_name: Option<String>,

    /// Format used to parse date fields, for example `yyyy-MM-dd'T'HH:mm:ss`.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 4, max = 40), regex(path = *DATE_FIELD_FORMAT))]
    pub date_field_format: Option<String>,

    /// Index field receiving the value.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = 30), regex(path = *PRINTABLE))]
    pub index_field_name: Option<String>,
}

impl DataSourceToIndexFieldMapping {
    /// Creates a mapping between a source field and an index field.
    pub fn new(data_source_field_name: impl Into<String>, index_field_name: impl Into<String>) -> Self {
        Self {
            data_source_field_name: Some(data_source_field_name.into()),
            date_field_format: None,
            index_field_name: Some(index_field_name.into()),
        }
    }
}

/// Subnets and security groups used to reach a data source inside a VPC.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct DataSourceVpcConfiguration {
    /// Subnets the connector runs in, at most 6.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = 6), custom(function = "vpc_identifiers"))]
    pub subnet_ids: Option<Vec<String>>,

    /// Security groups applied to the connector, at most 10.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = 10), custom(function = "vpc_identifiers"))]
    pub security_group_ids: Option<Vec<String>>,
}

/// A data source as listed by `ListDataSources`.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct DataSourceSummary {
    /// Name of the data source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Identifier of the data source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Connector type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<Reported<DataSourceType>>,

    /// When the data source was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<EpochTime>,

    /// When the data source was last changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<EpochTime>,

    /// Lifecycle status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Reported<DataSourceStatus>>,
}

/// One run of a data source synchronization.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct DataSourceSyncJob {
    /// Identifier of the run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_id: Option<String>,

    /// When the run started.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<EpochTime>,

    /// When the run finished; unset while it is running.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<EpochTime>,

    /// Progress of the run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Reported<DataSourceSyncJobStatus>>,

    /// Reason the run failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,

    /// Category of the failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<Reported<ErrorCode>>,

    /// Error code reported by the connector itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source_error_code: Option<String>,

    /// Document counters of the run.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub metrics: Option<DataSourceSyncJobMetrics>,
}

impl DataSourceSyncJob {
    /// Returns the run time of a finished job.
    pub fn elapsed(&self) -> Option<jiff::Span> {
        let start = self.start_time?.as_timestamp();
        let end = self.end_time?.as_timestamp();
        start.until(end).ok()
    }
}

/// Document counters of a sync job.
///
/// The service reports every counter as a decimal string.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct DataSourceSyncJobMetrics {
    /// New documents indexed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documents_added: Option<String>,

    /// Changed documents reindexed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documents_modified: Option<String>,

    /// Documents removed from the index.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documents_deleted: Option<String>,

    /// Documents that could not be indexed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documents_failed: Option<String>,

    /// Documents read from the repository.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documents_scanned: Option<String>,
}

/// A window of sync job start times.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[validate(schema(function = "time_range_order"))]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct TimeRange {
    /// Earliest start time, inclusive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<EpochTime>,

    /// Latest start time, inclusive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<EpochTime>,
}

impl TimeRange {
    /// Returns whether a point in time falls inside the range, bounds included.
    pub fn contains(&self, time: impl Into<EpochTime>) -> bool {
        let time = time.into();
        self.start_time.is_none_or(|start| start <= time)
            && self.end_time.is_none_or(|end| time <= end)
    }
}

fn time_range_order(range: &TimeRange) -> Result<(), ValidationError> {
    if let (Some(start), Some(end)) = (range.start_time, range.end_time)
        && start > end
    {
        return Err(validation_error(
            "time_range_order",
            format!("Start time {start} is after end time {end}"),
        ));
    }

    Ok(())
}

super::impl_shape! {
    DataSourceToIndexFieldMapping => DataSourceToIndexFieldMappingBuilder,
    DataSourceVpcConfiguration => DataSourceVpcConfigurationBuilder,
    DataSourceSummary => DataSourceSummaryBuilder,
    DataSourceSyncJob => DataSourceSyncJobBuilder,
    DataSourceSyncJobMetrics => DataSourceSyncJobMetricsBuilder,
    TimeRange => TimeRangeBuilder,
}
