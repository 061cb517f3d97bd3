use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::constraint::{ARN, INDEX_ID, PRINTABLE, RESOURCE_ID, RESOURCE_NAME, validation_error};
use crate::enums::{DataSourceSyncJobStatus, DataSourceType};
use crate::types::{DataSourceConfiguration, Tag, TimeRange, data_source_configuration};

/// Connects a repository to an index.
///
/// The declared [`r#type`](Self::r#type) must match the connector held by
/// [`configuration`](Self::configuration).
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[validate(schema(function = "configuration_matches_type"))]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct CreateDataSourceRequest {
    /// Name of the data source, unique within the index.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = 1000), regex(path = *RESOURCE_NAME))]
    pub name: Option<String>,

    /// Index the data source feeds.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(equal = 36), regex(path = *INDEX_ID))]
    pub index_id: Option<String>,

    /// Connector type; must match the configuration variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required)]
    pub r#type: Option<DataSourceType>,

    /// Connector settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, custom(function = "data_source_configuration"))]
    pub configuration: Option<DataSourceConfiguration>,

    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 1000), regex(path = *PRINTABLE))]
    pub description: Option<String>,

    /// Cron expression for periodic syncs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,

    /// IAM role the connector assumes to reach the repository.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = 1284), regex(path = *ARN))]
    pub role_arn: Option<String>,

    /// Tags attached to the new data source.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 200), nested)]
    pub tags: Option<Vec<Tag>>,
}

fn configuration_matches_type(request: &CreateDataSourceRequest) -> Result<(), ValidationError> {
    let (Some(declared), Some(configuration)) = (request.r#type, &request.configuration) else {
        return Ok(());
    };

    let configured = configuration.data_source_type();
    if declared != configured {
        return Err(validation_error(
            "configuration_type",
            format!("Type is {declared} but the configuration is for {configured}"),
        ));
    }

    Ok(())
}

impl CreateDataSourceRequestBuilder {
    /// Sets the configuration and the matching data source type.
    pub fn with_connector(self, configuration: impl Into<DataSourceConfiguration>) -> Self {
        let configuration = configuration.into();
        self.with_type(configuration.data_source_type())
            .with_configuration(configuration)
    }
}

/// Deletes a data source and the documents it added.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct DeleteDataSourceRequest {
    /// Data source to delete.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = 100), regex(path = *RESOURCE_ID))]
    pub id: Option<String>,

    /// Index holding the data source.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(equal = 36), regex(path = *INDEX_ID))]
    pub index_id: Option<String>,
}

/// Reads the settings and state of a data source.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct DescribeDataSourceRequest {
    /// Data source to describe.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = 100), regex(path = *RESOURCE_ID))]
    pub id: Option<String>,

    /// Index holding the data source.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(equal = 36), regex(path = *INDEX_ID))]
    pub index_id: Option<String>,
}

/// Changes the settings of an existing data source.
///
/// Unset fields keep their current value.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct UpdateDataSourceRequest {
    /// Data source to change.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = 100), regex(path = *RESOURCE_ID))]
    pub id: Option<String>,

    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 1000), regex(path = *RESOURCE_NAME))]
    pub name: Option<String>,

    /// Index holding the data source.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(equal = 36), regex(path = *INDEX_ID))]
    pub index_id: Option<String>,

    /// Replacement connector settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "data_source_configuration"))]
    pub configuration: Option<DataSourceConfiguration>,

    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 1000), regex(path = *PRINTABLE))]
    pub description: Option<String>,

    /// New cron expression for periodic syncs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,

    /// New IAM role for the connector.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 1284), regex(path = *ARN))]
    pub role_arn: Option<String>,
}

/// Lists the data sources of an index, one page at a time.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct ListDataSourcesRequest {
    /// Index whose data sources are listed.
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

/// Lists the sync history of a data source, one page at a time.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct ListDataSourceSyncJobsRequest {
    /// Data source whose history is listed.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = 100), regex(path = *RESOURCE_ID))]
    pub id: Option<String>,

    /// Index holding the data source.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(equal = 36), regex(path = *INDEX_ID))]
    pub index_id: Option<String>,

    /// Token returned by the previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 800))]
    pub next_token: Option<String>,

    /// Page size, 1 to 10.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, max = 10))]
    pub max_results: Option<i32>,

    /// Only jobs started inside this window are returned.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub start_time_filter: Option<TimeRange>,

    /// Only jobs in this status are returned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_filter: Option<DataSourceSyncJobStatus>,
}

/// Starts an on-demand sync of a data source.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct StartDataSourceSyncJobRequest {
    /// Data source to sync.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = 100), regex(path = *RESOURCE_ID))]
    pub id: Option<String>,

    /// Index holding the data source.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(equal = 36), regex(path = *INDEX_ID))]
    pub index_id: Option<String>,
}

/// Stops the running sync of a data source.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct StopDataSourceSyncJobRequest {
    /// Data source whose sync is stopped.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = 100), regex(path = *RESOURCE_ID))]
    pub id: Option<String>,

    /// Index holding the data source.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(equal = 36), regex(path = *INDEX_ID))]
    pub index_id: Option<String>,
}

crate::types::impl_shape! {
    CreateDataSourceRequest => CreateDataSourceRequestBuilder,
    DeleteDataSourceRequest => DeleteDataSourceRequestBuilder,
    DescribeDataSourceRequest => DescribeDataSourceRequestBuilder,
    UpdateDataSourceRequest => UpdateDataSourceRequestBuilder,
    ListDataSourcesRequest => ListDataSourcesRequestBuilder,
    ListDataSourceSyncJobsRequest => ListDataSourceSyncJobsRequestBuilder,
    StartDataSourceSyncJobRequest => StartDataSourceSyncJobRequestBuilder,
    StopDataSourceSyncJobRequest => StopDataSourceSyncJobRequestBuilder,
}
