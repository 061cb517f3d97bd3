use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::codec::EpochTime;
use crate::enums::{DataSourceStatus, DataSourceType, Reported};
use crate::types::{DataSourceConfiguration, DataSourceSummary, DataSourceSyncJob};

/// Result of `CreateDataSource`.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct CreateDataSourceResponse {
    /// Identifier of the new data source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Current settings and state of a data source.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct DescribeDataSourceResponse {
    /// Identifier of the data source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Index the data source feeds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_id: Option<String>,

    /// Name of the data source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Connector type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<Reported<DataSourceType>>,

    /// Connector settings; absent when the connector is unknown to this client.
    #[serde(
        default,
        deserialize_with = "crate::codec::lenient::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub configuration: Option<DataSourceConfiguration>,

    /// When the data source was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<EpochTime>,

    /// When the data source was last changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<EpochTime>,

    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Lifecycle status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Reported<DataSourceStatus>>,

    /// Cron expression for periodic syncs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,

    /// IAM role the connector assumes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,

    /// Reason the data source is in the `FAILED` state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// One page of `ListDataSources`.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct ListDataSourcesResponse {
    /// Data sources on this page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_items: Option<Vec<DataSourceSummary>>,

    /// Present when more data sources remain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// One page of `ListDataSourceSyncJobs`.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct ListDataSourceSyncJobsResponse {
    /// Sync runs on this page, most recent first.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<DataSourceSyncJob>>,

    /// Present when more runs remain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Result of `StartDataSourceSyncJob`.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct StartDataSourceSyncJobResponse {
    /// Identifier of the sync run, as reported later in the job history.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_id: Option<String>,
}

crate::types::impl_shape! {
    CreateDataSourceResponse => CreateDataSourceResponseBuilder,
    DescribeDataSourceResponse => DescribeDataSourceResponseBuilder,
    ListDataSourcesResponse => ListDataSourcesResponseBuilder,
    ListDataSourceSyncJobsResponse => ListDataSourceSyncJobsResponseBuilder,
    StartDataSourceSyncJobResponse => StartDataSourceSyncJobResponseBuilder,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::enums::DataSourceSyncJobStatus;

    #[test]
    fn test_describe_from_wire() {
        let response: DescribeDataSourceResponse = serde_json::from_value(json!({
            "Id": "ds-1",
            "IndexId": "11111111-1111-1111-1111-111111111111",
            "Name": "corp-docs",
            "Type": "SERVICENOW",
            "Configuration": {
                "ServiceNowConfiguration": {
                    "HostUrl": "corp.service-now.com",
                    "SecretArn": "arn:aws:secretsmanager:us-east-1:123456789012:secret:sn",
                    "ServiceNowBuildVersion": "OTHERS"
                }
            },
            "CreatedAt": 1_600_000_000,
            "Status": "ACTIVE",
            "Schedule": "cron(0 2 * * ? *)"
        }))
        .unwrap();

        assert_eq!(response.r#type, Some(Reported::Known(DataSourceType::ServiceNow)));
        assert_eq!(
            response.configuration.as_ref().map(DataSourceConfiguration::data_source_type),
            response.r#type.as_ref().and_then(Reported::known)
        );
        assert!(
            response
                .status
                .as_ref()
                .and_then(Reported::known)
                .is_some_and(DataSourceStatus::is_active)
        );
    }

    #[test]
    fn test_describe_with_unknown_connector() {
        let response: DescribeDataSourceResponse = serde_json::from_value(json!({
            "Id": "ds-2",
            "Type": "WEBCRAWLER",
            "Configuration": {
                "WebCrawlerConfiguration": {"Urls": {"SeedUrlConfiguration": {"SeedUrls": []}}}
            },
            "Status": "CREATING"
        }))
        .unwrap();

        assert_eq!(response.r#type, Some(Reported::Unknown("WEBCRAWLER".to_string())));
        assert_eq!(response.configuration, None);
        assert_eq!(response.status, Some(Reported::Known(DataSourceStatus::Creating)));
    }

    #[test]
    fn test_sync_history_page() {
        let response: ListDataSourceSyncJobsResponse = serde_json::from_value(json!({
            "History": [
                {"ExecutionId": "e-2", "Status": "SYNCING"},
                {"ExecutionId": "e-1", "Status": "SUCCEEDED", "EndTime": 1_700_000_000}
            ],
            "NextToken": "page-2"
        }))
        .unwrap();

        let history = response.history.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].status, Some(Reported::Known(DataSourceSyncJobStatus::Syncing)));
        assert_eq!(response.next_token.as_deref(), Some("page-2"));
    }

    #[test]
    fn test_summaries_with_new_status() {
        let response: ListDataSourcesResponse = serde_json::from_value(json!({
            "SummaryItems": [
                {"Id": "ds-1", "Type": "S3", "Status": "ACTIVE"},
                {"Id": "ds-2", "Type": "S3", "Status": "PAUSED"}
            ]
        }))
        .unwrap();

        let statuses: Vec<_> = response
            .summary_items
            .iter()
            .flatten()
            .filter_map(|summary| summary.status.as_ref())
            .map(Reported::as_str)
            .collect();
        assert_eq!(statuses, vec!["ACTIVE", "PAUSED"]);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let response: StartDataSourceSyncJobResponse =
            serde_json::from_value(json!({"ExecutionId": "e-3", "Unexpected": 1})).unwrap();
        assert_eq!(response.execution_id.as_deref(), Some("e-3"));
    }
}
