//! Closed sets of wire strings used by shape fields.
//!
//! Every enumeration renders to its exact wire string through `Display`,
//! `AsRef<str>` and serde, and parses back with `from_value`, which rejects
//! anything outside the declared set. Status and type fields of read models
//! wrap them in [`Reported`], which also accepts values the service adds later.

/// Implements the shared wire-string conversions for a strum-derived enum.
macro_rules! impl_wire_enum {
    ($name:ident) => {
        impl $name {
            /// Parses an exact wire string.
            ///
            /// # Errors
            ///
            /// Returns [`Error::UnrecognizedValue`](crate::Error::UnrecognizedValue)
            /// for any string outside the declared set, including the empty string.
            pub fn from_value(value: &str) -> crate::Result<Self> {
                value
                    .parse()
                    .map_err(|_| crate::Error::unrecognized_value(stringify!($name), value))
            }

            /// Returns the exact wire string.
            #[inline]
            pub fn as_str(self) -> &'static str {
                self.into()
            }

            /// Returns every declared value in declaration order.
            pub fn values() -> impl Iterator<Item = Self> {
                <Self as strum::IntoEnumIterator>::iter()
            }
        }
    };
}

pub(crate) use impl_wire_enum;

mod additional_result_attribute_value_type;
mod content_type;
mod data_source_status;
mod data_source_sync_job_status;
mod data_source_type;
mod database_engine_type;
mod document_attribute_value_type;
mod error_code;
mod faq_status;
mod index_edition;
mod index_status;
mod order;
mod principal_type;
mod query_identifiers_enclosing_option;
mod query_result_type;
mod read_access_type;
mod reported;
mod relevance_type;
mod salesforce_chatter_feed_include_filter_type;
mod salesforce_knowledge_article_state;
mod salesforce_standard_object_name;
mod score_confidence;
mod service_now_build_version_type;
mod share_point_version;
mod sort_order;

pub use additional_result_attribute_value_type::AdditionalResultAttributeValueType;
pub use content_type::ContentType;
pub use data_source_status::DataSourceStatus;
pub use data_source_sync_job_status::DataSourceSyncJobStatus;
pub use data_source_type::DataSourceType;
pub use database_engine_type::DatabaseEngineType;
pub use document_attribute_value_type::DocumentAttributeValueType;
pub use error_code::ErrorCode;
pub use faq_status::FaqStatus;
pub use index_edition::IndexEdition;
pub use index_status::IndexStatus;
pub use order::Order;
pub use principal_type::PrincipalType;
pub use query_identifiers_enclosing_option::QueryIdentifiersEnclosingOption;
pub use query_result_type::QueryResultType;
pub use read_access_type::ReadAccessType;
pub use reported::Reported;
pub use relevance_type::RelevanceType;
pub use salesforce_chatter_feed_include_filter_type::SalesforceChatterFeedIncludeFilterType;
pub use salesforce_knowledge_article_state::SalesforceKnowledgeArticleState;
pub use salesforce_standard_object_name::SalesforceStandardObjectName;
pub use score_confidence::ScoreConfidence;
pub use service_now_build_version_type::ServiceNowBuildVersionType;
pub use share_point_version::SharePointVersion;
pub use sort_order::SortOrder;

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::Error;

    #[test]
    fn test_sync_job_status_from_value() {
        assert_eq!(
            DataSourceSyncJobStatus::from_value("SYNCING").unwrap(),
            DataSourceSyncJobStatus::Syncing
        );

        let error = DataSourceSyncJobStatus::from_value("BOGUS").unwrap_err();
        assert!(matches!(
            error,
            Error::UnrecognizedValue { type_name: "DataSourceSyncJobStatus", ref value } if value == "BOGUS"
        ));
    }

    #[test]
    fn test_from_value_rejects_empty_and_case_variants() {
        assert!(IndexStatus::from_value("").is_err());
        assert!(IndexStatus::from_value("active").is_err());
        assert!(IndexStatus::from_value(" ACTIVE").is_err());
    }

    #[test]
    fn test_irregular_wire_strings() {
        assert_eq!(DataSourceType::SharePoint.as_str(), "SHAREPOINT");
        assert_eq!(DataSourceType::OneDrive.as_str(), "ONEDRIVE");
        assert_eq!(DataSourceType::ServiceNow.as_str(), "SERVICENOW");
        assert_eq!(DataSourceType::S3.as_str(), "S3");
        assert_eq!(ContentType::MsWord.as_str(), "MS_WORD");
        assert_eq!(ErrorCode::InvalidRequest.as_str(), "InvalidRequest");
        assert_eq!(QueryIdentifiersEnclosingOption::Unquoted.as_str(), "NONE");
        assert_eq!(SharePointVersion::SharepointOnline.as_str(), "SHAREPOINT_ONLINE");
        assert_eq!(IndexEdition::EnterpriseEdition.to_string(), "ENTERPRISE_EDITION");
    }

    /// Every declared value parses back from its own wire string and serde agrees
    /// with strum on the spelling.
    fn assert_closed<E>()
    where
        E: IntoEnumIterator + Copy + PartialEq + std::fmt::Debug + AsRef<str>,
        E: serde::Serialize + serde::de::DeserializeOwned + std::str::FromStr,
    {
        for value in E::iter() {
            let wire = value.as_ref().to_string();
            assert!(matches!(wire.parse::<E>(), Ok(parsed) if parsed == value));

            let json = serde_json::to_string(&value).unwrap();
            assert_eq!(json, format!("\"{wire}\""));
            assert_eq!(serde_json::from_str::<E>(&json).unwrap(), value);
        }

        assert!("".parse::<E>().is_err());
        assert!(serde_json::from_str::<E>("\"BOGUS\"").is_err());
    }

    #[test]
    fn test_every_enum_is_closed() {
        assert_closed::<AdditionalResultAttributeValueType>();
        assert_closed::<ContentType>();
        assert_closed::<DataSourceStatus>();
        assert_closed::<DataSourceSyncJobStatus>();
        assert_closed::<DataSourceType>();
        assert_closed::<DatabaseEngineType>();
        assert_closed::<DocumentAttributeValueType>();
        assert_closed::<ErrorCode>();
        assert_closed::<FaqStatus>();
        assert_closed::<IndexEdition>();
        assert_closed::<IndexStatus>();
        assert_closed::<Order>();
        assert_closed::<PrincipalType>();
        assert_closed::<QueryIdentifiersEnclosingOption>();
        assert_closed::<QueryResultType>();
        assert_closed::<ReadAccessType>();
        assert_closed::<RelevanceType>();
        assert_closed::<SalesforceChatterFeedIncludeFilterType>();
        assert_closed::<SalesforceKnowledgeArticleState>();
        assert_closed::<SalesforceStandardObjectName>();
        assert_closed::<ScoreConfidence>();
        assert_closed::<ServiceNowBuildVersionType>();
        assert_closed::<SharePointVersion>();
        assert_closed::<SortOrder>();
    }

    #[test]
    fn test_values_in_declaration_order() {
        let statuses: Vec<_> = FaqStatus::values().map(FaqStatus::as_str).collect();
        assert_eq!(
            statuses,
            ["CREATING", "UPDATING", "ACTIVE", "DELETING", "FAILED"]
        );
    }

    #[test]
    fn test_reported_keeps_unknown_values() {
        let status: Reported<DataSourceStatus> = serde_json::from_str("\"UPDATING\"").unwrap();
        assert_eq!(status, Reported::Known(DataSourceStatus::Updating));
        assert!(status.is_known());

        let status: Reported<DataSourceStatus> = serde_json::from_str("\"PAUSED\"").unwrap();
        assert_eq!(status.known(), None);
        assert_eq!(status.to_string(), "PAUSED");
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"PAUSED\"");

        assert!(serde_json::from_str::<Reported<DataSourceStatus>>("3").is_err());
        assert!(DataSourceStatus::from_value("PAUSED").is_err());
    }

    #[test]
    fn test_sync_job_status_terminal() {
        assert!(DataSourceSyncJobStatus::Succeeded.is_terminal());
        assert!(DataSourceSyncJobStatus::SyncingIndexing.is_running());
    }
}
