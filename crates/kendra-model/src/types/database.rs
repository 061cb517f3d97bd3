//! Relational database connector.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{DataSourceToIndexFieldMapping, DataSourceVpcConfiguration};
use crate::constraint::{ARN, COLUMN_NAME, TABLE_NAME, column_names};
use crate::enums::{DatabaseEngineType, QueryIdentifiersEnclosingOption};

/// Indexes rows of a database table.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct DatabaseConfiguration {
    /// Engine of the database.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required)]
    pub database_engine_type: Option<DatabaseEngineType>,

    /// Where and how to connect.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, nested)]
    pub connection_configuration: Option<ConnectionConfiguration>,

    /// Network placement of the connector.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub vpc_configuration: Option<DataSourceVpcConfiguration>,

    /// Columns holding document content and metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, nested)]
    pub column_configuration: Option<ColumnConfiguration>,

    /// Column holding the groups allowed to read a row.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub acl_configuration: Option<AclConfiguration>,

    /// Identifier quoting of generated SQL.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub sql_configuration: Option<SqlConfiguration>,
}

/// Where and how to connect to the database.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct ConnectionConfiguration {
    /// Host name of the database.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = 253))]
    pub database_host: Option<String>,

    /// TCP port, 1 to 65535.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, range(min = 1, max = 65535))]
    pub database_port: Option<i32>,

    /// Database holding the table.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = 100), regex(path = *COLUMN_NAME))]
    pub database_name: Option<String>,

    /// Table the documents are read from.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = 100), regex(path = *TABLE_NAME))]
    pub table_name: Option<String>,

    /// Secrets Manager secret holding the database credentials.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = 1284), regex(path = *ARN))]
    pub secret_arn: Option<String>,
}

/// Columns that make up a document.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct ColumnConfiguration {
    /// Column with the document identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = 100), regex(path = *COLUMN_NAME))]
    pub document_id_column_name: Option<String>,

    /// Columns concatenated into the document body.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = 100), regex(path = *COLUMN_NAME))]
    pub document_data_column_name: Option<String>,

    /// Column with the document title.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 100), regex(path = *COLUMN_NAME))]
    pub document_title_column_name: Option<String>,

    /// Extra columns mapped to index fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 100), nested)]
    pub field_mappings: Option<Vec<DataSourceToIndexFieldMapping>>,

    /// Columns compared between syncs to detect changed rows.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = 5), custom(function = "column_names"))]
    pub change_detecting_columns: Option<Vec<String>>,
}

/// Column holding the groups allowed to read each row.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct AclConfiguration {
    /// Column listing the groups allowed to read a row.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = 100), regex(path = *COLUMN_NAME))]
    pub allowed_groups_column_name: Option<String>,
}

/// Shape of the SQL the connector generates.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct SqlConfiguration {
    /// Whether table and column names are quoted in generated SQL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_identifiers_enclosing_option: Option<QueryIdentifiersEnclosingOption>,
}

super::impl_shape! {
    DatabaseConfiguration => DatabaseConfigurationBuilder,
    ConnectionConfiguration => ConnectionConfigurationBuilder,
    ColumnConfiguration => ColumnConfigurationBuilder,
    AclConfiguration => AclConfigurationBuilder,
    SqlConfiguration => SqlConfigurationBuilder,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn connection() -> ConnectionConfiguration {
        ConnectionConfiguration::builder()
            .with_database_host("db.internal.example.com")
            .with_database_port(5432)
            .with_database_name("knowledge")
            .with_table_name("public.articles")
            .with_secret_arn("arn:aws:secretsmanager:us-east-1:123456789012:secret:db")
            .build()
            .unwrap()
    }

    fn columns() -> ColumnConfiguration {
        ColumnConfiguration::builder()
            .with_document_id_column_name("id")
            .with_document_data_column_name("body")
            .with_change_detecting_columns(vec!["updated_at".to_string()])
            .build()
            .unwrap()
    }

    #[test]
    fn test_valid_database_configuration() {
        let configuration = DatabaseConfiguration::builder()
            .with_database_engine_type(DatabaseEngineType::RdsPostgresql)
            .with_connection_configuration(connection())
            .with_column_configuration(columns())
            .with_sql_configuration(SqlConfiguration {
                query_identifiers_enclosing_option: Some(QueryIdentifiersEnclosingOption::DoubleQuotes),
            })
            .build()
            .unwrap();

        assert!(configuration.validate().is_ok());

        let value = serde_json::to_value(&configuration).unwrap();
        assert_eq!(value["DatabaseEngineType"], json!("RDS_POSTGRESQL"));
        assert_eq!(value["ConnectionConfiguration"]["DatabasePort"], json!(5432));
        assert_eq!(
            value["SqlConfiguration"]["QueryIdentifiersEnclosingOption"],
            json!("DOUBLE_QUOTES")
        );
    }

    #[test]
    fn test_missing_column_configuration() {
        let configuration = DatabaseConfiguration::builder()
            .with_database_engine_type(DatabaseEngineType::RdsMysql)
            .with_connection_configuration(connection())
            .build()
            .unwrap();

        let errors = configuration.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("column_configuration"));
    }

    #[test]
    fn test_port_range() {
        for port in [0, 65536] {
            let connection = ConnectionConfiguration {
                database_port: Some(port),
                ..connection()
            };
            assert!(connection.validate().is_err(), "port {port} should be rejected");
        }
    }

    #[test]
    fn test_change_detecting_columns_bounds() {
        let too_many = ColumnConfiguration {
            change_detecting_columns: Some((0..6).map(|i| format!("column_{i}")).collect()),
            ..columns()
        };
        assert!(too_many.validate().is_err());

        let malformed = ColumnConfiguration {
            change_detecting_columns: Some(vec!["1st".to_string()]),
            ..columns()
        };
        assert!(malformed.validate().is_err());
    }
}
