//! Supported database engines.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// Relational database engines the database connector can crawl.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize, AsRefStr, Display, EnumIter, EnumString, IntoStaticStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DatabaseEngineType {
    /// Amazon Aurora MySQL.
    RdsAuroraMysql,

    /// Amazon Aurora PostgreSQL.
    RdsAuroraPostgresql,

    /// Amazon RDS for MySQL.
    RdsMysql,

    /// Amazon RDS for PostgreSQL.
    RdsPostgresql,
}

super::impl_wire_enum!(DatabaseEngineType);
