//! Compiled wire patterns referenced from `#[validate(regex(path = ...))]`.

use std::sync::LazyLock;

use regex::Regex;

/// Index identifiers.
pub static INDEX_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9][a-zA-Z0-9-]*$").unwrap());

/// Data source and FAQ identifiers.
pub static RESOURCE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9][a-zA-Z0-9_-]*$").unwrap());

/// Index, data source and FAQ names.
pub static RESOURCE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9][a-zA-Z0-9_-]*$").unwrap());

/// IAM role and Secrets Manager ARNs.
pub static ARN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^arn:[a-z0-9-\.]{1,63}:[a-z0-9-\.]{0,63}:[a-z0-9-\.]{0,63}:[a-z0-9-\.]{0,63}:[^/].{0,1023}$",
    )
    .unwrap()
});

/// Free text without control characters.
pub static PRINTABLE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\P{C}*$").unwrap());

/// S3 bucket names.
pub static BUCKET_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9][\.\-a-z0-9]{1,61}[a-z0-9]$").unwrap());

/// Crawlable URLs.
pub static URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(https?|ftp|file)://([^\s]*)$").unwrap());

/// Document attribute keys.
pub static ATTRIBUTE_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_][a-zA-Z0-9_-]*$").unwrap());

/// Source field names in a field mapping.
pub static DATA_SOURCE_FIELD_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9_.]*$").unwrap());

/// Date formats with no leading or trailing whitespace.
pub static DATE_FIELD_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S(.*\S)?$").unwrap());

/// Database column and database names.
pub static COLUMN_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9_]*$").unwrap());

/// Database table names, optionally schema-qualified.
pub static TABLE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9_\.]*$").unwrap());

/// VPC subnet and security group identifiers.
pub static VPC_IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\-0-9a-zA-Z]+$").unwrap());

/// OneDrive tenant domains.
pub static TENANT_DOMAIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-zA-Z0-9]+(-[a-zA-Z0-9]+)*\.)+[a-z]{2,}$").unwrap());

/// OneDrive user principal names.
pub static ONE_DRIVE_USER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S.*@([a-zA-Z0-9_\-\.]+)\.([a-zA-Z]{2,5})$").unwrap());

/// ServiceNow instance hosts, given without a scheme.
pub static SERVICE_NOW_HOST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9-]+\.service-now\.com$").unwrap());

/// Relevance durations such as `86400s`.
pub static DURATION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+[s]$").unwrap());
