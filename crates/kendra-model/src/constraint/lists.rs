//! Element checks for list- and map-typed fields.
//!
//! `validator` bounds the length of a collection but not its members; these
//! functions are wired in with `#[validate(custom(function = "..."))]`.

use std::collections::BTreeMap;

use regex::Regex;
use validator::ValidationError;

use super::patterns::{ATTRIBUTE_KEY, COLUMN_NAME, ONE_DRIVE_USER, URL, VPC_IDENTIFIER};
use super::validation_error;

/// Checks the length, and optionally the pattern, of every element.
fn check_each<T>(
    values: &[T],
    code: &'static str,
    min: usize,
    max: usize,
    pattern: Option<&Regex>,
) -> Result<(), ValidationError>
where
    T: AsRef<str>,
{
    for (index, value) in values.iter().enumerate() {
        let value = value.as_ref();
        let length = value.chars().count();

        if length < min || length > max {
            return Err(validation_error(
                code,
                format!(
                    "Element #{} must be between {min} and {max} characters, got {length}",
                    index + 1
                ),
            ));
        }

        if let Some(pattern) = pattern
            && !pattern.is_match(value)
        {
            return Err(validation_error(
                code,
                format!("Element #{} does not match {}", index + 1, pattern.as_str()),
            ));
        }
    }

    Ok(())
}

/// Inclusion and exclusion patterns or prefixes of a crawler.
pub fn crawl_patterns(values: &[String]) -> Result<(), ValidationError> {
    check_each(values, "crawl_pattern", 1, 150, None)
}

/// Document identifiers in a batch.
pub fn document_ids(values: &[String]) -> Result<(), ValidationError> {
    check_each(values, "document_id", 1, 2048, None)
}

/// Site URLs to crawl.
pub fn urls(values: &[String]) -> Result<(), ValidationError> {
    check_each(values, "url", 1, 2048, Some(&URL))
}

/// Database column names.
pub fn column_names(values: &[String]) -> Result<(), ValidationError> {
    check_each(values, "column_name", 1, 100, Some(&COLUMN_NAME))
}

/// Subnet or security group identifiers.
pub fn vpc_identifiers(values: &[String]) -> Result<(), ValidationError> {
    check_each(values, "vpc_identifier", 1, 200, Some(&VPC_IDENTIFIER))
}

/// OneDrive user principal names.
pub fn one_drive_users(values: &[String]) -> Result<(), ValidationError> {
    check_each(values, "one_drive_user", 1, 256, Some(&ONE_DRIVE_USER))
}

/// Keys of tags to remove.
pub fn tag_keys(values: &[String]) -> Result<(), ValidationError> {
    check_each(values, "tag_key", 1, 128, None)
}

/// Document attribute keys requested in a query.
pub fn attribute_keys(values: &[String]) -> Result<(), ValidationError> {
    check_each(values, "attribute_key", 1, 200, Some(&ATTRIBUTE_KEY))
}

/// Boost values per attribute value of a relevance configuration.
pub fn value_importance_map(values: &BTreeMap<String, i32>) -> Result<(), ValidationError> {
    for (key, importance) in values {
        let length = key.chars().count();
        if !(1..=50).contains(&length) {
            return Err(validation_error(
                "value_importance_key",
                format!("Key '{key}' must be between 1 and 50 characters"),
            ));
        }

        if !(1..=10).contains(importance) {
            return Err(validation_error(
                "value_importance",
                format!("Importance of '{key}' must be between 1 and 10, got {importance}"),
            ));
        }
    }

    Ok(())
}
