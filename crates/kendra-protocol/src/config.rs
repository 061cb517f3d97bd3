//! Service endpoint configuration.

use std::sync::LazyLock;

#[cfg(feature = "config")]
use clap::Args;
use derive_builder::Builder;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{Error, Result, TRACING_TARGET_CONFIG};

/// Region used when none is configured.
pub const DEFAULT_REGION: &str = "us-east-1";

static REGION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]{2}(-[a-z]+)+-\d+$").unwrap());

/// Where requests are sent and how they are checked before sending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[cfg_attr(feature = "config", derive(Args))]
#[builder(
    pattern = "owned",
    setter(into, prefix = "with"),
    build_fn(validate = "Self::validate", error = "Error")
)]
pub struct ServiceConfig {
    /// AWS region hosting the index.
    #[cfg_attr(
        feature = "config",
        arg(long = "region", env = "KENDRA_REGION", default_value = DEFAULT_REGION)
    )]
    #[serde(default = "default_region")]
    #[builder(default = "default_region()")]
    pub region: String,

    /// Endpoint override, e.g. a local mock of the service.
    #[cfg_attr(feature = "config", arg(long = "endpoint", env = "KENDRA_ENDPOINT"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub endpoint: Option<String>,

    /// Send requests without checking their constraints first.
    #[cfg_attr(
        feature = "config",
        arg(long = "skip-validation", env = "KENDRA_SKIP_VALIDATION")
    )]
    #[serde(default)]
    #[builder(default)]
    pub skip_validation: bool,
}

fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            endpoint: None,
            skip_validation: false,
        }
    }
}

impl ServiceConfig {
    /// Returns a builder starting from the defaults.
    pub fn builder() -> ServiceConfigBuilder {
        ServiceConfigBuilder::default()
    }

    /// Sets the region.
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Sets the endpoint override.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Enables or disables constraint checks before marshalling.
    #[must_use]
    pub fn with_validate_requests(mut self, validate: bool) -> Self {
        self.skip_validation = !validate;
        self
    }

    /// Returns whether requests are validated before marshalling.
    #[inline]
    pub fn validate_requests(&self) -> bool {
        !self.skip_validation
    }

    /// Returns the URL requests are posted to.
    pub fn endpoint_url(&self) -> String {
        match &self.endpoint {
            Some(endpoint) => endpoint.trim_end_matches('/').to_string(),
            None => format!("https://kendra.{}.amazonaws.com", self.region),
        }
    }

    /// Checks the region and endpoint formats.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] naming the first malformed setting.
    pub fn validate(&self) -> Result<()> {
        check_region(&self.region)?;
        if let Some(endpoint) = &self.endpoint {
            check_endpoint(endpoint)?;
        }

        tracing::debug!(
            target: TRACING_TARGET_CONFIG,
            region = %self.region,
            endpoint = %self.endpoint_url(),
            validate_requests = self.validate_requests(),
            "service configuration accepted"
        );
        Ok(())
    }
}

impl ServiceConfigBuilder {
    fn validate(&self) -> Result<()> {
        if let Some(region) = &self.region {
            check_region(region)?;
        }
        if let Some(Some(endpoint)) = &self.endpoint {
            check_endpoint(endpoint)?;
        }
        Ok(())
    }

    /// Enables or disables constraint checks before marshalling.
    #[must_use]
    pub fn with_validate_requests(self, validate: bool) -> Self {
        self.with_skip_validation(!validate)
    }
}

fn check_region(region: &str) -> Result<()> {
    if REGION.is_match(region) {
        Ok(())
    } else {
        Err(Error::config(format!("region '{region}' is not a valid AWS region")))
    }
}

fn check_endpoint(endpoint: &str) -> Result<()> {
    let rest = endpoint
        .strip_prefix("https://")
        .or_else(|| endpoint.strip_prefix("http://"));

    match rest {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(Error::config(format!(
            "endpoint '{endpoint}' must be an http:// or https:// URL"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServiceConfig::default();
        assert_eq!(config.region, "us-east-1");
        assert!(config.validate_requests());
        assert_eq!(config.endpoint_url(), "https://kendra.us-east-1.amazonaws.com");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_matches_default() {
        let config = ServiceConfig::builder().build().unwrap();
        assert_eq!(config, ServiceConfig::default());
    }

    #[test]
    fn test_builder_rejects_bad_region() {
        let result = ServiceConfig::builder().with_region("Moon-Base").build();
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_builder_rejects_bad_endpoint() {
        let result = ServiceConfig::builder()
            .with_endpoint("localhost:4566")
            .build();
        assert!(matches!(result, Err(Error::Config { .. })));

        let result = ServiceConfig::builder().with_endpoint("https://").build();
        assert!(result.is_err());
    }

    #[test]
    fn test_endpoint_override() {
        let config = ServiceConfig::builder()
            .with_region("eu-west-1")
            .with_endpoint("http://localhost:4566/")
            .with_validate_requests(false)
            .build()
            .unwrap();

        assert_eq!(config.endpoint_url(), "http://localhost:4566");
        assert!(!config.validate_requests());
    }

    #[test]
    fn test_with_methods() {
        let config = ServiceConfig::default()
            .with_region("ap-southeast-2")
            .with_validate_requests(false);

        assert_eq!(
            config.endpoint_url(),
            "https://kendra.ap-southeast-2.amazonaws.com"
        );
        assert!(config.skip_validation);
        assert!(ServiceConfig::default().with_region("us-gov-west-1").validate().is_ok());
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let config: ServiceConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.region, DEFAULT_REGION);

        let config: ServiceConfig = serde_json::from_str(r#"{"region": "eu-west-1"}"#).unwrap();
        assert_eq!(config.region, "eu-west-1");
        assert!(!config.skip_validation);
    }
}
