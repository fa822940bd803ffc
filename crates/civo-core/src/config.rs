//! Configuration structures for Civo clients.
//!
//! [`CivoConfig`] carries everything a resource API needs to talk to the
//! provider: the API key, the region code that scopes requests, and where the
//! API lives.

use crate::Error;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;
use validator::Validate;

/// Region used when none is configured.
pub const DEFAULT_REGION: &str = "LON1";

/// Public Civo API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.civo.com";

/// API version prefixed to every resource path.
pub const DEFAULT_API_VERSION: &str = "v2";

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "CIVO_API_KEY";
/// Environment variable holding the region code.
pub const ENV_REGION: &str = "CIVO_REGION";
/// Environment variable overriding the API base URL.
pub const ENV_API_URL: &str = "CIVO_API_URL";
/// Environment variable overriding the API version.
pub const ENV_API_VERSION: &str = "CIVO_API_VERSION";

/// Which requests carry the `region` query parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionPlacement {
    /// Only GET requests
    #[default]
    GetRequests,
    /// Every request regardless of method
    AllRequests,
}

/// Configuration for a Civo client instance.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CivoConfig {
    /// API key sent as a bearer token
    #[serde(skip_serializing)]
    pub api_key: SecretString,

    /// Region code scoping requests, e.g. `LON1`
    #[validate(length(min = 1))]
    #[serde(default = "default_region")]
    pub region: String,

    /// API base URL
    #[validate(url)]
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// API version path prefix
    #[validate(length(min = 1))]
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Which requests carry the region query parameter
    #[serde(default)]
    pub region_placement: RegionPlacement,

    /// Request timeout in seconds
    #[validate(range(min = 1, max = 300))]
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

const fn default_request_timeout_secs() -> u64 {
    crate::client::DEFAULT_TIMEOUT
}

fn validate_api_key(key: &SecretString) -> Result<(), Error> {
    if key.expose_secret().trim().is_empty() {
        return Err(Error::ConfigError(
            "Invalid configuration: api_key is required".to_string(),
        ));
    }
    Ok(())
}

impl CivoConfig {
    /// Create a new configuration for the given API key.
    ///
    /// The region defaults to [`DEFAULT_REGION`] and the endpoint to
    /// [`DEFAULT_API_URL`].
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self, Error> {
        let config = Self {
            api_key: SecretString::from(api_key.into()),
            region: default_region(),
            api_url: default_api_url(),
            api_version: default_api_version(),
            region_placement: RegionPlacement::default(),
            request_timeout_secs: default_request_timeout_secs(),
        };

        config.check()?;
        Ok(config)
    }

    /// Load configuration from `CIVO_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `CIVO_API_KEY` is unset or any value fails validation.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or any value fails validation.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(ENV_API_KEY)
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| Error::ConfigError(format!("{ENV_API_KEY} is not set")))?;

        let mut config = Self::new(api_key)?;
        if let Some(region) = lookup(ENV_REGION).filter(|value| !value.is_empty()) {
            config.region = region;
        }
        if let Some(url) = lookup(ENV_API_URL).filter(|value| !value.is_empty()) {
            config.api_url = url;
        }
        if let Some(version) = lookup(ENV_API_VERSION).filter(|value| !value.is_empty()) {
            config.api_version = version;
        }

        config.check()?;
        Ok(config)
    }

    /// Set the region code.
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Set the API base URL.
    #[must_use]
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Set the API version prefix.
    #[must_use]
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Choose which requests carry the region query parameter.
    #[must_use]
    pub const fn with_region_placement(mut self, placement: RegionPlacement) -> Self {
        self.region_placement = placement;
        self
    }

    /// Set request timeout in seconds.
    #[must_use]
    pub const fn with_timeout(mut self, seconds: u64) -> Self {
        self.request_timeout_secs = seconds;
        self
    }

    /// Get the request timeout as a Duration.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Validate every field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] describing the failing fields.
    pub fn check(&self) -> Result<(), Error> {
        validate_api_key(&self.api_key)?;
        self.validate()
            .map_err(|e| Error::ConfigError(format!("Invalid configuration: {e}")))
    }

    /// Parse and validate the API URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn parse_api_url(&self) -> Result<Url, Error> {
        Url::parse(&self.api_url)
            .map_err(|e| Error::ConfigError(format!("Invalid API URL: {e}")))
    }
}
