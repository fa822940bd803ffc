//! Error types for Civo API operations.
//!
//! Every failure the client can produce is a variant of [`Error`]. Variants fall
//! into three broad kinds (see [`ErrorKind`]): client-side validation failures
//! raised before any request is sent, error payloads returned by the provider,
//! and everything else the client could not make sense of.

use serde::Deserialize;
use thiserror::Error;

/// Main error type for Civo operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Input rejected before any network call was made
    #[error("Validation error: {0}")]
    Validation(String),

    /// Provider returned a recognised `{code, reason}` error body
    #[error("Code: {code} \n Reason: {reason}")]
    Api {
        /// HTTP status code of the response
        status: u16,
        /// Provider error code, e.g. `database_instance_not_found`
        code: String,
        /// Human-readable explanation supplied by the provider
        reason: String,
        /// Raw response body
        body: String,
    },

    /// Non-success response without a recognised error body
    #[error("Ooops! something went wrong! (status {status})")]
    UnexpectedResponse {
        /// HTTP status code of the response
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Successful response whose body does not match the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// No item matched a search term
    #[error("{0}")]
    NotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Invalid endpoint or URL
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Operation timed out
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// API could not be reached
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Specialized result type for Civo operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Broad classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed input detected client-side
    Validation,
    /// Error payload returned by the provider
    Provider,
    /// Any other failure
    Unrecognized,
}

/// Error body shape returned by the Civo API.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ProviderError {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable reason
    pub reason: String,
}

impl ProviderError {
    /// Attempt to read a provider error from a raw response body.
    ///
    /// Returns `None` when the body is not JSON or does not carry both `code`
    /// and `reason` as strings.
    #[must_use]
    pub fn parse(body: &[u8]) -> Option<Self> {
        serde_json::from_slice(body).ok()
    }
}

impl Error {
    /// Build a validation error for a missing required argument.
    #[must_use]
    pub fn required(name: &str) -> Self {
        Self::Validation(format!("{name} is required"))
    }

    /// Build the error returned when a search yields nothing.
    #[must_use]
    pub fn zero_matches(search: &str) -> Self {
        Self::NotFound(format!("Unable to find {search}, zero matches"))
    }

    /// Returns the error code for this error type.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Api { .. } => "API_ERROR",
            Self::UnexpectedResponse { .. } => "UNEXPECTED_RESPONSE",
            Self::InvalidResponse(_) => "INVALID_RESPONSE",
            Self::NotFound(_) => "NOT_FOUND",
            Self::ConfigError(_) => "CONFIG_ERROR",
            Self::InvalidEndpoint(_) => "INVALID_ENDPOINT",
            Self::HttpError(_) => "HTTP_ERROR",
            Self::Timeout(_) => "TIMEOUT",
            Self::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
        }
    }

    /// Classify the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::Api { .. } => ErrorKind::Provider,
            _ => ErrorKind::Unrecognized,
        }
    }

    /// Provider error code, if this is a provider error.
    #[must_use]
    pub fn provider_code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => Some(code),
            _ => None,
        }
    }

    /// Provider error reason, if this is a provider error.
    #[must_use]
    pub fn provider_reason(&self) -> Option<&str> {
        match self {
            Self::Api { reason, .. } => Some(reason),
            _ => None,
        }
    }

    /// HTTP status of the response that caused this error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } | Self::UnexpectedResponse { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body attached to this error, if any.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Api { body, .. } | Self::UnexpectedResponse { body, .. } => Some(body),
            _ => None,
        }
    }
}

// Conversions from external error types
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() {
            Self::ServiceUnavailable(err.to_string())
        } else {
            Self::HttpError(err.to_string())
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidEndpoint(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidResponse(err.to_string())
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::Validation(err.to_string())
    }
}
