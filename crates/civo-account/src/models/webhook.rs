//! Webhooks.

use civo_core::Searchable;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Saved callback for account events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Webhook {
    /// Webhook ID.
    pub id: String,
    /// Subscribed event names.
    #[serde(default)]
    pub events: Vec<String>,
    /// Callback URL.
    pub url: String,
    /// Signing secret.
    #[serde(default)]
    pub secret: String,
    /// Whether delivery is disabled.
    #[serde(default)]
    pub disabled: bool,
    /// Consecutive delivery failures.
    #[serde(default)]
    pub failures: u32,
    /// Reason for the last failure.
    #[serde(default)]
    pub last_failure_reason: String,
}

impl Searchable for Webhook {
    fn search_keys(&self) -> Vec<&str> {
        vec![self.id.as_str(), self.url.as_str()]
    }
}

/// Request payload to create or update a webhook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct WebhookConfig {
    /// Event names; `*` subscribes to all.
    #[validate(length(min = 1, message = "at least one event is required"))]
    pub events: Vec<String>,
    /// Callback URL.
    #[validate(url(message = "url must be a valid URL"))]
    pub url: String,
    /// Signing secret; generated when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}
