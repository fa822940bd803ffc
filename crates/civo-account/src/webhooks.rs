//! Webhook endpoints.

use crate::models::{Webhook, WebhookConfig};
use crate::Result;
use async_trait::async_trait;
use civo_core::find::{find, Findable};
use civo_core::{Route, SimpleResponse, Transport};
use tracing::info;
use validator::Validate;

/// Client for `/webhooks`.
#[derive(Debug, Clone)]
pub struct WebhooksApi {
    transport: Transport,
}

impl WebhooksApi {
    /// Create the API over a shared transport.
    #[must_use]
    pub const fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// List webhooks.
    pub async fn list(&self) -> Result<Vec<Webhook>> {
        self.transport.get(Route::new("/webhooks")).await
    }

    /// First webhook whose ID or URL contains `search`.
    pub async fn find(&self, search: &str) -> Result<Webhook> {
        find(self, search).await
    }

    /// Register a webhook.
    pub async fn create(&self, config: &WebhookConfig) -> Result<Webhook> {
        config.validate()?;
        info!(url = %config.url, events = config.events.len(), "Creating webhook");
        self.transport.post(Route::new("/webhooks"), config).await
    }

    /// Replace a webhook's events, URL or secret.
    pub async fn update(&self, id: &str, config: &WebhookConfig) -> Result<Webhook> {
        config.validate()?;
        self.transport
            .put(Route::new("/webhooks/:id").param("id", id), config)
            .await
    }

    /// Delete a webhook.
    pub async fn destroy(&self, id: &str) -> Result<SimpleResponse> {
        self.transport
            .delete(Route::new("/webhooks/:id").param("id", id))
            .await
    }
}

#[async_trait]
impl Findable for WebhooksApi {
    type Item = Webhook;

    async fn list_items(&self) -> Result<Vec<Webhook>> {
        self.list().await
    }
}
