//! Firewall and firewall rule endpoints.

use crate::models::{Firewall, FirewallConfig, FirewallResult, FirewallRule, FirewallRuleConfig};
use crate::Result;
use async_trait::async_trait;
use civo_core::find::{find, find_match, Findable};
use civo_core::{Route, SimpleResponse, Transport};
use tracing::info;
use validator::Validate;

/// Client for `/firewalls`.
#[derive(Debug, Clone)]
pub struct FirewallsApi {
    transport: Transport,
}

impl FirewallsApi {
    /// Create the API over a shared transport.
    #[must_use]
    pub const fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// List firewalls.
    pub async fn list(&self) -> Result<Vec<Firewall>> {
        self.transport.get(Route::new("/firewalls")).await
    }

    /// First firewall whose ID or name contains `search`.
    pub async fn find(&self, search: &str) -> Result<Firewall> {
        find(self, search).await
    }

    /// Create a firewall.
    pub async fn create(&self, config: &FirewallConfig) -> Result<FirewallResult> {
        config.validate()?;
        let mut body = config.clone();
        self.transport.fill_region(&mut body.region);

        info!(name = %body.name, "Creating firewall");
        self.transport.post(Route::new("/firewalls"), &body).await
    }

    /// Rename a firewall.
    pub async fn rename(&self, id: &str, config: &FirewallConfig) -> Result<SimpleResponse> {
        config.validate()?;
        let mut body = config.clone();
        self.transport.fill_region(&mut body.region);

        self.transport
            .put(Route::new("/firewalls/:id").param("id", id), &body)
            .await
    }

    /// Delete a firewall.
    pub async fn destroy(&self, id: &str) -> Result<SimpleResponse> {
        self.transport
            .delete(Route::new("/firewalls/:id").param("id", id))
            .await
    }

    /// Add a rule to a firewall.
    pub async fn create_rule(
        &self,
        firewall_id: &str,
        config: &FirewallRuleConfig,
    ) -> Result<FirewallRule> {
        config.validate()?;
        let route = Route::new("/firewalls/:id/rules").param("id", firewall_id);
        let mut body = config.clone();
        body.firewall_id = Some(firewall_id.to_string());
        self.transport.fill_region(&mut body.region);

        self.transport.post(route, &body).await
    }

    /// List a firewall's rules.
    pub async fn list_rules(&self, id: &str) -> Result<Vec<FirewallRule>> {
        self.transport
            .get(Route::new("/firewalls/:id/rules").param("id", id))
            .await
    }

    /// First rule whose ID or label contains `search`.
    pub async fn find_rule(&self, id: &str, search: &str) -> Result<FirewallRule> {
        let rules = self.list_rules(id).await?;
        find_match(rules, search)
    }

    /// Delete a rule.
    pub async fn destroy_rule(&self, id: &str, rule_id: &str) -> Result<SimpleResponse> {
        let route = Route::new("/firewalls/:id/rules/:rule_id")
            .param("id", id)
            .param("rule_id", rule_id);
        self.transport.delete(route).await
    }
}

#[async_trait]
impl Findable for FirewallsApi {
    type Item = Firewall;

    async fn list_items(&self) -> Result<Vec<Firewall>> {
        self.list().await
    }
}
