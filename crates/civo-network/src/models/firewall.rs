//! Firewalls and their rules.

use civo_core::Searchable;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A single firewall rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirewallRule {
    /// Rule ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Owning firewall ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firewall_id: Option<String>,
    /// Protocol, e.g. `tcp`.
    pub protocol: String,
    /// First port of the range.
    pub start_port: String,
    /// Last port of the range.
    pub end_port: String,
    /// CIDR blocks the rule applies to.
    pub cidr: Vec<String>,
    /// `ingress` or `egress`.
    pub direction: String,
    /// `allow` or `deny`.
    pub action: String,
    /// Optional label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Port list, preferred over the start/end range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ports: Option<String>,
}

impl Searchable for FirewallRule {
    fn search_keys(&self) -> Vec<&str> {
        self.id
            .as_deref()
            .into_iter()
            .chain(self.label.as_deref())
            .collect()
    }
}

/// Firewall with its rule counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Firewall {
    /// Firewall ID.
    pub id: String,
    /// Firewall name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Number of rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules_count: Option<String>,
    /// Instances using the firewall.
    pub instance_count: u32,
    /// Clusters using the firewall.
    pub cluster_count: u32,
    /// Load balancers using the firewall.
    pub loadbalancer_count: u32,
    /// Network the firewall belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_id: Option<String>,
    /// Rules, when embedded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<FirewallRule>>,
}

impl Searchable for Firewall {
    fn search_keys(&self) -> Vec<&str> {
        let mut keys = vec![self.id.as_str()];
        keys.extend(self.name.as_deref());
        keys
    }
}

/// Result of a firewall create call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirewallResult {
    /// Firewall ID.
    pub id: String,
    /// Firewall name.
    pub name: String,
    /// Outcome, usually `success`.
    pub result: String,
}

/// Request payload to create a firewall rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct FirewallRuleConfig {
    /// Owning firewall; set from the path when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firewall_id: Option<String>,
    /// Region code; the configured region is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Protocol, e.g. `tcp`.
    #[validate(length(min = 1, message = "protocol is required"))]
    pub protocol: String,
    /// First port of the range.
    pub start_port: String,
    /// Last port of the range.
    pub end_port: String,
    /// CIDR blocks the rule applies to.
    #[validate(length(min = 1, message = "at least one cidr is required"))]
    pub cidr: Vec<String>,
    /// `ingress` or `egress`.
    #[validate(length(min = 1, message = "direction is required"))]
    pub direction: String,
    /// `allow` or `deny`.
    #[validate(length(min = 1, message = "action is required"))]
    pub action: String,
    /// Optional label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Port list, preferred over the start/end range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ports: Option<String>,
}

/// Request payload to create or rename a firewall.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct FirewallConfig {
    /// Firewall name.
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    /// Region code; the configured region is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Network the firewall belongs to.
    #[validate(length(min = 1, message = "network_id is required"))]
    pub network_id: String,
    /// Create the default rule set; omitted means the provider decides.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_rules: Option<bool>,
    /// Initial rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<FirewallRule>>,
}
