//! Load balancers and their backends.

use civo_core::Searchable;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Backend instance being load-balanced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadBalancerBackend {
    /// Backend IP address.
    pub ip: String,
    /// Backend protocol.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    /// Port the balancer listens on.
    pub source_port: u16,
    /// Port on the backend.
    pub target_port: u16,
    /// Health check port.
    pub health_check_port: u16,
}

/// Backend definition in a create or update request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct LoadBalancerBackendConfig {
    /// Backend IP address.
    #[validate(ip)]
    pub ip: String,
    /// Backend protocol.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    /// Port the balancer listens on.
    pub source_port: u16,
    /// Port on the backend.
    pub target_port: u16,
    /// Health check port.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_check_port: Option<u16>,
}

/// Additional load balancer options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadBalancerOptions {
    /// Server timeout, e.g. `60s`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_timeout: Option<String>,
    /// Client timeout, e.g. `60s`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_timeout: Option<String>,
}

/// Load balancer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadBalancer {
    /// Load balancer ID.
    pub id: String,
    /// Name.
    pub name: String,
    /// Balancing algorithm, e.g. `round_robin`.
    pub algorithm: String,
    /// Backends.
    pub backends: Vec<LoadBalancerBackend>,
    /// External traffic policy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_traffic_policy: Option<String>,
    /// Session affinity mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_affinity: Option<String>,
    /// Session affinity timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_affinity_config_timeout: Option<u32>,
    /// Proxy protocol mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_proxy_protocol: Option<String>,
    /// Public IP.
    pub public_ip: String,
    /// Private IP.
    pub private_ip: String,
    /// Firewall ID.
    pub firewall_id: String,
    /// Owning Kubernetes cluster.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_id: Option<String>,
    /// Provisioning state.
    pub state: String,
    /// Reserved IP ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reserved_ip_id: Option<String>,
    /// Reserved IP name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reserved_ip_name: Option<String>,
    /// Reserved IP address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reserved_ip: Option<String>,
    /// Maximum concurrent requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_concurrent_requests: Option<u32>,
    /// Additional options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<LoadBalancerOptions>,
}

impl Searchable for LoadBalancer {
    fn search_keys(&self) -> Vec<&str> {
        vec![self.id.as_str(), self.name.as_str()]
    }
}

/// Request payload to create a load balancer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct LoadBalancerConfig {
    /// Region code; the configured region is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Name.
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    /// Network ID.
    #[validate(length(min = 1, message = "network_id is required"))]
    pub network_id: String,
    /// Balancing algorithm.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<String>,
    /// Backends.
    #[validate(nested)]
    pub backends: Vec<LoadBalancerBackendConfig>,
    /// External traffic policy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_traffic_policy: Option<String>,
    /// Session affinity mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_affinity: Option<String>,
    /// Session affinity timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_affinity_config_timeout: Option<u32>,
    /// Proxy protocol mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_proxy_protocol: Option<String>,
    /// Owning Kubernetes cluster.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_id: Option<String>,
    /// Existing firewall ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firewall_id: Option<String>,
    /// Rule for a newly created firewall.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firewall_rule: Option<String>,
    /// Maximum concurrent requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_concurrent_requests: Option<u32>,
    /// Additional options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<LoadBalancerOptions>,
}

/// Request payload to update a load balancer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct LoadBalancerUpdateConfig {
    /// Region code; the configured region is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// New name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Balancing algorithm.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<String>,
    /// Replacement backends.
    #[validate(nested)]
    pub backends: Vec<LoadBalancerBackendConfig>,
    /// External traffic policy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_traffic_policy: Option<String>,
    /// Session affinity mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_affinity: Option<String>,
    /// Session affinity timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_affinity_config_timeout: Option<u32>,
    /// Proxy protocol mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_proxy_protocol: Option<String>,
    /// Firewall ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firewall_id: Option<String>,
    /// Maximum concurrent requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_concurrent_requests: Option<u32>,
    /// Additional options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<LoadBalancerOptions>,
}
