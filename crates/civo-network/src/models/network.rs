//! Private networks, subnets, and subnet routes.

use civo_core::Searchable;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Private network for instances to connect to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    /// Network ID.
    pub id: String,
    /// Internal network name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Whether this is the region's default network.
    pub default: bool,
    /// IPv4 CIDR block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cidr: Option<String>,
    /// IPv6 CIDR block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cidr_v6: Option<String>,
    /// User-facing label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Provisioning status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// IPv4 enabled flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipv4_enabled: Option<bool>,
    /// IPv6 enabled flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipv6_enabled: Option<bool>,
    /// IPv4 nameservers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nameservers_v4: Option<Vec<String>>,
    /// IPv6 nameservers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nameservers_v6: Option<Vec<String>>,
}

impl Searchable for Network {
    fn search_keys(&self) -> Vec<&str> {
        let mut keys = vec![self.id.as_str()];
        keys.extend(self.name.as_deref());
        keys.extend(self.label.as_deref());
        keys
    }
}

/// Request payload to create or update a network.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NetworkConfig {
    /// Network label.
    #[validate(length(min = 1, message = "label is required"))]
    pub label: String,
    /// Make this the default network.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,
    /// Enable IPv4.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipv4_enabled: Option<bool>,
    /// IPv4 nameservers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nameservers_v4: Option<Vec<String>>,
    /// IPv4 CIDR block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cidr_v4: Option<String>,
    /// Enable IPv6.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipv6_enabled: Option<bool>,
    /// IPv6 nameservers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nameservers_v6: Option<Vec<String>>,
    /// Region code; the configured region is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl NetworkConfig {
    /// Config carrying only a label.
    #[must_use]
    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }
}

/// Result of a network create or update call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkResult {
    /// Network ID.
    pub id: String,
    /// Network label.
    pub label: String,
    /// Outcome, usually `success`.
    pub result: String,
}

/// Subnet within a private network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subnet {
    /// Subnet ID.
    pub id: String,
    /// Subnet name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Owning network ID.
    pub network_id: String,
    /// Subnet size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnet_size: Option<String>,
    /// Provisioning status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Searchable for Subnet {
    fn search_keys(&self) -> Vec<&str> {
        let mut keys = vec![self.id.as_str()];
        keys.extend(self.name.as_deref());
        keys
    }
}

/// Request payload to create a subnet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct SubnetConfig {
    /// Subnet name.
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
}

/// Route connecting a subnet to a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubnetRoute {
    /// Route ID.
    pub id: String,
    /// Subnet ID.
    pub subnet_id: String,
    /// Network ID.
    pub network_id: String,
    /// Attached resource ID.
    pub resource_id: String,
    /// Attached resource type, e.g. `instance`.
    pub resource_type: String,
}

/// Request payload to attach a subnet to a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CreateRoute {
    /// Resource ID.
    #[validate(length(min = 1, message = "resource_id is required"))]
    pub resource_id: String,
    /// Resource type, e.g. `instance`.
    #[validate(length(min = 1, message = "resource_type is required"))]
    pub resource_type: String,
}
