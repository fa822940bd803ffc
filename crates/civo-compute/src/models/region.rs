//! Datacenter regions.

use civo_core::Searchable;
use serde::{Deserialize, Serialize};

/// Services a region offers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionFeatures {
    /// Compute instances.
    #[serde(default)]
    pub iaas: bool,
    /// Managed Kubernetes.
    #[serde(default)]
    pub kubernetes: bool,
    /// Object storage.
    #[serde(default)]
    pub object_store: bool,
    /// Load balancers.
    #[serde(default)]
    pub loadbalancer: bool,
    /// Managed databases.
    #[serde(default)]
    pub dbaas: bool,
    /// Block volumes.
    #[serde(default)]
    pub volume: bool,
    /// Applications platform.
    #[serde(default)]
    pub paas: bool,
    /// Kubeflow.
    #[serde(default)]
    pub kfaas: bool,
    /// Public IP node pools.
    #[serde(default)]
    pub public_ip_node_pools: bool,
}

/// Datacenter region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// Region code, e.g. `LON1`.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Underlying platform type.
    #[serde(rename = "type")]
    pub region_type: String,
    /// Whether the region is out of capacity.
    pub out_of_capacity: bool,
    /// ISO country code.
    pub country: String,
    /// Country name.
    pub country_name: String,
    /// Available services.
    pub features: RegionFeatures,
    /// Whether this is the account's default region.
    pub default: bool,
}

impl Searchable for Region {
    fn search_keys(&self) -> Vec<&str> {
        vec![self.code.as_str(), self.name.as_str()]
    }
}
