//! Node pool updates.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

/// Kubernetes node taint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Taint {
    /// Taint key.
    #[validate(length(min = 1, message = "taint key is required"))]
    pub key: String,
    /// Taint value.
    #[serde(default)]
    pub value: String,
    /// Effect, e.g. `NoSchedule`.
    #[validate(length(min = 1, message = "taint effect is required"))]
    pub effect: String,
}

/// Request payload to update a node pool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct KubernetesClusterPoolUpdateConfig {
    /// New node count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, message = "count must be at least 1"))]
    pub count: Option<u32>,
    /// New node size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "size must not be empty"))]
    pub size: Option<String>,
    /// Node labels.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    /// Node taints.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[validate(nested)]
    pub taints: Vec<Taint>,
    /// Whether nodes get public IPs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_ip_node_pool: Option<bool>,
    /// Region code; defaults to the configured region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}
