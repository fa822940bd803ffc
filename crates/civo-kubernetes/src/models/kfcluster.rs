//! Clusters with Kubeflow installed.

use chrono::{DateTime, Utc};
use civo_core::Searchable;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Kubeflow cluster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KfCluster {
    /// Cluster ID.
    pub id: String,
    /// Cluster name.
    pub name: String,
    /// Network ID.
    pub network_id: String,
    /// Firewall ID.
    pub firewall_id: String,
    /// Cluster size.
    pub size: String,
    /// Kubeflow readiness as reported.
    #[serde(default)]
    pub kubeflow_ready: String,
    /// Kubeflow dashboard URL.
    #[serde(default)]
    pub dashboard_url: String,
    /// Creation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Searchable for KfCluster {
    fn search_keys(&self) -> Vec<&str> {
        vec![self.id.as_str(), self.name.as_str()]
    }
}

/// Request payload to create a Kubeflow cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CreateKfClusterRequest {
    /// Cluster name.
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    /// Network ID.
    #[validate(length(min = 1, message = "network_id is required"))]
    pub network_id: String,
    /// Firewall ID.
    #[validate(length(min = 1, message = "firewall_id is required"))]
    pub firewall_id: String,
    /// Cluster size.
    #[validate(length(min = 1, message = "size is required"))]
    pub size: String,
    /// Region code; defaults to the configured region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

/// Request payload to rename a Kubeflow cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UpdateKfClusterRequest {
    /// New name.
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    /// Region code; defaults to the configured region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}
