//! Block storage volumes.

use chrono::{DateTime, Utc};
use civo_core::Searchable;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Attachable block storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Volume {
    /// Volume ID.
    pub id: String,
    /// Volume name.
    pub name: String,
    /// Attached instance ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    /// Owning Kubernetes cluster ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_id: Option<String>,
    /// Network ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_id: Option<String>,
    /// Mount point on the attached instance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mountpoint: Option<String>,
    /// Provisioning status.
    #[serde(default)]
    pub status: String,
    /// Size in gigabytes.
    pub size_gb: u32,
    /// Whether the volume is bootable.
    #[serde(default)]
    pub bootable: bool,
    /// Creation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Volume {
    /// Owning cluster, ignoring the empty string the API uses for none.
    #[must_use]
    pub fn cluster(&self) -> Option<&str> {
        self.cluster_id.as_deref().filter(|id| !id.is_empty())
    }
}

impl Searchable for Volume {
    fn search_keys(&self) -> Vec<&str> {
        vec![self.id.as_str(), self.name.as_str()]
    }
}

/// Result of creating a volume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeResult {
    /// Volume ID.
    pub id: String,
    /// Volume name.
    pub name: String,
    /// Outcome, e.g. `success`.
    pub result: String,
}

/// Request payload to create a volume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct VolumeConfig {
    /// Volume name.
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    /// Kubernetes namespace for cluster volumes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Owning Kubernetes cluster.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_id: Option<String>,
    /// Network ID.
    #[validate(length(min = 1, message = "network_id is required"))]
    pub network_id: String,
    /// Region code; defaults to the configured region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Size in gigabytes.
    #[validate(range(min = 1, message = "size_gb must be at least 1"))]
    pub size_gb: u32,
    /// Whether the volume is bootable.
    #[serde(default)]
    pub bootable: bool,
}
