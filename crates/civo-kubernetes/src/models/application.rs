//! Platform applications.

use civo_core::Searchable;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Environment variable set on an application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvVar {
    /// Variable name.
    pub name: String,
    /// Variable value.
    pub value: String,
}

/// Process count for one process type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessInfo {
    /// Process type, e.g. `web`.
    pub process_type: String,
    /// Number of processes.
    pub process_count: u32,
}

/// Deployed application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    /// Application ID.
    pub id: String,
    /// Application name.
    pub name: String,
    /// Network ID.
    pub network_id: String,
    /// Description.
    #[serde(default)]
    pub description: String,
    /// Container image.
    #[serde(default)]
    pub image: String,
    /// Size.
    pub size: String,
    /// Process counts.
    #[serde(default)]
    pub process_info: Vec<ProcessInfo>,
    /// Custom domains.
    #[serde(default)]
    pub domains: Vec<String>,
    /// SSH keys with access.
    #[serde(default)]
    pub ssh_key_ids: Vec<String>,
    /// Environment.
    #[serde(default)]
    pub config: Vec<EnvVar>,
    /// Deployment status.
    #[serde(default)]
    pub status: String,
}

impl Searchable for Application {
    fn search_keys(&self) -> Vec<&str> {
        vec![self.id.as_str(), self.name.as_str()]
    }
}

/// Request payload to create an application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ApplicationConfig {
    /// Application name.
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    /// Network ID.
    #[validate(length(min = 1, message = "network_id is required"))]
    pub network_id: String,
    /// Description.
    #[serde(default)]
    pub description: String,
    /// Size.
    #[validate(length(min = 1, message = "size is required"))]
    pub size: String,
    /// SSH keys with access.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ssh_key_ids: Vec<String>,
    /// Region code; defaults to the configured region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

/// Request payload to update an application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UpdateApplicationRequest {
    /// Application name.
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    /// Whether advanced settings are enabled.
    #[serde(default)]
    pub advanced: bool,
    /// Container image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Process counts.
    #[serde(default)]
    pub process_info: Vec<ProcessInfo>,
    /// Size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// SSH keys with access.
    #[serde(default)]
    pub ssh_key_ids: Vec<String>,
    /// Environment.
    #[serde(default)]
    pub config: Vec<EnvVar>,
    /// Custom domains.
    #[serde(default)]
    pub domains: Vec<String>,
}
