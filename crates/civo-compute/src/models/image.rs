//! Disk images and SSH keys.

use chrono::{DateTime, Utc};
use civo_core::Searchable;
use serde::{Deserialize, Serialize};

/// Disk image for launching instances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiskImage {
    /// Image ID.
    pub id: String,
    /// Image name, e.g. `ubuntu-focal`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Image version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Availability state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Distribution name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribution: Option<String>,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl DiskImage {
    /// Kubernetes node images are not offered for plain instances.
    #[must_use]
    pub fn is_k3s(&self) -> bool {
        self.name.as_deref().is_some_and(|name| name.contains("k3s"))
    }
}

impl Searchable for DiskImage {
    fn search_keys(&self) -> Vec<&str> {
        let mut keys = vec![self.id.as_str()];
        keys.extend(self.name.as_deref());
        keys
    }
}

/// Uploaded SSH public key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SshKey {
    /// Key ID.
    pub id: String,
    /// Key name.
    pub name: String,
    /// Key fingerprint.
    pub fingerprint: String,
    /// Public key material.
    #[serde(default)]
    pub public_key: String,
    /// Upload time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Searchable for SshKey {
    fn search_keys(&self) -> Vec<&str> {
        vec![self.id.as_str(), self.name.as_str()]
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct NewSshKey<'a> {
    pub(crate) name: &'a str,
    pub(crate) public_key: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct SshKeyName<'a> {
    pub(crate) name: &'a str,
}
