//! Compute instances.

use chrono::{DateTime, Utc};
use civo_core::Searchable;
use civo_network::models::Subnet;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Compute instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    /// Instance ID.
    pub id: String,
    /// Backing OpenStack server ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openstack_server_id: Option<String>,
    /// Hostname.
    #[serde(default)]
    pub hostname: String,
    /// Reverse DNS name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reverse_dns: Option<String>,
    /// Size slug, e.g. `g3.medium`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Region code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Network ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_id: Option<String>,
    /// Private IPv4 address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_ip: Option<String>,
    /// Public IPv4 address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_ip: Option<String>,
    /// IPv6 address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipv6: Option<String>,
    /// Pseudo IP used for NAT.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pseudo_ip: Option<String>,
    /// Disk image ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    /// Source type, e.g. `diskimage`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,
    /// Source ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
    /// Snapshot the instance was built from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_id: Option<String>,
    /// Initial login user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_user: Option<String>,
    /// Initial login password.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_password: Option<String>,
    /// Installed SSH public key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssh_key: Option<String>,
    /// Installed SSH key ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssh_key_id: Option<String>,
    /// Lifecycle status, e.g. `ACTIVE`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Free-form notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Firewall ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firewall_id: Option<String>,
    /// Tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Stats daemon token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub civostatsd_token: Option<String>,
    /// Latest stats sample.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub civostatsd_stats: Option<String>,
    /// Per-minute stats samples.
    #[serde(default)]
    pub civostatsd_stats_per_minute: Vec<String>,
    /// Per-hour stats samples.
    #[serde(default)]
    pub civostatsd_stats_per_hour: Vec<String>,
    /// Backing OpenStack image ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openstack_image_id: Option<String>,
    /// Rescue mode password.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rescue_password: Option<String>,
    /// Whether the root disk is a volume.
    #[serde(default)]
    pub volume_backed: bool,
    /// CPU cores.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu_cores: Option<u32>,
    /// Memory in MB.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ram_mb: Option<u32>,
    /// Disk in GB.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disk_gb: Option<u32>,
    /// GPU count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpu_count: Option<u32>,
    /// GPU model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpu_type: Option<String>,
    /// Initialisation script.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
    /// Creation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Reserved IP ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reserved_ip_id: Option<String>,
    /// Reserved IP name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reserved_ip_name: Option<String>,
    /// Reserved IP address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reserved_ip: Option<String>,
    /// Attached subnets.
    #[serde(default)]
    pub subnets: Vec<Subnet>,
}

impl Searchable for Instance {
    fn search_keys(&self) -> Vec<&str> {
        vec![self.id.as_str(), self.hostname.as_str()]
    }
}

/// Request payload to create an instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct InstanceConfig {
    /// Number of instances to create.
    #[validate(range(min = 1))]
    pub count: u32,
    /// Hostname.
    #[validate(length(min = 1, message = "hostname is required"))]
    pub hostname: String,
    /// Reverse DNS name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reverse_dns: Option<String>,
    /// Size slug.
    #[validate(length(min = 1, message = "size is required"))]
    pub size: String,
    /// Region code; the configured region is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// `create`, `none` or `move_ip_from:<id>`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_ip: Option<String>,
    /// Network ID.
    #[validate(length(min = 1, message = "network_id is required"))]
    pub network_id: String,
    /// Disk image ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    /// Snapshot ID, instead of a disk image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_id: Option<String>,
    /// Initial login user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_user: Option<String>,
    /// SSH key ID to install.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssh_key_id: Option<String>,
    /// Initialisation script.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
    /// Tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Firewall ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firewall_id: Option<String>,
}

/// Body of `PUT /instances/:id`.
#[derive(Debug, Serialize)]
pub(crate) struct InstanceUpdate<'a> {
    pub(crate) hostname: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) reverse_dns: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) notes: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) notes_delete: Option<&'static str>,
    pub(crate) region: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) public_ip: Option<&'a str>,
    pub(crate) subnets: &'a [Subnet],
}

impl<'a> InstanceUpdate<'a> {
    pub(crate) fn new(instance: &'a Instance, region: &'a str) -> Self {
        let notes = instance.notes.as_deref().filter(|notes| !notes.is_empty());
        Self {
            hostname: &instance.hostname,
            reverse_dns: instance.reverse_dns.as_deref(),
            notes,
            notes_delete: notes.is_none().then_some("true"),
            region,
            public_ip: instance.public_ip.as_deref(),
            subnets: &instance.subnets,
        }
    }
}
