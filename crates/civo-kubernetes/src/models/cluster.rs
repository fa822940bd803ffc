//! Kubernetes clusters and their nodes.

use chrono::{DateTime, Utc};
use civo_core::Searchable;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

/// Node or control-plane member of a cluster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KubernetesInstance {
    /// Instance ID.
    pub id: String,
    /// Hostname.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    /// Instance size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Region code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Boot source type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,
    /// Boot source ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
    /// Login user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_user: Option<String>,
    /// Login password.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_password: Option<String>,
    /// Provisioning status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Firewall ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firewall_id: Option<String>,
    /// Public IP address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_ip: Option<String>,
    /// CPU cores.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu_cores: Option<u32>,
    /// Memory in megabytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ram_mb: Option<u32>,
    /// Disk in gigabytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disk_gb: Option<u32>,
    /// Tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Creation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Stats daemon token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub civostatsd_token: Option<String>,
}

impl Searchable for KubernetesInstance {
    fn search_keys(&self) -> Vec<&str> {
        let mut keys = vec![self.id.as_str()];
        keys.extend(self.hostname.as_deref());
        keys
    }
}

/// Node pool inside a cluster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KubernetesPool {
    /// Pool ID.
    pub id: String,
    /// Node count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    /// Node size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Hostnames of the pool's nodes.
    #[serde(default)]
    pub instance_names: Vec<String>,
    /// The pool's nodes.
    #[serde(default)]
    pub instances: Vec<KubernetesInstance>,
    /// Node labels.
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
    /// Node taints.
    #[serde(default)]
    pub taints: Vec<String>,
    /// Whether nodes get public IPs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_ip_node_pool: Option<bool>,
}

/// Marketplace application installed in a cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KubernetesInstalledApplication {
    /// Application slug.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application: Option<String>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Installed version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Applications this one depends on.
    #[serde(default)]
    pub dependencies: Vec<String>,
    /// Maintainer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintainer: Option<String>,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Post-install notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_install: Option<String>,
    /// Whether installation finished.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installed: Option<bool>,
    /// Project URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Last update time as reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    /// Logo URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Selected plan.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    /// Plan configuration values.
    #[serde(default)]
    pub configuration: BTreeMap<String, String>,
}

/// Status condition reported for a cluster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// Condition type.
    #[serde(rename = "type")]
    pub condition_type: String,
    /// Condition status.
    pub status: String,
    /// Whether the condition is in sync.
    #[serde(default)]
    pub synced: bool,
    /// Last transition time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_transition_time: Option<DateTime<Utc>>,
    /// Machine-readable reason.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Human-readable message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Pool the provider requires for a cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredPool {
    /// Pool ID.
    pub id: String,
    /// Node size.
    pub size: String,
    /// Node count.
    pub count: u32,
    /// Node labels.
    #[serde(default, deserialize_with = "null_as_default")]
    pub labels: BTreeMap<String, String>,
    /// Node taints.
    #[serde(default, deserialize_with = "null_as_default")]
    pub taints: Vec<String>,
    /// Whether nodes get public IPs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_ip_node_pool: Option<bool>,
}

/// Kubernetes cluster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KubernetesCluster {
    /// Cluster ID.
    pub id: String,
    /// Cluster name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Provider-generated name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_name: Option<String>,
    /// Cluster version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Provisioning status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Whether the cluster is ready.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ready: Option<bool>,
    /// Distribution, e.g. `k3s` or `talos`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_type: Option<String>,
    /// Requested node count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_target_nodes: Option<u32>,
    /// Requested node size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_nodes_size: Option<String>,
    /// Build completion time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub built_at: Option<DateTime<Utc>>,
    /// Kubeconfig document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kubeconfig: Option<String>,
    /// Kubernetes version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kubernetes_version: Option<String>,
    /// API server endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_endpoint: Option<String>,
    /// Control-plane IP.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub master_ip: Option<String>,
    /// DNS name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns_entry: Option<String>,
    /// Version available for upgrade.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upgrade_available_to: Option<String>,
    /// Whether this is a legacy cluster.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legacy: Option<bool>,
    /// Network ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_id: Option<String>,
    /// Provider namespace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Creation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Cluster nodes.
    #[serde(default)]
    pub instances: Vec<KubernetesInstance>,
    /// Node pools.
    #[serde(default)]
    pub pools: Vec<KubernetesPool>,
    /// Pools the provider requires.
    #[serde(default, deserialize_with = "null_as_default")]
    pub required_pools: Vec<RequiredPool>,
    /// Installed marketplace applications.
    #[serde(default, deserialize_with = "null_as_default")]
    pub installed_applications: Vec<KubernetesInstalledApplication>,
    /// Firewall ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firewall_id: Option<String>,
    /// CNI plugin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cni_plugin: Option<String>,
    /// Whether the cloud controller manager is installed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ccm_installed: Option<String>,
    /// Status conditions.
    #[serde(default)]
    pub conditions: Vec<Condition>,
}

impl Searchable for KubernetesCluster {
    fn search_keys(&self) -> Vec<&str> {
        let mut keys = vec![self.id.as_str()];
        keys.extend(self.name.as_deref());
        keys
    }
}

/// Pool definition used when creating a cluster or adding a pool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct KubernetesClusterPoolConfig {
    /// Region code; defaults to the configured region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Pool ID; generated by the provider when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Node count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, message = "count must be at least 1"))]
    pub count: Option<u32>,
    /// Node size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "size must not be empty"))]
    pub size: Option<String>,
    /// Whether nodes get public IPs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_ip_node_pool: Option<bool>,
}

/// Request payload to create or update a cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct KubernetesClusterConfig {
    /// Cluster name; required on create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    /// Region code; defaults to the configured region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Distribution, e.g. `k3s` or `talos`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_type: Option<String>,
    /// Node count for the default pool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, message = "num_target_nodes must be at least 1"))]
    pub num_target_nodes: Option<u32>,
    /// Node size for the default pool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_nodes_size: Option<String>,
    /// Kubernetes version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kubernetes_version: Option<String>,
    /// Hostname of a node to remove when scaling down.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_destroy: Option<String>,
    /// Network ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_id: Option<String>,
    /// Space-separated tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    /// Node pools.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[validate(nested)]
    pub pools: Vec<KubernetesClusterPoolConfig>,
    /// Comma-separated marketplace applications to install.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applications: Option<String>,
    /// Existing firewall to attach to nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_firewall: Option<String>,
    /// Rule set for a newly created firewall.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firewall_rule: Option<String>,
    /// CNI plugin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cni_plugin: Option<String>,
}

/// One configuration value of a marketplace plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KubernetesPlanConfiguration {
    /// Value.
    pub value: String,
}

/// Installation plan offered by a marketplace application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KubernetesMarketplacePlan {
    /// Plan label.
    pub label: String,
    /// Configuration values keyed by name.
    #[serde(default)]
    pub configuration: BTreeMap<String, KubernetesPlanConfiguration>,
}

/// Application available in the Kubernetes marketplace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KubernetesMarketplaceApplication {
    /// Application slug.
    pub name: String,
    /// Display title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Version.
    pub version: String,
    /// Whether installed by default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,
    /// Applications this one depends on.
    #[serde(default, deserialize_with = "null_as_default")]
    pub dependencies: Vec<String>,
    /// Maintainer.
    #[serde(default)]
    pub maintainer: String,
    /// Description.
    #[serde(default)]
    pub description: String,
    /// Post-install notes.
    #[serde(default)]
    pub post_install: String,
    /// Project URL.
    #[serde(default)]
    pub url: String,
    /// Category.
    #[serde(default)]
    pub category: String,
    /// Installation plans.
    #[serde(default, deserialize_with = "null_as_default")]
    pub plans: Vec<KubernetesMarketplacePlan>,
}

/// Kubernetes version offered for new clusters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KubernetesVersion {
    /// Display label.
    pub label: String,
    /// Version string.
    pub version: String,
    /// Release channel, e.g. `stable`.
    #[serde(rename = "type")]
    pub version_type: String,
    /// Whether used when no version is requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,
    /// Distribution this version belongs to.
    #[serde(
        rename = "clusterType",
        alias = "cluster_type",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub cluster_type: Option<String>,
}

/// Treat an explicit JSON `null` like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
