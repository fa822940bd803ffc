//! Managed databases and their backups.

use civo_core::Searchable;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Managed database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Database {
    /// Database ID.
    pub id: String,
    /// Database name.
    pub name: String,
    /// Node count.
    #[serde(default)]
    pub nodes: u32,
    /// Node size.
    #[serde(default)]
    pub size: String,
    /// Engine, e.g. `PostgreSQL`.
    #[serde(default)]
    pub software: String,
    /// Engine version.
    #[serde(default)]
    pub software_version: String,
    /// Public IPv4 address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_ipv4: Option<String>,
    /// Network ID.
    #[serde(default)]
    pub network_id: String,
    /// Firewall ID.
    #[serde(default)]
    pub firewall_id: String,
    /// Listening port.
    #[serde(default)]
    pub port: u16,
    /// Admin username.
    #[serde(default)]
    pub username: String,
    /// Admin password.
    #[serde(default)]
    pub password: String,
    /// Provisioning status.
    #[serde(default)]
    pub status: String,
}

impl Searchable for Database {
    fn search_keys(&self) -> Vec<&str> {
        vec![self.id.as_str(), self.name.as_str()]
    }
}

/// Request payload to create a database.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CreateDatabaseRequest {
    /// Database name.
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    /// Node size.
    #[validate(length(min = 1, message = "size is required"))]
    pub size: String,
    /// Engine.
    #[validate(length(min = 1, message = "software is required"))]
    pub software: String,
    /// Engine version; the default version when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub software_version: Option<String>,
    /// Network ID.
    #[validate(length(min = 1, message = "network_id is required"))]
    pub network_id: String,
    /// Node count.
    #[validate(range(min = 1, message = "nodes must be at least 1"))]
    pub nodes: u32,
    /// Existing firewall.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firewall_id: Option<String>,
    /// Rule set for a newly created firewall.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firewall_rule: Option<String>,
    /// Region code; defaults to the configured region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

/// Request payload to update a database.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UpdateDatabaseRequest {
    /// New name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    /// New node count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, message = "nodes must be at least 1"))]
    pub nodes: Option<u32>,
    /// New firewall.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firewall_id: Option<String>,
    /// Region code; defaults to the configured region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

/// One supported engine version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportedSoftwareVersion {
    /// Version string.
    pub software_version: String,
    /// Whether used when no version is requested.
    #[serde(default)]
    pub default: bool,
}

/// Request payload to restore a database from a backup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RestoreDatabaseRequest {
    /// Engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub software: Option<String>,
    /// Network ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_id: Option<String>,
    /// Backup name.
    #[validate(length(min = 1, message = "backup is required"))]
    pub backup: String,
    /// Region code; defaults to the configured region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

/// Backup schedule and snapshots of a database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseBackup {
    /// Schedule name.
    #[serde(default)]
    pub name: String,
    /// Database name.
    #[serde(default)]
    pub database_name: String,
    /// Database ID.
    pub database_id: String,
    /// Engine.
    #[serde(default)]
    pub software: String,
    /// Cron schedule.
    #[serde(default)]
    pub schedule: String,
    /// Number of backups retained.
    #[serde(default)]
    pub count: u32,
    /// Backup names.
    #[serde(default)]
    pub backups: Vec<String>,
}

/// Request payload to schedule backups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct DatabaseBackupCreateRequest {
    /// Schedule name.
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    /// Cron schedule.
    #[validate(length(min = 1, message = "schedule is required"))]
    pub schedule: String,
    /// Number of backups to retain.
    #[validate(range(min = 1, message = "count must be at least 1"))]
    pub count: u32,
    /// Region code; defaults to the configured region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

/// Request payload to change a backup schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct DatabaseBackupUpdateRequest {
    /// New schedule name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New cron schedule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "schedule must not be empty"))]
    pub schedule: Option<String>,
    /// New retention count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, message = "count must be at least 1"))]
    pub count: Option<u32>,
    /// Region code; defaults to the configured region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}
