//! Reserved IP addresses.

use civo_core::Searchable;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Resource a reserved IP is assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignedTo {
    /// Resource ID.
    pub id: String,
    /// `instance` or `loadbalancer`.
    #[serde(rename = "type")]
    pub resource_type: String,
    /// Resource name.
    pub name: String,
}

/// Reserved IP address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ip {
    /// Reserved IP ID.
    pub id: String,
    /// Name; defaults to the address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    /// Current assignment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<AssignedTo>,
}

impl Searchable for Ip {
    fn search_keys(&self) -> Vec<&str> {
        let mut keys = vec![self.id.as_str()];
        keys.extend(self.name.as_deref());
        keys.extend(self.ip.as_deref());
        keys
    }
}

/// Request payload to reserve an IP.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CreateIpRequest {
    /// Name; the address is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Region code; the configured region is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

/// Request payload to rename a reserved IP.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UpdateIpRequest {
    /// New name.
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    /// Region code; the configured region is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

/// Action performed on a reserved IP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IpActionKind {
    /// Assign to a resource
    Assign,
    /// Release from its resource
    Unassign,
}

/// Body of `POST /ips/:id/actions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpAction {
    /// Action to perform.
    pub action: IpActionKind,
    /// Target resource ID for assignments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assign_to_id: Option<String>,
    /// Target resource type for assignments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assign_to_type: Option<String>,
    /// Region code.
    pub region: String,
}
