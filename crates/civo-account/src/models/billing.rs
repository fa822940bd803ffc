//! Audit actions, charges and quotas.

use chrono::{DateTime, SecondsFormat, Utc};
use civo_core::QueryParams;
use serde::{Deserialize, Serialize};

/// Entry in the account audit log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// Action ID.
    pub id: String,
    /// Account ID.
    pub account_id: String,
    /// Acting user.
    #[serde(default)]
    pub user_id: String,
    /// Action type.
    #[serde(rename = "type")]
    pub action_type: String,
    /// Free-form details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Related resource ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_id: Option<String>,
    /// Related resource type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_type: Option<String>,
    /// Whether this is a debug entry.
    #[serde(default)]
    pub debug: bool,
    /// Creation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Filters for listing actions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionListRequest {
    /// Page number.
    pub page: Option<u32>,
    /// Page size.
    pub per_page: Option<u32>,
    /// Acting user.
    pub user_id: Option<String>,
    /// Include debug entries.
    pub include_debug: Option<bool>,
    /// Resource ID.
    pub resource_id: Option<String>,
    /// Details substring.
    pub details: Option<String>,
    /// Related resource ID.
    pub related_id: Option<String>,
    /// Resource type.
    pub resource_type: Option<String>,
    /// Action type.
    pub action_type: Option<String>,
    /// Created at.
    pub created_at: Option<DateTime<Utc>>,
    /// Updated at.
    pub updated_at: Option<DateTime<Utc>>,
}

impl ActionListRequest {
    /// Encode the set filters as query parameters.
    #[must_use]
    pub fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query.push_opt("page", self.page);
        query.push_opt("per_page", self.per_page);
        query.push_opt("user_id", self.user_id.as_deref());
        query.push_opt("include_debug", self.include_debug);
        query.push_opt("resource_id", self.resource_id.as_deref());
        query.push_opt("details", self.details.as_deref());
        query.push_opt("related_id", self.related_id.as_deref());
        query.push_opt("resource_type", self.resource_type.as_deref());
        query.push_opt("action_type", self.action_type.as_deref());
        query.push_opt_with("created_at", self.created_at, rfc3339);
        query.push_opt_with("updated_at", self.updated_at, rfc3339);
        query
    }
}

/// Format a timestamp the way the API expects in query strings.
pub(crate) fn rfc3339(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Billed usage for one resource over a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Charge {
    /// Product code.
    pub code: String,
    /// Resource label.
    #[serde(default)]
    pub label: String,
    /// Period start.
    pub from: DateTime<Utc>,
    /// Period end.
    pub to: DateTime<Utc>,
    /// Billed hours.
    #[serde(default)]
    pub num_hours: u32,
    /// Billed storage in gigabytes.
    #[serde(default)]
    pub size_gb: u32,
}

/// Resource limits and current usage for the account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Quota {
    /// Quota ID.
    pub id: String,
    /// Default user ID.
    pub default_user_id: String,
    /// Default user email.
    pub default_user_email_address: String,
    /// Instance limit.
    pub instance_count_limit: u32,
    /// Instances in use.
    pub instance_count_usage: u32,
    /// CPU core limit.
    pub cpu_core_limit: u32,
    /// CPU cores in use.
    pub cpu_core_usage: u32,
    /// Memory limit in megabytes.
    pub ram_mb_limit: u32,
    /// Memory in use in megabytes.
    pub ram_mb_usage: u32,
    /// Disk limit in gigabytes.
    pub disk_gb_limit: u32,
    /// Disk in use in gigabytes.
    pub disk_gb_usage: u32,
    /// Volume limit.
    pub disk_volume_count_limit: u32,
    /// Volumes in use.
    pub disk_volume_count_usage: u32,
    /// Public IP limit.
    pub public_ip_address_limit: u32,
    /// Public IPs in use.
    pub public_ip_address_usage: u32,
    /// Network limit.
    pub network_count_limit: u32,
    /// Networks in use.
    pub network_count_usage: u32,
    /// Subnet limit.
    pub subnet_count_limit: u32,
    /// Subnets in use.
    pub subnet_count_usage: u32,
    /// Firewall limit.
    pub security_group_limit: u32,
    /// Firewalls in use.
    pub security_group_usage: u32,
    /// Firewall rule limit.
    pub security_group_rule_limit: u32,
    /// Firewall rules in use.
    pub security_group_rule_usage: u32,
    /// Load balancer limit.
    pub loadbalancer_count_limit: u32,
    /// Load balancers in use.
    pub loadbalancer_count_usage: u32,
    /// Object storage limit in gigabytes.
    pub objectstore_gb_limit: u32,
    /// Object storage in use in gigabytes.
    pub objectstore_gb_usage: u32,
    /// Database limit.
    pub database_count_limit: u32,
    /// Databases in use.
    pub database_count_usage: u32,
}

impl Quota {
    /// Instances that can still be created.
    #[must_use]
    pub const fn instances_remaining(&self) -> u32 {
        self.instance_count_limit.saturating_sub(self.instance_count_usage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn action_filters_skip_unset_fields() {
        let request = ActionListRequest {
            per_page: Some(50),
            include_debug: Some(false),
            resource_type: Some("instance".into()),
            created_at: Some(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()),
            ..Default::default()
        };

        assert_eq!(
            request.to_query().into_pairs(),
            vec![
                ("per_page", "50".to_string()),
                ("include_debug", "false".to_string()),
                ("resource_type", "instance".to_string()),
                ("created_at", "2024-03-01T00:00:00Z".to_string()),
            ]
        );
    }

    #[test]
    fn empty_filters_make_empty_query() {
        assert!(ActionListRequest::default().to_query().is_empty());
    }

    #[test]
    fn quota_remaining_never_underflows() {
        let quota = Quota {
            instance_count_limit: 4,
            instance_count_usage: 6,
            ..Default::default()
        };
        assert_eq!(quota.instances_remaining(), 0);
    }
}
