//! DNS domains and records.

use chrono::{DateTime, Utc};
use civo_core::Searchable;
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Domain registered with Civo DNS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsDomain {
    /// Domain ID.
    pub id: String,
    /// Owning account ID.
    pub account_id: String,
    /// Domain name.
    pub name: String,
}

impl Searchable for DnsDomain {
    fn search_keys(&self) -> Vec<&str> {
        vec![self.id.as_str(), self.name.as_str()]
    }
}

/// Supported record types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DnsRecordType {
    /// IPv4 address record
    #[serde(rename = "A", alias = "a")]
    A,
    /// Canonical name record
    #[serde(rename = "CNAME", alias = "cname")]
    Cname,
    /// Mail exchange record
    #[serde(rename = "MX", alias = "mx")]
    Mx,
    /// Service locator record
    #[serde(rename = "SRV", alias = "srv")]
    Srv,
    /// Text record
    #[serde(rename = "TXT", alias = "txt")]
    Txt,
}

impl fmt::Display for DnsRecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::A => "A",
            Self::Cname => "CNAME",
            Self::Mx => "MX",
            Self::Srv => "SRV",
            Self::Txt => "TXT",
        };
        f.write_str(name)
    }
}

/// DNS record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecord {
    /// Record ID.
    pub id: String,
    /// Owning account ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    /// Owning domain ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_id: Option<String>,
    /// Record name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Record value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Record type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub record_type: Option<DnsRecordType>,
    /// Priority for MX and SRV records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    /// Time to live in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    /// Creation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Request payload to create or update a DNS record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct DnsRecordConfig {
    /// Record type.
    #[serde(rename = "type")]
    pub record_type: DnsRecordType,
    /// Record name, `@` for the apex.
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    /// Record value.
    #[validate(length(min = 1, message = "value is required"))]
    pub value: String,
    /// Priority for MX and SRV records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    /// Time to live in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
}

#[derive(Debug, Serialize)]
pub(crate) struct DomainName<'a> {
    pub(crate) name: &'a str,
}
