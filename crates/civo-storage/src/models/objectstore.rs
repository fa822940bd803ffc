//! Object storage buckets and their credentials.

use civo_core::Searchable;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Credential that owns a bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketOwner {
    /// Access key ID.
    pub access_key_id: String,
    /// Credential name.
    pub name: String,
    /// Credential ID.
    pub credential_id: String,
}

/// Object store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectStore {
    /// Object store ID.
    pub id: String,
    /// Bucket name.
    pub name: String,
    /// Capacity in gigabytes.
    pub max_size: u32,
    /// Owning credential.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_info: Option<BucketOwner>,
    /// S3 endpoint host.
    #[serde(default)]
    pub objectstore_endpoint: String,
    /// Provisioning status.
    #[serde(default)]
    pub status: String,
}

impl Searchable for ObjectStore {
    fn search_keys(&self) -> Vec<&str> {
        vec![self.id.as_str(), self.name.as_str()]
    }
}

/// Request payload to create an object store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CreateObjectStoreRequest {
    /// Bucket name.
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    /// Capacity in gigabytes.
    #[validate(range(min = 1, message = "max_size_gb must be at least 1"))]
    pub max_size_gb: u32,
    /// Access key of an existing credential; one is created when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_key_id: Option<String>,
    /// Region code; defaults to the configured region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

/// Request payload to resize an object store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UpdateObjectStoreRequest {
    /// New capacity in gigabytes.
    #[validate(range(min = 1, message = "max_size_gb must be at least 1"))]
    pub max_size_gb: u32,
    /// Region code; defaults to the configured region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

/// Object store access credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectStoreCredential {
    /// Credential ID.
    pub id: String,
    /// Credential name.
    pub name: String,
    /// Access key ID.
    pub access_key_id: String,
    /// Secret access key.
    #[serde(default)]
    pub secret_access_key_id: String,
    /// Quota in gigabytes.
    #[serde(default)]
    pub max_size_gb: u32,
    /// Whether the credential is suspended.
    #[serde(default)]
    pub suspended: bool,
    /// Provisioning status.
    #[serde(default)]
    pub status: String,
}

impl Searchable for ObjectStoreCredential {
    fn search_keys(&self) -> Vec<&str> {
        vec![
            self.id.as_str(),
            self.name.as_str(),
            self.access_key_id.as_str(),
        ]
    }
}

/// Request payload to create a credential.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CreateObjectStoreCredentialRequest {
    /// Credential name.
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    /// Access key ID; generated when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_key_id: Option<String>,
    /// Secret access key; generated when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_access_key_id: Option<String>,
    /// Quota in gigabytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_size_gb: Option<u32>,
    /// Region code; defaults to the configured region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

/// Request payload to update a credential.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UpdateObjectStoreCredentialRequest {
    /// New access key ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "access_key_id must not be empty"))]
    pub access_key_id: Option<String>,
    /// New secret access key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "secret_access_key_id must not be empty"))]
    pub secret_access_key_id: Option<String>,
    /// New quota in gigabytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_size_gb: Option<u32>,
    /// Region code; defaults to the configured region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}
