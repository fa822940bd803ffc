//! Storage resources for the Civo API.
//!
//! Block volumes, object stores with their credentials, and managed
//! databases with backups.

#![deny(missing_docs)]

pub mod databases;
pub mod models;
pub mod objectstore_credentials;
pub mod objectstores;
pub mod volumes;

pub use databases::{DatabaseBackupsApi, DatabasesApi};
pub use objectstore_credentials::ObjectStoreCredentialsApi;
pub use objectstores::ObjectStoresApi;
pub use volumes::VolumesApi;

/// Convenient result alias sharing the `civo-core` error type.
pub type Result<T> = civo_core::Result<T>;
