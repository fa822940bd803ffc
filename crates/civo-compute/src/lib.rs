//! Compute resources for the Civo API.
//!
//! Regions, instances, disk images, and SSH keys. Every API shares a
//! [`civo_core::Transport`].

#![deny(missing_docs)]

pub mod disk_images;
pub mod instances;
pub mod models;
pub mod regions;
pub mod ssh_keys;

pub use disk_images::DiskImagesApi;
pub use instances::InstancesApi;
pub use regions::RegionsApi;
pub use ssh_keys::SshKeysApi;

/// Convenient result alias sharing the `civo-core` error type.
pub type Result<T> = civo_core::Result<T>;
