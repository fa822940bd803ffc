//! Data models for compute resources.

mod image;
mod instance;
mod region;

pub use image::{DiskImage, SshKey};
pub(crate) use image::{NewSshKey, SshKeyName};
pub(crate) use instance::InstanceUpdate;
pub use instance::{Instance, InstanceConfig};
pub use region::{Region, RegionFeatures};
