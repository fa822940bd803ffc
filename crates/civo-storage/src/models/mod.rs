//! Data models for storage resources.

mod database;
mod objectstore;
mod volume;

pub use database::{
    CreateDatabaseRequest, Database, DatabaseBackup, DatabaseBackupCreateRequest,
    DatabaseBackupUpdateRequest, RestoreDatabaseRequest, SupportedSoftwareVersion,
    UpdateDatabaseRequest,
};
pub use objectstore::{
    BucketOwner, CreateObjectStoreCredentialRequest, CreateObjectStoreRequest, ObjectStore,
    ObjectStoreCredential, UpdateObjectStoreCredentialRequest, UpdateObjectStoreRequest,
};
pub use volume::{Volume, VolumeConfig, VolumeResult};
