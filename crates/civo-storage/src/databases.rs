//! Managed database and backup endpoints.

use crate::models::{
    CreateDatabaseRequest, Database, DatabaseBackup, DatabaseBackupCreateRequest,
    DatabaseBackupUpdateRequest, RestoreDatabaseRequest, SupportedSoftwareVersion,
    UpdateDatabaseRequest,
};
use crate::Result;
use async_trait::async_trait;
use civo_core::find::{find, Findable};
use civo_core::{PaginatedList, Route, SimpleResponse, Transport};
use std::collections::BTreeMap;
use tracing::info;
use validator::Validate;

/// Client for `/databases`.
#[derive(Debug, Clone)]
pub struct DatabasesApi {
    transport: Transport,
}

impl DatabasesApi {
    /// Create the API over a shared transport.
    #[must_use]
    pub const fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// List databases.
    pub async fn list(&self) -> Result<PaginatedList<Database>> {
        self.transport.get(Route::new("/databases")).await
    }

    /// Fetch a database.
    pub async fn get(&self, id: &str) -> Result<Database> {
        self.transport
            .get(Route::new("/databases/:id").param("id", id))
            .await
    }

    /// Delete a database.
    pub async fn destroy(&self, id: &str) -> Result<SimpleResponse> {
        info!(database = id, "Destroying database");
        self.transport
            .delete(Route::new("/databases/:id").param("id", id))
            .await
    }

    /// Create a database.
    pub async fn create(&self, request: &CreateDatabaseRequest) -> Result<Database> {
        request.validate()?;
        let mut body = request.clone();
        self.transport.fill_region(&mut body.region);

        info!(name = %body.name, software = %body.software, nodes = body.nodes, "Creating database");
        self.transport.post(Route::new("/databases"), &body).await
    }

    /// Update a database.
    pub async fn update(&self, id: &str, request: &UpdateDatabaseRequest) -> Result<Database> {
        request.validate()?;
        let mut body = request.clone();
        self.transport.fill_region(&mut body.region);

        self.transport
            .put(Route::new("/databases/:id").param("id", id), &body)
            .await
    }

    /// First database whose ID or name contains `search`.
    pub async fn find(&self, search: &str) -> Result<Database> {
        find(self, search).await
    }

    /// Supported versions keyed by engine name.
    pub async fn list_versions(&self) -> Result<BTreeMap<String, Vec<SupportedSoftwareVersion>>> {
        self.transport.get(Route::new("/databases/versions")).await
    }

    /// Restore a database from one of its backups.
    pub async fn restore(&self, id: &str, request: &RestoreDatabaseRequest) -> Result<SimpleResponse> {
        request.validate()?;
        let mut body = request.clone();
        self.transport.fill_region(&mut body.region);

        info!(database = id, backup = %body.backup, "Restoring database");
        self.transport
            .post(Route::new("/databases/:id/restore").param("id", id), &body)
            .await
    }
}

#[async_trait]
impl Findable for DatabasesApi {
    type Item = Database;

    async fn list_items(&self) -> Result<Vec<Database>> {
        Ok(self.list().await?.items)
    }
}

/// Client for `/databases/:id/backups`.
#[derive(Debug, Clone)]
pub struct DatabaseBackupsApi {
    transport: Transport,
}

impl DatabaseBackupsApi {
    /// Create the API over a shared transport.
    #[must_use]
    pub const fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Backup schedule and snapshots of a database.
    pub async fn list(&self, database_id: &str) -> Result<DatabaseBackup> {
        self.transport.get(backups_route(database_id)).await
    }

    /// Schedule backups.
    pub async fn create(
        &self,
        database_id: &str,
        request: &DatabaseBackupCreateRequest,
    ) -> Result<DatabaseBackup> {
        request.validate()?;
        let mut body = request.clone();
        self.transport.fill_region(&mut body.region);

        self.transport.post(backups_route(database_id), &body).await
    }

    /// Change the backup schedule.
    pub async fn update(
        &self,
        database_id: &str,
        request: &DatabaseBackupUpdateRequest,
    ) -> Result<DatabaseBackup> {
        request.validate()?;
        let mut body = request.clone();
        self.transport.fill_region(&mut body.region);

        self.transport.put(backups_route(database_id), &body).await
    }
}

fn backups_route(database_id: &str) -> Route {
    Route::new("/databases/:database_id/backups").param("database_id", database_id)
}
