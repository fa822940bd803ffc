//! Object store credential endpoints.

use crate::models::{
    CreateObjectStoreCredentialRequest, ObjectStoreCredential, UpdateObjectStoreCredentialRequest,
};
use crate::Result;
use async_trait::async_trait;
use civo_core::find::{find, Findable};
use civo_core::{PaginatedList, Route, SimpleResponse, Transport};
use validator::Validate;

/// Client for `/objectstore/credentials`.
#[derive(Debug, Clone)]
pub struct ObjectStoreCredentialsApi {
    transport: Transport,
}

impl ObjectStoreCredentialsApi {
    /// Create the API over a shared transport.
    #[must_use]
    pub const fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// List credentials.
    pub async fn list(&self) -> Result<PaginatedList<ObjectStoreCredential>> {
        self.transport
            .get(Route::new("/objectstore/credentials"))
            .await
    }

    /// Fetch a credential.
    pub async fn get(&self, id: &str) -> Result<ObjectStoreCredential> {
        self.transport
            .get(Route::new("/objectstore/credentials/:id").param("id", id))
            .await
    }

    /// First credential whose ID, name or access key contains `search`.
    pub async fn find(&self, search: &str) -> Result<ObjectStoreCredential> {
        find(self, search).await
    }

    /// Create a credential.
    pub async fn create(
        &self,
        request: &CreateObjectStoreCredentialRequest,
    ) -> Result<ObjectStoreCredential> {
        request.validate()?;
        let mut body = request.clone();
        self.transport.fill_region(&mut body.region);

        self.transport
            .post(Route::new("/objectstore/credentials"), &body)
            .await
    }

    /// Update a credential.
    pub async fn update(
        &self,
        id: &str,
        request: &UpdateObjectStoreCredentialRequest,
    ) -> Result<ObjectStoreCredential> {
        request.validate()?;
        let mut body = request.clone();
        self.transport.fill_region(&mut body.region);

        self.transport
            .put(
                Route::new("/objectstore/credentials/:id").param("id", id),
                &body,
            )
            .await
    }

    /// Delete a credential.
    pub async fn destroy(&self, id: &str) -> Result<SimpleResponse> {
        self.transport
            .delete(Route::new("/objectstore/credentials/:id").param("id", id))
            .await
    }
}

#[async_trait]
impl Findable for ObjectStoreCredentialsApi {
    type Item = ObjectStoreCredential;

    async fn list_items(&self) -> Result<Vec<ObjectStoreCredential>> {
        Ok(self.list().await?.items)
    }
}
