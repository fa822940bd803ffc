//! Kubeflow cluster endpoints.

use crate::models::{CreateKfClusterRequest, KfCluster, UpdateKfClusterRequest};
use crate::Result;
use async_trait::async_trait;
use civo_core::find::{find, Findable};
use civo_core::{PaginatedList, Route, SimpleResponse, Transport};
use tracing::info;
use validator::Validate;

/// Client for `/kfclusters`.
#[derive(Debug, Clone)]
pub struct KfClustersApi {
    transport: Transport,
}

impl KfClustersApi {
    /// Create the API over a shared transport.
    #[must_use]
    pub const fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// List Kubeflow clusters.
    pub async fn list(&self) -> Result<PaginatedList<KfCluster>> {
        self.transport.get(Route::new("/kfclusters")).await
    }

    /// Fetch a Kubeflow cluster.
    pub async fn get(&self, id: &str) -> Result<KfCluster> {
        self.transport
            .get(Route::new("/kfclusters/:id").param("id", id))
            .await
    }

    /// First Kubeflow cluster whose ID or name contains `search`.
    pub async fn find(&self, search: &str) -> Result<KfCluster> {
        find(self, search).await
    }

    /// Create a Kubeflow cluster.
    pub async fn create(&self, request: &CreateKfClusterRequest) -> Result<KfCluster> {
        request.validate()?;
        let mut body = request.clone();
        self.transport.fill_region(&mut body.region);

        info!(name = %body.name, size = %body.size, "Creating Kubeflow cluster");
        self.transport.post(Route::new("/kfclusters"), &body).await
    }

    /// Rename a Kubeflow cluster.
    pub async fn update(&self, id: &str, request: &UpdateKfClusterRequest) -> Result<KfCluster> {
        request.validate()?;
        let mut body = request.clone();
        self.transport.fill_region(&mut body.region);

        self.transport
            .put(Route::new("/kfclusters/:id").param("id", id), &body)
            .await
    }

    /// Delete a Kubeflow cluster.
    pub async fn destroy(&self, id: &str) -> Result<SimpleResponse> {
        self.transport
            .delete(Route::new("/kfclusters/:id").param("id", id))
            .await
    }
}

#[async_trait]
impl Findable for KfClustersApi {
    type Item = KfCluster;

    async fn list_items(&self) -> Result<Vec<KfCluster>> {
        Ok(self.list().await?.items)
    }
}
