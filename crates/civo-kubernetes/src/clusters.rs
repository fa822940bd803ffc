//! Kubernetes cluster endpoints.

use crate::models::{
    KubernetesCluster, KubernetesClusterConfig, KubernetesInstance,
    KubernetesMarketplaceApplication, KubernetesVersion,
};
use crate::Result;
use async_trait::async_trait;
use civo_core::find::{find, find_match, Findable};
use civo_core::{Error, PaginatedList, Route, SimpleResponse, Transport};
use serde::Serialize;
use tracing::info;
use validator::Validate;

#[derive(Serialize)]
struct RecycleBody<'a> {
    hostname: &'a str,
    region: &'a str,
}

/// Client for `/kubernetes`.
#[derive(Debug, Clone)]
pub struct KubernetesApi {
    transport: Transport,
}

impl KubernetesApi {
    /// Create the API over a shared transport.
    #[must_use]
    pub const fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// List clusters.
    pub async fn list_clusters(&self) -> Result<PaginatedList<KubernetesCluster>> {
        self.transport.get(Route::new("/kubernetes/clusters")).await
    }

    /// First cluster whose ID or name contains `search`.
    pub async fn find_cluster(&self, search: &str) -> Result<KubernetesCluster> {
        find(self, search).await
    }

    /// Create a cluster. `name` is required.
    pub async fn create_cluster(&self, config: &KubernetesClusterConfig) -> Result<KubernetesCluster> {
        if config.name.as_deref().map_or(true, str::is_empty) {
            return Err(Error::required("name"));
        }
        config.validate()?;
        let body = self.with_region(config);

        info!(
            name = body.name.as_deref().unwrap_or_default(),
            pools = body.pools.len(),
            "Creating Kubernetes cluster"
        );
        self.transport
            .post(Route::new("/kubernetes/clusters"), &body)
            .await
    }

    /// Fetch a cluster.
    pub async fn get_cluster(&self, id: &str) -> Result<KubernetesCluster> {
        self.transport
            .get(Route::new("/kubernetes/clusters/:id").param("id", id))
            .await
    }

    /// Update a cluster.
    pub async fn update_cluster(
        &self,
        id: &str,
        config: &KubernetesClusterConfig,
    ) -> Result<KubernetesCluster> {
        config.validate()?;
        let body = self.with_region(config);

        self.transport
            .put(Route::new("/kubernetes/clusters/:id").param("id", id), &body)
            .await
    }

    /// Delete a cluster.
    pub async fn destroy_cluster(&self, id: &str) -> Result<SimpleResponse> {
        info!(cluster = id, "Destroying Kubernetes cluster");
        self.transport
            .delete(Route::new("/kubernetes/clusters/:id").param("id", id))
            .await
    }

    /// Rebuild the node named `hostname`.
    pub async fn recycle_cluster(&self, id: &str, hostname: &str) -> Result<SimpleResponse> {
        if hostname.is_empty() {
            return Err(Error::required("hostname"));
        }
        let body = RecycleBody {
            hostname,
            region: self.transport.region(),
        };
        self.transport
            .post(
                Route::new("/kubernetes/clusters/:id/recycle").param("id", id),
                &body,
            )
            .await
    }

    /// List Kubernetes versions available for new clusters.
    pub async fn list_available_versions(&self) -> Result<Vec<KubernetesVersion>> {
        self.transport.get(Route::new("/kubernetes/versions")).await
    }

    /// List marketplace applications.
    pub async fn list_marketplace_applications(
        &self,
    ) -> Result<Vec<KubernetesMarketplaceApplication>> {
        self.transport
            .get(Route::new("/kubernetes/applications"))
            .await
    }

    /// List a cluster's nodes.
    pub async fn list_cluster_instances(&self, id: &str) -> Result<Vec<KubernetesInstance>> {
        self.transport
            .get(Route::new("/kubernetes/clusters/:id/instances").param("id", id))
            .await
    }

    /// First node of cluster `id` whose ID or hostname contains `search`.
    pub async fn find_cluster_instance(&self, id: &str, search: &str) -> Result<KubernetesInstance> {
        find_match(self.list_cluster_instances(id).await?, search)
    }

    fn with_region(&self, config: &KubernetesClusterConfig) -> KubernetesClusterConfig {
        let mut body = config.clone();
        self.transport.fill_region(&mut body.region);
        for pool in &mut body.pools {
            self.transport.fill_region(&mut pool.region);
        }
        body
    }
}

#[async_trait]
impl Findable for KubernetesApi {
    type Item = KubernetesCluster;

    async fn list_items(&self) -> Result<Vec<KubernetesCluster>> {
        Ok(self.list_clusters().await?.items)
    }
}
