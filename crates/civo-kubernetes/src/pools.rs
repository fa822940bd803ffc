//! Node pool endpoints.

use crate::models::{KubernetesClusterPoolConfig, KubernetesClusterPoolUpdateConfig, KubernetesPool};
use crate::Result;
use civo_core::{Route, SimpleResponse, Transport};
use tracing::info;
use validator::Validate;

/// Client for `/kubernetes/clusters/:cluster_id/pools`.
#[derive(Debug, Clone)]
pub struct PoolsApi {
    transport: Transport,
}

impl PoolsApi {
    /// Create the API over a shared transport.
    #[must_use]
    pub const fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// List a cluster's pools.
    pub async fn list(&self, cluster_id: &str) -> Result<Vec<KubernetesPool>> {
        self.transport
            .get(Route::new("/kubernetes/clusters/:cluster_id/pools").param("cluster_id", cluster_id))
            .await
    }

    /// Fetch a pool.
    pub async fn get(&self, cluster_id: &str, pool_id: &str) -> Result<KubernetesPool> {
        self.transport
            .get(pool_route(cluster_id, pool_id))
            .await
    }

    /// Add a pool to a cluster.
    pub async fn create(
        &self,
        cluster_id: &str,
        config: &KubernetesClusterPoolConfig,
    ) -> Result<SimpleResponse> {
        config.validate()?;
        let mut body = config.clone();
        self.transport.fill_region(&mut body.region);

        info!(cluster = cluster_id, count = ?body.count, "Adding node pool");
        self.transport
            .post(
                Route::new("/kubernetes/clusters/:cluster_id/pools").param("cluster_id", cluster_id),
                &body,
            )
            .await
    }

    /// Resize or relabel a pool.
    pub async fn update(
        &self,
        cluster_id: &str,
        pool_id: &str,
        config: &KubernetesClusterPoolUpdateConfig,
    ) -> Result<KubernetesPool> {
        config.validate()?;
        let mut body = config.clone();
        self.transport.fill_region(&mut body.region);

        self.transport
            .put(pool_route(cluster_id, pool_id), &body)
            .await
    }

    /// Remove a pool.
    pub async fn destroy(&self, cluster_id: &str, pool_id: &str) -> Result<SimpleResponse> {
        info!(cluster = cluster_id, pool = pool_id, "Removing node pool");
        self.transport
            .delete(pool_route(cluster_id, pool_id))
            .await
    }
}

fn pool_route(cluster_id: &str, pool_id: &str) -> Route {
    Route::new("/kubernetes/clusters/:cluster_id/pools/:pool_id")
        .param("cluster_id", cluster_id)
        .param("pool_id", pool_id)
}
