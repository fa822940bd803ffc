//! Volume endpoints.

use crate::models::{Volume, VolumeConfig, VolumeResult};
use crate::Result;
use async_trait::async_trait;
use civo_core::find::{find, Findable};
use civo_core::{Error, Route, SimpleResponse, Transport};
use civo_kubernetes::KubernetesApi;
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, info};
use validator::Validate;

#[derive(Serialize)]
struct ResizeBody<'a> {
    size_gb: u32,
    region: &'a str,
}

#[derive(Serialize)]
struct AttachBody<'a> {
    instance_id: &'a str,
    region: &'a str,
}

#[derive(Serialize)]
struct RegionBody<'a> {
    region: &'a str,
}

/// Client for `/volumes`.
#[derive(Debug, Clone)]
pub struct VolumesApi {
    transport: Transport,
}

impl VolumesApi {
    /// Create the API over a shared transport.
    #[must_use]
    pub const fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// List volumes.
    pub async fn list(&self) -> Result<Vec<Volume>> {
        self.transport.get(Route::new("/volumes")).await
    }

    /// Volumes owned by the cluster matching `cluster_search`.
    pub async fn list_cluster_volumes(&self, cluster_search: &str) -> Result<Vec<Volume>> {
        let cluster = KubernetesApi::new(self.transport.clone())
            .find_cluster(cluster_search)
            .await?;
        let volumes = self.list().await?;

        Ok(volumes
            .into_iter()
            .filter(|volume| volume.cluster() == Some(cluster.id.as_str()))
            .collect())
    }

    /// Volumes whose owning cluster no longer exists.
    pub async fn list_dangling_volumes(&self) -> Result<Vec<Volume>> {
        let clusters = KubernetesApi::new(self.transport.clone())
            .list_clusters()
            .await?;
        let live: HashSet<String> = clusters.items.into_iter().map(|c| c.id).collect();
        let volumes = self.list().await?;

        let dangling: Vec<Volume> = volumes
            .into_iter()
            .filter(|volume| volume.cluster().is_some_and(|id| !live.contains(id)))
            .collect();
        debug!(count = dangling.len(), "Found dangling volumes");
        Ok(dangling)
    }

    /// Fetch a volume.
    pub async fn get(&self, id: &str) -> Result<Volume> {
        self.transport
            .get(Route::new("/volumes/:id").param("id", id))
            .await
    }

    /// First volume whose ID or name contains `search`.
    pub async fn find(&self, search: &str) -> Result<Volume> {
        find(self, search).await
    }

    /// Create a volume.
    pub async fn create(&self, config: &VolumeConfig) -> Result<VolumeResult> {
        config.validate()?;
        let mut body = config.clone();
        self.transport.fill_region(&mut body.region);

        info!(name = %body.name, size_gb = body.size_gb, "Creating volume");
        self.transport.post(Route::new("/volumes"), &body).await
    }

    /// Grow a volume to `size_gb`.
    pub async fn resize(&self, id: &str, size_gb: u32) -> Result<SimpleResponse> {
        if size_gb == 0 {
            return Err(Error::required("size_gb"));
        }
        let body = ResizeBody {
            size_gb,
            region: self.transport.region(),
        };
        self.transport
            .put(Route::new("/volumes/:id/resize").param("id", id), &body)
            .await
    }

    /// Attach a volume to an instance.
    pub async fn attach(&self, id: &str, instance_id: &str) -> Result<SimpleResponse> {
        if instance_id.is_empty() {
            return Err(Error::required("instance_id"));
        }
        let body = AttachBody {
            instance_id,
            region: self.transport.region(),
        };
        self.transport
            .put(Route::new("/volumes/:id/attach").param("id", id), &body)
            .await
    }

    /// Detach a volume from its instance.
    pub async fn detach(&self, id: &str) -> Result<SimpleResponse> {
        let body = RegionBody {
            region: self.transport.region(),
        };
        self.transport
            .put(Route::new("/volumes/:id/detach").param("id", id), &body)
            .await
    }

    /// Delete a volume.
    pub async fn destroy(&self, id: &str) -> Result<SimpleResponse> {
        info!(volume = id, "Destroying volume");
        self.transport
            .delete(Route::new("/volumes/:id").param("id", id))
            .await
    }
}

#[async_trait]
impl Findable for VolumesApi {
    type Item = Volume;

    async fn list_items(&self) -> Result<Vec<Volume>> {
        self.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use civo_core::CivoConfig;
    use serde_json::{json, Value};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn api(server: &MockServer) -> VolumesApi {
        let config = CivoConfig::new("test-key")
            .unwrap()
            .with_api_url(server.uri());
        VolumesApi::new(Transport::from_config(&config).unwrap())
    }

    fn volume(id: &str, name: &str, cluster_id: &str) -> Value {
        json!({
            "id": id,
            "name": name,
            "instance_id": "",
            "cluster_id": cluster_id,
            "network_id": "net-1",
            "mountpoint": "",
            "status": "available",
            "size_gb": 20,
            "bootable": false,
            "created_at": "2024-03-01T09:00:00Z"
        })
    }

    async fn mount_cluster_and_volumes(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/v2/kubernetes/clusters"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "page": 1, "per_page": 20, "pages": 1,
                "items": [{"id": "k8s-live", "name": "production", "conditions": []}]
            })))
            .mount(server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v2/volumes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                volume("vol-1", "pvc-data", "k8s-live"),
                volume("vol-2", "pvc-orphan", "k8s-gone"),
                volume("vol-3", "standalone", "")
            ])))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn cluster_volumes() {
        let server = MockServer::start().await;
        mount_cluster_and_volumes(&server).await;

        let volumes = api(&server).list_cluster_volumes("production").await.unwrap();
        let ids: Vec<_> = volumes.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["vol-1"]);
    }

    #[tokio::test]
    async fn dangling_volumes_reference_missing_clusters() {
        let server = MockServer::start().await;
        mount_cluster_and_volumes(&server).await;

        let volumes = api(&server).list_dangling_volumes().await.unwrap();
        let ids: Vec<_> = volumes.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["vol-2"]);
    }

    #[tokio::test]
    async fn resize_and_attach_send_region() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/v2/volumes/vol-1/resize"))
            .and(body_json(json!({"size_gb": 50, "region": "LON1"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "success"})))
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/v2/volumes/vol-1/attach"))
            .and(body_json(json!({"instance_id": "i-1", "region": "LON1"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "success"})))
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/v2/volumes/vol-1/detach"))
            .and(body_json(json!({"region": "LON1"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "success"})))
            .mount(&server)
            .await;

        let api = api(&server);
        assert!(api.resize("vol-1", 50).await.unwrap().is_success());
        assert!(api.attach("vol-1", "i-1").await.unwrap().is_success());
        assert!(api.detach("vol-1").await.unwrap().is_success());
    }

    #[tokio::test]
    async fn input_checks_run_before_requests() {
        let server = MockServer::start().await;
        let api = api(&server);

        assert_eq!(api.resize("vol-1", 0).await.unwrap_err(), Error::required("size_gb"));
        assert_eq!(
            api.attach("vol-1", "").await.unwrap_err(),
            Error::required("instance_id")
        );
        let err = api.create(&VolumeConfig::default()).await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[tokio::test]
    async fn create_volume() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/volumes"))
            .and(body_json(json!({
                "name": "data",
                "network_id": "net-1",
                "region": "LON1",
                "size_gb": 20,
                "bootable": false
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "vol-9", "name": "data", "result": "success"
            })))
            .mount(&server)
            .await;

        let config = VolumeConfig {
            name: "data".into(),
            network_id: "net-1".into(),
            size_gb: 20,
            ..Default::default()
        };
        let result = api(&server).create(&config).await.unwrap();
        assert_eq!(result.id, "vol-9");
    }
}
