//! Object store endpoints.

use crate::models::{CreateObjectStoreRequest, ObjectStore, UpdateObjectStoreRequest};
use crate::Result;
use async_trait::async_trait;
use civo_core::find::{find, Findable};
use civo_core::{PaginatedList, Route, SimpleResponse, Transport};
use tracing::info;
use validator::Validate;

/// Client for `/objectstores`.
#[derive(Debug, Clone)]
pub struct ObjectStoresApi {
    transport: Transport,
}

impl ObjectStoresApi {
    /// Create the API over a shared transport.
    #[must_use]
    pub const fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// List object stores.
    pub async fn list(&self) -> Result<PaginatedList<ObjectStore>> {
        self.transport.get(Route::new("/objectstores")).await
    }

    /// Fetch an object store.
    pub async fn get(&self, id: &str) -> Result<ObjectStore> {
        self.transport
            .get(Route::new("/objectstores/:id").param("id", id))
            .await
    }

    /// First object store whose ID or name contains `search`.
    pub async fn find(&self, search: &str) -> Result<ObjectStore> {
        find(self, search).await
    }

    /// Create an object store.
    pub async fn create(&self, request: &CreateObjectStoreRequest) -> Result<ObjectStore> {
        request.validate()?;
        let mut body = request.clone();
        self.transport.fill_region(&mut body.region);

        info!(name = %body.name, max_size_gb = body.max_size_gb, "Creating object store");
        self.transport.post(Route::new("/objectstores"), &body).await
    }

    /// Resize an object store.
    pub async fn update(&self, id: &str, request: &UpdateObjectStoreRequest) -> Result<ObjectStore> {
        request.validate()?;
        let mut body = request.clone();
        self.transport.fill_region(&mut body.region);

        self.transport
            .put(Route::new("/objectstores/:id").param("id", id), &body)
            .await
    }

    /// Delete an object store.
    pub async fn destroy(&self, id: &str) -> Result<SimpleResponse> {
        self.transport
            .delete(Route::new("/objectstores/:id").param("id", id))
            .await
    }
}

#[async_trait]
impl Findable for ObjectStoresApi {
    type Item = ObjectStore;

    async fn list_items(&self) -> Result<Vec<ObjectStore>> {
        Ok(self.list().await?.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use civo_core::{CivoConfig, Error};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn api(server: &MockServer) -> ObjectStoresApi {
        let config = CivoConfig::new("test-key")
            .unwrap()
            .with_api_url(server.uri());
        ObjectStoresApi::new(Transport::from_config(&config).unwrap())
    }

    #[tokio::test]
    async fn list_and_find_buckets() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/objectstores"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "page": 1, "per_page": 20, "pages": 1,
                "items": [
                    {
                        "id": "os-1",
                        "name": "backups",
                        "max_size": 500,
                        "owner_info": {"access_key_id": "AKIA1", "name": "ops", "credential_id": "cred-1"},
                        "objectstore_endpoint": "objectstore.lon1.civo.com",
                        "status": "ready"
                    },
                    {"id": "os-2", "name": "media", "max_size": 1000, "status": "ready"}
                ]
            })))
            .mount(&server)
            .await;

        let api = api(&server);
        let page = api.list().await.unwrap();
        assert_eq!(
            page.items[0].owner_info.as_ref().map(|o| o.credential_id.as_str()),
            Some("cred-1")
        );
        assert!(page.items[1].owner_info.is_none());
        assert_eq!(api.find("MEDIA").await.unwrap().id, "os-2");
    }

    #[tokio::test]
    async fn create_bucket() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/objectstores"))
            .and(body_json(json!({"name": "backups", "max_size_gb": 500, "region": "LON1"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "os-1", "name": "backups", "max_size": 500, "status": "creating"
            })))
            .mount(&server)
            .await;

        let request = CreateObjectStoreRequest {
            name: "backups".into(),
            max_size_gb: 500,
            ..Default::default()
        };
        let store = api(&server).create(&request).await.unwrap();
        assert_eq!(store.status, "creating");
    }

    #[tokio::test]
    async fn update_rejects_zero_size() {
        let server = MockServer::start().await;
        let err = api(&server)
            .update("os-1", &UpdateObjectStoreRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }
}
