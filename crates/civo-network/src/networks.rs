//! Private network endpoints.

use crate::models::{Network, NetworkConfig, NetworkResult};
use crate::Result;
use async_trait::async_trait;
use civo_core::find::{find, Findable};
use civo_core::{Error, QueryParams, Route, SimpleResponse, Transport};
use tracing::info;
use validator::Validate;

/// Client for `/networks`.
#[derive(Debug, Clone)]
pub struct NetworksApi {
    transport: Transport,
}

impl NetworksApi {
    /// Create the API over a shared transport.
    #[must_use]
    pub const fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// List networks in the configured region.
    pub async fn list(&self) -> Result<Vec<Network>> {
        self.transport.get(Route::new("/networks")).await
    }

    /// Return the region's default network.
    pub async fn get_default(&self) -> Result<Network> {
        self.list()
            .await?
            .into_iter()
            .find(|network| network.default)
            .ok_or_else(|| Error::NotFound("Default network not found".to_string()))
    }

    /// Fetch a network by ID.
    pub async fn get(&self, id: &str) -> Result<Network> {
        self.transport
            .get(Route::new("/networks/:id").param("id", id))
            .await
    }

    /// Create a network.
    pub async fn create(&self, config: &NetworkConfig) -> Result<NetworkResult> {
        config.validate()?;
        let mut body = config.clone();
        self.transport.fill_region(&mut body.region);

        info!(label = %body.label, "Creating network");
        self.transport.post(Route::new("/networks"), &body).await
    }

    /// Create a network with only a label.
    pub async fn create_with_label(&self, label: &str) -> Result<NetworkResult> {
        self.create(&NetworkConfig::with_label(label)).await
    }

    /// First network whose ID, name or label contains `search`.
    pub async fn find(&self, search: &str) -> Result<Network> {
        find(self, search).await
    }

    /// Change a network's label.
    pub async fn rename(&self, id: &str, label: &str) -> Result<NetworkResult> {
        if label.is_empty() {
            return Err(Error::required("label"));
        }
        self.update(id, &NetworkConfig::with_label(label)).await
    }

    /// Replace a network's settings.
    pub async fn update(&self, id: &str, config: &NetworkConfig) -> Result<NetworkResult> {
        config.validate()?;
        let route = Route::new("/networks/:id").param("id", id);
        let mut body = config.clone();
        self.transport.fill_region(&mut body.region);

        self.transport.put(route, &body).await
    }

    /// Delete a network.
    pub async fn destroy(&self, id: &str) -> Result<SimpleResponse> {
        let route = Route::new("/networks/:id").param("id", id);
        let query = QueryParams::new().with("region", self.transport.region());

        info!(id, "Deleting network");
        self.transport.delete_with(route, query).await
    }
}

#[async_trait]
impl Findable for NetworksApi {
    type Item = Network;

    async fn list_items(&self) -> Result<Vec<Network>> {
        self.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use civo_core::{CivoConfig, ErrorKind};
    use serde_json::{json, Value};
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn api(server: &MockServer) -> NetworksApi {
        let config = CivoConfig::new("test-key")
            .unwrap()
            .with_api_url(server.uri());
        NetworksApi::new(Transport::from_config(&config).unwrap())
    }

    fn networks() -> Value {
        json!([
            {
                "id": "5f3b2c1a-0000-4000-8000-000000000001",
                "name": "cust-default",
                "default": true,
                "cidr": "192.168.1.0/24",
                "label": "Default",
                "status": "Active"
            },
            {
                "id": "5f3b2c1a-0000-4000-8000-000000000002",
                "name": "cust-staging",
                "default": false,
                "label": "Staging"
            }
        ])
    }

    async fn mount_list(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/v2/networks"))
            .and(query_param("region", "LON1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(networks()))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn list_networks_success() {
        let server = MockServer::start().await;
        mount_list(&server).await;

        let networks = api(&server).list().await.unwrap();
        assert_eq!(networks.len(), 2);
        assert_eq!(networks[0].cidr.as_deref(), Some("192.168.1.0/24"));
        assert_eq!(networks[1].cidr, None);
    }

    #[tokio::test]
    async fn get_default_network() {
        let server = MockServer::start().await;
        mount_list(&server).await;

        let network = api(&server).get_default().await.unwrap();
        assert_eq!(network.label.as_deref(), Some("Default"));
    }

    #[tokio::test]
    async fn get_default_network_missing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/networks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let err = api(&server).get_default().await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn find_matches_label() {
        let server = MockServer::start().await;
        mount_list(&server).await;

        let network = api(&server).find("staging").await.unwrap();
        assert_eq!(network.id, "5f3b2c1a-0000-4000-8000-000000000002");

        let err = api(&server).find("production").await.unwrap_err();
        assert_eq!(err.to_string(), "Unable to find production, zero matches");
    }

    #[tokio::test]
    async fn create_fills_region() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/networks"))
            .and(body_json(json!({"label": "dev", "region": "LON1"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "net-1",
                "label": "dev",
                "result": "success"
            })))
            .mount(&server)
            .await;

        let result = api(&server).create_with_label("dev").await.unwrap();
        assert_eq!(result.id, "net-1");
        assert_eq!(result.result, "success");
    }

    #[tokio::test]
    async fn create_requires_label() {
        let server = MockServer::start().await;
        let err = api(&server)
            .create(&NetworkConfig::default())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn rename_puts_label() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/v2/networks/net-1"))
            .and(body_json(json!({"label": "prod", "region": "LON1"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "net-1",
                "label": "prod",
                "result": "success"
            })))
            .mount(&server)
            .await;

        let result = api(&server).rename("net-1", "prod").await.unwrap();
        assert_eq!(result.label, "prod");
    }

    #[tokio::test]
    async fn rename_requires_id() {
        let server = MockServer::start().await;
        let err = api(&server).rename("", "prod").await.unwrap_err();
        assert_eq!(err, Error::required("id"));
    }

    #[tokio::test]
    async fn destroy_passes_region() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/v2/networks/net-1"))
            .and(query_param("region", "LON1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "success"})))
            .mount(&server)
            .await;

        let response = api(&server).destroy("net-1").await.unwrap();
        assert!(response.is_success());
    }

    #[tokio::test]
    async fn get_network_provider_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/networks/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "code": "database_network_not_found",
                "reason": "The network could not be found"
            })))
            .mount(&server)
            .await;

        let err = api(&server).get("missing").await.unwrap_err();
        assert_eq!(err.provider_code(), Some("database_network_not_found"));
    }
}
