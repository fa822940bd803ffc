//! Load balancer endpoints.

use crate::models::{LoadBalancer, LoadBalancerConfig, LoadBalancerUpdateConfig};
use crate::Result;
use async_trait::async_trait;
use civo_core::find::{find, Findable};
use civo_core::{Route, SimpleResponse, Transport};
use tracing::info;
use validator::Validate;

/// Client for `/loadbalancers`.
#[derive(Debug, Clone)]
pub struct LoadBalancersApi {
    transport: Transport,
}

impl LoadBalancersApi {
    /// Create the API over a shared transport.
    #[must_use]
    pub const fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// List load balancers.
    pub async fn list(&self) -> Result<Vec<LoadBalancer>> {
        self.transport.get(Route::new("/loadbalancers")).await
    }

    /// Fetch a load balancer.
    pub async fn get(&self, id: &str) -> Result<LoadBalancer> {
        self.transport
            .get(Route::new("/loadbalancers/:id").param("id", id))
            .await
    }

    /// First load balancer whose ID or name contains `search`.
    pub async fn find(&self, search: &str) -> Result<LoadBalancer> {
        find(self, search).await
    }

    /// Create a load balancer.
    pub async fn create(&self, config: &LoadBalancerConfig) -> Result<LoadBalancer> {
        config.validate()?;
        let mut body = config.clone();
        self.transport.fill_region(&mut body.region);

        info!(name = %body.name, backends = body.backends.len(), "Creating load balancer");
        self.transport.post(Route::new("/loadbalancers"), &body).await
    }

    /// Update a load balancer.
    pub async fn update(&self, id: &str, config: &LoadBalancerUpdateConfig) -> Result<LoadBalancer> {
        config.validate()?;
        let mut body = config.clone();
        self.transport.fill_region(&mut body.region);

        self.transport
            .put(Route::new("/loadbalancers/:id").param("id", id), &body)
            .await
    }

    /// Delete a load balancer.
    pub async fn destroy(&self, id: &str) -> Result<SimpleResponse> {
        self.transport
            .delete(Route::new("/loadbalancers/:id").param("id", id))
            .await
    }
}

#[async_trait]
impl Findable for LoadBalancersApi {
    type Item = LoadBalancer;

    async fn list_items(&self) -> Result<Vec<LoadBalancer>> {
        self.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LoadBalancerBackendConfig;
    use civo_core::{CivoConfig, Error};
    use serde_json::{json, Value};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn api(server: &MockServer) -> LoadBalancersApi {
        let config = CivoConfig::new("test-key")
            .unwrap()
            .with_api_url(server.uri());
        LoadBalancersApi::new(Transport::from_config(&config).unwrap())
    }

    fn balancer() -> Value {
        json!({
            "id": "lb-1",
            "name": "web-lb",
            "algorithm": "round_robin",
            "backends": [
                {"ip": "10.0.0.4", "protocol": "TCP", "source_port": 80, "target_port": 8080, "health_check_port": 8080}
            ],
            "public_ip": "74.220.20.1",
            "private_ip": "192.168.1.10",
            "firewall_id": "fw-1",
            "state": "available",
            "options": {"server_timeout": "60s"}
        })
    }

    fn backend(ip: &str) -> LoadBalancerBackendConfig {
        LoadBalancerBackendConfig {
            ip: ip.into(),
            protocol: Some("TCP".into()),
            source_port: 80,
            target_port: 8080,
            health_check_port: None,
        }
    }

    #[tokio::test]
    async fn get_load_balancer() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/loadbalancers/lb-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(balancer()))
            .mount(&server)
            .await;

        let lb = api(&server).get("lb-1").await.unwrap();
        assert_eq!(lb.backends[0].target_port, 8080);
        assert_eq!(
            lb.options.and_then(|o| o.server_timeout).as_deref(),
            Some("60s")
        );
    }

    #[tokio::test]
    async fn create_load_balancer() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/loadbalancers"))
            .respond_with(ResponseTemplate::new(200).set_body_json(balancer()))
            .mount(&server)
            .await;

        let config = LoadBalancerConfig {
            name: "web-lb".into(),
            network_id: "net-1".into(),
            backends: vec![backend("10.0.0.4")],
            ..LoadBalancerConfig::default()
        };
        let lb = api(&server).create(&config).await.unwrap();
        assert_eq!(lb.id, "lb-1");

        let requests = server.received_requests().await.unwrap();
        let sent: Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(sent["region"], "LON1");
        assert_eq!(sent["backends"][0]["ip"], "10.0.0.4");
    }

    #[tokio::test]
    async fn backend_ip_is_validated() {
        let server = MockServer::start().await;
        let config = LoadBalancerUpdateConfig {
            backends: vec![backend("not-an-ip")],
            ..LoadBalancerUpdateConfig::default()
        };
        let err = api(&server).update("lb-1", &config).await.unwrap_err();

        assert!(matches!(err, Error::Validation(_)));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn find_and_destroy() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/loadbalancers"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([balancer()])))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/v2/loadbalancers/lb-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "success"})))
            .mount(&server)
            .await;

        let api = api(&server);
        let lb = api.find("web").await.unwrap();
        assert!(api.destroy(&lb.id).await.unwrap().is_success());
    }
}
