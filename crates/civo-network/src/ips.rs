//! Reserved IP endpoints.

use crate::models::{CreateIpRequest, Ip, IpAction, IpActionKind, UpdateIpRequest};
use crate::Result;
use async_trait::async_trait;
use civo_core::find::{find, Findable};
use civo_core::{Error, PaginatedList, Route, SimpleResponse, Transport};
use tracing::info;
use validator::Validate;

/// Client for `/ips`.
#[derive(Debug, Clone)]
pub struct IpsApi {
    transport: Transport,
}

impl IpsApi {
    /// Create the API over a shared transport.
    #[must_use]
    pub const fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// List reserved IPs.
    pub async fn list(&self) -> Result<PaginatedList<Ip>> {
        self.transport.get(Route::new("/ips")).await
    }

    /// Fetch a reserved IP.
    pub async fn get(&self, id: &str) -> Result<Ip> {
        self.transport
            .get(Route::new("/ips/:id").param("id", id))
            .await
    }

    /// First IP whose ID, name or address contains `search`.
    pub async fn find(&self, search: &str) -> Result<Ip> {
        find(self, search).await
    }

    /// Reserve an IP.
    pub async fn create(&self, request: &CreateIpRequest) -> Result<Ip> {
        request.validate()?;
        let mut body = request.clone();
        self.transport.fill_region(&mut body.region);

        self.transport.post(Route::new("/ips"), &body).await
    }

    /// Rename a reserved IP.
    pub async fn update(&self, id: &str, request: &UpdateIpRequest) -> Result<Ip> {
        request.validate()?;
        let mut body = request.clone();
        self.transport.fill_region(&mut body.region);

        self.transport
            .put(Route::new("/ips/:id").param("id", id), &body)
            .await
    }

    /// Assign a reserved IP to an instance or load balancer.
    pub async fn assign(
        &self,
        id: &str,
        resource_id: &str,
        resource_type: &str,
    ) -> Result<SimpleResponse> {
        if resource_id.is_empty() {
            return Err(Error::required("resource_id"));
        }
        if resource_type.is_empty() {
            return Err(Error::required("resource_type"));
        }

        info!(id, resource_id, resource_type, "Assigning reserved IP");
        self.action(
            id,
            IpAction {
                action: IpActionKind::Assign,
                assign_to_id: Some(resource_id.to_string()),
                assign_to_type: Some(resource_type.to_string()),
                region: self.transport.region().to_string(),
            },
        )
        .await
    }

    /// Release a reserved IP from its resource.
    pub async fn unassign(&self, id: &str) -> Result<SimpleResponse> {
        self.action(
            id,
            IpAction {
                action: IpActionKind::Unassign,
                assign_to_id: None,
                assign_to_type: None,
                region: self.transport.region().to_string(),
            },
        )
        .await
    }

    /// Release a reserved IP.
    pub async fn destroy(&self, id: &str) -> Result<SimpleResponse> {
        self.transport
            .delete(Route::new("/ips/:id").param("id", id))
            .await
    }

    async fn action(&self, id: &str, action: IpAction) -> Result<SimpleResponse> {
        self.transport
            .post(Route::new("/ips/:id/actions").param("id", id), &action)
            .await
    }
}

#[async_trait]
impl Findable for IpsApi {
    type Item = Ip;

    async fn list_items(&self) -> Result<Vec<Ip>> {
        Ok(self.list().await?.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use civo_core::CivoConfig;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn api(server: &MockServer) -> IpsApi {
        let config = CivoConfig::new("test-key")
            .unwrap()
            .with_api_url(server.uri());
        IpsApi::new(Transport::from_config(&config).unwrap())
    }

    #[tokio::test]
    async fn list_and_find_by_address() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/ips"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "page": 1,
                "per_page": 20,
                "pages": 1,
                "items": [
                    {"id": "ip-1", "name": "frontend", "ip": "74.220.1.1"},
                    {
                        "id": "ip-2",
                        "name": "api",
                        "ip": "74.220.1.2",
                        "assigned_to": {"id": "inst-1", "type": "instance", "name": "api-1"}
                    }
                ]
            })))
            .mount(&server)
            .await;

        let api = api(&server);
        let page = api.list().await.unwrap();
        assert_eq!(page.items.len(), 2);

        let ip = api.find("220.1.2").await.unwrap();
        assert_eq!(ip.assigned_to.unwrap().resource_type, "instance");
    }

    #[tokio::test]
    async fn assign_posts_action() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/ips/ip-1/actions"))
            .and(body_json(json!({
                "action": "assign",
                "assign_to_id": "inst-1",
                "assign_to_type": "instance",
                "region": "LON1"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "success"})))
            .mount(&server)
            .await;

        let response = api(&server).assign("ip-1", "inst-1", "instance").await.unwrap();
        assert!(response.is_success());
    }

    #[tokio::test]
    async fn unassign_posts_action() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/ips/ip-1/actions"))
            .and(body_json(json!({"action": "unassign", "region": "LON1"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "success"})))
            .mount(&server)
            .await;

        assert!(api(&server).unassign("ip-1").await.unwrap().is_success());
    }

    #[tokio::test]
    async fn assign_requires_resource() {
        let server = MockServer::start().await;
        let err = api(&server).assign("ip-1", "", "instance").await.unwrap_err();
        assert_eq!(err, Error::required("resource_id"));
    }

    #[tokio::test]
    async fn update_requires_name() {
        let server = MockServer::start().await;
        let err = api(&server)
            .update("ip-1", &UpdateIpRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }
}
