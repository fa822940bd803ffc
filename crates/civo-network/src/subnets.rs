//! Subnet endpoints nested under a network.

use crate::models::{CreateRoute, Subnet, SubnetConfig, SubnetRoute};
use crate::Result;
use civo_core::find::find_match;
use civo_core::{Route, SimpleResponse, Transport};
use validator::Validate;

/// Client for `/networks/:network_id/subnets`.
#[derive(Debug, Clone)]
pub struct SubnetsApi {
    transport: Transport,
}

impl SubnetsApi {
    /// Create the API over a shared transport.
    #[must_use]
    pub const fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// List a network's subnets.
    pub async fn list(&self, network_id: &str) -> Result<Vec<Subnet>> {
        let route = Route::new("/networks/:network_id/subnets").param("network_id", network_id);
        self.transport.get(route).await
    }

    /// Fetch a subnet.
    pub async fn get(&self, network_id: &str, subnet_id: &str) -> Result<Subnet> {
        self.transport
            .get(subnet_route(
                "/networks/:network_id/subnets/:subnet_id",
                network_id,
                subnet_id,
            ))
            .await
    }

    /// Create a subnet in a network.
    pub async fn create(&self, network_id: &str, config: &SubnetConfig) -> Result<Subnet> {
        config.validate()?;
        let route = Route::new("/networks/:network_id/subnets").param("network_id", network_id);
        self.transport.post(route, config).await
    }

    /// First subnet whose ID or name contains `search`.
    pub async fn find(&self, network_id: &str, search: &str) -> Result<Subnet> {
        let subnets = self.list(network_id).await?;
        find_match(subnets, search)
    }

    /// Route a subnet to a resource such as an instance.
    pub async fn attach_to_instance(
        &self,
        network_id: &str,
        subnet_id: &str,
        route: &CreateRoute,
    ) -> Result<SubnetRoute> {
        route.validate()?;
        self.transport
            .post(
                subnet_route(
                    "/networks/:network_id/subnets/:subnet_id/routes",
                    network_id,
                    subnet_id,
                ),
                route,
            )
            .await
    }

    /// Remove a subnet's route.
    pub async fn detach_from_instance(
        &self,
        network_id: &str,
        subnet_id: &str,
    ) -> Result<SimpleResponse> {
        self.transport
            .delete(subnet_route(
                "/networks/:network_id/subnets/:subnet_id/routes",
                network_id,
                subnet_id,
            ))
            .await
    }

    /// Delete a subnet.
    pub async fn destroy(&self, network_id: &str, subnet_id: &str) -> Result<SimpleResponse> {
        self.transport
            .delete(subnet_route(
                "/networks/:network_id/subnets/:subnet_id",
                network_id,
                subnet_id,
            ))
            .await
    }
}

fn subnet_route(template: &'static str, network_id: &str, subnet_id: &str) -> Route {
    Route::new(template)
        .param("network_id", network_id)
        .param("subnet_id", subnet_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use civo_core::{CivoConfig, Error};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn api(server: &MockServer) -> SubnetsApi {
        let config = CivoConfig::new("test-key")
            .unwrap()
            .with_api_url(server.uri());
        SubnetsApi::new(Transport::from_config(&config).unwrap())
    }

    #[tokio::test]
    async fn list_and_find_subnets() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/networks/net-1/subnets"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "sub-a", "name": "frontend", "network_id": "net-1", "status": "available"},
                {"id": "sub-b", "name": "backend", "network_id": "net-1"}
            ])))
            .mount(&server)
            .await;

        let api = api(&server);
        assert_eq!(api.list("net-1").await.unwrap().len(), 2);
        assert_eq!(api.find("net-1", "BACK").await.unwrap().id, "sub-b");
    }

    #[tokio::test]
    async fn list_requires_network_id() {
        let server = MockServer::start().await;
        let err = api(&server).list("").await.unwrap_err();
        assert_eq!(err, Error::required("network_id"));
    }

    #[tokio::test]
    async fn attach_posts_route() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/networks/net-1/subnets/sub-a/routes"))
            .and(body_json(json!({"resource_id": "inst-1", "resource_type": "instance"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "route-1",
                "subnet_id": "sub-a",
                "network_id": "net-1",
                "resource_id": "inst-1",
                "resource_type": "instance"
            })))
            .mount(&server)
            .await;

        let route = CreateRoute {
            resource_id: "inst-1".into(),
            resource_type: "instance".into(),
        };
        let created = api(&server)
            .attach_to_instance("net-1", "sub-a", &route)
            .await
            .unwrap();
        assert_eq!(created.id, "route-1");
    }

    #[tokio::test]
    async fn destroy_deletes_subnet_not_route() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/v2/networks/net-1/subnets/sub-a"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "success"})))
            .expect(1)
            .mount(&server)
            .await;

        let response = api(&server).destroy("net-1", "sub-a").await.unwrap();
        assert!(response.is_success());
    }

    #[tokio::test]
    async fn create_validates_name() {
        let server = MockServer::start().await;
        let err = api(&server)
            .create("net-1", &SubnetConfig { name: String::new() })
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }
}
