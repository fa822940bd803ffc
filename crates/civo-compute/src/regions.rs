//! Region endpoints.

use crate::models::Region;
use crate::Result;
use async_trait::async_trait;
use civo_core::find::{find, Findable};
use civo_core::{Error, Route, Transport};

/// Client for `/regions`.
#[derive(Debug, Clone)]
pub struct RegionsApi {
    transport: Transport,
}

impl RegionsApi {
    /// Create the API over a shared transport.
    #[must_use]
    pub const fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// List regions.
    pub async fn list(&self) -> Result<Vec<Region>> {
        self.transport.get(Route::new("/regions")).await
    }

    /// First region whose code or name contains `search`.
    pub async fn find(&self, search: &str) -> Result<Region> {
        find(self, search).await
    }

    /// The account's default region.
    pub async fn get_default(&self) -> Result<Region> {
        self.list()
            .await?
            .into_iter()
            .find(|region| region.default)
            .ok_or_else(|| Error::NotFound("No default region found".to_string()))
    }
}

#[async_trait]
impl Findable for RegionsApi {
    type Item = Region;

    async fn list_items(&self) -> Result<Vec<Region>> {
        self.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use civo_core::CivoConfig;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn api(server: &MockServer) -> RegionsApi {
        let config = CivoConfig::new("test-key")
            .unwrap()
            .with_api_url(server.uri());
        RegionsApi::new(Transport::from_config(&config).unwrap())
    }

    fn region(code: &str, name: &str, default: bool) -> serde_json::Value {
        json!({
            "code": code,
            "name": name,
            "type": "civo",
            "out_of_capacity": false,
            "country": "GB",
            "country_name": "United Kingdom",
            "features": {
                "iaas": true,
                "kubernetes": true,
                "object_store": true,
                "loadbalancer": true,
                "dbaas": false,
                "volume": true,
                "paas": false,
                "kfaas": false,
                "public_ip_node_pools": true
            },
            "default": default
        })
    }

    async fn mount(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/v2/regions"))
            .and(query_param("region", "LON1"))
            .and(header("Authorization", "Bearer test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                region("LON1", "London 1", false),
                region("FRA1", "Frankfurt 1", true)
            ])))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn list_regions() {
        let server = MockServer::start().await;
        mount(&server).await;

        let regions = api(&server).list().await.unwrap();
        assert_eq!(regions.len(), 2);
        assert!(regions[0].features.kubernetes);
        assert!(!regions[0].features.dbaas);
        assert_eq!(regions[0].region_type, "civo");
    }

    #[tokio::test]
    async fn find_by_name_or_code() {
        let server = MockServer::start().await;
        mount(&server).await;

        let api = api(&server);
        assert_eq!(api.find("frankfurt").await.unwrap().code, "FRA1");
        assert_eq!(api.find("lon").await.unwrap().code, "LON1");
        assert!(matches!(
            api.find("nyc").await.unwrap_err(),
            Error::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn get_default_region() {
        let server = MockServer::start().await;
        mount(&server).await;

        let region = api(&server).get_default().await.unwrap();
        assert_eq!(region.code, "FRA1");
    }
}
