//! Authenticated JSON transport shared by every resource API.

use crate::client::ClientConfig;
use crate::config::{CivoConfig, RegionPlacement};
use crate::error::ProviderError;
use crate::query::QueryParams;
use crate::route::Route;
use crate::{Error, Result};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, ClientBuilder, Method, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, trace, warn};
use url::Url;

const USER_AGENT: &str = concat!("civo-core/", env!("CARGO_PKG_VERSION"));
const APPLICATION_JSON: &str = "application/json";

/// Builder for [`Transport`].
#[derive(Debug, Clone)]
pub struct TransportBuilder {
    config: CivoConfig,
    http_config: ClientConfig,
}

impl TransportBuilder {
    /// Create a builder; the request timeout is taken from `config`.
    #[must_use]
    pub fn new(config: CivoConfig) -> Self {
        let http_config = ClientConfig::new().with_timeout(config.timeout());
        Self {
            config,
            http_config,
        }
    }

    /// Override the HTTP client configuration.
    #[must_use]
    pub fn with_http_config(mut self, config: ClientConfig) -> Self {
        self.http_config = config;
        self
    }

    /// Build the transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be constructed.
    pub fn build(self) -> Result<Transport> {
        self.config.check()?;
        let base_url = self.config.parse_api_url()?;
        if base_url.cannot_be_a_base() {
            return Err(Error::ConfigError(format!(
                "API URL `{}` cannot be used as a base",
                self.config.api_url
            )));
        }

        let mut builder = ClientBuilder::new()
            .timeout(self.http_config.timeout)
            .user_agent(USER_AGENT)
            .pool_idle_timeout(self.http_config.pool_idle_timeout)
            .pool_max_idle_per_host(self.http_config.pool_max_idle_per_host)
            .connect_timeout(self.http_config.connect_timeout);

        if !self.http_config.enable_compression {
            builder = builder.no_gzip();
        }

        let http = builder
            .build()
            .map_err(|err| Error::ConfigError(format!("Failed to build HTTP client: {err}")))?;

        Ok(Transport {
            http,
            inner: Arc::new(Inner {
                base_url,
                api_version: self.config.api_version,
                api_key: self.config.api_key,
                region: self.config.region,
                region_placement: self.config.region_placement,
                log_requests: self.http_config.enable_logging,
            }),
        })
    }
}

#[derive(Debug)]
struct Inner {
    base_url: Url,
    api_version: String,
    api_key: SecretString,
    region: String,
    region_placement: RegionPlacement,
    log_requests: bool,
}

/// HTTP transport against the Civo API.
///
/// Cloning is cheap: the connection pool and configuration are shared.
#[derive(Debug, Clone)]
pub struct Transport {
    http: Client,
    inner: Arc<Inner>,
}

impl Transport {
    /// Build a transport with default HTTP settings.
    ///
    /// # Errors
    ///
    /// See [`TransportBuilder::build`].
    pub fn from_config(config: &CivoConfig) -> Result<Self> {
        TransportBuilder::new(config.clone()).build()
    }

    /// Configured region code.
    #[must_use]
    pub fn region(&self) -> &str {
        &self.inner.region
    }

    /// Set `region` to the configured region code when it is unset.
    pub fn fill_region(&self, region: &mut Option<String>) {
        if region.as_deref().map_or(true, str::is_empty) {
            *region = Some(self.inner.region.clone());
        }
    }

    /// API base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// API version prefix.
    #[must_use]
    pub fn api_version(&self) -> &str {
        &self.inner.api_version
    }

    /// Resolve a route into a full request URL without query parameters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for unbound required placeholders.
    pub fn url_for(&self, route: &Route) -> Result<Url> {
        let segments = route.segments()?;
        let mut url = self.inner.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                Error::InvalidEndpoint(format!("Cannot append path to `{}`", self.inner.base_url))
            })?
            .pop_if_empty()
            .push(&self.inner.api_version)
            .extend(segments.iter());
        Ok(url)
    }

    /// GET a resource.
    ///
    /// # Errors
    ///
    /// See [`Transport::send_json`].
    pub async fn get<R>(&self, route: Route) -> Result<R>
    where
        R: DeserializeOwned,
    {
        self.send_json::<(), R>(Method::GET, route, QueryParams::new(), None)
            .await
    }

    /// GET a resource with query parameters.
    ///
    /// # Errors
    ///
    /// See [`Transport::send_json`].
    pub async fn get_with<R>(&self, route: Route, query: QueryParams) -> Result<R>
    where
        R: DeserializeOwned,
    {
        self.send_json::<(), R>(Method::GET, route, query, None).await
    }

    /// POST a JSON body.
    ///
    /// # Errors
    ///
    /// See [`Transport::send_json`].
    pub async fn post<B, R>(&self, route: Route, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        self.send_json(Method::POST, route, QueryParams::new(), Some(body))
            .await
    }

    /// POST without a body.
    ///
    /// # Errors
    ///
    /// See [`Transport::send_json`].
    pub async fn post_empty<R>(&self, route: Route) -> Result<R>
    where
        R: DeserializeOwned,
    {
        self.send_json::<(), R>(Method::POST, route, QueryParams::new(), None)
            .await
    }

    /// PUT a JSON body.
    ///
    /// # Errors
    ///
    /// See [`Transport::send_json`].
    pub async fn put<B, R>(&self, route: Route, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        self.send_json(Method::PUT, route, QueryParams::new(), Some(body))
            .await
    }

    /// PUT without a body.
    ///
    /// # Errors
    ///
    /// See [`Transport::send_json`].
    pub async fn put_empty<R>(&self, route: Route) -> Result<R>
    where
        R: DeserializeOwned,
    {
        self.send_json::<(), R>(Method::PUT, route, QueryParams::new(), None)
            .await
    }

    /// DELETE a resource.
    ///
    /// # Errors
    ///
    /// See [`Transport::send_json`].
    pub async fn delete<R>(&self, route: Route) -> Result<R>
    where
        R: DeserializeOwned,
    {
        self.send_json::<(), R>(Method::DELETE, route, QueryParams::new(), None)
            .await
    }

    /// DELETE a resource with query parameters.
    ///
    /// # Errors
    ///
    /// See [`Transport::send_json`].
    pub async fn delete_with<R>(&self, route: Route, query: QueryParams) -> Result<R>
    where
        R: DeserializeOwned,
    {
        self.send_json::<(), R>(Method::DELETE, route, query, None)
            .await
    }

    /// Send a request and decode the JSON response.
    ///
    /// # Errors
    ///
    /// - [`Error::Validation`] if the route has unbound placeholders; nothing
    ///   is sent in that case.
    /// - [`Error::Api`] for non-2xx responses carrying `{code, reason}`.
    /// - [`Error::UnexpectedResponse`] for any other non-2xx response.
    /// - [`Error::InvalidResponse`] if a 2xx body does not match `R`.
    /// - Transport errors from `reqwest`.
    pub async fn send_json<B, R>(
        &self,
        method: Method,
        route: Route,
        query: QueryParams,
        body: Option<&B>,
    ) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.url_for(&route)?;
        let path = url.path().to_string();
        let query = self.with_region(&method, query);

        let mut request = self
            .http
            .request(method.clone(), url)
            .query(query.as_pairs())
            .bearer_auth(self.inner.api_key.expose_secret())
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .header(ACCEPT, APPLICATION_JSON);

        if let Some(payload) = body {
            request = request.json(payload);
        }

        if self.inner.log_requests {
            debug!(%method, path = %path, "Civo request");
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|err| Error::HttpError(format!("Failed to read response body: {err}")))?;

        if self.inner.log_requests {
            trace!(status = status.as_u16(), body = %String::from_utf8_lossy(&bytes), "Civo response");
        }

        if status.is_success() {
            return deserialize_body(&path, status, &bytes);
        }

        let text = String::from_utf8_lossy(&bytes).into_owned();
        let error = match ProviderError::parse(&bytes) {
            Some(ProviderError { code, reason }) => Error::Api {
                status: status.as_u16(),
                code,
                reason,
                body: text,
            },
            None => Error::UnexpectedResponse {
                status: status.as_u16(),
                body: text,
            },
        };
        warn!(%method, path = %path, status = status.as_u16(), error = %error, "Civo request failed");
        Err(error)
    }

    fn with_region(&self, method: &Method, mut query: QueryParams) -> QueryParams {
        let applies = match self.inner.region_placement {
            RegionPlacement::GetRequests => *method == Method::GET,
            RegionPlacement::AllRequests => true,
        };
        if applies && !query.contains_key("region") {
            query.push("region", &self.inner.region);
        }
        query
    }
}

fn deserialize_body<R>(path: &str, status: StatusCode, bytes: &[u8]) -> Result<R>
where
    R: DeserializeOwned,
{
    if status == StatusCode::NO_CONTENT || bytes.is_empty() {
        serde_json::from_value(serde_json::Value::Null).map_err(|err| {
            Error::InvalidResponse(format!("Failed to parse empty response for `{path}`: {err}"))
        })
    } else {
        serde_json::from_slice(bytes).map_err(|err| {
            Error::InvalidResponse(format!("Failed to parse response for `{path}`: {err}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::SimpleResponse;
    use serde_json::{json, Value};
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn transport(server: &MockServer) -> Transport {
        let config = CivoConfig::new("test-key")
            .unwrap()
            .with_api_url(server.uri());
        Transport::from_config(&config).unwrap()
    }

    async fn query_of_last_request(server: &MockServer) -> Vec<(String, String)> {
        let requests = server.received_requests().await.unwrap();
        let last = requests.last().unwrap();
        last.url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn url_for_prefixes_version_and_encodes_segments() {
        let config = CivoConfig::new("k")
            .unwrap()
            .with_api_url("https://api.example.com/proxy/");
        let transport = Transport::from_config(&config).unwrap();

        let url = transport
            .url_for(&Route::new("/instances/:id").param("id", "a b/c"))
            .unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/proxy/v2/instances/a%20b%2Fc");
    }

    #[test]
    fn url_for_rejects_missing_params() {
        let config = CivoConfig::new("k").unwrap();
        let transport = Transport::from_config(&config).unwrap();
        let err = transport.url_for(&Route::new("/networks/:id")).unwrap_err();
        assert_eq!(err, Error::required("id"));
    }

    #[test]
    fn fill_region_keeps_explicit_value() {
        let config = CivoConfig::new("k").unwrap().with_region("NYC1");
        let transport = Transport::from_config(&config).unwrap();

        let mut region = None;
        transport.fill_region(&mut region);
        assert_eq!(region.as_deref(), Some("NYC1"));

        let mut region = Some("FRA1".to_string());
        transport.fill_region(&mut region);
        assert_eq!(region.as_deref(), Some("FRA1"));
    }

    #[test]
    fn build_rejects_invalid_config() {
        let config = CivoConfig::new("k").unwrap().with_timeout(0);
        assert!(matches!(
            TransportBuilder::new(config).build(),
            Err(Error::ConfigError(_))
        ));
    }

    #[tokio::test]
    async fn get_sends_auth_and_region() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/regions"))
            .and(query_param("region", "LON1"))
            .and(header("Authorization", "Bearer test-key"))
            .and(header("Accept", "application/json"))
            .and(header("Content-Type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"code": "LON1"}])))
            .mount(&server)
            .await;

        let value: Value = transport(&server).get(Route::new("/regions")).await.unwrap();
        assert_eq!(value, json!([{"code": "LON1"}]));
    }

    #[tokio::test]
    async fn configured_region_is_used() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/networks"))
            .and(query_param("region", "NYC1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let config = CivoConfig::new("k")
            .unwrap()
            .with_api_url(server.uri())
            .with_region("NYC1");
        let transport = Transport::from_config(&config).unwrap();
        let value: Vec<Value> = transport.get(Route::new("/networks")).await.unwrap();
        assert!(value.is_empty());
    }

    #[tokio::test]
    async fn post_sends_json_without_region() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/networks"))
            .and(body_json(json!({"label": "dev"})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"result": "success", "id": "n1"})),
            )
            .mount(&server)
            .await;

        let transport = transport(&server);
        let response: SimpleResponse = transport
            .post(Route::new("/networks"), &json!({"label": "dev"}))
            .await
            .unwrap();
        assert!(response.is_success());
        assert!(query_of_last_request(&server).await.is_empty());
    }

    #[tokio::test]
    async fn all_requests_placement_adds_region_to_writes() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/v2/sshkeys/k1"))
            .and(query_param("region", "FRA1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "success"})))
            .mount(&server)
            .await;

        let config = CivoConfig::new("k")
            .unwrap()
            .with_api_url(server.uri())
            .with_region("FRA1")
            .with_region_placement(RegionPlacement::AllRequests);
        let transport = Transport::from_config(&config).unwrap();
        let response: SimpleResponse = transport
            .delete(Route::new("/sshkeys/:id").param("id", "k1"))
            .await
            .unwrap();
        assert!(response.is_success());
    }

    #[tokio::test]
    async fn explicit_region_query_is_not_duplicated() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/quota"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let transport = transport(&server);
        let _: Value = transport
            .get_with(Route::new("/quota"), QueryParams::new().with("region", "PHX1"))
            .await
            .unwrap();

        assert_eq!(
            query_of_last_request(&server).await,
            vec![("region".to_string(), "PHX1".to_string())]
        );
    }

    #[tokio::test]
    async fn provider_error_body_becomes_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/instances/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "code": "database_instance_not_found",
                "reason": "The requested instance could not be found"
            })))
            .mount(&server)
            .await;

        let err = transport(&server)
            .get::<Value>(Route::new("/instances/:id").param("id", "missing"))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), crate::ErrorKind::Provider);
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.provider_code(), Some("database_instance_not_found"));
        assert_eq!(
            err.provider_reason(),
            Some("The requested instance could not be found")
        );
    }

    #[tokio::test]
    async fn unknown_error_body_is_unexpected() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/regions"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
            .mount(&server)
            .await;

        let err = transport(&server)
            .get::<Value>(Route::new("/regions"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::UnexpectedResponse { status: 502, ref body } if body.contains("bad gateway")
        ));
        assert_eq!(err.kind(), crate::ErrorKind::Unrecognized);
    }

    #[tokio::test]
    async fn shape_mismatch_is_invalid_response() {
        #[derive(Debug, serde::Deserialize)]
        struct Region {
            #[allow(dead_code)]
            code: String,
        }

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/regions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"name": "London"}])))
            .mount(&server)
            .await;

        let err = transport(&server)
            .get::<Vec<Region>>(Route::new("/regions"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn empty_body_decodes_as_null() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/v2/networks/n1"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let value: Option<SimpleResponse> = transport(&server)
            .delete(Route::new("/networks/:id").param("id", "n1"))
            .await
            .unwrap();
        assert_eq!(value, None);
    }

    #[tokio::test]
    async fn missing_param_is_rejected_before_sending() {
        let server = MockServer::start().await;
        let err = transport(&server)
            .get::<Value>(Route::new("/networks/:id").param("id", ""))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), crate::ErrorKind::Validation);
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[test]
    fn transport_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<Transport>();
    }
}
