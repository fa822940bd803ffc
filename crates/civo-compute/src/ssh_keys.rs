//! SSH key endpoints.

use crate::models::{NewSshKey, SshKey, SshKeyName};
use crate::Result;
use async_trait::async_trait;
use civo_core::find::{find, Findable};
use civo_core::{Error, Route, SimpleResponse, Transport};

/// Client for `/sshkeys`.
#[derive(Debug, Clone)]
pub struct SshKeysApi {
    transport: Transport,
}

impl SshKeysApi {
    /// Create the API over a shared transport.
    #[must_use]
    pub const fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// List uploaded keys.
    pub async fn list(&self) -> Result<Vec<SshKey>> {
        self.transport.get(Route::new("/sshkeys")).await
    }

    /// Fetch a key.
    pub async fn get(&self, id: &str) -> Result<SshKey> {
        self.transport
            .get(Route::new("/sshkeys/:id").param("id", id))
            .await
    }

    /// Upload a public key.
    pub async fn create(&self, name: &str, public_key: &str) -> Result<SimpleResponse> {
        if name.is_empty() {
            return Err(Error::required("name"));
        }
        if public_key.is_empty() {
            return Err(Error::required("public_key"));
        }
        self.transport
            .post(Route::new("/sshkeys"), &NewSshKey { name, public_key })
            .await
    }

    /// Rename a key.
    pub async fn update(&self, id: &str, name: &str) -> Result<SimpleResponse> {
        if name.is_empty() {
            return Err(Error::required("name"));
        }
        self.transport
            .put(Route::new("/sshkeys/:id").param("id", id), &SshKeyName { name })
            .await
    }

    /// First key whose ID or name contains `search`.
    pub async fn find(&self, search: &str) -> Result<SshKey> {
        find(self, search).await
    }

    /// Delete a key.
    pub async fn destroy(&self, id: &str) -> Result<SimpleResponse> {
        self.transport
            .delete(Route::new("/sshkeys/:id").param("id", id))
            .await
    }
}

#[async_trait]
impl Findable for SshKeysApi {
    type Item = SshKey;

    async fn list_items(&self) -> Result<Vec<SshKey>> {
        self.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use civo_core::CivoConfig;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn api(server: &MockServer) -> SshKeysApi {
        let config = CivoConfig::new("test-key")
            .unwrap()
            .with_api_url(server.uri());
        SshKeysApi::new(Transport::from_config(&config).unwrap())
    }

    #[tokio::test]
    async fn create_key() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/sshkeys"))
            .and(body_json(json!({"name": "laptop", "public_key": "ssh-ed25519 AAAA"})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"result": "success", "id": "key-1"})),
            )
            .mount(&server)
            .await;

        let response = api(&server).create("laptop", "ssh-ed25519 AAAA").await.unwrap();
        assert_eq!(response.id.as_deref(), Some("key-1"));
    }

    #[tokio::test]
    async fn create_requires_public_key() {
        let server = MockServer::start().await;
        let err = api(&server).create("laptop", "").await.unwrap_err();
        assert_eq!(err, Error::required("public_key"));
    }

    #[tokio::test]
    async fn find_and_update_key() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/sshkeys"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "id": "key-1",
                    "name": "laptop",
                    "fingerprint": "SHA256:abc",
                    "public_key": "ssh-ed25519 AAAA",
                    "created_at": "2024-01-05T08:30:00Z"
                }
            ])))
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/v2/sshkeys/key-1"))
            .and(body_json(json!({"name": "desktop"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "success"})))
            .mount(&server)
            .await;

        let api = api(&server);
        let key = api.find("LAP").await.unwrap();
        assert!(key.created_at.is_some());
        assert!(api.update(&key.id, "desktop").await.unwrap().is_success());
    }
}
