//! Account and organization endpoints.

use crate::models::{Account, Organization};
use crate::Result;
use civo_core::{Error, PaginatedList, Route, Transport};
use serde::Serialize;

#[derive(Serialize)]
struct NameBody<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct JoinBody<'a> {
    organization_id: &'a str,
    organization_token: &'a str,
}

/// Client for `/accounts`.
#[derive(Debug, Clone)]
pub struct AccountsApi {
    transport: Transport,
}

impl AccountsApi {
    /// Create the API over a shared transport.
    #[must_use]
    pub const fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// List accounts the API key can access.
    pub async fn list(&self) -> Result<PaginatedList<Account>> {
        self.transport.get(Route::new("/accounts")).await
    }

    /// ID of the first listed account.
    pub async fn get_id(&self) -> Result<String> {
        self.list()
            .await?
            .items
            .into_iter()
            .next()
            .map(|account| account.id)
            .ok_or_else(|| Error::NotFound("No accounts found".to_string()))
    }
}

/// Client for `/organization`.
#[derive(Debug, Clone)]
pub struct OrganizationsApi {
    transport: Transport,
}

impl OrganizationsApi {
    /// Create the API over a shared transport.
    #[must_use]
    pub const fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// The organization of the current account.
    pub async fn get(&self) -> Result<Organization> {
        self.transport.get(Route::new("/organization")).await
    }

    /// Create an organization.
    pub async fn create(&self, name: &str) -> Result<Organization> {
        if name.is_empty() {
            return Err(Error::required("name"));
        }
        self.transport
            .post(Route::new("/organization"), &NameBody { name })
            .await
    }

    /// Rename the organization.
    pub async fn rename(&self, name: &str) -> Result<Organization> {
        if name.is_empty() {
            return Err(Error::required("name"));
        }
        self.transport
            .put(Route::new("/organization"), &NameBody { name })
            .await
    }

    /// Join the current account to an organization.
    pub async fn add_account(
        &self,
        organization_id: &str,
        organization_token: &str,
    ) -> Result<Vec<Account>> {
        if organization_id.is_empty() {
            return Err(Error::required("organization_id"));
        }
        if organization_token.is_empty() {
            return Err(Error::required("organization_token"));
        }
        let body = JoinBody {
            organization_id,
            organization_token,
        };
        self.transport
            .post(Route::new("/organization/accounts"), &body)
            .await
    }

    /// Accounts in the organization.
    pub async fn list_accounts(&self) -> Result<Vec<Account>> {
        self.transport
            .get(Route::new("/organization/accounts"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use civo_core::CivoConfig;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn transport(server: &MockServer) -> Transport {
        let config = CivoConfig::new("test-key")
            .unwrap()
            .with_api_url(server.uri());
        Transport::from_config(&config).unwrap()
    }

    #[tokio::test]
    async fn get_id_returns_first_account() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/accounts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "page": 1, "per_page": 20, "pages": 1,
                "items": [
                    {"id": "acc-1", "label": "primary", "enabled": true},
                    {"id": "acc-2", "label": "secondary"}
                ]
            })))
            .mount(&server)
            .await;

        let id = AccountsApi::new(transport(&server)).get_id().await.unwrap();
        assert_eq!(id, "acc-1");
    }

    #[tokio::test]
    async fn get_id_without_accounts() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/accounts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "page": 1, "per_page": 20, "pages": 0, "items": []
            })))
            .mount(&server)
            .await;

        let err = AccountsApi::new(transport(&server)).get_id().await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn join_organization() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/organization/accounts"))
            .and(body_json(json!({"organization_id": "org-1", "organization_token": "tok"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "acc-1"}, {"id": "acc-7"}
            ])))
            .mount(&server)
            .await;

        let api = OrganizationsApi::new(transport(&server));
        let accounts = api.add_account("org-1", "tok").await.unwrap();
        assert_eq!(accounts.len(), 2);
        assert_eq!(
            api.add_account("org-1", "").await.unwrap_err(),
            Error::required("organization_token")
        );
    }

    #[tokio::test]
    async fn rename_organization() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/v2/organization"))
            .and(body_json(json!({"name": "Acme Cloud"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "org-1", "name": "Acme Cloud", "token": "tok",
                "created_at": "2023-11-20T08:00:00Z"
            })))
            .mount(&server)
            .await;

        let org = OrganizationsApi::new(transport(&server))
            .rename("Acme Cloud")
            .await
            .unwrap();
        assert_eq!(org.name, "Acme Cloud");
        assert!(org.created_at.is_some());
    }
}
