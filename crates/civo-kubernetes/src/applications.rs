//! Application platform endpoints.

use crate::models::{Application, ApplicationConfig, UpdateApplicationRequest};
use crate::Result;
use async_trait::async_trait;
use civo_core::find::{find, Findable};
use civo_core::naming::random_name;
use civo_core::{PaginatedList, Route, SimpleResponse, Transport};
use civo_network::NetworksApi;
use tracing::info;
use validator::Validate;

/// Size used by [`ApplicationsApi::create_config`].
pub const DEFAULT_APPLICATION_SIZE: &str = "small";

/// Client for `/applications`.
#[derive(Debug, Clone)]
pub struct ApplicationsApi {
    transport: Transport,
}

impl ApplicationsApi {
    /// Create the API over a shared transport.
    #[must_use]
    pub const fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// List applications.
    pub async fn list(&self) -> Result<PaginatedList<Application>> {
        self.transport.get(Route::new("/applications")).await
    }

    /// Fetch an application.
    pub async fn get(&self, id: &str) -> Result<Application> {
        self.transport
            .get(Route::new("/applications/:id").param("id", id))
            .await
    }

    /// Credentials for the application's log stream.
    pub async fn log_auth(&self, id: &str) -> Result<String> {
        self.transport
            .get(Route::new("/applications/:id/log_auth").param("id", id))
            .await
    }

    /// A ready-to-submit config on the default network with a random name.
    pub async fn create_config(&self) -> Result<ApplicationConfig> {
        let network = NetworksApi::new(self.transport.clone())
            .get_default()
            .await?;

        Ok(ApplicationConfig {
            name: random_name("app"),
            network_id: network.id,
            description: String::new(),
            size: DEFAULT_APPLICATION_SIZE.to_string(),
            ssh_key_ids: Vec::new(),
            region: Some(self.transport.region().to_string()),
        })
    }

    /// First application whose ID or name contains `search`.
    pub async fn find(&self, search: &str) -> Result<Application> {
        find(self, search).await
    }

    /// Create an application.
    pub async fn create(&self, config: &ApplicationConfig) -> Result<Application> {
        config.validate()?;
        let mut body = config.clone();
        self.transport.fill_region(&mut body.region);

        info!(name = %body.name, size = %body.size, "Creating application");
        self.transport.post(Route::new("/applications"), &body).await
    }

    /// Update an application.
    pub async fn update(&self, id: &str, request: &UpdateApplicationRequest) -> Result<Application> {
        request.validate()?;
        self.transport
            .put(Route::new("/applications/:id").param("id", id), request)
            .await
    }

    /// Delete an application.
    pub async fn destroy(&self, id: &str) -> Result<SimpleResponse> {
        self.transport
            .delete(Route::new("/applications/:id").param("id", id))
            .await
    }
}

#[async_trait]
impl Findable for ApplicationsApi {
    type Item = Application;

    async fn list_items(&self) -> Result<Vec<Application>> {
        Ok(self.list().await?.items)
    }
}
