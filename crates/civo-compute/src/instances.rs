//! Instance endpoints.

use crate::disk_images::DiskImagesApi;
use crate::models::{Instance, InstanceConfig, InstanceUpdate};
use crate::Result;
use async_trait::async_trait;
use civo_core::find::{find, Findable};
use civo_core::naming::random_name;
use civo_core::{Error, PageParams, PaginatedList, Route, SimpleResponse, Transport};
use civo_network::NetworksApi;
use serde::Serialize;
use std::net::IpAddr;
use tracing::info;
use validator::Validate;

/// Disk image used by [`InstancesApi::create_config`].
pub const DEFAULT_DISK_IMAGE: &str = "ubuntu-focal";

/// Size used by [`InstancesApi::create_config`].
pub const DEFAULT_SIZE: &str = "g3.medium";

/// Login user used by [`InstancesApi::create_config`].
pub const DEFAULT_INITIAL_USER: &str = "civo";

const DEFAULT_PAGE: u32 = 1;
const DEFAULT_PER_PAGE: u32 = 15;

#[derive(Serialize)]
struct RegionBody<'a> {
    region: &'a str,
}

#[derive(Serialize)]
struct TagsBody<'a> {
    tags: String,
    region: &'a str,
}

#[derive(Serialize)]
struct ResizeBody<'a> {
    size: &'a str,
    region: &'a str,
}

#[derive(Serialize)]
struct FirewallBody<'a> {
    firewall_id: &'a str,
    region: &'a str,
}

/// Client for `/instances`.
#[derive(Debug, Clone)]
pub struct InstancesApi {
    transport: Transport,
}

impl InstancesApi {
    /// Create the API over a shared transport.
    #[must_use]
    pub const fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// List one page of instances; unset values default to page 1 of 15.
    pub async fn list(&self, page: PageParams) -> Result<PaginatedList<Instance>> {
        let query = page.or(DEFAULT_PAGE, DEFAULT_PER_PAGE).to_query();
        self.transport
            .get_with(Route::new("/instances"), query)
            .await
    }

    /// First instance on the first page whose ID or hostname contains `search`.
    pub async fn find(&self, search: &str) -> Result<Instance> {
        find(self, search).await
    }

    /// Fetch an instance.
    pub async fn get(&self, id: &str) -> Result<Instance> {
        self.transport
            .get(Route::new("/instances/:id").param("id", id))
            .await
    }

    /// Build a ready-to-use config on the default network and disk image.
    pub async fn create_config(&self) -> Result<InstanceConfig> {
        let network = NetworksApi::new(self.transport.clone())
            .get_default()
            .await?;
        let image = DiskImagesApi::new(self.transport.clone())
            .list()
            .await?
            .into_iter()
            .find(|image| image.name.as_deref() == Some(DEFAULT_DISK_IMAGE))
            .ok_or_else(|| Error::NotFound("Disk image not found".to_string()))?;

        Ok(InstanceConfig {
            count: 1,
            hostname: random_name("civo"),
            size: DEFAULT_SIZE.to_string(),
            region: Some(self.transport.region().to_string()),
            public_ip: Some("create".to_string()),
            network_id: network.id,
            template_id: Some(image.id),
            initial_user: Some(DEFAULT_INITIAL_USER.to_string()),
            ..InstanceConfig::default()
        })
    }

    /// Create an instance.
    pub async fn create(&self, config: &InstanceConfig) -> Result<Instance> {
        config.validate()?;
        let mut body = config.clone();
        self.transport.fill_region(&mut body.region);

        info!(hostname = %body.hostname, size = %body.size, "Creating instance");
        self.transport.post(Route::new("/instances"), &body).await
    }

    /// Replace an instance's tags.
    pub async fn set_tags(&self, id: &str, tags: &[String]) -> Result<SimpleResponse> {
        let body = TagsBody {
            tags: tags.join(" "),
            region: self.transport.region(),
        };
        self.transport
            .put(Route::new("/instances/:id/tags").param("id", id), &body)
            .await
    }

    /// Push an instance's hostname, reverse DNS, notes and subnets.
    ///
    /// Empty notes are cleared on the provider side.
    pub async fn update(&self, instance: &Instance) -> Result<SimpleResponse> {
        let body = InstanceUpdate::new(instance, self.transport.region());
        self.transport
            .put(
                Route::new("/instances/:id").param("id", instance.id.as_str()),
                &body,
            )
            .await
    }

    /// Delete an instance.
    pub async fn destroy(&self, id: &str) -> Result<SimpleResponse> {
        info!(id, "Deleting instance");
        self.transport
            .delete(Route::new("/instances/:id").param("id", id))
            .await
    }

    /// Power-cycle an instance.
    pub async fn hard_reboot(&self, id: &str) -> Result<SimpleResponse> {
        self.post_region(Route::new("/instances/:id/hard_reboots").param("id", id))
            .await
    }

    /// Reboot an instance from inside the guest.
    pub async fn soft_reboot(&self, id: &str) -> Result<SimpleResponse> {
        self.post_region(Route::new("/instances/:id/soft_reboots").param("id", id))
            .await
    }

    /// Shut an instance down.
    pub async fn stop(&self, id: &str) -> Result<SimpleResponse> {
        self.put_region(Route::new("/instances/:id/stop").param("id", id))
            .await
    }

    /// Start a stopped instance.
    pub async fn start(&self, id: &str) -> Result<SimpleResponse> {
        self.put_region(Route::new("/instances/:id/start").param("id", id))
            .await
    }

    /// URL of the instance's web console.
    pub async fn console_url(&self, id: &str) -> Result<String> {
        self.transport
            .get(Route::new("/instances/:id/console").param("id", id))
            .await
    }

    /// Resize an instance.
    pub async fn upgrade(&self, id: &str, size: &str) -> Result<SimpleResponse> {
        if size.is_empty() {
            return Err(Error::required("size"));
        }
        let body = ResizeBody {
            size,
            region: self.transport.region(),
        };
        self.transport
            .put(Route::new("/instances/:id/resize").param("id", id), &body)
            .await
    }

    /// Move a public IP onto an instance.
    pub async fn move_public_ip(&self, id: &str, ip: &str) -> Result<SimpleResponse> {
        ip.parse::<IpAddr>()
            .map_err(|_| Error::Validation(format!("{ip} is not a valid IP address")))?;
        let route = Route::new("/instances/:id/ip/:ip")
            .param("id", id)
            .param("ip", ip);
        self.transport.put_empty(route).await
    }

    /// Put an instance behind a firewall.
    pub async fn set_firewall(&self, id: &str, firewall_id: &str) -> Result<SimpleResponse> {
        if firewall_id.is_empty() {
            return Err(Error::required("firewall_id"));
        }
        let body = FirewallBody {
            firewall_id,
            region: self.transport.region(),
        };
        self.transport
            .put(Route::new("/instances/:id/firewall").param("id", id), &body)
            .await
    }

    async fn post_region(&self, route: Route) -> Result<SimpleResponse> {
        let body = RegionBody {
            region: self.transport.region(),
        };
        self.transport.post(route, &body).await
    }

    async fn put_region(&self, route: Route) -> Result<SimpleResponse> {
        let body = RegionBody {
            region: self.transport.region(),
        };
        self.transport.put(route, &body).await
    }
}

#[async_trait]
impl Findable for InstancesApi {
    type Item = Instance;

    async fn list_items(&self) -> Result<Vec<Instance>> {
        Ok(self.list(PageParams::default()).await?.items)
    }
}
