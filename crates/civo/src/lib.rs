//! Typed async client for the Civo cloud API.
//!
//! [`Civo`] builds one [`Transport`] from a [`CivoConfig`] and exposes every
//! resource API as a public field:
//!
//! ```no_run
//! # async fn run() -> civo::Result<()> {
//! let civo = civo::Civo::new(civo::CivoConfig::new("api-key")?.with_region("FRA1"))?;
//! let instances = civo.instances.list(Default::default()).await?;
//! let cluster = civo.kubernetes.find_cluster("production").await?;
//! # let _ = (instances, cluster);
//! # Ok(())
//! # }
//! ```
//!
//! The resource crates can also be used on their own over a shared
//! [`Transport`].

#![deny(missing_docs)]

pub use civo_account as account;
pub use civo_compute as compute;
pub use civo_kubernetes as kubernetes;
pub use civo_network as network;
pub use civo_storage as storage;

pub use civo_core::client::ClientConfig;
pub use civo_core::{
    CivoConfig, Error, ErrorKind, PageParams, PaginatedList, RegionPlacement, Result,
    SimpleResponse, Transport, TransportBuilder,
};

use civo_account::{
    AccountsApi, ActionsApi, ChargesApi, OrganizationsApi, PermissionsApi, QuotaApi, RolesApi,
    TeamsApi, UsersApi, WebhooksApi,
};
use civo_compute::{DiskImagesApi, InstancesApi, RegionsApi, SshKeysApi};
use civo_kubernetes::{ApplicationsApi, KfClustersApi, KubernetesApi, PoolsApi};
use civo_network::{DnsApi, FirewallsApi, IpsApi, LoadBalancersApi, NetworksApi, SubnetsApi};
use civo_storage::{
    DatabaseBackupsApi, DatabasesApi, ObjectStoreCredentialsApi, ObjectStoresApi, VolumesApi,
};
use tracing::debug;

/// Every resource API over one shared transport.
#[derive(Debug, Clone)]
pub struct Civo {
    transport: Transport,
    /// Regions.
    pub regions: RegionsApi,
    /// Compute instances.
    pub instances: InstancesApi,
    /// Disk images.
    pub disk_images: DiskImagesApi,
    /// SSH keys.
    pub ssh_keys: SshKeysApi,
    /// Private networks.
    pub networks: NetworksApi,
    /// Network subnets.
    pub subnets: SubnetsApi,
    /// Firewalls and rules.
    pub firewalls: FirewallsApi,
    /// Load balancers.
    pub loadbalancers: LoadBalancersApi,
    /// DNS domains and records.
    pub dns: DnsApi,
    /// Reserved IPs.
    pub ips: IpsApi,
    /// Kubernetes clusters.
    pub kubernetes: KubernetesApi,
    /// Kubernetes node pools.
    pub pools: PoolsApi,
    /// Kubeflow clusters.
    pub kfclusters: KfClustersApi,
    /// Platform applications.
    pub applications: ApplicationsApi,
    /// Block volumes.
    pub volumes: VolumesApi,
    /// Object stores.
    pub objectstores: ObjectStoresApi,
    /// Object store credentials.
    pub objectstore_credentials: ObjectStoreCredentialsApi,
    /// Managed databases.
    pub databases: DatabasesApi,
    /// Database backups.
    pub database_backups: DatabaseBackupsApi,
    /// Accounts.
    pub accounts: AccountsApi,
    /// Organization.
    pub organizations: OrganizationsApi,
    /// Teams and members.
    pub teams: TeamsApi,
    /// Users.
    pub users: UsersApi,
    /// Roles.
    pub roles: RolesApi,
    /// Permissions.
    pub permissions: PermissionsApi,
    /// Webhooks.
    pub webhooks: WebhooksApi,
    /// Audit log.
    pub actions: ActionsApi,
    /// Charges.
    pub charges: ChargesApi,
    /// Quota.
    pub quota: QuotaApi,
}

impl Civo {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be built.
    pub fn new(config: CivoConfig) -> Result<Self> {
        Ok(Self::from_transport(TransportBuilder::new(config).build()?))
    }

    /// Build a client from `CIVO_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `CIVO_API_KEY` is unset or any value is invalid.
    pub fn from_env() -> Result<Self> {
        Self::new(CivoConfig::from_env()?)
    }

    /// Build a client over an existing transport.
    #[must_use]
    pub fn from_transport(transport: Transport) -> Self {
        debug!(
            base_url = %transport.base_url(),
            region = transport.region(),
            "Building Civo client"
        );
        Self {
            regions: RegionsApi::new(transport.clone()),
            instances: InstancesApi::new(transport.clone()),
            disk_images: DiskImagesApi::new(transport.clone()),
            ssh_keys: SshKeysApi::new(transport.clone()),
            networks: NetworksApi::new(transport.clone()),
            subnets: SubnetsApi::new(transport.clone()),
            firewalls: FirewallsApi::new(transport.clone()),
            loadbalancers: LoadBalancersApi::new(transport.clone()),
            dns: DnsApi::new(transport.clone()),
            ips: IpsApi::new(transport.clone()),
            kubernetes: KubernetesApi::new(transport.clone()),
            pools: PoolsApi::new(transport.clone()),
            kfclusters: KfClustersApi::new(transport.clone()),
            applications: ApplicationsApi::new(transport.clone()),
            volumes: VolumesApi::new(transport.clone()),
            objectstores: ObjectStoresApi::new(transport.clone()),
            objectstore_credentials: ObjectStoreCredentialsApi::new(transport.clone()),
            databases: DatabasesApi::new(transport.clone()),
            database_backups: DatabaseBackupsApi::new(transport.clone()),
            accounts: AccountsApi::new(transport.clone()),
            organizations: OrganizationsApi::new(transport.clone()),
            teams: TeamsApi::new(transport.clone()),
            users: UsersApi::new(transport.clone()),
            roles: RolesApi::new(transport.clone()),
            permissions: PermissionsApi::new(transport.clone()),
            webhooks: WebhooksApi::new(transport.clone()),
            actions: ActionsApi::new(transport.clone()),
            charges: ChargesApi::new(transport.clone()),
            quota: QuotaApi::new(transport.clone()),
            transport,
        }
    }

    /// The shared transport.
    #[must_use]
    pub const fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Region code requests are scoped to.
    #[must_use]
    pub fn region(&self) -> &str {
        self.transport.region()
    }
}
