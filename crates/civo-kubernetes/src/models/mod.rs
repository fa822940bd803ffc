//! Data models for Kubernetes and platform resources.

mod application;
mod cluster;
mod kfcluster;
mod pool;

pub use application::{
    Application, ApplicationConfig, EnvVar, ProcessInfo, UpdateApplicationRequest,
};
pub use cluster::{
    Condition, KubernetesCluster, KubernetesClusterConfig, KubernetesClusterPoolConfig,
    KubernetesInstalledApplication, KubernetesInstance, KubernetesMarketplaceApplication,
    KubernetesMarketplacePlan, KubernetesPlanConfiguration, KubernetesPool, KubernetesVersion,
    RequiredPool,
};
pub use kfcluster::{CreateKfClusterRequest, KfCluster, UpdateKfClusterRequest};
pub use pool::{KubernetesClusterPoolUpdateConfig, Taint};
