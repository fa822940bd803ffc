//! Kubernetes and platform resources for the Civo API.
//!
//! Managed clusters and their node pools, Kubeflow clusters, and the
//! application platform. Every API shares a [`civo_core::Transport`].

#![deny(missing_docs)]

pub mod applications;
pub mod clusters;
pub mod kfclusters;
pub mod models;
pub mod pools;

pub use applications::ApplicationsApi;
pub use clusters::KubernetesApi;
pub use kfclusters::KfClustersApi;
pub use pools::PoolsApi;

/// Convenient result alias sharing the `civo-core` error type.
pub type Result<T> = civo_core::Result<T>;
