//! Networking resources for the Civo API.
//!
//! Private networks and subnets, firewalls, load balancers, DNS, and reserved
//! IP addresses. Every API shares a [`civo_core::Transport`].

#![deny(missing_docs)]

pub mod dns;
pub mod firewalls;
pub mod ips;
pub mod loadbalancers;
pub mod models;
pub mod networks;
pub mod subnets;

pub use dns::DnsApi;
pub use firewalls::FirewallsApi;
pub use ips::IpsApi;
pub use loadbalancers::LoadBalancersApi;
pub use networks::NetworksApi;
pub use subnets::SubnetsApi;

/// Convenient result alias sharing the `civo-core` error type.
pub type Result<T> = civo_core::Result<T>;
