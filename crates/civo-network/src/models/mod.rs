//! Data models for networking resources.

mod dns;
mod firewall;
mod ip;
mod loadbalancer;
mod network;

pub use dns::{DnsDomain, DnsRecord, DnsRecordConfig, DnsRecordType};
pub(crate) use dns::DomainName;
pub use firewall::{Firewall, FirewallConfig, FirewallResult, FirewallRule, FirewallRuleConfig};
pub use ip::{AssignedTo, CreateIpRequest, Ip, IpAction, IpActionKind, UpdateIpRequest};
pub use loadbalancer::{
    LoadBalancer, LoadBalancerBackend, LoadBalancerBackendConfig, LoadBalancerConfig,
    LoadBalancerOptions, LoadBalancerUpdateConfig,
};
pub use network::{
    CreateRoute, Network, NetworkConfig, NetworkResult, Subnet, SubnetConfig, SubnetRoute,
};
