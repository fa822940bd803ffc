//! Account-level resources for the Civo API.
//!
//! Accounts and organizations, teams, users, roles and permissions,
//! webhooks, the audit log, charges and quotas.

#![deny(missing_docs)]

pub mod accounts;
pub mod billing;
pub mod models;
pub mod teams;
pub mod users;
pub mod webhooks;

pub use accounts::{AccountsApi, OrganizationsApi};
pub use billing::{ActionsApi, ChargesApi, QuotaApi};
pub use teams::TeamsApi;
pub use users::{PermissionsApi, RolesApi, UsersApi};
pub use webhooks::WebhooksApi;

/// Convenient result alias sharing the `civo-core` error type.
pub type Result<T> = civo_core::Result<T>;
