//! Data models for account-level resources.

mod account;
mod billing;
mod webhook;

pub use account::{
    Account, Organization, Permission, Role, Team, TeamMember, User, UserEverything,
};
pub(crate) use billing::rfc3339;
pub use billing::{Action, ActionListRequest, Charge, Quota};
pub use webhook::{Webhook, WebhookConfig};
