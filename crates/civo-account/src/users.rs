//! User, role and permission endpoints.

use crate::models::{Permission, Role, UserEverything};
use crate::Result;
use civo_core::{Error, Route, SimpleResponse, Transport};
use serde::Serialize;

#[derive(Serialize)]
struct RoleBody<'a> {
    name: &'a str,
    permissions: &'a str,
}

/// Client for `/users`.
#[derive(Debug, Clone)]
pub struct UsersApi {
    transport: Transport,
}

impl UsersApi {
    /// Create the API over a shared transport.
    #[must_use]
    pub const fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// The user with all of their accounts, organizations, teams and roles.
    pub async fn everything(&self, user_id: &str) -> Result<UserEverything> {
        self.transport
            .get(Route::new("/users/:user_id/everything").param("user_id", user_id))
            .await
    }
}

/// Client for `/roles`.
#[derive(Debug, Clone)]
pub struct RolesApi {
    transport: Transport,
}

impl RolesApi {
    /// Create the API over a shared transport.
    #[must_use]
    pub const fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// List roles.
    pub async fn list(&self) -> Result<Vec<Role>> {
        self.transport.get(Route::new("/roles")).await
    }

    /// Create a role from comma-separated permission codes.
    pub async fn create(&self, name: &str, permissions: &str) -> Result<Role> {
        if name.is_empty() {
            return Err(Error::required("name"));
        }
        if permissions.is_empty() {
            return Err(Error::required("permissions"));
        }
        self.transport
            .post(Route::new("/roles"), &RoleBody { name, permissions })
            .await
    }

    /// Delete a role.
    pub async fn destroy(&self, id: &str) -> Result<SimpleResponse> {
        self.transport
            .delete(Route::new("/roles/:id").param("id", id))
            .await
    }
}

/// Client for `/permissions`.
#[derive(Debug, Clone)]
pub struct PermissionsApi {
    transport: Transport,
}

impl PermissionsApi {
    /// Create the API over a shared transport.
    #[must_use]
    pub const fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// List grantable permissions.
    pub async fn list(&self) -> Result<Vec<Permission>> {
        self.transport.get(Route::new("/permissions")).await
    }
}
