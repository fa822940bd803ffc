//! Audit log, charge and quota endpoints.

use crate::models::{rfc3339, Action, ActionListRequest, Charge, Quota};
use crate::Result;
use chrono::{DateTime, Utc};
use civo_core::{Error, PaginatedList, QueryParams, Route, Transport};

/// Client for `/actions`.
#[derive(Debug, Clone)]
pub struct ActionsApi {
    transport: Transport,
}

impl ActionsApi {
    /// Create the API over a shared transport.
    #[must_use]
    pub const fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// List audit log entries matching `request`.
    pub async fn list(&self, request: &ActionListRequest) -> Result<PaginatedList<Action>> {
        self.transport
            .get_with(Route::new("/actions"), request.to_query())
            .await
    }
}

/// Client for `/charges`.
#[derive(Debug, Clone)]
pub struct ChargesApi {
    transport: Transport,
}

impl ChargesApi {
    /// Create the API over a shared transport.
    #[must_use]
    pub const fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Charges incurred between `from` and `to`.
    pub async fn list(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> Result<Vec<Charge>> {
        if from > to {
            return Err(Error::Validation(
                "from must not be later than to".to_string(),
            ));
        }
        let query = QueryParams::new()
            .with("from", rfc3339(from))
            .with("to", rfc3339(to));
        self.transport.get_with(Route::new("/charges"), query).await
    }
}

/// Client for `/quota`.
#[derive(Debug, Clone)]
pub struct QuotaApi {
    transport: Transport,
}

impl QuotaApi {
    /// Create the API over a shared transport.
    #[must_use]
    pub const fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Current limits and usage.
    pub async fn get(&self) -> Result<Quota> {
        self.transport.get(Route::new("/quota")).await
    }
}
