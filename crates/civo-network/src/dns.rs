//! DNS domain and record endpoints.

use crate::models::{DnsDomain, DnsRecord, DnsRecordConfig, DomainName};
use crate::Result;
use async_trait::async_trait;
use civo_core::find::{find, Findable};
use civo_core::{Error, Route, SimpleResponse, Transport};
use validator::Validate;

/// Client for `/dns`.
#[derive(Debug, Clone)]
pub struct DnsApi {
    transport: Transport,
}

impl DnsApi {
    /// Create the API over a shared transport.
    #[must_use]
    pub const fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// List domains.
    pub async fn list(&self) -> Result<Vec<DnsDomain>> {
        self.transport.get(Route::new("/dns")).await
    }

    /// First domain whose ID or name contains `search`.
    pub async fn find(&self, search: &str) -> Result<DnsDomain> {
        find(self, search).await
    }

    /// Register a domain.
    pub async fn create(&self, name: &str) -> Result<DnsDomain> {
        if name.is_empty() {
            return Err(Error::required("name"));
        }
        self.transport
            .post(Route::new("/dns"), &DomainName { name })
            .await
    }

    /// First domain whose name contains `name`.
    pub async fn get(&self, name: &str) -> Result<DnsDomain> {
        if name.is_empty() {
            return Err(Error::required("name"));
        }
        self.list()
            .await?
            .into_iter()
            .find(|domain| domain.name.contains(name))
            .ok_or_else(|| Error::NotFound("DNS Domain not found".to_string()))
    }

    /// Rename a domain.
    pub async fn update(&self, id: &str, name: &str) -> Result<DnsDomain> {
        if name.is_empty() {
            return Err(Error::required("name"));
        }
        self.transport
            .put(Route::new("/dns/:id").param("id", id), &DomainName { name })
            .await
    }

    /// Delete a domain.
    pub async fn destroy(&self, id: &str) -> Result<SimpleResponse> {
        self.transport
            .delete(Route::new("/dns/:id").param("id", id))
            .await
    }

    /// Add a record to a domain.
    pub async fn create_record(
        &self,
        domain_id: &str,
        config: &DnsRecordConfig,
    ) -> Result<DnsRecord> {
        config.validate()?;
        let route = Route::new("/dns/:domain_id/records").param("domain_id", domain_id);
        self.transport.post(route, config).await
    }

    /// List a domain's records.
    pub async fn list_records(&self, domain_id: &str) -> Result<Vec<DnsRecord>> {
        let route = Route::new("/dns/:domain_id/records").param("domain_id", domain_id);
        self.transport.get(route).await
    }

    /// Find a record of a domain by its ID.
    pub async fn get_record(&self, domain_id: &str, record_id: &str) -> Result<DnsRecord> {
        if record_id.is_empty() {
            return Err(Error::required("record_id"));
        }
        self.list_records(domain_id)
            .await?
            .into_iter()
            .find(|record| record.id == record_id)
            .ok_or_else(|| Error::NotFound("DNS Record not found".to_string()))
    }

    /// Replace a record's contents.
    pub async fn update_record(
        &self,
        record: &DnsRecord,
        config: &DnsRecordConfig,
    ) -> Result<DnsRecord> {
        config.validate()?;
        self.transport.put(record_route(record), config).await
    }

    /// Delete a record.
    pub async fn destroy_record(&self, record: &DnsRecord) -> Result<SimpleResponse> {
        self.transport.delete(record_route(record)).await
    }
}

fn record_route(record: &DnsRecord) -> Route {
    Route::new("/dns/:domain_id/records/:id")
        .param("domain_id", record.domain_id.clone().unwrap_or_default())
        .param("id", record.id.as_str())
}

#[async_trait]
impl Findable for DnsApi {
    type Item = DnsDomain;

    async fn list_items(&self) -> Result<Vec<DnsDomain>> {
        self.list().await
    }
}
