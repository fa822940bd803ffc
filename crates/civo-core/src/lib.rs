//! # civo-core
//!
//! Shared building blocks for the Civo API client crates.
//!
//! ## Modules
//!
//! - [`error`] - Error type and provider error body detection
//! - [`config`] - API key, region and endpoint configuration
//! - [`client`] - HTTP client settings
//! - [`route`] - Path templates with `:param` placeholders
//! - [`transport`] - Authenticated JSON transport
//! - [`query`] - Query string builder
//! - [`pagination`] - Pagination envelope for list endpoints
//! - [`find`] - Case-insensitive substring lookup over listings
//! - [`naming`] - Generated default names
//! - [`response`] - Generic acknowledgement body

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod error;
pub mod find;
pub mod naming;
pub mod pagination;
pub mod query;
pub mod response;
pub mod route;
pub mod transport;

// Re-export commonly used types
pub use config::{CivoConfig, RegionPlacement};
pub use error::{Error, ErrorKind, Result};
pub use find::{Findable, Searchable};
pub use pagination::{PageParams, PaginatedList};
pub use query::QueryParams;
pub use response::SimpleResponse;
pub use route::Route;
pub use transport::{Transport, TransportBuilder};
