//! Pagination envelope returned by list endpoints.
//!
//! The client never walks pages on its own; a list call returns exactly the
//! page the provider sent.

use crate::query::QueryParams;
use serde::{Deserialize, Serialize};

/// One page of results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginatedList<T> {
    /// Page number, starting at 1
    pub page: u32,
    /// Items per page
    pub per_page: u32,
    /// Total number of pages
    pub pages: u32,
    /// Items on this page
    pub items: Vec<T>,
}

impl<T> PaginatedList<T> {
    /// Returns true if there are pages after this one.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.pages
    }

    /// Consume the envelope and return its items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

/// Page selection for list endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageParams {
    /// Requested page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Requested page size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

impl PageParams {
    /// Select a page and page size.
    #[must_use]
    pub const fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: Some(page),
            per_page: Some(per_page),
        }
    }

    /// Fill unset values from the given defaults.
    #[must_use]
    pub fn or(self, page: u32, per_page: u32) -> Self {
        Self {
            page: Some(self.page.unwrap_or(page)),
            per_page: Some(self.per_page.unwrap_or(per_page)),
        }
    }

    /// Encode as query parameters.
    #[must_use]
    pub fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query.push_opt("page", self.page);
        query.push_opt("per_page", self.per_page);
        query
    }
}
