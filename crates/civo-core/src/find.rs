//! Substring lookup over listed resources.
//!
//! Every resource family offers a `find(search)` convenience that lists the
//! resource and returns the first item whose identifying fields contain the
//! search term, ignoring case.

use crate::{Error, Result};
use async_trait::async_trait;

/// A value that can be matched by [`find_match`].
pub trait Searchable {
    /// Fields compared against the search term, e.g. id and name.
    fn search_keys(&self) -> Vec<&str>;
}

impl Searchable for String {
    fn search_keys(&self) -> Vec<&str> {
        vec![self.as_str()]
    }
}

/// A resource API whose full listing can be searched.
#[cfg_attr(test, mockall::automock(type Item = String;))]
#[async_trait]
pub trait Findable: Send + Sync {
    /// Listed item type.
    type Item: Searchable + Send;

    /// Fetch the items to search through.
    async fn list_items(&self) -> Result<Vec<Self::Item>>;
}

/// Return the first item with a key containing `search`, ignoring case.
///
/// The term is compared as given, so an empty term matches the first item.
///
/// # Errors
///
/// Returns [`Error::NotFound`] when nothing matches.
pub fn find_match<T, I>(items: I, search: &str) -> Result<T>
where
    T: Searchable,
    I: IntoIterator<Item = T>,
{
    let needle = search.to_lowercase();
    items
        .into_iter()
        .find(|item| {
            item.search_keys()
                .iter()
                .any(|key| key.to_lowercase().contains(&needle))
        })
        .ok_or_else(|| Error::zero_matches(search))
}

/// List through `source` and return the first match for `search`.
///
/// # Errors
///
/// Propagates listing failures, otherwise as [`find_match`].
pub async fn find<F>(source: &F, search: &str) -> Result<F::Item>
where
    F: Findable + ?Sized,
{
    let items = source.list_items().await?;
    find_match(items, search)
}
