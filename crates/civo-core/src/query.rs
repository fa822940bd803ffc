//! Query pairs attached to a request.
//!
//! The transport appends `region` to these pairs, and list requests such as
//! `/actions` or `/charges` build theirs from optional request fields.

use std::fmt::Display;

/// Ordered `key=value` pairs for a request's query string.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    /// No pairs.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `key` only when `value` is set.
    pub fn push_opt<T: Display>(&mut self, key: &'static str, value: Option<T>) {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    /// Add `key` with `format` applied to `value` when it is set.
    pub fn push_opt_with<T, F>(&mut self, key: &'static str, value: Option<T>, format: F)
    where
        F: FnOnce(T) -> String,
    {
        if let Some(value) = value {
            self.pairs.push((key, format(value)));
        }
    }

    /// Add `key` unconditionally.
    pub fn push<T: Display>(&mut self, key: &'static str, value: T) {
        self.pairs.push((key, value.to_string()));
    }

    /// [`QueryParams::push`] by value.
    #[must_use]
    pub fn with<T: Display>(mut self, key: &'static str, value: T) -> Self {
        self.push(key, value);
        self
    }

    /// Whether a pair named `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|(name, _)| *name == key)
    }

    /// Pairs in the order they were added.
    #[must_use]
    pub fn as_pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }

    /// Take the pairs.
    #[must_use]
    pub fn into_pairs(self) -> Vec<(&'static str, String)> {
        self.pairs
    }

    /// No pairs were added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::QueryParams;

    #[test]
    fn unset_filters_leave_no_pairs() {
        let mut query = QueryParams::new();
        query.push_opt("resource_id", None::<&str>);
        query.push_opt("include_debug", None::<bool>);
        assert!(query.is_empty());
        assert!(!query.contains_key("resource_id"));
    }

    #[test]
    fn set_filters_keep_insertion_order() {
        let mut query = QueryParams::new();
        query.push_opt("page", Some(3));
        query.push_opt("resource_type", Some("instance"));
        query.push_opt_with("include_debug", Some(true), |flag| {
            if flag { "yes".into() } else { "no".into() }
        });

        assert_eq!(
            query.into_pairs(),
            vec![
                ("page", "3".to_string()),
                ("resource_type", "instance".to_string()),
                ("include_debug", "yes".to_string()),
            ]
        );
    }

    #[test]
    fn region_pair_is_detectable() {
        let query = QueryParams::new().with("region", "FRA1").with("per_page", 50);
        assert!(query.contains_key("region"));
        assert!(!query.contains_key("page"));
        assert_eq!(
            query.as_pairs(),
            &[("region", "FRA1".to_string()), ("per_page", "50".to_string())]
        );
    }
}
