//! Resource path templates.
//!
//! Paths are written as templates such as `/networks/:network_id/subnets/:id?`.
//! A `:name` segment is required and a `:name?` segment is dropped when no
//! value was supplied for it.

use crate::{Error, Result};

/// A path template together with the values bound to its placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    template: &'static str,
    params: Vec<(&'static str, String)>,
}

impl Route {
    /// Start a route from a template.
    #[must_use]
    pub const fn new(template: &'static str) -> Self {
        Self {
            template,
            params: Vec::new(),
        }
    }

    /// Bind a placeholder value.
    #[must_use]
    pub fn param(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.params.push((name, value.into()));
        self
    }

    /// Bind a placeholder value when present.
    #[must_use]
    pub fn param_opt<T>(self, name: &'static str, value: Option<T>) -> Self
    where
        T: Into<String>,
    {
        match value {
            Some(value) => self.param(name, value),
            None => self,
        }
    }

    /// The raw template.
    #[must_use]
    pub const fn template(&self) -> &'static str {
        self.template
    }

    /// Resolve the template into unencoded path segments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when a required placeholder has no value
    /// or an empty one.
    pub fn segments(&self) -> Result<Vec<String>> {
        let mut segments = Vec::new();

        for fragment in self.template.split('/').filter(|f| !f.is_empty()) {
            let Some(placeholder) = fragment.strip_prefix(':') else {
                segments.push(fragment.to_string());
                continue;
            };

            let (name, optional) = match placeholder.strip_suffix('?') {
                Some(name) => (name, true),
                None => (placeholder, false),
            };

            match self.lookup(name) {
                Some(value) if !value.is_empty() => segments.push(value.to_string()),
                Some(_) | None if optional => {}
                _ => return Err(Error::required(name)),
            }
        }

        Ok(segments)
    }

    /// Resolve the template into a `/`-joined path.
    ///
    /// Values are inserted verbatim; the transport percent-encodes each
    /// segment when it builds the request URL.
    ///
    /// # Errors
    ///
    /// See [`Route::segments`].
    pub fn render(&self) -> Result<String> {
        Ok(format!("/{}", self.segments()?.join("/")))
    }

    fn lookup(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

impl From<&'static str> for Route {
    fn from(template: &'static str) -> Self {
        Self::new(template)
    }
}
