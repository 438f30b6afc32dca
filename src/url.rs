//! Link building for page navigation.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UrlError {
    #[error("failed to encode query string: {0}")]
    Encode(#[from] serde_html_form::ser::Error),
}

/// Builds a link to `path` carrying the given query parameters.
pub trait UrlBuilder {
    fn build(&self, path: &str, params: &[(&str, String)]) -> Result<String, UrlError>;
}

/// Form-encodes parameters onto the path with `serde_html_form`.
///
/// Persistent parameters (for example the active sort) are added to every
/// link unless the call overrides the same key.
#[derive(Debug, Clone, Default)]
pub struct QueryUrlBuilder {
    base: String,
    persistent: Vec<(String, String)>,
}

impl QueryUrlBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefix prepended to every path, e.g. `https://shop.example.com`.
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    pub fn persist(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.persistent.push((key.into(), value.into()));
        self
    }

    fn join(&self, path: &str) -> String {
        if self.base.is_empty() {
            return path.to_string();
        }
        let base = self.base.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            base.to_string()
        } else {
            format!("{base}/{path}")
        }
    }
}

impl UrlBuilder for QueryUrlBuilder {
    fn build(&self, path: &str, params: &[(&str, String)]) -> Result<String, UrlError> {
        let pairs: Vec<(&str, &str)> = self
            .persistent
            .iter()
            .filter(|(key, _)| !params.iter().any(|(name, _)| name == key))
            .map(|(key, value)| (key.as_str(), value.as_str()))
            .chain(params.iter().map(|(key, value)| (*key, value.as_str())))
            .collect();

        let url = self.join(path);
        if pairs.is_empty() {
            return Ok(url);
        }

        let query = serde_html_form::to_string(&pairs)?;

        let separator = if url.contains('?') { '&' } else { '?' };
        Ok(format!("{url}{separator}{query}"))
    }
}
