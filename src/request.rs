//! Request-scoped parameter sources.
//!
//! A [`RequestParams`] is handed to the pager on every call that needs the
//! current page, so nothing is looked up from global state.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Read access to the route/query parameters of the current request.
pub trait RequestParams {
    fn param(&self, name: &str) -> Option<&str>;
}

impl<S: BuildHasher> RequestParams for HashMap<String, String, S> {
    fn param(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl RequestParams for BTreeMap<String, String> {
    fn param(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl RequestParams for [(&str, &str)] {
    fn param(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
    }
}

impl<const N: usize> RequestParams for [(&str, &str); N] {
    fn param(&self, name: &str) -> Option<&str> {
        self.as_slice().param(name)
    }
}

impl<T: RequestParams + ?Sized> RequestParams for &T {
    fn param(&self, name: &str) -> Option<&str> {
        (**self).param(name)
    }
}

#[cfg(feature = "server")]
impl RequestParams for actix_web::web::Query<HashMap<String, String>> {
    fn param(&self, name: &str) -> Option<&str> {
        (**self).param(name)
    }
}
