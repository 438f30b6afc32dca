//! Configuration model loaded from external sources.

use serde::Deserialize;
use validator::Validate;

use crate::blocks::pager::{DEFAULT_LIMIT, DEFAULT_PAGE_PARAMETER};

#[derive(Clone, Debug, Deserialize, Validate)]
/// Settings for the demo listing server.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    pub templates_dir: String,
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1))]
    pub page_size: usize,
    #[serde(default = "default_page_parameter")]
    #[validate(length(min = 1))]
    pub page_parameter: String,
}

fn default_page_size() -> usize {
    DEFAULT_LIMIT
}

fn default_page_parameter() -> String {
    DEFAULT_PAGE_PARAMETER.to_string()
}
