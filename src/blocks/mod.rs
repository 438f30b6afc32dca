//! Listing blocks rendered around query resources.

use thiserror::Error;

use crate::domain::sort::InvalidSortOrder;
use crate::resource::errors::ResourceError;
use crate::url::UrlError;

pub mod pager;

#[derive(Debug, Error)]
/// Errors produced while configuring or loading a [`pager::Pager`].
pub enum PagerError {
    #[error("no resource bound to the pager")]
    MissingResource,

    #[error("page size must be greater than zero")]
    InvalidLimit,

    #[error("invalid sort order: {0}")]
    InvalidSortOrder(String),

    #[error("invalid page number: {0}")]
    InvalidPageNumber(String),

    #[error(transparent)]
    Resource(#[from] ResourceError),

    #[error(transparent)]
    Url(#[from] UrlError),
}

impl From<InvalidSortOrder> for PagerError {
    fn from(err: InvalidSortOrder) -> Self {
        PagerError::InvalidSortOrder(err.0)
    }
}
