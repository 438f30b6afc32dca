//! Request-independent page loaders used by the routes.

use thiserror::Error;

use crate::blocks::PagerError;
use crate::forms::FormError;
use crate::resource::errors::ResourceError;

pub mod items;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Pager(#[from] PagerError),

    #[error(transparent)]
    Resource(#[from] ResourceError),

    #[error(transparent)]
    Form(#[from] FormError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    /// Whether the error was caused by bad request input rather than the server.
    pub fn is_client_error(&self) -> bool {
        match self {
            ServiceError::Pager(PagerError::InvalidPageNumber(_))
            | ServiceError::Pager(PagerError::InvalidSortOrder(_))
            | ServiceError::Pager(PagerError::Resource(ResourceError::InvalidSortColumn(_)))
            | ServiceError::Resource(ResourceError::InvalidSortColumn(_))
            | ServiceError::Form(_) => true,
            _ => false,
        }
    }
}
