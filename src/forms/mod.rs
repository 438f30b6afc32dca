//! Form definitions backing the listing routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod items;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid name")]
    InvalidName,
}
