use diesel::r2d2::PoolError;
use diesel::result::Error as DieselError;
use thiserror::Error;

/// Failures raised while windowing, ordering or counting a resource.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// A count or page query was rejected by the database.
    #[error("Query failed: {0}")]
    Query(#[from] DieselError),

    /// No pooled connection could be acquired.
    #[error("Connection unavailable: {0}")]
    Connection(#[from] PoolError),

    #[error("Column `{0}` is not sortable")]
    InvalidSortColumn(String),

    /// An offset or limit exceeds what SQLite can bind as BIGINT.
    #[error("{0} does not fit into BIGINT")]
    Overflow(usize),

    /// `COUNT(*)` came back negative.
    #[error("Invalid row count {0}")]
    InvalidRowCount(i64),
}

pub type ResourceResult<T> = Result<T, ResourceError>;
