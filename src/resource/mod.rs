//! Query resources a [`crate::blocks::pager::Pager`] can be applied to.

use crate::domain::sort::SortOrder;
use crate::resource::errors::ResourceResult;

pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod sql;

/// Window of rows requested from a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limit {
    pub offset: usize,
    pub limit: usize,
}

/// Ordering requested from a resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub column: String,
    pub direction: SortOrder,
}

/// A query that can be narrowed to a page and counted.
pub trait Resource {
    /// Restricts the query to `limit` rows starting at `offset`.
    fn add_limit(&mut self, offset: usize, limit: usize);

    /// Adds an `ORDER BY column direction` clause.
    fn add_order(&mut self, column: &str, direction: SortOrder) -> ResourceResult<()>;

    /// Counts every row matching the query, ignoring the limit.
    fn calculate_found_rows(&mut self) -> ResourceResult<()>;

    /// Row count computed by the last [`Resource::calculate_found_rows`] call.
    fn total_rows(&self) -> usize;
}

impl<T: Resource + ?Sized> Resource for &mut T {
    fn add_limit(&mut self, offset: usize, limit: usize) {
        (**self).add_limit(offset, limit)
    }

    fn add_order(&mut self, column: &str, direction: SortOrder) -> ResourceResult<()> {
        (**self).add_order(column, direction)
    }

    fn calculate_found_rows(&mut self) -> ResourceResult<()> {
        (**self).calculate_found_rows()
    }

    fn total_rows(&self) -> usize {
        (**self).total_rows()
    }
}
