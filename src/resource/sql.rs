use diesel::prelude::*;
use diesel::sql_query;
use diesel::sql_types::BigInt;
use diesel::sqlite::Sqlite;
use log::debug;

use crate::{
    db::{DbPool, get_connection},
    domain::sort::SortOrder,
    resource::{
        Limit, Order, Resource,
        errors::{ResourceError, ResourceResult},
    },
};

#[derive(QueryableByName)]
struct FoundRows {
    #[diesel(sql_type = BigInt)]
    count: i64,
}

/// Raw-SQL implementation of [`Resource`] backed by the Diesel pool.
///
/// The base statement is wrapped rather than edited: counting runs
/// `SELECT COUNT(*)` over it as a subquery and loading appends the
/// `ORDER BY` and bound `LIMIT`/`OFFSET` clauses.
pub struct SqlResource<'a> {
    pool: &'a DbPool,
    base: String,
    sortable: Vec<String>,
    limit: Option<Limit>,
    order: Option<Order>,
    total_rows: usize,
}

impl<'a> SqlResource<'a> {
    pub fn new(pool: &'a DbPool, base: impl Into<String>) -> Self {
        Self {
            pool,
            base: base.into(),
            sortable: Vec::new(),
            limit: None,
            order: None,
            total_rows: 0,
        }
    }

    /// Columns that may appear in an `ORDER BY` clause.
    pub fn sortable<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sortable = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn limit(&self) -> Option<Limit> {
        self.limit
    }

    pub fn order(&self) -> Option<&Order> {
        self.order.as_ref()
    }

    fn select_sql(&self) -> String {
        let mut sql = self.base.trim().trim_end_matches(';').to_string();
        if let Some(order) = &self.order {
            sql.push_str(&format!(
                " ORDER BY \"{}\" {}",
                order.column,
                order.direction.as_str()
            ));
        }
        if self.limit.is_some() {
            sql.push_str(" LIMIT ? OFFSET ?");
        }
        sql
    }

    fn count_sql(&self) -> String {
        format!(
            "SELECT COUNT(*) AS count FROM ({}) AS found_rows",
            self.base.trim().trim_end_matches(';')
        )
    }

    /// Loads the rows of the current window.
    pub fn load<T>(&self) -> ResourceResult<Vec<T>>
    where
        T: QueryableByName<Sqlite> + 'static,
    {
        let mut conn = get_connection(self.pool)?;
        let query = sql_query(self.select_sql());

        let rows = match self.limit {
            Some(Limit { offset, limit }) => query
                .bind::<BigInt, _>(to_i64(limit)?)
                .bind::<BigInt, _>(to_i64(offset)?)
                .load::<T>(&mut conn)?,
            None => query.load::<T>(&mut conn)?,
        };

        Ok(rows)
    }
}

fn to_i64(value: usize) -> ResourceResult<i64> {
    i64::try_from(value).map_err(|_| ResourceError::Overflow(value))
}

impl Resource for SqlResource<'_> {
    fn add_limit(&mut self, offset: usize, limit: usize) {
        debug!("Applying window offset={offset} limit={limit}");
        self.limit = Some(Limit { offset, limit });
    }

    fn add_order(&mut self, column: &str, direction: SortOrder) -> ResourceResult<()> {
        if !self.sortable.iter().any(|allowed| allowed == column) {
            return Err(ResourceError::InvalidSortColumn(column.to_string()));
        }
        debug!("Applying order {column} {direction}");
        self.order = Some(Order {
            column: column.to_string(),
            direction,
        });
        Ok(())
    }

    fn calculate_found_rows(&mut self) -> ResourceResult<()> {
        let mut conn = get_connection(self.pool)?;
        let found = sql_query(self.count_sql()).get_result::<FoundRows>(&mut conn)?;
        self.total_rows = usize::try_from(found.count)
            .map_err(|_| ResourceError::InvalidRowCount(found.count))?;
        Ok(())
    }

    fn total_rows(&self) -> usize {
        self.total_rows
    }
}
