use diesel::prelude::*;

use crate::{
    db::{DbPool, get_connection},
    domain::item::NewItem,
    resource::{errors::ResourceResult, sql::SqlResource},
};

/// Columns the listing may be ordered by.
pub const SORTABLE_COLUMNS: [&str; 3] = ["id", "name", "created_at"];

const ITEMS_SELECT: &str = "SELECT id, name, created_at FROM items";

/// Diesel-backed access to the `items` table.
#[derive(Clone)]
pub struct DieselItemRepository {
    pool: DbPool,
}

impl DieselItemRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn create(&self, new_items: &[NewItem]) -> ResourceResult<usize> {
        use crate::models::item::NewItem as DbNewItem;
        use crate::schema::items;

        let mut conn = get_connection(&self.pool)?;
        let insertables: Vec<DbNewItem> = new_items.iter().map(Into::into).collect();
        let affected = diesel::insert_into(items::table)
            .values(&insertables)
            .execute(&mut conn)?;

        Ok(affected)
    }

    /// Unpaginated resource over every item; hand it to a pager.
    pub fn listing(&self) -> SqlResource<'_> {
        SqlResource::new(&self.pool, ITEMS_SELECT).sortable(SORTABLE_COLUMNS)
    }
}
