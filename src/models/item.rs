use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::item::{Item as DomainItem, NewItem as DomainNewItem};

#[derive(Debug, Clone, Identifiable, Queryable, QueryableByName, Selectable)]
#[diesel(table_name = crate::schema::items)]
/// Diesel model for [`crate::domain::item::Item`].
pub struct Item {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::items)]
/// Insertable form of [`Item`].
pub struct NewItem<'a> {
    pub name: &'a str,
}

impl From<Item> for DomainItem {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            created_at: item.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewItem> for NewItem<'a> {
    fn from(item: &'a DomainNewItem) -> Self {
        Self {
            name: item.name.as_str(),
        }
    }
}
