use serde::Serialize;

use crate::blocks::pager::{Pager, PagerContext};
use crate::domain::item::{Item, NewItem};
use crate::domain::sort::SortOrder;
use crate::fields::button::ButtonField;
use crate::forms::items::AddItemForm;
use crate::models::item::Item as DbItem;
use crate::repository::DieselItemRepository;
use crate::request::RequestParams;
use crate::services::ServiceResult;
use crate::url::QueryUrlBuilder;

pub const SORT_PARAMETER: &str = "sort";
pub const ORDER_PARAMETER: &str = "order";

/// Listing options taken from the server configuration.
#[derive(Debug, Clone)]
pub struct ListingSettings {
    pub url: String,
    pub page_size: usize,
    pub page_parameter: String,
}

/// Data required to render the items listing template.
#[derive(Debug, Serialize)]
pub struct IndexPageData {
    pub items: Vec<Item>,
    pub pager: PagerContext,
    pub sort: Option<String>,
    pub order: SortOrder,
    pub submit: ButtonField,
}

fn non_empty<'a, P>(params: &'a P, name: &str) -> Option<&'a str>
where
    P: RequestParams + ?Sized,
{
    params.param(name).map(str::trim).filter(|s| !s.is_empty())
}

/// Loads one page of items, honouring the `sort` and `order` parameters.
pub fn load_index_page<P>(
    repo: &DieselItemRepository,
    settings: &ListingSettings,
    params: &P,
) -> ServiceResult<IndexPageData>
where
    P: RequestParams + ?Sized,
{
    let sort = non_empty(params, SORT_PARAMETER);
    let order = non_empty(params, ORDER_PARAMETER);

    let mut url_builder = QueryUrlBuilder::new();
    if let Some(column) = sort {
        url_builder = url_builder.persist(SORT_PARAMETER, column);
    }
    if let Some(order) = order {
        url_builder = url_builder.persist(ORDER_PARAMETER, order);
    }

    let mut pager = Pager::with_url_builder(url_builder);
    pager
        .set_limit(settings.page_size)?
        .set_pager_url(&settings.url)
        .set_page_parameter(&settings.page_parameter);
    if let Some(column) = sort {
        pager.set_sort(column);
    }
    if let Some(order) = order {
        pager.set_sort_order(order)?;
    }

    pager.set_resource(repo.listing());
    pager.load(params)?;

    let items = match pager.resource() {
        Some(resource) => resource
            .load::<DbItem>()?
            .into_iter()
            .map(Into::into)
            .collect(),
        None => Vec::new(),
    };

    Ok(IndexPageData {
        items,
        pager: pager.context(params)?,
        sort: pager.sort().map(str::to_string),
        order: pager.sort_order(),
        submit: AddItemForm::submit_button(),
    })
}

/// Validates the add-item form and stores the item.
pub fn add_item(repo: &DieselItemRepository, form: AddItemForm) -> ServiceResult<()> {
    let new_item = NewItem::try_from(form).map_err(|err| {
        log::error!("Failed to validate form: {err}");
        err
    })?;

    repo.create(&[new_item]).map_err(|err| {
        log::error!("Failed to add an item: {err}");
        err
    })?;

    Ok(())
}
