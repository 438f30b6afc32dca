//! Page-number pagination over a [`Resource`].
//!
//! A [`Pager`] narrows its resource to the window selected by the page
//! parameter of the current request and builds navigation links for the
//! listing template. Request parameters are passed to every call that needs
//! the current page; the pager never caches them.

use std::collections::BTreeMap;

use log::debug;
use serde::Serialize;

use crate::blocks::PagerError;
use crate::domain::sort::SortOrder;
use crate::request::RequestParams;
use crate::resource::Resource;
use crate::url::{QueryUrlBuilder, UrlBuilder};

pub const DEFAULT_LIMIT: usize = 25;
pub const DEFAULT_PAGE_PARAMETER: &str = "p";

/// Role of a page relative to the current one.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PageType {
    Current,
    First,
    Last,
    Previous,
    Next,
}

/// Link to a single page of the listing.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PageLink {
    pub url: String,
    #[serde(rename = "type")]
    pub kind: PageType,
}

/// Page entry flattened for templates, which iterate in insertion order.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PageEntry {
    pub number: usize,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: PageType,
}

/// Snapshot of the pager state handed to templates.
#[derive(Debug, Clone, Serialize)]
pub struct PagerContext {
    pub current_page: usize,
    pub first_page: usize,
    pub last_page: usize,
    pub total_pages: usize,
    pub total_rows: usize,
    pub limit: usize,
    pub previous_url: Option<String>,
    pub next_url: Option<String>,
    pub pages: Vec<PageEntry>,
}

pub struct Pager<R, U = QueryUrlBuilder> {
    resource: Option<R>,
    url_builder: U,
    limit: usize,
    sort_column: Option<String>,
    sort_order: SortOrder,
    pager_url: String,
    page_parameter: String,
    total_rows: usize,
}

impl<R, U: Default> Default for Pager<R, U> {
    fn default() -> Self {
        Self::with_url_builder(U::default())
    }
}

impl<R> Pager<R, QueryUrlBuilder> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R, U> Pager<R, U> {
    pub fn with_url_builder(url_builder: U) -> Self {
        Self {
            resource: None,
            url_builder,
            limit: DEFAULT_LIMIT,
            sort_column: None,
            sort_order: SortOrder::default(),
            pager_url: String::new(),
            page_parameter: DEFAULT_PAGE_PARAMETER.to_string(),
            total_rows: 0,
        }
    }

    /// Sets the page size. Zero is rejected and the previous size is kept.
    pub fn set_limit(&mut self, limit: usize) -> Result<&mut Self, PagerError> {
        if limit == 0 {
            return Err(PagerError::InvalidLimit);
        }
        self.limit = limit;
        Ok(self)
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn set_resource(&mut self, resource: R) -> &mut Self {
        self.resource = Some(resource);
        self
    }

    pub fn resource(&self) -> Option<&R> {
        self.resource.as_ref()
    }

    /// Accepts exactly `ASC` or `DESC`; anything else leaves the order unchanged.
    pub fn set_sort_order(&mut self, order: &str) -> Result<&mut Self, PagerError> {
        self.sort_order = order.parse()?;
        Ok(self)
    }

    pub fn set_sort_direction(&mut self, order: SortOrder) -> &mut Self {
        self.sort_order = order;
        self
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn set_sort(&mut self, column: impl Into<String>) -> &mut Self {
        self.sort_column = Some(column.into());
        self
    }

    pub fn sort(&self) -> Option<&str> {
        self.sort_column.as_deref()
    }

    pub fn set_pager_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.pager_url = url.into();
        self
    }

    pub fn pager_url(&self) -> &str {
        &self.pager_url
    }

    pub fn set_page_parameter(&mut self, name: impl Into<String>) -> &mut Self {
        self.page_parameter = name.into();
        self
    }

    pub fn page_parameter(&self) -> &str {
        &self.page_parameter
    }

    /// Row count stored by the last [`Pager::load`].
    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    /// Derived from the stored row count and the current limit on every call.
    pub fn total_pages(&self) -> usize {
        self.total_rows.div_ceil(self.limit)
    }

    pub fn first_page(&self) -> usize {
        1
    }

    pub fn last_page(&self) -> usize {
        self.total_pages()
    }

    /// Page requested by `params`, 1 when the parameter is absent or empty.
    ///
    /// Zero and negative numbers clamp to 1.
    pub fn current_page<P>(&self, params: &P) -> Result<usize, PagerError>
    where
        P: RequestParams + ?Sized,
    {
        parse_page(params.param(&self.page_parameter))
    }

    /// Drops the bound resource and loaded row count, keeping configuration.
    pub fn reset(&mut self) -> &mut Self {
        self.resource = None;
        self.total_rows = 0;
        self
    }
}

impl<R: Resource, U> Pager<R, U> {
    /// Applies the page window and sort to the resource and counts its rows.
    pub fn load<P>(&mut self, params: &P) -> Result<&mut Self, PagerError>
    where
        P: RequestParams + ?Sized,
    {
        let page = self.current_page(params)?;
        let offset = (page - 1)
            .checked_mul(self.limit)
            .ok_or_else(|| PagerError::InvalidPageNumber(page.to_string()))?;

        let resource = self.resource.as_mut().ok_or(PagerError::MissingResource)?;

        resource.add_limit(offset, self.limit);

        if let Some(column) = &self.sort_column {
            resource.add_order(column, self.sort_order)?;
        }

        resource.calculate_found_rows()?;
        self.total_rows = resource.total_rows();

        debug!(
            "Pager loaded page {page} (offset {offset}, limit {}), {} rows total",
            self.limit, self.total_rows
        );

        Ok(self)
    }
}

impl<R, U: UrlBuilder> Pager<R, U> {
    /// Link to `page` on the pager URL.
    pub fn page_url(&self, page: usize) -> Result<String, PagerError> {
        Ok(self.url_builder.build(
            &self.pager_url,
            &[(self.page_parameter.as_str(), page.to_string())],
        )?)
    }

    /// Link to `page` when it lies within `[1, total_pages]`.
    fn link_in_range(&self, page: usize) -> Result<Option<String>, PagerError> {
        (1..=self.total_pages())
            .contains(&page)
            .then(|| self.page_url(page))
            .transpose()
    }

    pub fn next_page<P>(&self, params: &P) -> Result<Option<String>, PagerError>
    where
        P: RequestParams + ?Sized,
    {
        self.link_in_range(self.current_page(params)? + 1)
    }

    pub fn previous_page<P>(&self, params: &P) -> Result<Option<String>, PagerError>
    where
        P: RequestParams + ?Sized,
    {
        self.link_in_range(self.current_page(params)? - 1)
    }

    /// Every page of the listing keyed by number.
    ///
    /// An empty listing still yields page 1. The current page is typed
    /// `current` even when it is also the first or last page.
    pub fn pages<P>(&self, params: &P) -> Result<BTreeMap<usize, PageLink>, PagerError>
    where
        P: RequestParams + ?Sized,
    {
        let current = self.current_page(params)?;
        let total = self.total_pages();

        (1..=total.max(1))
            .map(|page| {
                let link = PageLink {
                    url: self.page_url(page)?,
                    kind: classify(page, current, total),
                };
                Ok((page, link))
            })
            .collect()
    }

    pub fn context<P>(&self, params: &P) -> Result<PagerContext, PagerError>
    where
        P: RequestParams + ?Sized,
    {
        let pages = self
            .pages(params)?
            .into_iter()
            .map(|(number, link)| PageEntry {
                number,
                url: link.url,
                kind: link.kind,
            })
            .collect();

        Ok(PagerContext {
            current_page: self.current_page(params)?,
            first_page: self.first_page(),
            last_page: self.last_page(),
            total_pages: self.total_pages(),
            total_rows: self.total_rows,
            limit: self.limit,
            previous_url: self.previous_page(params)?,
            next_url: self.next_page(params)?,
            pages,
        })
    }
}

fn parse_page(raw: Option<&str>) -> Result<usize, PagerError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(1);
    };
    let page: i64 = raw
        .parse()
        .map_err(|_| PagerError::InvalidPageNumber(raw.to_string()))?;
    usize::try_from(page.max(1)).map_err(|_| PagerError::InvalidPageNumber(raw.to_string()))
}

fn classify(page: usize, current: usize, total: usize) -> PageType {
    if page == current {
        PageType::Current
    } else if page == 1 {
        PageType::First
    } else if page == total {
        PageType::Last
    } else if page < current {
        PageType::Previous
    } else {
        PageType::Next
    }
}
