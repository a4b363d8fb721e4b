//! Minimal HATEOAS link building.
//!
//! Item responses carry `self` and `collection` links; paged collection
//! responses carry `self` plus conditional `prev`/`next`, built from a
//! caller-supplied URL factory parameterized by page number and size.

use serde::Serialize;

use crate::types::PageParams;

/// A navigational link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub rel: String,
    pub href: String,
    pub method: String,
}

impl Link {
    pub fn get(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            href: href.into(),
            method: "GET".into(),
        }
    }
}

/// Links for a single item of the named collection.
pub fn item_links(resource: &str, id: &str) -> Vec<Link> {
    let base = format!("/api/v1/{resource}");
    vec![
        Link::get("self", format!("{base}/{id}")),
        Link::get("collection", base),
    ]
}

/// Resource envelope: payload plus its navigational links.
#[derive(Debug, Serialize)]
pub struct Resource<T: Serialize> {
    pub data: T,
    pub links: Vec<Link>,
}

impl<T: Serialize> Resource<T> {
    pub fn new(resource: &str, id: &str, data: T) -> Self {
        Self {
            data,
            links: item_links(resource, id),
        }
    }
}

/// One page of a collection, with totals, paging metadata and links.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult<T: Serialize> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub has_next: bool,
    pub has_prev: bool,
    pub links: Vec<Link>,
}

impl<T: Serialize> PagedResult<T> {
    pub fn new(items: Vec<T>, total: u64, page: &PageParams) -> Self {
        Self {
            items,
            total,
            page: page.page,
            page_size: page.page_size,
            has_next: (page.page as u64) * (page.page_size as u64) < total,
            has_prev: page.page > 1,
            links: Vec::new(),
        }
    }

    /// Attach `self` and conditional `prev`/`next` links. The factory
    /// maps (page, pageSize) to a URL for this collection.
    pub fn with_links(mut self, url: impl Fn(u32, u32) -> String) -> Self {
        self.links.push(Link::get("self", url(self.page, self.page_size)));
        if self.has_prev {
            self.links.push(Link::get("prev", url(self.page - 1, self.page_size)));
        }
        if self.has_next {
            self.links.push(Link::get("next", url(self.page + 1, self.page_size)));
        }
        self
    }
}
