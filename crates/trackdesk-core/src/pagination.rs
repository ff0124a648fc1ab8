//! Page envelope and list view-model.
//!
//! The sheet API pages server-side. Status and priority filters are then
//! applied to the rows of the loaded page only, so a filtered page can be
//! shorter than `per_page` while `total` still reports the unfiltered count.

use serde::{Deserialize, Serialize};

use trackdesk_shared::constants::FILTER_ALL;

use crate::domain::Ticket;

/// `{page, per_page, total, data}` as returned for every sheet read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default)]
    pub per_page: u32,
    #[serde(default)]
    pub total: u64,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

fn first_page() -> u32 {
    1
}

impl<T> Page<T> {
    pub fn empty(page: u32, per_page: u32) -> Self {
        Self { page, per_page, total: 0, data: Vec::new() }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            page: self.page,
            per_page: self.per_page,
            total: self.total,
            data: self.data.into_iter().map(f).collect(),
        }
    }
}

/// ceiling(total / per_page); 0 for an empty result or a zero page size.
pub fn page_count(total: u64, per_page: u32) -> u64 {
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(u64::from(per_page))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView<T> {
    pub page: u32,
    pub per_page: u32,
    /// Server-side total, unaffected by client-side filters.
    pub total: u64,
    pub total_pages: u64,
    /// Rows left on this page after filtering.
    pub shown: usize,
    pub has_previous: bool,
    pub has_next: bool,
    pub rows: Vec<T>,
}

impl<T> PageView<T> {
    pub fn from_page(page: Page<T>) -> Self {
        Self::filtered(page, |_| true)
    }

    pub fn filtered(page: Page<T>, mut keep: impl FnMut(&T) -> bool) -> Self {
        let total_pages = page_count(page.total, page.per_page);
        let rows: Vec<T> = page.data.into_iter().filter(|row| keep(row)).collect();
        Self {
            page: page.page,
            per_page: page.per_page,
            total: page.total,
            total_pages,
            shown: rows.len(),
            has_previous: page.page > 1,
            has_next: u64::from(page.page) < total_pages,
            rows,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageView<U> {
        PageView {
            page: self.page,
            per_page: self.per_page,
            total: self.total,
            total_pages: self.total_pages,
            shown: self.shown,
            has_previous: self.has_previous,
            has_next: self.has_next,
            rows: self.rows.into_iter().map(f).collect(),
        }
    }
}

/// Status/priority filter applied to one loaded page of tickets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketFilter {
    pub status: Option<String>,
    pub priority: Option<String>,
}

impl TicketFilter {
    /// `all` and blank values mean "no filter".
    pub fn new(status: Option<String>, priority: Option<String>) -> Self {
        Self {
            status: normalize(status),
            priority: normalize(priority),
        }
    }

    pub fn matches(&self, ticket: &Ticket) -> bool {
        if let Some(status) = &self.status {
            if &ticket.status != status {
                return false;
            }
        }
        if let Some(priority) = &self.priority {
            if &ticket.priority != priority {
                return false;
            }
        }
        true
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty() && v != FILTER_ALL)
}
