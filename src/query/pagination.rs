use std::collections::HashMap;

use serde::Serialize;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;
pub const MAX_LIMIT: u64 = 100;

/// `page`/`limit` as read from the query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    pub page: u64,
    pub limit: u64,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageParams {
    /// Unparseable values fall back to the defaults; `page` is at least 1
    /// and `limit` is kept within `1..=MAX_LIMIT`.
    pub fn from_query(params: &HashMap<String, String>) -> Self {
        let read = |key: &str, default: u64| {
            params
                .get(key)
                .and_then(|v| v.trim().parse::<i64>().ok())
                .map(|v| v.max(1) as u64)
                .unwrap_or(default)
        };

        Self {
            page: read("page", DEFAULT_PAGE),
            limit: read("limit", DEFAULT_LIMIT).min(MAX_LIMIT),
        }
    }

    /// Rows to skip. Capped at the largest OFFSET Postgres accepts, so a
    /// page far past the end is simply empty.
    pub fn skip(&self) -> u64 {
        (self.page - 1)
            .saturating_mul(self.limit)
            .min(i64::MAX as u64)
    }

    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(self.limit)
    }
}

/// One page of rows plus the total row count of the filtered query.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub params: PageParams,
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            params: self.params,
        }
    }

    /// Swap in a different item list (e.g. after populating references).
    pub fn with_items<U>(self, items: Vec<U>) -> Page<U> {
        Page {
            items,
            total: self.total,
            params: self.params,
        }
    }
}

/// `{success, count, total, page, totalPages, data}`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEnvelope<T> {
    pub success: bool,
    pub count: usize,
    pub total: u64,
    pub page: u64,
    pub total_pages: u64,
    pub data: Vec<T>,
}

impl<T> From<Page<T>> for ListEnvelope<T> {
    fn from(page: Page<T>) -> Self {
        Self {
            success: true,
            count: page.items.len(),
            total: page.total,
            page: page.params.page,
            total_pages: page.params.total_pages(page.total),
            data: page.items,
        }
    }
}
