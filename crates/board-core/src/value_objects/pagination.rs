//! Offset pagination for listing queries

use serde::Deserialize;

/// Rows per page when the caller does not ask for a specific size
pub const DEFAULT_PAGE_SIZE: u32 = 25;

/// Upper bound on rows per page
pub const MAX_PAGE_SIZE: u32 = 100;

/// Listing options as supplied by a caller
///
/// Both fields are optional. A missing or zero `num_per_page` falls back to
/// [`DEFAULT_PAGE_SIZE`], and a missing `page` means the first page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ListOptions {
    #[serde(default)]
    pub num_per_page: Option<u32>,
    #[serde(default)]
    pub page: Option<u32>,
}

impl ListOptions {
    /// Options for a specific page and size
    pub fn new(num_per_page: u32, page: u32) -> Self {
        Self {
            num_per_page: Some(num_per_page),
            page: Some(page),
        }
    }

    /// Options for the given zero-based page at the default size
    pub fn page(page: u32) -> Self {
        Self {
            num_per_page: None,
            page: Some(page),
        }
    }

    /// Resolve into concrete SQL bounds
    pub fn resolve(self) -> PageRequest {
        let limit = match self.num_per_page {
            None | Some(0) => DEFAULT_PAGE_SIZE,
            Some(n) => n.min(MAX_PAGE_SIZE),
        };
        let page = self.page.unwrap_or(0);

        PageRequest {
            limit: i64::from(limit),
            offset: i64::from(page) * i64::from(limit),
        }
    }
}

/// Resolved `LIMIT` / `OFFSET` pair, ready to bind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: i64,
    pub offset: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        ListOptions::default().resolve()
    }
}

impl From<ListOptions> for PageRequest {
    fn from(options: ListOptions) -> Self {
        options.resolve()
    }
}
