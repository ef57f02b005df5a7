//! Fetched pages and the remote pagination contract.

use crate::model::{PageIndex, PageSize};
use serde::{Deserialize, Serialize};

/// Pagination block reported by the remote API alongside each page.
///
/// Consumed read-only. All fields default to zero/none so partial payloads
/// still deserialize.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub limit: usize,
    #[serde(default)]
    pub offset: u64,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub current_page: u32,
    #[serde(default)]
    pub next_url: Option<String>,
}

impl Pagination {
    /// Pagination facts for a locally sliced collection of `total` records.
    pub fn for_slice(page: PageIndex, size: PageSize, total: usize) -> Self {
        let total_pages = total.div_ceil(size.get());
        Self {
            total: total as u64,
            limit: size.get(),
            offset: page.offset(size) as u64,
            total_pages: u32::try_from(total_pages).unwrap_or(u32::MAX),
            current_page: page.get(),
            next_url: None,
        }
    }
}

/// One page of records in remote order.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<R> {
    records: Vec<R>,
    pagination: Pagination,
}

impl<R> Page<R> {
    pub fn new(records: Vec<R>, pagination: Pagination) -> Self {
        Self {
            records,
            pagination,
        }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn into_records(self) -> Vec<R> {
        self.records
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}
