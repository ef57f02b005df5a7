//! In-memory page source.

use crate::model::{FetchError, HasRecordId, Page, PageIndex, PageSize, Pagination};
use crate::source::PageSource;

/// Serves pages by slicing a vector of records held in memory.
///
/// Counts fetches so callers can check how many pages were requested.
#[derive(Debug, Clone)]
pub struct MemorySource<R> {
    records: Vec<R>,
    fetches: usize,
}

impl<R> MemorySource<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self {
            records,
            fetches: 0,
        }
    }

    /// Number of `fetch_page` calls served so far.
    pub fn fetches(&self) -> usize {
        self.fetches
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<R: HasRecordId + Clone> PageSource for MemorySource<R> {
    type Record = R;

    fn fetch_page(&mut self, page: PageIndex, size: PageSize) -> Result<Page<R>, FetchError> {
        self.fetches += 1;
        let start = page.offset(size).min(self.records.len());
        let end = start.saturating_add(size.get()).min(self.records.len());
        let records = self.records[start..end].to_vec();
        let pagination = Pagination::for_slice(page, size, self.records.len());
        Ok(Page::new(records, pagination))
    }
}
