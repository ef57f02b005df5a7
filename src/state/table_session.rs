//! Table session: the paginated table's state minus rendering.
//!
//! Owns the selection store for the lifetime of one table view, the current
//! page and rows-per-page, and a page cache over the data source. Every
//! mutation takes `&mut self`, so manual and bulk selections are applied one
//! at a time.

use crate::model::{
    FetchError, HasRecordId, Page, PageIndex, PageSize, RecordId, SelectionError,
};
use crate::source::{PageCache, PageSource};
use crate::state::bulk_selector::{self, BulkOutcome, BulkRequest};
use crate::state::selection_view::{self, SelectionReport};
use crate::state::SelectionStore;
use std::collections::HashSet;
use tracing::{info, warn};

/// State of one paginated, selectable table.
pub struct TableSession<S: PageSource> {
    source: PageCache<S>,
    store: SelectionStore,
    current_page: PageIndex,
    page_size: PageSize,
    total_records: u64,
}

impl<S: PageSource> TableSession<S> {
    /// Start on page 1 with nothing selected.
    pub fn new(source: S, page_size: PageSize) -> Self {
        Self {
            source: PageCache::new(source),
            store: SelectionStore::new(),
            current_page: PageIndex::first(),
            page_size,
            total_records: 0,
        }
    }

    pub fn current_page(&self) -> PageIndex {
        self.current_page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn store(&self) -> &SelectionStore {
        &self.store
    }

    /// Total records reported by the most recent page fetched through the session.
    pub fn total_records(&self) -> u64 {
        self.total_records
    }

    /// Move to `page`, optionally changing rows-per-page.
    ///
    /// A different page size regroups records into different pages, so every
    /// selection is dropped along with the cached pages. Returns whether that
    /// happened.
    pub fn navigate(&mut self, page: PageIndex, page_size: Option<PageSize>) -> bool {
        let resized = match page_size {
            Some(size) if size != self.page_size => {
                warn!(
                    from = %self.page_size,
                    to = %size,
                    dropped = self.store.selected_count(),
                    "page size changed; clearing selections"
                );
                self.page_size = size;
                self.store.clear();
                self.source.invalidate();
                true
            }
            _ => false,
        };
        self.current_page = page;
        info!(page = %page, size = %self.page_size, "navigated");
        resized
    }

    /// Records of the current page, fetched on first use.
    ///
    /// # Errors
    ///
    /// Propagates the source's `FetchError`.
    pub fn load_current(&mut self) -> Result<&Page<S::Record>, FetchError> {
        let page = self.source.load(self.current_page, self.page_size)?;
        self.total_records = page.pagination().total;
        Ok(page)
    }

    /// Selected rows among the current page's records, in page order.
    ///
    /// # Errors
    ///
    /// Propagates the source's `FetchError`.
    pub fn visible_selected(&mut self) -> Result<Vec<&S::Record>, FetchError> {
        let page = self.source.load(self.current_page, self.page_size)?;
        self.total_records = page.pagination().total;
        Ok(selection_view::visible_selected_records(
            &self.store,
            self.current_page,
            page.records(),
        ))
    }

    /// Replace the current page's selection with the rows whose ids are given.
    ///
    /// Ids not among the current page's rows are ignored. Returns how many
    /// were ignored.
    ///
    /// # Errors
    ///
    /// Propagates the source's `FetchError`; the selection is unchanged then.
    pub fn select_rows(&mut self, ids: &[RecordId]) -> Result<usize, FetchError> {
        let page = self.source.load(self.current_page, self.page_size)?;
        self.total_records = page.pagination().total;

        let wanted: HashSet<RecordId> = ids.iter().copied().collect();
        let chosen: Vec<&S::Record> = page
            .records()
            .iter()
            .filter(|record| wanted.contains(&record.record_id()))
            .collect();

        let ignored = wanted.len().saturating_sub(chosen.len());
        if ignored > 0 {
            warn!(
                page = %self.current_page,
                ignored,
                "selected ids not on the current page were ignored"
            );
        }

        selection_view::on_manual_selection_change(&mut self.store, self.current_page, &chosen);
        Ok(ignored)
    }

    /// Select the first `count` rows across pages, through the page cache.
    ///
    /// # Errors
    ///
    /// `SelectionError::InvalidArgument` for a negative count (nothing
    /// changes); `SelectionError::Fetch` if a page fails (earlier pages stay
    /// selected).
    pub fn select_first_n(&mut self, count: i64) -> Result<BulkOutcome, SelectionError> {
        let request = BulkRequest::new(count)?;
        let outcome = bulk_selector::select_first_n_from(
            &mut self.store,
            request,
            self.page_size,
            &mut self.source,
        )?;
        if let Some(first) = self.source.get(PageIndex::first(), self.page_size) {
            self.total_records = first.pagination().total;
        }
        Ok(outcome)
    }

    /// Flattened report of every selection.
    pub fn report(&self) -> SelectionReport {
        selection_view::selection_report(&self.store)
    }
}

#[cfg(test)]
#[path = "table_session_tests.rs"]
mod tests;
