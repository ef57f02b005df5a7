//! Page cache.
//!
//! Memoizes pages by (page, page size) over any source so revisiting a page,
//! or a bulk selection walking pages already shown, does not fetch again.
//! Failed fetches are not cached.

use crate::model::{FetchError, Page, PageIndex, PageSize};
use crate::source::PageSource;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tracing::debug;

/// Memoizing wrapper around a [`PageSource`].
pub struct PageCache<S: PageSource> {
    inner: S,
    pages: HashMap<(PageIndex, PageSize), Page<S::Record>>,
}

impl<S: PageSource> PageCache<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            pages: HashMap::new(),
        }
    }

    /// Borrow `page`, fetching it on a miss.
    ///
    /// # Errors
    ///
    /// Propagates the inner source's `FetchError`; nothing is cached then.
    pub fn load(&mut self, page: PageIndex, size: PageSize) -> Result<&Page<S::Record>, FetchError> {
        match self.pages.entry((page, size)) {
            Entry::Occupied(hit) => Ok(hit.into_mut()),
            Entry::Vacant(miss) => {
                debug!(page = %page, size = %size, "page cache miss");
                let fetched = self.inner.fetch_page(page, size)?;
                Ok(miss.insert(fetched))
            }
        }
    }

    /// Cached page, without fetching.
    pub fn get(&self, page: PageIndex, size: PageSize) -> Option<&Page<S::Record>> {
        self.pages.get(&(page, size))
    }

    /// Drop every cached page.
    pub fn invalidate(&mut self) {
        debug!(pages = self.pages.len(), "page cache invalidated");
        self.pages.clear();
    }

    pub fn cached_pages(&self) -> usize {
        self.pages.len()
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: PageSource> PageSource for PageCache<S> {
    type Record = S::Record;

    fn fetch_page(
        &mut self,
        page: PageIndex,
        size: PageSize,
    ) -> Result<Page<Self::Record>, FetchError> {
        self.load(page, size).cloned()
    }
}
