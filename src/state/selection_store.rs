//! Per-page selection state.
//!
//! `SelectionStore` remembers, for every page, which record ids the user has
//! selected on it. Pages with nothing selected are not stored at all, so an
//! absent page and an empty page are the same thing.

use crate::model::{PageIndex, RecordId};
use std::collections::{btree_map, BTreeMap, BTreeSet};
use tracing::debug;

/// Set of selected record ids on one page.
pub type PageSelection = BTreeSet<RecordId>;

/// Mapping from page to the ids selected on that page.
///
/// # Invariants
///
/// - No page maps to an empty set.
/// - A record id appears under at most one page.
///
/// Created empty with a table session and dropped with it; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionStore {
    pages: BTreeMap<PageIndex, PageSelection>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection for `page` wholesale.
    ///
    /// An empty `ids` clears the page. Ids currently recorded under another
    /// page move to `page`.
    pub fn set_selection(&mut self, page: PageIndex, ids: impl IntoIterator<Item = RecordId>) {
        let ids: PageSelection = ids.into_iter().collect();

        if !ids.is_empty() {
            self.pages.retain(|other, selected| {
                if *other != page {
                    selected.retain(|id| !ids.contains(id));
                }
                !selected.is_empty()
            });
        }

        debug!(page = %page, count = ids.len(), "set page selection");

        if ids.is_empty() {
            self.pages.remove(&page);
        } else {
            self.pages.insert(page, ids);
        }
    }

    /// Selection for `page`, empty if nothing is recorded.
    pub fn get_selection(&self, page: PageIndex) -> PageSelection {
        self.pages.get(&page).cloned().unwrap_or_default()
    }

    /// Borrowing form of [`get_selection`](Self::get_selection).
    pub fn selection(&self, page: PageIndex) -> Option<&PageSelection> {
        self.pages.get(&page)
    }

    /// Every page with a non-empty selection, ascending by page.
    ///
    /// The iterator is lazy and `Clone`, so it can be restarted; calling this
    /// again also starts over.
    pub fn all_selections(&self) -> AllSelections<'_> {
        AllSelections {
            inner: self.pages.iter(),
        }
    }

    /// Drop every selection.
    pub fn clear(&mut self) {
        debug!(pages = self.pages.len(), "clear all selections");
        self.pages.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Number of pages with at least one selected row.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Total selected rows across all pages.
    pub fn selected_count(&self) -> usize {
        self.pages.values().map(BTreeSet::len).sum()
    }
}

/// Iterator returned by [`SelectionStore::all_selections`].
#[derive(Debug, Clone)]
pub struct AllSelections<'a> {
    inner: btree_map::Iter<'a, PageIndex, PageSelection>,
}

impl<'a> Iterator for AllSelections<'a> {
    type Item = (PageIndex, &'a PageSelection);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(page, ids)| (*page, ids))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for AllSelections<'_> {}

#[cfg(test)]
#[path = "selection_store_tests.rs"]
mod tests;
