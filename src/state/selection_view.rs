//! Derived views over the selection store.
//!
//! The renderer never reads the store directly: it gets the selected subset of
//! the rows it has loaded, and reports back what it shows as selected.

use crate::model::{HasRecordId, PageIndex, RecordId};
use crate::state::SelectionStore;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Loaded rows of `page` that are selected, in `loaded` order.
///
/// Ids selected on `page` but absent from `loaded` are not returned; they stay
/// tracked in the store until their rows are loaded.
pub fn visible_selected_records<'a, R: HasRecordId>(
    store: &SelectionStore,
    page: PageIndex,
    loaded: &'a [R],
) -> Vec<&'a R> {
    let Some(selected) = store.selection(page) else {
        return Vec::new();
    };
    loaded
        .iter()
        .filter(|record| selected.contains(&record.record_id()))
        .collect()
}

/// Apply the renderer's full list of selected rows for `page`.
///
/// Replaces the page's selection with exactly these rows; an empty slice
/// deselects everything on the page.
pub fn on_manual_selection_change<R: HasRecordId>(
    store: &mut SelectionStore,
    page: PageIndex,
    selected: &[R],
) {
    debug!(page = %page, rows = selected.len(), "manual selection change");
    store.set_selection(page, selected.iter().map(HasRecordId::record_id));
}

// ===== Report =====

/// Selected ids of one page.
///
/// Ids are listed in ascending id order, not in the order the rows were
/// selected or appear on the page; the store keeps no row positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageReport {
    pub page: PageIndex,
    pub ids: Vec<RecordId>,
}

/// Flattened view of every selection, for reporting and export.
///
/// Pages ascend by page index and ids ascend within each page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionReport {
    pub pages: Vec<PageReport>,
    pub total: usize,
}

impl SelectionReport {
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// All selected ids in page-major order.
    pub fn ids(&self) -> impl Iterator<Item = RecordId> + '_ {
        self.pages.iter().flat_map(|p| p.ids.iter().copied())
    }
}

/// Build the report from the store's current contents.
pub fn selection_report(store: &SelectionStore) -> SelectionReport {
    let pages: Vec<PageReport> = store
        .all_selections()
        .map(|(page, ids)| PageReport {
            page,
            ids: ids.iter().copied().collect(),
        })
        .collect();
    let total = pages.iter().map(|p| p.ids.len()).sum();
    SelectionReport { pages, total }
}

impl fmt::Display for SelectionReport {
    /// One `Page N:` header per page followed by one `Row ID:` line per id.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.pages.is_empty() {
            return write!(f, "No rows selected");
        }
        let mut first = true;
        for page in &self.pages {
            if !first {
                writeln!(f)?;
            }
            first = false;
            write!(f, "Page {}:", page.page)?;
            for id in &page.ids {
                write!(f, "\n  Row ID: {}", id)?;
            }
        }
        Ok(())
    }
}
