//! "Select the first N rows" across page boundaries.
//!
//! Rows are counted in page-major order: page 1 row 0 first, then the rest of
//! page 1, then page 2, and so on. Each page the request reaches is fetched
//! once and its selection is overwritten with the rows taken from it.

use crate::model::{FetchError, HasRecordId, PageIndex, PageSize, SelectionError};
use crate::source::PageSource;
use crate::state::SelectionStore;
use tracing::{debug, info, warn};

/// Validated bulk request: number of rows to select. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BulkRequest(u64);

impl BulkRequest {
    /// Smart constructor for counts arriving from user input.
    ///
    /// # Errors
    ///
    /// `SelectionError::InvalidArgument` if `raw` is negative.
    pub fn new(raw: i64) -> Result<Self, SelectionError> {
        u64::try_from(raw)
            .map(Self)
            .map_err(|_| SelectionError::InvalidArgument {
                name: "count",
                value: raw,
            })
    }

    pub const fn rows(count: u64) -> Self {
        Self(count)
    }

    pub fn count(self) -> u64 {
        self.0
    }
}

/// What a bulk selection did.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BulkOutcome {
    /// Rows asked for.
    pub requested: u64,
    /// Rows actually selected.
    pub selected: u64,
    /// Pages whose selection was overwritten, ascending.
    pub pages: Vec<PageIndex>,
    /// The collection ended before `requested` rows were found.
    pub exhausted: bool,
}

/// Select the first `request.count()` rows, fetching pages through `fetch_page`.
///
/// Pages are fetched one at a time starting at page 1, and rows are taken
/// from each page as the source returned them, whatever their count. Only an
/// empty page ends the collection. A zero request touches nothing and fetches
/// nothing.
///
/// # Errors
///
/// `SelectionError::Fetch` if `fetch_page` fails. Pages processed before the
/// failing one keep their new selections.
pub fn select_first_n<R, F>(
    store: &mut SelectionStore,
    request: BulkRequest,
    page_size: PageSize,
    mut fetch_page: F,
) -> Result<BulkOutcome, SelectionError>
where
    R: HasRecordId,
    F: FnMut(PageIndex) -> Result<Vec<R>, FetchError>,
{
    let mut outcome = BulkOutcome {
        requested: request.count(),
        ..BulkOutcome::default()
    };
    let mut remaining = request.count();
    let mut page = PageIndex::first();

    while remaining > 0 {
        let records = fetch_page(page).map_err(|source| {
            warn!(page = %page, error = %source, "bulk selection aborted by fetch failure");
            SelectionError::Fetch { page, source }
        })?;

        if records.is_empty() {
            debug!(page = %page, "collection exhausted");
            outcome.exhausted = true;
            break;
        }

        if records.len() != page_size.get() {
            debug!(
                page = %page,
                returned = records.len(),
                page_size = page_size.get(),
                "page row count differs from page size"
            );
        }

        let taken = usize::try_from(remaining).map_or(records.len(), |r| r.min(records.len()));

        store.set_selection(page, records.iter().take(taken).map(HasRecordId::record_id));
        remaining -= taken as u64;
        outcome.selected += taken as u64;
        outcome.pages.push(page);

        page = page.next();
    }

    info!(
        requested = outcome.requested,
        selected = outcome.selected,
        pages = outcome.pages.len(),
        exhausted = outcome.exhausted,
        "bulk selection complete"
    );

    Ok(outcome)
}

/// [`select_first_n`] over a [`PageSource`].
pub fn select_first_n_from<S: PageSource>(
    store: &mut SelectionStore,
    request: BulkRequest,
    page_size: PageSize,
    source: &mut S,
) -> Result<BulkOutcome, SelectionError> {
    select_first_n(store, request, page_size, |page| {
        source
            .fetch_page(page, page_size)
            .map(|fetched| fetched.into_records())
    })
}

#[cfg(test)]
#[path = "bulk_selector_tests.rs"]
mod tests;
