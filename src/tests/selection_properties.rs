//! Property-based tests for the selection store and bulk selector.
//!
//! Properties Under Test:
//! - A page's selection reads back exactly as written
//! - `all_selections` never yields an empty set and ascends by page
//! - The visible selection is the loaded rows filtered by the page's selection
//! - Bulk selection is idempotent and selects `min(n, total)` rows in page order

use crate::model::{FetchError, PageIndex, PageSize, RecordId};
use crate::state::{
    select_first_n, visible_selected_records, BulkRequest, PageSelection, SelectionStore,
};
use proptest::prelude::*;
use std::collections::BTreeSet;

// ===== Arbitrary Strategies =====

fn arb_page() -> impl Strategy<Value = PageIndex> {
    (1u32..=6).prop_map(|n| PageIndex::new(n).unwrap())
}

fn arb_ids() -> impl Strategy<Value = BTreeSet<RecordId>> {
    prop::collection::btree_set((1u64..=60).prop_map(RecordId::new), 0..10)
}

/// A history of manual selection writes.
fn arb_history() -> impl Strategy<Value = Vec<(PageIndex, BTreeSet<RecordId>)>> {
    prop::collection::vec((arb_page(), arb_ids()), 0..20)
}

fn build_store(history: &[(PageIndex, BTreeSet<RecordId>)]) -> SelectionStore {
    let mut store = SelectionStore::new();
    for (page, ids) in history {
        store.set_selection(*page, ids.iter().copied());
    }
    store
}

/// Page fetcher over records `1..=total`, `size` per page.
fn sequential(total: u64, size: PageSize) -> impl FnMut(PageIndex) -> Result<Vec<RecordId>, FetchError> {
    move |page| {
        let size = size.get() as u64;
        let start = (u64::from(page.get()) - 1) * size + 1;
        let end = (start + size - 1).min(total);
        Ok((start..=end).map(RecordId::new).collect())
    }
}

proptest! {
    #[test]
    fn written_selection_reads_back(
        history in arb_history(),
        page in arb_page(),
        ids in arb_ids(),
    ) {
        let mut store = build_store(&history);

        store.set_selection(page, ids.iter().copied());

        prop_assert_eq!(store.get_selection(page), ids);
    }

    #[test]
    fn all_selections_ascend_and_are_never_empty(history in arb_history()) {
        let store = build_store(&history);

        let pages: Vec<PageIndex> = store.all_selections().map(|(p, _)| p).collect();
        prop_assert!(pages.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(store.all_selections().all(|(_, ids)| !ids.is_empty()));
    }

    #[test]
    fn an_id_is_selected_on_at_most_one_page(history in arb_history()) {
        let store = build_store(&history);

        let mut seen = BTreeSet::new();
        for (_, ids) in store.all_selections() {
            for id in ids {
                prop_assert!(seen.insert(*id), "id {} appears on two pages", id);
            }
        }
    }

    #[test]
    fn visible_selection_filters_loaded_rows(
        history in arb_history(),
        page in arb_page(),
        loaded in prop::collection::vec((1u64..=60).prop_map(RecordId::new), 0..15),
    ) {
        let store = build_store(&history);
        let selected: PageSelection = store.get_selection(page);

        let visible: Vec<RecordId> = visible_selected_records(&store, page, &loaded)
            .into_iter()
            .copied()
            .collect();

        let expected: Vec<RecordId> = loaded
            .iter()
            .copied()
            .filter(|id| selected.contains(id))
            .collect();
        prop_assert_eq!(visible, expected);
    }

    #[test]
    fn bulk_selects_min_of_request_and_total(
        total in 0u64..80,
        size in 1usize..15,
        n in 0u64..100,
    ) {
        let page_size = PageSize::new(size).unwrap();
        let mut store = SelectionStore::new();

        let outcome =
            select_first_n(&mut store, BulkRequest::rows(n), page_size, sequential(total, page_size))
                .unwrap();

        let expected = n.min(total);
        prop_assert_eq!(outcome.selected, expected);
        prop_assert_eq!(store.selected_count() as u64, expected);

        // Row k (1-based) lands on page ceil(k / size)
        for (page, ids) in store.all_selections() {
            for id in ids {
                let k = id.get();
                prop_assert!(k <= expected);
                prop_assert_eq!(u64::from(page.get()), (k - 1) / size as u64 + 1);
            }
        }
    }

    #[test]
    fn bulk_twice_equals_bulk_once(
        total in 0u64..80,
        size in 1usize..15,
        n in 0u64..100,
    ) {
        let page_size = PageSize::new(size).unwrap();
        let mut once = SelectionStore::new();
        select_first_n(&mut once, BulkRequest::rows(n), page_size, sequential(total, page_size)).unwrap();

        let mut twice = once.clone();
        select_first_n(&mut twice, BulkRequest::rows(n), page_size, sequential(total, page_size)).unwrap();

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn bulk_zero_changes_nothing(history in arb_history()) {
        let mut store = build_store(&history);
        let before = store.clone();
        let mut fetches = 0;

        select_first_n(&mut store, BulkRequest::rows(0), PageSize::default(), |_| {
            fetches += 1;
            Ok(Vec::<RecordId>::new())
        })
        .unwrap();

        prop_assert_eq!(store, before);
        prop_assert_eq!(fetches, 0);
    }
}
