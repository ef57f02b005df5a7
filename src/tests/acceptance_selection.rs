//! Acceptance tests: cross-page selection as a user drives it.
//!
//! Each test walks a table session through the same steps a user would take
//! in the paginated table and checks what the table would show.

use crate::integration::{process_lines, replay};
use crate::model::{Artwork, PageIndex, PageSize, RecordId};
use crate::source::MemorySource;
use crate::state::{on_manual_selection_change, select_first_n, BulkRequest, SelectionStore, TableSession};

fn page(n: u32) -> PageIndex {
    PageIndex::new(n).unwrap()
}

fn artworks(total: u64) -> Vec<Artwork> {
    (1..=total)
        .map(|id| Artwork::new(id, format!("Artwork {id}")))
        .collect()
}

fn selection(store: &SelectionStore, n: u32) -> Vec<u64> {
    store.get_selection(page(n)).iter().map(|id| id.get()).collect()
}

#[test]
fn bulk_fifteen_spans_two_pages() {
    // GIVEN pages of 12 sequential ids
    let mut store = SelectionStore::new();

    // WHEN selecting the first 15 rows
    select_first_n(&mut store, BulkRequest::rows(15), PageSize::default(), |p| {
        let start = (u64::from(p.get()) - 1) * 12 + 1;
        Ok((start..start + 12).map(RecordId::new).collect::<Vec<_>>())
    })
    .unwrap();

    // THEN page 1 is fully selected and page 2 holds the next three
    assert_eq!(selection(&store, 1), (1..=12).collect::<Vec<_>>());
    assert_eq!(selection(&store, 2), vec![13, 14, 15]);
    assert_eq!(store.page_count(), 2);
}

#[test]
fn manual_selection_survives_navigation() {
    // GIVEN {13, 15} selected on page 2
    let mut session = TableSession::new(MemorySource::new(artworks(24)), PageSize::default());
    session.navigate(page(2), None);
    session.select_rows(&[RecordId::new(13), RecordId::new(15)]).unwrap();

    // WHEN navigating to page 1 and selecting {1, 2}
    session.navigate(page(1), None);
    session.select_rows(&[RecordId::new(1), RecordId::new(2)]).unwrap();

    // THEN page 2 is untouched
    assert_eq!(selection(session.store(), 2), vec![13, 15]);
    assert_eq!(selection(session.store(), 1), vec![1, 2]);
}

#[test]
fn deselect_all_after_bulk_removes_page() {
    // GIVEN a bulk selection of page 1
    let rows = artworks(12);
    let mut store = SelectionStore::new();
    select_first_n(&mut store, BulkRequest::rows(12), PageSize::default(), |_| {
        Ok(rows.clone())
    })
    .unwrap();
    assert_eq!(store.page_count(), 1);

    // WHEN the renderer reports no selected rows on page 1
    on_manual_selection_change::<Artwork>(&mut store, page(1), &[]);

    // THEN page 1 no longer appears anywhere
    assert_eq!(store.all_selections().count(), 0);
}

#[test]
fn scripted_session_reports_final_selection() {
    // GIVEN a script mixing bulk, navigation, manual edits, and a bad line
    let script = [
        r#"{"type":"bulk","count":15}"#,
        r#"{"type":"navigate","page":2}"#,
        r#"{"type":"select","ids":[13,14]}"#,
        r#"not json"#,
        r#"{"type":"navigate","page":3}"#,
        r#"{"type":"select","ids":[30]}"#,
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    let (events, errors) = process_lines(script, 1);
    let mut session = TableSession::new(MemorySource::new(artworks(30)), PageSize::default());

    // WHEN replaying it
    let summary = replay(&mut session, &events, |_| {});

    // THEN the malformed line was skipped and the rest applied
    assert_eq!(errors.len(), 1);
    assert_eq!(summary.applied, 5);
    insta::assert_snapshot!(session.report().to_string(), @r"
    Page 1:
      Row ID: 1
      Row ID: 2
      Row ID: 3
      Row ID: 4
      Row ID: 5
      Row ID: 6
      Row ID: 7
      Row ID: 8
      Row ID: 9
      Row ID: 10
      Row ID: 11
      Row ID: 12
    Page 2:
      Row ID: 13
      Row ID: 14
    Page 3:
      Row ID: 30
    ");
}

#[test]
fn resizing_pages_starts_a_fresh_selection() {
    let mut session = TableSession::new(MemorySource::new(artworks(30)), PageSize::default());
    session.select_first_n(20).unwrap();

    session.navigate(page(1), Some(PageSize::new(24).unwrap()));
    session.select_first_n(20).unwrap();

    assert_eq!(session.store().page_count(), 1);
    assert_eq!(selection(session.store(), 1), (1..=20).collect::<Vec<_>>());
}
