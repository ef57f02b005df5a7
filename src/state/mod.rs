//! Selection state (pure core).
//!
//! All state transitions are plain functions over owned data, testable
//! without any renderer or network.

pub mod bulk_selector;
pub mod selection_store;
pub mod selection_view;
pub mod table_session;

// Re-export for convenience
pub use bulk_selector::{select_first_n, select_first_n_from, BulkOutcome, BulkRequest};
pub use selection_store::{AllSelections, PageSelection, SelectionStore};
pub use selection_view::{
    on_manual_selection_change, selection_report, visible_selected_records, PageReport,
    SelectionReport,
};
pub use table_session::TableSession;
