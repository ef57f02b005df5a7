//! Internal test modules - whitebox tests with crate access
//!
//! Acceptance scenarios for the selection engine and property tests over
//! arbitrary selection histories.

mod acceptance_selection;
mod selection_properties;
