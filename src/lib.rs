//! pagesel
//!
//! Cross-page row selection for paginated tables of remote records.
//!
//! The library follows a Pure Core / Impure Shell split: [`state`] holds the
//! selection store, bulk selector, and selection view as plain functions over
//! owned data, while [`source`] fetches pages from memory, a JSON file, or the
//! artworks HTTP API.

pub mod config;
pub mod logging;
pub mod model;
pub mod parser;
pub mod source;
pub mod state;

// Script replay against a table session
pub mod integration;

#[cfg(test)]
mod tests;
