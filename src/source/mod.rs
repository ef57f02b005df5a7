//! Page sources and script input.
//!
//! This module provides the data side of a table session:
//! - [`PageSource`], the narrow fetch interface the selection engine calls
//! - In-memory, file-backed and HTTP implementations
//! - [`PageCache`], memoizing any source by page and page size
//! - [`ScriptSource`], reading session events from a file or stdin

use crate::model::{FetchError, HasRecordId, Page, PageIndex, PageSize};

pub mod cache;
pub mod file;
pub mod http;
pub mod memory;
pub mod script;

pub use cache::PageCache;
pub use file::FileSource;
pub use http::HttpSource;
pub use memory::MemorySource;
pub use script::{detect_script_source, ScriptSource};

/// Supplies the records of one page.
///
/// Calls are synchronous: the page has resolved (or failed) by the time
/// `fetch_page` returns. A page past the end of the collection is an empty
/// page, not an error.
pub trait PageSource {
    /// Row type served by this source.
    type Record: HasRecordId + Clone;

    /// Fetch `page` using `size` rows per page.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` when the page cannot be delivered.
    fn fetch_page(
        &mut self,
        page: PageIndex,
        size: PageSize,
    ) -> Result<Page<Self::Record>, FetchError>;
}

impl<S: PageSource + ?Sized> PageSource for Box<S> {
    type Record = S::Record;

    fn fetch_page(
        &mut self,
        page: PageIndex,
        size: PageSize,
    ) -> Result<Page<Self::Record>, FetchError> {
        (**self).fetch_page(page, size)
    }
}

impl<S: PageSource + ?Sized> PageSource for &mut S {
    type Record = S::Record;

    fn fetch_page(
        &mut self,
        page: PageIndex,
        size: PageSize,
    ) -> Result<Page<Self::Record>, FetchError> {
        (**self).fetch_page(page, size)
    }
}
