//! File-backed page source.
//!
//! Loads a saved artworks response (or a bare array of rows) once and serves
//! pages from memory.

use crate::model::error::InputError;
use crate::model::{AppError, Artwork, FetchError, Page, PageIndex, PageSize};
use crate::parser;
use crate::source::{MemorySource, PageSource};
use std::path::Path;
use tracing::info;

/// Page source over a local JSON data file.
#[derive(Debug, Clone)]
pub struct FileSource {
    rows: MemorySource<Artwork>,
}

impl FileSource {
    /// Read and decode the data file.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileNotFound` if the file does not exist,
    /// `InputError::Io` for other read failures and `ParseError` (wrapped in
    /// `AppError`) if the contents are not rows.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(InputError::FileNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        let contents = std::fs::read_to_string(path).map_err(InputError::from)?;
        let rows = parser::parse_record_dump(&contents)?;

        info!(path = ?path, rows = rows.len(), "loaded data file");

        Ok(Self {
            rows: MemorySource::new(rows),
        })
    }

    /// Number of rows loaded from the file.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl PageSource for FileSource {
    type Record = Artwork;

    fn fetch_page(&mut self, page: PageIndex, size: PageSize) -> Result<Page<Artwork>, FetchError> {
        self.rows.fetch_page(page, size)
    }
}
