//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod error;
pub mod identifiers;
pub mod page;
pub mod record;

// Re-export for convenience
pub use error::{AppError, FetchError, InputError, ParseError, SelectionError};
pub use identifiers::{InvalidPageIndex, InvalidPageSize, PageIndex, PageSize, RecordId};
pub use page::{Page, Pagination};
pub use record::{Artwork, HasRecordId};
