//! Core identifier newtypes with smart constructors.
//!
//! Page indices and page sizes are validated positive at construction time.
//! Record identifiers are plain integers assigned by the remote collection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 1-based index of a page in the remote record collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PageIndex(u32);

impl PageIndex {
    /// Smart constructor: rejects zero.
    pub fn new(raw: u32) -> Result<Self, InvalidPageIndex> {
        if raw == 0 {
            Err(InvalidPageIndex::Zero)
        } else {
            Ok(Self(raw))
        }
    }

    /// The first page.
    pub const fn first() -> Self {
        Self(1)
    }

    /// The page after this one.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Zero-based row offset of this page's first record.
    pub fn offset(self, size: PageSize) -> usize {
        (self.0 as usize - 1).saturating_mul(size.get())
    }
}

impl fmt::Display for PageIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of rows per page. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageSize(usize);

impl PageSize {
    /// Smart constructor: rejects zero.
    pub fn new(raw: usize) -> Result<Self, InvalidPageSize> {
        if raw == 0 {
            Err(InvalidPageSize::Zero)
        } else {
            Ok(Self(raw))
        }
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for PageSize {
    /// Twelve rows, the table's initial rows-per-page.
    fn default() -> Self {
        Self(12)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Globally unique, fetch-stable identifier of a record.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RecordId(u64);

impl RecordId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for RecordId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ===== Error Types =====

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidPageIndex {
    #[error("Page index must be at least 1")]
    Zero,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidPageSize {
    #[error("Page size must be at least 1")]
    Zero,
}

// ===== Tests =====
