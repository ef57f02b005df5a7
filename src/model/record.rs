//! Table records.
//!
//! The selection engine only ever looks at a record's identifier; everything
//! else is payload for the renderer.

use crate::model::RecordId;
use serde::{Deserialize, Serialize};

/// Anything that can be placed in a selectable table row.
pub trait HasRecordId {
    fn record_id(&self) -> RecordId;
}

impl HasRecordId for RecordId {
    fn record_id(&self) -> RecordId {
        *self
    }
}

impl<T: HasRecordId + ?Sized> HasRecordId for &T {
    fn record_id(&self) -> RecordId {
        (**self).record_id()
    }
}

/// An artwork row as returned by the artworks API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: RecordId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub place_of_origin: Option<String>,
    #[serde(default)]
    pub artist_display: Option<String>,
    #[serde(default)]
    pub inscriptions: Option<String>,
    #[serde(default)]
    pub date_start: Option<i32>,
    #[serde(default)]
    pub date_end: Option<i32>,
}

impl Artwork {
    /// Minimal artwork with only an id and title.
    pub fn new(id: impl Into<RecordId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            place_of_origin: None,
            artist_display: None,
            inscriptions: None,
            date_start: None,
            date_end: None,
        }
    }
}

impl HasRecordId for Artwork {
    fn record_id(&self) -> RecordId {
        self.id
    }
}
