//! Parsers for session scripts and artworks API payloads.
//!
//! Pure functions converting raw JSON text into validated domain values.
//! Script lines are JSONL, one event per line; payloads are whole JSON
//! documents.

use crate::model::{
    Artwork, FetchError, Page, PageIndex, PageSize, Pagination, ParseError, RecordId,
};
use serde::Deserialize;

// Event type tag constants
const EVENT_NAVIGATE: &str = "navigate";
const EVENT_SELECT: &str = "select";
const EVENT_BULK: &str = "bulk";
const EVENT_REPORT: &str = "report";

const KNOWN_EVENTS: [&str; 4] = [EVENT_NAVIGATE, EVENT_SELECT, EVENT_BULK, EVENT_REPORT];

/// One user interaction replayed against a table session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Paginator change: go to `page`, optionally with a new rows-per-page.
    Navigate {
        page: PageIndex,
        rows: Option<PageSize>,
    },
    /// The renderer's full list of selected rows on the current page.
    Select { ids: Vec<RecordId> },
    /// "Select the first N rows". Kept signed; validation happens when applied.
    Bulk { count: i64 },
    /// Print the selection report at this point of the replay.
    Report,
}

/// Raw JSON structure for deserializing events.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum RawEvent {
    Navigate {
        page: u32,
        #[serde(default)]
        rows: Option<usize>,
    },
    Select {
        ids: Vec<u64>,
    },
    Bulk {
        count: i64,
    },
    Report,
}

/// Parse a single script line into a SessionEvent.
///
/// # Errors
///
/// Returns `ParseError` if:
/// - JSON is malformed or the event shape is wrong
/// - The `type` tag is not a known event
/// - `page` or `rows` is zero
pub fn parse_event(raw: &str, line_number: usize) -> Result<SessionEvent, ParseError> {
    let raw_event: RawEvent =
        serde_json::from_str(raw).map_err(|e| classify_failure(raw, line_number, e))?;

    match raw_event {
        RawEvent::Navigate { page, rows } => {
            let page = PageIndex::new(page).map_err(|e| ParseError::InvalidValue {
                line: line_number,
                field: "page",
                reason: e.to_string(),
            })?;
            let rows = rows
                .map(|r| {
                    PageSize::new(r).map_err(|e| ParseError::InvalidValue {
                        line: line_number,
                        field: "rows",
                        reason: e.to_string(),
                    })
                })
                .transpose()?;
            Ok(SessionEvent::Navigate { page, rows })
        }
        RawEvent::Select { ids } => Ok(SessionEvent::Select {
            ids: ids.into_iter().map(RecordId::new).collect(),
        }),
        RawEvent::Bulk { count } => Ok(SessionEvent::Bulk { count }),
        RawEvent::Report => Ok(SessionEvent::Report),
    }
}

/// Tell an unknown event tag apart from generally malformed JSON.
fn classify_failure(raw: &str, line_number: usize, err: serde_json::Error) -> ParseError {
    #[derive(Deserialize)]
    struct PartialEvent {
        #[serde(rename = "type")]
        kind: String,
    }

    match serde_json::from_str::<PartialEvent>(raw) {
        Ok(partial) if !KNOWN_EVENTS.contains(&partial.kind.as_str()) => {
            ParseError::UnknownEvent {
                line: line_number,
                kind: partial.kind,
            }
        }
        _ => ParseError::InvalidJson {
            line: line_number,
            message: err.to_string(),
        },
    }
}

// ===== API payloads =====

/// Artworks API response envelope.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<R> {
    pub data: Vec<R>,
    #[serde(default)]
    pub pagination: Pagination,
}

/// Decode one page of the artworks API.
///
/// # Errors
///
/// Returns `FetchError::Decode` if the body is not an artworks response.
pub fn parse_api_page(raw: &str, page: PageIndex) -> Result<Page<Artwork>, FetchError> {
    let response: ApiResponse<Artwork> =
        serde_json::from_str(raw).map_err(|e| FetchError::Decode {
            page,
            reason: e.to_string(),
        })?;
    Ok(Page::new(response.data, response.pagination))
}

/// A saved data file: either a full API response or a bare array of rows.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecordDump {
    Response(ApiResponse<Artwork>),
    Rows(Vec<Artwork>),
}

/// Decode a saved data file into its rows, in file order.
///
/// # Errors
///
/// Returns `ParseError::InvalidJson` with the line of the failure.
pub fn parse_record_dump(raw: &str) -> Result<Vec<Artwork>, ParseError> {
    let dump: RecordDump = serde_json::from_str(raw).map_err(|e| ParseError::InvalidJson {
        line: e.line(),
        message: e.to_string(),
    })?;
    Ok(match dump {
        RecordDump::Response(response) => response.data,
        RecordDump::Rows(rows) => rows,
    })
}
