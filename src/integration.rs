//! Pure core integration functions.
//!
//! Glue between parsed session scripts and a [`TableSession`]. Nothing here
//! touches stdin, files, or the network directly; the source behind the
//! session decides that.

use crate::model::{AppError, ParseError};
use crate::parser::{self, SessionEvent};
use crate::source::PageSource;
use crate::state::{SelectionReport, TableSession};
use tracing::{debug, warn};

/// A parsed script event with the line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptEvent {
    /// 1-based line number in the script.
    pub line: usize,
    pub event: SessionEvent,
}

/// Counters for one replay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Events applied without error.
    pub applied: usize,
    /// Events that failed at runtime and were skipped.
    pub failed: usize,
}

/// Process script lines into events.
///
/// Blank lines are ignored. Malformed lines become `ParseError`s and do not
/// stop the remaining lines from parsing.
///
/// # Arguments
///
/// * `lines` - Raw JSONL lines to process
/// * `starting_line_number` - Line number of the first line (for error reporting)
pub fn process_lines(
    lines: Vec<String>,
    starting_line_number: usize,
) -> (Vec<ScriptEvent>, Vec<ParseError>) {
    let mut events = Vec::new();
    let mut errors = Vec::new();

    for (index, line) in lines.into_iter().enumerate() {
        let line_number = starting_line_number + index;
        if line.trim().is_empty() {
            continue;
        }
        match parser::parse_event(&line, line_number) {
            Ok(event) => events.push(ScriptEvent {
                line: line_number,
                event,
            }),
            Err(err) => errors.push(err),
        }
    }

    (events, errors)
}

/// Apply one event to the session.
///
/// Returns the report for `report` events, `None` otherwise.
///
/// # Errors
///
/// `AppError::Fetch` when a page cannot be loaded, `AppError::Selection` for
/// a rejected or interrupted bulk selection.
pub fn apply_event<S: PageSource>(
    session: &mut TableSession<S>,
    event: &SessionEvent,
) -> Result<Option<SelectionReport>, AppError> {
    match event {
        SessionEvent::Navigate { page, rows } => {
            session.navigate(*page, *rows);
            session.load_current()?;
            Ok(None)
        }
        SessionEvent::Select { ids } => {
            session.select_rows(ids)?;
            Ok(None)
        }
        SessionEvent::Bulk { count } => {
            session.select_first_n(*count)?;
            Ok(None)
        }
        SessionEvent::Report => Ok(Some(session.report())),
    }
}

/// Replay events in order, handing every intermediate report to `on_report`.
///
/// A failing event is logged and skipped; later events still run.
pub fn replay<S: PageSource>(
    session: &mut TableSession<S>,
    events: &[ScriptEvent],
    mut on_report: impl FnMut(&SelectionReport),
) -> ReplaySummary {
    let mut summary = ReplaySummary::default();

    for ScriptEvent { line, event } in events {
        match apply_event(session, event) {
            Ok(report) => {
                debug!(line, ?event, "applied event");
                summary.applied += 1;
                if let Some(report) = report {
                    on_report(&report);
                }
            }
            Err(err) => {
                warn!(line, error = %err, "event failed; continuing");
                summary.failed += 1;
            }
        }
    }

    summary
}
