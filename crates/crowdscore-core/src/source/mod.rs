//! Score source abstraction.
//!
//! The paginator only needs a way to fetch one offset window at a time.
//! `CrowdScoreApi` implements it over HTTPS; `mock::ScriptedSource` replays
//! canned pages for tests.

pub mod mock;

use chrono::{DateTime, Utc};
use strum::Display;

use crate::config::paging::{SORT_FIELD, TIMESTAMP_FORMAT};
use crate::error::Result;
use crate::score::PageResponse;

/// Sort order of a page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum SortOrder {
    #[default]
    #[strum(to_string = "desc")]
    Desc,
}

/// One offset window of the CrowdScore query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Inclusive lower bound on record timestamps.
    pub time_lower_bound: DateTime<Utc>,
    pub sort: SortOrder,
    pub offset: u32,
    pub limit: u32,
}

impl PageRequest {
    /// FQL filter selecting records at or after the lower bound.
    pub fn filter(&self) -> String {
        format!(
            "{}:>='{}'",
            SORT_FIELD,
            self.time_lower_bound.format(TIMESTAMP_FORMAT)
        )
    }

    /// Sort expression, e.g. `timestamp.desc`.
    pub fn sort_expression(&self) -> String {
        format!("{}.{}", SORT_FIELD, self.sort)
    }
}

/// A remote query that returns CrowdScore records one page at a time.
///
/// Implementations report the remote status code verbatim in
/// [`PageResponse::status_code`] and never turn a non-2xx status into an
/// error; the caller decides what a failed status means. `Err` is reserved
/// for failures that produced no status at all.
pub trait ScoreSource {
    fn fetch_page(&mut self, request: &PageRequest) -> Result<PageResponse>;
}

impl<S: ScoreSource + ?Sized> ScoreSource for &mut S {
    fn fetch_page(&mut self, request: &PageRequest) -> Result<PageResponse> {
        (**self).fetch_page(request)
    }
}
