//! Offset/limit pagination over a score source.
//!
//! Pages are requested one after another with a fixed limit. A full page
//! means more data may follow; the first page shorter than the limit
//! (including an empty one) ends the run. Any status other than 200 aborts
//! the whole run, since a partial window would misrepresent the time range.

use chrono::{DateTime, Duration, Timelike, Utc};
use tracing::{debug, info};

use crate::config::paging::PAGE_LIMIT;
use crate::error::{Error, Result};
use crate::score::{ResultSet, ScoreRecord};
use crate::source::{PageRequest, ScoreSource, SortOrder};

/// Inclusive lower bound of a window of `days` ending at `now`, truncated to
/// whole seconds.
///
/// Windows reaching past the earliest date chrono can represent return
/// [`Error::InvalidTimeWindow`].
pub fn time_lower_bound(now: DateTime<Utc>, days: u32) -> Result<DateTime<Utc>> {
    let bound = Duration::try_days(i64::from(days))
        .and_then(|window| now.checked_sub_signed(window))
        .ok_or(Error::InvalidTimeWindow { days })?;
    Ok(bound.with_nanosecond(0).unwrap_or(bound))
}

/// Lower bound of a window of `days` ending now.
pub fn window_start(days: u32) -> Result<DateTime<Utc>> {
    time_lower_bound(Utc::now(), days)
}

/// Totals of a completed pagination run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageSummary {
    /// Number of pages fetched, including the final short page.
    pub pages: u32,
    pub records: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    limit: u32,
    start_offset: u32,
    sort: SortOrder,
}

impl Default for Paginator {
    fn default() -> Self {
        Self {
            limit: PAGE_LIMIT,
            start_offset: 0,
            sort: SortOrder::Desc,
        }
    }
}

impl Paginator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom page size. A limit of zero is raised to one.
    pub fn with_limit(limit: u32) -> Self {
        Self {
            limit: limit.max(1),
            ..Self::default()
        }
    }

    /// Resume paging at `offset` instead of the first record.
    pub fn starting_at(mut self, offset: u32) -> Self {
        self.start_offset = offset;
        self
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Fetch every page at or after `time_lower_bound`, handing each page's
    /// records to `sink` in arrival order.
    ///
    /// Stops at the first page shorter than the limit. A non-200 status
    /// returns [`Error::FetchFailed`] without calling `sink` for that page;
    /// an error from `sink` aborts the run as well.
    pub fn for_each_page<S, F>(
        &self,
        source: &mut S,
        time_lower_bound: DateTime<Utc>,
        mut sink: F,
    ) -> Result<PageSummary>
    where
        S: ScoreSource + ?Sized,
        F: FnMut(Vec<ScoreRecord>) -> Result<()>,
    {
        let mut summary = PageSummary::default();
        let mut request = PageRequest {
            time_lower_bound,
            sort: self.sort,
            offset: self.start_offset,
            limit: self.limit,
        };

        loop {
            let page = source.fetch_page(&request)?;
            summary.pages += 1;

            if !page.is_ok() {
                return Err(Error::FetchFailed {
                    status: page.status_code,
                });
            }

            let page_len = page.records.len();
            debug!(
                "Page {} (offset {}): {} records",
                summary.pages, request.offset, page_len
            );
            summary.records += page_len;
            sink(page.records)?;

            // A short page means the window is exhausted.
            if page_len < self.limit as usize {
                break;
            }

            request.offset = request
                .offset
                .checked_add(self.limit)
                .ok_or(Error::OffsetOverflow {
                    offset: request.offset,
                })?;
        }

        info!(
            "Retrieved {} scores in {} pages",
            summary.records, summary.pages
        );
        Ok(summary)
    }

    /// Fetch the complete result set for the window.
    pub fn collect<S>(&self, source: &mut S, time_lower_bound: DateTime<Utc>) -> Result<ResultSet>
    where
        S: ScoreSource + ?Sized,
    {
        let mut scores = ResultSet::new();
        self.for_each_page(source, time_lower_bound, |records| {
            scores.extend(records);
            Ok(())
        })?;
        Ok(scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::mock::ScriptedSource;
    use chrono::TimeZone;

    fn bound() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_time_lower_bound_truncates_to_seconds() {
        let now = Utc
            .with_ymd_and_hms(2024, 5, 31, 12, 34, 56)
            .unwrap()
            .with_nanosecond(789_000_000)
            .unwrap();

        let lower = time_lower_bound(now, 30).unwrap();
        assert_eq!(lower, Utc.with_ymd_and_hms(2024, 5, 1, 12, 34, 56).unwrap());
        assert_eq!(lower.nanosecond(), 0);
    }

    #[test]
    fn test_zero_day_window() {
        let now = Utc.with_ymd_and_hms(2024, 5, 31, 12, 0, 0).unwrap();
        assert_eq!(time_lower_bound(now, 0).unwrap(), now);
    }

    #[test]
    fn test_oversized_window_is_rejected() {
        let now = Utc.with_ymd_and_hms(2024, 5, 31, 12, 0, 0).unwrap();

        assert!(matches!(
            time_lower_bound(now, u32::MAX),
            Err(Error::InvalidTimeWindow { days: u32::MAX })
        ));
        assert!(matches!(
            window_start(100_000_000),
            Err(Error::InvalidTimeWindow { days: 100_000_000 })
        ));
    }

    #[test]
    fn test_starting_offset() {
        let mut source = ScriptedSource::from_page_sizes(&[2, 1]);
        Paginator::with_limit(2)
            .starting_at(500)
            .collect(&mut source, bound())
            .unwrap();

        assert_eq!(source.offsets(), vec![500, 502]);
    }

    #[test]
    fn test_offset_overflow_is_an_error() {
        let mut source = ScriptedSource::from_page_sizes(&[2, 2]);

        let result = Paginator::with_limit(2)
            .starting_at(u32::MAX - 1)
            .collect(&mut source, bound());

        assert!(matches!(
            result,
            Err(Error::OffsetOverflow { offset }) if offset == u32::MAX - 1
        ));
        assert_eq!(source.call_count(), 1);
    }

    #[test]
    fn test_default_limit() {
        assert_eq!(Paginator::new().limit(), 250);
        assert_eq!(Paginator::with_limit(0).limit(), 1);
    }

    #[test]
    fn test_requests_carry_bound_and_sort() {
        let mut source = ScriptedSource::from_page_sizes(&[2, 1]);
        Paginator::with_limit(2).collect(&mut source, bound()).unwrap();

        for request in source.requests() {
            assert_eq!(request.time_lower_bound, bound());
            assert_eq!(request.sort, SortOrder::Desc);
            assert_eq!(request.limit, 2);
        }
    }

    #[test]
    fn test_preserves_arrival_order() {
        let first = vec![
            ScoreRecord::new("2024-05-02T00:30:00Z", 3),
            ScoreRecord::new("2024-05-02T00:20:00Z", 2),
        ];
        let second = vec![ScoreRecord::new("2024-05-02T00:10:00Z", 1)];
        let mut source = ScriptedSource::new()
            .page(first.clone())
            .page(second.clone());

        let scores = Paginator::with_limit(2).collect(&mut source, bound()).unwrap();

        let expected: Vec<_> = first.into_iter().chain(second).collect();
        assert_eq!(scores, expected);
    }

    #[test]
    fn test_sink_error_aborts() {
        let mut source = ScriptedSource::from_page_sizes(&[2, 2, 1]);
        let mut seen = 0;

        let result = Paginator::with_limit(2).for_each_page(&mut source, bound(), |_| {
            seen += 1;
            Err(Error::Http("sink closed".to_string()))
        });

        assert!(matches!(result, Err(Error::Http(_))));
        assert_eq!(seen, 1);
        assert_eq!(source.call_count(), 1);
    }

    #[test]
    fn test_transport_error_is_fatal() {
        let mut source = ScriptedSource::new().page_of(2).transport_error("timed out");

        let result = Paginator::with_limit(2).collect(&mut source, bound());

        assert!(matches!(result, Err(Error::Http(_))));
        assert_eq!(source.call_count(), 2);
    }

    #[test]
    fn test_summary_counts() {
        let mut source = ScriptedSource::from_page_sizes(&[3, 3, 2]);

        let summary = Paginator::with_limit(3)
            .for_each_page(&mut source, bound(), |_| Ok(()))
            .unwrap();

        assert_eq!(
            summary,
            PageSummary {
                pages: 3,
                records: 8
            }
        );
    }
}
