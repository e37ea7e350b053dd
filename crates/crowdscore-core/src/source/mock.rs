//! Scripted score source for testing
//!
//! Replays a fixed sequence of pages and records every request it receives,
//! so paging behaviour can be verified without network access.

use std::collections::VecDeque;

use chrono::{DateTime, Duration, Utc};

use crate::error::{Error, Result};
use crate::score::{PageResponse, ScoreRecord};
use crate::source::{PageRequest, ScoreSource};

/// One scripted reply.
#[derive(Debug, Clone)]
enum Reply {
    Page(PageResponse),
    TransportError(String),
}

/// Score source that replays scripted pages in order.
///
/// Once the script is exhausted every further call returns an empty page
/// with status 200.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    replies: VecDeque<Reply>,
    requests: Vec<PageRequest>,
    next_minute: i64,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a source from page sizes, each served with status 200.
    ///
    /// Records are generated with strictly descending timestamps across all
    /// pages, so every record in the script is distinct.
    pub fn from_page_sizes(sizes: &[usize]) -> Self {
        sizes
            .iter()
            .fold(Self::new(), |source, &size| source.page_of(size))
    }

    /// Append a page with the given records.
    pub fn page(mut self, records: Vec<ScoreRecord>) -> Self {
        self.replies.push_back(Reply::Page(PageResponse::ok(records)));
        self
    }

    /// Append a page of `size` generated records.
    pub fn page_of(mut self, size: usize) -> Self {
        let records = (0..size).map(|_| self.next_record()).collect();
        self.page(records)
    }

    /// Append a reply carrying only a status code.
    pub fn status(mut self, status_code: u16) -> Self {
        self.replies
            .push_back(Reply::Page(PageResponse::status(status_code)));
        self
    }

    /// Append a reply that fails before any status is known.
    pub fn transport_error(mut self, message: &str) -> Self {
        self.replies
            .push_back(Reply::TransportError(message.to_string()));
        self
    }

    /// Requests received so far, in call order.
    pub fn requests(&self) -> &[PageRequest] {
        &self.requests
    }

    pub fn call_count(&self) -> usize {
        self.requests.len()
    }

    /// Offsets of the requests received so far.
    pub fn offsets(&self) -> Vec<u32> {
        self.requests.iter().map(|r| r.offset).collect()
    }

    fn next_record(&mut self) -> ScoreRecord {
        let start: DateTime<Utc> = DateTime::<Utc>::UNIX_EPOCH + Duration::days(20_000);
        let timestamp = start - Duration::minutes(self.next_minute * 10);
        let score = self.next_minute % 100;
        self.next_minute += 1;
        ScoreRecord::new(timestamp.format("%Y-%m-%dT%H:%M:%SZ").to_string(), score)
    }
}

impl ScoreSource for ScriptedSource {
    fn fetch_page(&mut self, request: &PageRequest) -> Result<PageResponse> {
        self.requests.push(request.clone());

        match self.replies.pop_front() {
            Some(Reply::Page(page)) => Ok(page),
            Some(Reply::TransportError(message)) => Err(Error::Http(message)),
            None => Ok(PageResponse::ok(Vec::new())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SortOrder;

    fn request(offset: u32) -> PageRequest {
        PageRequest {
            time_lower_bound: DateTime::<Utc>::UNIX_EPOCH,
            sort: SortOrder::Desc,
            offset,
            limit: 3,
        }
    }

    #[test]
    fn test_replays_pages_in_order() {
        let mut source = ScriptedSource::from_page_sizes(&[3, 1]);

        let first = source.fetch_page(&request(0)).unwrap();
        let second = source.fetch_page(&request(3)).unwrap();
        let third = source.fetch_page(&request(6)).unwrap();

        assert_eq!(first.records.len(), 3);
        assert_eq!(second.records.len(), 1);
        assert!(third.records.is_empty());
        assert!(third.is_ok());
        assert_eq!(source.offsets(), vec![0, 3, 6]);
    }

    #[test]
    fn test_generated_timestamps_descend() {
        let mut source = ScriptedSource::from_page_sizes(&[4]);
        let page = source.fetch_page(&request(0)).unwrap();

        assert!(page
            .records
            .windows(2)
            .all(|pair| pair[0].timestamp > pair[1].timestamp));
    }

    #[test]
    fn test_status_and_transport_error() {
        let mut source = ScriptedSource::new().status(429).transport_error("refused");

        assert_eq!(source.fetch_page(&request(0)).unwrap().status_code, 429);
        assert!(matches!(
            source.fetch_page(&request(0)),
            Err(Error::Http(message)) if message == "refused"
        ));
        assert_eq!(source.call_count(), 2);
    }
}
