//! CrowdScore records as returned by the incidents API.

use serde::{Deserialize, Serialize};

/// One CrowdScore sample.
///
/// Resources returned by the API carry more fields (`id`, `adjusted_score`);
/// only the timestamp and score are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// ISO-8601 UTC timestamp, kept exactly as received.
    pub timestamp: String,
    pub score: i64,
}

impl ScoreRecord {
    pub fn new(timestamp: impl Into<String>, score: i64) -> Self {
        Self {
            timestamp: timestamp.into(),
            score,
        }
    }
}

/// A single page returned by a score source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResponse {
    pub status_code: u16,
    pub records: Vec<ScoreRecord>,
}

impl PageResponse {
    pub const STATUS_OK: u16 = 200;

    pub fn ok(records: Vec<ScoreRecord>) -> Self {
        Self {
            status_code: Self::STATUS_OK,
            records,
        }
    }

    pub fn status(status_code: u16) -> Self {
        Self {
            status_code,
            records: Vec::new(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status_code == Self::STATUS_OK
    }
}

/// Every record of one run, in the order the API returned them.
pub type ResultSet = Vec<ScoreRecord>;
