pub mod config;
pub mod error;
pub mod export;
pub mod network;
pub mod paginator;
pub mod score;
pub mod source;

pub use config::{ExportProfile, Region};
pub use error::{Error, Result};
pub use export::{ExportOutcome, ScoreRow, ScoreTable, TableFormatter, TableStyle, export_csv};
pub use network::{Credentials, CrowdScoreApi, HttpClient};
pub use paginator::{PageSummary, Paginator, time_lower_bound, window_start};
pub use score::{PageResponse, ResultSet, ScoreRecord};
pub use source::{PageRequest, ScoreSource, SortOrder};
