//! Configuration constants and option types.
//!
//! - `Region` - Falcon cloud region selection
//! - `ExportProfile` - time window and file name presets
//! - Paging, HTTP and export constants

mod profile;
mod region;

pub use profile::*;
pub use region::*;

/// Offset/limit paging configuration.
pub mod paging {
    /// Number of records requested per page.
    pub const PAGE_LIMIT: u32 = 250;

    /// Field the CrowdScore query is sorted and filtered on.
    pub const SORT_FIELD: &str = "timestamp";

    /// Format of the time lower bound inside the query filter.
    pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
}

/// Falcon API endpoints and transport settings.
pub mod http {
    use std::time::Duration;

    /// Global timeout applied to every request.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// OAuth2 client-credentials token endpoint.
    pub const TOKEN_PATH: &str = "oauth2/token";

    /// Combined CrowdScore query endpoint.
    pub const CROWDSCORE_PATH: &str = "incidents/combined/crowdscores/v1";

    /// Response header naming the region the credentials belong to.
    pub const REGION_HEADER: &str = "x-cs-region";
}

/// Export defaults.
pub mod export {
    /// Column names of the exported CSV file.
    pub const CSV_COLUMNS: [&str; 2] = ["timestamp", "score"];

    pub const FULL_EXPORT_FILENAME: &str = "crowdscore_data.csv";
    pub const RAW_EXPORT_FILENAME: &str = "crowdscore_raw_data.csv";

    pub const DEFAULT_TIME_WINDOW_DAYS: u32 = 30;
    pub const RAW_TIME_WINDOW_DAYS: u32 = 7;
}
