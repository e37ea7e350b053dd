use serde::Deserialize;

use crate::config::Region;
use crate::config::http::CROWDSCORE_PATH;
use crate::error::Result;
use crate::network::{Credentials, HttpClient};
use crate::score::{PageResponse, ScoreRecord};
use crate::source::{PageRequest, ScoreSource};

#[derive(Debug, Deserialize)]
struct CrowdScoreBody {
    #[serde(default)]
    resources: Option<Vec<ScoreRecord>>,
}

/// CrowdScore query of the Falcon incidents API.
pub struct CrowdScoreApi {
    client: HttpClient,
}

impl CrowdScoreApi {
    pub fn new(credentials: Credentials, region: Region) -> Self {
        Self {
            client: HttpClient::new(credentials, region),
        }
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }
}

/// Query parameters for one page of the CrowdScore query.
fn page_query(request: &PageRequest) -> [(&'static str, String); 4] {
    [
        ("filter", request.filter()),
        ("sort", request.sort_expression()),
        ("limit", request.limit.to_string()),
        ("offset", request.offset.to_string()),
    ]
}

impl ScoreSource for CrowdScoreApi {
    fn fetch_page(&mut self, request: &PageRequest) -> Result<PageResponse> {
        let reply = self
            .client
            .get_json::<CrowdScoreBody>(CROWDSCORE_PATH, &page_query(request))?;

        let records = reply
            .body
            .and_then(|body| body.resources)
            .unwrap_or_default();

        Ok(PageResponse {
            status_code: reply.status,
            records,
        })
    }
}
