use std::fmt;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};
use ureq::Agent;

use crate::config::Region;
use crate::config::http::{REGION_HEADER, REQUEST_TIMEOUT, TOKEN_PATH};
use crate::error::Result;

/// Falcon API client credentials.
#[derive(Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

enum Authentication {
    Token(String),
    Rejected(u16),
}

/// Status and decoded body of a single API call.
///
/// The body is only decoded for a 200 response.
#[derive(Debug)]
pub struct HttpReply<T> {
    pub status: u16,
    pub body: Option<T>,
}

/// Blocking HTTP client for the Falcon API.
///
/// Requests a bearer token on first use and keeps it for the lifetime of the
/// client. Non-2xx statuses are returned to the caller, never raised.
pub struct HttpClient {
    agent: Agent,
    credentials: Credentials,
    region: Region,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    pub fn new(credentials: Credentials, region: Region) -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(REQUEST_TIMEOUT))
            .http_status_as_error(false)
            .build();
        let agent: Agent = config.into();

        Self {
            agent,
            credentials,
            region,
            base_url: region.base_url().to_string(),
            token: None,
        }
    }

    /// Base URL requests currently go to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn region(&self) -> Region {
        self.region
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    fn authenticate(&mut self) -> Result<Authentication> {
        if let Some(token) = &self.token {
            return Ok(Authentication::Token(token.clone()));
        }

        let url = self.url(TOKEN_PATH);
        debug!("Requesting token from {}", url);

        let mut response = self.agent.post(&url).send_form([
            ("client_id", self.credentials.client_id.as_str()),
            ("client_secret", self.credentials.client_secret.as_str()),
        ])?;

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            warn!("Token request rejected with status {}", status);
            return Ok(Authentication::Rejected(status));
        }

        if self.region.is_auto() {
            let reported = response
                .headers()
                .get(REGION_HEADER)
                .and_then(|value| value.to_str().ok())
                .and_then(Region::from_region_header);

            if let Some(region) = reported
                && region.base_url() != self.base_url
            {
                info!("Credentials belong to region {}, switching endpoint", region);
                self.base_url = region.base_url().to_string();
            }
        }

        let token: TokenResponse = response.body_mut().read_json()?;
        self.token = Some(token.access_token.clone());
        Ok(Authentication::Token(token.access_token))
    }

    /// Issue an authenticated GET and decode a 200 body as `T`.
    ///
    /// A rejected token request is reported through the returned status.
    pub fn get_json<T: DeserializeOwned>(
        &mut self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<HttpReply<T>> {
        let token = match self.authenticate()? {
            Authentication::Token(token) => token,
            Authentication::Rejected(status) => return Ok(HttpReply { status, body: None }),
        };

        let url = self.url(path);
        let mut request = self
            .agent
            .get(&url)
            .header("Authorization", &format!("Bearer {}", token));
        for (key, value) in query {
            request = request.query(*key, value);
        }

        let mut response = request.call()?;
        let status = response.status().as_u16();
        debug!("GET {} -> {}", url, status);

        if status != 200 {
            return Ok(HttpReply { status, body: None });
        }

        let body: T = response.body_mut().read_json()?;
        Ok(HttpReply {
            status,
            body: Some(body),
        })
    }
}
