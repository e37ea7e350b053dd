use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unable to retrieve CrowdScores. Status: {status}")]
    FetchFailed { status: u16 },

    #[error("Time window of {days} days starts before the earliest supported date")]
    InvalidTimeWindow { days: u32 },

    #[error("Page offset overflowed after offset {offset}")]
    OffsetOverflow { offset: u32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Http(String),
}

impl Error {
    /// Remote status code carried by a fatal fetch failure, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::FetchFailed { status } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<ureq::Error> for Error {
    fn from(e: ureq::Error) -> Self {
        let message = match &e {
            ureq::Error::Timeout(_) => format!("Request timed out: {}", e),
            ureq::Error::HostNotFound | ureq::Error::ConnectionFailed => {
                format!("Connection failed: {}", e)
            }
            ureq::Error::StatusCode(code) => format!("HTTP {} error: {}", code, e),
            _ => format!("HTTP error: {}", e),
        };
        Error::Http(message)
    }
}
