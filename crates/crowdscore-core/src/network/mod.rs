mod client;
mod crowdscore;

pub use client::{Credentials, HttpClient, HttpReply};
pub use crowdscore::CrowdScoreApi;
