use badge::BadgeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GitHub API error {status} fetching {url}: {body}")]
    Status {
        status: u16,
        url: String,
        body: String,
    },

    #[error("Unexpected response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid account timestamp `{value}`: {source}")]
    Timestamp {
        value: String,
        #[source]
        source: time::error::Parse,
    },

    #[error(transparent)]
    Bundle(#[from] BadgeError),
}
