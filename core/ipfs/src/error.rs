use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{url} responded with status {status}")]
    Status { url: String, status: u16 },
    #[error("Invalid IPFS API endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
    #[error("IPFS API returned an invalid content id: {0}")]
    InvalidCid(#[from] cid::Error),
    #[error("Failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),
}
