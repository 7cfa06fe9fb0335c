use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Config {
    /// Prefix substituted for `ipfs://` when resolving content URIs.
    pub gateway: String,
    /// The IPFS HTTP API used for uploads.
    pub api: ApiEndpoint,
    /// Basic auth credentials for the HTTP API. Uploads are sent unauthenticated when unset.
    pub credentials: Option<Credentials>,
    #[serde(with = "humantime_serde")]
    pub request_timeout: Duration,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Http,
    Https,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApiEndpoint {
    pub protocol: Protocol,
    pub authority: String,
    pub path: String,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub project_id: String,
    pub project_secret: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gateway: "https://ipfs.io/ipfs/".to_string(),
            api: ApiEndpoint {
                protocol: Protocol::Https,
                authority: "ipfs.infura.io:5001".to_string(),
                path: "/api/v0".to_string(),
            },
            credentials: None,
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl Protocol {
    pub fn as_str(&self) -> &str {
        match self {
            Protocol::Http => "http",
            Protocol::Https => "https",
        }
    }
}

impl ApiEndpoint {
    /// Returns the url of an API method, e.g. `add`.
    pub fn method_url(&self, method: &str) -> Result<Url, url::ParseError> {
        Url::parse(&format!(
            "{}://{}{}/{}",
            self.protocol.as_str(),
            self.authority,
            self.path.trim_end_matches('/'),
            method
        ))
    }
}

impl Credentials {
    pub fn new(project_id: impl Into<String>, project_secret: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            project_secret: project_secret.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("project_id", &self.project_id)
            .field("project_secret", &"<redacted>")
            .finish()
    }
}
