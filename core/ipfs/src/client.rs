use std::sync::Arc;

use cid::Cid;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::{Config, Credentials};
use crate::error::{Error, Result};
use crate::metadata::NftMetadata;

pub const IPFS_SCHEME: &str = "ipfs://";

/// Image used for tokens minted without one.
pub const PLACEHOLDER_IMAGE: &str = "ipfs://QmcZcBrDxzXogmpGoh1jU3AjSjGTqHVoM4pNtejAEeMc5J";

/// Client for the content-addressed store behind token URIs.
///
/// Reads go through a public gateway, uploads go through the IPFS HTTP API.
#[derive(Clone, Debug)]
pub struct IpfsClient {
    client: Client,
    config: Arc<Config>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AddResponse {
    hash: String,
}

impl IpfsClient {
    pub fn new(config: Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns a client sharing the same connection pool that authenticates uploads with the
    /// given credentials.
    pub fn with_credentials(&self, credentials: Credentials) -> Self {
        let mut config = self.config.as_ref().clone();
        config.credentials = Some(credentials);
        Self {
            client: self.client.clone(),
            config: Arc::new(config),
        }
    }

    /// Rewrites an `ipfs://` URI to a gateway URL.
    pub fn resolve(&self, uri: &str) -> String {
        resolve_uri(&self.config.gateway, uri)
    }

    /// Fetches the metadata document behind a token URI.
    ///
    /// The `image` field of the returned document is already resolved against the gateway.
    pub async fn fetch_metadata(&self, uri: &str) -> Result<NftMetadata> {
        let url = self.resolve(uri);
        trace!(target: "ipfs::client", %url, "Fetching metadata");

        let res = self.client.get(&url).send().await?;
        let mut metadata: NftMetadata = check_status(res)?.json().await?;
        metadata.image = metadata.image.map(|image| self.resolve(&image));

        Ok(metadata)
    }

    /// Adds a file through the HTTP API and returns its content id.
    pub async fn add(&self, data: Vec<u8>) -> Result<Cid> {
        let url = self.config.api.method_url("add")?;
        debug!(target: "ipfs::client", %url, size = data.len(), "Uploading file");

        let form = Form::new().part("file", Part::bytes(data).file_name("file"));
        let mut req = self.client.post(url).multipart(form);
        if let Some(credentials) = &self.config.credentials {
            req = req.basic_auth(
                &credentials.project_id,
                Some(&credentials.project_secret),
            );
        }

        let res = req.send().await?;
        let added: AddResponse = check_status(res)?.json().await?;
        let cid = Cid::try_from(added.hash.as_str())?;

        trace!(target: "ipfs::client", %cid, "Upload complete");
        Ok(cid)
    }

    /// Uploads a file and returns its `ipfs://` URI.
    pub async fn upload(&self, data: Vec<u8>) -> Result<String> {
        let cid = self.add(data).await?;
        Ok(format!("{IPFS_SCHEME}{cid}"))
    }

    /// Uploads a value serialized as JSON and returns its `ipfs://` URI.
    pub async fn upload_json<T: Serialize>(&self, value: &T) -> Result<String> {
        let data = serde_json::to_vec(value)?;
        self.upload(data).await
    }
}

/// Replaces the first `ipfs://` occurrence in `uri` with the gateway prefix.
pub fn resolve_uri(gateway: &str, uri: &str) -> String {
    uri.replacen(IPFS_SCHEME, gateway, 1)
}

fn check_status(res: Response) -> Result<Response> {
    let status = res.status();
    if status.is_success() {
        Ok(res)
    } else {
        Err(Error::Status {
            url: res.url().to_string(),
            status: status.as_u16(),
        })
    }
}
