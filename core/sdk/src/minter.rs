use ethers::providers::Middleware;
use ethers::types::Address;
use ethers::utils::to_checksum;
use nft_marketplace_ipfs::{Credentials, IpfsClient, NftMetadata, PLACEHOLDER_IMAGE};
use tracing::debug;

use crate::error::Result;
use crate::sdk::MarketplaceSdk;
use crate::types::TxStatus;

/// Mints tokens whose image and metadata are uploaded through an authenticated IPFS API.
pub struct Minter<'a, M> {
    sdk: &'a MarketplaceSdk<M>,
    ipfs: IpfsClient,
}

impl<M: Middleware + 'static> MarketplaceSdk<M> {
    pub fn minter(&self, credentials: Credentials) -> Minter<'_, M> {
        Minter {
            sdk: self,
            ipfs: self.ipfs.with_credentials(credentials),
        }
    }
}

impl<'a, M: Middleware + 'static> Minter<'a, M> {
    /// Uploads a file and returns its `ipfs://` URI.
    pub async fn upload(&self, data: Vec<u8>) -> Result<String> {
        Ok(self.ipfs.upload(data).await?)
    }

    /// Uploads the image, or falls back to the placeholder, and points the metadata at it and at
    /// the collection.
    pub async fn prepare_metadata(
        &self,
        collection: Address,
        mut metadata: NftMetadata,
        image: Option<Vec<u8>>,
    ) -> Result<NftMetadata> {
        let image = match image {
            Some(data) => self.upload(data).await?,
            None => PLACEHOLDER_IMAGE.to_string(),
        };

        metadata.image = Some(image);
        metadata.nft = Some(to_checksum(&collection, None));
        Ok(metadata)
    }

    /// Uploads the token image and metadata, then mints the token on `collection`.
    pub async fn mint_nft(
        &self,
        collection: Address,
        metadata: NftMetadata,
        image: Option<Vec<u8>>,
    ) -> Result<TxStatus> {
        let metadata = self.prepare_metadata(collection, metadata, image).await?;
        let uri = self.ipfs.upload_json(&metadata).await?;
        debug!(target: "marketplace::mint", ?collection, %uri, "Minting token");

        let nft = self.sdk.collection(collection);
        self.sdk.send(nft.mint(uri)).await
    }
}
