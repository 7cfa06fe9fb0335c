use std::iter;
use std::sync::Arc;

use ethers::abi::Detokenize;
use ethers::contract::ContractCall;
use ethers::providers::Middleware;
use ethers::types::{Address, U256};
use futures::future::try_join_all;
use nft_marketplace_ipfs::{IpfsClient, NftMetadata};
use tracing::{debug, info, trace};

use crate::abi::{Marketplace, NftCollection};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::types::{MarketItem, TxStatus};

/// Facade over the marketplace contract, the collections it tracks and the content store that
/// holds their metadata.
///
/// `M` is whatever middleware stack the caller built: a bare provider is enough for reads, writes
/// need a signing middleware.
pub struct MarketplaceSdk<M> {
    pub(crate) client: Arc<M>,
    pub(crate) marketplace: Marketplace<M>,
    pub(crate) ipfs: IpfsClient,
    pub(crate) config: Config,
}

impl<M: Middleware + 'static> MarketplaceSdk<M> {
    pub fn new(client: Arc<M>, config: Config) -> Result<Self> {
        let marketplace = Marketplace::new(config.marketplace, client.clone());
        let ipfs = IpfsClient::new(config.ipfs.clone())?;

        Ok(Self {
            client,
            marketplace,
            ipfs,
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn marketplace_address(&self) -> Address {
        self.config.marketplace
    }

    pub fn ipfs(&self) -> &IpfsClient {
        &self.ipfs
    }

    /// Binds the collection contract at `address`.
    pub fn collection(&self, address: Address) -> NftCollection<M> {
        NftCollection::new(address, self.client.clone())
    }

    /// Number of items ever added to the marketplace. Item ids run from 1 to this value.
    pub async fn item_count(&self) -> Result<U256> {
        trace!(target: "marketplace::items", "Querying itemCount");
        Ok(self.marketplace.item_count().call().await?)
    }

    pub async fn fetch_item(&self, id: U256) -> Result<MarketItem> {
        trace!(target: "marketplace::items", %id, "Querying item");
        Ok(self.marketplace.items(id).call().await?.into())
    }

    /// Reads the given items concurrently, preserving the order of `ids`.
    pub async fn fetch_items(
        &self,
        ids: impl IntoIterator<Item = U256>,
    ) -> Result<Vec<MarketItem>> {
        let fetches = ids
            .into_iter()
            .map(|id| self.fetch_item(id))
            .collect::<Vec<_>>();
        debug!(target: "marketplace::items", count = fetches.len(), "Querying items");
        try_join_all(fetches).await
    }

    /// Reads every marketplace item.
    pub async fn fetch_all_items(&self) -> Result<Vec<MarketItem>> {
        let count = self.item_count().await?;
        self.fetch_items(one_based_ids(count)).await
    }

    /// Reads `tokenURI` of each `(collection, token id)` pair concurrently.
    pub(crate) async fn token_uris(&self, tokens: &[(Address, U256)]) -> Result<Vec<String>> {
        let calls = tokens.iter().map(|&(collection, token_id)| async move {
            trace!(target: "marketplace::metadata", ?collection, %token_id, "Querying tokenURI");
            let uri = self.collection(collection).token_uri(token_id).call().await?;
            Ok::<_, Error>(uri)
        });
        try_join_all(calls).await
    }

    /// Fetches the metadata documents behind the given token URIs concurrently.
    pub(crate) async fn fetch_metadata(&self, uris: &[String]) -> Result<Vec<NftMetadata>> {
        debug!(target: "marketplace::metadata", count = uris.len(), "Fetching metadata");
        let fetches = uris.iter().map(|uri| self.ipfs.fetch_metadata(uri));
        Ok(try_join_all(fetches).await?)
    }

    /// Resolves the metadata of each token: first every token URI, then every document.
    pub(crate) async fn token_metadata(
        &self,
        tokens: &[(Address, U256)],
    ) -> Result<Vec<NftMetadata>> {
        let uris = self.token_uris(tokens).await?;
        self.fetch_metadata(&uris).await
    }

    /// Sends a transaction with the configured gas limit and waits for its receipt.
    pub(crate) async fn send<D: Detokenize>(&self, call: ContractCall<M, D>) -> Result<TxStatus> {
        let call = call.gas(self.config.gas_limit);
        let pending = call.send().await?;
        let tx_hash = *pending;
        trace!(target: "marketplace::tx", ?tx_hash, "Waiting for receipt");

        let receipt = pending.await?.ok_or(Error::Dropped(tx_hash))?;
        let status = TxStatus::from(&receipt);
        info!(target: "marketplace::tx", ?tx_hash, ?status, "Transaction mined");

        Ok(status)
    }
}

/// Ids `1..=count`, the id space of the marketplace mappings.
pub(crate) fn one_based_ids(count: U256) -> impl Iterator<Item = U256> {
    iter::successors(Some(U256::one()), |id| id.checked_add(U256::one()))
        .take_while(move |id| *id <= count)
}
