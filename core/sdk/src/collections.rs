use ethers::contract::ContractFactory;
use ethers::providers::Middleware;
use ethers::types::{Address, U256};
use futures::future::try_join_all;
use tracing::{debug, info, trace};

use crate::abi::NFTCOLLECTION_ABI;
use crate::error::{Error, Result};
use crate::sdk::{one_based_ids, MarketplaceSdk};
use crate::types::{CollectionInfo, TxStatus};

impl<M: Middleware + 'static> MarketplaceSdk<M> {
    /// Loads name, symbol and address of every collection registered on the marketplace.
    pub async fn load_collections(&self) -> Result<Vec<CollectionInfo>> {
        let count = self.marketplace.collection_count().call().await?;
        debug!(target: "marketplace::collections", %count, "Querying collections");

        let addresses = try_join_all(
            one_based_ids(count)
                .map(|id| async move { self.marketplace.collections(id).call().await }),
        )
        .await?;

        try_join_all(
            addresses
                .into_iter()
                .map(|address| self.collection_info(address)),
        )
        .await
    }

    pub async fn collection_info(&self, address: Address) -> Result<CollectionInfo> {
        let nft = self.collection(address);
        let name = nft.name();
        let symbol = nft.symbol();
        let (name, symbol) = futures::try_join!(name.call(), symbol.call())?;

        Ok(CollectionInfo {
            name,
            symbol,
            address,
        })
    }

    /// Marketplace id of a registered collection, taken from the first `LogCollectionAdded`
    /// event naming it.
    pub async fn collection_id(&self, collection: Address) -> Result<U256> {
        trace!(target: "marketplace::collections", ?collection, "Querying collection events");
        let events = self
            .marketplace
            .log_collection_added_filter()
            .from_block(0u64)
            .query()
            .await?;

        events
            .into_iter()
            .find(|event| event.nft_collection == collection)
            .map(|event| event.id)
            .ok_or(Error::UnknownCollection(collection))
    }

    /// Registers an already deployed collection on the marketplace.
    pub async fn add_existing_collection(&self, collection: Address) -> Result<TxStatus> {
        self.send(self.marketplace.add_collection(collection)).await
    }

    /// Deploys a new collection from the configured bytecode and returns its address.
    pub async fn deploy_nft_collection(&self, name: &str, symbol: &str) -> Result<Address> {
        let bytecode = self
            .config
            .collection_bytecode
            .clone()
            .ok_or(Error::MissingBytecode)?;

        let factory =
            ContractFactory::new(NFTCOLLECTION_ABI.clone(), bytecode, self.client.clone());
        let contract = factory
            .deploy((name.to_string(), symbol.to_string()))?
            .send()
            .await?;

        let address = contract.address();
        info!(target: "marketplace::collections", ?address, name, symbol, "Collection deployed");
        Ok(address)
    }
}
