use ethers::providers::Middleware;
use ethers::types::{Address, H256, U256};
use futures::future::try_join_all;
use nft_marketplace_ipfs::NftMetadata;
use tracing::{debug, trace};

use crate::error::Result;
use crate::sdk::MarketplaceSdk;
use crate::types::{ItemDetails, MarketItem, MarketplaceListing, NftView};

impl<M: Middleware + 'static> MarketplaceSdk<M> {
    /// Loads every marketplace item joined with its metadata.
    pub async fn load_items(&self) -> Result<MarketplaceListing> {
        let items = self.fetch_all_items().await?;
        let tokens = items
            .iter()
            .map(|item| (item.nft_contract, item.token_id))
            .collect::<Vec<_>>();
        let metadata = self.token_metadata(&tokens).await?;

        let nfts = join_views(&items, metadata);
        Ok(MarketplaceListing { items, nfts })
    }

    /// Loads one marketplace item and its metadata.
    pub async fn get_item(&self, id: U256) -> Result<ItemDetails> {
        let item = self.fetch_item(id).await?;
        let uri = self
            .collection(item.nft_contract)
            .token_uri(item.token_id)
            .call()
            .await?;
        trace!(target: "marketplace::metadata", %id, %uri, "Fetching item metadata");
        let metadata = self.ipfs.fetch_metadata(&uri).await?;

        Ok(ItemDetails { item, metadata })
    }

    /// Token ids minted on `collection`, i.e. every `Transfer` out of the zero address.
    pub async fn minted_token_ids(&self, collection: Address) -> Result<Vec<U256>> {
        trace!(target: "marketplace::items", ?collection, "Querying mint events");
        let events = self
            .collection(collection)
            .transfer_filter()
            .topic1(H256::zero())
            .from_block(0u64)
            .query()
            .await?;

        Ok(events.into_iter().map(|event| event.token_id).collect())
    }

    /// Tokens of `collection` held by `owner` that are not marketplace items yet.
    pub async fn load_items_for_adding(
        &self,
        collection: Address,
        owner: Address,
    ) -> Result<Vec<NftView>> {
        let items = self.fetch_all_items().await?;
        let minted = self.minted_token_ids(collection).await?;
        let candidates = unlisted_token_ids(minted, &items, collection);

        let nft = &self.collection(collection);
        let owners = try_join_all(
            candidates
                .iter()
                .map(|&token_id| async move { nft.owner_of(token_id).call().await }),
        )
        .await?;

        let owned = candidates
            .into_iter()
            .zip(owners)
            .filter(|(_, token_owner)| *token_owner == owner)
            .map(|(token_id, _)| token_id)
            .collect::<Vec<_>>();
        debug!(
            target: "marketplace::items",
            ?collection,
            ?owner,
            count = owned.len(),
            "Found tokens to add"
        );

        let tokens = owned
            .iter()
            .map(|&token_id| (collection, token_id))
            .collect::<Vec<_>>();
        let metadata = self.token_metadata(&tokens).await?;

        Ok(metadata
            .into_iter()
            .zip(owned)
            .map(|(metadata, token_id)| NftView::new(metadata, token_id, None))
            .collect())
    }

    /// Marketplace items of `owner` that are not listed for sale.
    pub async fn load_items_for_listing(&self, owner: Address) -> Result<MarketplaceListing> {
        let listing = self.load_items().await?;
        Ok(select_for_listing(listing, owner))
    }
}

/// Joins items with their metadata, position by position.
pub(crate) fn join_views(items: &[MarketItem], metadata: Vec<NftMetadata>) -> Vec<NftView> {
    items
        .iter()
        .zip(metadata)
        .map(|(item, metadata)| NftView::new(metadata, item.token_id, Some(item.owner)))
        .collect()
}

/// Keeps the unlisted items of `owner` and the views describing them.
pub(crate) fn select_for_listing(
    listing: MarketplaceListing,
    owner: Address,
) -> MarketplaceListing {
    let items = listing
        .items
        .into_iter()
        .filter(|item| item.owner == owner && !item.is_listed())
        .collect::<Vec<_>>();
    let nfts = listing
        .nfts
        .into_iter()
        .filter(|view| items.iter().any(|item| view.describes(item)))
        .collect();

    MarketplaceListing { items, nfts }
}

/// Minted ids of `collection` that no marketplace item refers to.
pub(crate) fn unlisted_token_ids(
    minted: Vec<U256>,
    items: &[MarketItem],
    collection: Address,
) -> Vec<U256> {
    minted
        .into_iter()
        .filter(|token_id| {
            !items
                .iter()
                .any(|item| item.nft_contract == collection && item.token_id == *token_id)
        })
        .collect()
}
