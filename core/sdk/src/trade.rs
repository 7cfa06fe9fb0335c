use ethers::providers::Middleware;
use ethers::types::{Address, U256};
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::sdk::MarketplaceSdk;
use crate::types::{MarketItem, TxStatus};

impl<M: Middleware + 'static> MarketplaceSdk<M> {
    /// Puts an owned token of a registered collection on the marketplace.
    pub async fn add_item_to_marketplace(
        &self,
        collection: Address,
        token_id: U256,
    ) -> Result<TxStatus> {
        let collection_id = self.collection_id(collection).await?;
        debug!(target: "marketplace::trade", %collection_id, %token_id, "Adding item");
        self.send(self.marketplace.add_item(collection_id, token_id))
            .await
    }

    /// Lists a marketplace item for sale, approving the marketplace for the token first when
    /// needed.
    pub async fn list_item_for_sale(
        &self,
        collection: Address,
        token_id: U256,
        price: U256,
    ) -> Result<TxStatus> {
        self.ensure_approved(collection, token_id).await?;

        let items = self.fetch_all_items().await?;
        let item_id = find_item_id(&items, collection, token_id)?;
        debug!(target: "marketplace::trade", %item_id, %price, "Listing item");

        self.send(self.marketplace.list_item(item_id, price)).await
    }

    /// Returns the address approved to transfer the token.
    pub async fn check_approval(&self, collection: Address, token_id: U256) -> Result<Address> {
        trace!(target: "marketplace::trade", ?collection, %token_id, "Querying approval");
        Ok(self
            .collection(collection)
            .get_approved(token_id)
            .call()
            .await?)
    }

    /// Approves the marketplace to transfer the token.
    pub async fn approve_token(&self, collection: Address, token_id: U256) -> Result<TxStatus> {
        let nft = self.collection(collection);
        self.send(nft.approve(self.marketplace_address(), token_id))
            .await
    }

    /// Approves the marketplace for the token unless it already is. A failed approval is an
    /// error.
    pub(crate) async fn ensure_approved(&self, collection: Address, token_id: U256) -> Result<()> {
        if self.check_approval(collection, token_id).await? == self.marketplace_address() {
            return Ok(());
        }

        match self.approve_token(collection, token_id).await? {
            TxStatus::Success => Ok(()),
            TxStatus::Reverted => Err(Error::ApprovalFailed(token_id)),
        }
    }

    /// Buys a listed item, paying `price`.
    pub async fn buy_item(&self, item_id: U256, price: U256) -> Result<TxStatus> {
        self.send(self.marketplace.buy_item(item_id).value(price))
            .await
    }

    /// Claims an item whose offer was accepted, paying `price`.
    pub async fn claim_item(&self, item_id: U256, price: U256) -> Result<TxStatus> {
        self.send(self.marketplace.claim_item(item_id).value(price))
            .await
    }

    /// Withdraws the marketplace balance to its owner.
    pub async fn withdraw_money(&self) -> Result<TxStatus> {
        self.send(self.marketplace.withdraw()).await
    }

    pub async fn is_marketplace_owner(&self, address: Address) -> Result<bool> {
        let owner = self.marketplace.owner().call().await?;
        Ok(owner == address)
    }

    /// Native balance held by the marketplace contract.
    pub async fn marketplace_balance(&self) -> Result<U256> {
        self.client
            .get_balance(self.marketplace_address(), None)
            .await
            .map_err(|e| Error::Middleware(e.to_string()))
    }
}

/// Id of the marketplace item holding `token_id` of `collection`.
pub(crate) fn find_item_id(
    items: &[MarketItem],
    collection: Address,
    token_id: U256,
) -> Result<U256> {
    items
        .iter()
        .find(|item| item.nft_contract == collection && item.token_id == token_id)
        .map(|item| item.id)
        .ok_or(Error::UnknownItem {
            collection,
            token_id,
        })
}
