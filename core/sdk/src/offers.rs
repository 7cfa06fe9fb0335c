use std::collections::HashSet;

use ethers::providers::Middleware;
use ethers::types::{Address, U256};
use futures::future::try_join_all;
use tracing::{debug, trace};

use crate::error::Result;
use crate::sdk::{one_based_ids, MarketplaceSdk};
use crate::types::{MarketItem, Offer, OfferView, TxStatus};

impl<M: Middleware + 'static> MarketplaceSdk<M> {
    pub async fn place_offer(&self, item_id: U256, price: U256) -> Result<TxStatus> {
        debug!(target: "marketplace::offers", %item_id, %price, "Placing offer");
        self.send(self.marketplace.place_offer(item_id, price))
            .await
    }

    pub async fn get_offer(&self, item_id: U256, offerer: Address) -> Result<Offer> {
        trace!(target: "marketplace::offers", %item_id, ?offerer, "Querying offer");
        Ok(self.marketplace.offers(item_id, offerer).call().await?.into())
    }

    /// Every offer made on an item, one per distinct offerer.
    pub async fn get_offers(&self, item_id: U256) -> Result<Vec<OfferView>> {
        let offerers = self.marketplace.get_offerers(item_id).call().await?;
        let offerers = distinct(offerers);
        debug!(target: "marketplace::offers", %item_id, count = offerers.len(), "Querying offers");

        let offers = try_join_all(
            offerers
                .iter()
                .map(|&offerer| self.get_offer(item_id, offerer)),
        )
        .await?;

        Ok(offerers
            .into_iter()
            .zip(offers)
            .map(|(offerer, offer)| OfferView::new(offerer, offer))
            .collect())
    }

    /// Accepts an offer, approving the marketplace for the token first when needed.
    pub async fn accept_offer(&self, item_id: U256, offerer: Address) -> Result<TxStatus> {
        let item = self.fetch_item(item_id).await?;
        self.ensure_approved(item.nft_contract, item.token_id)
            .await?;

        debug!(target: "marketplace::offers", %item_id, ?offerer, "Accepting offer");
        self.send(self.marketplace.accept_offer(item_id, offerer))
            .await
    }

    /// Offers made by `address` that can still be accepted: the seller recorded on the offer
    /// still owns the item and the item is not listed.
    pub async fn get_account_offers(&self, address: Address) -> Result<Vec<Offer>> {
        let count = self.item_count().await?;
        let offers =
            try_join_all(one_based_ids(count).map(|id| self.get_offer(id, address))).await?;
        let offers = offers
            .into_iter()
            .filter(Offer::exists)
            .collect::<Vec<_>>();

        let items = self
            .fetch_items(offers.iter().map(|offer| offer.item_id))
            .await?;

        Ok(open_offers(offers, &items))
    }
}

/// Drops repeated addresses, keeping the first occurrence of each.
pub(crate) fn distinct(addresses: Vec<Address>) -> Vec<Address> {
    let mut seen = HashSet::new();
    addresses
        .into_iter()
        .filter(|address| seen.insert(*address))
        .collect()
}

/// Keeps the offers whose item is still held by the recorded seller and not listed.
/// `items[i]` is the item of `offers[i]`.
pub(crate) fn open_offers(offers: Vec<Offer>, items: &[MarketItem]) -> Vec<Offer> {
    offers
        .into_iter()
        .zip(items)
        .filter(|(offer, item)| offer.seller == item.owner && !item.is_listed())
        .map(|(offer, _)| offer)
        .collect()
}
