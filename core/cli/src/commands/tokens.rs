use anyhow::{Context, Result};
use ethers::providers::Middleware;
use ethers::types::{Address, U256};
use nft_marketplace_sdk::MarketplaceSdk;

use crate::utils::print_json;

pub async fn items<M: Middleware + 'static>(sdk: &MarketplaceSdk<M>) -> Result<()> {
    let listing = sdk
        .load_items()
        .await
        .context("Failed to load marketplace items")?;
    print_json(&listing)
}

pub async fn item<M: Middleware + 'static>(sdk: &MarketplaceSdk<M>, id: U256) -> Result<()> {
    let details = sdk
        .get_item(id)
        .await
        .with_context(|| format!("Failed to load item {id}"))?;
    print_json(&details)
}

pub async fn for_listing<M: Middleware + 'static>(
    sdk: &MarketplaceSdk<M>,
    owner: Address,
) -> Result<()> {
    let listing = sdk
        .load_items_for_listing(owner)
        .await
        .with_context(|| format!("Failed to load the listable items of {owner:?}"))?;
    print_json(&listing)
}

pub async fn for_adding<M: Middleware + 'static>(
    sdk: &MarketplaceSdk<M>,
    collection: Address,
    owner: Address,
) -> Result<()> {
    let nfts = sdk
        .load_items_for_adding(collection, owner)
        .await
        .with_context(|| format!("Failed to load the tokens of {owner:?} in {collection:?}"))?;
    print_json(&nfts)
}
