use anyhow::{Context, Result};
use ethers::providers::Middleware;
use ethers::types::{Address, U256};
use nft_marketplace_sdk::MarketplaceSdk;
use tracing::debug;

use crate::utils::print_json;

pub async fn item_offers<M: Middleware + 'static>(
    sdk: &MarketplaceSdk<M>,
    item_id: U256,
) -> Result<()> {
    let offers = sdk
        .get_offers(item_id)
        .await
        .with_context(|| format!("Failed to load the offers on item {item_id}"))?;
    print_json(&offers)
}

pub async fn account_offers<M: Middleware + 'static>(
    sdk: &MarketplaceSdk<M>,
    address: Address,
) -> Result<()> {
    let offers = sdk
        .get_account_offers(address)
        .await
        .with_context(|| format!("Failed to load the offers of {address:?}"))?;
    print_json(&offers)
}

pub async fn offer<M: Middleware + 'static>(
    sdk: &MarketplaceSdk<M>,
    item_id: U256,
    offerer: Address,
) -> Result<()> {
    let offer = sdk
        .get_offer(item_id, offerer)
        .await
        .context("Failed to load offer")?;
    if !offer.exists() {
        debug!(?offerer, %item_id, "No offer recorded");
    }
    print_json(&offer)
}
