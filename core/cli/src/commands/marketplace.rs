use anyhow::{Context, Result};
use ethers::providers::Middleware;
use ethers::types::Address;
use ethers::utils::format_ether;
use nft_marketplace_sdk::MarketplaceSdk;
use serde_json::json;

use crate::utils::print_json;

pub async fn collections<M: Middleware + 'static>(sdk: &MarketplaceSdk<M>) -> Result<()> {
    let collections = sdk
        .load_collections()
        .await
        .context("Failed to load collections")?;
    print_json(&collections)
}

pub async fn is_owner<M: Middleware + 'static>(
    sdk: &MarketplaceSdk<M>,
    address: Address,
) -> Result<()> {
    let is_owner = sdk
        .is_marketplace_owner(address)
        .await
        .context("Failed to query the marketplace owner")?;
    print_json(&is_owner)
}

pub async fn balance<M: Middleware + 'static>(sdk: &MarketplaceSdk<M>) -> Result<()> {
    let balance = sdk
        .marketplace_balance()
        .await
        .context("Failed to query the marketplace balance")?;
    print_json(&json!({
        "wei": balance.to_string(),
        "ether": format_ether(balance),
    }))
}
