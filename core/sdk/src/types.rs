use ethers::types::{Address, TransactionReceipt, U256};
use nft_marketplace_ipfs::NftMetadata;
use serde::{Deserialize, Serialize};

/// A record of the marketplace `items` mapping.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketItem {
    pub id: U256,
    pub nft_contract: Address,
    pub token_id: U256,
    /// Zero while the item is not listed for sale.
    pub price: U256,
    pub owner: Address,
}

impl MarketItem {
    pub fn is_listed(&self) -> bool {
        !self.price.is_zero()
    }
}

impl From<(U256, Address, U256, U256, Address)> for MarketItem {
    fn from(
        (id, nft_contract, token_id, price, owner): (U256, Address, U256, U256, Address),
    ) -> Self {
        Self {
            id,
            nft_contract,
            token_id,
            price,
            owner,
        }
    }
}

/// A token joined with its off-chain metadata.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NftView {
    pub name: Option<String>,
    /// Image URL, already resolved against the gateway.
    pub image: Option<String>,
    pub description: Option<String>,
    /// Collection address as written in the metadata document.
    pub nft: Option<String>,
    pub token_id: U256,
    /// Marketplace owner of the item, when the token is a marketplace item.
    pub owner: Option<Address>,
    /// The full metadata document.
    pub metadata: NftMetadata,
}

impl NftView {
    pub fn new(metadata: NftMetadata, token_id: U256, owner: Option<Address>) -> Self {
        Self {
            name: metadata.name.clone(),
            image: metadata.image.clone(),
            description: metadata.description.clone(),
            nft: metadata.nft.clone(),
            token_id,
            owner,
            metadata,
        }
    }

    /// Returns whether the view describes `item`, by token id and collection address.
    pub fn describes(&self, item: &MarketItem) -> bool {
        self.token_id == item.token_id
            && self
                .nft
                .as_deref()
                .and_then(|nft| nft.parse::<Address>().ok())
                .map(|nft| nft == item.nft_contract)
                .unwrap_or(false)
    }
}

/// Marketplace items and their joined views.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct MarketplaceListing {
    pub items: Vec<MarketItem>,
    pub nfts: Vec<NftView>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ItemDetails {
    pub item: MarketItem,
    pub metadata: NftMetadata,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CollectionInfo {
    pub name: String,
    pub symbol: String,
    pub address: Address,
}

/// A record of the marketplace `offers` mapping.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offer {
    /// Zero when no offer exists.
    pub item_id: U256,
    pub price: U256,
    pub seller: Address,
    pub is_accepted: bool,
}

impl Offer {
    pub fn exists(&self) -> bool {
        !self.item_id.is_zero()
    }
}

impl From<(U256, U256, Address, bool)> for Offer {
    fn from((item_id, price, seller, is_accepted): (U256, U256, Address, bool)) -> Self {
        Self {
            item_id,
            price,
            seller,
            is_accepted,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct OfferView {
    pub offerer: Address,
    pub price: U256,
    pub is_accepted: bool,
    pub seller: Address,
}

impl OfferView {
    pub fn new(offerer: Address, offer: Offer) -> Self {
        Self {
            offerer,
            price: offer.price,
            is_accepted: offer.is_accepted,
            seller: offer.seller,
        }
    }
}

/// Outcome of a mined transaction.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxStatus {
    Success,
    Reverted,
}

impl TxStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, TxStatus::Success)
    }
}

impl From<&TransactionReceipt> for TxStatus {
    fn from(receipt: &TransactionReceipt) -> Self {
        match receipt.status {
            Some(status) if status.as_u64() == 1 => TxStatus::Success,
            _ => TxStatus::Reverted,
        }
    }
}
