//! Client SDK for an on-chain NFT marketplace.
//!
//! [`MarketplaceSdk`] reads items, collections and offers from the marketplace contract, joins
//! them with the metadata documents their token URIs point at, and sends the marketplace
//! transactions (adding, listing, buying, offering, claiming). Metadata and images live on IPFS,
//! see [`ipfs`].

pub mod abi;
mod collections;
mod config;
mod error;
mod items;
mod minter;
mod offers;
mod sdk;
mod trade;
mod types;


pub use nft_marketplace_ipfs as ipfs;

pub use config::Config;
pub use error::{Error, Result};
pub use minter::Minter;
pub use sdk::MarketplaceSdk;
pub use types::{
    CollectionInfo,
    ItemDetails,
    MarketItem,
    MarketplaceListing,
    NftView,
    Offer,
    OfferView,
    TxStatus,
};
