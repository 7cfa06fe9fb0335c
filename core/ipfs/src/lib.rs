mod client;
pub mod config;
mod error;
mod metadata;

#[cfg(test)]
mod tests;

pub use client::{resolve_uri, IpfsClient, IPFS_SCHEME, PLACEHOLDER_IMAGE};
pub use config::{ApiEndpoint, Config, Credentials, Protocol};
pub use error::{Error, Result};
pub use metadata::NftMetadata;
