use ethers::contract::ContractError;
use ethers::providers::{Middleware, ProviderError};
use ethers::types::{Address, H256, U256};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Contract call failed: {0}")]
    Contract(String),
    #[error("Middleware request failed: {0}")]
    Middleware(String),
    #[error("Provider request failed: {0}")]
    Provider(#[from] ProviderError),
    #[error(transparent)]
    Ipfs(#[from] nft_marketplace_ipfs::Error),
    #[error("Transaction {0:?} was dropped before it was mined")]
    Dropped(H256),
    #[error("Collection {0:?} was never added to the marketplace")]
    UnknownCollection(Address),
    #[error("Token {token_id} of collection {collection:?} is not a marketplace item")]
    UnknownItem { collection: Address, token_id: U256 },
    #[error("Approving the marketplace for token {0} failed")]
    ApprovalFailed(U256),
    #[error("No collection bytecode configured")]
    MissingBytecode,
}

impl<M: Middleware> From<ContractError<M>> for Error {
    fn from(err: ContractError<M>) -> Self {
        Error::Contract(err.to_string())
    }
}
