use ethers::types::{Address, Bytes};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Config {
    /// Address of the deployed marketplace contract.
    pub marketplace: Address,
    /// Gas limit attached to every transaction the SDK sends.
    pub gas_limit: u64,
    /// Creation bytecode of the NFT collection contract. Only needed to deploy new collections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_bytecode: Option<Bytes>,
    pub ipfs: nft_marketplace_ipfs::Config,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            marketplace: Address::zero(),
            gas_limit: 300_000,
            collection_bytecode: None,
            ipfs: Default::default(),
        }
    }
}
