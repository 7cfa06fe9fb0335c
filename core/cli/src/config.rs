use std::path::{Path, PathBuf};
use std::{env, fs};

use anyhow::{anyhow, Context, Result};
use lazy_static::lazy_static;
use nft_marketplace_sdk::Config as SdkConfig;
use serde::{Deserialize, Serialize};

use crate::utils::ensure_parent_exist;

lazy_static! {
    pub static ref MARKETPLACE_HOME_DIR: PathBuf = env::var("NFT_MARKETPLACE_HOME")
        .unwrap_or("~/.nft-marketplace".to_string())
        .into();
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CliConfig {
    /// JSON-RPC endpoint of the chain the marketplace lives on.
    pub rpc_url: String,
    pub sdk: SdkConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            rpc_url: "http://127.0.0.1:8545".to_string(),
            sdk: SdkConfig::default(),
        }
    }
}

impl CliConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(anyhow!(
                "The configuration file '{}' does not exist.",
                path.to_string_lossy()
            ));
        }

        let content = fs::read_to_string(path).with_context(|| {
            format!(
                "IO: Could not load the configuration file '{}'.",
                path.to_string_lossy()
            )
        })?;

        toml::from_str(&content).with_context(|| {
            format!(
                "Could not parse the configuration file '{}' as toml.",
                path.to_string_lossy()
            )
        })
    }

    /// Loads the configuration, writing the default one first when the file is missing.
    pub fn load_or_write<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::load(path);
        }

        tracing::info!("Writing default configuration to {}", path.to_string_lossy());
        let config = Self::default();
        ensure_parent_exist(path)?;
        config.write(path)?;
        Ok(config)
    }

    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(&path, self.serialize()?).with_context(|| {
            format!(
                "Could not write the configuration file: {}",
                path.as_ref().to_string_lossy()
            )
        })
    }

    pub fn serialize(&self) -> Result<String> {
        toml::to_string(self).context("Failed to serialize config")
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use ethers::types::Address;
    use nft_marketplace_sdk::ipfs::Credentials;
    use pretty_assertions::assert_eq;

    use super::CliConfig;

    #[test]
    fn test_missing_config_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = CliConfig::load_or_write(&path).unwrap();

        assert!(path.exists());
        assert_eq!(config.rpc_url, "http://127.0.0.1:8545");
        assert_eq!(config.sdk.gas_limit, 300_000);
    }

    #[test]
    fn test_config_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = CliConfig::default();
        config.rpc_url = "https://rpc.example".to_string();
        config.sdk.marketplace = Address::from_low_u64_be(0xaa);
        config.sdk.ipfs.credentials = Some(Credentials::new("project", "secret"));
        config.sdk.ipfs.request_timeout = Duration::from_secs(3);
        config.write(&path).unwrap();

        let loaded = CliConfig::load(&path).unwrap();

        assert_eq!(loaded.rpc_url, "https://rpc.example");
        assert_eq!(loaded.sdk.marketplace, Address::from_low_u64_be(0xaa));
        assert_eq!(
            loaded.sdk.ipfs.credentials,
            Some(Credentials::new("project", "secret"))
        );
        assert_eq!(loaded.sdk.ipfs.request_timeout, Duration::from_secs(3));
        assert_eq!(loaded.sdk.ipfs.gateway, "https://ipfs.io/ipfs/");
    }

    #[test]
    fn test_load_missing_config_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(CliConfig::load(dir.path().join("absent.toml")).is_err());
    }
}
