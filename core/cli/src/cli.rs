use std::sync::Arc;

use anyhow::{Context, Result};
use ethers::providers::{Http, Provider};
use nft_marketplace_sdk::MarketplaceSdk;
use resolved_pathbuf::ResolvedPathBuf;
use tracing::debug;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::args::{Args, Command};
use crate::commands::{marketplace, offers, print_config, tokens};
use crate::config::CliConfig;
use crate::utils::ensure_parent_exist;

pub struct Cli {
    args: Args,
}

impl Cli {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    pub async fn exec(self) -> Result<()> {
        self.setup();
        let config_path = self.resolve_config_path()?;

        let sdk = match self.args.cmd {
            Command::PrintConfig { default } => return print_config::exec(default, config_path),
            _ => connect(&config_path)?,
        };

        match self.args.cmd {
            Command::Items => tokens::items(&sdk).await,
            Command::Item { id } => tokens::item(&sdk, id).await,
            Command::ForListing { owner } => tokens::for_listing(&sdk, owner).await,
            Command::ForAdding { collection, owner } => {
                tokens::for_adding(&sdk, collection, owner).await
            },
            Command::Offers { item_id } => offers::item_offers(&sdk, item_id).await,
            Command::AccountOffers { address } => offers::account_offers(&sdk, address).await,
            Command::Offer { item_id, offerer } => offers::offer(&sdk, item_id, offerer).await,
            Command::Collections => marketplace::collections(&sdk).await,
            Command::IsOwner { address } => marketplace::is_owner(&sdk, address).await,
            Command::Balance => marketplace::balance(&sdk).await,
            Command::PrintConfig { .. } => Ok(()),
        }
    }

    fn resolve_config_path(&self) -> Result<ResolvedPathBuf> {
        let input_path = self.args.config.as_str();
        let config_path = ResolvedPathBuf::try_from(input_path)
            .context(format!("Failed to resolve config path: {input_path}"))?;
        ensure_parent_exist(&config_path)?;
        Ok(config_path)
    }

    fn setup(&self) {
        // Build the filter from cli args, or environment variable
        let env_filter = EnvFilter::builder()
            .with_default_directive(
                match self.args.verbose {
                    0 => LevelFilter::WARN,
                    1 => LevelFilter::INFO,
                    2 => LevelFilter::DEBUG,
                    _3_or_more => LevelFilter::TRACE,
                }
                .into(),
            )
            .from_env_lossy()
            .add_directive("hyper=off".parse().expect("valid directive"));

        // Logs go to stderr so that stdout only carries command output.
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .with(env_filter)
            .init();
    }
}

/// Loads the configuration and binds the marketplace over a plain http provider.
fn connect(config_path: &ResolvedPathBuf) -> Result<MarketplaceSdk<Provider<Http>>> {
    let config = CliConfig::load_or_write(config_path)?;
    debug!(rpc_url = %config.rpc_url, marketplace = ?config.sdk.marketplace, "Connecting");

    let provider = Provider::<Http>::try_from(config.rpc_url.as_str())
        .with_context(|| format!("Invalid rpc url: {}", config.rpc_url))?;
    MarketplaceSdk::new(Arc::new(provider), config.sdk)
        .context("Failed to initialize the marketplace sdk")
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::Cli;
    use crate::args::Args;

    #[test]
    fn test_config_path_is_resolved_and_parent_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let args = Args::try_parse_from([
            "nft-marketplace",
            "--config",
            path.to_str().unwrap(),
            "balance",
        ])
        .unwrap();

        let resolved = Cli::new(args).resolve_config_path().unwrap();

        assert_eq!(resolved.as_path(), path.as_path());
        assert!(dir.path().join("nested").is_dir());
    }

    #[test]
    fn test_relative_config_path_is_absolute() {
        let args =
            Args::try_parse_from(["nft-marketplace", "--config", "config.toml", "balance"])
                .unwrap();

        let resolved = Cli::new(args).resolve_config_path().unwrap();

        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("config.toml"));
    }
}
