use clap::{ArgAction, Parser, Subcommand};
use ethers::types::{Address, U256};

use crate::config::MARKETPLACE_HOME_DIR;

#[derive(Parser, Debug)]
#[command(about, name = "nft-marketplace", version)]
pub struct Args {
    /// Path to the toml configuration file
    #[arg(short, long, global = true, default_value_t = String::from(MARKETPLACE_HOME_DIR.join("config.toml").to_string_lossy().as_ref()))]
    pub config: String,
    /// Increases the level of verbosity (the max level is -vvv).
    #[arg(short, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Print every marketplace item joined with its metadata.
    Items,
    /// Print one marketplace item and its metadata.
    Item {
        #[arg(value_parser = parse_u256)]
        id: U256,
    },
    /// Print the collections registered on the marketplace.
    Collections,
    /// Print the unlisted marketplace items of an owner.
    ForListing {
        #[arg(value_parser = parse_address)]
        owner: Address,
    },
    /// Print the tokens of a collection an owner could add to the marketplace.
    ForAdding {
        #[arg(value_parser = parse_address)]
        collection: Address,
        #[arg(value_parser = parse_address)]
        owner: Address,
    },
    /// Print the offers made on an item.
    Offers {
        #[arg(value_parser = parse_u256)]
        item_id: U256,
    },
    /// Print the offers of an account that can still be accepted.
    AccountOffers {
        #[arg(value_parser = parse_address)]
        address: Address,
    },
    /// Print the offer an account made on an item.
    Offer {
        #[arg(value_parser = parse_u256)]
        item_id: U256,
        #[arg(value_parser = parse_address)]
        offerer: Address,
    },
    /// Check whether an address owns the marketplace contract.
    IsOwner {
        #[arg(value_parser = parse_address)]
        address: Address,
    },
    /// Print the native balance of the marketplace contract.
    Balance,
    /// Print the loaded configuration.
    PrintConfig {
        /// Print the default configuration instead of the loaded one.
        #[arg(long)]
        default: bool,
    },
}

/// Parses a decimal amount or id.
fn parse_u256(value: &str) -> Result<U256, String> {
    U256::from_dec_str(value).map_err(|e| format!("invalid number '{value}': {e}"))
}

fn parse_address(value: &str) -> Result<Address, String> {
    value
        .parse::<Address>()
        .map_err(|e| format!("invalid address '{value}': {e}"))
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use ethers::types::{Address, U256};
    use pretty_assertions::assert_eq;

    use super::{Args, Command};

    #[test]
    fn test_parse_decimal_ids() {
        let args = Args::try_parse_from(["nft-marketplace", "item", "12"]).unwrap();
        assert_eq!(args.cmd, Command::Item { id: U256::from(12) });
    }

    #[test]
    fn test_parse_addresses() {
        let args = Args::try_parse_from([
            "nft-marketplace",
            "-vv",
            "for-adding",
            "0x00000000000000000000000000000000000000c0",
            "0x00000000000000000000000000000000000000a1",
        ])
        .unwrap();

        assert_eq!(args.verbose, 2);
        assert_eq!(
            args.cmd,
            Command::ForAdding {
                collection: Address::from_low_u64_be(0xc0),
                owner: Address::from_low_u64_be(0xa1),
            }
        );
    }

    #[test]
    fn test_reject_invalid_input() {
        assert!(Args::try_parse_from(["nft-marketplace", "offers", "0x1f"]).is_err());
        assert!(Args::try_parse_from(["nft-marketplace", "is-owner", "alice"]).is_err());
    }

    #[test]
    fn test_config_flag_is_global() {
        let args =
            Args::try_parse_from(["nft-marketplace", "balance", "--config", "/tmp/mp.toml"])
                .unwrap();
        assert_eq!(args.config, "/tmp/mp.toml");
        assert_eq!(args.cmd, Command::Balance);
    }
}
