use crate::formatting::Encoding;
use crate::onchain::function_selector;
use alloy_primitives::Address;
use clap::{Args, Parser, Subcommand};
use eyre::{ensure, WrapErr};
use std::path::PathBuf;

/// CLI arguments for the genesis tool
#[derive(Parser, Debug)]
#[command(name = "swimmer-genesis", about = "Swimmer predeploy genesis tool")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write the development genesis JSON (chain 99999, predeploys administered by the dev admin)
    Init {
        /// Output file
        #[arg(long, default_value = "genesis.json")]
        out: PathBuf,

        /// Also write the predeploy allocs into `alloc`
        #[arg(long)]
        with_predeploys: bool,
    },

    /// Encode a genesis JSON file into checksummed genesis bytes
    Build {
        /// Genesis JSON file
        #[arg(long)]
        genesis: PathBuf,

        /// Transport encoding (cb58 is limited to 16 KiB; use hex for larger files)
        #[arg(long, default_value_t = Encoding::Cb58)]
        encoding: Encoding,

        /// Add the predeploy allocs from `config.swimmerConfig` before encoding
        #[arg(long)]
        with_predeploys: bool,
    },

    /// Decode checksummed genesis bytes back into genesis JSON
    Decode {
        /// Encoded genesis bytes
        #[arg(required_unless_present = "file", conflicts_with = "file")]
        data: Option<String>,

        /// Read the encoded genesis bytes from a file instead
        #[arg(long)]
        file: Option<PathBuf>,

        /// Transport encoding of the input
        #[arg(long, default_value_t = Encoding::Cb58)]
        encoding: Encoding,

        /// Write the JSON to this file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Load a genesis file into memory and print what the predeploy accessors read
    Inspect {
        /// Genesis JSON file
        #[arg(long)]
        genesis: PathBuf,

        /// Add the predeploy allocs from `config.swimmerConfig` before reading
        #[arg(long)]
        with_predeploys: bool,

        /// Also report whitelist and blocked-time entries for this account
        #[arg(long)]
        account: Option<Address>,

        /// Contract to check `--account` and `--selector`/`--signature` against
        #[arg(long)]
        contract: Option<Address>,

        #[command(flatten)]
        selector: SelectorArgs,
    },

    /// Print the storage slot a predeploy field resolves to
    Slot {
        #[command(subcommand)]
        field: SlotField,
    },
}

#[derive(Subcommand, Debug)]
pub enum SlotField {
    /// AccessControl.whitelistedUsers[contract][user]
    User {
        contract: Address,
        user: Address,
    },
    /// AccessControl.whitelistedFuncs[contract][selector]
    Func {
        contract: Address,

        #[command(flatten)]
        selector: SelectorArgs,
    },
    /// AccessControl.blockedTime[account]
    Blocked { account: Address },
    /// Consensus.gasLimit
    GasLimit,
    /// Consensus.gasPrice
    GasPrice,
    /// Consensus.rewardPool
    RewardPool,
}

/// A function selector given either as hex or as a signature to hash.
#[derive(Args, Debug, Clone, Default)]
pub struct SelectorArgs {
    /// 4-byte selector as hex (e.g. 0xa9059cbb)
    #[arg(long, conflicts_with = "signature", requires = "contract")]
    pub selector: Option<String>,

    /// Function signature to hash into a selector (e.g. "transfer(address,uint256)")
    #[arg(long, requires = "contract")]
    pub signature: Option<String>,
}

impl SelectorArgs {
    /// The selector bytes, or `None` if neither flag was given.
    pub fn resolve(&self) -> eyre::Result<Option<[u8; 4]>> {
        if let Some(hex_selector) = &self.selector {
            let bytes = hex::decode(hex_selector.trim_start_matches("0x"))
                .wrap_err("Invalid selector hex")?;
            ensure!(bytes.len() == 4, "Selector must be 4 bytes, got {}", bytes.len());
            let mut selector = [0u8; 4];
            selector.copy_from_slice(&bytes);
            return Ok(Some(selector));
        }
        Ok(self.signature.as_deref().map(function_selector))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    const TRANSFER: [u8; 4] = [0xa9, 0x05, 0x9c, 0xbb];

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("swimmer-genesis").chain(args.iter().copied()))
    }

    #[test]
    fn test_inspect_accepts_function_whitelist_query() {
        let cli = parse(&[
            "inspect",
            "--genesis",
            "genesis.json",
            "--contract",
            "0x8db97C7cEcE249c2b98bDC0226Cc4C2A57BF52FC",
            "--signature",
            "transfer(address,uint256)",
        ])
        .unwrap();
        match cli.command {
            Command::Inspect { contract, selector, account, .. } => {
                assert_eq!(contract, Some(address!("8db97C7cEcE249c2b98bDC0226Cc4C2A57BF52FC")));
                assert_eq!(account, None);
                assert_eq!(selector.resolve().unwrap(), Some(TRANSFER));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_inspect_selector_requires_contract() {
        assert!(parse(&["inspect", "--genesis", "g.json", "--selector", "0xa9059cbb"]).is_err());
    }

    #[test]
    fn test_selector_and_signature_conflict() {
        let args = [
            "slot",
            "func",
            "0x8db97C7cEcE249c2b98bDC0226Cc4C2A57BF52FC",
            "--selector",
            "0xa9059cbb",
            "--signature",
            "transfer(address,uint256)",
        ];
        assert!(parse(&args).is_err());
    }

    #[test]
    fn test_selector_resolution() {
        let hex = SelectorArgs { selector: Some("0xa9059cbb".into()), signature: None };
        assert_eq!(hex.resolve().unwrap(), Some(TRANSFER));

        let bare = SelectorArgs { selector: Some("a9059cbb".into()), signature: None };
        assert_eq!(bare.resolve().unwrap(), Some(TRANSFER));

        let short = SelectorArgs { selector: Some("0xa905".into()), signature: None };
        assert!(short.resolve().is_err());

        assert_eq!(SelectorArgs::default().resolve().unwrap(), None);
    }
}
