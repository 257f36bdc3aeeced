use swimmer_predeploy::cli::{Cli, Command, SlotField};
use swimmer_predeploy::genesis::{self, build_genesis, decode_genesis, Genesis};
use swimmer_predeploy::onchain::{Field, MemoryState};
use swimmer_predeploy::output;
use swimmer_predeploy::predeploy::PredeployContract;

use clap::Parser;
use eyre::Context;
use std::path::Path;

/// Main entry point for the genesis tool
fn main() -> eyre::Result<()> {
    // Initialize tracing
    reth_tracing::init_test_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Init { out, with_predeploys } => {
            let genesis = maybe_with_predeploys(genesis::dev_genesis(), with_predeploys);
            genesis::write_genesis_file(&genesis, &out)
                .wrap_err_with(|| format!("Failed to write genesis to {}", out.display()))?;
            output::print_header("Development genesis");
            output::print_genesis_summary(&genesis);
            output::print_written(&out);
        }
        Command::Build { genesis, encoding, with_predeploys } => {
            let genesis = maybe_with_predeploys(load_genesis(&genesis)?, with_predeploys);
            let reply = build_genesis(&genesis, encoding).wrap_err("Failed to build genesis")?;
            output::print_encoded(&reply);
        }
        Command::Decode { data, file, encoding, out } => {
            let encoded = match (data, file) {
                (Some(data), _) => data,
                (None, Some(file)) => std::fs::read_to_string(&file)
                    .wrap_err_with(|| format!("Failed to read {}", file.display()))?,
                (None, None) => eyre::bail!("Either encoded data or --file is required"),
            };
            let genesis = decode_genesis(encoded.trim(), encoding)
                .wrap_err("Failed to decode genesis bytes")?;
            match out {
                Some(path) => {
                    genesis::write_genesis_file(&genesis, &path).wrap_err_with(|| {
                        format!("Failed to write genesis to {}", path.display())
                    })?;
                    output::print_written(&path);
                }
                None => println!("{}", genesis.to_json_pretty()?),
            }
        }
        Command::Inspect { genesis, with_predeploys, account, contract, selector } => {
            let selector = selector.resolve()?;
            let genesis = maybe_with_predeploys(load_genesis(&genesis)?, with_predeploys);
            let state = MemoryState::from_genesis(&genesis);
            let predeploy = PredeployContract::new();

            output::print_header("Genesis");
            output::print_genesis_summary(&genesis);

            output::print_header("Consensus predeploy");
            output::print_consensus_values(
                predeploy.get_gas_limit(&state),
                predeploy.get_gas_price(&state),
                predeploy.get_reward_pool_address(&state),
            );

            if account.is_none() && contract.is_none() {
                return Ok(());
            }
            output::print_header("AccessControl predeploy");
            if let Some(account) = account {
                output::print_field("Account", account);
                output::print_field(
                    "Blocked until",
                    predeploy.get_blocked_time_of(&state, account),
                );
            }
            if let Some(contract) = contract {
                output::print_field("Contract", contract);
                if let Some(account) = account {
                    output::print_flag(
                        "Whitelisted user",
                        predeploy.is_whitelisted_user(&state, contract, account),
                    );
                }
                if let Some(selector) = selector {
                    output::print_field("Selector", format!("0x{}", hex::encode(selector)));
                    output::print_flag(
                        "Whitelisted func",
                        predeploy.is_whitelisted_func(&state, contract, &selector),
                    );
                }
            }
        }
        Command::Slot { field } => {
            let field = match field {
                SlotField::User { contract, user } => Field::WhitelistedUser { contract, user },
                SlotField::Func { contract, selector } => {
                    let Some(selector) = selector.resolve()? else {
                        eyre::bail!("Either --selector or --signature is required");
                    };
                    Field::WhitelistedFunc { contract, selector: selector.to_vec() }
                }
                SlotField::Blocked { account } => Field::BlockedTime { account },
                SlotField::GasLimit => Field::GasLimit,
                SlotField::GasPrice => Field::GasPrice,
                SlotField::RewardPool => Field::RewardPool,
            };
            let (contract, slot) = PredeployContract::new().slot_of(&field);
            output::print_header("Storage slot");
            output::print_slot(contract, slot);
        }
    }

    Ok(())
}

fn load_genesis(path: &Path) -> eyre::Result<Genesis> {
    genesis::read_genesis_file(path)
        .wrap_err_with(|| format!("Failed to load genesis from {}", path.display()))
}

fn maybe_with_predeploys(genesis: Genesis, with_predeploys: bool) -> Genesis {
    if with_predeploys {
        genesis.with_predeploys()
    } else {
        genesis
    }
}

