//! Genesis Configuration for the Swimmer subnet
//!
//! Typed genesis JSON, the checksummed transport codec built on top of it, and
//! the allocation that injects the predeploy contracts.

mod alloc;
mod big_int;
mod codec;
mod types;

// Re-export public API
pub use alloc::predeploy_alloc;
pub use codec::{build_genesis, decode_genesis, BuildGenesisReply};
pub use types::{AllowListConfig, ChainConfig, FeeConfig, Genesis, SwimmerConfig};

use crate::errors::GenesisError;
use crate::predeploy::PredeployContract;
use alloy_primitives::{address, b256, Address, U256, U64};
use std::path::Path;

/// Admin of the development network: proxy admin, reward pool and allow-list admin.
pub const DEV_ADMIN_ADDRESS: Address = address!("8db97C7cEcE249c2b98bDC0226Cc4C2A57BF52FC");

impl Genesis {
    /// Parse a genesis from JSON.
    pub fn from_json(json: &str) -> Result<Self, GenesisError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Helper to serialize genesis to JSON (for use with other tools)
    pub fn to_json_pretty(&self) -> Result<String, GenesisError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Add the predeploy allocs described by `config.swimmerConfig`.
    ///
    /// Also aligns the header gas limit with `feeConfig.gasLimit`. A genesis
    /// without a `swimmerConfig` only gets the gas limit update.
    pub fn with_predeploys(mut self) -> Self {
        if let Some(swimmer) = &self.config.swimmer_config {
            self.alloc.extend(predeploy_alloc(&PredeployContract::new(), swimmer));
        }
        self.gas_limit = U64::from(self.config.fee_config.gas_limit);
        self
    }
}

/// Development genesis: chain 99999 with every fork at genesis and `DEV_ADMIN_ADDRESS`
/// administering the predeploys and allow lists.
pub fn dev_genesis() -> Genesis {
    let admin_list =
        AllowListConfig { block_timestamp: Some(0), admin_addresses: vec![DEV_ADMIN_ADDRESS] };
    // 100 native tokens
    let init_native_amount = U256::from(100u64) * U256::from(10u64).pow(U256::from(18u64));
    let config = ChainConfig {
        eip150_hash: Some(b256!("2086799aeebeae135c246c65021c82b4e15a2c451340993aacfd2751886514f0")),
        fee_config: FeeConfig {
            gas_limit: 20_000_000,
            min_base_fee: 1_000_000_000,
            target_gas: 100_000_000,
            base_fee_change_denominator: 48,
            min_block_gas_cost: 0,
            max_block_gas_cost: 10_000_000,
            target_block_rate: 2,
            block_gas_cost_step: 500_000,
        },
        contract_native_minter_config: Some(admin_list.clone()),
        contract_deployer_allow_list_config: Some(admin_list),
        swimmer_config: Some(
            SwimmerConfig::new(DEV_ADMIN_ADDRESS)
                .with_gas_limit(20_000_000)
                .with_gas_price(25_000_000_000)
                .with_init_native(DEV_ADMIN_ADDRESS, init_native_amount),
        ),
        ..ChainConfig::default()
    };
    Genesis::new(config)
}

/// Read and parse a genesis JSON file.
pub fn read_genesis_file(path: &Path) -> Result<Genesis, GenesisError> {
    let json = std::fs::read_to_string(path)?;
    Genesis::from_json(&json)
}

/// Helper to create a genesis file on disk
pub fn write_genesis_file(genesis: &Genesis, path: &Path) -> Result<(), GenesisError> {
    std::fs::write(path, genesis.to_json_pretty()?)?;
    Ok(())
}
