use crate::constants::DEFAULT_CHAIN_ID;
use alloy_genesis::GenesisAccount;
use alloy_primitives::{Address, Bytes, B256, U256, U64};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Chain genesis: chain config, header fields, and the initial account allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Genesis {
    pub config: ChainConfig,
    #[serde(default)]
    pub nonce: U64,
    #[serde(default)]
    pub timestamp: U64,
    #[serde(default)]
    pub extra_data: Bytes,
    pub gas_limit: U64,
    #[serde(default)]
    pub difficulty: U256,
    #[serde(default)]
    pub mix_hash: B256,
    #[serde(default)]
    pub coinbase: Address,
    #[serde(default)]
    pub alloc: BTreeMap<Address, GenesisAccount>,
    #[serde(default)]
    pub number: U64,
    #[serde(default)]
    pub gas_used: U64,
    #[serde(default)]
    pub parent_hash: B256,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_fee_per_gas: Option<U256>,
}

impl Genesis {
    /// Genesis with the given config, an empty alloc, and the fee config's gas limit.
    pub fn new(config: ChainConfig) -> Self {
        Self {
            gas_limit: U64::from(config.fee_config.gas_limit),
            config,
            nonce: U64::ZERO,
            timestamp: U64::ZERO,
            extra_data: Bytes::from_static(&[0x00]),
            difficulty: U256::ZERO,
            mix_hash: B256::ZERO,
            coinbase: Address::ZERO,
            alloc: BTreeMap::new(),
            number: U64::ZERO,
            gas_used: U64::ZERO,
            parent_hash: B256::ZERO,
            base_fee_per_gas: None,
        }
    }

    /// Builder method to add an account to the allocation
    pub fn with_account(mut self, address: Address, account: GenesisAccount) -> Self {
        self.alloc.insert(address, account);
        self
    }
}

/// Chain configuration: fork activations plus the subnet-specific blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainConfig {
    pub chain_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homestead_block: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eip150_block: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eip150_hash: Option<B256>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eip155_block: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eip158_block: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub byzantium_block: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constantinople_block: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub petersburg_block: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub istanbul_block: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muir_glacier_block: Option<u64>,
    #[serde(rename = "subnetEVMTimestamp", default, skip_serializing_if = "Option::is_none")]
    pub subnet_evm_timestamp: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swimmer_phase0_timestamp: Option<u64>,
    /// Falls back to [`FeeConfig::default`] when absent.
    #[serde(default)]
    pub fee_config: FeeConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_native_minter_config: Option<AllowListConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_deployer_allow_list_config: Option<AllowListConfig>,
    /// Initial values for the predeploy contracts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swimmer_config: Option<SwimmerConfig>,
}

impl Default for ChainConfig {
    /// Every fork active from genesis, default fees, no predeploy blocks.
    fn default() -> Self {
        Self {
            chain_id: DEFAULT_CHAIN_ID,
            homestead_block: Some(0),
            eip150_block: Some(0),
            eip150_hash: None,
            eip155_block: Some(0),
            eip158_block: Some(0),
            byzantium_block: Some(0),
            constantinople_block: Some(0),
            petersburg_block: Some(0),
            istanbul_block: Some(0),
            muir_glacier_block: Some(0),
            subnet_evm_timestamp: Some(0),
            swimmer_phase0_timestamp: Some(0),
            fee_config: FeeConfig::default(),
            contract_native_minter_config: None,
            contract_deployer_allow_list_config: None,
            swimmer_config: None,
        }
    }
}

/// Dynamic fee parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeConfig {
    /// Block gas limit
    pub gas_limit: u64,
    /// Minimum base fee in wei
    pub min_base_fee: u64,
    /// Target gas consumed per target block rate window
    pub target_gas: u64,
    /// Bounds the base fee change per window: change = baseFee / denominator
    pub base_fee_change_denominator: u64,
    pub min_block_gas_cost: u64,
    pub max_block_gas_cost: u64,
    /// Target seconds between blocks
    pub target_block_rate: u64,
    /// Block gas cost change per second of deviation from the target rate
    pub block_gas_cost_step: u64,
}

impl Default for FeeConfig {
    fn default() -> Self {
        Self {
            gas_limit: 8_000_000,
            min_base_fee: 25_000_000_000,
            target_gas: 15_000_000,
            base_fee_change_denominator: 36,
            min_block_gas_cost: 0,
            max_block_gas_cost: 1_000_000,
            target_block_rate: 2,
            block_gas_cost_step: 200_000,
        }
    }
}

impl FeeConfig {
    /// Builder method to set the block gas limit
    pub fn with_gas_limit(mut self, gas_limit: u64) -> Self {
        self.gas_limit = gas_limit;
        self
    }

    /// Builder method to set the minimum base fee
    pub fn with_min_base_fee(mut self, min_base_fee: u64) -> Self {
        self.min_base_fee = min_base_fee;
        self
    }
}

/// Admin list of an allow-list precompile and its activation time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllowListConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_timestamp: Option<u64>,
    #[serde(default)]
    pub admin_addresses: Vec<Address>,
}

/// Initial state of the Consensus and AccessControl predeploys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwimmerConfig {
    /// Admin of both proxies (EIP-1967 admin slot)
    pub proxy_admin: Address,
    /// Initial `Consensus.gasLimit`
    pub gas_limit: u64,
    /// Initial `Consensus.gasPrice` in wei
    pub gas_price: u64,
    /// Initial `Consensus.rewardPool`
    pub pool_reward: Address,
    /// Account funded with the initial native supply
    pub init_native_account: Address,
    /// Initial native supply in wei, a bare JSON number like the rest of the config
    #[serde(with = "super::big_int")]
    pub init_native_amount: U256,
}

impl SwimmerConfig {
    /// Config where `admin` administers the proxies, collects rewards and holds no supply.
    pub fn new(admin: Address) -> Self {
        Self {
            proxy_admin: admin,
            gas_limit: FeeConfig::default().gas_limit,
            gas_price: FeeConfig::default().min_base_fee,
            pool_reward: admin,
            init_native_account: admin,
            init_native_amount: U256::ZERO,
        }
    }

    /// Builder method to set the initial gas limit
    pub fn with_gas_limit(mut self, gas_limit: u64) -> Self {
        self.gas_limit = gas_limit;
        self
    }

    /// Builder method to set the initial gas price
    pub fn with_gas_price(mut self, gas_price: u64) -> Self {
        self.gas_price = gas_price;
        self
    }

    /// Builder method to set the reward pool
    pub fn with_pool_reward(mut self, pool: Address) -> Self {
        self.pool_reward = pool;
        self
    }

    /// Builder method to fund an account with the initial native supply
    pub fn with_init_native(mut self, account: Address, amount: U256) -> Self {
        self.init_native_account = account;
        self.init_native_amount = amount;
        self
    }
}
