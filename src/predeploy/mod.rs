//! Predeploy Registry
//!
//! Fixed addresses, storage slots and bytecode of the contracts injected into
//! genesis: the AccessControl proxy, the Consensus proxy and the default logic
//! contract both proxies delegate to.
//!
//! Every constant here must match the deployed Solidity layout. Changing a slot
//! without redeploying the contract silently breaks every read.

pub mod addresses;
pub mod bytecode;
pub mod slots;

pub use addresses::{
    ADMIN_PROXY_STORAGE_SLOT, CONTRACT_ACCESS_CONTROL_ADDRESS, CONTRACT_CONSENSUS_ADDRESS,
    CONTRACT_DEFAULT_LOGIC_ADDRESS, GAS_LIMIT_STORAGE_SLOT, GAS_PRICE_STORAGE_SLOT,
    LOGIC_ADDRESS_STORAGE_SLOT, REWARD_POOL_STORAGE_SLOT,
};
pub use bytecode::{DEFAULT_LOGIC_BYTECODE, TRANSPARENT_UPGRADEABLE_PROXY_BYTECODE};
pub use slots::{access_control_slots, consensus_slots};

use alloy_primitives::{Address, Bytes, B256};

/// Immutable snapshot of the predeploy registry.
///
/// Accessors are implemented on this type in [`crate::onchain::readers`]; they take
/// the state as a parameter on every call and never hold it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredeployContract {
    /// AccessControl proxy (whitelists, blocked times)
    pub contract_access_control_address: Address,
    /// Consensus proxy (gas limit, gas price, reward pool)
    pub contract_consensus_address: Address,
    /// Logic contract both proxies delegate to at genesis
    pub contract_default_logic_address: Address,
    /// EIP-1967 slot holding the proxy admin
    pub admin_proxy_storage_slot: B256,
    /// EIP-1967 slot holding the implementation address
    pub logic_address_storage_slot: B256,
    /// Consensus slot of `gasLimit`
    pub gas_limit_storage_slot: B256,
    /// Consensus slot of `gasPrice`
    pub gas_price_storage_slot: B256,
    /// Consensus slot of `rewardPool`
    pub reward_pool_storage_slot: B256,
    /// Runtime code of the default logic contract
    pub default_logic_bytecode: Bytes,
    /// Runtime code of both proxies
    pub transparent_upgradeable_proxy_bytecode: Bytes,
}

impl PredeployContract {
    pub fn new() -> Self {
        Self {
            contract_access_control_address: CONTRACT_ACCESS_CONTROL_ADDRESS,
            contract_consensus_address: CONTRACT_CONSENSUS_ADDRESS,
            contract_default_logic_address: CONTRACT_DEFAULT_LOGIC_ADDRESS,
            admin_proxy_storage_slot: ADMIN_PROXY_STORAGE_SLOT,
            logic_address_storage_slot: LOGIC_ADDRESS_STORAGE_SLOT,
            gas_limit_storage_slot: GAS_LIMIT_STORAGE_SLOT,
            gas_price_storage_slot: GAS_PRICE_STORAGE_SLOT,
            reward_pool_storage_slot: REWARD_POOL_STORAGE_SLOT,
            default_logic_bytecode: Bytes::from_static(DEFAULT_LOGIC_BYTECODE),
            transparent_upgradeable_proxy_bytecode: Bytes::from_static(
                TRANSPARENT_UPGRADEABLE_PROXY_BYTECODE,
            ),
        }
    }
}

impl Default for PredeployContract {
    fn default() -> Self {
        Self::new()
    }
}
