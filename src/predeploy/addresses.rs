use alloy_primitives::{address, b256, Address, B256};

/// AccessControl proxy address - holds the fee-cover whitelists and the blocked-time mapping.
///
/// Storage layout: see [`super::slots::access_control_slots`].
pub const CONTRACT_ACCESS_CONTROL_ADDRESS: Address =
    address!("0300000000000000000000000000000000000000");

/// Consensus proxy address - holds gas limit, gas price and the reward pool.
///
/// Storage layout: see [`super::slots::consensus_slots`].
pub const CONTRACT_CONSENSUS_ADDRESS: Address =
    address!("0300000000000000000000000000000000000001");

/// Default logic contract that both proxies point at until the admin upgrades them.
pub const CONTRACT_DEFAULT_LOGIC_ADDRESS: Address =
    address!("0300000000000000000000000000000000000002");

/// EIP-1967 admin slot: `bytes32(uint256(keccak256("eip1967.proxy.admin")) - 1)`
pub const ADMIN_PROXY_STORAGE_SLOT: B256 =
    b256!("b53127684a568b3173ae13b9f8a6016e243e63b6e8ee1178d6a717850b5d6103");

/// EIP-1967 implementation slot: `bytes32(uint256(keccak256("eip1967.proxy.implementation")) - 1)`
pub const LOGIC_ADDRESS_STORAGE_SLOT: B256 =
    b256!("360894a13ba1a3210667c828492db98dca3e2076cc3735a920a3ca505d382bbc");

/// Consensus slot 1: gasLimit (uint256)
pub const GAS_LIMIT_STORAGE_SLOT: B256 =
    b256!("0000000000000000000000000000000000000000000000000000000000000001");

/// Consensus slot 2: gasPrice (uint256)
pub const GAS_PRICE_STORAGE_SLOT: B256 =
    b256!("0000000000000000000000000000000000000000000000000000000000000002");

/// Consensus slot 3: rewardPool (address)
pub const REWARD_POOL_STORAGE_SLOT: B256 =
    b256!("0000000000000000000000000000000000000000000000000000000000000003");
