/// Consensus logic contract storage layout.
///
/// Values live in the proxy's storage, so these index the consensus proxy account.
pub mod consensus_slots {
    use alloy_primitives::U256;

    /// slot 1: gasLimit (uint256)
    pub const GAS_LIMIT: U256 = U256::from_limbs([1, 0, 0, 0]);
    /// slot 2: gasPrice (uint256)
    pub const GAS_PRICE: U256 = U256::from_limbs([2, 0, 0, 0]);
    /// slot 3: rewardPool (address)
    pub const REWARD_POOL: U256 = U256::from_limbs([3, 0, 0, 0]);
}

/// AccessControl logic contract storage layout.
pub mod access_control_slots {
    use alloy_primitives::U256;

    /// slot 2: blockedTime mapping base (mapping(address => uint256))
    pub const BLOCKED_TIME_MAPPING: U256 = U256::from_limbs([2, 0, 0, 0]);
    /// slot 8: whitelistedUsers mapping base (mapping(address => mapping(address => uint256)))
    pub const WHITELISTED_USERS_MAPPING: U256 = U256::from_limbs([8, 0, 0, 0]);
    /// slot 9: whitelistedFuncs mapping base (mapping(address => mapping(bytes4 => uint256)))
    pub const WHITELISTED_FUNCS_MAPPING: U256 = U256::from_limbs([9, 0, 0, 0]);
}
