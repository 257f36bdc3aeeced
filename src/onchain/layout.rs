//! Field → storage location table.
//!
//! Every accessor resolves its slot through [`Field::location`], so the mapping
//! from a logical field to (contract, base slot, padding rule) lives in one place.

use super::helpers::{nested_mapping_slot, slot_from_index, MappingKey};
use crate::predeploy::{
    access_control_slots, consensus_slots, CONTRACT_ACCESS_CONTROL_ADDRESS,
    CONTRACT_CONSENSUS_ADDRESS,
};
use alloy_primitives::{Address, B256};

/// Where a value lives inside a contract's storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotLocation {
    /// Value type declared at a fixed index.
    Fixed(B256),
    /// Mapping entry; keys are applied outermost first.
    Mapping { base: B256, keys: Vec<MappingKey> },
}

impl SlotLocation {
    /// Resolve to the concrete storage key. Pure, touches no state.
    pub fn resolve(&self) -> B256 {
        match self {
            Self::Fixed(slot) => *slot,
            Self::Mapping { base, keys } => nested_mapping_slot(*base, keys),
        }
    }
}

/// Every field the accessors read or write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    /// `Consensus.gasLimit`
    GasLimit,
    /// `Consensus.gasPrice`
    GasPrice,
    /// `Consensus.rewardPool`
    RewardPool,
    /// `AccessControl.whitelistedUsers[contract][user]`
    WhitelistedUser { contract: Address, user: Address },
    /// `AccessControl.whitelistedFuncs[contract][selector]`
    WhitelistedFunc { contract: Address, selector: Vec<u8> },
    /// `AccessControl.blockedTime[account]`
    BlockedTime { account: Address },
}

impl Field {
    /// The predeploy account whose storage holds this field.
    pub fn contract(&self) -> Address {
        match self {
            Self::GasLimit | Self::GasPrice | Self::RewardPool => CONTRACT_CONSENSUS_ADDRESS,
            Self::WhitelistedUser { .. }
            | Self::WhitelistedFunc { .. }
            | Self::BlockedTime { .. } => CONTRACT_ACCESS_CONTROL_ADDRESS,
        }
    }

    pub fn location(&self) -> SlotLocation {
        match self {
            Self::GasLimit => SlotLocation::Fixed(slot_from_index(consensus_slots::GAS_LIMIT)),
            Self::GasPrice => SlotLocation::Fixed(slot_from_index(consensus_slots::GAS_PRICE)),
            Self::RewardPool => {
                SlotLocation::Fixed(slot_from_index(consensus_slots::REWARD_POOL))
            }
            Self::WhitelistedUser { contract, user } => SlotLocation::Mapping {
                base: slot_from_index(access_control_slots::WHITELISTED_USERS_MAPPING),
                keys: vec![MappingKey::Address(*contract), MappingKey::Address(*user)],
            },
            // bytes4 keys are right-padded, unlike the address key in front of them.
            Self::WhitelistedFunc { contract, selector } => SlotLocation::Mapping {
                base: slot_from_index(access_control_slots::WHITELISTED_FUNCS_MAPPING),
                keys: vec![MappingKey::Address(*contract), MappingKey::selector(selector)],
            },
            Self::BlockedTime { account } => SlotLocation::Mapping {
                base: slot_from_index(access_control_slots::BLOCKED_TIME_MAPPING),
                keys: vec![MappingKey::Address(*account)],
            },
        }
    }

    /// Resolved storage key of this field.
    pub fn slot(&self) -> B256 {
        self.location().resolve()
    }
}
