use super::helpers::{
    decode_address, decode_positive, decode_u256, decode_u64, encode_address, encode_bool,
    encode_u256, encode_u64,
};
use super::layout::Field;
use super::StateDb;
use crate::predeploy::PredeployContract;
use alloy_primitives::{Address, B256, U256};
use reth_tracing::tracing::trace;

fn read_field<S: StateDb + ?Sized>(state: &S, field: &Field) -> B256 {
    let (contract, slot) = (field.contract(), field.slot());
    let value = state.get_state(contract, slot);
    trace!(target: "predeploy::onchain", ?field, %contract, %slot, %value, "read predeploy storage");
    value
}

fn write_field<S: StateDb + ?Sized>(state: &mut S, field: &Field, value: B256) {
    let (contract, slot) = (field.contract(), field.slot());
    trace!(target: "predeploy::onchain", ?field, %contract, %slot, %value, "write predeploy storage");
    state.set_state(contract, slot, value);
}

/// Typed accessors over the predeploy contracts' storage.
///
/// Getters never fail: a missing account or unwritten slot reads as zero, so the
/// result is `0`, `Address::ZERO` or `false`.
impl PredeployContract {
    /// Storage location of `field`, for tooling that inspects raw state.
    pub fn slot_of(&self, field: &Field) -> (Address, B256) {
        (field.contract(), field.slot())
    }

    /// Block gas limit from the Consensus contract.
    pub fn get_gas_limit<S: StateDb + ?Sized>(&self, state: &S) -> U256 {
        decode_u256(read_field(state, &Field::GasLimit))
    }

    /// Gas price from the Consensus contract.
    pub fn get_gas_price<S: StateDb + ?Sized>(&self, state: &S) -> U256 {
        decode_u256(read_field(state, &Field::GasPrice))
    }

    /// Reward pool address from the Consensus contract.
    pub fn get_reward_pool_address<S: StateDb + ?Sized>(&self, state: &S) -> Address {
        decode_address(read_field(state, &Field::RewardPool))
    }

    /// Whether `user` is whitelisted for fee cover when calling `contract`.
    pub fn is_whitelisted_user<S: StateDb + ?Sized>(
        &self,
        state: &S,
        contract: Address,
        user: Address,
    ) -> bool {
        decode_positive(read_field(state, &Field::WhitelistedUser { contract, user }))
    }

    /// Whether the function `selector` on `contract` is accepted in fee-cover mode.
    pub fn is_whitelisted_func<S: StateDb + ?Sized>(
        &self,
        state: &S,
        contract: Address,
        selector: &[u8],
    ) -> bool {
        let field = Field::WhitelistedFunc { contract, selector: selector.to_vec() };
        decode_positive(read_field(state, &field))
    }

    /// Unix timestamp until which `account` is blocked (low 64 bits of the stored word).
    pub fn get_blocked_time_of<S: StateDb + ?Sized>(&self, state: &S, account: Address) -> u64 {
        decode_u64(read_field(state, &Field::BlockedTime { account }))
    }

    pub fn set_gas_limit<S: StateDb + ?Sized>(&self, state: &mut S, gas_limit: U256) {
        write_field(state, &Field::GasLimit, encode_u256(gas_limit));
    }

    pub fn set_gas_price<S: StateDb + ?Sized>(&self, state: &mut S, gas_price: U256) {
        write_field(state, &Field::GasPrice, encode_u256(gas_price));
    }

    pub fn set_reward_pool_address<S: StateDb + ?Sized>(&self, state: &mut S, pool: Address) {
        write_field(state, &Field::RewardPool, encode_address(pool));
    }

    pub fn set_whitelisted_user<S: StateDb + ?Sized>(
        &self,
        state: &mut S,
        contract: Address,
        user: Address,
        whitelisted: bool,
    ) {
        write_field(state, &Field::WhitelistedUser { contract, user }, encode_bool(whitelisted));
    }

    pub fn set_whitelisted_func<S: StateDb + ?Sized>(
        &self,
        state: &mut S,
        contract: Address,
        selector: &[u8],
        whitelisted: bool,
    ) {
        let field = Field::WhitelistedFunc { contract, selector: selector.to_vec() };
        write_field(state, &field, encode_bool(whitelisted));
    }

    pub fn set_blocked_time_of<S: StateDb + ?Sized>(
        &self,
        state: &mut S,
        account: Address,
        blocked_until: u64,
    ) {
        write_field(state, &Field::BlockedTime { account }, encode_u64(blocked_until));
    }
}
