use super::StateDb;
use crate::genesis::Genesis;
use alloy_genesis::GenesisAccount;
use alloy_primitives::{Address, Bytes, B256, U256};
use reth_tracing::tracing::debug;
use std::collections::BTreeMap;

/// A single account held by [`MemoryState`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryAccount {
    /// Balance in wei
    pub balance: U256,
    /// Account nonce
    pub nonce: u64,
    /// Runtime bytecode (empty for EOAs)
    pub code: Bytes,
    /// Non-zero storage words; an absent key reads as zero
    pub storage: BTreeMap<B256, B256>,
}

/// In-memory [`StateDb`] backed by ordered maps.
///
/// Used by tooling to evaluate accessors against a genesis file without a running
/// node, and by tests as the reference backend.
#[derive(Debug, Clone, Default)]
pub struct MemoryState {
    accounts: BTreeMap<Address, MemoryAccount>,
}

impl MemoryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a state from the genesis allocation.
    pub fn from_genesis(genesis: &Genesis) -> Self {
        Self::from_alloc(&genesis.alloc)
    }

    /// Seed a state from a genesis alloc using only [`StateDb`] primitives, the way
    /// the host client commits genesis.
    pub fn from_alloc(alloc: &BTreeMap<Address, GenesisAccount>) -> Self {
        let mut state = Self::new();
        for (address, account) in alloc {
            state.create_account(*address);
            state.add_balance(*address, account.balance);
            if let Some(nonce) = account.nonce {
                state.set_nonce(*address, nonce);
            }
            if let Some(code) = &account.code {
                state.set_code(*address, code.clone());
            }
            if let Some(storage) = &account.storage {
                for (slot, value) in storage {
                    state.set_state(*address, *slot, *value);
                }
            }
        }
        debug!(target: "predeploy::state", accounts = state.accounts.len(), "seeded state from genesis alloc");
        state
    }

    /// Look up an account without creating it.
    pub fn account(&self, address: &Address) -> Option<&MemoryAccount> {
        self.accounts.get(address)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    fn account_mut(&mut self, address: Address) -> &mut MemoryAccount {
        self.accounts.entry(address).or_default()
    }
}

impl StateDb for MemoryState {
    fn get_state(&self, address: Address, slot: B256) -> B256 {
        self.accounts
            .get(&address)
            .and_then(|account| account.storage.get(&slot))
            .copied()
            .unwrap_or(B256::ZERO)
    }

    fn set_state(&mut self, address: Address, slot: B256, value: B256) {
        let storage = &mut self.account_mut(address).storage;
        // A zero word is indistinguishable from an empty slot.
        if value.is_zero() {
            storage.remove(&slot);
        } else {
            storage.insert(slot, value);
        }
    }

    fn get_code(&self, address: Address) -> Bytes {
        self.accounts
            .get(&address)
            .map(|account| account.code.clone())
            .unwrap_or_default()
    }

    fn set_code(&mut self, address: Address, code: Bytes) {
        self.account_mut(address).code = code;
    }

    fn get_nonce(&self, address: Address) -> u64 {
        self.accounts
            .get(&address)
            .map(|account| account.nonce)
            .unwrap_or(0)
    }

    fn set_nonce(&mut self, address: Address, nonce: u64) {
        self.account_mut(address).nonce = nonce;
    }

    fn get_balance(&self, address: Address) -> U256 {
        self.accounts
            .get(&address)
            .map(|account| account.balance)
            .unwrap_or(U256::ZERO)
    }

    fn add_balance(&mut self, address: Address, amount: U256) {
        let account = self.account_mut(address);
        account.balance = account.balance.saturating_add(amount);
    }

    fn sub_balance(&mut self, address: Address, amount: U256) {
        let account = self.account_mut(address);
        account.balance = account.balance.saturating_sub(amount);
    }

    fn create_account(&mut self, address: Address) {
        let balance = self.get_balance(address);
        self.accounts.insert(address, MemoryAccount { balance, ..Default::default() });
    }

    fn exist(&self, address: Address) -> bool {
        self.accounts.contains_key(&address)
    }
}
