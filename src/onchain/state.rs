use alloy_primitives::{Address, Bytes, B256, U256};

/// Account and storage access supplied by the host chain client.
///
/// Accessors receive it as a parameter on every call and never store it.
/// Reads of a missing account or an unwritten slot return the zero value,
/// the same as an `SLOAD` inside the EVM.
pub trait StateDb {
    /// Read a storage word. Returns `B256::ZERO` if the account or slot doesn't exist.
    fn get_state(&self, address: Address, slot: B256) -> B256;
    /// Write a storage word, creating the account if needed.
    fn set_state(&mut self, address: Address, slot: B256, value: B256);

    fn get_code(&self, address: Address) -> Bytes;
    fn set_code(&mut self, address: Address, code: Bytes);

    fn get_nonce(&self, address: Address) -> u64;
    fn set_nonce(&mut self, address: Address, nonce: u64);

    fn get_balance(&self, address: Address) -> U256;
    fn add_balance(&mut self, address: Address, amount: U256);
    /// Subtract from a balance, saturating at zero.
    fn sub_balance(&mut self, address: Address, amount: U256);

    /// Create a fresh account, carrying over any balance it already held.
    fn create_account(&mut self, address: Address);
    fn exist(&self, address: Address) -> bool;
}
