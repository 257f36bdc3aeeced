use alloy_genesis::GenesisAccount;
use alloy_primitives::{Address, B256, U256};
use std::collections::BTreeMap;

use super::types::SwimmerConfig;
use crate::onchain::{encode_address, encode_u64};
use crate::predeploy::PredeployContract;

/// Returns the predeploy allocs for genesis.
///
/// Both proxies run the transparent proxy bytecode with the EIP-1967 admin and
/// implementation slots pre-populated. The Consensus proxy additionally carries
/// its initial gas limit, gas price and reward pool, at the same slots the
/// accessors read.
///
/// Storage layout reference (proxy account):
///   - EIP-1967 admin slot: proxyAdmin
///   - EIP-1967 implementation slot: default logic contract
///   - slot 1..3 (Consensus only): gasLimit, gasPrice, rewardPool
pub fn predeploy_alloc(
    predeploy: &PredeployContract,
    config: &SwimmerConfig,
) -> BTreeMap<Address, GenesisAccount> {
    let mut contracts = BTreeMap::new();

    // --- Consensus ---
    {
        let mut storage = proxy_storage(predeploy, config.proxy_admin);
        storage.insert(predeploy.gas_limit_storage_slot, encode_u64(config.gas_limit));
        storage.insert(predeploy.gas_price_storage_slot, encode_u64(config.gas_price));
        storage.insert(predeploy.reward_pool_storage_slot, encode_address(config.pool_reward));

        contracts.insert(
            predeploy.contract_consensus_address,
            GenesisAccount {
                balance: U256::ZERO,
                nonce: Some(1),
                code: Some(predeploy.transparent_upgradeable_proxy_bytecode.clone()),
                storage: Some(storage),
                private_key: None,
            },
        );
    }

    // --- AccessControl ---
    // Whitelists and blocked times start empty.
    contracts.insert(
        predeploy.contract_access_control_address,
        GenesisAccount {
            balance: U256::ZERO,
            nonce: Some(1),
            code: Some(predeploy.transparent_upgradeable_proxy_bytecode.clone()),
            storage: Some(proxy_storage(predeploy, config.proxy_admin)),
            private_key: None,
        },
    );

    // --- Default logic ---
    contracts.insert(
        predeploy.contract_default_logic_address,
        GenesisAccount {
            balance: U256::ZERO,
            nonce: Some(1),
            code: Some(predeploy.default_logic_bytecode.clone()),
            storage: None,
            private_key: None,
        },
    );

    // --- Initial native supply ---
    // Merged so a predeploy receiving the supply keeps its code and storage.
    contracts.entry(config.init_native_account).or_insert_with(GenesisAccount::default).balance =
        config.init_native_amount;

    contracts
}

/// EIP-1967 admin + implementation slots shared by both proxies.
fn proxy_storage(predeploy: &PredeployContract, admin: Address) -> BTreeMap<B256, B256> {
    let mut storage = BTreeMap::new();
    storage.insert(predeploy.admin_proxy_storage_slot, encode_address(admin));
    storage.insert(
        predeploy.logic_address_storage_slot,
        encode_address(predeploy.contract_default_logic_address),
    );
    storage
}
