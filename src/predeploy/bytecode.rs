use alloy_primitives::hex;

/// Runtime code placed at both predeploy proxies.
///
/// Forwards every call via `delegatecall` to the implementation stored at the
/// EIP-1967 implementation slot and bubbles up return data or the revert reason.
pub const TRANSPARENT_UPGRADEABLE_PROXY_BYTECODE: &[u8] = &hex!(
    "36"             // calldatasize
    "3d" "3d"        // returndatasize x2 (zero)
    "37"             // calldatacopy
    "3d" "3d" "3d"   // zero x3
    "36"             // calldatasize
    "3d"             // zero
    "7f"             // push32 (EIP-1967 implementation slot)
    "360894a13ba1a3210667c828492db98dca3e2076cc3735a920a3ca505d382bbc"
    "54"             // sload
    "5a"             // gas
    "f4"             // delegatecall
    "3d"             // returndatasize
    "82"             // dup3
    "80"             // dup1
    "3e"             // returndatacopy
    "90"             // swap1
    "3d"             // returndatasize
    "91"             // swap2
    "60" "38"        // push1 0x38 (RETURN_DEST)
    "57"             // jumpi
    "fd"             // revert
    "5b"             // jumpdest (RETURN_DEST = 0x38)
    "f3"             // return
);

/// Runtime code of the default logic contract: accepts any call and stops.
pub const DEFAULT_LOGIC_BYTECODE: &[u8] = &hex!("00");
