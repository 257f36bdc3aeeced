use alloy_primitives::{Address, Keccak256, B256, U256};

/// Left-pad `bytes` with zeros to 32 bytes (value types: address, uintN).
///
/// Input that is already 32 bytes or longer is returned unchanged.
pub fn left_pad_32(bytes: &[u8]) -> Vec<u8> {
    if bytes.len() >= 32 {
        return bytes.to_vec();
    }
    let mut padded = vec![0u8; 32];
    padded[32 - bytes.len()..].copy_from_slice(bytes);
    padded
}

/// Right-pad `bytes` with zeros to 32 bytes (fixed-size byte arrays: bytes4, bytes20).
///
/// Input that is already 32 bytes or longer is returned unchanged.
pub fn right_pad_32(bytes: &[u8]) -> Vec<u8> {
    if bytes.len() >= 32 {
        return bytes.to_vec();
    }
    let mut padded = vec![0u8; 32];
    padded[..bytes.len()].copy_from_slice(bytes);
    padded
}

/// Compute the storage slot of a Solidity mapping entry.
///
/// For `m[key]` with `m` at `base`:
///   slot = keccak256(paddedKey || base)
pub fn mapping_slot(padded_key: &[u8], base: B256) -> B256 {
    let mut hasher = Keccak256::new();
    hasher.update(padded_key);
    hasher.update(base.as_slice());
    hasher.finalize()
}

/// A mapping key together with the padding rule Solidity applies to its type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingKey {
    /// `address` key, left-padded.
    Address(Address),
    /// `bytes4` key (function selector), right-padded.
    Selector([u8; 4]),
    /// Any other fixed-size byte array key, right-padded.
    FixedBytes(Vec<u8>),
}

impl MappingKey {
    /// Key for a `bytes4` mapping. Anything that is not exactly 4 bytes is kept
    /// as raw fixed bytes so it is still hashed unchanged.
    pub fn selector(bytes: &[u8]) -> Self {
        match <[u8; 4]>::try_from(bytes) {
            Ok(selector) => Self::Selector(selector),
            Err(_) => Self::FixedBytes(bytes.to_vec()),
        }
    }

    /// Key bytes as they enter the hash.
    pub fn padded(&self) -> Vec<u8> {
        match self {
            Self::Address(addr) => left_pad_32(addr.as_slice()),
            Self::Selector(selector) => right_pad_32(selector),
            Self::FixedBytes(bytes) => right_pad_32(bytes),
        }
    }
}

/// Compute the slot of a (possibly nested) mapping entry.
///
/// For `m[k0][k1]` with `m` at `base`:
///   s0   = keccak256(pad(k0) || base)
///   slot = keccak256(pad(k1) || s0)
pub fn nested_mapping_slot(base: B256, keys: &[MappingKey]) -> B256 {
    keys.iter()
        .fold(base, |slot, key| mapping_slot(&key.padded(), slot))
}

/// Convert a declaration index into its storage key.
pub fn slot_from_index(index: U256) -> B256 {
    B256::from(index.to_be_bytes::<32>())
}

/// Decode an unsigned integer from a storage word.
pub fn decode_u256(value: B256) -> U256 {
    U256::from_be_bytes(value.0)
}

/// Decode a u64 from a storage word, keeping only the low 64 bits.
pub fn decode_u64(value: B256) -> u64 {
    U256::from_be_bytes(value.0).as_limbs()[0]
}

/// Decode an address from a storage word (low 20 bytes).
pub fn decode_address(value: B256) -> Address {
    Address::from_slice(&value[12..32])
}

/// True iff the word, read as an unsigned integer, is strictly positive.
pub fn decode_positive(value: B256) -> bool {
    !value.is_zero()
}

/// Encode an unsigned integer into a storage word.
pub fn encode_u256(value: U256) -> B256 {
    B256::from(value.to_be_bytes::<32>())
}

/// Encode a u64 value into a storage word.
pub fn encode_u64(value: u64) -> B256 {
    B256::from(U256::from(value).to_be_bytes::<32>())
}

/// Encode an address into a storage word (left-padded).
pub fn encode_address(addr: Address) -> B256 {
    let mut bytes = [0u8; 32];
    bytes[12..32].copy_from_slice(addr.as_slice());
    B256::from(bytes)
}

/// Encode a flag the way the whitelist contracts store it: 1 or 0.
pub fn encode_bool(value: bool) -> B256 {
    encode_u64(value as u64)
}
