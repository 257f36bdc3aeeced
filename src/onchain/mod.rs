//! On-chain Predeploy Accessors
//!
//! Reads and writes the Consensus and AccessControl predeploys' storage without
//! executing their bytecode. Slots are computed the way solc lays storage out:
//!
//!   value types  → fixed slot = declaration index
//!   mapping(K=>V) → keccak256(pad32(key) || base)
//!   nested        → the outer entry's slot is the base for the inner key
//!
//! Address and integer keys are left-padded, `bytes4` selectors right-padded.
//! Getting either direction wrong reads a different slot with no error, so the
//! golden vectors in the tests below pin every derivation.

pub mod helpers;
pub mod layout;
pub mod providers;
pub mod readers;
pub mod selectors;
mod state;

pub use helpers::{
    decode_address, decode_positive, decode_u256, decode_u64, encode_address, encode_bool,
    encode_u256, encode_u64, left_pad_32, mapping_slot, nested_mapping_slot, right_pad_32,
    slot_from_index, MappingKey,
};
pub use layout::{Field, SlotLocation};
pub use providers::{MemoryAccount, MemoryState};
pub use selectors::function_selector;
pub use state::StateDb;
