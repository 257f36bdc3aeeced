/// Checksum length appended by the genesis transport encodings (last 4 bytes of SHA-256)
pub const CHECKSUM_LEN: usize = 4;
/// Largest payload CB58 will encode (16 KiB); larger genesis files must use hex
pub const MAX_CB58_ENCODE_SIZE: usize = 16 * 1024;
/// Chain ID of the Swimmer test network
pub const DEFAULT_CHAIN_ID: u64 = 99999;
