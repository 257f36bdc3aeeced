use super::types::Genesis;
use crate::errors::GenesisError;
use crate::formatting::{decode, encode_with_checksum, Encoding};
use reth_tracing::tracing::debug;
use serde::{Deserialize, Serialize};

/// Encoded genesis together with the encoding that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildGenesisReply {
    pub genesis_bytes: String,
    pub encoding: Encoding,
}

/// Serialize `genesis` to JSON and encode it with a checksum for transport.
pub fn build_genesis(
    genesis: &Genesis,
    encoding: Encoding,
) -> Result<BuildGenesisReply, GenesisError> {
    let bytes = serde_json::to_vec(genesis)?;
    let genesis_bytes = encode_with_checksum(encoding, &bytes)?;
    debug!(
        target: "predeploy::genesis",
        %encoding,
        json_len = bytes.len(),
        encoded_len = genesis_bytes.len(),
        alloc = genesis.alloc.len(),
        "built genesis"
    );
    Ok(BuildGenesisReply { genesis_bytes, encoding })
}

/// Reverse [`build_genesis`]: verify the checksum, decode, and parse the JSON.
pub fn decode_genesis(genesis_bytes: &str, encoding: Encoding) -> Result<Genesis, GenesisError> {
    let bytes = decode(encoding, genesis_bytes)?;
    let genesis: Genesis = serde_json::from_slice(&bytes)?;
    debug!(
        target: "predeploy::genesis",
        %encoding,
        json_len = bytes.len(),
        chain_id = genesis.config.chain_id,
        "decoded genesis"
    );
    Ok(genesis)
}
