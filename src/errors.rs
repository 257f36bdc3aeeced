use crate::formatting::FormattingError;
use thiserror::Error;

/// Errors raised while building or decoding a genesis.
#[derive(Debug, Error)]
pub enum GenesisError {
    /// Transport encoding failed or the checksum did not match
    #[error("genesis encoding: {0}")]
    Formatting(#[from] FormattingError),

    /// Genesis JSON could not be serialized or deserialized
    #[error("genesis json: {0}")]
    Json(#[from] serde_json::Error),

    /// Genesis file could not be read or written
    #[error("genesis file: {0}")]
    Io(#[from] std::io::Error),
}
