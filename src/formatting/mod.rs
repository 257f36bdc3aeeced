//! Checksummed byte encodings used to transport genesis bytes.
//!
//! Both encodings append the last 4 bytes of SHA-256(payload) before encoding:
//! - CB58: Base58 of `payload || checksum`
//! - Hex:  `0x` + hex of `payload || checksum`

use crate::constants::{CHECKSUM_LEN, MAX_CB58_ENCODE_SIZE};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur during checksummed encoding/decoding.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormattingError {
    /// Failed to decode the Base58 string.
    #[error("base58 decoding error: {0}")]
    Base58(String),

    /// Failed to decode the hex string.
    #[error("hex decoding error: {0}")]
    Hex(String),

    /// Hex input without the `0x` prefix.
    #[error("hex string is missing the 0x prefix")]
    MissingHexPrefix,

    /// The input is too short to contain a checksum.
    #[error("input string is smaller than the checksum size")]
    MissingChecksum,

    /// The checksum in the input does not match the computed checksum.
    #[error("invalid checksum")]
    BadChecksum,

    /// Payload is too large for CB58.
    #[error("byte slice length ({size}) > maximum for cb58 ({max})")]
    EncodeOverflow {
        /// Payload length
        size: usize,
        /// Maximum payload length
        max: usize,
    },

    /// Unrecognised encoding name.
    #[error("unknown encoding {0:?}, expected \"cb58\" or \"hex\"")]
    UnknownEncoding(String),
}

/// Transport encoding of checksummed bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    #[default]
    Cb58,
    Hex,
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cb58 => f.write_str("cb58"),
            Self::Hex => f.write_str("hex"),
        }
    }
}

impl FromStr for Encoding {
    type Err = FormattingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cb58" => Ok(Self::Cb58),
            "hex" => Ok(Self::Hex),
            _ => Err(FormattingError::UnknownEncoding(s.to_string())),
        }
    }
}

/// Last [`CHECKSUM_LEN`] bytes of SHA-256(`data`).
pub fn checksum(data: &[u8]) -> [u8; CHECKSUM_LEN] {
    let hash = Sha256::digest(data);
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&hash[hash.len() - CHECKSUM_LEN..]);
    out
}

/// Encode `bytes` with a trailing checksum.
///
/// CB58 refuses payloads larger than [`MAX_CB58_ENCODE_SIZE`]; use
/// [`Encoding::Hex`] for those.
pub fn encode_with_checksum(encoding: Encoding, bytes: &[u8]) -> Result<String, FormattingError> {
    if encoding == Encoding::Cb58 && bytes.len() > MAX_CB58_ENCODE_SIZE {
        return Err(FormattingError::EncodeOverflow {
            size: bytes.len(),
            max: MAX_CB58_ENCODE_SIZE,
        });
    }

    let mut checked = Vec::with_capacity(bytes.len() + CHECKSUM_LEN);
    checked.extend_from_slice(bytes);
    checked.extend_from_slice(&checksum(bytes));

    Ok(match encoding {
        Encoding::Cb58 => bs58::encode(checked).into_string(),
        Encoding::Hex => format!("0x{}", hex::encode(checked)),
    })
}

/// Decode a string produced by [`encode_with_checksum`], verifying its checksum.
///
/// The empty string decodes to an empty payload.
pub fn decode(encoding: Encoding, s: &str) -> Result<Vec<u8>, FormattingError> {
    if s.is_empty() {
        return Ok(Vec::new());
    }

    let decoded = match encoding {
        Encoding::Cb58 => bs58::decode(s)
            .into_vec()
            .map_err(|e| FormattingError::Base58(e.to_string()))?,
        Encoding::Hex => {
            let digits = s.strip_prefix("0x").ok_or(FormattingError::MissingHexPrefix)?;
            hex::decode(digits).map_err(|e| FormattingError::Hex(e.to_string()))?
        }
    };

    if decoded.len() < CHECKSUM_LEN {
        return Err(FormattingError::MissingChecksum);
    }

    let (raw_bytes, provided_checksum) = decoded.split_at(decoded.len() - CHECKSUM_LEN);
    if provided_checksum != checksum(raw_bytes) {
        return Err(FormattingError::BadChecksum);
    }

    Ok(raw_bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_is_sha256_suffix() {
        // SHA-256("") = e3b0c442...7852b855
        assert_eq!(checksum(b""), [0x78, 0x52, 0xb8, 0x55]);
        let full = Sha256::digest(b"test data");
        assert_eq!(checksum(b"test data"), full[28..32]);
    }

    #[test]
    fn test_known_cb58_encoding() {
        // Base58 of [0, 0, 0, 0] || 0x7852b855 keeps the leading zero bytes as '1's.
        let encoded = encode_with_checksum(Encoding::Cb58, &[0, 0, 0, 0]).unwrap();
        assert!(encoded.starts_with("1111"));
        assert_eq!(decode(Encoding::Cb58, &encoded).unwrap(), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_known_hex_encoding() {
        let encoded = encode_with_checksum(Encoding::Hex, &[]).unwrap();
        assert_eq!(encoded, "0x7852b855");
        assert!(decode(Encoding::Hex, &encoded).unwrap().is_empty());
    }

    #[test]
    fn test_encode_decode_both_encodings() {
        for encoding in [Encoding::Cb58, Encoding::Hex] {
            let payload = br#"{"config":{"chainId":99999}}"#;
            let encoded = encode_with_checksum(encoding, payload).unwrap();
            assert_eq!(decode(encoding, &encoded).unwrap(), payload.to_vec());
        }
    }

    #[test]
    fn test_decode_empty_string() {
        assert!(decode(Encoding::Cb58, "").unwrap().is_empty());
        assert!(decode(Encoding::Hex, "").unwrap().is_empty());
    }

    #[test]
    fn test_decode_invalid_base58() {
        // '0', 'O', 'I', 'l' are not valid Base58 characters
        let result = decode(Encoding::Cb58, "0OIl");
        assert!(matches!(result, Err(FormattingError::Base58(_))));
    }

    #[test]
    fn test_decode_hex_errors() {
        assert_eq!(decode(Encoding::Hex, "7852b855"), Err(FormattingError::MissingHexPrefix));
        assert!(matches!(decode(Encoding::Hex, "0xzz"), Err(FormattingError::Hex(_))));
        assert_eq!(decode(Encoding::Hex, "0x0102"), Err(FormattingError::MissingChecksum));
    }

    #[test]
    fn test_decode_too_short() {
        assert_eq!(decode(Encoding::Cb58, "1"), Err(FormattingError::MissingChecksum));
    }

    #[test]
    fn test_decode_bad_checksum() {
        let encoded = encode_with_checksum(Encoding::Cb58, &[1, 2, 3, 4]).unwrap();

        let mut raw = bs58::decode(&encoded).into_vec().unwrap();
        if let Some(last) = raw.last_mut() {
            *last ^= 0xff;
        }
        let corrupted = bs58::encode(raw).into_string();

        assert_eq!(decode(Encoding::Cb58, &corrupted), Err(FormattingError::BadChecksum));
    }

    #[test]
    fn test_truncated_input_rejected() {
        let encoded = encode_with_checksum(Encoding::Hex, b"genesis bytes").unwrap();
        let truncated = &encoded[..encoded.len() - 2];
        assert_eq!(decode(Encoding::Hex, truncated), Err(FormattingError::BadChecksum));
    }

    #[test]
    fn test_cb58_size_limit() {
        let at_limit = vec![7u8; MAX_CB58_ENCODE_SIZE];
        assert!(encode_with_checksum(Encoding::Cb58, &at_limit).is_ok());

        let over = vec![7u8; MAX_CB58_ENCODE_SIZE + 1];
        assert_eq!(
            encode_with_checksum(Encoding::Cb58, &over),
            Err(FormattingError::EncodeOverflow {
                size: MAX_CB58_ENCODE_SIZE + 1,
                max: MAX_CB58_ENCODE_SIZE
            })
        );
        let hex = encode_with_checksum(Encoding::Hex, &over).unwrap();
        assert_eq!(decode(Encoding::Hex, &hex).unwrap(), over);
    }

    #[test]
    fn test_encoding_names() {
        assert_eq!("cb58".parse::<Encoding>().unwrap(), Encoding::Cb58);
        assert_eq!("HEX".parse::<Encoding>().unwrap(), Encoding::Hex);
        assert_eq!(Encoding::Cb58.to_string(), "cb58");
        assert_eq!(Encoding::default(), Encoding::Cb58);
        assert!(matches!("base64".parse::<Encoding>(), Err(FormattingError::UnknownEncoding(_))));
        assert_eq!(serde_json::to_string(&Encoding::Hex).unwrap(), "\"hex\"");
    }
}
