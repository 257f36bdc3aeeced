//! Serde functions for `U256` amounts written the way Go marshals a `big.Int`.
//!
//! A `big.Int` is a bare JSON number with no upper bound, so amounts such as
//! `100000000000000000000` do not fit any primitive. Parsed from:
//!   - JSON numbers of any width (exact text, via `arbitrary_precision`)
//!   - JSON strings, decimal or `0x`-prefixed hex
//!
//! Serialized as a JSON number when the value fits `u128`, otherwise as a hex string.

use alloy_primitives::U256;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

pub fn serialize<S>(value: &U256, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if serializer.is_human_readable() {
        match u128::try_from(value) {
            Ok(value) => serializer.serialize_u128(value),
            Err(_) => value.serialize(serializer),
        }
    } else {
        value.serialize(serializer)
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<U256, D::Error>
where
    D: Deserializer<'de>,
{
    if !deserializer.is_human_readable() {
        return U256::deserialize(deserializer);
    }
    match Value::deserialize(deserializer)? {
        Value::Number(num) => match num.as_u64() {
            Some(value) => Ok(U256::from(value)),
            None => num
                .to_string()
                .parse()
                .map_err(|e| de::Error::custom(format!("invalid integer {num}: {e}"))),
        },
        Value::String(raw) => {
            raw.parse().map_err(|e| de::Error::custom(format!("invalid integer {raw:?}: {e}")))
        }
        other => Err(de::Error::custom(format!("expected an integer, got {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Amount {
        #[serde(with = "super")]
        value: U256,
    }

    fn parse(json: &str) -> Result<U256, serde_json::Error> {
        serde_json::from_str::<Amount>(json).map(|a| a.value)
    }

    fn hundred_tokens() -> U256 {
        U256::from(100u64) * U256::from(10u64).pow(U256::from(18u64))
    }

    #[test]
    fn test_bare_number_wider_than_u64() {
        assert_eq!(parse(r#"{"value":100000000000000000000}"#).unwrap(), hundred_tokens());
    }

    #[test]
    fn test_small_number_and_strings() {
        assert_eq!(parse(r#"{"value":42}"#).unwrap(), U256::from(42));
        assert_eq!(parse(r#"{"value":"100000000000000000000"}"#).unwrap(), hundred_tokens());
        assert_eq!(parse(r#"{"value":"0x56bc75e2d63100000"}"#).unwrap(), hundred_tokens());
    }

    #[test]
    fn test_number_wider_than_u128() {
        let json = format!(r#"{{"value":{}}}"#, U256::MAX);
        assert_eq!(parse(&json).unwrap(), U256::MAX);
    }

    #[test]
    fn test_rejects_non_integers() {
        assert!(parse(r#"{"value":-1}"#).is_err());
        assert!(parse(r#"{"value":1.5}"#).is_err());
        assert!(parse(r#"{"value":"ten"}"#).is_err());
        assert!(parse(r#"{"value":true}"#).is_err());
    }

    #[test]
    fn test_serializes_as_number_when_it_fits() {
        let json = serde_json::to_string(&Amount { value: hundred_tokens() }).unwrap();
        assert_eq!(json, r#"{"value":100000000000000000000}"#);

        let json = serde_json::to_string(&Amount { value: U256::MAX }).unwrap();
        assert!(json.contains("\"0x"));
        assert_eq!(parse(&json).unwrap(), U256::MAX);
    }
}
