//! Strict serde helpers for the hex encodings used by call requests.
//!
//! Quantities follow the Ethereum JSON-RPC "quantity" format: `0x`-prefixed hex, no leading
//! zeros, `0x0` for zero. Byte strings are `0x`-prefixed hex with an even number of digits.
//!
//! Encoding is delegated to the `alloy-primitives` types. Decoding is stricter than their
//! default `Deserialize` impls: decimal strings, JSON numbers, missing prefixes and padded
//! quantities are all rejected.

use alloy_primitives::{Address, Bytes, U256, hex};

/// Errors produced when parsing a hex string from the wire.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HexError {
    #[error("hex string without 0x prefix")]
    MissingPrefix,
    #[error("hex string \"0x\"")]
    EmptyNumber,
    #[error("invalid hex string")]
    InvalidDigit,
    #[error("hex number with leading zero digits")]
    LeadingZero,
    #[error("hex number > {0} bits")]
    Overflow(usize),
    #[error("hex string of odd length")]
    OddLength,
    #[error("hex string has length {got}, want {expected}")]
    InvalidLength { expected: usize, got: usize },
}

fn strip_prefix(s: &str) -> Result<&str, HexError> {
    s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).ok_or(HexError::MissingPrefix)
}

/// Validates a quantity string and returns its digits.
fn quantity_digits(s: &str, bits: usize) -> Result<&str, HexError> {
    let digits = strip_prefix(s)?;
    if digits.is_empty() {
        return Err(HexError::EmptyNumber);
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(HexError::InvalidDigit);
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return Err(HexError::LeadingZero);
    }
    if digits.len() > bits / 4 {
        return Err(HexError::Overflow(bits));
    }
    Ok(digits)
}

/// Parses a `u64` quantity.
pub fn parse_u64(s: &str) -> Result<u64, HexError> {
    let digits = quantity_digits(s, 64)?;
    u64::from_str_radix(digits, 16).map_err(|_| HexError::InvalidDigit)
}

/// Parses a 256-bit quantity.
pub fn parse_u256(s: &str) -> Result<U256, HexError> {
    let digits = quantity_digits(s, 256)?;
    U256::from_str_radix(digits, 16).map_err(|_| HexError::InvalidDigit)
}

/// Parses a `0x`-prefixed byte string.
pub fn parse_bytes(s: &str) -> Result<Bytes, HexError> {
    let digits = strip_prefix(s)?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(HexError::InvalidDigit);
    }
    if digits.len() % 2 != 0 {
        return Err(HexError::OddLength);
    }
    hex::decode(digits).map(Bytes::from).map_err(|_| HexError::InvalidDigit)
}

/// Parses a `0x`-prefixed 20 byte address.
pub fn parse_address(s: &str) -> Result<Address, HexError> {
    let bytes = parse_bytes(s)?;
    if bytes.len() != 20 {
        return Err(HexError::InvalidLength { expected: 40, got: bytes.len() * 2 });
    }
    Ok(Address::from_slice(&bytes))
}

/// Serde functions for optional addresses.
pub mod address_opt {
    use alloy_primitives::Address;
    use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error};

    pub fn serialize<S: Serializer>(
        value: &Option<Address>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        value.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Address>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|s| super::parse_address(&s).map_err(D::Error::custom))
            .transpose()
    }
}

/// Serde functions for optional `u64` quantities.
pub mod u64_opt {
    use alloy_primitives::U64;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(
        value: &Option<u64>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => serializer.serialize_some(&U64::from(*value)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<u64>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|s| super::parse_u64(&s).map_err(D::Error::custom))
            .transpose()
    }
}

/// Serde functions for optional 256-bit quantities.
pub mod u256_opt {
    use alloy_primitives::U256;
    use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error};

    pub fn serialize<S: Serializer>(
        value: &Option<U256>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        value.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<U256>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|s| super::parse_u256(&s).map_err(D::Error::custom))
            .transpose()
    }
}

/// Serde functions for optional byte strings.
pub mod bytes_opt {
    use alloy_primitives::Bytes;
    use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error};

    pub fn serialize<S: Serializer>(
        value: &Option<Bytes>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        value.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Bytes>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|s| super::parse_bytes(&s).map_err(D::Error::custom))
            .transpose()
    }
}
