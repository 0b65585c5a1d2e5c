//! JSON encoding of [`CallRequest`].
//!
//! The record is never (de)serialized field by field. Encoding goes through `CallRequestOut`,
//! which only knows the canonical `data` key. Decoding goes through `CallRequestIn`, which also
//! accepts the legacy `input` key, and is merged into the target only after the whole document
//! parsed.

use crate::{
    CallInput, CallRequest, CallRequestError,
    serde_helpers::{address_opt, bytes_opt, u64_opt, u256_opt},
};
use alloy_eips::eip2930::AccessList;
use alloy_primitives::{Address, Bytes, U256};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};
use serde_json::{Map, Value};

/// Outbound wire shape.
///
/// Unset fields are written as `null`, except `accessList` and `chainId` which are left out.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CallRequestOut<'a> {
    from: Option<Address>,
    to: Option<Address>,
    #[serde(with = "u64_opt")]
    gas: Option<u64>,
    #[serde(with = "u256_opt")]
    gas_price: Option<U256>,
    #[serde(with = "u256_opt")]
    max_fee_per_gas: Option<U256>,
    #[serde(with = "u256_opt")]
    max_priority_fee_per_gas: Option<U256>,
    #[serde(with = "u256_opt")]
    value: Option<U256>,
    #[serde(with = "u64_opt")]
    nonce: Option<u64>,
    #[serde(with = "bytes_opt")]
    data: Option<Bytes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    access_list: Option<&'a AccessList>,
    #[serde(skip_serializing_if = "Option::is_none", with = "u256_opt")]
    chain_id: Option<U256>,
}

/// Inbound wire shape. `input` is the legacy spelling of `data`.
#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CallRequestIn {
    #[serde(default, with = "address_opt")]
    from: Option<Address>,
    #[serde(default, with = "address_opt")]
    to: Option<Address>,
    #[serde(default, with = "u64_opt")]
    gas: Option<u64>,
    #[serde(default, with = "u256_opt")]
    gas_price: Option<U256>,
    #[serde(default, with = "u256_opt")]
    max_fee_per_gas: Option<U256>,
    #[serde(default, with = "u256_opt")]
    max_priority_fee_per_gas: Option<U256>,
    #[serde(default, with = "u256_opt")]
    value: Option<U256>,
    #[serde(default, with = "u64_opt")]
    nonce: Option<u64>,
    #[serde(default, with = "bytes_opt")]
    data: Option<Bytes>,
    #[serde(default, with = "bytes_opt")]
    input: Option<Bytes>,
    #[serde(default)]
    access_list: Option<AccessList>,
    #[serde(default, with = "u256_opt")]
    chain_id: Option<U256>,
}

/// Keys understood by [`CallRequestIn`].
const KEYS: &[&str] = &[
    "from",
    "to",
    "gas",
    "gasPrice",
    "maxFeePerGas",
    "maxPriorityFeePerGas",
    "value",
    "nonce",
    "data",
    "input",
    "accessList",
    "chainId",
];

/// Renames keys that match a known key up to ASCII case (`chainID`, `GasPrice`, ...) onto the
/// canonical spelling, and drops unknown keys.
///
/// A key spelled exactly right wins over any differently cased variant of it.
fn fold_keys(map: Map<String, Value>) -> Map<String, Value> {
    let mut folded = Map::new();
    let mut inexact = Vec::new();
    for (key, value) in map {
        if KEYS.contains(&key.as_str()) {
            folded.insert(key, value);
        } else if let Some(known) = KEYS.iter().find(|known| known.eq_ignore_ascii_case(&key)) {
            trace!(target: "callreq::codec", %key, canonical = *known, "folding key case");
            inexact.push((*known, value));
        }
    }
    for (known, value) in inexact {
        if !folded.contains_key(known) {
            folded.insert(known.to_owned(), value);
        }
    }
    folded
}

impl CallRequestIn {
    /// Parses a JSON object. A top-level `null` is treated as an empty object.
    fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        match Option::<Map<String, Value>>::deserialize(value)? {
            Some(map) => Self::deserialize(Value::Object(fold_keys(map))),
            None => Ok(Self::default()),
        }
    }

    fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        Self::from_value(serde_json::from_slice(bytes)?)
    }

    /// Converts into a record holding only the fields present on the wire.
    fn into_request(self) -> CallRequest {
        CallRequest {
            from: self.from,
            to: self.to,
            gas: self.gas,
            gas_price: self.gas_price,
            max_fee_per_gas: self.max_fee_per_gas,
            max_priority_fee_per_gas: self.max_priority_fee_per_gas,
            value: self.value,
            nonce: self.nonce,
            input: CallInput { data: self.data, input: self.input },
            access_list: self.access_list,
            chain_id: self.chain_id,
        }
    }
}

impl CallRequest {
    fn to_wire(&self) -> Result<CallRequestOut<'_>, CallRequestError> {
        let data = self.input.unique()?.cloned();
        if self.input.data.is_none() && data.is_some() {
            trace!(target: "callreq::codec", "encoding legacy `input` as `data`");
        }
        Ok(CallRequestOut {
            from: self.from,
            to: self.to,
            gas: self.gas,
            gas_price: self.gas_price,
            max_fee_per_gas: self.max_fee_per_gas,
            max_priority_fee_per_gas: self.max_priority_fee_per_gas,
            value: self.value,
            nonce: self.nonce,
            data,
            access_list: self.access_list.as_ref(),
            chain_id: self.chain_id,
        })
    }

    /// Encodes the request as a JSON object.
    ///
    /// The payload is always written as `data`; a legacy `input` payload is moved there first.
    /// `accessList` and `chainId` are omitted when unset, every other unset field is written as
    /// `null`.
    ///
    /// Fails with [`CallRequestError::EncodeConflict`] if `data` and `input` are both set and
    /// differ.
    pub fn encode(&self) -> Result<Vec<u8>, CallRequestError> {
        serde_json::to_vec(&self.to_wire()?).map_err(CallRequestError::Encode)
    }

    /// Encodes the request as a [`serde_json::Value`]. See [`CallRequest::encode`].
    pub fn to_json_value(&self) -> Result<Value, CallRequestError> {
        serde_json::to_value(self.to_wire()?).map_err(CallRequestError::Encode)
    }

    /// Decodes a request from a JSON object.
    pub fn decode(bytes: &[u8]) -> Result<Self, CallRequestError> {
        let mut request = Self::default();
        request.merge_json(bytes)?;
        Ok(request)
    }

    /// Decodes a JSON object and merges it into `self`.
    ///
    /// Every key present with a non-null value overwrites the matching field; absent and `null`
    /// keys leave the field alone, unknown keys are ignored. Keys are matched ignoring ASCII case,
    /// preferring the exact spelling when both are present. `data` and `input` both target the
    /// payload, and `input` is applied last, so it wins when both are sent.
    ///
    /// On [`CallRequestError::MalformedWire`] `self` is left unmodified.
    pub fn merge_json(&mut self, bytes: &[u8]) -> Result<(), CallRequestError> {
        let wire = CallRequestIn::from_slice(bytes)?;
        self.merge_wire(wire);
        Ok(())
    }

    /// Same as [`CallRequest::merge_json`], for an already parsed JSON value.
    pub fn merge_json_value(&mut self, value: Value) -> Result<(), CallRequestError> {
        let wire = CallRequestIn::from_value(value)?;
        self.merge_wire(wire);
        Ok(())
    }

    fn merge_wire(&mut self, wire: CallRequestIn) {
        if wire.data.is_some() && wire.input.is_some() {
            debug!(target: "callreq::codec", "both `data` and `input` present, using `input`");
        }
        self.merge(wire.into_request());
    }
}

impl Serialize for CallRequest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_wire().map_err(<S::Error as ser::Error>::custom)?.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CallRequest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let wire = CallRequestIn::from_value(value).map_err(<D::Error as de::Error>::custom)?;
        let mut request = Self::default();
        request.merge_wire(wire);
        Ok(request)
    }
}
