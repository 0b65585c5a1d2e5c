use crate::CallRequestError;
use alloy_eips::eip2930::AccessList;
use alloy_primitives::{Address, Bytes, U256};

/// The payload of a call request.
///
/// Peers send the call data under either the canonical `data` key or the legacy `input` key,
/// and sometimes under both. Both slots are kept so a conflicting pair can be detected when the
/// request is encoded; readers should go through [`CallInput::payload`] or
/// [`CallInput::try_into_unique`] rather than the raw slots.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CallInput {
    /// Payload under the canonical `data` name.
    pub data: Option<Bytes>,
    /// Payload under the legacy `input` name.
    pub input: Option<Bytes>,
}

impl CallInput {
    /// Creates a payload under the canonical `data` name.
    pub fn new(data: Bytes) -> Self {
        Self { data: Some(data), input: None }
    }

    /// Creates a payload under the legacy `input` name.
    pub fn legacy(input: Bytes) -> Self {
        Self { data: None, input: Some(input) }
    }

    /// Creates a payload with both slots set.
    pub fn both(data: Bytes, input: Bytes) -> Self {
        Self { data: Some(data), input: Some(input) }
    }

    /// Returns `true` if neither slot is set.
    pub const fn is_empty(&self) -> bool {
        self.data.is_none() && self.input.is_none()
    }

    /// Returns the payload, preferring the canonical `data` slot.
    pub fn payload(&self) -> Option<&Bytes> {
        self.data.as_ref().or(self.input.as_ref())
    }

    /// Returns the single payload these slots describe.
    ///
    /// Fails with [`CallRequestError::EncodeConflict`] if both slots are set and differ.
    pub fn unique(&self) -> Result<Option<&Bytes>, CallRequestError> {
        if let (Some(data), Some(input)) = (&self.data, &self.input)
            && data != input
        {
            return Err(CallRequestError::EncodeConflict);
        }
        Ok(self.payload())
    }

    /// Consumes the slots and returns the single payload they describe.
    ///
    /// See [`CallInput::unique`].
    pub fn try_into_unique(self) -> Result<Option<Bytes>, CallRequestError> {
        self.unique()?;
        Ok(self.data.or(self.input))
    }

    /// Moves a legacy `input` payload into the canonical `data` slot.
    ///
    /// Leaves `self` untouched and fails if both slots are set and differ.
    pub fn normalize(&mut self) -> Result<(), CallRequestError> {
        self.unique()?;
        if let Some(input) = self.input.take()
            && self.data.is_none()
        {
            trace!(target: "callreq::codec", len = input.len(), "promoting legacy `input`");
            self.data = Some(input);
        }
        Ok(())
    }

    /// Replaces the payload with `bytes` under the canonical name.
    pub fn set(&mut self, bytes: Bytes) {
        self.data = Some(bytes);
        self.input = None;
    }
}

impl From<Bytes> for CallInput {
    fn from(data: Bytes) -> Self {
        Self::new(data)
    }
}

impl From<Option<Bytes>> for CallInput {
    fn from(data: Option<Bytes>) -> Self {
        Self { data, input: None }
    }
}

/// Call request object used by `eth_call`, `eth_estimateGas` and friends.
///
/// Every field is optional and an unset field is distinct from one set to zero. The JSON
/// encoding is described in [`CallRequest::encode`] and [`CallRequest::merge_json`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CallRequest {
    /// Sender of the call.
    pub from: Option<Address>,
    /// Recipient of the call, `None` for contract creation.
    pub to: Option<Address>,
    /// Gas limit.
    pub gas: Option<u64>,
    /// Gas price for the legacy fee model.
    pub gas_price: Option<U256>,
    /// EIP-1559 max fee per gas.
    pub max_fee_per_gas: Option<U256>,
    /// EIP-1559 max priority fee per gas.
    pub max_priority_fee_per_gas: Option<U256>,
    /// Value transferred, in wei.
    pub value: Option<U256>,
    /// Sender nonce.
    pub nonce: Option<u64>,
    /// Call data.
    pub input: CallInput,
    /// EIP-2930 access list.
    pub access_list: Option<AccessList>,
    /// Chain id.
    pub chain_id: Option<U256>,
}

impl CallRequest {
    /// Sets the sender.
    pub fn with_from(mut self, from: Address) -> Self {
        self.from = Some(from);
        self
    }

    /// Sets the recipient.
    pub fn with_to(mut self, to: Address) -> Self {
        self.to = Some(to);
        self
    }

    /// Sets the gas limit.
    pub fn with_gas(mut self, gas: u64) -> Self {
        self.gas = Some(gas);
        self
    }

    /// Sets the legacy gas price.
    pub fn with_gas_price(mut self, gas_price: U256) -> Self {
        self.gas_price = Some(gas_price);
        self
    }

    /// Sets the EIP-1559 max fee per gas.
    pub fn with_max_fee_per_gas(mut self, max_fee_per_gas: U256) -> Self {
        self.max_fee_per_gas = Some(max_fee_per_gas);
        self
    }

    /// Sets the EIP-1559 max priority fee per gas.
    pub fn with_max_priority_fee_per_gas(mut self, max_priority_fee_per_gas: U256) -> Self {
        self.max_priority_fee_per_gas = Some(max_priority_fee_per_gas);
        self
    }

    /// Sets the value.
    pub fn with_value(mut self, value: U256) -> Self {
        self.value = Some(value);
        self
    }

    /// Sets the nonce.
    pub fn with_nonce(mut self, nonce: u64) -> Self {
        self.nonce = Some(nonce);
        self
    }

    /// Sets the canonical `data` payload, leaving a legacy `input` payload in place.
    pub fn with_data(mut self, data: impl Into<Bytes>) -> Self {
        self.input.data = Some(data.into());
        self
    }

    /// Sets the legacy `input` payload, leaving a canonical `data` payload in place.
    pub fn with_legacy_input(mut self, input: impl Into<Bytes>) -> Self {
        self.input.input = Some(input.into());
        self
    }

    /// Sets the access list.
    pub fn with_access_list(mut self, access_list: AccessList) -> Self {
        self.access_list = Some(access_list);
        self
    }

    /// Sets the chain id.
    pub fn with_chain_id(mut self, chain_id: U256) -> Self {
        self.chain_id = Some(chain_id);
        self
    }

    /// Returns `true` if this call creates a contract, i.e. it has no recipient.
    pub const fn is_create(&self) -> bool {
        self.to.is_none()
    }

    /// Returns the call data, preferring the canonical `data` slot.
    pub fn payload(&self) -> Option<&Bytes> {
        self.input.payload()
    }

    /// Moves a legacy `input` payload into the canonical `data` slot.
    ///
    /// See [`CallInput::normalize`].
    pub fn normalize(&mut self) -> Result<(), CallRequestError> {
        self.input.normalize()
    }

    /// Merges the set fields of `other` into `self`.
    ///
    /// Fields unset in `other` are left alone. The payload follows the decoding order: `other`'s
    /// `data` is applied first, then its `input`, so `input` wins when both are set.
    pub fn merge(&mut self, other: Self) {
        let Self {
            from,
            to,
            gas,
            gas_price,
            max_fee_per_gas,
            max_priority_fee_per_gas,
            value,
            nonce,
            input: CallInput { data, input },
            access_list,
            chain_id,
        } = other;

        merge_field(&mut self.from, from);
        merge_field(&mut self.to, to);
        merge_field(&mut self.gas, gas);
        merge_field(&mut self.gas_price, gas_price);
        merge_field(&mut self.max_fee_per_gas, max_fee_per_gas);
        merge_field(&mut self.max_priority_fee_per_gas, max_priority_fee_per_gas);
        merge_field(&mut self.value, value);
        merge_field(&mut self.nonce, nonce);
        if let Some(data) = data {
            self.input.set(data);
        }
        if let Some(input) = input {
            self.input.set(input);
        }
        merge_field(&mut self.access_list, access_list);
        merge_field(&mut self.chain_id, chain_id);
    }
}

#[inline]
fn merge_field<T>(target: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *target = value;
    }
}
