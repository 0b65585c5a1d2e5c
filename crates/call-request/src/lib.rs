//! # callreq-types
//!
//! The call request object taken by `eth_call`, `eth_estimateGas` and similar methods, with a
//! JSON codec that accepts the call data under both `data` and the legacy `input` key and only
//! ever writes `data`.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
extern crate tracing;

mod codec;

mod error;
pub use error::CallRequestError;

mod request;
pub use request::{CallInput, CallRequest};

pub mod serde_helpers;

// re-exports for convenience
pub use alloy_eips::eip2930::{AccessList, AccessListItem};
pub use alloy_primitives::{Address, B256, Bytes, U256};
