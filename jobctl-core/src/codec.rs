//! Encoding and decoding of admin protocol messages
//!
//! One message is one JSON object as UTF-8 text. There is no length prefix
//! and no newline terminator; each side assumes a single read yields a
//! complete message. The codec therefore works on whole byte slices, never
//! on partial frames.

use crate::error::{Error, Result};
use crate::types::{RpcRequest, RpcResponse};

/// Encode a request envelope to UTF-8 JSON bytes ready for transmission
///
/// Encoding is deterministic for a given request: struct fields serialize
/// in declaration order and `serde_json` applies only standard JSON string
/// escaping.
///
/// # Examples
///
/// ```rust
/// use jobctl_core::{codec, RpcRequest};
/// use serde_json::json;
///
/// let request = RpcRequest::new("stat", json!([]), "0");
/// let bytes = codec::encode_request(&request).unwrap();
/// assert_eq!(
///     std::str::from_utf8(&bytes).unwrap(),
///     r#"{"jsonrpc":"2.0","method":"stat","params":[],"id":"0"}"#
/// );
/// ```
pub fn encode_request(request: &RpcRequest) -> Result<Vec<u8>> {
    let text =
        serde_json::to_string(request).map_err(|e| Error::Serialization(e.to_string()))?;
    Ok(text.into_bytes())
}

/// Decode one received message into a response
///
/// Fails with [`Error::Decode`] when the bytes are not valid UTF-8 or not a
/// JSON object. Callers treat that as a per-message problem and keep the
/// receive loop running.
pub fn decode_response(data: &[u8]) -> Result<RpcResponse> {
    let text = std::str::from_utf8(data).map_err(|e| Error::Decode(e.to_string()))?;
    serde_json::from_str(text).map_err(|e| Error::Decode(e.to_string()))
}
