//! Message types for the master admin protocol
//!
//! The wire format is JSON-RPC-shaped but deliberately narrower than the
//! full JSON-RPC 2.0 specification:
//!
//! - Every outbound message is a request carrying an `id`; the client never
//!   sends notifications or batches.
//! - Request ids are always the decimal string form of a per-connection
//!   counter (`"0"`, `"1"`, ...). Ids are unique for the lifetime of the
//!   connection and are never reused.
//! - Inbound messages are free-form objects; the client consults only the
//!   `result` and `error` fields and ignores everything else, including any
//!   echoed `id`. Replies are matched to the operator by arrival order on
//!   the single shared stream, not by id.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Protocol version tag carried by every outbound request
pub const JSONRPC_VERSION: &str = "2.0";

/// Outbound request envelope
///
/// Field order matters: `serde_json` serializes struct fields in declaration
/// order, which keeps the encoded text deterministic for a given request.
///
/// # Examples
///
/// ```rust
/// use jobctl_core::RpcRequest;
/// use serde_json::json;
///
/// let request = RpcRequest::new("run", json!({"file": "/tmp/sleep.job"}), "0");
/// assert_eq!(request.jsonrpc, "2.0");
/// assert_eq!(request.id, "0");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcRequest {
    /// Version tag, always "2.0"
    pub jsonrpc: String,
    /// Name of the master-side operation to invoke
    pub method: String,
    /// Operation parameters; always a JSON object or array for this protocol
    pub params: Value,
    /// Decimal string form of the connection's request counter
    pub id: String,
}

impl RpcRequest {
    /// Create a request envelope with the version tag filled in
    pub fn new(method: impl Into<String>, params: Value, id: impl Into<String>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            method: method.into(),
            params,
            id: id.into(),
        }
    }
}

/// Inbound response shape
///
/// The master sends either a `result` or an `error` field, never both. The
/// client does not enforce that contract; it just checks presence, `result`
/// first. A response carrying neither field renders nothing. Unknown fields
/// (including the echoed `id`) are ignored on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RpcResponse {
    /// Successful payload, printed verbatim to the operator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// Failure payload, printed verbatim to the operator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

impl RpcResponse {
    /// The printable payload: `result` if present, else `error`, else None
    pub fn payload(&self) -> Option<&Value> {
        self.result.as_ref().or(self.error.as_ref())
    }

    /// True when the response carries a `result` field
    pub fn is_success(&self) -> bool {
        self.result.is_some()
    }

    /// True when the response carries an `error` field
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}
