//! Wire envelope types and codec for the master admin protocol
//!
//! The admin client talks to the job-scheduling master with JSON-RPC-shaped
//! messages over a raw TCP stream: one UTF-8 JSON object per message, no
//! length prefix and no newline terminator. This crate provides:
//!
//! - **Types**: the outbound request envelope and the inbound response shape
//! - **Codec**: encoding requests to bytes and decoding response bytes
//! - **Error handling**: error types shared by the client
//!
//! The crate is transport-agnostic: it serializes and deserializes messages
//! but never touches a socket. The `jobctl` binary owns the connection and
//! builds the session layer on top of this foundation.
//!
//! # Example
//!
//! ```rust
//! use jobctl_core::{codec, RpcRequest};
//! use serde_json::json;
//!
//! let request = RpcRequest::new("stop", json!({"job_id": 7}), "0");
//! let bytes = codec::encode_request(&request).unwrap();
//! assert!(std::str::from_utf8(&bytes).unwrap().contains("\"jsonrpc\":\"2.0\""));
//! ```

pub mod codec;
pub mod error;
pub mod types;

// Re-export the most commonly used items for convenience
pub use error::{Error, Result};
pub use types::{RpcRequest, RpcResponse, JSONRPC_VERSION};
