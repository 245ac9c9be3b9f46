//! Persistent connection to the master's admin port
//!
//! The connection is created once at startup and lives until process exit;
//! there is no reconnection logic. The TCP stream is split at connect time:
//! the read half goes to the response listener, the write half and the
//! request counter stay here.

use jobctl_core::{codec, Result, RpcRequest};
use serde_json::Value;
use tokio::io::AsyncWriteExt;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::TcpStream;

/// Write side of the admin connection plus the request id counter
pub struct Connection {
    writer: OwnedWriteHalf,
    next_request_id: u64,
}

impl Connection {
    /// Establish the admin connection and split off the read half
    ///
    /// A failure here is fatal to the client; `main` prints a diagnostic
    /// and exits with status 1.
    pub async fn connect(host: &str, port: u16) -> Result<(Self, OwnedReadHalf)> {
        let stream = TcpStream::connect((host, port)).await?;
        let (reader, writer) = stream.into_split();
        tracing::info!(host, port, "connected to master");
        Ok((
            Self {
                writer,
                next_request_id: 0,
            },
            reader,
        ))
    }

    /// Encode and send one request
    ///
    /// The id is the decimal string of the counter at send time; the counter
    /// advances only after a successful write, so validation failures and
    /// write errors never consume an id. Ids start at "0" and are never
    /// reset or reused for the lifetime of the connection.
    ///
    /// A write error is fatal to the client: with a broken outbound path an
    /// admin console has nothing useful left to do, so the error propagates
    /// to `main` and the process exits with status 1.
    pub async fn send(&mut self, method: &str, params: Value) -> Result<()> {
        let request = RpcRequest::new(method, params, self.next_request_id.to_string());
        let bytes = codec::encode_request(&request)?;
        self.writer.write_all(&bytes).await?;
        self.next_request_id += 1;
        tracing::debug!(method, id = %request.id, "request sent");
        Ok(())
    }

    /// Best-effort orderly shutdown of the write direction
    ///
    /// Cleanup must never fail the shutdown path; errors are swallowed.
    pub async fn close(mut self) {
        let _ = self.writer.shutdown().await;
    }
}
