//! Background response listener
//!
//! Spawned once after the connection is established and runs for the
//! lifetime of the session, concurrently with the session loop. It blocks
//! on socket reads, renders each received message to stdout, and re-prints
//! the prompt marker so the operator keeps a usable input line.
//!
//! Receive failures are not fatal: a read error or EOF means the master
//! closed the session, so the task ends its loop quietly. A message that
//! fails to decode is reported and skipped; the loop keeps running. No
//! frame reassembly is attempted across reads — a response is assumed to
//! arrive in a single read.

use jobctl_core::codec;
use serde_json::Value;
use tokio::io::AsyncReadExt;
use tokio::net::tcp::OwnedReadHalf;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::session::prompt;

/// Upper bound on a single receive; multi-kilobyte responses such as job
/// statistics must fit in one read.
pub const RECV_BUFFER_SIZE: usize = 32 * 1024;

/// Spawn the listener task
///
/// The task ends when the master closes the connection or when the
/// shutdown signal flips, whichever comes first. The returned handle is
/// awaited on the exit path so the listener drains before the process
/// terminates.
pub fn spawn(reader: OwnedReadHalf, shutdown: watch::Receiver<bool>) -> JoinHandle<()> {
    tokio::spawn(run(reader, shutdown))
}

async fn run(mut reader: OwnedReadHalf, mut shutdown: watch::Receiver<bool>) {
    let mut buffer = vec![0u8; RECV_BUFFER_SIZE];
    loop {
        tokio::select! {
            _ = shutdown.changed() => {
                tracing::debug!("listener stopping on shutdown signal");
                break;
            }
            read = reader.read(&mut buffer) => match read {
                Ok(0) => {
                    tracing::debug!("master closed the connection");
                    break;
                }
                Err(e) => {
                    // remote closing is a normal end of session, not a bug
                    tracing::debug!(error = %e, "receive failed, ending session");
                    break;
                }
                Ok(n) => {
                    if let Some(text) = render_message(&buffer[..n]) {
                        println!("{text}");
                    }
                    prompt();
                }
            }
        }
    }
}

/// Printable text for one received message, or None when there is nothing
/// to show
///
/// A well-formed response prints its `result` field if present, else its
/// `error` field, else nothing. A message that fails to decode prints the
/// decode error detail instead.
pub fn render_message(data: &[u8]) -> Option<String> {
    match codec::decode_response(data) {
        Ok(response) => response.payload().map(render_value),
        Err(e) => Some(e.to_string()),
    }
}

/// String payloads print unquoted; everything else prints as compact JSON
fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
