//! Common test utilities for jobctl integration tests
//!
//! Provides a mock master: a plain TCP listener that accepts one admin
//! connection, captures every received chunk for verification, and can
//! replay a canned response to each request.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::mpsc;

pub struct MockMaster {
    addr: SocketAddr,
    message_rx: mpsc::Receiver<String>,
}

impl MockMaster {
    /// Start a mock master that only records what it receives
    pub async fn start() -> Self {
        Self::with_reply(None).await
    }

    /// Start a mock master that answers every received chunk with `reply`
    pub async fn with_reply(reply: Option<String>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (msg_tx, message_rx) = mpsc::channel::<String>(100);

        tokio::spawn(async move {
            let Ok((mut stream, _)) = listener.accept().await else {
                return;
            };
            let mut buffer = vec![0u8; 32 * 1024];
            loop {
                match stream.read(&mut buffer).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => {
                        let chunk = String::from_utf8_lossy(&buffer[..n]).to_string();
                        let _ = msg_tx.send(chunk).await;
                        if let Some(reply) = &reply {
                            let _ = stream.write_all(reply.as_bytes()).await;
                        }
                    }
                }
            }
        });

        Self { addr, message_rx }
    }

    pub fn host(&self) -> String {
        self.addr.ip().to_string()
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// Next raw chunk received by the master, or None after the timeout
    pub async fn next_chunk(&mut self) -> Option<String> {
        tokio::time::timeout(Duration::from_secs(2), self.message_rx.recv())
            .await
            .ok()
            .flatten()
    }

    /// Collect chunks until `count` complete request objects have arrived
    ///
    /// The wire has no framing, so back-to-back requests may coalesce into
    /// one TCP read; this splits concatenated objects before asserting.
    pub async fn collect_requests(&mut self, count: usize) -> Vec<serde_json::Value> {
        let mut requests = Vec::new();
        while requests.len() < count {
            let chunk = self
                .next_chunk()
                .await
                .unwrap_or_else(|| panic!("timed out after {} of {count} requests", requests.len()));
            requests.extend(parse_concatenated(&chunk));
        }
        requests
    }

    /// Assert that no request arrives within a short grace period
    pub async fn expect_silence(&mut self) {
        let received =
            tokio::time::timeout(Duration::from_millis(200), self.message_rx.recv()).await;
        if let Ok(Some(chunk)) = received {
            panic!("expected no request, got: {chunk}");
        }
    }
}

/// Split a chunk of concatenated JSON objects into individual values
pub fn parse_concatenated(chunk: &str) -> Vec<serde_json::Value> {
    serde_json::Deserializer::from_str(chunk)
        .into_iter::<serde_json::Value>()
        .map(|value| value.expect("well-formed request on the wire"))
        .collect()
}
