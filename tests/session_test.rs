//! Session-level integration tests against a mock master
//!
//! Each test feeds a scripted operator transcript into the session loop
//! and asserts exactly which requests reach the master, in what order,
//! and with which ids.

mod common;

use common::MockMaster;
use jobctl::commands::CommandRegistry;
use jobctl::connection::Connection;
use jobctl::session::Session;
use serde_json::json;
use tokio::io::BufReader;

async fn run_transcript(master: &MockMaster, transcript: &'static str) {
    let (connection, _reader) = Connection::connect(&master.host(), master.port())
        .await
        .expect("connect to mock master");
    let mut session = Session::new(connection, CommandRegistry::new());
    session
        .run(BufReader::new(transcript.as_bytes()))
        .await
        .expect("session should end cleanly");
    session.into_connection().close().await;
}

#[tokio::test]
async fn test_repeat_sends_same_request_with_consecutive_ids() {
    let mut master = MockMaster::start().await;
    run_transcript(&master, "stat\nr\nexit\n").await;

    let requests = master.collect_requests(2).await;
    for (n, request) in requests.iter().enumerate() {
        assert_eq!(request["jsonrpc"], json!("2.0"));
        assert_eq!(request["method"], json!("stat"));
        assert_eq!(request["params"], json!([]));
        assert_eq!(request["id"], json!(n.to_string()));
    }
}

#[tokio::test]
async fn test_request_envelope_for_run_command() {
    let mut master = MockMaster::start().await;
    run_transcript(&master, "run /tmp/demo.job\nexit\n").await;

    let requests = master.collect_requests(1).await;
    assert_eq!(
        requests[0],
        json!({
            "jsonrpc": "2.0",
            "method": "run",
            "params": {"file": "/tmp/demo.job"},
            "id": "0"
        })
    );
}

#[tokio::test]
async fn test_validation_failure_sends_nothing_and_consumes_no_id() {
    let mut master = MockMaster::start().await;
    // the bad stop never reaches the wire; the stat still gets id "0"
    run_transcript(&master, "stop not-a-number\nstat\nexit\n").await;

    let requests = master.collect_requests(1).await;
    assert_eq!(requests[0]["method"], json!("stat"));
    assert_eq!(requests[0]["id"], json!("0"));
    master.expect_silence().await;
}

#[tokio::test]
async fn test_repeat_without_history_is_a_noop() {
    let mut master = MockMaster::start().await;
    run_transcript(&master, "r\nrepeat\nexit\n").await;
    master.expect_silence().await;
}

#[tokio::test]
async fn test_unknown_command_sends_nothing() {
    let mut master = MockMaster::start().await;
    run_transcript(&master, "restart 5\nexit\n").await;
    master.expect_silence().await;
}

#[tokio::test]
async fn test_failed_dispatch_does_not_become_repeat_target() {
    let mut master = MockMaster::start().await;
    // "stop x" fails validation, so `r` must repeat the earlier stat
    run_transcript(&master, "stat\nstop x\nr\nexit\n").await;

    let requests = master.collect_requests(2).await;
    assert_eq!(requests[0]["method"], json!("stat"));
    assert_eq!(requests[1]["method"], json!("stat"));
    assert_eq!(requests[1]["id"], json!("1"));
    master.expect_silence().await;
}

#[tokio::test]
async fn test_blank_lines_and_help_send_nothing() {
    let mut master = MockMaster::start().await;
    run_transcript(&master, "\n   \nhelp\nexit\n").await;
    master.expect_silence().await;
}

#[tokio::test]
async fn test_ids_keep_increasing_across_commands() {
    let mut master = MockMaster::start().await;
    run_transcript(&master, "stat\nstop 3\ninfo 3\nexit\n").await;

    let requests = master.collect_requests(3).await;
    let ids: Vec<_> = requests.iter().map(|r| r["id"].clone()).collect();
    assert_eq!(ids, vec![json!("0"), json!("1"), json!("2")]);
    assert_eq!(requests[1]["params"], json!({"job_id": 3}));
    assert_eq!(requests[2]["method"], json!("info"));
}
