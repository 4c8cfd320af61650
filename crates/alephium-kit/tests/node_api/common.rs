use std::time::Duration;

use alephium_kit::{Alephium, RetryConfig};
use httpmock::MockServer;
use serde_json::{Value, json};

/// Poll interval used by waits in these tests.
pub const TEST_POLL_INTERVAL: Duration = Duration::from_millis(20);

pub async fn setup_server_and_client() -> (MockServer, Alephium) {
    let server = MockServer::start_async().await;
    let alephium = Alephium::custom(server.base_url())
        .retry_config(RetryConfig::none())
        .poll_interval(TEST_POLL_INTERVAL)
        .build()
        .unwrap();

    (server, alephium)
}

pub fn peer(clique_id: &str, is_synced: bool) -> Value {
    json!({
        "cliqueId": clique_id,
        "brokerId": 0,
        "groupNumPerBroker": 4,
        "address": {"addr": "10.0.0.2", "port": 9973},
        "isSynced": is_synced
    })
}

pub fn tx_status(kind: &str) -> Value {
    if kind == "confirmed" {
        json!({
            "type": "confirmed",
            "blockHash": "0000a1b2",
            "blockIndex": 0,
            "chainConfirmations": 1,
            "fromGroupConfirmations": 1,
            "toGroupConfirmations": 1
        })
    } else {
        json!({"type": kind})
    }
}
