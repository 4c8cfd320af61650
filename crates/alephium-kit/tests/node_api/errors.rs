use std::time::Duration;

use alephium_kit::*;
use httpmock::prelude::*;
use serde_json::json;

use crate::common::setup_server_and_client;

#[tokio::test]
async fn test_not_found_is_structured() {
    let (server, alephium) = setup_server_and_client().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/wallets/ghost/balances");
            then.status(404)
                .json_body(json!({"resource": "ghost", "detail": "Wallet ghost not found"}));
        })
        .await;

    let err = alephium.node().wallet_balances("ghost").await.unwrap_err();
    assert!(err.is_not_found());
    match err {
        NodeError::NotFound { resource, detail } => {
            assert_eq!(resource.as_deref(), Some("ghost"));
            assert_eq!(detail, "Wallet ghost not found");
        }
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unstructured_server_error() {
    let (server, alephium) = setup_server_and_client().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/infos/node");
            then.status(500).body("internal error");
        })
        .await;

    let err = alephium.node().node_info().await.unwrap_err();
    assert!(matches!(
        err,
        NodeError::Network {
            status_code: Some(500),
            retryable: true,
            ..
        }
    ));
}

#[tokio::test]
async fn test_get_retries_are_exhausted() {
    let server = MockServer::start_async().await;
    let alephium = Alephium::custom(server.base_url())
        .retry_config(RetryConfig {
            max_retries: 2,
            initial_delay_ms: 1,
            max_delay_ms: 5,
        })
        .build()
        .unwrap();
    let failing = server
        .mock_async(|when, then| {
            when.method(GET).path("/miners/addresses");
            then.status(503).body("busy");
        })
        .await;

    let err = alephium.node().miners_addresses().await.unwrap_err();
    assert!(err.is_retryable());
    failing.assert_hits_async(3).await;
}

#[tokio::test]
async fn test_api_key_header() {
    let server = MockServer::start_async().await;
    let alephium = Alephium::custom(server.base_url())
        .api_key("s3cret-key")
        .build()
        .unwrap();
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/wallets")
                .header("x-api-key", "s3cret-key");
            then.status(200).json_body(json!([]));
        })
        .await;

    let wallets = alephium.node().wallets().await.unwrap();

    assert!(wallets.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_request_timeout() {
    let server = MockServer::start_async().await;
    let alephium = Alephium::custom(server.base_url())
        .timeout(Duration::from_millis(50))
        .retry_config(RetryConfig::none())
        .build()
        .unwrap();
    server
        .mock_async(|when, then| {
            when.method(GET).path("/infos/node");
            then.status(200)
                .delay(Duration::from_millis(500))
                .json_body(json!({"buildInfo": {"releaseVersion": "1", "commit": "c"}}));
        })
        .await;

    let err = alephium.node().node_info().await.unwrap_err();
    match err {
        NodeError::Http(e) => assert!(e.is_timeout()),
        other => panic!("Expected HTTP timeout, got {:?}", other),
    }
}
