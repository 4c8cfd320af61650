use std::future::IntoFuture;
use std::time::Duration;

use alephium_kit::*;
use httpmock::prelude::*;
use serde_json::json;
use tokio_util::sync::CancellationToken;

use crate::common::{TEST_POLL_INTERVAL, peer, setup_server_and_client, tx_status};

fn tx() -> TransactionRef {
    TransactionRef {
        tx_id: "f00d".to_string(),
        from_group: 0,
        to_group: 3,
    }
}

// ============================================================================
// wait_until_synced
// ============================================================================

#[tokio::test]
async fn test_wait_until_synced_immediately() {
    let (server, alephium) = setup_server_and_client().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/infos/inter-clique-peer-info");
            then.status(200)
                .json_body(json!([peer("a", false), peer("b", true)]));
        })
        .await;

    alephium.wait_until_synced().await.unwrap();
    mock.assert_hits_async(1).await;
}

#[tokio::test]
async fn test_wait_until_synced_without_peers() {
    let (server, alephium) = setup_server_and_client().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/infos/inter-clique-peer-info");
            then.status(200).json_body(json!([]));
        })
        .await;

    alephium.wait_until_synced().await.unwrap();
    mock.assert_hits_async(1).await;
}

#[tokio::test]
async fn test_wait_until_synced_after_catching_up() {
    let (server, alephium) = setup_server_and_client().await;
    let mut lagging = server
        .mock_async(|when, then| {
            when.method(GET).path("/infos/inter-clique-peer-info");
            then.status(200).json_body(json!([peer("a", false)]));
        })
        .await;

    let catch_up = async {
        tokio::time::sleep(TEST_POLL_INTERVAL * 5).await;
        // The first matching mock wins, so the synced one only serves once
        // the lagging one is gone and no poll ever goes unanswered.
        let synced = server
            .mock_async(|when, then| {
                when.method(GET).path("/infos/inter-clique-peer-info");
                then.status(200).json_body(json!([peer("a", true)]));
            })
            .await;
        let polls = lagging.hits_async().await;
        lagging.delete_async().await;
        (polls, synced)
    };

    let wait = alephium
        .wait_until_synced()
        .timeout(Duration::from_secs(10))
        .into_future();
    let (result, (polls_before, synced)) = tokio::join!(wait, catch_up);

    result.unwrap();
    assert!(polls_before >= 2, "expected repeated polls, got {}", polls_before);
    synced.assert_hits_async(1).await;
}

#[tokio::test]
async fn test_wait_until_synced_times_out() {
    let (server, alephium) = setup_server_and_client().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/infos/inter-clique-peer-info");
            then.status(200).json_body(json!([peer("a", false)]));
        })
        .await;

    let err = alephium
        .wait_until_synced()
        .timeout(TEST_POLL_INTERVAL * 4)
        .await
        .unwrap_err();

    assert!(err.is_cancelled());
    assert!(mock.hits_async().await >= 2);
}

#[tokio::test]
async fn test_wait_until_synced_cancelled_by_token() {
    let (server, alephium) = setup_server_and_client().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/infos/inter-clique-peer-info");
            then.status(200).json_body(json!([peer("a", false)]));
        })
        .await;

    let token = CancellationToken::new();
    let canceller = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(TEST_POLL_INTERVAL * 3).await;
        canceller.cancel();
    });

    let err = alephium
        .wait_until_synced()
        .cancel_on(token)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Cancelled));
}

#[tokio::test]
async fn test_wait_until_synced_stops_on_fetch_error() {
    let (server, alephium) = setup_server_and_client().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/infos/inter-clique-peer-info");
            then.status(400).json_body(json!({"detail": "Not ready"}));
        })
        .await;

    let err = alephium.wait_until_synced().await.unwrap_err();

    match err {
        Error::Node(e) => assert_eq!(e.detail(), Some("Not ready")),
        other => panic!("Expected node error, got {:?}", other),
    }
    mock.assert_hits_async(1).await;
}

#[tokio::test]
async fn test_wait_until_synced_ignores_client_retries() {
    let server = MockServer::start_async().await;
    let alephium = Alephium::custom(server.base_url())
        .poll_interval(TEST_POLL_INTERVAL)
        .build()
        .unwrap();
    assert_eq!(alephium.node().retry_config().max_retries, 3);

    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/infos/inter-clique-peer-info");
            then.status(503).body("unavailable");
        })
        .await;

    let err = alephium.wait_until_synced().await.unwrap_err();

    match err {
        Error::Node(e) => assert!(e.is_retryable(), "Expected a 503, got {:?}", e),
        other => panic!("Expected node error, got {:?}", other),
    }
    mock.assert_hits_async(1).await;
}

// ============================================================================
// wait_for_transaction_status
// ============================================================================

#[tokio::test]
async fn test_wait_for_confirmation() {
    let (server, alephium) = setup_server_and_client().await;
    let mut mempooled = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/transactions/status")
                .query_param("txId", "f00d");
            then.status(200).json_body(tx_status("mempooled"));
        })
        .await;

    let mine = async {
        tokio::time::sleep(TEST_POLL_INTERVAL * 3).await;
        let confirmed = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/transactions/status")
                    .query_param("txId", "f00d");
                then.status(200).json_body(tx_status("confirmed"));
            })
            .await;
        mempooled.delete_async().await;
        confirmed
    };

    let tx = tx();
    let wait = alephium
        .wait_for_transaction_confirmed(&tx)
        .timeout(Duration::from_secs(10))
        .into_future();
    let (result, confirmed) = tokio::join!(wait, mine);

    let status = result.unwrap();
    assert!(status.is_confirmed());
    assert_eq!(status.chain_confirmations, Some(1));
    confirmed.assert_hits_async(1).await;
}

#[tokio::test]
async fn test_wait_for_custom_status() {
    let (server, alephium) = setup_server_and_client().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/transactions/status");
            then.status(200).json_body(tx_status("mempooled"));
        })
        .await;

    let status = alephium
        .wait_for_transaction_status(&tx(), "mempooled")
        .await
        .unwrap();
    assert!(status.is("mempooled"));
}

#[tokio::test]
async fn test_wait_for_transaction_status_is_exact() {
    let (server, alephium) = setup_server_and_client().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/transactions/status");
            then.status(200).json_body(tx_status("confirmed"));
        })
        .await;

    let err = alephium
        .wait_for_transaction_status(&tx(), "Confirmed")
        .timeout(TEST_POLL_INTERVAL * 3)
        .await
        .unwrap_err();
    assert!(err.is_cancelled());
}

#[tokio::test]
async fn test_wait_for_unknown_transaction() {
    let (server, alephium) = setup_server_and_client().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/transactions/status");
            then.status(404)
                .json_body(json!({"resource": "f00d", "detail": "Transaction not found"}));
        })
        .await;

    let err = alephium
        .wait_for_transaction_confirmed(&tx())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Node(NodeError::NotFound { .. })));
    mock.assert_hits_async(1).await;
}

#[tokio::test]
async fn test_wait_for_transaction_ignores_client_retries() {
    let server = MockServer::start_async().await;
    let alephium = Alephium::custom(server.base_url())
        .poll_interval(TEST_POLL_INTERVAL)
        .build()
        .unwrap();

    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/transactions/status");
            then.status(503).body("unavailable");
        })
        .await;

    let err = alephium
        .wait_for_transaction_confirmed(&tx())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Node(NodeError::Network { status_code: Some(503), .. })));
    mock.assert_hits_async(1).await;
}

#[tokio::test]
async fn test_concurrent_waits_share_a_client() {
    let (server, alephium) = setup_server_and_client().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/infos/inter-clique-peer-info");
            then.status(200).json_body(json!([peer("a", true)]));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/transactions/status");
            then.status(200).json_body(tx_status("confirmed"));
        })
        .await;

    let synced = tokio::spawn(alephium.clone().wait_until_synced().into_future());
    let confirmed = tokio::spawn(alephium.wait_for_transaction_confirmed(&tx()).into_future());

    synced.await.unwrap().unwrap();
    assert!(confirmed.await.unwrap().unwrap().is_confirmed());
}
