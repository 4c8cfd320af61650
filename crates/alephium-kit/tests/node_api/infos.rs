use alephium_kit::*;
use httpmock::prelude::*;
use serde_json::json;

use crate::common::{peer, setup_server_and_client};

#[tokio::test]
async fn test_self_clique() {
    let (server, alephium) = setup_server_and_client().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/infos/self-clique");
            then.status(200).json_body(json!({
                "cliqueId": "1a2b",
                "networkType": "devnet",
                "numZerosAtLeastInHash": 0,
                "nodes": [{"address": "127.0.0.1", "restPort": 12973, "wsPort": 11973}],
                "synced": true,
                "groupNumPerBroker": 4,
                "groups": 4
            }));
        })
        .await;

    let clique = alephium.node().self_clique().await.unwrap();

    mock.assert_async().await;
    assert_eq!(clique.clique_id, "1a2b");
    assert!(clique.synced);
    assert_eq!(clique.groups, 4);
    assert_eq!(clique.nodes[0].rest_port, 12973);
}

#[tokio::test]
async fn test_inter_clique_peer_info_and_is_synced() {
    let (server, alephium) = setup_server_and_client().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/infos/inter-clique-peer-info");
            then.status(200)
                .json_body(json!([peer("a", false), peer("b", true)]));
        })
        .await;

    let peers = alephium.node().inter_clique_peer_info().await.unwrap();
    assert_eq!(peers.len(), 2);
    assert!(!peers[0].is_synced);
    assert_eq!(peers[1].address.port, 9973);

    assert!(alephium.node().is_synced().await.unwrap());
}

#[tokio::test]
async fn test_is_synced_false_when_no_peer_synced() {
    let (server, alephium) = setup_server_and_client().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/infos/inter-clique-peer-info");
            then.status(200).json_body(json!([peer("a", false)]));
        })
        .await;

    assert!(!alephium.node().is_synced().await.unwrap());
}

#[tokio::test]
async fn test_discovered_neighbors() {
    let (server, alephium) = setup_server_and_client().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/infos/discovered-neighbors");
            then.status(200).json_body(json!([
                {"cliqueId": "c1", "brokerId": 0, "groupNumPerBroker": 4}
            ]));
        })
        .await;

    let neighbors = alephium.node().discovered_neighbors().await.unwrap();
    assert_eq!(neighbors.len(), 1);
    assert_eq!(neighbors[0].clique_id, "c1");
}

#[tokio::test]
async fn test_misbehaviors_and_unban() {
    let (server, alephium) = setup_server_and_client().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/infos/misbehaviors");
            then.status(200).json_body(json!([
                {"peer": "10.0.0.9", "status": {"type": "Banned", "value": 1700000000000i64}}
            ]));
        })
        .await;
    let unban = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/infos/misbehaviors")
                .json_body(json!({"type": "unban", "peers": ["10.0.0.9"]}));
            then.status(200);
        })
        .await;

    let misbehaviors = alephium.node().misbehaviors().await.unwrap();
    assert_eq!(misbehaviors[0].peer, "10.0.0.9");
    assert_eq!(misbehaviors[0].status.kind, "Banned");

    alephium
        .node()
        .unban_misbehaviors(&["10.0.0.9".to_string()])
        .await
        .unwrap();
    unban.assert_async().await;
}

#[tokio::test]
async fn test_node_info() {
    let (server, alephium) = setup_server_and_client().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/infos/node");
            then.status(200).json_body(json!({
                "buildInfo": {"releaseVersion": "1.0.0", "commit": "abc123"}
            }));
        })
        .await;

    let info = alephium.node().node_info().await.unwrap();
    assert_eq!(info.build_info.release_version, "1.0.0");
    assert_eq!(info.version, None);
}
