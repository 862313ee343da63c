#![allow(clippy::unwrap_used)]
// Integration tests for `OrchestratorClient` using wiremock.

use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use magview_api::{Error, OrchestratorClient};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, OrchestratorClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = OrchestratorClient::with_client(
        reqwest::Client::new(),
        base_url,
        "test_network".into(),
        "test-token".to_string().into(),
    );
    (server, client)
}

fn lte_path(suffix: &str) -> String {
    format!("/magma/v1/lte/test_network/{suffix}")
}

// ── Gateway tests ───────────────────────────────────────────────────

#[tokio::test]
async fn test_list_gateways() {
    let (server, client) = setup().await;

    let body = json!({
        "gw1": {
            "id": "gw1",
            "name": "Lab Gateway",
            "cellular": { "epc": {}, "ran": {} },
            "connected_enodeb_serials": ["sn-1", "sn-2"],
            "device": { "hardware_id": "hw-1" },
            "status": {
                "checkin_time": 1_700_000_000_000_u64,
                "platform_info": {
                    "packages": [ { "name": "magma", "version": "1.8.0" } ]
                }
            },
            "magmad": { "checkin_interval": 60 },
            "tier": "default"
        },
        "gw2": {
            "id": "gw2",
            "name": "Bare Gateway",
            "tier": "default"
        }
    });

    Mock::given(method("GET"))
        .and(path(lte_path("gateways")))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let gateways = client.list_gateways().await.unwrap();

    assert_eq!(gateways.len(), 2);
    // Document order preserved
    let ids: Vec<&String> = gateways.keys().collect();
    assert_eq!(ids, ["gw1", "gw2"]);

    let gw1 = &gateways["gw1"];
    assert_eq!(gw1.name, "Lab Gateway");
    assert!(gw1.cellular.is_some());
    assert_eq!(gw1.connected_enodeb_serials.len(), 2);
    assert_eq!(gw1.device.as_ref().unwrap().hardware_id, "hw-1");
    let status = gw1.status.as_ref().unwrap();
    assert_eq!(status.checkin_time, Some(1_700_000_000_000));
    let packages = &status.platform_info.as_ref().unwrap().packages;
    assert_eq!(packages[0].name, "magma");
    assert_eq!(packages[0].version, "1.8.0");

    let gw2 = &gateways["gw2"];
    assert!(gw2.cellular.is_none());
    assert!(gw2.status.is_none());
    assert!(gw2.connected_enodeb_serials.is_empty());
}

#[tokio::test]
async fn test_update_gateway_tier() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path(lte_path("gateways/gw1/tier")))
        .and(body_json(json!("canary")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client.update_gateway_tier("gw1", "canary").await.unwrap();
}

#[tokio::test]
async fn test_remove_gateway() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path(lte_path("gateways/gw1")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client.remove_gateway("gw1").await.unwrap();
}

// ── Tier tests ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_tiers() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/magma/v1/networks/test_network/tiers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["default", "canary"])))
        .mount(&server)
        .await;

    let tiers = client.list_tiers().await.unwrap();
    assert_eq!(tiers, ["default", "canary"]);
}

// ── Subscriber state tests ──────────────────────────────────────────

#[tokio::test]
async fn test_list_subscriber_state() {
    let (server, client) = setup().await;

    let body = json!({
        "IMSI001010000000001": {
            "directory": { "location_history": ["hw-1", "hw-2"] }
        },
        "IMSI001010000000002": {}
    });

    Mock::given(method("GET"))
        .and(path(lte_path("subscriber_state")))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let state = client.list_subscriber_state().await.unwrap();

    assert_eq!(state.len(), 2);
    let first = &state["IMSI001010000000001"];
    assert_eq!(
        first.directory.as_ref().unwrap().location_history,
        ["hw-1", "hw-2"]
    );
    assert!(state["IMSI001010000000002"].directory.is_none());
}

// ── Error tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_rejected_token() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let result = client.list_gateways().await;
    assert!(
        matches!(result, Err(Error::Authentication { .. })),
        "expected Authentication error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_gateway_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(lte_path("gateways/missing")))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let result = client.get_gateway("missing").await;
    assert!(matches!(result, Err(Error::NotFound { .. })));
}

#[tokio::test]
async fn test_orchestrator_error_body() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path(lte_path("gateways/gw1/tier")))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "message": "unknown tier" })),
        )
        .mount(&server)
        .await;

    let result = client.update_gateway_tier("gw1", "nope").await;
    match result {
        Err(Error::Api { status, message }) => {
            assert_eq!(status, 400);
            assert_eq!(message, "unknown tier");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}
