#![allow(clippy::unwrap_used)]
// Integration tests for `RestClient` using wiremock.

use serde_json::json;
use url::Url;
use wiremock::matchers::{basic_auth, body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use hotspotctl_api::{
    Error, Fields, ResourceClient, ResourcePath, RestClient, TlsMode, TransportConfig,
};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, RestClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = RestClient::with_client(
        reqwest::Client::new(),
        base_url,
        "admin".into(),
        "secret".to_string().into(),
    );
    (server, client)
}

fn fields(pairs: &[(&str, &str)]) -> Fields {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect()
}

// ── List ────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_hotspot_users() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/rest/ip/hotspot/user"))
        .and(basic_auth("admin", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { ".id": "*1", "name": "bob", "profile": "default" },
            { ".id": "*2", "name": "alice", "profile": "guests", "limit-uptime": "1h" }
        ])))
        .mount(&server)
        .await;

    let rows = client.list(ResourcePath::HOTSPOT_USERS).await.unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][".id"], "*1");
    assert_eq!(rows[1]["name"], "alice");
    assert_eq!(rows[1]["limit-uptime"], "1h");
}

#[tokio::test]
async fn test_list_singleton_menu_yields_one_row() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/rest/system/identity"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "name": "gw-lobby" })))
        .mount(&server)
        .await;

    let rows = client.list(ResourcePath::SYSTEM_IDENTITY).await.unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "gw-lobby");
}

#[tokio::test]
async fn test_list_unauthorized() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/rest/user"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({ "error": 401, "message": "Unauthorized" })),
        )
        .mount(&server)
        .await;

    let result = client.list(ResourcePath::USERS).await;

    assert!(
        matches!(result, Err(Error::Authentication { .. })),
        "expected Authentication error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_list_garbage_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/rest/ip/hotspot/active"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .mount(&server)
        .await;

    let result = client.list(ResourcePath::HOTSPOT_ACTIVE).await;

    match result {
        Err(Error::Deserialization { body, .. }) => assert!(body.contains("login")),
        other => panic!("expected Deserialization error, got: {other:?}"),
    }
}

// ── Add ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_add_returns_new_id() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/rest/ip/hotspot/user"))
        .and(body_json(json!({
            "name": "voucher_0a1b2c3d",
            "password": "deadbeef",
            "profile": "default",
            "limit-uptime": "1h"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            ".id": "*7",
            "name": "voucher_0a1b2c3d",
            "profile": "default"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let id = client
        .add(
            ResourcePath::HOTSPOT_USERS,
            &fields(&[
                ("name", "voucher_0a1b2c3d"),
                ("password", "deadbeef"),
                ("profile", "default"),
                ("limit-uptime", "1h"),
            ]),
        )
        .await
        .unwrap();

    assert_eq!(id.as_deref(), Some("*7"));
}

#[tokio::test]
async fn test_add_duplicate_is_trap() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/rest/user"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": 400,
            "message": "Bad Request",
            "detail": "failure: user with the same name already exists"
        })))
        .mount(&server)
        .await;

    let err = client
        .add(
            ResourcePath::USERS,
            &fields(&[("name", "ops"), ("password", "x"), ("group", "read")]),
        )
        .await
        .unwrap_err();

    match &err {
        Error::Trap {
            status,
            message,
            detail,
        } => {
            assert_eq!(*status, 400);
            assert_eq!(message, "Bad Request");
            assert_eq!(
                detail.as_deref(),
                Some("failure: user with the same name already exists")
            );
        }
        other => panic!("expected Trap, got: {other:?}"),
    }
    assert_eq!(
        err.trap_detail(),
        Some("failure: user with the same name already exists")
    );
    assert!(!err.is_unreachable());
}

#[tokio::test]
async fn test_trap_without_json_body_keeps_text() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/rest/ip/hotspot/user/profile"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal failure"))
        .mount(&server)
        .await;

    let err = client
        .add(ResourcePath::HOTSPOT_PROFILES, &fields(&[("name", "p1")]))
        .await
        .unwrap_err();

    assert!(
        matches!(&err, Error::Trap { status: 500, detail: Some(d), .. } if d == "internal failure"),
        "unexpected error: {err:?}"
    );
}

// ── Set / Remove ────────────────────────────────────────────────────

#[tokio::test]
async fn test_set_patches_record() {
    let (server, client) = setup().await;

    Mock::given(method("PATCH"))
        .and(path("/rest/user/*3"))
        .and(body_json(json!({ "group": "full" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            ".id": "*3", "name": "ops", "group": "full"
        })))
        .expect(1)
        .mount(&server)
        .await;

    client
        .set(ResourcePath::USERS, "*3", &fields(&[("group", "full")]))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_remove_active_session() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/rest/ip/hotspot/active/*A"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client
        .remove(ResourcePath::HOTSPOT_ACTIVE, "*A")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_remove_missing_record_is_trap() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/rest/ip/hotspot/active/*A"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": 404, "message": "Not Found"
        })))
        .mount(&server)
        .await;

    let result = client.remove(ResourcePath::HOTSPOT_ACTIVE, "*A").await;

    assert!(
        matches!(result, Err(Error::Trap { status: 404, .. })),
        "expected Trap 404, got: {result:?}"
    );
}

// ── Connectivity ────────────────────────────────────────────────────

#[tokio::test]
async fn test_unreachable_router() {
    // Port 9 (discard) is closed on test hosts.
    let client = RestClient::with_client(
        reqwest::Client::new(),
        Url::parse("http://127.0.0.1:9").unwrap(),
        "admin".into(),
        "secret".to_string().into(),
    );

    let err = client.list(ResourcePath::USERS).await.unwrap_err();

    assert!(err.is_unreachable(), "expected unreachable, got: {err:?}");
}

#[tokio::test]
async fn test_slow_router_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/ip/hotspot/active"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let transport = TransportConfig {
        tls: TlsMode::System,
        timeout: std::time::Duration::from_millis(300),
    };
    let client = RestClient::new(
        Url::parse(&server.uri()).unwrap(),
        "admin".into(),
        "secret".to_string().into(),
        &transport,
    )
    .unwrap();

    let err = client.list(ResourcePath::HOTSPOT_ACTIVE).await.unwrap_err();

    assert!(err.is_timeout(), "expected timeout, got: {err:?}");
    assert!(err.is_unreachable());
}
