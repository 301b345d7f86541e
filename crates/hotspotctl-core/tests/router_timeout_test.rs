#![allow(clippy::unwrap_used)]
// A router that stops answering mid-operation, served by wiremock.

use std::time::Duration;

use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use hotspotctl_core::{
    Command, CoreError, CreateVouchersRequest, ErrorKind, Manager, RouterConfig, TlsVerification,
};

fn config(server: &MockServer) -> RouterConfig {
    let mut config = RouterConfig::new(
        Url::parse(&server.uri()).unwrap(),
        "admin",
        "secret".to_string().into(),
    );
    config.tls = TlsVerification::SystemDefaults;
    config.timeout = Duration::from_millis(300);
    config
}

#[tokio::test]
async fn test_timeout_during_voucher_batch_is_connection_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/ip/hotspot/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/rest/ip/hotspot/user"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({ ".id": "*1" }))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let manager = Manager::from_config(&config(&server)).unwrap();
    let err = manager
        .execute(Command::CreateVouchers(CreateVouchersRequest {
            profile: "default".into(),
            count: 2,
            duration: None,
        }))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ConnectionFailure);
    let CoreError::BatchAborted {
        created,
        requested,
        source,
    } = err
    else {
        panic!("expected BatchAborted");
    };
    assert_eq!((created, requested), (0, 2));
    assert!(matches!(*source, CoreError::Timeout), "{source:?}");
}

#[tokio::test]
async fn test_timeout_on_read_is_connection_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/ip/hotspot/active"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let manager = Manager::from_config(&config(&server)).unwrap();
    let err = manager.list_active_sessions().await.unwrap_err();

    assert!(matches!(err, CoreError::Timeout), "{err:?}");
    assert_eq!(err.kind(), ErrorKind::ConnectionFailure);
}
