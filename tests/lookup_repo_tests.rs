// Lookup client against a local HTTP server: success, error mapping, malformed bodies

use axum::{Json, Router, http::StatusCode, routing::post};
use imei_status::config::LookupConfig;
use imei_status::error::BatchError;
use imei_status::lookup_repo::{DeviceLookup, LookupRepo};
use serde_json::{Value, json};

/// Serves `router` on an ephemeral port and returns its base URL.
async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn repo(base_url: String) -> LookupRepo {
    LookupRepo::new(&LookupConfig {
        base_url,
        timeout_secs: 5,
        max_batch_size: 100,
    })
    .unwrap()
}

fn failure_message(err: BatchError) -> String {
    match err {
        BatchError::LookupFailure(msg) => msg,
        other => panic!("expected LookupFailure, got {other:?}"),
    }
}

#[tokio::test]
async fn posts_imeis_and_parses_devices() {
    let router = Router::new().route(
        "/api/check-devices",
        post(|Json(body): Json<Value>| async move {
            let imei = body["imeis"][0].clone();
            Json(json!({
                "devices": [{ "imei": imei, "lastTime": "2024-05-01 12:00:00", "daysOffline": 3 }],
                "rawData": []
            }))
        }),
    );
    let base = spawn(router).await;
    let lookup = repo(format!("{base}/"));
    assert_eq!(lookup.endpoint(), format!("{base}/api/check-devices"));

    let response = lookup
        .check_devices(&["111111111111111".to_string()])
        .await
        .unwrap();
    assert_eq!(response.devices.len(), 1);
    assert_eq!(response.devices[0].imei.as_deref(), Some("111111111111111"));
    assert_eq!(response.devices[0].days_offline, Some(3));
}

#[tokio::test]
async fn error_field_becomes_lookup_failure() {
    let router = Router::new().route(
        "/api/check-devices",
        post(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "boom" })),
            )
        }),
    );
    let lookup = repo(spawn(router).await);
    let err = lookup
        .check_devices(&["111111111111111".to_string()])
        .await
        .unwrap_err();
    assert_eq!(failure_message(err), "boom");
}

#[tokio::test]
async fn non_json_error_falls_back_to_status() {
    let router = Router::new().route(
        "/api/check-devices",
        post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "upstream down") }),
    );
    let lookup = repo(spawn(router).await);
    let err = lookup
        .check_devices(&["111111111111111".to_string()])
        .await
        .unwrap_err();
    let msg = failure_message(err);
    assert!(msg.starts_with("HTTP status: 503"), "{msg}");
}

#[tokio::test]
async fn malformed_success_body_is_lookup_failure() {
    let router = Router::new().route(
        "/api/check-devices",
        post(|| async { "not json" }),
    );
    let lookup = repo(spawn(router).await);
    let err = lookup
        .check_devices(&["111111111111111".to_string()])
        .await
        .unwrap_err();
    let msg = failure_message(err);
    assert!(msg.starts_with("invalid response body"), "{msg}");
}
