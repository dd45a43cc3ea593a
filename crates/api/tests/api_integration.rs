//! Integration tests for the API server.

use std::sync::OnceLock;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use metrics_exporter_prometheus::PrometheusHandle;
use tower::ServiceExt;

static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

fn get_metrics_handle() -> PrometheusHandle {
    METRICS_HANDLE
        .get_or_init(|| {
            let builder = metrics_exporter_prometheus::PrometheusBuilder::new();
            builder
                .install_recorder()
                .expect("failed to install Prometheus recorder")
        })
        .clone()
}

fn setup() -> axum::Router {
    let config = api::config::Config::default();
    let state = api::create_default_state(&config).expect("dispatcher registration is valid");
    api::create_app(state, get_metrics_handle())
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn create_account_request(name: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/accounts")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&serde_json::json!({
                "name": name,
                "email": "test@email.example",
                "first_name": "John",
                "last_name": "Smith"
            }))
            .unwrap(),
        ))
        .unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let app = setup();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_create_account() {
    let app = setup();

    let response = app.oneshot(create_account_request("Test 1145")).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name_key"], "test1145");
    assert!(json["id"].as_str().is_some());
}

#[tokio::test]
async fn test_get_account_by_any_equivalent_spelling() {
    let app = setup();

    app.clone()
        .oneshot(create_account_request("Acme Corp"))
        .await
        .unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/accounts/ACME%20corp")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name_key"], "acmecorp");
    assert_eq!(json["name"], "Acme Corp");
    assert_eq!(json["edit_enabled"], true);
    assert_eq!(json["delete_enabled"], true);
}

#[tokio::test]
async fn test_get_unknown_account_returns_not_found() {
    let app = setup();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/accounts/ghost")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("ghost"));
}

#[tokio::test]
async fn test_create_duplicate_account_is_rejected() {
    let app = setup();

    app.clone()
        .oneshot(create_account_request("Acme Corp"))
        .await
        .unwrap();
    let response = app.oneshot(create_account_request("acme corp")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("already exists"));
}

#[tokio::test]
async fn test_create_blank_account_name_is_rejected() {
    let app = setup();

    let response = app.oneshot(create_account_request("   ")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let app = setup();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/metrics")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
