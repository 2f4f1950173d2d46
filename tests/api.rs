//! Integration tests driving the router in-process.
//!
//! Tests that touch `CLOUD_PROVIDER` mutate process-wide state and run serially.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use serial_test::serial;
use tower::ServiceExt;

use cloud_status::config::AppConfig;
use cloud_status::identity::{IdentitySource, StaticIdentity};
use cloud_status::{create_router, AppState};

fn system_app() -> axum::Router {
    create_router(AppState::new(AppConfig::default()))
}

fn static_app(hostname: &str, cloud: &str) -> axum::Router {
    create_router(AppState::with_identity(
        AppConfig::default(),
        StaticIdentity::new(hostname, cloud),
    ))
}

async fn get(app: axum::Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_bytes(response: Response) -> axum::body::Bytes {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
}

async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

fn os_hostname() -> String {
    gethostname::gethostname().to_string_lossy().into_owned()
}

#[tokio::test]
async fn test_health_check() {
    let response = get(system_app(), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
    assert_eq!(body_json(response).await, serde_json::json!({"status": "healthy"}));
}

#[tokio::test]
#[serial]
async fn test_health_ignores_environment() {
    std::env::set_var("CLOUD_PROVIDER", "AWS");
    let response = get(system_app(), "/health").await;
    std::env::remove_var("CLOUD_PROVIDER");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await.as_ref(), br#"{"status":"healthy"}"#);
}

#[tokio::test]
#[serial]
async fn test_root_defaults_cloud_when_unset() {
    std::env::remove_var("CLOUD_PROVIDER");

    let response = get(system_app(), "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["cloud"], "Unknown-Cloud");
}

#[tokio::test]
#[serial]
async fn test_root_defaults_cloud_when_empty() {
    std::env::set_var("CLOUD_PROVIDER", "");
    let response = get(system_app(), "/").await;
    std::env::remove_var("CLOUD_PROVIDER");

    let json = body_json(response).await;
    assert_eq!(json["cloud"], "Unknown-Cloud");
}

#[tokio::test]
#[serial]
async fn test_root_reports_configured_cloud() {
    std::env::set_var("CLOUD_PROVIDER", "AWS");
    let response = get(system_app(), "/").await;
    std::env::remove_var("CLOUD_PROVIDER");

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["cloud"], "AWS");
}

#[tokio::test]
#[serial]
async fn test_root_reads_environment_per_request() {
    let app = system_app();

    std::env::set_var("CLOUD_PROVIDER", "Azure");
    let first = body_json(get(app.clone(), "/").await).await;
    std::env::set_var("CLOUD_PROVIDER", "GCP");
    let second = body_json(get(app, "/").await).await;
    std::env::remove_var("CLOUD_PROVIDER");

    assert_eq!(first["cloud"], "Azure");
    assert_eq!(second["cloud"], "GCP");
}

#[tokio::test]
async fn test_root_reports_hostname_as_pod() {
    let response = get(system_app(), "/").await;

    let json = body_json(response).await;
    assert_eq!(json["pod"], os_hostname());
}

#[tokio::test]
async fn test_root_fixed_fields() {
    let response = get(static_app("web-0", "AWS"), "/").await;

    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
    let json = body_json(response).await;
    assert_eq!(json["message"], "Hello from Multi-Cloud GitOps Pipeline [v1]");
    assert_eq!(json["status"], "Running");
    assert_eq!(json.as_object().unwrap().len(), 4);
}

#[tokio::test]
async fn test_root_is_byte_identical_across_calls() {
    let app = static_app("web-0", "AWS");

    let first = body_bytes(get(app.clone(), "/").await).await;
    let second = body_bytes(get(app, "/").await).await;

    assert_eq!(first, second);
    assert_eq!(
        first.as_ref(),
        br#"{"message":"Hello from Multi-Cloud GitOps Pipeline [v1]","cloud":"AWS","pod":"web-0","status":"Running"}"#
    );
}

#[tokio::test]
async fn test_responses_are_not_cacheable() {
    for uri in ["/", "/health"] {
        let response = get(static_app("web-0", "AWS"), uri).await;
        assert_eq!(response.headers()[header::CACHE_CONTROL], "no-store");
    }
}

#[tokio::test]
async fn test_unknown_path_is_json_404() {
    let response = get(static_app("web-0", "AWS"), "/metrics").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "not found");
    assert_eq!(json["path"], "/metrics");
}

#[tokio::test]
async fn test_post_to_health_is_rejected() {
    let response = static_app("web-0", "AWS")
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_request_id_generated() {
    let response = get(static_app("web-0", "AWS"), "/health").await;

    let id = response.headers()["x-request-id"].to_str().unwrap();
    assert!(uuid::Uuid::parse_str(id).is_ok());
}

#[tokio::test]
async fn test_request_id_echoed() {
    let id = "6f1c2a7e-3b44-4d1a-9a0e-0c5f1e2d3b4a";
    let response = static_app("web-0", "AWS")
        .oneshot(
            Request::builder()
                .uri("/")
                .header("x-request-id", id)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers()["x-request-id"], id);
}

#[tokio::test]
async fn test_invalid_request_id_replaced() {
    let response = static_app("web-0", "AWS")
        .oneshot(
            Request::builder()
                .uri("/")
                .header("x-request-id", "not-a-uuid")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let id = response.headers()["x-request-id"].to_str().unwrap();
    assert_ne!(id, "not-a-uuid");
    assert!(uuid::Uuid::parse_str(id).is_ok());
}

struct BrokenIdentity;

impl IdentitySource for BrokenIdentity {
    fn hostname(&self) -> String {
        panic!("hostname unavailable")
    }

    fn cloud_provider(&self) -> String {
        "AWS".to_string()
    }
}

#[tokio::test]
async fn test_identity_failure_is_json_500() {
    let app = create_router(AppState::with_identity(AppConfig::default(), BrokenIdentity));

    let response = get(app, "/").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["error"], "internal server error");
}

#[tokio::test]
async fn test_identity_failure_leaves_health_up() {
    let app = create_router(AppState::with_identity(AppConfig::default(), BrokenIdentity));

    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[test]
fn test_shipped_config_parses() {
    let config = AppConfig::load(concat!(env!("CARGO_MANIFEST_DIR"), "/config/default.toml")).unwrap();
    assert_eq!(config.bind_addr().unwrap().to_string(), "0.0.0.0:5000");
}
