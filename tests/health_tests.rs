//! HTTP tests for the health endpoints.
//!
//! The router is driven in-process with `tower::ServiceExt::oneshot`, so no
//! port is bound.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use axum::body::Body;
use axum::Router;
use http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use private_share_middleware::config::AppConfig;
use private_share_middleware::routes::create_router;
use private_share_middleware::state::AppState;
use private_share_middleware::{ComponentCheck, HealthError, HealthStatus, PrivateShareMiddleware};

struct Toggle {
    up: Arc<AtomicBool>,
}

impl ComponentCheck for Toggle {
    fn name(&self) -> &str {
        "share-store"
    }

    fn check(&self) -> Result<(), HealthError> {
        if self.up.load(Ordering::Relaxed) {
            Ok(())
        } else {
            Err(HealthError::unavailable("share-store", "connection lost"))
        }
    }
}

fn app(component: PrivateShareMiddleware) -> Router {
    create_router(AppState::new(AppConfig::default(), component))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

#[tokio::test]
async fn test_health_returns_200_with_status_true() {
    let response = app(PrivateShareMiddleware::new())
        .oneshot(get("/health"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).unwrap(),
        "no-store"
    );
    assert!(response.headers().contains_key("x-request-id"));

    let body = body_bytes(response).await;
    assert_eq!(body, br#"{"status":true}"#);
}

#[tokio::test]
async fn test_health_repeated_requests_are_identical() {
    let router = app(PrivateShareMiddleware::new());
    for _ in 0..10 {
        let response = router.clone().oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let status: HealthStatus = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(status, HealthStatus { status: true });
    }
}

#[tokio::test]
async fn test_health_concurrent_requests() {
    let router = app(PrivateShareMiddleware::new());
    let tasks: Vec<_> = (0..100)
        .map(|_| {
            let router = router.clone();
            tokio::spawn(async move {
                let response = router.oneshot(get("/health")).await.unwrap();
                let code = response.status();
                let status: HealthStatus =
                    serde_json::from_slice(&body_bytes(response).await).unwrap();
                (code, status)
            })
        })
        .collect();

    let mut results = Vec::new();
    for task in tasks {
        results.push(task.await.unwrap());
    }
    assert_eq!(results.len(), 100);
    assert!(results
        .iter()
        .all(|(code, status)| *code == StatusCode::OK && status.status));
}

#[tokio::test]
async fn test_health_reports_503_when_check_fails() {
    let up = Arc::new(AtomicBool::new(false));
    let component = PrivateShareMiddleware::builder()
        .with_check(Toggle { up: up.clone() })
        .build();
    let router = app(component);

    let response = router.clone().oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body_bytes(response).await, br#"{"status":false}"#);

    up.store(true, Ordering::Relaxed);
    let response = router.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_report_lists_checks() {
    let component = PrivateShareMiddleware::builder()
        .with_check(Toggle {
            up: Arc::new(AtomicBool::new(true)),
        })
        .build();

    let response = app(component).oneshot(get("/health/report")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let report: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(report["status"], true);
    assert_eq!(report["checks"][0]["name"], "share-store");
    assert_eq!(report["checks"][0]["healthy"], true);
}

#[tokio::test]
async fn test_report_names_failed_checks() {
    let component = PrivateShareMiddleware::builder()
        .with_check(Toggle {
            up: Arc::new(AtomicBool::new(false)),
        })
        .build();

    let response = app(component).oneshot(get("/health/report")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body["error"], "Service unavailable: share-store");
}

#[tokio::test]
async fn test_unknown_path_is_json_404() {
    let response = app(PrivateShareMiddleware::new())
        .oneshot(get("/shares/abc"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.headers().get(header::CACHE_CONTROL).is_none());

    let body: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body["error"], "Not found: /shares/abc");
}
