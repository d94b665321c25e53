use axum::{body::Body, http::Request};
use tower::ServiceExt;

use storefront_api::{config::AppConfig, routes::build_app, state::AppState};

#[tokio::test]
async fn health_returns_ok() {
    let app = build_app(AppState::new(&AppConfig::default()));

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
}
