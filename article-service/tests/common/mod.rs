#![allow(dead_code)]

use article_service::config::{ArticleConfig, CorsConfig, GoogleConfig, ModelConfig};
use article_service::services::providers::mock::MockTextProvider;
use article_service::{build_router, AppState};
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use secrecy::Secret;
use serde_json::Value;
use service_core::config::Config;
use std::sync::Arc;
use tower::util::ServiceExt;

pub const EMPTY_PROMPT_DETAIL: &str = "Prompt is required and cannot be empty";

pub fn test_config() -> ArticleConfig {
    ArticleConfig {
        common: Config { port: 0 },
        google: GoogleConfig {
            api_key: Secret::new("test-api-key".to_string()),
        },
        models: ModelConfig {
            text_model: "gemini-2.0-flash".to_string(),
            api_base: "http://127.0.0.1:9".to_string(),
        },
        cors: CorsConfig::default(),
    }
}

/// Router backed by the given mock provider.
pub fn test_app(provider: Arc<MockTextProvider>) -> Router {
    build_router(AppState::new(test_config(), provider))
}

pub async fn body_json(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    (status, body_json(response.into_body()).await)
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    post_raw(app, uri, body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, body: String) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    (status, body_json(response.into_body()).await)
}

/// POST without a `Content-Type` header.
pub async fn post_without_content_type(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    (status, body_json(response.into_body()).await)
}
