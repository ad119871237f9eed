#![allow(dead_code)]

use std::sync::Arc;

use api_server::http::{AppState, build_router};
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use chrono::{DateTime, Duration, Utc};
use serde_json::{Value, json};
use shared::clock::ManualClock;
use shared::service::AdviceService;
use shared::session_memo::InMemorySessionMemoStore;
use tower::ServiceExt;

pub const TEST_ORIGIN: &str = "http://localhost:5173";
pub const SESSION_TTL_MINUTES: i64 = 60;

pub struct TestApp {
    pub router: axum::Router,
    pub clock: ManualClock,
    pub store: InMemorySessionMemoStore,
}

pub fn test_app() -> TestApp {
    let start = DateTime::parse_from_rfc3339("2026-03-02T15:00:00Z")
        .expect("start instant should parse")
        .with_timezone(&Utc);
    let ttl = Duration::minutes(SESSION_TTL_MINUTES);
    let clock = ManualClock::new(start);
    let store = InMemorySessionMemoStore::new(ttl);

    let router = build_router(AppState {
        advice: AdviceService::new(Arc::new(store.clone()), Arc::new(clock.clone()), ttl),
        cors_allowed_origin: TEST_ORIGIN.to_string(),
    });

    TestApp {
        router,
        clock,
        store,
    }
}

pub struct JsonResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Value,
}

pub async fn send(app: &axum::Router, request: Request<Body>) -> JsonResponse {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("request should succeed");
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body should read");
    let body = serde_json::from_slice::<Value>(&body).unwrap_or_else(|_| json!({}));

    JsonResponse {
        status,
        headers,
        body,
    }
}

pub fn get(path: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(path)
        .header(header::ACCEPT, "application/json")
        .body(Body::empty())
        .expect("integration request should build")
}

pub fn post_json(path: &str, body: &Value) -> Request<Body> {
    post_raw(
        path,
        serde_json::to_vec(body).expect("json body should serialize for integration request"),
    )
}

pub fn post_raw(path: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(path)
        .header(header::ACCEPT, "application/json")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .expect("integration request should build")
}

pub async fn next_action(app: &axum::Router, body: Value) -> JsonResponse {
    send(app, post_json("/next-action", &body)).await
}

pub fn error_code(body: &Value) -> Option<&str> {
    body.get("error")?.get("code")?.as_str()
}

pub fn error_fields(body: &Value) -> Vec<String> {
    body.get("error")
        .and_then(|error| error.get("fields"))
        .and_then(Value::as_array)
        .map(|fields| {
            fields
                .iter()
                .filter_map(|field| field.get("field")?.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
