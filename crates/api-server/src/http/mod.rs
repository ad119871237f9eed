use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderName, HeaderValue, Method, header};
use axum::routing::{get, post};
use axum::{Router, middleware};
use shared::service::AdviceService;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

mod errors;
mod health;
mod next_action;
mod observability;

pub use observability::REQUEST_ID_HEADER;

const MAX_REQUEST_BODY_BYTES: usize = 64 * 1024;
const CORS_MAX_AGE_SECONDS: u64 = 3600;

#[derive(Clone)]
pub struct AppState {
    pub advice: AdviceService,
    pub cors_allowed_origin: String,
}

pub fn build_router(app_state: AppState) -> Router {
    let cors = cors_layer(&app_state.cors_allowed_origin);

    Router::new()
        .route("/health", get(health::health))
        .route("/next-action", post(next_action::next_action))
        .with_state(app_state)
        .layer(middleware::from_fn(
            observability::request_observability_middleware,
        ))
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_BYTES))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Single front-end origin with credentials; other origins get no CORS
/// headers. Methods and headers are listed explicitly because credentialed
/// CORS cannot use wildcards.
fn cors_layer(allowed_origin: &str) -> CorsLayer {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, request_id.clone()])
        .expose_headers([request_id])
        .allow_credentials(true)
        .max_age(Duration::from_secs(CORS_MAX_AGE_SECONDS));

    match HeaderValue::from_str(allowed_origin) {
        Ok(origin) => layer.allow_origin(AllowOrigin::list([origin])),
        Err(_) => {
            warn!("CORS origin '{allowed_origin}' is not a valid header value; cross-origin requests will be refused");
            layer
        }
    }
}
