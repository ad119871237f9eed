use std::time::Instant;

use axum::extract::{MatchedPath, Request};
use axum::http::{HeaderMap, HeaderName, HeaderValue, Method};
use axum::middleware::Next;
use axum::response::Response;
use shared::validation::normalize_opaque_id;
use tracing::{info, warn};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";
const MAX_REQUEST_ID_LEN: usize = 128;

#[derive(Clone, Debug)]
pub(super) struct RequestContext {
    pub(super) request_id: String,
}

/// What gets logged once the response is ready.
struct RequestSummary {
    request_id: String,
    method: Method,
    route: String,
    started_at: Instant,
}

impl RequestSummary {
    fn begin(req: &Request) -> Self {
        let route = match req.extensions().get::<MatchedPath>() {
            Some(matched) => matched.as_str().to_string(),
            None => req.uri().path().to_string(),
        };
        Self {
            request_id: request_id_from_headers(req.headers()),
            method: req.method().clone(),
            route,
            started_at: Instant::now(),
        }
    }

    fn finish(self, response: &Response) {
        let status = response.status();
        let latency_ms = self.started_at.elapsed().as_millis() as u64;
        if status.is_server_error() {
            warn!(
                request_id = %self.request_id,
                method = %self.method,
                route = %self.route,
                status = status.as_u16(),
                latency_ms,
                "petcoach request failed"
            );
        } else {
            info!(
                request_id = %self.request_id,
                method = %self.method,
                route = %self.route,
                status = status.as_u16(),
                latency_ms,
                "petcoach request served"
            );
        }
    }
}

/// Tags every request with an id (the caller's when well formed), echoes it
/// back in the response and logs one line per request.
pub(super) async fn request_observability_middleware(mut req: Request, next: Next) -> Response {
    let summary = RequestSummary::begin(&req);
    req.extensions_mut().insert(RequestContext {
        request_id: summary.request_id.clone(),
    });

    let mut response = next.run(req).await;
    if let Ok(value) = HeaderValue::from_str(&summary.request_id) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }
    summary.finish(&response);
    response
}

fn request_id_from_headers(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|raw| normalize_opaque_id(raw, MAX_REQUEST_ID_LEN))
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}
