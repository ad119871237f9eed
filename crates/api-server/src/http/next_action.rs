use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use shared::models::NextActionRequest;
use tracing::{info, warn};

use super::AppState;
use super::errors::{json_rejection_response, validation_error_response};
use super::observability::RequestContext;

pub(super) async fn next_action(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    payload: Result<Json<NextActionRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            warn!(
                request_id = %ctx.request_id,
                "next-action body rejected: {}",
                rejection.body_text()
            );
            return json_rejection_response(rejection);
        }
    };

    match state.advice.next_action(&req).await {
        Ok(response) => {
            info!(
                request_id = %ctx.request_id,
                scenario = response.scenario.as_str(),
                plan = ?response.plan,
                stage = response.stage.label(),
                "next-action served"
            );
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => {
            info!(request_id = %ctx.request_id, "next-action rejected: {err}");
            validation_error_response(err)
        }
    }
}
