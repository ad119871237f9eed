use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use shared::models::{ErrorBody, ErrorResponse, FieldError};
use shared::validation::ValidationError;

fn error_response(
    status: StatusCode,
    code: &str,
    message: &str,
    fields: Vec<FieldError>,
) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: message.to_string(),
                fields,
            },
        }),
    )
        .into_response()
}

pub(super) fn bad_request_response(code: &str, message: &str) -> Response {
    error_response(StatusCode::BAD_REQUEST, code, message, Vec::new())
}

pub(super) fn validation_error_response(err: ValidationError) -> Response {
    error_response(
        StatusCode::BAD_REQUEST,
        "invalid_request",
        "One or more fields are invalid",
        err.fields,
    )
}

pub(super) fn json_rejection_response(rejection: JsonRejection) -> Response {
    match rejection {
        JsonRejection::MissingJsonContentType(_) => error_response(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "unsupported_media_type",
            "Expected a request body with content-type application/json",
            Vec::new(),
        ),
        other => bad_request_response("invalid_json", &other.body_text()),
    }
}
