mod support;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use serde_json::json;

use support::{error_code, error_fields, next_action, post_raw, send, test_app};

#[tokio::test]
async fn malformed_local_time_is_rejected() {
    let app = test_app();

    let response = next_action(
        &app.router,
        json!({
            "puppy_age_weeks": 12,
            "hours_since_last_potty": 1.5,
            "hours_since_last_meal": 2,
            "local_time": "25:99"
        }),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&response.body), Some("invalid_request"));
    assert_eq!(error_fields(&response.body), vec!["local_time"]);
    assert!(app.store.is_empty());
}

#[tokio::test]
async fn out_of_range_age_is_rejected() {
    let app = test_app();

    for age in [0, 5, 105, -3] {
        let response = next_action(
            &app.router,
            json!({
                "puppy_age_weeks": age,
                "hours_since_last_potty": 1,
                "hours_since_last_meal": 1,
                "local_time": "10:00"
            }),
        )
        .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "age {age}");
        assert_eq!(error_fields(&response.body), vec!["puppy_age_weeks"]);
    }
}

#[tokio::test]
async fn every_bad_field_is_reported_together() {
    let app = test_app();

    let response = next_action(
        &app.router,
        json!({
            "puppy_age_weeks": 200,
            "hours_since_last_potty": -1,
            "hours_since_last_meal": 2,
            "local_time": "noon",
            "session_id": "has spaces"
        }),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        error_fields(&response.body),
        vec![
            "puppy_age_weeks",
            "hours_since_last_potty",
            "local_time",
            "session_id"
        ]
    );
}

#[tokio::test]
async fn missing_time_reference_is_rejected() {
    let app = test_app();

    let response = next_action(
        &app.router,
        json!({
            "puppy_age_weeks": 12,
            "hours_since_last_potty": 1.5,
            "hours_since_last_meal": 2
        }),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(error_fields(&response.body), vec!["local_time"]);
}

#[tokio::test]
async fn unknown_time_zone_is_rejected() {
    let app = test_app();

    let response = next_action(
        &app.router,
        json!({
            "puppy_age_weeks": 12,
            "hours_since_last_potty": 1.5,
            "hours_since_last_meal": 2,
            "time_zone": "Mars/Olympus_Mons"
        }),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(error_fields(&response.body), vec!["time_zone"]);
}

#[tokio::test]
async fn unparseable_body_is_invalid_json() {
    let app = test_app();

    let broken = send(&app.router, post_raw("/next-action", "{\"puppy_age_weeks\": ")).await;
    assert_eq!(broken.status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&broken.body), Some("invalid_json"));

    let missing_field = next_action(
        &app.router,
        json!({ "puppy_age_weeks": 12, "local_time": "10:00" }),
    )
    .await;
    assert_eq!(missing_field.status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&missing_field.body), Some("invalid_json"));

    let wrong_type = next_action(
        &app.router,
        json!({
            "puppy_age_weeks": "twelve",
            "hours_since_last_potty": 1,
            "hours_since_last_meal": 1,
            "local_time": "10:00"
        }),
    )
    .await;
    assert_eq!(wrong_type.status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&wrong_type.body), Some("invalid_json"));
}

#[tokio::test]
async fn non_json_content_type_is_refused() {
    let app = test_app();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/next-action")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from("puppy"))
        .expect("request should build");
    let response = send(&app.router, request).await;

    assert_eq!(response.status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(error_code(&response.body), Some("unsupported_media_type"));
}
