mod support;

use axum::http::StatusCode;
use chrono::Duration;
use serde_json::{Value, json};
use shared::advice::Scenario;

use support::{next_action, test_app};

fn potty_request(session_id: Option<&str>) -> Value {
    let mut body = json!({
        "puppy_age_weeks": 12,
        "hours_since_last_potty": 1.5,
        "hours_since_last_meal": 2,
        "local_time": "10:00"
    });
    if let Some(session_id) = session_id {
        body["session_id"] = json!(session_id);
    }
    body
}

#[tokio::test]
async fn repeated_scenario_switches_to_plan_b_until_memo_expires() {
    let app = test_app();

    let first = next_action(&app.router, potty_request(Some("kitchen-tablet"))).await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body["plan"], "a");
    assert_eq!(first.body["session_id"], "kitchen-tablet");

    app.clock.advance(Duration::minutes(5));
    let second = next_action(&app.router, potty_request(Some("kitchen-tablet"))).await;
    assert_eq!(second.status, StatusCode::OK);
    assert_eq!(second.body["scenario"], "potty");
    assert_eq!(second.body["plan"], "b");
    assert_ne!(second.body["action"], first.body["action"]);
    assert!(
        second.body["action"]
            .as_str()
            .is_some_and(|action| action.to_lowercase().contains("potty"))
    );

    app.clock.advance(Duration::minutes(61));
    let third = next_action(&app.router, potty_request(Some("kitchen-tablet"))).await;
    assert_eq!(third.status, StatusCode::OK);
    assert_eq!(third.body["plan"], "a");
}

#[tokio::test]
async fn plan_b_repeats_while_scenario_keeps_recurring() {
    let app = test_app();

    let mut plans = Vec::new();
    for _ in 0..4 {
        let response = next_action(&app.router, potty_request(Some("repeat-session"))).await;
        assert_eq!(response.status, StatusCode::OK);
        plans.push(response.body["plan"].as_str().unwrap_or_default().to_string());
        app.clock.advance(Duration::minutes(10));
    }

    assert_eq!(plans, vec!["a", "b", "b", "b"]);
}

#[tokio::test]
async fn different_scenario_resets_to_plan_a() {
    let app = test_app();

    next_action(&app.router, potty_request(Some("switcher"))).await;
    let play = next_action(
        &app.router,
        json!({
            "puppy_age_weeks": 30,
            "hours_since_last_potty": 0.5,
            "hours_since_last_meal": 2,
            "local_time": "14:00",
            "session_id": "switcher"
        }),
    )
    .await;

    assert_eq!(play.status, StatusCode::OK);
    assert_eq!(play.body["scenario"], "play_time");
    assert_eq!(play.body["plan"], "a");
    assert_eq!(
        app.store.peek("switcher").map(|memo| memo.scenario),
        Some(Scenario::PlayTime)
    );
}

#[tokio::test]
async fn sessions_do_not_share_memos() {
    let app = test_app();

    let (first, second) = tokio::join!(
        next_action(&app.router, potty_request(Some("household-one"))),
        next_action(&app.router, potty_request(Some("household-two"))),
    );
    assert_eq!(first.body["plan"], "a");
    assert_eq!(second.body["plan"], "a");

    let again = next_action(&app.router, potty_request(Some("household-two"))).await;
    assert_eq!(again.body["plan"], "b");
    assert_eq!(app.store.len(), 2);
}

#[tokio::test]
async fn missing_session_id_is_generated_and_reusable() {
    let app = test_app();

    let first = next_action(&app.router, potty_request(None)).await;
    assert_eq!(first.status, StatusCode::OK);
    let session_id = first.body["session_id"]
        .as_str()
        .expect("generated session id should be returned")
        .to_string();
    assert!(uuid::Uuid::parse_str(&session_id).is_ok());
    assert_eq!(first.body["plan"], "a");

    let second = next_action(&app.router, potty_request(Some(&session_id))).await;
    assert_eq!(second.body["session_id"], session_id.as_str());
    assert_eq!(second.body["plan"], "b");

    let anonymous = next_action(&app.router, potty_request(None)).await;
    assert_eq!(anonymous.body["plan"], "a");
    assert_ne!(anonymous.body["session_id"], session_id.as_str());
}

fn play_request(session_id: &str) -> Value {
    json!({
        "puppy_age_weeks": 30,
        "hours_since_last_potty": 0.5,
        "hours_since_last_meal": 2,
        "local_time": "14:00",
        "session_id": session_id
    })
}

#[tokio::test]
async fn racing_requests_on_one_session_keep_the_last_write() {
    let app = test_app();

    let (potty, play) = tokio::join!(
        next_action(&app.router, potty_request(Some("shared-phone"))),
        next_action(&app.router, play_request("shared-phone")),
    );
    assert_eq!(potty.status, StatusCode::OK);
    assert_eq!(play.status, StatusCode::OK);
    assert_eq!(potty.body["scenario"], "potty");
    assert_eq!(play.body["scenario"], "play_time");

    let stored = app
        .store
        .peek("shared-phone")
        .map(|memo| memo.scenario)
        .expect("one of the writes should be stored");
    assert!(matches!(stored, Scenario::Potty | Scenario::PlayTime));
    assert_eq!(app.store.len(), 1);

    app.clock.advance(Duration::minutes(1));
    let follow_up = next_action(&app.router, potty_request(Some("shared-phone"))).await;
    assert_eq!(follow_up.status, StatusCode::OK);
    let expected_plan = if stored == Scenario::Potty { "b" } else { "a" };
    assert_eq!(follow_up.body["plan"], expected_plan);
}

#[tokio::test]
async fn anonymous_sessions_do_not_pile_up_after_expiry() {
    let app = test_app();

    for _ in 0..50 {
        let response = next_action(&app.router, potty_request(None)).await;
        assert_eq!(response.status, StatusCode::OK);
    }
    assert_eq!(app.store.len(), 50);

    app.clock.advance(Duration::days(30));
    for _ in 0..3 {
        next_action(&app.router, potty_request(None)).await;
    }
    assert_eq!(app.store.len(), 3);
}
