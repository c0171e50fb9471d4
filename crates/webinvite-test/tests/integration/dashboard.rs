//! Tests for the invitation dashboard routes.
//!
//! Verifies listing by owner, creation defaults and failure reporting.

use chrono::Datelike;
use salvo::http::StatusCode;
use uuid::Uuid;

use super::helpers::*;

/// ## Summary
/// Invitations are listed newest first and only for their owner.
#[test_log::test(tokio::test)]
async fn list_returns_owner_weddings_newest_first() {
    let env = TestEnv::new();
    let owner = Uuid::new_v4();
    let older = env
        .seed_wedding(owner, ("Alice", "Bob"))
        .await
        .expect("Failed to seed wedding");
    let newer = env
        .seed_wedding(owner, ("Carol", "Dave"))
        .await
        .expect("Failed to seed wedding");
    env.seed_wedding(Uuid::new_v4(), ("Eve", "Frank"))
        .await
        .expect("Failed to seed wedding");

    let response = TestRequest::get(&format!("/api/weddings?owner={owner}"))
        .send(&env.service)
        .await
        .assert_status(StatusCode::OK);

    let body = response.json();
    let ids: Vec<String> = body["data"]
        .as_array()
        .expect("data should be a list")
        .iter()
        .filter_map(|w| w["id"].as_str().map(str::to_string))
        .collect();
    assert_eq!(ids, vec![newer.to_string(), older.to_string()]);
}

/// ## Summary
/// A new invitation starts with placeholder names, no date and a footer for the current year.
#[test_log::test(tokio::test)]
async fn create_uses_placeholder_defaults() {
    let env = TestEnv::new();
    let owner = Uuid::new_v4();

    let response = TestRequest::post("/api/weddings")
        .json(&serde_json::json!({ "owner": owner }))
        .send(&env.service)
        .await
        .assert_status(StatusCode::CREATED);

    let body = response.json();
    let wedding = &body["data"];
    assert_eq!(wedding["couple1_name"], "Partner 1");
    assert_eq!(wedding["couple2_name"], "Partner 2");
    assert!(wedding["wedding_date"].is_null());
    let year = chrono::Utc::now().year();
    assert_eq!(wedding["copyright_text"], format!("© {year} YourBrand"));
    assert_eq!(wedding["user_id"], owner.to_string());
    assert_eq!(response.notification_titles(), vec!["Wedding created"]);
    assert_eq!(env.backend.count(Operation::Insert, Table::Weddings), 1);
}

/// ## Summary
/// A rejected insert surfaces as an error notification and nothing is listed.
#[test_log::test(tokio::test)]
async fn create_failure_reports_error_notification() {
    let env = TestEnv::new();
    let owner = Uuid::new_v4();
    env.backend.fail_on(Operation::Insert, Table::Weddings);

    let response = TestRequest::post("/api/weddings")
        .json(&serde_json::json!({ "owner": owner }))
        .send(&env.service)
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.notification_kinds(), vec!["error"]);

    env.backend.heal();
    let response = TestRequest::get(&format!("/api/weddings?owner={owner}"))
        .send(&env.service)
        .await
        .assert_status(StatusCode::OK);
    assert_eq!(response.json()["data"], serde_json::json!([]));
}

/// ## Summary
/// A malformed body or owner is a client error.
#[test_log::test(tokio::test)]
async fn malformed_requests_are_rejected() {
    let env = TestEnv::new();

    let _ = TestRequest::post("/api/weddings")
        .json(&serde_json::json!({ "owner": "nobody" }))
        .send(&env.service)
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let _ = TestRequest::get("/api/weddings?owner=nobody")
        .send(&env.service)
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    assert!(env.backend.calls().is_empty());
}
