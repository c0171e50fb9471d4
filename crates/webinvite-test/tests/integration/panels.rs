//! Tests for the panel routes: guests, events, gifts, background, music and quote.
//!
//! Each request mounts the panel from the backend, applies one edit and saves.

use salvo::http::StatusCode;
use serde_json::json;
use uuid::Uuid;
use webinvite_test::component::db::memory::BackendCall;
use webinvite_test::component::util::invitation_code::is_valid_invitation_code;

use super::helpers::*;

// ============================================================================
// Guests
// ============================================================================

/// ## Summary
/// A whitespace-only name is rejected before any backend write.
#[test_log::test(tokio::test)]
async fn blank_guest_name_makes_no_backend_call() {
    let env = TestEnv::new();
    let wedding = env
        .seed_wedding(Uuid::new_v4(), ("Alice", "Bob"))
        .await
        .expect("Failed to seed wedding");

    let response = TestRequest::post(&format!("/api/weddings/{wedding}/guests"))
        .json(&json!({ "full_name": " \t " }))
        .send(&env.service)
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    assert_eq!(response.notification_titles(), vec!["Name required"]);
    assert_eq!(env.backend.count(Operation::Insert, Table::Guests), 0);
    assert!(env.guests(wedding).await.is_empty());
}

/// ## Summary
/// Adding a guest trims the name, stores a pending RSVP and a fresh code.
#[test_log::test(tokio::test)]
async fn add_guest_generates_code_and_link() {
    let env = TestEnv::new();
    let wedding = env
        .seed_wedding(Uuid::new_v4(), ("Alice", "Bob"))
        .await
        .expect("Failed to seed wedding");
    env.seed_guest(wedding, "Existing", "abcd1234")
        .await
        .expect("Failed to seed guest");

    let response = TestRequest::post(&format!("/api/weddings/{wedding}/guests"))
        .json(&json!({ "full_name": "  Jane Doe  " }))
        .send(&env.service)
        .await
        .assert_status(StatusCode::CREATED);

    let body = response.json();
    let guest = &body["data"];
    assert_eq!(guest["full_name"], "Jane Doe");
    assert_eq!(guest["rsvp_status"], "pending");
    assert_eq!(guest["status_label"], "Pending");
    let code = guest["invitation_code"].as_str().expect("code");
    assert!(is_valid_invitation_code(code), "bad code {code}");
    assert_ne!(code, "abcd1234");
    assert_eq!(
        guest["invitation_link"],
        format!("{TEST_ORIGIN}/invitation/{code}")
    );
    assert_eq!(
        response.notification_titles(),
        vec!["Guest added"]
    );

    let names: Vec<String> = env
        .guests(wedding)
        .await
        .into_iter()
        .map(|g| g.full_name)
        .collect();
    assert_eq!(names, vec!["Existing", "Jane Doe"]);
}

/// ## Summary
/// Deleting a saved guest issues a backend delete for that id.
#[test_log::test(tokio::test)]
async fn delete_guest_removes_remote_row() {
    let env = TestEnv::new();
    let wedding = env
        .seed_wedding(Uuid::new_v4(), ("Alice", "Bob"))
        .await
        .expect("Failed to seed wedding");
    let guest = env
        .seed_guest(wedding, "Jane", "jane0001")
        .await
        .expect("Failed to seed guest");

    let response = TestRequest::delete(&format!("/api/weddings/{wedding}/guests/{guest}"))
        .send(&env.service)
        .await
        .assert_status(StatusCode::OK);

    assert_eq!(response.notification_titles(), vec!["Guest removed"]);
    assert!(env.backend.calls().contains(&BackendCall {
        operation: Operation::Delete,
        table: Table::Guests,
        id: Some(guest),
    }));
    assert!(env.guests(wedding).await.is_empty());
}

/// ## Summary
/// A failed delete keeps the guest and reports an error.
#[test_log::test(tokio::test)]
async fn failed_guest_delete_keeps_guest() {
    let env = TestEnv::new();
    let wedding = env
        .seed_wedding(Uuid::new_v4(), ("Alice", "Bob"))
        .await
        .expect("Failed to seed wedding");
    let guest = env
        .seed_guest(wedding, "Jane", "jane0001")
        .await
        .expect("Failed to seed guest");
    env.backend.fail_on(Operation::Delete, Table::Guests);

    let response = TestRequest::delete(&format!("/api/weddings/{wedding}/guests/{guest}"))
        .send(&env.service)
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    assert_eq!(response.notification_kinds(), vec!["error"]);
    let guests = env.guests(wedding).await;
    assert_eq!(guests.len(), 1);
    assert_eq!(guests[0].id, Some(guest));
}

// ============================================================================
// Events and gifts
// ============================================================================

/// ## Summary
/// Saving without an id inserts; saving with the returned id updates in place.
#[test_log::test(tokio::test)]
async fn event_insert_then_update() {
    let env = TestEnv::new();
    let wedding = env
        .seed_wedding(Uuid::new_v4(), ("Alice", "Bob"))
        .await
        .expect("Failed to seed wedding");

    let created = TestRequest::post(&format!("/api/weddings/{wedding}/events"))
        .json(&json!({ "changes": { "title": "Reception" } }))
        .send(&env.service)
        .await
        .assert_status(StatusCode::CREATED)
        .json();
    assert_eq!(created["data"]["marker_color"], "#FF6B6B");
    let event_id = created["data"]["id"].as_str().expect("id").to_string();

    let updated = TestRequest::post(&format!("/api/weddings/{wedding}/events"))
        .json(&json!({ "id": event_id, "changes": { "address": "1 Main St" } }))
        .send(&env.service)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(updated["data"]["title"], "Reception");
    assert_eq!(updated["data"]["address"], "1 Main St");

    assert_eq!(env.backend.count(Operation::Insert, Table::Events), 1);
    assert_eq!(env.backend.count(Operation::Update, Table::Events), 1);
}

/// ## Summary
/// Unknown item ids are not found and reach no backend write.
#[test_log::test(tokio::test)]
async fn unknown_event_is_not_found() {
    let env = TestEnv::new();
    let wedding = env
        .seed_wedding(Uuid::new_v4(), ("Alice", "Bob"))
        .await
        .expect("Failed to seed wedding");

    let _ = TestRequest::delete(&format!(
        "/api/weddings/{wedding}/events/{}",
        Uuid::new_v4()
    ))
    .send(&env.service)
    .await
    .assert_status(StatusCode::NOT_FOUND);

    assert_eq!(env.backend.count(Operation::Delete, Table::Events), 0);
}

/// ## Summary
/// Gifts take registry defaults and can be removed again.
#[test_log::test(tokio::test)]
async fn gift_lifecycle() {
    let env = TestEnv::new();
    let wedding = env
        .seed_wedding(Uuid::new_v4(), ("Alice", "Bob"))
        .await
        .expect("Failed to seed wedding");

    let created = TestRequest::post(&format!("/api/weddings/{wedding}/gifts"))
        .json(&json!({ "changes": { "name": "Espresso machine", "status": "reserved" } }))
        .send(&env.service)
        .await
        .assert_status(StatusCode::CREATED)
        .json();
    let gift = &created["data"];
    assert_eq!(gift["priority"], "medium");
    assert_eq!(gift["status"], "reserved");
    assert_eq!(gift["category"], "home");
    let gift_id = gift["id"].as_str().expect("id").to_string();

    let response = TestRequest::delete(&format!("/api/weddings/{wedding}/gifts/{gift_id}"))
        .send(&env.service)
        .await
        .assert_status(StatusCode::OK);
    assert_eq!(response.notification_titles(), vec!["Gift deleted"]);
    assert!(env.backend.rows(Table::Gifts).is_empty());
}

// ============================================================================
// Settings
// ============================================================================

/// ## Summary
/// Out-of-range background values are clamped before they are saved.
#[test_log::test(tokio::test)]
async fn background_values_are_clamped() {
    let env = TestEnv::new();
    let wedding = env
        .seed_wedding(Uuid::new_v4(), ("Alice", "Bob"))
        .await
        .expect("Failed to seed wedding");

    let body = TestRequest::put(&format!("/api/weddings/{wedding}/background"))
        .json(&json!({ "opacity": 250, "blur": -4 }))
        .send(&env.service)
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(body["data"]["opacity"], 100);
    assert_eq!(body["data"]["blur"], 0);
    assert_eq!(body["data"]["overlay_color"], "#FFFFFF33");
    assert_eq!(env.backend.rows(Table::Backgrounds).len(), 1);
}

/// ## Summary
/// Music cannot be saved without a file.
#[test_log::test(tokio::test)]
async fn music_without_file_is_rejected() {
    let env = TestEnv::new();
    let wedding = env
        .seed_wedding(Uuid::new_v4(), ("Alice", "Bob"))
        .await
        .expect("Failed to seed wedding");

    let response = TestRequest::put(&format!("/api/weddings/{wedding}/music"))
        .json(&json!({ "autoplay": false }))
        .send(&env.service)
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    assert_eq!(response.notification_titles(), vec!["No music file"]);
    assert_eq!(env.backend.count(Operation::Insert, Table::Music), 0);
}

/// ## Summary
/// A blank quote clears the stored quote.
#[test_log::test(tokio::test)]
async fn blank_quote_clears_field() {
    let env = TestEnv::new();
    let wedding = env
        .seed_wedding(Uuid::new_v4(), ("Alice", "Bob"))
        .await
        .expect("Failed to seed wedding");

    let _ = TestRequest::put(&format!("/api/weddings/{wedding}/quote"))
        .json(&json!({ "quote": "Two hearts", "author": "Anon" }))
        .send(&env.service)
        .await
        .assert_status(StatusCode::OK);
    let body = TestRequest::put(&format!("/api/weddings/{wedding}/quote"))
        .json(&json!({ "quote": "   " }))
        .send(&env.service)
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert!(body["data"]["quote"].is_null());
    assert_eq!(body["data"]["author"], "Anon");
    let rows = env.backend.rows(Table::Weddings);
    assert!(rows[0]["quote"].is_null());
}
