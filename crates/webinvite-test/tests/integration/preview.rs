//! End-to-end tests of the live preview, through the JSON and HTML routes.

use chrono::{Duration, NaiveDate, Utc};
use salvo::http::StatusCode;
use serde_json::json;
use uuid::Uuid;
use webinvite_test::component::db::records::update_partial;
use webinvite_test::component::model::WeddingChangeset;
use webinvite_test::component::preview::{PreviewData, storage_key};
use webinvite_test::component::storage::LocalStorage;

use super::helpers::*;

async fn save_event(env: &TestEnv, wedding: Uuid, title: &str, days_ahead: i64) {
    let when = Utc::now() + Duration::days(days_ahead);
    let _ = TestRequest::post(&format!("/api/weddings/{wedding}/events"))
        .json(&json!({ "changes": { "title": title, "event_time": when } }))
        .send(&env.service)
        .await
        .assert_status(StatusCode::CREATED);
}

/// ## Summary
/// Create an invitation, add a future "Ceremony": the excerpt lists it with no overflow line.
#[test_log::test(tokio::test)]
async fn new_event_appears_in_excerpt() {
    let env = TestEnv::new();
    let wedding = env.create_wedding(Uuid::new_v4()).await;

    save_event(&env, wedding, "Ceremony", 30).await;

    let preview = env.preview(wedding).await;
    assert_eq!(preview["kind"], "invitation");
    let events = preview["events"].as_array().expect("events");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["title"], "Ceremony");
    assert!(events[0]["time"].is_string());
    assert!(preview["more_events"].is_null());
}

/// ## Summary
/// Only the three earliest events are shown, followed by a count of the rest.
#[test_log::test(tokio::test)]
async fn excerpt_truncates_to_three_events() {
    let env = TestEnv::new();
    let wedding = env.create_wedding(Uuid::new_v4()).await;

    for (title, days) in [("Brunch", 4), ("Ceremony", 1), ("Party", 3), ("Rehearsal", 2)] {
        save_event(&env, wedding, title, days).await;
    }

    let preview = env.preview(wedding).await;
    let titles: Vec<&str> = preview["events"]
        .as_array()
        .expect("events")
        .iter()
        .filter_map(|e| e["title"].as_str())
        .collect();
    assert_eq!(titles, vec!["Ceremony", "Rehearsal", "Party"]);
    assert_eq!(preview["more_events"], "+1 more events");
}

/// ## Summary
/// Background opacity 0 hides the image layer but leaves the overlay alpha alone.
#[test_log::test(tokio::test)]
async fn zero_opacity_keeps_overlay_alpha() {
    let env = TestEnv::new();
    let wedding = env.create_wedding(Uuid::new_v4()).await;

    let _ = TestRequest::put(&format!("/api/weddings/{wedding}/background"))
        .json(&json!({ "image_url": "https://img.example/bg.jpg", "opacity": 0 }))
        .send(&env.service)
        .await
        .assert_status(StatusCode::OK);

    let preview = env.preview(wedding).await;
    assert_eq!(preview["background"]["opacity"].as_f64(), Some(0.0));
    assert_eq!(preview["overlay"]["color"], "#FFFFFF33");
    let alpha = preview["overlay"]["alpha"].as_f64().expect("alpha");
    assert!((alpha - 0.2).abs() < 1e-9, "alpha was {alpha}");
}

/// ## Summary
/// Names, monogram and long date come from the invitation record.
#[test_log::test(tokio::test)]
async fn header_shows_monogram_and_date() {
    let env = TestEnv::new();
    let wedding = env
        .seed_wedding(Uuid::new_v4(), ("alice", "Bob"))
        .await
        .expect("Failed to seed wedding");
    let changes = WeddingChangeset {
        wedding_date: Some(NaiveDate::from_ymd_opt(2030, 6, 14)),
        ..WeddingChangeset::default()
    };
    update_partial(&env.backend, Table::Weddings, wedding, &changes)
        .await
        .expect("Failed to set date");

    let preview = env.preview(wedding).await;
    assert_eq!(preview["monogram"], "A&B");
    assert_eq!(preview["couple1_name"], "alice");
    assert_eq!(preview["date"], "June 14, 2030");
    assert_eq!(preview["footer"], "© 2030 YourBrand");
}

/// ## Summary
/// Rendering the preview leaves a snapshot in local storage under the invitation's key.
#[test_log::test(tokio::test)]
async fn preview_snapshot_is_persisted() {
    let env = TestEnv::new();
    let wedding = env.create_wedding(Uuid::new_v4()).await;
    save_event(&env, wedding, "Ceremony", 10).await;

    let _ = env.preview(wedding).await;

    let bytes = env
        .storage
        .get(&storage_key(wedding))
        .expect("storage read")
        .expect("snapshot present");
    let snapshot: PreviewData = serde_json::from_slice(&bytes).expect("snapshot parses");
    assert_eq!(snapshot.wedding.and_then(|w| w.id), Some(wedding));
    assert_eq!(snapshot.events.len(), 1);
    assert_eq!(snapshot.events[0].title, "Ceremony");
}

/// ## Summary
/// The HTML page escapes names and falls back to the empty preview for unknown ids.
#[test_log::test(tokio::test)]
async fn html_preview_page() {
    let env = TestEnv::new();
    let wedding = env
        .seed_wedding(Uuid::new_v4(), ("Tom <3", "Jerry"))
        .await
        .expect("Failed to seed wedding");

    let _ = TestRequest::get(&format!("/preview/{wedding}"))
        .send(&env.service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_contains("Tom &lt;3")
        .assert_body_contains("Invited!")
        .assert_body_not_contains("Select a wedding to preview");

    let _ = TestRequest::get(&format!("/preview/{}", Uuid::new_v4()))
        .send(&env.service)
        .await
        .assert_status(StatusCode::NOT_FOUND)
        .assert_body_contains("Select a wedding to preview");
}
