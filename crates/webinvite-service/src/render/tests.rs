use chrono::{NaiveDate, TimeZone, Utc};
use uuid::Uuid;
use webinvite_db::model::{Background, Event, Wedding};

use super::*;

fn wedding() -> Wedding {
    Wedding {
        id: Some(Uuid::new_v4()),
        user_id: Uuid::new_v4(),
        couple1_name: "alice".to_string(),
        couple2_name: "Bob".to_string(),
        wedding_date: NaiveDate::from_ymd_opt(2025, 6, 14),
        copyright_text: Some("© 2025 YourBrand".to_string()),
        quote: Some("Love is patient".to_string()),
        quote_author: Some("Corinthians".to_string()),
    }
}

fn invitation(view: PreviewView) -> InvitationView {
    match view {
        PreviewView::Invitation(invitation) => *invitation,
        PreviewView::Empty { .. } => panic!("expected an invitation"),
    }
}

#[test]
fn test_monogram() {
    let mut w = wedding();
    w.couple1_name = "Alice".to_string();
    assert_eq!(monogram(Some(&w)), "A&B");
    w.couple1_name = "élodie".to_string();
    assert_eq!(monogram(Some(&w)), "É&B");
    assert_eq!(monogram(None), "A&B");
}

#[test]
fn test_empty_without_any_invitation() {
    let view = render(&PreviewData::default(), None);
    assert_eq!(
        view,
        PreviewView::Empty {
            message: "Select a wedding to preview"
        }
    );
}

#[test]
fn test_falls_back_to_selected_invitation() {
    let selected = wedding();
    let view = invitation(render(&PreviewData::default(), Some(&selected)));
    assert_eq!(view.monogram, "A&B");
    assert_eq!(view.couple1_name, "alice");
    assert_eq!(view.date.as_deref(), Some("June 14, 2025"));
    assert_eq!(view.footer.as_deref(), Some("© 2025 YourBrand"));
    assert!(view.background.is_none());
    assert!(view.overlay.is_none());
}

#[test]
fn test_store_invitation_wins_over_selected() {
    let mut stored = wedding();
    stored.couple1_name = "Zoe".to_string();
    let data = PreviewData {
        wedding: Some(stored),
        ..PreviewData::default()
    };
    let view = invitation(render(&data, Some(&wedding())));
    assert_eq!(view.monogram, "Z&B");
    assert_eq!(
        view.quote,
        Some(QuoteView {
            text: "Love is patient".to_string(),
            author: Some("Corinthians".to_string()),
        })
    );
}

#[test]
fn test_event_excerpt_truncates() {
    let w = wedding();
    let wedding_id = w.id.expect("id");
    let events = (0..5)
        .map(|i| {
            let mut event = Event::draft(wedding_id);
            event.title = format!("Event {i}");
            event.event_time = Some(Utc.with_ymd_and_hms(2025, 6, 14, 16, 30, 0).unwrap());
            event
        })
        .collect();
    let data = PreviewData {
        wedding: Some(w),
        events,
        ..PreviewData::default()
    };

    let view = invitation(render(&data, None));
    assert_eq!(view.events.len(), 3);
    assert_eq!(view.events[2].title, "Event 2");
    assert_eq!(view.events[0].time.as_deref(), Some("Jun 14, 4:30 PM"));
    assert_eq!(view.more_events.as_deref(), Some("+2 more events"));
}

#[test]
fn test_background_layers() {
    let w = wedding();
    let mut background = Background::defaults(w.id.expect("id"));
    let mut data = PreviewData {
        wedding: Some(w),
        background: Some(background.clone()),
        ..PreviewData::default()
    };

    let view = invitation(render(&data, None));
    assert!(view.background.is_none());
    let overlay = view.overlay.expect("overlay");
    assert_eq!(overlay.color, "#FFFFFF33");
    assert_eq!(overlay.alpha, Some(f64::from(0x33_u8) / 255.0));

    background.image_url = Some("https://img.example/bg.jpg".to_string());
    background.opacity = 0;
    background.blur = 7;
    data.background = Some(background);

    let view = invitation(render(&data, None));
    let layer = view.background.expect("layer");
    assert!(layer.opacity.abs() < f64::EPSILON);
    assert_eq!(layer.blur_px, 7);
    assert_eq!(view.overlay.expect("overlay").color, "#FFFFFF33");
}

#[test]
fn test_overlay_alpha_parsing() {
    assert_eq!(overlay_alpha("#000000"), Some(1.0));
    assert_eq!(overlay_alpha("#0000"), Some(0.0));
    assert_eq!(overlay_alpha("#000000FF"), Some(1.0));
    assert_eq!(overlay_alpha("rgba(0,0,0,0.5)"), None);
    assert_eq!(overlay_alpha("#12345"), None);
}

#[test]
fn test_html_contains_view() {
    let data = PreviewData {
        wedding: Some(wedding()),
        ..PreviewData::default()
    };
    let html = render_html(&render(&data, None));
    assert!(html.contains("<div class=\"monogram\">A&amp;B</div>"));
    assert!(html.contains("June 14, 2025"));
    assert!(html.contains("<cite>Corinthians</cite>"));
    assert!(!html.contains("class=\"events\""));
}
