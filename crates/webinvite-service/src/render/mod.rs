//! Read-only projection of the preview store into what the microsite shows.

use serde::Serialize;
use webinvite_db::model::{Background, Event, Wedding};

use crate::preview::PreviewData;

pub mod format;
pub mod html;

pub use html::render_html;

/// Number of events listed before the "+N more events" line.
pub const EVENT_EXCERPT_LEN: usize = 3;
pub const PLACEHOLDER_MONOGRAM: &str = "A&B";
pub const EMPTY_MESSAGE: &str = "Select a wedding to preview";
pub const WELCOME_TITLE: &str = "You're Invited!";
pub const WELCOME_MESSAGE: &str = "Join us as we celebrate our special day";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PreviewView {
    /// No invitation is selected.
    Empty { message: &'static str },
    Invitation(Box<InvitationView>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvitationView {
    pub background: Option<BackgroundLayer>,
    pub overlay: Option<OverlayLayer>,
    pub monogram: String,
    pub couple1_name: String,
    pub couple2_name: String,
    pub date: Option<String>,
    pub welcome_title: &'static str,
    pub welcome_message: &'static str,
    pub events: Vec<EventLine>,
    /// `+N more events`, when the schedule is longer than the excerpt.
    pub more_events: Option<String>,
    pub quote: Option<QuoteView>,
    pub footer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BackgroundLayer {
    pub image_url: String,
    /// `0.0..=1.0`.
    pub opacity: f64,
    pub blur_px: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayLayer {
    /// Colour exactly as configured, alpha included.
    pub color: String,
    /// Alpha channel of `color` in `0.0..=1.0`, if it could be parsed.
    pub alpha: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventLine {
    pub title: String,
    pub time: Option<String>,
    pub marker_color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteView {
    pub text: String,
    pub author: Option<String>,
}

/// Uppercase initials of both parties, `A&B` when there is no invitation.
#[must_use]
pub fn monogram(wedding: Option<&Wedding>) -> String {
    let initial = |name: &str| name.chars().next().map(char::to_uppercase);
    match wedding {
        Some(w) => {
            let mut out = String::new();
            out.extend(initial(&w.couple1_name).into_iter().flatten());
            out.push('&');
            out.extend(initial(&w.couple2_name).into_iter().flatten());
            out
        }
        None => PLACEHOLDER_MONOGRAM.to_string(),
    }
}

/// Alpha channel of a `#RRGGBBAA` (or `#RGBA`) colour; `#RRGGBB`/`#RGB` are opaque.
#[must_use]
pub fn overlay_alpha(color: &str) -> Option<f64> {
    let hex = color.strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let alpha = match hex.len() {
        3 | 6 => return Some(1.0),
        4 => u8::from_str_radix(&hex[3..4].repeat(2), 16).ok()?,
        8 => u8::from_str_radix(&hex[6..8], 16).ok()?,
        _ => return None,
    };
    Some(f64::from(alpha) / 255.0)
}

fn background_layer(background: &Background) -> Option<BackgroundLayer> {
    background.image_url.as_ref().map(|url| BackgroundLayer {
        image_url: url.clone(),
        opacity: f64::from(background.opacity.clamp(0, 100)) / 100.0,
        blur_px: background.blur,
    })
}

fn event_line(event: &Event) -> EventLine {
    EventLine {
        title: event.title.clone(),
        time: event.event_time.map(format::event_time),
        marker_color: event.marker_color.clone(),
    }
}

/// ## Summary
/// Projects `data` into a view, falling back to `selected` when the store
/// holds no invitation.
#[must_use]
pub fn render(data: &PreviewData, selected: Option<&Wedding>) -> PreviewView {
    let Some(wedding) = data.wedding.as_ref().or(selected) else {
        return PreviewView::Empty {
            message: EMPTY_MESSAGE,
        };
    };

    let hidden = data.events.len().saturating_sub(EVENT_EXCERPT_LEN);
    let quote = wedding
        .quote
        .as_ref()
        .filter(|q| !q.trim().is_empty())
        .map(|text| QuoteView {
            text: text.clone(),
            author: wedding.quote_author.clone(),
        });

    PreviewView::Invitation(Box::new(InvitationView {
        background: data.background.as_ref().and_then(background_layer),
        overlay: data.background.as_ref().map(|b| OverlayLayer {
            color: b.overlay_color.clone(),
            alpha: overlay_alpha(&b.overlay_color),
        }),
        monogram: monogram(Some(wedding)),
        couple1_name: wedding.couple1_name.clone(),
        couple2_name: wedding.couple2_name.clone(),
        date: wedding.wedding_date.map(format::long_date),
        welcome_title: WELCOME_TITLE,
        welcome_message: WELCOME_MESSAGE,
        events: data
            .events
            .iter()
            .take(EVENT_EXCERPT_LEN)
            .map(event_line)
            .collect(),
        more_events: (hidden > 0).then(|| format!("+{hidden} more events")),
        quote,
        footer: wedding.copyright_text.clone(),
    }))
}

#[cfg(test)]
mod tests;
