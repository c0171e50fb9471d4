use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::double_option;
use crate::db::schema;

pub const DEFAULT_EVENT_TITLE: &str = "New Event";
pub const DEFAULT_MARKER_COLOR: &str = "#FF6B6B";

/// One entry of the event schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Queryable, Selectable, Insertable)]
#[diesel(table_name = schema::events)]
pub struct Event {
    #[serde(default)]
    #[diesel(deserialize_as = Uuid)]
    pub id: Option<Uuid>,
    pub wedding_id: Uuid,
    pub title: String,
    #[serde(default)]
    pub event_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    pub marker_color: String,
}

impl Event {
    /// An unsaved event as appended by "add event".
    #[must_use]
    pub fn draft(wedding_id: Uuid) -> Self {
        Self {
            id: None,
            wedding_id,
            title: DEFAULT_EVENT_TITLE.to_string(),
            event_time: None,
            address: String::new(),
            description: None,
            latitude: None,
            longitude: None,
            marker_color: DEFAULT_MARKER_COLOR.to_string(),
        }
    }

    /// Coordinates, when both halves are known.
    #[must_use]
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, AsChangeset)]
#[diesel(table_name = schema::events)]
#[serde(default)]
pub struct EventChangeset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub event_time: Option<Option<DateTime<Utc>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub latitude: Option<Option<f64>>,
    #[serde(deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub longitude: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker_color: Option<String>,
}

impl EventChangeset {
    /// Copies every present field onto `target`.
    pub fn apply(&self, target: &mut Event) {
        if let Some(value) = &self.title {
            target.title.clone_from(value);
        }
        if let Some(value) = &self.event_time {
            target.event_time.clone_from(value);
        }
        if let Some(value) = &self.address {
            target.address.clone_from(value);
        }
        if let Some(value) = &self.description {
            target.description.clone_from(value);
        }
        if let Some(value) = &self.latitude {
            target.latitude.clone_from(value);
        }
        if let Some(value) = &self.longitude {
            target.longitude.clone_from(value);
        }
        if let Some(value) = &self.marker_color {
            target.marker_color.clone_from(value);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.event_time.is_none()
            && self.address.is_none()
            && self.description.is_none()
            && self.latitude.is_none()
            && self.longitude.is_none()
            && self.marker_color.is_none()
    }
}
