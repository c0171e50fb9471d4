use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::schema;

pub const DEFAULT_VOLUME: i32 = 75;

/// Background music played on the invitation page.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Queryable, Selectable, Insertable,
)]
#[diesel(table_name = schema::music)]
pub struct Music {
    #[serde(default)]
    #[diesel(deserialize_as = Uuid)]
    pub id: Option<Uuid>,
    pub wedding_id: Uuid,
    pub file_path: String,
    /// Percentage, 0–100.
    pub volume: i32,
    pub autoplay: bool,
}

impl Music {
    #[must_use]
    pub fn defaults(wedding_id: Uuid) -> Self {
        Self {
            id: None,
            wedding_id,
            file_path: String::new(),
            volume: DEFAULT_VOLUME,
            autoplay: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, AsChangeset)]
#[diesel(table_name = schema::music)]
#[serde(default)]
pub struct MusicChangeset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,
}

impl MusicChangeset {
    /// Copies every present field onto `target`.
    pub fn apply(&self, target: &mut Music) {
        if let Some(value) = &self.file_path {
            target.file_path.clone_from(value);
        }
        if let Some(value) = &self.volume {
            target.volume.clone_from(value);
        }
        if let Some(value) = &self.autoplay {
            target.autoplay.clone_from(value);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.file_path.is_none()
            && self.volume.is_none()
            && self.autoplay.is_none()
    }
}

impl From<&Music> for MusicChangeset {
    fn from(music: &Music) -> Self {
        Self {
            file_path: Some(music.file_path.clone()),
            volume: Some(music.volume),
            autoplay: Some(music.autoplay),
        }
    }
}
