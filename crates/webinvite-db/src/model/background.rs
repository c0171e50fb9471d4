use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::double_option;
use crate::db::schema;

pub const DEFAULT_OPACITY: i32 = 85;
pub const DEFAULT_BLUR: i32 = 3;
pub const DEFAULT_OVERLAY_COLOR: &str = "#FFFFFF33";

/// Background styling of the invitation page.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Queryable, Selectable, Insertable,
)]
#[diesel(table_name = schema::backgrounds)]
pub struct Background {
    #[serde(default)]
    #[diesel(deserialize_as = Uuid)]
    pub id: Option<Uuid>,
    pub wedding_id: Uuid,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Percentage, 0–100.
    pub opacity: i32,
    /// Blur radius in pixels, 0–20.
    pub blur: i32,
    /// Hex colour with alpha, e.g. `#FFFFFF33`.
    pub overlay_color: String,
}

impl Background {
    #[must_use]
    pub fn defaults(wedding_id: Uuid) -> Self {
        Self {
            id: None,
            wedding_id,
            image_url: None,
            opacity: DEFAULT_OPACITY,
            blur: DEFAULT_BLUR,
            overlay_color: DEFAULT_OVERLAY_COLOR.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, AsChangeset)]
#[diesel(table_name = schema::backgrounds)]
#[serde(default)]
pub struct BackgroundChangeset {
    #[serde(deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blur: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay_color: Option<String>,
}

impl BackgroundChangeset {
    /// Copies every present field onto `target`.
    pub fn apply(&self, target: &mut Background) {
        if let Some(value) = &self.image_url {
            target.image_url.clone_from(value);
        }
        if let Some(value) = &self.opacity {
            target.opacity.clone_from(value);
        }
        if let Some(value) = &self.blur {
            target.blur.clone_from(value);
        }
        if let Some(value) = &self.overlay_color {
            target.overlay_color.clone_from(value);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.image_url.is_none()
            && self.opacity.is_none()
            && self.blur.is_none()
            && self.overlay_color.is_none()
    }
}

impl From<&Background> for BackgroundChangeset {
    /// A changeset that sets every column to the value in `background`.
    fn from(background: &Background) -> Self {
        Self {
            image_url: Some(background.image_url.clone()),
            opacity: Some(background.opacity),
            blur: Some(background.blur),
            overlay_color: Some(background.overlay_color.clone()),
        }
    }
}
