use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::double_option;
use crate::db::{
    enums::{GiftPriority, GiftStatus},
    schema,
};

pub const DEFAULT_GIFT_CATEGORY: &str = "home";

/// An item on the gift registry.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Queryable, Selectable, Insertable,
)]
#[diesel(table_name = schema::gifts)]
pub struct Gift {
    #[serde(default)]
    #[diesel(deserialize_as = Uuid)]
    pub id: Option<Uuid>,
    pub wedding_id: Uuid,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price_range: String,
    #[serde(default)]
    pub priority: GiftPriority,
    #[serde(default)]
    pub status: GiftStatus,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub store_name: Option<String>,
    #[serde(default)]
    pub store_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Gift {
    /// An unsaved, empty registry item.
    #[must_use]
    pub fn draft(wedding_id: Uuid) -> Self {
        Self {
            id: None,
            wedding_id,
            name: String::new(),
            description: String::new(),
            price_range: String::new(),
            priority: GiftPriority::Medium,
            status: GiftStatus::Available,
            category: Some(DEFAULT_GIFT_CATEGORY.to_string()),
            store_name: None,
            store_url: None,
            image_url: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, AsChangeset)]
#[diesel(table_name = schema::gifts)]
#[serde(default)]
pub struct GiftChangeset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<GiftPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<GiftStatus>,
    #[serde(deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub category: Option<Option<String>>,
    #[serde(deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub store_name: Option<Option<String>>,
    #[serde(deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub store_url: Option<Option<String>>,
    #[serde(deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<Option<String>>,
}

impl GiftChangeset {
    /// Copies every present field onto `target`.
    pub fn apply(&self, target: &mut Gift) {
        if let Some(value) = &self.name {
            target.name.clone_from(value);
        }
        if let Some(value) = &self.description {
            target.description.clone_from(value);
        }
        if let Some(value) = &self.price_range {
            target.price_range.clone_from(value);
        }
        if let Some(value) = &self.priority {
            target.priority.clone_from(value);
        }
        if let Some(value) = &self.status {
            target.status.clone_from(value);
        }
        if let Some(value) = &self.category {
            target.category.clone_from(value);
        }
        if let Some(value) = &self.store_name {
            target.store_name.clone_from(value);
        }
        if let Some(value) = &self.store_url {
            target.store_url.clone_from(value);
        }
        if let Some(value) = &self.image_url {
            target.image_url.clone_from(value);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price_range.is_none()
            && self.priority.is_none()
            && self.status.is_none()
            && self.category.is_none()
            && self.store_name.is_none()
            && self.store_url.is_none()
            && self.image_url.is_none()
    }
}
