use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::double_option;
use crate::db::{enums::RsvpStatus, schema};

/// A guest on the invitation list.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Queryable, Selectable, Insertable,
)]
#[diesel(table_name = schema::guests)]
pub struct Guest {
    #[serde(default)]
    #[diesel(deserialize_as = Uuid)]
    pub id: Option<Uuid>,
    pub wedding_id: Uuid,
    pub full_name: String,
    pub invitation_code: String,
    #[serde(default)]
    pub rsvp_status: RsvpStatus,
    #[serde(default)]
    pub meal_preference: Option<String>,
    #[serde(default)]
    pub allergies: Option<String>,
    #[serde(default)]
    pub dietary_restrictions: Option<String>,
    #[serde(default)]
    pub plus_one: bool,
    #[serde(default)]
    pub table_number: Option<i32>,
}

impl Guest {
    /// A pending guest with no dietary details and no table.
    #[must_use]
    pub fn new(wedding_id: Uuid, full_name: String, invitation_code: String) -> Self {
        Self {
            id: None,
            wedding_id,
            full_name,
            invitation_code,
            rsvp_status: RsvpStatus::Pending,
            meal_preference: None,
            allergies: None,
            dietary_restrictions: None,
            plus_one: false,
            table_number: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, AsChangeset)]
#[diesel(table_name = schema::guests)]
#[serde(default)]
pub struct GuestChangeset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invitation_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsvp_status: Option<RsvpStatus>,
    #[serde(deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub meal_preference: Option<Option<String>>,
    #[serde(deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub allergies: Option<Option<String>>,
    #[serde(deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub dietary_restrictions: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plus_one: Option<bool>,
    #[serde(deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub table_number: Option<Option<i32>>,
}

impl GuestChangeset {
    /// Copies every present field onto `target`.
    pub fn apply(&self, target: &mut Guest) {
        if let Some(value) = &self.full_name {
            target.full_name.clone_from(value);
        }
        if let Some(value) = &self.invitation_code {
            target.invitation_code.clone_from(value);
        }
        if let Some(value) = &self.rsvp_status {
            target.rsvp_status.clone_from(value);
        }
        if let Some(value) = &self.meal_preference {
            target.meal_preference.clone_from(value);
        }
        if let Some(value) = &self.allergies {
            target.allergies.clone_from(value);
        }
        if let Some(value) = &self.dietary_restrictions {
            target.dietary_restrictions.clone_from(value);
        }
        if let Some(value) = &self.plus_one {
            target.plus_one.clone_from(value);
        }
        if let Some(value) = &self.table_number {
            target.table_number.clone_from(value);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.invitation_code.is_none()
            && self.rsvp_status.is_none()
            && self.meal_preference.is_none()
            && self.allergies.is_none()
            && self.dietary_restrictions.is_none()
            && self.plus_one.is_none()
            && self.table_number.is_none()
    }
}
