use chrono::NaiveDate;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::double_option;
use crate::db::schema;

/// The invitation root aggregate: one couple's microsite.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Queryable, Selectable, Insertable,
)]
#[diesel(table_name = schema::weddings)]
pub struct Wedding {
    #[serde(default)]
    #[diesel(deserialize_as = Uuid)]
    pub id: Option<Uuid>,
    pub user_id: Uuid,
    pub couple1_name: String,
    pub couple2_name: String,
    #[serde(default)]
    pub wedding_date: Option<NaiveDate>,
    #[serde(default)]
    pub copyright_text: Option<String>,
    #[serde(default)]
    pub quote: Option<String>,
    #[serde(default)]
    pub quote_author: Option<String>,
}

impl Wedding {
    /// A freshly created invitation with placeholder names.
    #[must_use]
    pub fn placeholder(user_id: Uuid, year: i32) -> Self {
        Self {
            id: None,
            user_id,
            couple1_name: "Partner 1".to_string(),
            couple2_name: "Partner 2".to_string(),
            wedding_date: None,
            copyright_text: Some(format!("© {year} YourBrand")),
            quote: None,
            quote_author: None,
        }
    }
}

/// Partial update for [`Wedding`]; absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, AsChangeset)]
#[diesel(table_name = schema::weddings)]
#[serde(default)]
pub struct WeddingChangeset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub couple1_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub couple2_name: Option<String>,
    #[serde(deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub wedding_date: Option<Option<NaiveDate>>,
    #[serde(deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub copyright_text: Option<Option<String>>,
    #[serde(deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub quote: Option<Option<String>>,
    #[serde(deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub quote_author: Option<Option<String>>,
}

impl WeddingChangeset {
    /// Copies every present field onto `target`.
    pub fn apply(&self, target: &mut Wedding) {
        if let Some(value) = &self.couple1_name {
            target.couple1_name.clone_from(value);
        }
        if let Some(value) = &self.couple2_name {
            target.couple2_name.clone_from(value);
        }
        if let Some(value) = &self.wedding_date {
            target.wedding_date.clone_from(value);
        }
        if let Some(value) = &self.copyright_text {
            target.copyright_text.clone_from(value);
        }
        if let Some(value) = &self.quote {
            target.quote.clone_from(value);
        }
        if let Some(value) = &self.quote_author {
            target.quote_author.clone_from(value);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.couple1_name.is_none()
            && self.couple2_name.is_none()
            && self.wedding_date.is_none()
            && self.copyright_text.is_none()
            && self.quote.is_none()
            && self.quote_author.is_none()
    }
}
