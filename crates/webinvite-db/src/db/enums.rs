//! Database enum types with Diesel serialization.
//!
//! Each enum is stored as `TEXT` and implements `ToSql` and `FromSql` for
//! conversion between Rust and `PostgreSQL`. The serde names match the stored
//! strings so the same values travel through JSON rows unchanged.

use diesel::deserialize::{self, FromSql, FromSqlRow};
use diesel::expression::AsExpression;
use diesel::pg::{Pg, PgValue};
use diesel::serialize::{self, IsNull, Output, ToSql};
use diesel::sql_types::Text;
use std::fmt;
use std::io::Write;

/// A guest's response to the invitation.
///
/// Two vocabularies are in use: the guest list writes
/// `pending`/`confirmed`/`declined`, the seating chart writes
/// `pending`/`attending`/`not_attending`. Both are stored as-is; no value is
/// ever rewritten into the other vocabulary.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    AsExpression,
    FromSqlRow,
    serde::Serialize,
    serde::Deserialize,
)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "snake_case")]
pub enum RsvpStatus {
    #[default]
    Pending,
    Confirmed,
    Declined,
    Attending,
    NotAttending,
}

impl RsvpStatus {
    /// Returns the database string representation of this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Declined => "declined",
            Self::Attending => "attending",
            Self::NotAttending => "not_attending",
        }
    }

    /// Human-readable label as shown on the guest list.
    #[must_use]
    pub const fn guest_list_label(self) -> &'static str {
        match self {
            Self::Confirmed => "Confirmed",
            Self::Declined => "Declined",
            _ => "Pending",
        }
    }

    /// Returns `true` for the values the seating chart writes.
    #[must_use]
    pub const fn is_seating_value(self) -> bool {
        matches!(self, Self::Pending | Self::Attending | Self::NotAttending)
    }

    /// Returns `true` for the values the guest list writes.
    #[must_use]
    pub const fn is_guest_list_value(self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed | Self::Declined)
    }
}

impl ToSql<Text, Pg> for RsvpStatus {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(IsNull::No)
    }
}

impl FromSql<Text, Pg> for RsvpStatus {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        match bytes.as_bytes() {
            b"pending" => Ok(Self::Pending),
            b"confirmed" => Ok(Self::Confirmed),
            b"declined" => Ok(Self::Declined),
            b"attending" => Ok(Self::Attending),
            b"not_attending" => Ok(Self::NotAttending),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

impl fmt::Display for RsvpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How much the couple wants a registry item.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    AsExpression,
    FromSqlRow,
    serde::Serialize,
    serde::Deserialize,
)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "snake_case")]
pub enum GiftPriority {
    High,
    #[default]
    Medium,
    Low,
}

impl GiftPriority {
    /// Returns the database string representation of this priority.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl ToSql<Text, Pg> for GiftPriority {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(IsNull::No)
    }
}

impl FromSql<Text, Pg> for GiftPriority {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        match bytes.as_bytes() {
            b"high" => Ok(Self::High),
            b"medium" => Ok(Self::Medium),
            b"low" => Ok(Self::Low),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

impl fmt::Display for GiftPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a registry item can still be claimed.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    AsExpression,
    FromSqlRow,
    serde::Serialize,
    serde::Deserialize,
)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "snake_case")]
pub enum GiftStatus {
    #[default]
    Available,
    Reserved,
    Purchased,
}

impl GiftStatus {
    /// Returns the database string representation of this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Reserved => "reserved",
            Self::Purchased => "purchased",
        }
    }
}

impl ToSql<Text, Pg> for GiftStatus {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(IsNull::No)
    }
}

impl FromSql<Text, Pg> for GiftStatus {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        match bytes.as_bytes() {
            b"available" => Ok(Self::Available),
            b"reserved" => Ok(Self::Reserved),
            b"purchased" => Ok(Self::Purchased),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

impl fmt::Display for GiftStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rsvp_serde_matches_db_strings() {
        for status in [
            RsvpStatus::Pending,
            RsvpStatus::Confirmed,
            RsvpStatus::Declined,
            RsvpStatus::Attending,
            RsvpStatus::NotAttending,
        ] {
            let json = serde_json::to_value(status).expect("serialize");
            assert_eq!(json, serde_json::Value::from(status.as_str()));
        }
    }

    #[test]
    fn test_rsvp_vocabularies() {
        assert!(RsvpStatus::Confirmed.is_guest_list_value());
        assert!(!RsvpStatus::Confirmed.is_seating_value());
        assert!(RsvpStatus::NotAttending.is_seating_value());
        assert!(RsvpStatus::Pending.is_guest_list_value() && RsvpStatus::Pending.is_seating_value());
    }

    #[test]
    fn test_guest_list_labels() {
        assert_eq!(RsvpStatus::Confirmed.guest_list_label(), "Confirmed");
        assert_eq!(RsvpStatus::Declined.guest_list_label(), "Declined");
        assert_eq!(RsvpStatus::Attending.guest_list_label(), "Pending");
    }

    #[test]
    fn test_gift_defaults() {
        assert_eq!(GiftPriority::default(), GiftPriority::Medium);
        assert_eq!(GiftStatus::default(), GiftStatus::Available);
        assert_eq!(GiftStatus::Purchased.to_string(), "purchased");
    }
}
