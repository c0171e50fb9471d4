//! Records stored in the remote backend.
//!
//! Every record carries an optional `id`: `None` marks a draft that has not
//! been persisted yet. The same structs are used for JSON rows, diesel
//! queries and the preview store.

use serde::{Deserialize, Deserializer};

pub mod background;
pub mod event;
pub mod gift;
pub mod guest;
pub mod music;
pub mod wedding;

pub use background::{Background, BackgroundChangeset};
pub use event::{Event, EventChangeset};
pub use gift::{Gift, GiftChangeset};
pub use guest::{Guest, GuestChangeset};
pub use music::{Music, MusicChangeset};
pub use wedding::{Wedding, WeddingChangeset};

/// Distinguishes an absent key (`None`) from an explicit `null` (`Some(None)`)
/// so partial updates can clear nullable columns.
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_changeset_distinguishes_null_from_missing() {
        let cs: WeddingChangeset =
            serde_json::from_value(serde_json::json!({ "quote": null })).expect("deserialize");
        assert_eq!(cs.quote, Some(None));
        assert_eq!(cs.quote_author, None);
        assert_eq!(cs.couple1_name, None);
    }

    #[test]
    fn test_changeset_ignores_unknown_columns() {
        let cs: EventChangeset = serde_json::from_value(serde_json::json!({
            "wedding_id": "6d1d7a2e-4a8f-4a0e-9b7c-1f2e3d4c5b6a",
            "title": "Ceremony",
        }))
        .expect("deserialize");
        assert_eq!(cs.title.as_deref(), Some("Ceremony"));
    }
}
