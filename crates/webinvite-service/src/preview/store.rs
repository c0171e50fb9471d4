use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use webinvite_core::constants::PREVIEW_STORAGE_KEY_PREFIX;
use webinvite_db::model::{Background, Event, Gift, Guest, Music, Wedding};
use webinvite_db::storage::LocalStorage;

use super::{BackgroundPatch, MusicPatch, WeddingPatch};

/// Everything the preview renders for one invitation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreviewData {
    pub wedding: Option<Wedding>,
    pub background: Option<Background>,
    pub events: Vec<Event>,
    pub gifts: Vec<Gift>,
    pub guests: Vec<Guest>,
    pub music: Option<Music>,
}

/// Local storage key of the snapshot for `wedding_id`.
#[must_use]
pub fn storage_key(wedding_id: Uuid) -> String {
    format!("{PREVIEW_STORAGE_KEY_PREFIX}{wedding_id}")
}

pub struct PreviewStore {
    wedding_id: Uuid,
    data: PreviewData,
    storage: Arc<dyn LocalStorage>,
}

impl PreviewStore {
    /// ## Summary
    /// Opens the store for `wedding_id`, loading the saved snapshot if one exists.
    ///
    /// A missing, unreadable or malformed snapshot leaves the store empty.
    #[tracing::instrument(skip(storage))]
    pub fn open(wedding_id: Uuid, storage: Arc<dyn LocalStorage>) -> Self {
        let key = storage_key(wedding_id);
        let data = match storage.get(&key) {
            Ok(Some(bytes)) => match serde_json::from_slice::<PreviewData>(&bytes) {
                Ok(data) => {
                    tracing::debug!("Loaded preview snapshot");
                    data
                }
                Err(e) => {
                    tracing::error!(error = %e, "Error loading saved preview snapshot");
                    PreviewData::default()
                }
            },
            Ok(None) => PreviewData::default(),
            Err(e) => {
                tracing::error!(error = %e, "Error reading saved preview snapshot");
                PreviewData::default()
            }
        };

        Self {
            wedding_id,
            data,
            storage,
        }
    }

    #[must_use]
    pub fn wedding_id(&self) -> Uuid {
        self.wedding_id
    }

    #[must_use]
    pub fn data(&self) -> &PreviewData {
        &self.data
    }

    /// Merges `patch` into the invitation record. No-op if no invitation is loaded.
    pub fn set_invitation_fields(&mut self, patch: &WeddingPatch) {
        if let Some(wedding) = self.data.wedding.as_mut() {
            patch.apply(wedding);
        }
        self.persist();
    }

    /// Merges `patch` into the background, starting from defaults if none exists yet.
    pub fn set_background(&mut self, patch: &BackgroundPatch) {
        let wedding_id = self.wedding_id;
        let background = self
            .data
            .background
            .get_or_insert_with(|| Background::defaults(wedding_id));
        patch.apply(background);
        self.persist();
    }

    pub fn set_events(&mut self, events: Vec<Event>) {
        self.data.events = events;
        self.persist();
    }

    pub fn set_gifts(&mut self, gifts: Vec<Gift>) {
        self.data.gifts = gifts;
        self.persist();
    }

    pub fn set_guests(&mut self, guests: Vec<Guest>) {
        self.data.guests = guests;
        self.persist();
    }

    /// Merges `patch` into the music settings, starting from defaults if none exist yet.
    pub fn set_music(&mut self, patch: &MusicPatch) {
        let wedding_id = self.wedding_id;
        let music = self
            .data
            .music
            .get_or_insert_with(|| Music::defaults(wedding_id));
        patch.apply(music);
        self.persist();
    }

    /// Replaces the entire aggregate.
    pub fn load_initial(&mut self, data: PreviewData) {
        self.data = data;
        self.persist();
    }

    // Blocking write on the caller's thread, which may be an async worker.
    // Snapshots are a few KiB and the write must be complete on return.
    fn persist(&self) {
        let key = storage_key(self.wedding_id);
        let result = serde_json::to_vec(&self.data)
            .map_err(webinvite_db::error::DbError::from)
            .and_then(|bytes| self.storage.set(&key, &bytes));
        if let Err(e) = result {
            tracing::error!(error = %e, %key, "Failed to write preview snapshot");
        }
    }
}
