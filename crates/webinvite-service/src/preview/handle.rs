use std::sync::{Arc, Mutex, MutexGuard};

use uuid::Uuid;
use webinvite_db::model::{Event, Gift, Guest};
use webinvite_db::storage::LocalStorage;

use super::{BackgroundPatch, MusicPatch, PreviewData, PreviewStore, WeddingPatch};

/// Shared handle to one session's [`PreviewStore`].
///
/// Every method takes the lock for the duration of a single in-memory
/// assignment and the snapshot write; the lock is never held across an
/// await point.
#[derive(Clone)]
pub struct PreviewHandle {
    store: Arc<Mutex<PreviewStore>>,
}

impl PreviewHandle {
    #[must_use]
    pub fn open(wedding_id: Uuid, storage: Arc<dyn LocalStorage>) -> Self {
        Self {
            store: Arc::new(Mutex::new(PreviewStore::open(wedding_id, storage))),
        }
    }

    fn lock(&self) -> MutexGuard<'_, PreviewStore> {
        match self.store.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    #[must_use]
    pub fn wedding_id(&self) -> Uuid {
        self.lock().wedding_id()
    }

    /// Copy of the current aggregate.
    #[must_use]
    pub fn snapshot(&self) -> PreviewData {
        self.lock().data().clone()
    }

    pub fn set_invitation_fields(&self, patch: &WeddingPatch) {
        self.lock().set_invitation_fields(patch);
    }

    pub fn set_background(&self, patch: &BackgroundPatch) {
        self.lock().set_background(patch);
    }

    pub fn set_events(&self, events: Vec<Event>) {
        self.lock().set_events(events);
    }

    pub fn set_gifts(&self, gifts: Vec<Gift>) {
        self.lock().set_gifts(gifts);
    }

    pub fn set_guests(&self, guests: Vec<Guest>) {
        self.lock().set_guests(guests);
    }

    pub fn set_music(&self, patch: &MusicPatch) {
        self.lock().set_music(patch);
    }

    pub fn load_initial(&self, data: PreviewData) {
        self.lock().load_initial(data);
    }
}
