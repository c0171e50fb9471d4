//! The preview store: the single source of truth for what the live preview
//! shows, independent of what has been saved remotely.
//!
//! Every mutation writes the whole aggregate through to local storage under
//! `wedding-preview-<id>`, and opening a store for an id loads the last
//! snapshot first so the preview has something to show before the backend
//! answers.

mod handle;
mod store;

pub use handle::PreviewHandle;
pub use store::{PreviewData, PreviewStore, storage_key};

/// Partial update of the invitation record.
pub type WeddingPatch = webinvite_db::model::WeddingChangeset;
/// Partial update of the background record.
pub type BackgroundPatch = webinvite_db::model::BackgroundChangeset;
/// Partial update of the music record.
pub type MusicPatch = webinvite_db::model::MusicChangeset;
