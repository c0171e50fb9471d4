//! One invitation being edited.
//!
//! A session owns the preview store for its invitation and the cancellation
//! token its panels read under. Dropping the session cancels the token, so
//! reads still in flight are discarded instead of writing into a store
//! nobody looks at any more.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use uuid::Uuid;
use webinvite_db::db::RemoteBackend;
use webinvite_db::model::Wedding;
use webinvite_db::storage::LocalStorage;

use crate::error::{ServiceError, ServiceResult};
use crate::notify::Notifier;
use crate::panel::{
    BackgroundPanel, EventsPanel, GiftsPanel, GuestsPanel, MusicPanel, Panel, PanelContext,
    QuotePanel,
};
use crate::preview::{PreviewData, PreviewHandle};
use crate::render::{PreviewView, render, render_html};

pub struct EditingSession {
    wedding: Wedding,
    ctx: PanelContext,
}

impl EditingSession {
    /// ## Summary
    /// Opens a session for `wedding`, hydrating its preview store from the
    /// last local snapshot.
    ///
    /// When the snapshot has no invitation record yet, `wedding` is loaded
    /// into the store so the preview can show it straight away.
    ///
    /// ## Errors
    /// Returns [`ServiceError::InvariantViolation`] if `wedding` has never been saved.
    #[tracing::instrument(skip_all, fields(wedding_id = ?wedding.id))]
    pub fn open(
        wedding: Wedding,
        backend: Arc<dyn RemoteBackend>,
        storage: Arc<dyn LocalStorage>,
        notifier: Arc<dyn Notifier>,
    ) -> ServiceResult<Self> {
        let wedding_id = wedding.id.ok_or(ServiceError::InvariantViolation(
            "cannot edit an unsaved invitation",
        ))?;

        let preview = PreviewHandle::open(wedding_id, storage);
        let snapshot = preview.snapshot();
        if snapshot.wedding.is_none() {
            preview.load_initial(PreviewData {
                wedding: Some(wedding.clone()),
                ..snapshot
            });
        }
        tracing::debug!("Opened editing session");

        Ok(Self {
            wedding,
            ctx: PanelContext {
                wedding_id,
                backend,
                preview,
                notifier,
                cancel: CancellationToken::new(),
            },
        })
    }

    #[must_use]
    pub fn wedding_id(&self) -> Uuid {
        self.ctx.wedding_id
    }

    /// The invitation as it was when the session was opened.
    #[must_use]
    pub fn wedding(&self) -> &Wedding {
        &self.wedding
    }

    #[must_use]
    pub fn context(&self) -> PanelContext {
        self.ctx.clone()
    }

    #[must_use]
    pub fn preview(&self) -> &PreviewHandle {
        &self.ctx.preview
    }

    /// Constructs and mounts a panel bound to this session.
    pub async fn panel<P: Panel>(&self) -> P {
        let mut panel = P::new(self.ctx.clone());
        panel.mount().await;
        tracing::debug!(panel = P::NAME, wedding_id = %self.ctx.wedding_id, "Mounted panel");
        panel
    }

    /// Mounts every panel once, bringing the preview store in line with the backend.
    #[tracing::instrument(skip(self), fields(wedding_id = %self.ctx.wedding_id))]
    pub async fn refresh(&self) {
        self.panel::<QuotePanel>().await;
        self.panel::<BackgroundPanel>().await;
        self.panel::<MusicPanel>().await;
        self.panel::<EventsPanel>().await;
        self.panel::<GuestsPanel>().await;
        self.panel::<GiftsPanel>().await;
    }

    #[must_use]
    pub fn render(&self) -> PreviewView {
        render(&self.ctx.preview.snapshot(), Some(&self.wedding))
    }

    #[must_use]
    pub fn render_html(&self) -> String {
        render_html(&self.render())
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.ctx.cancel.is_cancelled()
    }

    /// Tears the session down, discarding any panel reads still in flight.
    pub fn close(self) {
        tracing::debug!(wedding_id = %self.ctx.wedding_id, "Closing editing session");
    }
}

impl Drop for EditingSession {
    fn drop(&mut self) {
        self.ctx.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use webinvite_db::db::memory::MemoryBackend;
    use webinvite_db::db::records::insert_record;
    use webinvite_db::model::{BackgroundChangeset, WeddingChangeset};
    use webinvite_db::storage::MemoryStorage;

    use super::*;
    use crate::notify::NotificationQueue;

    async fn saved_wedding(backend: &MemoryBackend) -> Wedding {
        insert_record(backend, &Wedding::placeholder(Uuid::new_v4(), 2030))
            .await
            .expect("seed")
    }

    fn open(wedding: Wedding, backend: &MemoryBackend, storage: &MemoryStorage) -> EditingSession {
        EditingSession::open(
            wedding,
            Arc::new(backend.clone()),
            Arc::new(storage.clone()),
            Arc::new(NotificationQueue::new()),
        )
        .expect("open")
    }

    #[test]
    fn test_unsaved_invitation_is_rejected() {
        let result = EditingSession::open(
            Wedding::placeholder(Uuid::new_v4(), 2030),
            Arc::new(MemoryBackend::new()),
            Arc::new(MemoryStorage::new()),
            Arc::new(NotificationQueue::new()),
        );
        assert!(matches!(result, Err(ServiceError::InvariantViolation(_))));
    }

    #[test_log::test(tokio::test)]
    async fn test_snapshot_survives_reopen() {
        let backend = MemoryBackend::new();
        let storage = MemoryStorage::new();
        let wedding = saved_wedding(&backend).await;

        let session = open(wedding.clone(), &backend, &storage);
        session.preview().set_invitation_fields(&WeddingChangeset {
            couple1_name: Some("Ada".to_string()),
            ..WeddingChangeset::default()
        });
        session.close();

        let session = open(wedding, &backend, &storage);
        let data = session.preview().snapshot();
        assert_eq!(data.wedding.expect("wedding").couple1_name, "Ada");
    }

    #[test_log::test(tokio::test)]
    async fn test_close_cancels_context() {
        let backend = MemoryBackend::new();
        let storage = MemoryStorage::new();
        let session = open(saved_wedding(&backend).await, &backend, &storage);
        let ctx = session.context();
        assert!(!session.is_closed());

        session.close();
        assert!(ctx.cancel.is_cancelled());

        // A panel built from the stale context never writes into the store.
        let mut panel = BackgroundPanel::new(ctx.clone());
        panel.mount().await;
        assert!(ctx.preview.snapshot().background.is_none());
    }

    #[test_log::test(tokio::test)]
    async fn test_refresh_pulls_backend_state() {
        let backend = MemoryBackend::new();
        let storage = MemoryStorage::new();
        let wedding = saved_wedding(&backend).await;
        let session = open(wedding, &backend, &storage);

        let mut background: BackgroundPanel = session.panel().await;
        background.edit(&BackgroundChangeset {
            opacity: Some(10),
            ..BackgroundChangeset::default()
        });
        background.save().await.expect("save");

        let other = open(session.wedding().clone(), &backend, &MemoryStorage::new());
        assert!(other.preview().snapshot().background.is_none());
        other.refresh().await;
        assert_eq!(other.preview().snapshot().background.expect("bg").opacity, 10);
    }
}
