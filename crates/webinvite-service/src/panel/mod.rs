//! Feature panels.
//!
//! A panel owns the editable copy of one slice of an invitation. It loads
//! that slice from the remote backend on mount, mirrors every edit into the
//! session's preview store, and writes committed edits back on save. Panels
//! never talk to each other; the preview store is the only shared state.

use std::future::Future;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use uuid::Uuid;
use webinvite_db::db::records::{Record, fetch_all, fetch_optional};
use webinvite_db::db::{Filter, RemoteBackend};
use webinvite_db::error::DbResult;

use crate::error::{ServiceError, ServiceResult};
use crate::notify::{Notification, Notifier};
use crate::preview::PreviewHandle;

pub mod background;
pub mod events;
pub mod gifts;
pub mod guests;
pub mod music;
pub mod quote;
pub mod seating;

pub use background::BackgroundPanel;
pub use events::EventsPanel;
pub use gifts::GiftsPanel;
pub use guests::GuestsPanel;
pub use music::MusicPanel;
pub use quote::QuotePanel;
pub use seating::{SeatingPanel, SeatingStats, TableFilter};

/// Everything a panel needs from its editing session.
#[derive(Clone)]
pub struct PanelContext {
    pub wedding_id: Uuid,
    pub backend: Arc<dyn RemoteBackend>,
    pub preview: PreviewHandle,
    pub notifier: Arc<dyn Notifier>,
    /// Fired when the owning session is torn down.
    pub cancel: CancellationToken,
}

impl PanelContext {
    /// ## Summary
    /// Runs a backend read unless the session is torn down first.
    ///
    /// ## Errors
    /// Returns [`ServiceError::Cancelled`] if the token fires before the read
    /// completes, or the backend error otherwise.
    pub async fn guarded<T, F>(&self, read: F) -> ServiceResult<T>
    where
        F: Future<Output = DbResult<T>> + Send,
    {
        tokio::select! {
            biased;
            () = self.cancel.cancelled() => Err(ServiceError::Cancelled),
            result = read => Ok(result?),
        }
    }

    pub fn notify_success(&self, title: &str, description: impl Into<String>) {
        self.notifier.notify(Notification::success(title, description));
    }

    pub fn notify_error(&self, title: &str, description: impl Into<String>) {
        self.notifier.notify(Notification::error(title, description));
    }

    /// Loads every `T` of this invitation. `None` when the read failed or the
    /// session was torn down, in which case nothing should be written.
    pub(crate) async fn load_all<T: Record>(&self, panel: &'static str) -> Option<Vec<T>> {
        let read = fetch_all::<T>(self.backend.as_ref(), Filter::Wedding(self.wedding_id));
        self.settle(panel, self.guarded(read).await)
    }

    /// Loads the single `T` matching `filter`.
    pub(crate) async fn load_one<T: Record>(
        &self,
        panel: &'static str,
        filter: Filter,
    ) -> Option<Option<T>> {
        let read = fetch_optional::<T>(self.backend.as_ref(), filter);
        self.settle(panel, self.guarded(read).await)
    }

    fn settle<T>(&self, panel: &'static str, result: ServiceResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(ServiceError::Cancelled) => {
                tracing::debug!(panel, wedding_id = %self.wedding_id, "Discarding load for closed session");
                None
            }
            Err(e) => {
                tracing::warn!(panel, wedding_id = %self.wedding_id, error = %e, "Failed to load panel data");
                None
            }
        }
    }
}

/// A feature panel bound to one editing session.
pub trait Panel: Sized + Send {
    /// Used in logs.
    const NAME: &'static str;

    fn new(ctx: PanelContext) -> Self;

    /// Performs the initial read and mirrors it into the preview store.
    ///
    /// Read failures are logged and leave the panel at its defaults.
    fn mount(&mut self) -> impl Future<Output = ()> + Send;
}

/// Position lookup shared by the list panels.
pub(crate) fn item_mut<'a, T>(items: &'a mut [T], index: usize, what: &str) -> ServiceResult<&'a mut T> {
    items
        .get_mut(index)
        .ok_or_else(|| ServiceError::NotFound(format!("{what} #{index}")))
}
