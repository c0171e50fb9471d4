//! An owner's invitations and the one currently being edited.

use std::sync::Arc;

use chrono::Datelike;
use uuid::Uuid;
use webinvite_db::db::records::{fetch_all, insert_record};
use webinvite_db::db::{Filter, RemoteBackend};
use webinvite_db::model::Wedding;
use webinvite_db::storage::LocalStorage;

use crate::error::{ServiceError, ServiceResult};
use crate::notify::{Notification, Notifier};
use crate::render::{EMPTY_MESSAGE, PreviewView};
use crate::session::EditingSession;

pub struct Dashboard {
    owner: Uuid,
    backend: Arc<dyn RemoteBackend>,
    storage: Arc<dyn LocalStorage>,
    notifier: Arc<dyn Notifier>,
    weddings: Vec<Wedding>,
    session: Option<EditingSession>,
}

impl Dashboard {
    #[must_use]
    pub fn new(
        owner: Uuid,
        backend: Arc<dyn RemoteBackend>,
        storage: Arc<dyn LocalStorage>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            owner,
            backend,
            storage,
            notifier,
            weddings: Vec::new(),
            session: None,
        }
    }

    /// Invitations of the owner, newest first.
    #[must_use]
    pub fn weddings(&self) -> &[Wedding] {
        &self.weddings
    }

    #[must_use]
    pub fn session(&self) -> Option<&EditingSession> {
        self.session.as_ref()
    }

    /// ## Summary
    /// Loads the owner's invitations and selects the newest one if nothing is
    /// selected yet.
    ///
    /// ## Errors
    /// Returns the backend error after raising an error notification.
    #[tracing::instrument(skip(self), fields(owner = %self.owner))]
    pub async fn load(&mut self) -> ServiceResult<()> {
        let result =
            fetch_all::<Wedding>(self.backend.as_ref(), Filter::Owner(self.owner)).await;
        match result {
            Ok(weddings) => {
                tracing::debug!(count = weddings.len(), "Loaded weddings");
                self.weddings = weddings;
                let newest = self.weddings.first().and_then(|w| w.id);
                if let Some(id) = newest.filter(|_| self.session.is_none()) {
                    self.select(id)?;
                }
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load weddings");
                self.notifier
                    .notify(Notification::error("Error", "Failed to load weddings"));
                Err(e.into())
            }
        }
    }

    /// ## Summary
    /// Creates an invitation with placeholder names, puts it at the top of the
    /// list and selects it.
    ///
    /// ## Errors
    /// Returns the backend error after raising an error notification.
    #[tracing::instrument(skip(self), fields(owner = %self.owner))]
    pub async fn create_wedding(&mut self) -> ServiceResult<&EditingSession> {
        let draft = Wedding::placeholder(self.owner, chrono::Utc::now().year());
        let result = insert_record(self.backend.as_ref(), &draft).await;
        match result {
            Ok(wedding) => {
                let id = wedding.id.ok_or(ServiceError::InvariantViolation(
                    "backend returned an invitation without an id",
                ))?;
                self.weddings.insert(0, wedding);
                self.notifier.notify(Notification::success(
                    "Wedding created",
                    "Your new wedding invitation has been created",
                ));
                self.select(id)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to create wedding");
                self.notifier
                    .notify(Notification::error("Error", "Failed to create wedding"));
                Err(e.into())
            }
        }
    }

    /// ## Summary
    /// Opens an editing session for invitation `id`, closing the previous one.
    ///
    /// ## Errors
    /// Returns [`ServiceError::NotFound`] if `id` is not one of the owner's invitations.
    pub fn select(&mut self, id: Uuid) -> ServiceResult<&EditingSession> {
        let wedding = self
            .weddings
            .iter()
            .find(|w| w.id == Some(id))
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(format!("wedding {id}")))?;

        if let Some(previous) = self.session.take() {
            previous.close();
        }
        let session = EditingSession::open(
            wedding,
            self.backend.clone(),
            self.storage.clone(),
            self.notifier.clone(),
        )?;
        Ok(self.session.insert(session))
    }

    /// The preview of the selected invitation.
    #[must_use]
    pub fn render(&self) -> PreviewView {
        self.session
            .as_ref()
            .map_or(PreviewView::Empty { message: EMPTY_MESSAGE }, EditingSession::render)
    }
}
