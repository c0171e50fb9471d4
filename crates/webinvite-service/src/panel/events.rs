use webinvite_db::db::records::{delete_record, save_record};
use webinvite_db::model::{Event, EventChangeset};

use super::{Panel, PanelContext, item_mut};
use crate::error::ServiceResult;

/// The event schedule, ordered by time as loaded.
pub struct EventsPanel {
    ctx: PanelContext,
    events: Vec<Event>,
}

impl Panel for EventsPanel {
    const NAME: &'static str = "events";

    fn new(ctx: PanelContext) -> Self {
        Self {
            ctx,
            events: Vec::new(),
        }
    }

    async fn mount(&mut self) {
        if let Some(events) = self.ctx.load_all::<Event>(Self::NAME).await {
            self.events = events;
            self.mirror();
        }
    }
}

impl EventsPanel {
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Position of the event with remote id `id`.
    #[must_use]
    pub fn position(&self, id: uuid::Uuid) -> Option<usize> {
        self.events.iter().position(|item| item.id == Some(id))
    }

    fn mirror(&self) {
        self.ctx.preview.set_events(self.events.clone());
    }

    /// Appends an unsaved draft and returns its position.
    pub fn add_event(&mut self) -> usize {
        self.events.push(Event::draft(self.ctx.wedding_id));
        self.mirror();
        self.events.len() - 1
    }

    /// ## Errors
    /// Returns [`crate::error::ServiceError::NotFound`] if there is no event at `index`.
    pub fn update_event(&mut self, index: usize, patch: &EventChangeset) -> ServiceResult<()> {
        patch.apply(item_mut(&mut self.events, index, "event")?);
        self.mirror();
        Ok(())
    }

    /// ## Summary
    /// Inserts or updates the event at `index`, capturing the new id on insert.
    ///
    /// ## Errors
    /// Returns an error if there is no event at `index`, or the backend error
    /// after raising an error notification.
    #[tracing::instrument(skip(self), fields(wedding_id = %self.ctx.wedding_id))]
    pub async fn save_event(&mut self, index: usize) -> ServiceResult<()> {
        let event = item_mut(&mut self.events, index, "event")?.clone();
        let result = save_record(self.ctx.backend.as_ref(), &event).await;
        match result {
            Ok(saved) => {
                *item_mut(&mut self.events, index, "event")? = saved;
                self.mirror();
                self.ctx.notify_success("Event saved", "Your event has been updated");
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to save event");
                self.ctx.notify_error("Error", "Failed to save event");
                Err(e.into())
            }
        }
    }

    /// ## Summary
    /// Removes the event at `index`. Drafts are dropped locally; saved events
    /// are deleted remotely first and stay in place if that fails.
    ///
    /// ## Errors
    /// Returns an error if there is no event at `index`, or the backend error
    /// after raising an error notification.
    #[tracing::instrument(skip(self), fields(wedding_id = %self.ctx.wedding_id))]
    pub async fn delete_event(&mut self, index: usize) -> ServiceResult<()> {
        let id = item_mut(&mut self.events, index, "event")?.id;
        if let Some(id) = id {
            if let Err(e) = delete_record::<Event>(self.ctx.backend.as_ref(), id).await {
                tracing::error!(error = %e, %id, "Failed to delete event");
                self.ctx.notify_error("Error", "Failed to delete event");
                return Err(e.into());
            }
            self.ctx.notify_success("Event deleted", "The event has been removed");
        }
        self.events.remove(index);
        self.mirror();
        Ok(())
    }
}
