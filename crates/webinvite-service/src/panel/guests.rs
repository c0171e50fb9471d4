use webinvite_core::constants::INVITATION_ROUTE_PREFIX;
use webinvite_core::util::invitation_code::generate_unique_invitation_code;
use webinvite_db::db::records::{delete_record, insert_record, save_record};
use webinvite_db::model::{Guest, GuestChangeset};

use super::{Panel, PanelContext, item_mut};
use crate::error::{ServiceError, ServiceResult};

/// The guest list with RSVP codes, in creation order.
pub struct GuestsPanel {
    ctx: PanelContext,
    guests: Vec<Guest>,
}

impl Panel for GuestsPanel {
    const NAME: &'static str = "guests";

    fn new(ctx: PanelContext) -> Self {
        Self {
            ctx,
            guests: Vec::new(),
        }
    }

    async fn mount(&mut self) {
        if let Some(guests) = self.ctx.load_all::<Guest>(Self::NAME).await {
            self.guests = guests;
            self.mirror();
        }
    }
}

impl GuestsPanel {
    #[must_use]
    pub fn guests(&self) -> &[Guest] {
        &self.guests
    }

    fn mirror(&self) {
        self.ctx.preview.set_guests(self.guests.clone());
    }

    fn new_code(&self) -> ServiceResult<String> {
        generate_unique_invitation_code(self.guests.iter().map(|g| g.invitation_code.as_str()))
            .ok_or(ServiceError::InvariantViolation(
                "could not generate an unused invitation code",
            ))
    }

    /// ## Summary
    /// Adds a pending guest called `name` (trimmed) with a fresh invitation code.
    ///
    /// ## Errors
    /// A blank name raises a validation notification and returns
    /// [`ServiceError::ValidationError`] without touching the backend. Backend
    /// failures raise an error notification and leave the list unchanged.
    #[tracing::instrument(skip(self), fields(wedding_id = %self.ctx.wedding_id))]
    pub async fn add_guest(&mut self, name: &str) -> ServiceResult<&Guest> {
        let name = name.trim();
        if name.is_empty() {
            self.ctx.notify_error("Name required", "Please enter a guest name");
            return Err(ServiceError::ValidationError(
                "guest name is required".to_string(),
            ));
        }

        let guest = Guest::new(self.ctx.wedding_id, name.to_string(), self.new_code()?);
        let result = insert_record(self.ctx.backend.as_ref(), &guest).await;
        match result {
            Ok(saved) => {
                self.ctx.notify_success(
                    "Guest added",
                    format!("{name} has been added to your guest list"),
                );
                self.guests.push(saved);
                self.mirror();
                Ok(&self.guests[self.guests.len() - 1])
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to add guest");
                self.ctx.notify_error("Error", "Failed to add guest");
                Err(e.into())
            }
        }
    }

    /// ## Summary
    /// Appends an unsaved guest with an empty name and a fresh code.
    ///
    /// ## Errors
    /// Returns an error if no unused invitation code could be generated.
    pub fn add_draft(&mut self) -> ServiceResult<usize> {
        let guest = Guest::new(self.ctx.wedding_id, String::new(), self.new_code()?);
        self.guests.push(guest);
        self.mirror();
        Ok(self.guests.len() - 1)
    }

    /// ## Errors
    /// Returns [`ServiceError::NotFound`] if there is no guest at `index`, or
    /// [`ServiceError::ValidationError`] for an RSVP value the guest list
    /// does not use.
    pub fn update_guest(&mut self, index: usize, patch: &GuestChangeset) -> ServiceResult<()> {
        if let Some(status) = patch.rsvp_status.filter(|s| !s.is_guest_list_value()) {
            return Err(ServiceError::ValidationError(format!(
                "RSVP status {status} is not used by the guest list"
            )));
        }
        patch.apply(item_mut(&mut self.guests, index, "guest")?);
        self.mirror();
        Ok(())
    }

    /// ## Summary
    /// Inserts or updates the guest at `index`.
    ///
    /// ## Errors
    /// Returns an error if there is no guest at `index`, or the backend error
    /// after raising an error notification.
    #[tracing::instrument(skip(self), fields(wedding_id = %self.ctx.wedding_id))]
    pub async fn save_guest(&mut self, index: usize) -> ServiceResult<()> {
        let guest = item_mut(&mut self.guests, index, "guest")?.clone();
        let result = save_record(self.ctx.backend.as_ref(), &guest).await;
        match result {
            Ok(saved) => {
                *item_mut(&mut self.guests, index, "guest")? = saved;
                self.mirror();
                self.ctx.notify_success(
                    "Guest saved",
                    format!("{} has been updated", guest.full_name),
                );
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to save guest");
                self.ctx.notify_error("Error", "Failed to save guest");
                Err(e.into())
            }
        }
    }

    /// ## Summary
    /// Removes the guest at `index`. Saved guests are deleted remotely first
    /// and stay on the list if that fails.
    ///
    /// ## Errors
    /// Returns an error if there is no guest at `index`, or the backend error
    /// after raising an error notification.
    #[tracing::instrument(skip(self), fields(wedding_id = %self.ctx.wedding_id))]
    pub async fn delete_guest(&mut self, index: usize) -> ServiceResult<()> {
        let guest = item_mut(&mut self.guests, index, "guest")?;
        let (id, name) = (guest.id, guest.full_name.clone());
        if let Some(id) = id {
            if let Err(e) = delete_record::<Guest>(self.ctx.backend.as_ref(), id).await {
                tracing::error!(error = %e, %id, "Failed to delete guest");
                self.ctx.notify_error("Error", "Failed to remove guest");
                return Err(e.into());
            }
            self.ctx.notify_success(
                "Guest removed",
                format!("{name} has been removed from your guest list"),
            );
        }
        self.guests.remove(index);
        self.mirror();
        Ok(())
    }

    /// Position of the guest with remote id `id`.
    #[must_use]
    pub fn position(&self, id: uuid::Uuid) -> Option<usize> {
        self.guests.iter().position(|g| g.id == Some(id))
    }

    /// Shareable RSVP link for the guest at `index`.
    #[must_use]
    pub fn invitation_link(&self, index: usize, origin: &str) -> Option<String> {
        self.guests
            .get(index)
            .map(|g| invitation_link(origin, &g.invitation_code))
    }

    /// Status label for the guest at `index`.
    #[must_use]
    pub fn status_label(&self, index: usize) -> Option<&'static str> {
        self.guests
            .get(index)
            .map(|g| g.rsvp_status.guest_list_label())
    }
}

/// `<origin>/invitation/<code>`.
#[must_use]
pub fn invitation_link(origin: &str, code: &str) -> String {
    format!(
        "{}{INVITATION_ROUTE_PREFIX}/{code}",
        origin.trim_end_matches('/')
    )
}
