use std::collections::BTreeSet;

use serde::Serialize;
use webinvite_db::db::enums::RsvpStatus;
use webinvite_db::db::records::save_record;
use webinvite_db::model::{Guest, GuestChangeset};

use super::{Panel, PanelContext, item_mut};
use crate::error::{ServiceError, ServiceResult};

/// Which tables the seating list shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TableFilter {
    #[default]
    All,
    Unassigned,
    Table(i32),
}

impl TableFilter {
    #[must_use]
    pub fn matches(self, guest: &Guest) -> bool {
        match self {
            Self::All => true,
            Self::Unassigned => guest.table_number.is_none(),
            Self::Table(n) => guest.table_number == Some(n),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeatingStats {
    pub total_guests: usize,
    pub plus_ones_allowed: usize,
    /// Distinct assigned tables, ascending.
    pub tables: Vec<i32>,
    pub unassigned: usize,
}

/// Table assignments, plus-ones and dietary details for the guest list.
pub struct SeatingPanel {
    ctx: PanelContext,
    guests: Vec<Guest>,
}

impl Panel for SeatingPanel {
    const NAME: &'static str = "seating";

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

impl SeatingPanel {
    #[must_use]
    pub fn guests(&self) -> &[Guest] {
        &self.guests
    }

    fn mirror(&self) {
        self.ctx.preview.set_guests(self.guests.clone());
    }

    /// Guests whose name contains `search` (case-insensitive) and who sit at
    /// a table accepted by `filter`.
    #[must_use]
    pub fn filtered(&self, search: &str, filter: TableFilter) -> Vec<&Guest> {
        let needle = search.to_lowercase();
        self.guests
            .iter()
            .filter(|g| g.full_name.to_lowercase().contains(&needle) && filter.matches(g))
            .collect()
    }

    #[must_use]
    pub fn stats(&self) -> SeatingStats {
        let tables: BTreeSet<i32> = self.guests.iter().filter_map(|g| g.table_number).collect();
        SeatingStats {
            total_guests: self.guests.len(),
            plus_ones_allowed: self.guests.iter().filter(|g| g.plus_one).count(),
            tables: tables.into_iter().collect(),
            unassigned: self.guests.iter().filter(|g| g.table_number.is_none()).count(),
        }
    }

    fn edit(&mut self, index: usize, patch: &GuestChangeset) -> ServiceResult<()> {
        patch.apply(item_mut(&mut self.guests, index, "guest")?);
        self.mirror();
        Ok(())
    }

    /// Seats the guest at `table`. Table numbers below 1 unassign the guest.
    ///
    /// ## Errors
    /// Returns [`ServiceError::NotFound`] if there is no guest at `index`.
    pub fn assign_table(&mut self, index: usize, table: Option<i32>) -> ServiceResult<()> {
        self.edit(
            index,
            &GuestChangeset {
                table_number: Some(table.filter(|n| *n >= 1)),
                ..GuestChangeset::default()
            },
        )
    }

    /// ## Errors
    /// Returns [`ServiceError::NotFound`] if there is no guest at `index`.
    pub fn set_plus_one(&mut self, index: usize, plus_one: bool) -> ServiceResult<()> {
        self.edit(
            index,
            &GuestChangeset {
                plus_one: Some(plus_one),
                ..GuestChangeset::default()
            },
        )
    }

    /// ## Errors
    /// Returns [`ServiceError::NotFound`] if there is no guest at `index`.
    pub fn set_meal_preference(&mut self, index: usize, meal: Option<String>) -> ServiceResult<()> {
        self.edit(
            index,
            &GuestChangeset {
                meal_preference: Some(meal),
                ..GuestChangeset::default()
            },
        )
    }

    /// ## Errors
    /// Returns [`ServiceError::NotFound`] if there is no guest at `index`.
    pub fn set_dietary_restrictions(
        &mut self,
        index: usize,
        restrictions: Option<String>,
    ) -> ServiceResult<()> {
        self.edit(
            index,
            &GuestChangeset {
                dietary_restrictions: Some(restrictions),
                ..GuestChangeset::default()
            },
        )
    }

    /// ## Errors
    /// Returns [`ServiceError::ValidationError`] for a status the seating
    /// chart does not use, or [`ServiceError::NotFound`] if there is no guest
    /// at `index`.
    pub fn set_rsvp_status(&mut self, index: usize, status: RsvpStatus) -> ServiceResult<()> {
        if !status.is_seating_value() {
            return Err(ServiceError::ValidationError(format!(
                "RSVP status {status} is not used by the seating chart"
            )));
        }
        self.edit(
            index,
            &GuestChangeset {
                rsvp_status: Some(status),
                ..GuestChangeset::default()
            },
        )
    }

    /// ## Summary
    /// Writes the guest at `index` back to the backend.
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
                    "Seating saved",
                    format!("Seating for {} has been updated", guest.full_name),
                );
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to save seating");
                self.ctx.notify_error("Error", "Failed to save seating");
                Err(e.into())
            }
        }
    }
}
