use webinvite_db::db::records::{delete_record, save_record};
use webinvite_db::model::{Gift, GiftChangeset};

use super::{Panel, PanelContext, item_mut};
use crate::error::ServiceResult;

/// The gift registry.
pub struct GiftsPanel {
    ctx: PanelContext,
    gifts: Vec<Gift>,
}

impl Panel for GiftsPanel {
    const NAME: &'static str = "gifts";

    fn new(ctx: PanelContext) -> Self {
        Self {
            ctx,
            gifts: Vec::new(),
        }
    }

    async fn mount(&mut self) {
        if let Some(gifts) = self.ctx.load_all::<Gift>(Self::NAME).await {
            self.gifts = gifts;
            self.mirror();
        }
    }
}

impl GiftsPanel {
    #[must_use]
    pub fn gifts(&self) -> &[Gift] {
        &self.gifts
    }

    /// Position of the gift with remote id `id`.
    #[must_use]
    pub fn position(&self, id: uuid::Uuid) -> Option<usize> {
        self.gifts.iter().position(|item| item.id == Some(id))
    }

    fn mirror(&self) {
        self.ctx.preview.set_gifts(self.gifts.clone());
    }

    /// Appends an unsaved draft and returns its position.
    pub fn add_gift(&mut self) -> usize {
        self.gifts.push(Gift::draft(self.ctx.wedding_id));
        self.mirror();
        self.gifts.len() - 1
    }

    /// ## Errors
    /// Returns [`crate::error::ServiceError::NotFound`] if there is no gift at `index`.
    pub fn update_gift(&mut self, index: usize, patch: &GiftChangeset) -> ServiceResult<()> {
        patch.apply(item_mut(&mut self.gifts, index, "gift")?);
        self.mirror();
        Ok(())
    }

    /// ## Summary
    /// Inserts or updates the gift at `index`.
    ///
    /// ## Errors
    /// Returns an error if there is no gift at `index`, or the backend error
    /// after raising an error notification.
    #[tracing::instrument(skip(self), fields(wedding_id = %self.ctx.wedding_id))]
    pub async fn save_gift(&mut self, index: usize) -> ServiceResult<()> {
        let gift = item_mut(&mut self.gifts, index, "gift")?.clone();
        let result = save_record(self.ctx.backend.as_ref(), &gift).await;
        match result {
            Ok(saved) => {
                *item_mut(&mut self.gifts, index, "gift")? = saved;
                self.mirror();
                self.ctx.notify_success("Gift saved", "Your gift has been updated");
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to save gift");
                self.ctx.notify_error("Error", "Failed to save gift");
                Err(e.into())
            }
        }
    }

    /// ## Summary
    /// Removes the gift at `index`, deleting it remotely first if it was saved.
    ///
    /// ## Errors
    /// Returns an error if there is no gift at `index`, or the backend error
    /// after raising an error notification. The gift stays in place on failure.
    #[tracing::instrument(skip(self), fields(wedding_id = %self.ctx.wedding_id))]
    pub async fn delete_gift(&mut self, index: usize) -> ServiceResult<()> {
        let id = item_mut(&mut self.gifts, index, "gift")?.id;
        if let Some(id) = id {
            if let Err(e) = delete_record::<Gift>(self.ctx.backend.as_ref(), id).await {
                tracing::error!(error = %e, %id, "Failed to delete gift");
                self.ctx.notify_error("Error", "Failed to delete gift");
                return Err(e.into());
            }
            self.ctx.notify_success("Gift deleted", "The gift has been removed");
        }
        self.gifts.remove(index);
        self.mirror();
        Ok(())
    }
}
