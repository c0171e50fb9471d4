use webinvite_db::db::Filter;
use webinvite_db::db::records::save_record;
use webinvite_db::model::{Background, BackgroundChangeset};

use super::{Panel, PanelContext};
use crate::error::ServiceResult;

pub const MAX_OPACITY: i32 = 100;
pub const MAX_BLUR: i32 = 20;

/// Background image, opacity, blur and overlay colour.
pub struct BackgroundPanel {
    ctx: PanelContext,
    settings: Background,
}

impl Panel for BackgroundPanel {
    const NAME: &'static str = "background";

    fn new(ctx: PanelContext) -> Self {
        let settings = Background::defaults(ctx.wedding_id);
        Self { ctx, settings }
    }

    async fn mount(&mut self) {
        let filter = Filter::Wedding(self.ctx.wedding_id);
        if let Some(Some(background)) = self.ctx.load_one::<Background>(Self::NAME, filter).await {
            self.ctx.preview.set_background(&BackgroundChangeset::from(&background));
            self.settings = background;
        }
    }
}

impl BackgroundPanel {
    #[must_use]
    pub fn settings(&self) -> &Background {
        &self.settings
    }

    /// Applies `patch` locally and mirrors it into the preview.
    ///
    /// Opacity is clamped to `0..=100` and blur to `0..=20`.
    pub fn edit(&mut self, patch: &BackgroundChangeset) {
        let mut patch = patch.clone();
        patch.opacity = patch.opacity.map(|v| v.clamp(0, MAX_OPACITY));
        patch.blur = patch.blur.map(|v| v.clamp(0, MAX_BLUR));
        patch.apply(&mut self.settings);
        self.ctx.preview.set_background(&patch);
    }

    pub fn set_image_url(&mut self, image_url: Option<String>) {
        self.edit(&BackgroundChangeset {
            image_url: Some(image_url),
            ..BackgroundChangeset::default()
        });
    }

    pub fn set_opacity(&mut self, opacity: i32) {
        self.edit(&BackgroundChangeset {
            opacity: Some(opacity),
            ..BackgroundChangeset::default()
        });
    }

    pub fn set_blur(&mut self, blur: i32) {
        self.edit(&BackgroundChangeset {
            blur: Some(blur),
            ..BackgroundChangeset::default()
        });
    }

    pub fn set_overlay_color(&mut self, overlay_color: impl Into<String>) {
        self.edit(&BackgroundChangeset {
            overlay_color: Some(overlay_color.into()),
            ..BackgroundChangeset::default()
        });
    }

    /// ## Summary
    /// Inserts or updates the background row.
    ///
    /// ## Errors
    /// Returns the backend error after raising an error notification.
    #[tracing::instrument(skip(self), fields(wedding_id = %self.ctx.wedding_id))]
    pub async fn save(&mut self) -> ServiceResult<()> {
        let result = save_record(self.ctx.backend.as_ref(), &self.settings).await;
        match result {
            Ok(saved) => {
                self.settings = saved;
                self.ctx
                    .notify_success("Background saved", "Your background settings have been updated");
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to save background");
                self.ctx.notify_error("Error", "Failed to save background settings");
                Err(e.into())
            }
        }
    }
}
