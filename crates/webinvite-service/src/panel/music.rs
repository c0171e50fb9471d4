use webinvite_db::db::Filter;
use webinvite_db::db::records::save_record;
use webinvite_db::model::{Music, MusicChangeset};

use super::{Panel, PanelContext};
use crate::error::{ServiceError, ServiceResult};

pub const MAX_VOLUME: i32 = 100;

/// Background music settings.
pub struct MusicPanel {
    ctx: PanelContext,
    settings: Music,
}

impl Panel for MusicPanel {
    const NAME: &'static str = "music";

    fn new(ctx: PanelContext) -> Self {
        let settings = Music::defaults(ctx.wedding_id);
        Self { ctx, settings }
    }

    async fn mount(&mut self) {
        let filter = Filter::Wedding(self.ctx.wedding_id);
        if let Some(Some(music)) = self.ctx.load_one::<Music>(Self::NAME, filter).await {
            self.ctx.preview.set_music(&MusicChangeset::from(&music));
            self.settings = music;
        }
    }
}

impl MusicPanel {
    #[must_use]
    pub fn settings(&self) -> &Music {
        &self.settings
    }

    /// Applies `patch` locally and mirrors it into the preview. Volume is clamped to `0..=100`.
    pub fn edit(&mut self, patch: &MusicChangeset) {
        let mut patch = patch.clone();
        patch.volume = patch.volume.map(|v| v.clamp(0, MAX_VOLUME));
        patch.apply(&mut self.settings);
        self.ctx.preview.set_music(&patch);
    }

    pub fn set_file_path(&mut self, file_path: impl Into<String>) {
        self.edit(&MusicChangeset {
            file_path: Some(file_path.into()),
            ..MusicChangeset::default()
        });
    }

    pub fn set_volume(&mut self, volume: i32) {
        self.edit(&MusicChangeset {
            volume: Some(volume),
            ..MusicChangeset::default()
        });
    }

    pub fn set_autoplay(&mut self, autoplay: bool) {
        self.edit(&MusicChangeset {
            autoplay: Some(autoplay),
            ..MusicChangeset::default()
        });
    }

    /// ## Summary
    /// Inserts or updates the music row.
    ///
    /// ## Errors
    /// Returns [`ServiceError::ValidationError`] without calling the backend
    /// when no file is set, or the backend error. Both raise a notification.
    #[tracing::instrument(skip(self), fields(wedding_id = %self.ctx.wedding_id))]
    pub async fn save(&mut self) -> ServiceResult<()> {
        if self.settings.file_path.trim().is_empty() {
            self.ctx.notify_error("No music file", "Please upload a music file first");
            return Err(ServiceError::ValidationError(
                "music file is required".to_string(),
            ));
        }

        let result = save_record(self.ctx.backend.as_ref(), &self.settings).await;
        match result {
            Ok(saved) => {
                self.settings = saved;
                self.ctx
                    .notify_success("Music saved", "Your music settings have been updated");
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to save music");
                self.ctx.notify_error("Error", "Failed to save music settings");
                Err(e.into())
            }
        }
    }
}
