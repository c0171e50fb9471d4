use webinvite_db::db::records::update_partial;
use webinvite_db::db::{Filter, Table};
use webinvite_db::model::{Wedding, WeddingChangeset};

use super::{Panel, PanelContext};
use crate::error::ServiceResult;

/// Quote or verse shown under the couple's names.
pub struct QuotePanel {
    ctx: PanelContext,
    quote: Option<String>,
    author: Option<String>,
}

/// Blank input clears the field.
fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| value.to_string())
}

impl Panel for QuotePanel {
    const NAME: &'static str = "quote";

    fn new(ctx: PanelContext) -> Self {
        Self {
            ctx,
            quote: None,
            author: None,
        }
    }

    async fn mount(&mut self) {
        let filter = Filter::Id(self.ctx.wedding_id);
        if let Some(Some(wedding)) = self.ctx.load_one::<Wedding>(Self::NAME, filter).await {
            self.quote = wedding.quote;
            self.author = wedding.quote_author;
            self.ctx.preview.set_invitation_fields(&self.changeset());
        }
    }
}

impl QuotePanel {
    #[must_use]
    pub fn quote(&self) -> Option<&str> {
        self.quote.as_deref()
    }

    #[must_use]
    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    fn changeset(&self) -> WeddingChangeset {
        WeddingChangeset {
            quote: Some(self.quote.clone()),
            quote_author: Some(self.author.clone()),
            ..WeddingChangeset::default()
        }
    }

    pub fn set_quote(&mut self, quote: &str) {
        self.quote = non_blank(quote);
        self.ctx.preview.set_invitation_fields(&WeddingChangeset {
            quote: Some(self.quote.clone()),
            ..WeddingChangeset::default()
        });
    }

    pub fn set_author(&mut self, author: &str) {
        self.author = non_blank(author);
        self.ctx.preview.set_invitation_fields(&WeddingChangeset {
            quote_author: Some(self.author.clone()),
            ..WeddingChangeset::default()
        });
    }

    /// ## Summary
    /// Writes the quote and its author to the invitation row.
    ///
    /// ## Errors
    /// Returns the backend error after raising an error notification.
    #[tracing::instrument(skip(self), fields(wedding_id = %self.ctx.wedding_id))]
    pub async fn save(&mut self) -> ServiceResult<()> {
        let changes = self.changeset();
        let result = update_partial(
            self.ctx.backend.as_ref(),
            Table::Weddings,
            self.ctx.wedding_id,
            &changes,
        )
        .await;
        match result {
            Ok(()) => {
                self.ctx.notify_success("Quote saved", "Your quote has been updated");
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to save quote");
                self.ctx.notify_error("Error", "Failed to save quote");
                Err(e.into())
            }
        }
    }
}
