use salvo::http::StatusCode;
use salvo::{Depot, Request, Response, handler};
use serde::{Deserialize, Serialize};
use webinvite_db::model::{Background, BackgroundChangeset, Music, MusicChangeset};
use webinvite_service::panel::{BackgroundPanel, MusicPanel, QuotePanel};
use webinvite_service::session::EditingSession;

use super::scope::{SessionScope, parse_body, render_error};
use crate::error::AppResult;

/// ## Summary
/// Quote request payload; absent fields are left as they are
#[derive(Debug, Default, Deserialize)]
pub struct QuoteRequest {
    pub quote: Option<String>,
    pub author: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub quote: Option<String>,
    pub author: Option<String>,
}

async fn apply_background(
    session: &EditingSession,
    patch: &BackgroundChangeset,
) -> AppResult<Background> {
    let mut panel: BackgroundPanel = session.panel().await;
    panel.edit(patch);
    panel.save().await?;
    Ok(panel.settings().clone())
}

async fn apply_music(session: &EditingSession, patch: &MusicChangeset) -> AppResult<Music> {
    let mut panel: MusicPanel = session.panel().await;
    panel.edit(patch);
    panel.save().await?;
    Ok(panel.settings().clone())
}

async fn apply_quote(session: &EditingSession, body: &QuoteRequest) -> AppResult<QuoteResponse> {
    let mut panel: QuotePanel = session.panel().await;
    if let Some(quote) = &body.quote {
        panel.set_quote(quote);
    }
    if let Some(author) = &body.author {
        panel.set_author(author);
    }
    panel.save().await?;
    Ok(QuoteResponse {
        quote: panel.quote().map(str::to_string),
        author: panel.author().map(str::to_string),
    })
}

/// ## Summary
/// PUT /api/weddings/{id}/background - Merge and save background settings
///
/// ## Errors
/// Returns HTTP 400 if the body is invalid
/// Returns HTTP 404 if the invitation does not exist
/// Returns HTTP 500 if the backend rejects the save
#[handler]
pub async fn save_background(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let patch: BackgroundChangeset = match parse_body(req).await {
        Ok(patch) => patch,
        Err(e) => return render_error(res, &e, Vec::new()),
    };
    let scope = match SessionScope::open(req, depot).await {
        Ok(scope) => scope,
        Err(e) => return render_error(res, &e, Vec::new()),
    };
    let result = apply_background(&scope.session, &patch).await;
    scope.finish(res, StatusCode::OK, result);
}

/// ## Summary
/// PUT /api/weddings/{id}/music - Merge and save music settings
///
/// ## Errors
/// Returns HTTP 400 if the body is invalid or no music file is set
/// Returns HTTP 404 if the invitation does not exist
/// Returns HTTP 500 if the backend rejects the save
#[handler]
pub async fn save_music(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let patch: MusicChangeset = match parse_body(req).await {
        Ok(patch) => patch,
        Err(e) => return render_error(res, &e, Vec::new()),
    };
    let scope = match SessionScope::open(req, depot).await {
        Ok(scope) => scope,
        Err(e) => return render_error(res, &e, Vec::new()),
    };
    let result = apply_music(&scope.session, &patch).await;
    scope.finish(res, StatusCode::OK, result);
}

/// ## Summary
/// PUT /api/weddings/{id}/quote - Set and save the quote and its author
///
/// ## Errors
/// Returns HTTP 400 if the body is invalid
/// Returns HTTP 404 if the invitation does not exist
/// Returns HTTP 500 if the backend rejects the save
#[handler]
pub async fn save_quote(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let body: QuoteRequest = match parse_body(req).await {
        Ok(body) => body,
        Err(e) => return render_error(res, &e, Vec::new()),
    };
    let scope = match SessionScope::open(req, depot).await {
        Ok(scope) => scope,
        Err(e) => return render_error(res, &e, Vec::new()),
    };
    let result = apply_quote(&scope.session, &body).await;
    scope.finish(res, StatusCode::OK, result);
}
