use salvo::http::StatusCode;
use salvo::{Depot, Request, Response, handler};
use uuid::Uuid;
use webinvite_db::model::{Gift, GiftChangeset};
use webinvite_service::panel::GiftsPanel;
use webinvite_service::session::EditingSession;

use super::scope::{SaveItemRequest, SessionScope, parse_body, render_error, uuid_param};
use crate::error::{AppError, AppResult};

async fn save_gift(
    session: &EditingSession,
    body: &SaveItemRequest<GiftChangeset>,
) -> AppResult<Gift> {
    let mut panel: GiftsPanel = session.panel().await;
    let index = match body.id {
        Some(id) => panel
            .position(id)
            .ok_or_else(|| AppError::NotFound(format!("gift {id}")))?,
        None => panel.add_gift(),
    };
    panel.update_gift(index, &body.changes)?;
    panel.save_gift(index).await?;
    panel
        .gifts()
        .get(index)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("gift #{index}")))
}

async fn remove_gift(session: &EditingSession, gift_id: Uuid) -> AppResult<Uuid> {
    let mut panel: GiftsPanel = session.panel().await;
    let index = panel
        .position(gift_id)
        .ok_or_else(|| AppError::NotFound(format!("gift {gift_id}")))?;
    panel.delete_gift(index).await?;
    Ok(gift_id)
}

/// ## Summary
/// POST /api/weddings/{id}/gifts - Create a gift, or update the one named by `id`
///
/// ## Errors
/// Returns HTTP 400 if the body is invalid
/// Returns HTTP 404 if the invitation or gift does not exist
/// Returns HTTP 500 if the backend rejects the save
#[handler]
pub async fn save(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let body: SaveItemRequest<GiftChangeset> = match parse_body(req).await {
        Ok(body) => body,
        Err(e) => return render_error(res, &e, Vec::new()),
    };
    let scope = match SessionScope::open(req, depot).await {
        Ok(scope) => scope,
        Err(e) => return render_error(res, &e, Vec::new()),
    };
    let status = if body.id.is_some() {
        StatusCode::OK
    } else {
        StatusCode::CREATED
    };
    let result = save_gift(&scope.session, &body).await;
    scope.finish(res, status, result);
}

/// ## Summary
/// DELETE /api/weddings/{id}/gifts/{item_id} - Remove a gift
///
/// ## Errors
/// Returns HTTP 404 if the invitation or gift does not exist
/// Returns HTTP 500 if the backend rejects the delete
#[handler]
pub async fn remove(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let gift_id = match uuid_param(req, "item_id") {
        Ok(id) => id,
        Err(e) => return render_error(res, &e, Vec::new()),
    };
    let scope = match SessionScope::open(req, depot).await {
        Ok(scope) => scope,
        Err(e) => return render_error(res, &e, Vec::new()),
    };
    let result = remove_gift(&scope.session, gift_id).await;
    scope.finish(res, StatusCode::OK, result);
}
