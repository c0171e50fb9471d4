use salvo::http::StatusCode;
use salvo::{Depot, Request, Response, handler};
use uuid::Uuid;
use webinvite_db::model::{Event, EventChangeset};
use webinvite_service::panel::EventsPanel;
use webinvite_service::session::EditingSession;

use super::scope::{SaveItemRequest, SessionScope, parse_body, render_error, uuid_param};
use crate::error::{AppError, AppResult};

async fn save_event(
    session: &EditingSession,
    body: &SaveItemRequest<EventChangeset>,
) -> AppResult<Event> {
    let mut panel: EventsPanel = session.panel().await;
    let index = match body.id {
        Some(id) => panel
            .position(id)
            .ok_or_else(|| AppError::NotFound(format!("event {id}")))?,
        None => panel.add_event(),
    };
    panel.update_event(index, &body.changes)?;
    panel.save_event(index).await?;
    panel
        .events()
        .get(index)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("event #{index}")))
}

async fn remove_event(session: &EditingSession, event_id: Uuid) -> AppResult<Uuid> {
    let mut panel: EventsPanel = session.panel().await;
    let index = panel
        .position(event_id)
        .ok_or_else(|| AppError::NotFound(format!("event {event_id}")))?;
    panel.delete_event(index).await?;
    Ok(event_id)
}

/// ## Summary
/// POST /api/weddings/{id}/events - Create an event, or update the one named by `id`
///
/// ## Errors
/// Returns HTTP 400 if the body is invalid
/// Returns HTTP 404 if the invitation or event does not exist
/// Returns HTTP 500 if the backend rejects the save
#[handler]
pub async fn save(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let body: SaveItemRequest<EventChangeset> = match parse_body(req).await {
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
    let result = save_event(&scope.session, &body).await;
    scope.finish(res, status, result);
}

/// ## Summary
/// DELETE /api/weddings/{id}/events/{item_id} - Remove an event
///
/// ## Errors
/// Returns HTTP 404 if the invitation or event does not exist
/// Returns HTTP 500 if the backend rejects the delete
#[handler]
pub async fn remove(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let event_id = match uuid_param(req, "item_id") {
        Ok(id) => id,
        Err(e) => return render_error(res, &e, Vec::new()),
    };
    let scope = match SessionScope::open(req, depot).await {
        Ok(scope) => scope,
        Err(e) => return render_error(res, &e, Vec::new()),
    };
    let result = remove_event(&scope.session, event_id).await;
    scope.finish(res, StatusCode::OK, result);
}
