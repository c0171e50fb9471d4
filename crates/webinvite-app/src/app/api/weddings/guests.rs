use salvo::http::StatusCode;
use salvo::{Depot, Request, Response, handler};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use webinvite_db::model::Guest;
use webinvite_service::panel::GuestsPanel;
use webinvite_service::panel::guests::invitation_link;
use webinvite_service::session::EditingSession;

use super::scope::{SessionScope, parse_body, render_error, uuid_param};
use crate::config::get_config_from_depot;
use crate::error::{AppError, AppResult};

/// ## Summary
/// Add guest request payload
#[derive(Debug, Deserialize)]
pub struct AddGuestRequest {
    pub full_name: String,
}

/// ## Summary
/// A guest together with its shareable RSVP link
#[derive(Debug, Serialize)]
pub struct GuestResponse {
    #[serde(flatten)]
    pub guest: Guest,
    pub status_label: &'static str,
    pub invitation_link: String,
}

async fn add_guest(
    session: &EditingSession,
    full_name: &str,
    origin: &str,
) -> AppResult<GuestResponse> {
    let mut panel: GuestsPanel = session.panel().await;
    let guest = panel.add_guest(full_name).await?.clone();
    Ok(GuestResponse {
        status_label: guest.rsvp_status.guest_list_label(),
        invitation_link: invitation_link(origin, &guest.invitation_code),
        guest,
    })
}

async fn remove_guest(session: &EditingSession, guest_id: Uuid) -> AppResult<Uuid> {
    let mut panel: GuestsPanel = session.panel().await;
    let index = panel
        .position(guest_id)
        .ok_or_else(|| AppError::NotFound(format!("guest {guest_id}")))?;
    panel.delete_guest(index).await?;
    Ok(guest_id)
}

/// ## Summary
/// POST /api/weddings/{id}/guests - Add a guest by name
///
/// ## Errors
/// Returns HTTP 400 if the body is invalid or the name is blank
/// Returns HTTP 404 if the invitation does not exist
/// Returns HTTP 500 if the backend rejects the insert
#[handler]
pub async fn add(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let body: AddGuestRequest = match parse_body(req).await {
        Ok(body) => body,
        Err(e) => return render_error(res, &e, Vec::new()),
    };
    let origin = match get_config_from_depot(depot) {
        Ok(settings) => settings.server.origin(),
        Err(e) => return render_error(res, &e, Vec::new()),
    };
    let scope = match SessionScope::open(req, depot).await {
        Ok(scope) => scope,
        Err(e) => return render_error(res, &e, Vec::new()),
    };
    let result = add_guest(&scope.session, &body.full_name, &origin).await;
    scope.finish(res, StatusCode::CREATED, result);
}

/// ## Summary
/// DELETE /api/weddings/{id}/guests/{item_id} - Remove a guest
///
/// ## Errors
/// Returns HTTP 404 if the invitation or guest does not exist
/// Returns HTTP 500 if the backend rejects the delete
#[handler]
pub async fn remove(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let guest_id = match uuid_param(req, "item_id") {
        Ok(id) => id,
        Err(e) => return render_error(res, &e, Vec::new()),
    };
    let scope = match SessionScope::open(req, depot).await {
        Ok(scope) => scope,
        Err(e) => return render_error(res, &e, Vec::new()),
    };
    let result = remove_guest(&scope.session, guest_id).await;
    scope.finish(res, StatusCode::OK, result);
}
