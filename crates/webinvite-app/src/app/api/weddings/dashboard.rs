use std::sync::Arc;

use salvo::http::StatusCode;
use salvo::{Depot, Request, Response, handler};
use serde::Deserialize;
use uuid::Uuid;
use webinvite_db::model::Wedding;
use webinvite_service::dashboard::Dashboard;
use webinvite_service::notify::NotificationQueue;

use super::scope::{parse_body, render_data, render_error};
use crate::backend_handler::{get_backend_from_depot, get_storage_from_depot};
use crate::error::{AppError, AppResult};

/// ## Summary
/// Create wedding request payload
#[derive(Debug, Deserialize)]
pub struct CreateWeddingRequest {
    pub owner: Uuid,
}

fn dashboard(depot: &Depot, owner: Uuid, notifications: &NotificationQueue) -> AppResult<Dashboard> {
    Ok(Dashboard::new(
        owner,
        get_backend_from_depot(depot)?,
        get_storage_from_depot(depot)?,
        Arc::new(notifications.clone()),
    ))
}

async fn list_weddings(
    req: &mut Request,
    depot: &Depot,
    notifications: &NotificationQueue,
) -> AppResult<Vec<Wedding>> {
    let owner = req
        .query::<String>("owner")
        .and_then(|raw| Uuid::parse_str(&raw).ok())
        .ok_or_else(|| AppError::InvalidRequest("owner must be a UUID".to_string()))?;
    let mut dashboard = dashboard(depot, owner, notifications)?;
    dashboard.load().await?;
    Ok(dashboard.weddings().to_vec())
}

/// ## Summary
/// GET /api/weddings?owner=<uuid> - The owner's invitations, newest first
///
/// ## Errors
/// Returns HTTP 400 if `owner` is missing or malformed
/// Returns HTTP 500 if the backend call fails
#[handler]
pub async fn list(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let notifications = NotificationQueue::new();
    match list_weddings(req, depot, &notifications).await {
        Ok(weddings) => render_data(res, StatusCode::OK, weddings, notifications.drain()),
        Err(e) => render_error(res, &e, notifications.drain()),
    }
}

async fn create_wedding(
    req: &mut Request,
    depot: &Depot,
    notifications: &NotificationQueue,
) -> AppResult<Wedding> {
    let body: CreateWeddingRequest = parse_body(req).await?;
    let mut dashboard = dashboard(depot, body.owner, notifications)?;
    let wedding = dashboard.create_wedding().await?.wedding().clone();
    Ok(wedding)
}

/// ## Summary
/// POST /api/weddings - Create an invitation with placeholder names
///
/// ## Errors
/// Returns HTTP 400 if the body is invalid
/// Returns HTTP 500 if the backend call fails
#[handler]
pub async fn create(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let notifications = NotificationQueue::new();
    match create_wedding(req, depot, &notifications).await {
        Ok(wedding) => render_data(res, StatusCode::CREATED, wedding, notifications.drain()),
        Err(e) => render_error(res, &e, notifications.drain()),
    }
}
