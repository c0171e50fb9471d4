use std::sync::Arc;

use salvo::http::StatusCode;
use salvo::writing::Json;
use salvo::{Depot, Request, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use webinvite_db::db::Filter;
use webinvite_db::db::records::fetch_optional;
use webinvite_db::model::Wedding;
use webinvite_service::notify::{Notification, NotificationQueue};
use webinvite_service::session::EditingSession;

use crate::backend_handler::{get_backend_from_depot, get_storage_from_depot};
use crate::error::{AppError, AppResult};

/// ## Summary
/// Error response payload
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub notifications: Vec<Notification>,
}

/// ## Summary
/// Success response payload
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub data: T,
    pub notifications: Vec<Notification>,
}

/// Body of the item save routes. Without an `id` a new item is created.
#[derive(Debug, Deserialize)]
pub struct SaveItemRequest<C> {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub changes: C,
}

pub fn render_error(res: &mut Response, err: &AppError, notifications: Vec<Notification>) {
    let status = err.status_code();
    if status.is_server_error() {
        tracing::error!(error = %err, "Request failed");
    } else {
        tracing::debug!(error = %err, %status, "Request rejected");
    }
    res.status_code(status);
    res.render(Json(ErrorResponse {
        error: err.to_string(),
        notifications,
    }));
}

pub fn render_data<T: Serialize + Send>(
    res: &mut Response,
    status: StatusCode,
    data: T,
    notifications: Vec<Notification>,
) {
    res.status_code(status);
    res.render(Json(DataResponse {
        data,
        notifications,
    }));
}

/// ## Errors
/// Returns [`AppError::InvalidRequest`] if the parameter is missing or not a UUID.
pub fn uuid_param(req: &Request, name: &str) -> AppResult<Uuid> {
    req.param::<String>(name)
        .and_then(|raw| Uuid::parse_str(&raw).ok())
        .ok_or_else(|| AppError::InvalidRequest(format!("{name} must be a UUID")))
}

/// ## Errors
/// Returns [`AppError::InvalidRequest`] if the body is not valid JSON for `T`.
pub async fn parse_body<T: DeserializeOwned>(req: &mut Request) -> AppResult<T> {
    req.parse_json::<T>()
        .await
        .map_err(|e| AppError::InvalidRequest(e.to_string()))
}

/// An editing session opened for the lifetime of one request.
pub struct SessionScope {
    pub session: EditingSession,
    notifications: NotificationQueue,
}

impl SessionScope {
    /// ## Summary
    /// Loads the invitation named by the `id` path parameter and opens a
    /// session for it.
    ///
    /// ## Errors
    /// Returns an error if the id is malformed, the invitation does not
    /// exist, or the backend or storage is missing from the depot.
    #[tracing::instrument(skip_all)]
    pub async fn open(req: &mut Request, depot: &Depot) -> AppResult<Self> {
        let wedding_id = uuid_param(req, "id")?;
        let backend = get_backend_from_depot(depot)?;
        let storage = get_storage_from_depot(depot)?;

        let wedding = fetch_optional::<Wedding>(backend.as_ref(), Filter::Id(wedding_id))
            .await?
            .ok_or_else(|| AppError::NotFound(format!("wedding {wedding_id}")))?;

        let notifications = NotificationQueue::new();
        let session =
            EditingSession::open(wedding, backend, storage, Arc::new(notifications.clone()))?;
        Ok(Self {
            session,
            notifications,
        })
    }

    /// Closes the session and renders `result` with the collected notifications.
    pub fn finish<T: Serialize + Send>(
        self,
        res: &mut Response,
        status: StatusCode,
        result: AppResult<T>,
    ) {
        let notifications = self.notifications.drain();
        self.session.close();
        match result {
            Ok(data) => render_data(res, status, data, notifications),
            Err(e) => render_error(res, &e, notifications),
        }
    }
}
