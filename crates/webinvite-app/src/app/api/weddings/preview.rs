use salvo::http::StatusCode;
use salvo::{Depot, Request, Response, handler};

use super::scope::{SessionScope, render_error};

/// ## Summary
/// GET /api/weddings/{id}/preview - The preview view model of an invitation
///
/// Every panel is mounted once first, so the preview reflects the backend
/// merged over the last local snapshot.
///
/// ## Errors
/// Returns HTTP 404 if the invitation does not exist
#[handler]
pub async fn preview(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let scope = match SessionScope::open(req, depot).await {
        Ok(scope) => scope,
        Err(e) => return render_error(res, &e, Vec::new()),
    };
    scope.session.refresh().await;
    let view = scope.session.render();
    scope.finish(res, StatusCode::OK, Ok(view));
}
