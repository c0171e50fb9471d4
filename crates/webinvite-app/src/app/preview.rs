//! `/preview/{id}`: the invitation rendered as a standalone page.

use salvo::http::StatusCode;
use salvo::writing::Text;
use salvo::{Depot, Request, Response, Router, handler};
use webinvite_core::constants::PREVIEW_ROUTE_COMPONENT;
use webinvite_service::render::{EMPTY_MESSAGE, PreviewView, render_html};

use super::api::weddings::scope::SessionScope;

/// ## Summary
/// GET /preview/{id} - HTML preview of an invitation
///
/// Unknown or malformed ids render the empty preview with HTTP 404.
#[handler]
async fn preview_page(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    match SessionScope::open(req, depot).await {
        Ok(scope) => {
            scope.session.refresh().await;
            let html = scope.session.render_html();
            scope.session.close();
            res.render(Text::Html(html));
        }
        Err(e) => {
            tracing::debug!(error = %e, "No invitation to preview");
            let status = match e.status_code() {
                StatusCode::BAD_REQUEST => StatusCode::NOT_FOUND,
                other => other,
            };
            res.status_code(status);
            res.render(Text::Html(render_html(&PreviewView::Empty {
                message: EMPTY_MESSAGE,
            })));
        }
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(PREVIEW_ROUTE_COMPONENT).push(Router::with_path("{id}").get(preview_page))
}
