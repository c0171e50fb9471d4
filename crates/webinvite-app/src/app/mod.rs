pub mod api;
pub mod preview;

use salvo::Router;

/// ## Summary
/// Every route the server exposes: the JSON API and the rendered preview pages.
#[must_use]
pub fn routes() -> Router {
    Router::new().push(api::routes()).push(preview::routes())
}
