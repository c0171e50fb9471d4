mod app_specific;
pub mod weddings;

use salvo::Router;

pub use webinvite_core::constants::{
    API_ROUTE_COMPONENT, API_ROUTE_PREFIX, WEDDINGS_ROUTE_COMPONENT, WEDDINGS_ROUTE_PREFIX,
};

/// ## Summary
/// Constructs the JSON API router.
#[must_use]
pub fn routes() -> Router {
    Router::with_path(API_ROUTE_COMPONENT)
        .push(app_specific::routes())
        .push(weddings::routes())
}
