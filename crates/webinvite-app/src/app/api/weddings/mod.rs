//! `/api/weddings`: the dashboard and one route per panel action.
//!
//! Every panel route opens an editing session for the invitation, mounts the
//! panel it needs, applies the edit, saves, and closes the session again.
//! Notifications raised along the way are returned with the response.

mod dashboard;
mod events;
mod gifts;
mod guests;
mod preview;
pub(crate) mod scope;
mod settings;

use salvo::Router;
use webinvite_core::constants::WEDDINGS_ROUTE_COMPONENT;

#[must_use]
pub fn routes() -> Router {
    Router::with_path(WEDDINGS_ROUTE_COMPONENT)
        .get(dashboard::list)
        .post(dashboard::create)
        .push(
            Router::with_path("{id}")
                .push(Router::with_path("preview").get(preview::preview))
                .push(Router::with_path("background").put(settings::save_background))
                .push(Router::with_path("music").put(settings::save_music))
                .push(Router::with_path("quote").put(settings::save_quote))
                .push(
                    Router::with_path("guests")
                        .post(guests::add)
                        .push(Router::with_path("{item_id}").delete(guests::remove)),
                )
                .push(
                    Router::with_path("events")
                        .post(events::save)
                        .push(Router::with_path("{item_id}").delete(events::remove)),
                )
                .push(
                    Router::with_path("gifts")
                        .post(gifts::save)
                        .push(Router::with_path("{item_id}").delete(gifts::remove)),
                ),
        )
}
