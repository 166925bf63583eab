use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

/// Navigation that behaves like a full page load: push the route, then
/// reset the scroll position so list and detail pages open at the top
/// instead of wherever the previous page was scrolled to.
#[hook]
pub fn use_push_route() -> Callback<Route> {
    let navigator = use_navigator();

    Callback::from(move |route: Route| {
        let Some(navigator) = &navigator else {
            tracing::error!(
                ?route,
                "router context missing, navigation dropped"
            );
            return;
        };
        tracing::debug!(?route, "navigating");
        navigator.push(&route);
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    })
}
