use yew::prelude::*;

use crate::hooks::use_push_route;
use crate::{Route, get_api_client, session};

/// Signs out: tells the backend, clears the session, and navigates to the
/// sign-in route. The server call is best effort; the local credential is
/// deleted either way.
#[hook]
pub fn use_logout() -> Callback<MouseEvent> {
    let push_route = use_push_route();

    Callback::from(move |_| {
        let push_route = push_route.clone();

        yew::platform::spawn_local(async move {
            let api_client = get_api_client();
            let _ = api_client.logout().await;

            session::clear();
            push_route.emit(Route::Login);
        });
    })
}
