use payloads::responses::UserProfile;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::hooks::use_push_route;
use crate::session::Session;
use crate::Route;

/// Gate for protected pages. Sends the view to the sign-in route when no
/// credential is stored, and returns the signed-in profile once the
/// session refresh has delivered it.
#[hook]
pub fn use_require_auth() -> Option<UserProfile> {
    let (session, _) = use_store::<Session>();
    let push_route = use_push_route();

    use_effect_with(session.token.is_none(), move |missing| {
        if *missing {
            push_route.emit(Route::Login);
        }
    });

    session.user.clone()
}
