use payloads::{requests, responses::AuthSession};
use yew::prelude::*;

use super::{SubmitAuth, SubmitHandle, use_submit};
use crate::hooks::use_push_route;
use crate::{Route, session};

/// Hook to sign in. Stores the returned token and profile in the session
/// and navigates to the dashboard.
#[hook]
pub fn use_login() -> SubmitHandle<requests::LoginCredentials> {
    let push_route = use_push_route();

    let on_success = Callback::from(move |auth: AuthSession| {
        session::set(auth.token, auth.user);
        push_route.emit(Route::Dashboard);
    });

    use_submit(
        SubmitAuth::NotRequired,
        "Signed in.",
        on_success,
        |api_client, request| async move { api_client.login(&request).await },
    )
}

/// Hook to create an account. On success the new credentials are used to
/// sign in immediately, so the handler is the same as `use_login`'s.
#[hook]
pub fn use_signup() -> SubmitHandle<requests::Signup> {
    let push_route = use_push_route();

    let on_success = Callback::from(move |auth: AuthSession| {
        session::set(auth.token, auth.user);
        push_route.emit(Route::Dashboard);
    });

    use_submit(
        SubmitAuth::NotRequired,
        "Account created.",
        on_success,
        |api_client, request: requests::Signup| async move {
            api_client.signup(&request).await?;
            let credentials = requests::LoginCredentials {
                email: request.email,
                password: request.password,
            };
            api_client.login(&credentials).await
        },
    )
}
