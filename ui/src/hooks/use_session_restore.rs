use reqwest::StatusCode;
use yew::prelude::*;

use crate::{get_api_client, session};

/// Restores a persisted credential on startup and refreshes the profile.
///
/// A rejected refresh means the stored token is no longer good, so it is
/// deleted; a network failure keeps the token so the user is not signed
/// out by a flaky connection.
#[hook]
pub fn use_session_restore() {
    use_effect_with((), |_| {
        session::restore();
        if session::current_token().is_none() {
            return;
        }
        yew::platform::spawn_local(async {
            let api_client = get_api_client();
            match api_client.refresh().await {
                Ok(envelope) => {
                    session::set(envelope.data.token, envelope.data.user);
                }
                Err(error) => {
                    if error.status() == Some(StatusCode::UNAUTHORIZED) {
                        session::clear();
                    }
                    tracing::debug!(%error, "session refresh failed");
                }
            }
        });
    });
}
