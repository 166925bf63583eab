use payloads::{UserId, responses::UserProfile};
use yew::prelude::*;

use super::{AuthedFetchHandle, use_authed_fetch};

/// Hook to fetch a single seller's profile.
#[hook]
pub fn use_user(user_id: UserId) -> AuthedFetchHandle<UserProfile> {
    use_authed_fetch(user_id, move |api_client| async move {
        api_client.get_user(&user_id).await
    })
}
