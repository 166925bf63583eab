use payloads::{ShoeId, responses::Shoe};
use yew::prelude::*;

use super::{AuthedFetchHandle, use_authed_fetch};

/// Hook to fetch a single shoe, refetching when the id changes.
#[hook]
pub fn use_shoe(shoe_id: ShoeId) -> AuthedFetchHandle<Shoe> {
    use_authed_fetch(shoe_id, move |api_client| async move {
        api_client.get_shoe(&shoe_id).await
    })
}
