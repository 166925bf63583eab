use payloads::responses::UserProfile;
use yew::prelude::*;

use super::{PaginatedListHandle, use_paginated_list};

/// Hook to manage the paginated sellers list.
#[hook]
pub fn use_users() -> PaginatedListHandle<UserProfile> {
    use_paginated_list(|api_client, query| async move {
        let page = api_client.list_users(&query).await?;
        Ok((page.users, page.pagination))
    })
}
