use payloads::responses::Shoe;
use yew::prelude::*;

use super::{PaginatedListHandle, use_paginated_list};

/// Hook to manage the paginated shoe inventory list. Supports search plus
/// arbitrary filters, e.g. `status=low`.
#[hook]
pub fn use_shoes() -> PaginatedListHandle<Shoe> {
    use_paginated_list(|api_client, query| async move {
        let page = api_client.list_shoes(&query).await?;
        Ok((page.shoes, page.pagination))
    })
}
