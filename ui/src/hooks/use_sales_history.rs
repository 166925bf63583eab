use payloads::responses::Sale;
use yew::prelude::*;

use super::{PaginatedListHandle, use_paginated_list};

/// Hook to manage the paginated sales history list.
#[hook]
pub fn use_sales_history() -> PaginatedListHandle<Sale> {
    use_paginated_list(|api_client, query| async move {
        let page = api_client.list_sales(&query).await?;
        Ok((page.sales, page.pagination))
    })
}
