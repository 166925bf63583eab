use payloads::responses::AnnualSales;
use yew::prelude::*;

use super::{AuthedFetchHandle, use_authed_fetch};

/// Hook to fetch a year's sales figures, bucketed by month.
///
/// Defaults to the current year when the caller omits one.
#[hook]
pub fn use_annual_sales(year: Option<i16>) -> AuthedFetchHandle<AnnualSales> {
    use_authed_fetch(year, move |api_client| async move {
        let year = year.unwrap_or_else(|| jiff::Zoned::now().year());
        api_client.annual_sales(year).await
    })
}
