use payloads::responses::MonthlySales;
use yew::prelude::*;

use super::{AuthedFetchHandle, use_authed_fetch};

/// Hook to fetch one month's sales figures.
///
/// Defaults to the current month when the caller omits the period.
#[hook]
pub fn use_monthly_sales(
    period: Option<(i16, i8)>,
) -> AuthedFetchHandle<MonthlySales> {
    use_authed_fetch(period, move |api_client| async move {
        let (year, month) = period.unwrap_or_else(current_year_month);
        api_client.monthly_sales(year, month).await
    })
}

fn current_year_month() -> (i16, i8) {
    let now = jiff::Zoned::now();
    (now.year(), now.month())
}
