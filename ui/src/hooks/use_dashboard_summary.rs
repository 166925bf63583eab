use payloads::responses::DashboardSummary;
use yew::prelude::*;

use super::{AuthedFetchHandle, use_authed_fetch};

/// Hook to fetch the seller dashboard's top-line numbers.
#[hook]
pub fn use_dashboard_summary() -> AuthedFetchHandle<DashboardSummary> {
    use_authed_fetch((), |api_client| async move {
        api_client.dashboard_summary().await
    })
}
